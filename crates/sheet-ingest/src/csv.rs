//! Defensive CSV parsing for spreadsheet exports.
//!
//! The export dialect is simple: fields containing commas are wrapped in
//! double quotes and nothing else is escaped, so a full CSV reader is more
//! dialect than this needs. Each line is split on commas that fall outside
//! a quoted run, then every field is trimmed and stripped of one
//! surrounding quote pair.

/// Parses export text into rows of cleaned fields.
///
/// Blank lines parse to an empty field list rather than being dropped, so
/// downstream row filters see them and reject them for missing columns.
/// The header row is NOT removed here; see
/// [`records_from_rows`](crate::records_from_rows).
pub fn parse_csv(text: &str) -> Vec<Vec<String>> {
    text.trim()
        .lines()
        .map(|line| {
            if line.trim().is_empty() {
                return Vec::new();
            }
            split_unquoted_commas(line)
                .into_iter()
                .map(clean_field)
                .collect()
        })
        .collect()
}

/// Split a line on commas, treating a `"` as toggling quoted state.
fn split_unquoted_commas(line: &str) -> Vec<&str> {
    let mut fields = Vec::new();
    let mut in_quotes = false;
    let mut field_start = 0;

    for (i, ch) in line.char_indices() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(&line[field_start..i]);
                field_start = i + 1;
            }
            _ => {}
        }
    }
    fields.push(&line[field_start..]);

    fields
}

/// Trim whitespace and at most one leading and one trailing quote.
fn clean_field(raw: &str) -> String {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix('"').unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix('"').unwrap_or(trimmed);
    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_rows() {
        let rows = parse_csv("a,b,c\n1,2,3");
        assert_eq!(rows, vec![vec!["a", "b", "c"], vec!["1", "2", "3"]]);
    }

    #[test]
    fn test_quoted_field_keeps_comma() {
        let rows = parse_csv(r#"name,comment
ana,"great service, fast delivery""#);
        assert_eq!(rows[1], vec!["ana", "great service, fast delivery"]);
    }

    #[test]
    fn test_fields_are_trimmed_and_unquoted() {
        let rows = parse_csv(r#"  a  , "b" ,"  c  ""#);
        // Whitespace inside the quotes survives; the quotes themselves do not.
        assert_eq!(rows[0], vec!["a", "b", "  c  "]);
    }

    #[test]
    fn test_blank_line_yields_empty_row() {
        let rows = parse_csv("a,b\n\n1,2");
        assert_eq!(rows.len(), 3);
        assert!(rows[1].is_empty());
    }

    #[test]
    fn test_crlf_line_endings() {
        let rows = parse_csv("a,b\r\n1,2\r\n");
        assert_eq!(rows, vec![vec!["a", "b"], vec!["1", "2"]]);
    }

    #[test]
    fn test_trailing_empty_field_kept() {
        let rows = parse_csv("a,b,");
        assert_eq!(rows[0], vec!["a", "b", ""]);
    }

    #[test]
    fn test_empty_quoted_field() {
        let rows = parse_csv(r#"a,"",b"#);
        assert_eq!(rows[0], vec!["a", "", "b"]);
    }

    #[test]
    fn test_multiple_quoted_fields_per_line() {
        let rows = parse_csv(r#""one, two","three, four",plain"#);
        assert_eq!(rows[0], vec!["one, two", "three, four", "plain"]);
    }

    #[test]
    fn test_whole_text_trimmed() {
        let rows = parse_csv("\n\na,b\n\n");
        assert_eq!(rows, vec![vec!["a", "b"]]);
    }
}
