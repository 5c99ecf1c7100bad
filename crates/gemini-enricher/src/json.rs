//! Extracting a JSON payload from model output.
//!
//! JSON mode keeps the model honest most of the time, but responses still
//! arrive wrapped in markdown fences or with stray text around the payload.
//! The scan below finds the first balanced object or array and hands exactly
//! that slice to serde.

/// Extract JSON from a response that may contain markdown or other text.
pub fn extract_json(response: &str) -> &str {
    let trimmed = response.trim();

    // Payload already starts with a JSON delimiter
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        return extract_balanced(trimmed);
    }

    // Try to find JSON in a markdown code block
    if let Some(start) = trimmed.find("```json") {
        let json_start = start + 7;
        if let Some(end) = trimmed[json_start..].find("```") {
            let extracted = trimmed[json_start..json_start + end].trim();
            return extract_balanced(extracted);
        }
    }

    // Try to find JSON in a generic code block
    if let Some(start) = trimmed.find("```") {
        let after_backticks = &trimmed[start + 3..];
        // Skip optional language identifier
        let json_start = after_backticks.find('\n').map(|i| i + 1).unwrap_or(0);
        if let Some(end) = after_backticks[json_start..].find("```") {
            let extracted = after_backticks[json_start..json_start + end].trim();
            return extract_balanced(extracted);
        }
    }

    // Fall back to the first object or array opener in the text
    let starts = [trimmed.find('{'), trimmed.find('[')];
    if let Some(start) = starts.into_iter().flatten().min() {
        return extract_balanced(&trimmed[start..]);
    }

    trimmed
}

/// Extract a balanced JSON object or array from a string that starts with
/// `{` or `[`.
///
/// This handles cases where the model appends trailing characters, like
/// `[{"a": 1}]]` -> `[{"a": 1}]`.
fn extract_balanced(s: &str) -> &str {
    let (open, close) = match s.chars().next() {
        Some('{') => ('{', '}'),
        Some('[') => ('[', ']'),
        _ => return s,
    };

    let mut depth = 0;
    let mut in_string = false;
    let mut escape_next = false;

    for (i, ch) in s.char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }

        match ch {
            '\\' if in_string => {
                escape_next = true;
            }
            '"' => {
                in_string = !in_string;
            }
            c if c == open && !in_string => {
                depth += 1;
            }
            c if c == close && !in_string => {
                depth -= 1;
                if depth == 0 {
                    // Found the matching closing delimiter
                    return &s[..=i];
                }
            }
            _ => {}
        }
    }

    // If we didn't find balanced delimiters, return the original
    s
}
