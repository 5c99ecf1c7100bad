//! Share-URL to CSV export URL derivation.

use crate::error::IngestError;

/// Path fragment that precedes the sheet identifier in a share URL.
const SHEET_PATH_MARKER: &str = "spreadsheets/d/";

/// Derives the CSV export endpoint from a spreadsheet share URL.
///
/// The sheet identifier is the run of `[A-Za-z0-9_-]` characters following
/// `spreadsheets/d/`; the tab identifier comes from a `#gid=<n>` or
/// `&gid=<n>` fragment and defaults to `0`. Any URL without an extractable
/// sheet identifier is rejected.
pub fn csv_export_url(share_url: &str) -> Result<String, IngestError> {
    let sheet_id = sheet_id(share_url).ok_or_else(|| {
        IngestError::InvalidSource(format!("no sheet id in url: {}", share_url))
    })?;
    let gid = tab_id(share_url).unwrap_or("0");

    Ok(format!(
        "https://docs.google.com/spreadsheets/d/{}/export?format=csv&gid={}",
        sheet_id, gid
    ))
}

fn sheet_id(url: &str) -> Option<&str> {
    let start = url.find(SHEET_PATH_MARKER)? + SHEET_PATH_MARKER.len();
    let rest = &url[start..];
    let end = rest
        .find(|c: char| !is_id_char(c))
        .unwrap_or(rest.len());

    if end == 0 {
        None
    } else {
        Some(&rest[..end])
    }
}

fn is_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

fn tab_id(url: &str) -> Option<&str> {
    for (idx, _) in url.match_indices("gid=") {
        if idx == 0 || !matches!(url.as_bytes()[idx - 1], b'#' | b'&') {
            continue;
        }

        let digits = &url[idx + 4..];
        let end = digits
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(digits.len());
        if end > 0 {
            return Some(&digits[..end]);
        }
    }

    None
}
