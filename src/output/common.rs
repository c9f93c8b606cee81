//! Common utilities for output formatters

/// Escape a value for CSV output
/// Handles commas, quotes, and line breaks according to RFC 4180
pub fn escape_csv(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
