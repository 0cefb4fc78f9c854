//! Field access utilities for itinerary export rows
//!
//! The export uses plain comma separation with no quoting, so a row is just
//! a comma split with every value trimmed. Short rows are common (trailing
//! empty columns are often omitted); a missing position reads as empty.

/// Split a data line into trimmed field values
pub fn split_values(line: &str) -> Vec<&str> {
    line.split(',').map(str::trim).collect()
}

/// Get the value at a position, treating missing positions as empty
pub fn value_at<'a>(values: &[&'a str], index: usize) -> &'a str {
    values.get(index).copied().unwrap_or("")
}

/// Get an optional text field: `None` when the position is empty or missing.
///
/// Absence is deliberately `None` rather than an empty string so downstream
/// rendering can tell "no section" from "blank section".
pub fn optional_text(values: &[&str], index: usize) -> Option<String> {
    let value = value_at(values, index);
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Get a required text field as an owned string, empty when missing
pub fn text(values: &[&str], index: usize) -> String {
    value_at(values, index).to_string()
}

/// Parse the duration column; unparsable values default to 0
pub fn parse_days(values: &[&str], index: usize) -> u32 {
    value_at(values, index).parse().unwrap_or(0)
}
