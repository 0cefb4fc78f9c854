//! Header resolution for the itinerary export
//!
//! Only the two date columns are located by header name; the export has
//! shuffled their position between versions while the remaining columns are
//! stable and addressed by fixed index (see [`crate::constants::columns`]).

use crate::constants::{DATE_FROM_HEADER, DATE_TO_HEADER};
use crate::{Error, Result};

/// Resolved column positions of the name-addressed fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderLayout {
    /// Index of the "Date From" column
    pub date_from: usize,

    /// Index of the "Date To" column
    pub date_to: usize,
}

impl HeaderLayout {
    /// Resolve the date column positions from the header line.
    ///
    /// Header names are matched trimmed and case-insensitively. A header
    /// missing either date column makes the document structurally unusable
    /// and fails with [`Error::CsvFormat`]; there is no positional fallback.
    pub fn resolve(header_line: &str) -> Result<Self> {
        let date_from = find_column(header_line, DATE_FROM_HEADER).ok_or_else(|| {
            Error::csv_format(format!("header has no '{DATE_FROM_HEADER}' column"))
        })?;
        let date_to = find_column(header_line, DATE_TO_HEADER)
            .ok_or_else(|| Error::csv_format(format!("header has no '{DATE_TO_HEADER}' column")))?;

        Ok(HeaderLayout { date_from, date_to })
    }
}

/// Locate a column by case-insensitive, trimmed header-name match
fn find_column(header_line: &str, label: &str) -> Option<usize> {
    header_line
        .split(',')
        .position(|field| field.trim().eq_ignore_ascii_case(label))
}
