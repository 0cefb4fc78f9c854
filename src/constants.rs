//! Application constants for the trip itinerary processor
//!
//! This module contains the fixed export-format conventions: the month
//! abbreviation table, the century rule, and the column layout of the
//! itinerary CSV export.

// =============================================================================
// Date Format Conventions
// =============================================================================

/// Fixed 12-entry month abbreviation table for "DD-Mon-YY" date keys.
///
/// The index is the zero-based month number; the stored form is the canonical
/// display casing. Decoding matches tokens against this table
/// case-insensitively, encoding always emits the table form.
pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Century base for two-digit years: "YY" maps to 2000 + YY.
///
/// Years outside 2000-2099 are not representable in the key format.
pub const CENTURY_BASE: i32 = 2000;

// =============================================================================
// CSV Export Layout
// =============================================================================

/// Fixed column indices of the itinerary export.
///
/// Only the two date columns are resolved by header name (the export has
/// reordered them between versions); everything else is positional.
pub mod columns {
    /// Destination / grouping key. An empty value marks a continuation row.
    pub const DESTINATION: usize = 0;

    /// Trip duration in days
    pub const DAYS: usize = 1;

    /// Travel time free text
    pub const TRAVEL_TIME: usize = 4;

    /// Flight details free text
    pub const FLIGHT: usize = 5;

    /// Booking status free text
    pub const STATUS: usize = 6;

    /// Accommodation free text
    pub const ACCOMMODATION: usize = 7;

    /// Comments; accumulated across continuation rows
    pub const COMMENTS: usize = 8;

    /// Recommendations; accumulated across continuation rows
    pub const RECOMMENDATIONS: usize = 9;

    /// Additional notes
    pub const NOTES: usize = 10;
}

/// Header label of the range-start date column (matched case-insensitively)
pub const DATE_FROM_HEADER: &str = "date from";

/// Header label of the range-end date column (matched case-insensitively)
pub const DATE_TO_HEADER: &str = "date to";

/// First-field marker of summary rows emitted by the export
pub const SUMMARY_ROW_MARKER: &str = "Total";

// =============================================================================
// Resource Defaults
// =============================================================================

/// Default CSV resource name when no source is specified
pub const DEFAULT_CSV_RESOURCE: &str = "mytrip.csv";
