//! CSV parser for itinerary export files
//!
//! This module turns the raw text of an itinerary CSV export into an ordered
//! sequence of normalized [`TripRecord`](crate::app::models::TripRecord)s.
//! The export is semi-structured: a trip may span several physical rows, with
//! continuation rows (empty destination column) carrying overflow comments
//! and recommendations, and the export also emits blank lines, repeated
//! lines, and "Total" summary rows that must be discarded.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - Parsing orchestration: line preparation and record assembly
//! - [`header`] - Header-name resolution of the two date columns
//! - [`record`] - Fold state turning data lines into trip records
//! - [`fields`] - Utility functions for positional field access
//! - [`stats`] - Parsing statistics and structured diagnostics
//!
//! ## Usage
//!
//! ```rust
//! use trip_itinerary::app::services::trip_csv_parser::TripCsvParser;
//!
//! # fn example() -> trip_itinerary::Result<()> {
//! let csv = "Destination,Days,Date From,Date To,Travel time,Flight,Status,\
//!            Accommodation,Comments,Recommendations,Notes\n\
//!            Paris,3,01-Jan-25,03-Jan-25,,,,,,,";
//! let result = TripCsvParser::new().parse(csv)?;
//!
//! assert_eq!(result.trips.len(), 1);
//! assert_eq!(result.trips[0].destination, "Paris");
//! # Ok(())
//! # }
//! ```

pub mod fields;
pub mod header;
pub mod parser;
pub mod record;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use header::HeaderLayout;
pub use parser::TripCsvParser;
pub use stats::{ParseResult, ParseStats};
