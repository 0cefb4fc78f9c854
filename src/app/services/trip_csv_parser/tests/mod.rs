//! Test utilities for itinerary CSV parser testing
//!
//! This module provides common fixtures shared across the parser test
//! modules.


/// Header line used by the fixtures, in the export's canonical column order
pub const TEST_HEADER: &str =
    "Destination,Days,Date From,Date To,Travel time,Flight,Status,Accommodation,Comments,Recommendations,Notes";

/// Helper to create a small complete itinerary export
pub fn create_test_itinerary_csv() -> String {
    format!(
        "{TEST_HEADER}\n\
         Paris,3,01-Jan-25,03-Jan-25,2h 10m,BA 332,Booked,Hotel du Nord,Pack light,Louvre,\n\
         ,,,,,,,,Line dries slowly,Le Comptoir,\n\
         Vienna,2,03-Jan-25,04-Jan-25,,OS 418,Planned,,,,\n\
         Total,5,,,,,,,,,\n"
    )
}

/// Helper to create an export with only a header row
pub fn create_header_only_csv() -> String {
    format!("{TEST_HEADER}\n")
}
