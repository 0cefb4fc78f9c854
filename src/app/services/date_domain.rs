//! Selectable date domain derivation
//!
//! Expands every trip's date range into individual calendar days and produces
//! the ordered, de-duplicated list of canonical date keys that the
//! presentation layer offers as filter choices.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use tracing::debug;

use super::date_codec;
use crate::app::models::TripRecord;

/// Build the ordered list of selectable date keys for a trip collection.
///
/// Every day from each trip's start through its end (inclusive) contributes
/// one entry; days shared by several trips collapse to one. A trip with an
/// undecodable endpoint contributes no days but stays in the main trip list;
/// an inverted range likewise contributes nothing.
///
/// De-duplication and ordering operate on the decoded day, not its text:
/// "05-Jan-25" must sort before "15-Jan-25" but also before "01-Feb-25", and
/// tolerated non-canonical spellings of the same day must collapse. The keys
/// are re-encoded to canonical form only at the boundary.
pub fn build_date_domain(trips: &[TripRecord]) -> Vec<String> {
    let mut days: BTreeSet<NaiveDate> = BTreeSet::new();

    for trip in trips {
        let Some((from, to)) = trip.date_range() else {
            debug!(
                "trip '{}' has an undecodable date range ('{}' .. '{}'), no days contributed",
                trip.destination, trip.date_from, trip.date_to
            );
            continue;
        };

        let mut day = from;
        while day <= to {
            days.insert(day);
            match day.succ_opt() {
                Some(next) => day = next,
                None => break,
            }
        }
    }

    days.into_iter().map(date_codec::encode).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trip(destination: &str, date_from: &str, date_to: &str) -> TripRecord {
        TripRecord {
            destination: destination.to_string(),
            days: 0,
            date_from: date_from.to_string(),
            date_to: date_to.to_string(),
            travel_time: None,
            flight: None,
            status: None,
            accommodation: None,
            comments: None,
            recommendations: None,
            notes: None,
        }
    }

    #[test]
    fn test_overlapping_trips_deduplicate() {
        let trips = vec![
            trip("Paris", "01-Jan-25", "02-Jan-25"),
            trip("Vienna", "02-Jan-25", "03-Jan-25"),
        ];
        assert_eq!(
            build_date_domain(&trips),
            vec!["01-Jan-25", "02-Jan-25", "03-Jan-25"]
        );
    }

    #[test]
    fn test_order_is_chronological_regardless_of_input_order() {
        let trips = vec![
            trip("Vienna", "02-Jan-25", "03-Jan-25"),
            trip("Paris", "01-Jan-25", "02-Jan-25"),
        ];
        assert_eq!(
            build_date_domain(&trips),
            vec!["01-Jan-25", "02-Jan-25", "03-Jan-25"]
        );
    }

    #[test]
    fn test_order_is_calendar_order_not_text_order() {
        // Textually "05-Jan-25" > "01-Feb-25" would be wrong
        let trips = vec![
            trip("A", "15-Jan-25", "15-Jan-25"),
            trip("B", "01-Feb-25", "01-Feb-25"),
            trip("C", "05-Jan-25", "05-Jan-25"),
        ];
        assert_eq!(
            build_date_domain(&trips),
            vec!["05-Jan-25", "15-Jan-25", "01-Feb-25"]
        );
    }

    #[test]
    fn test_non_canonical_spellings_collapse() {
        let trips = vec![
            trip("A", "05-JAN-25", "05-JAN-25"),
            trip("B", "5-jan-25", "5-jan-25"),
        ];
        assert_eq!(build_date_domain(&trips), vec!["05-Jan-25"]);
    }

    #[test]
    fn test_undecodable_range_contributes_nothing() {
        let trips = vec![
            trip("Broken", "01-Foo-25", "03-Jan-25"),
            trip("Paris", "01-Jan-25", "01-Jan-25"),
        ];
        assert_eq!(build_date_domain(&trips), vec!["01-Jan-25"]);
    }

    #[test]
    fn test_inverted_range_contributes_nothing() {
        let trips = vec![trip("Backwards", "03-Jan-25", "01-Jan-25")];
        assert!(build_date_domain(&trips).is_empty());
    }

    #[test]
    fn test_empty_trip_list() {
        assert!(build_date_domain(&[]).is_empty());
    }

    #[test]
    fn test_range_spans_month_boundary() {
        let trips = vec![trip("A", "30-Jan-25", "02-Feb-25")];
        assert_eq!(
            build_date_domain(&trips),
            vec!["30-Jan-25", "31-Jan-25", "01-Feb-25", "02-Feb-25"]
        );
    }
}
