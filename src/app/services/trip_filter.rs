//! Trip filtering by selected calendar day
//!
//! Answers the selection query: which trips' date ranges contain the chosen
//! day. Pure and recomputed on every call; nothing is cached.

use tracing::debug;

use super::date_codec;
use crate::app::models::TripRecord;

/// Filter trips to those whose date range contains the selected day.
///
/// An absent selection, an empty trip collection, or an undecodable selection
/// key all yield an empty result rather than an error. Trips with an
/// undecodable endpoint are excluded; inverted ranges never match. Original
/// trip order is preserved.
pub fn filter_trips_by_date<'a>(
    trips: &'a [TripRecord],
    selected: Option<&str>,
) -> Vec<&'a TripRecord> {
    let Some(key) = selected else {
        return Vec::new();
    };
    if trips.is_empty() {
        return Vec::new();
    }

    let Some(day) = date_codec::decode(key) else {
        debug!("selected date key '{key}' does not decode, no trips match");
        return Vec::new();
    };

    trips.iter().filter(|trip| trip.covers(day)).collect()
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

    fn test_trips() -> Vec<TripRecord> {
        vec![
            trip("Paris", "01-Jan-25", "02-Jan-25"),
            trip("Vienna", "02-Jan-25", "03-Jan-25"),
        ]
    }

    #[test]
    fn test_shared_day_matches_both_trips_in_order() {
        let trips = test_trips();
        let matched = filter_trips_by_date(&trips, Some("02-Jan-25"));
        assert_eq!(matched.len(), 2);
        assert_eq!(matched[0].destination, "Paris");
        assert_eq!(matched[1].destination, "Vienna");
    }

    #[test]
    fn test_endpoint_days_are_inclusive() {
        let trips = test_trips();
        let matched = filter_trips_by_date(&trips, Some("01-Jan-25"));
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].destination, "Paris");

        let matched = filter_trips_by_date(&trips, Some("03-Jan-25"));
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].destination, "Vienna");
    }

    #[test]
    fn test_absent_selection_yields_empty() {
        let trips = test_trips();
        assert!(filter_trips_by_date(&trips, None).is_empty());
    }

    #[test]
    fn test_empty_trip_collection_yields_empty() {
        assert!(filter_trips_by_date(&[], Some("02-Jan-25")).is_empty());
    }

    #[test]
    fn test_day_outside_every_range_yields_empty() {
        let trips = test_trips();
        assert!(filter_trips_by_date(&trips, Some("10-Jan-25")).is_empty());
    }

    #[test]
    fn test_undecodable_selection_yields_empty() {
        let trips = test_trips();
        assert!(filter_trips_by_date(&trips, Some("02-Foo-25")).is_empty());
    }

    #[test]
    fn test_trip_with_undecodable_endpoint_is_excluded() {
        let trips = vec![
            trip("Broken", "01-Jan-25", "03-Bar-25"),
            trip("Paris", "01-Jan-25", "03-Jan-25"),
        ];
        let matched = filter_trips_by_date(&trips, Some("02-Jan-25"));
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].destination, "Paris");
    }

    #[test]
    fn test_inverted_range_never_matches() {
        let trips = vec![trip("Backwards", "03-Jan-25", "01-Jan-25")];
        for key in ["01-Jan-25", "02-Jan-25", "03-Jan-25"] {
            assert!(filter_trips_by_date(&trips, Some(key)).is_empty());
        }
    }

    #[test]
    fn test_non_canonical_selection_key_still_matches() {
        let trips = test_trips();
        let matched = filter_trips_by_date(&trips, Some("02-JAN-25"));
        assert_eq!(matched.len(), 2);
    }
}
