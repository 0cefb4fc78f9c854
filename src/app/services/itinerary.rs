//! Itinerary ingestion and selection state
//!
//! Orchestrates the one-shot pipeline: fetch the CSV resource, parse it into
//! trip records, derive the selectable date domain, and set the initial
//! selection to the earliest day. After ingestion the trip collection is
//! immutable; changing the selection only recomputes the derived view.

use tracing::info;

use super::date_domain::build_date_domain;
use super::trip_csv_parser::{ParseStats, TripCsvParser};
use super::trip_filter::filter_trips_by_date;
use crate::app::adapters::resource::{self, CsvSource};
use crate::app::models::TripRecord;
use crate::Result;

/// A fully ingested itinerary with its derived date domain and selection
#[derive(Debug, Clone, Default)]
pub struct Itinerary {
    trips: Vec<TripRecord>,
    date_domain: Vec<String>,
    selected: Option<String>,
    stats: ParseStats,
}

impl Itinerary {
    /// Create an empty itinerary.
    ///
    /// This is the state a caller keeps after a failed resource fetch: no
    /// dates, no trips, no selection. All queries are valid against it.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build an itinerary from CSV text.
    ///
    /// Runs parse, date-domain derivation, and initial selection in order.
    /// The initial selection is always the earliest selectable day, when any
    /// day exists.
    pub fn from_csv(csv_text: &str) -> Result<Self> {
        let result = TripCsvParser::new().parse(csv_text)?;
        let date_domain = build_date_domain(&result.trips);
        let selected = date_domain.first().cloned();

        info!(
            "Itinerary ready: {} trips over {} selectable days",
            result.trips.len(),
            date_domain.len()
        );

        Ok(Self {
            trips: result.trips,
            date_domain,
            selected,
            stats: result.stats,
        })
    }

    /// Fetch the CSV resource and build the itinerary from it.
    ///
    /// The fetch happens exactly once; a failure propagates and the caller's
    /// state stays empty. No retry is attempted.
    pub async fn load(source: &CsvSource) -> Result<Self> {
        let csv_text = resource::fetch(source).await?;
        Self::from_csv(&csv_text)
    }

    /// The normalized trip records, in original row order
    pub fn trips(&self) -> &[TripRecord] {
        &self.trips
    }

    /// The ordered selectable date keys
    pub fn date_domain(&self) -> &[String] {
        &self.date_domain
    }

    /// The currently selected date key, if any
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Parsing statistics from ingestion
    pub fn stats(&self) -> &ParseStats {
        &self.stats
    }

    /// Change the selected date key.
    ///
    /// Any key is accepted; the visible set simply recomputes against it.
    /// The date domain is the supported source of keys.
    pub fn select(&mut self, key: impl Into<String>) {
        self.selected = Some(key.into());
    }

    /// Clear the selection; the visible set becomes empty
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// The trips whose date range contains the selected day.
    ///
    /// Recomputed on every call; empty when nothing is selected.
    pub fn visible_trips(&self) -> Vec<&TripRecord> {
        filter_trips_by_date(&self.trips, self.selected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "Destination,Days,Date From,Date To,Travel time,Flight,Status,Accommodation,Comments,Recommendations,Notes\n\
                       Vienna,2,03-Jan-25,04-Jan-25,,,,,,,\n\
                       Paris,3,01-Jan-25,03-Jan-25,,,,,,,";

    #[test]
    fn test_initial_selection_is_earliest_day() {
        let itinerary = Itinerary::from_csv(CSV).unwrap();
        assert_eq!(itinerary.selected(), Some("01-Jan-25"));
        assert_eq!(itinerary.date_domain().first().map(String::as_str), itinerary.selected());
    }

    #[test]
    fn test_visible_trips_follow_selection() {
        let mut itinerary = Itinerary::from_csv(CSV).unwrap();

        // Earliest day: only Paris
        assert_eq!(itinerary.visible_trips().len(), 1);
        assert_eq!(itinerary.visible_trips()[0].destination, "Paris");

        // Shared day: both, in original row order (Vienna row came first)
        itinerary.select("03-Jan-25");
        let visible = itinerary.visible_trips();
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].destination, "Vienna");
        assert_eq!(visible[1].destination, "Paris");

        itinerary.clear_selection();
        assert!(itinerary.visible_trips().is_empty());
    }

    #[test]
    fn test_empty_itinerary_tolerates_queries() {
        let itinerary = Itinerary::empty();
        assert!(itinerary.trips().is_empty());
        assert!(itinerary.date_domain().is_empty());
        assert_eq!(itinerary.selected(), None);
        assert!(itinerary.visible_trips().is_empty());
    }

    #[test]
    fn test_no_dates_means_no_selection() {
        // Single trip whose dates do not decode: it stays in the list but
        // contributes no selectable days
        let csv = "Destination,Days,Date From,Date To\nNowhere,1,xx,yy";
        let itinerary = Itinerary::from_csv(csv).unwrap();
        assert_eq!(itinerary.trips().len(), 1);
        assert!(itinerary.date_domain().is_empty());
        assert_eq!(itinerary.selected(), None);
        assert!(itinerary.visible_trips().is_empty());
    }
}
