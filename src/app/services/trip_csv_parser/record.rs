//! Record assembly fold for itinerary data lines
//!
//! A trip record opens on a row with a non-empty destination column and stays
//! open while continuation rows (empty destination) append overflow text to
//! it. The accumulation is expressed as an explicit fold state of
//! (closed records, currently open record) rather than a mutable variable
//! threaded through a loop, so the whole transformation is a pure function of
//! the line sequence.

use tracing::debug;

use super::fields::{optional_text, parse_days, split_values, text, value_at};
use super::header::HeaderLayout;
use super::stats::ParseStats;
use crate::app::models::TripRecord;
use crate::constants::columns;

/// Fold state for assembling trip records from prepared data lines
#[derive(Debug)]
pub struct RecordFold {
    layout: HeaderLayout,
    closed: Vec<TripRecord>,
    open: Option<TripRecord>,
}

impl RecordFold {
    /// Create an empty fold for the given header layout
    pub fn new(layout: HeaderLayout) -> Self {
        Self {
            layout,
            closed: Vec::new(),
            open: None,
        }
    }

    /// Advance the fold by one data line.
    ///
    /// A non-empty destination column starts a new record, closing out the
    /// previously open one. An empty destination column is a continuation of
    /// the open record; with no record open it contributes nothing.
    pub fn step(&mut self, line: &str, stats: &mut ParseStats) {
        let values = split_values(line);

        if value_at(&values, columns::DESTINATION).is_empty() {
            stats.continuation_rows += 1;
            self.continuation(&values, stats);
        } else {
            stats.destination_rows += 1;
            let record = self.build_record(&values);
            if let Some(previous) = self.open.replace(record) {
                self.closed.push(previous);
            }
        }
    }

    /// Terminate the fold, flushing the open record
    pub fn finish(mut self) -> Vec<TripRecord> {
        if let Some(last) = self.open.take() {
            self.closed.push(last);
        }
        self.closed
    }

    fn build_record(&self, values: &[&str]) -> TripRecord {
        TripRecord {
            destination: text(values, columns::DESTINATION),
            days: parse_days(values, columns::DAYS),
            date_from: text(values, self.layout.date_from),
            date_to: text(values, self.layout.date_to),
            travel_time: optional_text(values, columns::TRAVEL_TIME),
            flight: optional_text(values, columns::FLIGHT),
            status: optional_text(values, columns::STATUS),
            accommodation: optional_text(values, columns::ACCOMMODATION),
            comments: optional_text(values, columns::COMMENTS),
            recommendations: optional_text(values, columns::RECOMMENDATIONS),
            notes: optional_text(values, columns::NOTES),
        }
    }

    fn continuation(&mut self, values: &[&str], stats: &mut ParseStats) {
        let Some(open) = self.open.as_mut() else {
            debug!("continuation row with no open record, ignoring");
            stats
                .diagnostics
                .push("continuation row before any destination row ignored".to_string());
            return;
        };

        if let Some(comment) = optional_text(values, columns::COMMENTS) {
            open.append_comment(&comment);
        }
        if let Some(recommendation) = optional_text(values, columns::RECOMMENDATIONS) {
            open.append_recommendation(&recommendation);
        }
    }
}
