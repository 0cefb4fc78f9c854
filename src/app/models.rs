//! Data models for itinerary processing
//!
//! This module contains the core data structure for representing one
//! normalized itinerary entry as produced by the CSV record parser.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::app::services::date_codec;

/// One normalized itinerary entry.
///
/// A record is materialized from one destination row of the export, plus the
/// comments/recommendations overflow of any continuation rows that follow it.
/// The date range endpoints are stored in their textual "DD-Mon-YY" form, as
/// the export carries them; chronological interpretation happens on demand
/// through [`date_range`](Self::date_range).
///
/// Optional fields use `None` for absence rather than an empty string so that
/// the presentation layer can distinguish "no section" from "blank section".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripRecord {
    /// Destination name - the grouping/display key
    pub destination: String,

    /// Trip duration in days; 0 when the export value is unparsable
    pub days: u32,

    /// Range start in "DD-Mon-YY" form
    pub date_from: String,

    /// Range end in "DD-Mon-YY" form
    pub date_to: String,

    /// Travel time free text (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub travel_time: Option<String>,

    /// Flight details free text (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flight: Option<String>,

    /// Booking status free text (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Accommodation free text (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accommodation: Option<String>,

    /// Comments; newline-joined when accumulated across continuation rows
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,

    /// Recommendations; newline-joined when accumulated across continuation rows
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<String>,

    /// Additional notes (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl TripRecord {
    /// Check whether this record qualifies for the final collection.
    ///
    /// Destination and both range endpoints must be present and non-empty;
    /// anything else is droppable overflow from a malformed export row.
    pub fn is_complete(&self) -> bool {
        !self.destination.trim().is_empty()
            && !self.date_from.trim().is_empty()
            && !self.date_to.trim().is_empty()
    }

    /// Decode both range endpoints.
    ///
    /// Returns `None` when either endpoint fails to decode. An inverted range
    /// (start after end) is returned as-is; containment tests against it are
    /// simply always false.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let from = date_codec::decode(&self.date_from)?;
        let to = date_codec::decode(&self.date_to)?;
        Some((from, to))
    }

    /// Check whether the trip's date range contains the given day.
    ///
    /// A trip with an undecodable endpoint contains nothing.
    pub fn covers(&self, day: NaiveDate) -> bool {
        match self.date_range() {
            Some((from, to)) => from <= day && day <= to,
            None => false,
        }
    }

    /// Append overflow text to the comments field, newline-joined.
    ///
    /// The first contribution sets the field directly.
    pub fn append_comment(&mut self, text: &str) {
        match &mut self.comments {
            Some(existing) => {
                existing.push('\n');
                existing.push_str(text);
            }
            None => self.comments = Some(text.to_string()),
        }
    }

    /// Append overflow text to the recommendations field, newline-joined.
    pub fn append_recommendation(&mut self, text: &str) {
        match &mut self.recommendations {
            Some(existing) => {
                existing.push('\n');
                existing.push_str(text);
            }
            None => self.recommendations = Some(text.to_string()),
        }
    }
}
