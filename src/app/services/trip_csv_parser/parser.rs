//! Core itinerary CSV parser implementation
//!
//! This module provides the parsing orchestration: line preparation
//! (blank/summary/duplicate removal), header resolution, the record assembly
//! fold, and the final completeness filter.

use std::collections::HashSet;

use tracing::{debug, info};

use super::header::HeaderLayout;
use super::record::RecordFold;
use super::stats::{ParseResult, ParseStats};
use crate::constants::SUMMARY_ROW_MARKER;
use crate::{Error, Result};

/// Parser for itinerary CSV exports
///
/// The parser focuses on essential functionality:
/// - Tolerance of the export's noise: blank lines, repeated lines, summary rows
/// - Multi-row trips via continuation-row accumulation
/// - Silent, diagnosed dropping of records missing their required fields
///
/// Parsing is a pure function of the document text; the parser itself holds
/// no state across calls.
#[derive(Debug, Default)]
pub struct TripCsvParser;

impl TripCsvParser {
    /// Create a new parser
    pub fn new() -> Self {
        Self
    }

    /// Parse a full CSV document into trip records with statistics.
    ///
    /// Fails only when the document is structurally unusable: no lines
    /// survive preparation, or the header lacks a date column. Row-level
    /// problems degrade to dropped contributions recorded in the statistics.
    pub fn parse(&self, csv_text: &str) -> Result<ParseResult> {
        let mut stats = ParseStats::new();

        let lines = self.prepare_lines(csv_text, &mut stats);
        debug!(
            "Prepared {} of {} lines ({} blank, {} summary, {} duplicate)",
            lines.len(),
            stats.lines_total,
            stats.blank_lines,
            stats.summary_rows,
            stats.duplicate_lines
        );

        let Some((header_line, data_lines)) = lines.split_first() else {
            return Err(Error::csv_format("document has no header row"));
        };
        let layout = HeaderLayout::resolve(header_line)?;
        debug!(
            "Resolved date columns: from={}, to={}",
            layout.date_from, layout.date_to
        );

        let mut fold = RecordFold::new(layout);
        for line in data_lines {
            fold.step(line, &mut stats);
        }

        let mut trips = Vec::new();
        for record in fold.finish() {
            if record.is_complete() {
                trips.push(record);
            } else {
                stats.records_dropped += 1;
                let description = format!(
                    "dropped incomplete record: destination='{}', date_from='{}', date_to='{}'",
                    record.destination, record.date_from, record.date_to
                );
                debug!("{description}");
                stats.diagnostics.push(description);
            }
        }
        stats.trips_parsed = trips.len();

        info!(
            "Parsed {} trips from {} data rows ({} dropped)",
            stats.trips_parsed,
            stats.data_rows(),
            stats.records_dropped
        );

        Ok(ParseResult { trips, stats })
    }

    /// Discard blank lines, summary rows, and exact duplicate lines.
    ///
    /// Duplicate detection is raw line-for-line equality with the first
    /// occurrence kept, applied after the blank and summary filters, so a
    /// repeated export section collapses to its first appearance.
    fn prepare_lines<'a>(&self, csv_text: &'a str, stats: &mut ParseStats) -> Vec<&'a str> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut kept = Vec::new();

        for line in csv_text.lines() {
            stats.lines_total += 1;

            if line.trim().is_empty() {
                stats.blank_lines += 1;
                continue;
            }
            if first_field(line) == SUMMARY_ROW_MARKER {
                stats.summary_rows += 1;
                continue;
            }
            if !seen.insert(line) {
                stats.duplicate_lines += 1;
                continue;
            }
            kept.push(line);
        }

        kept
    }
}

/// First comma-separated field of a raw line, trimmed
fn first_field(line: &str) -> &str {
    line.split(',').next().unwrap_or("").trim()
}
