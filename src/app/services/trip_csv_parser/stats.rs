//! Parsing statistics and result structures for itinerary CSV processing
//!
//! Diagnostics are returned as data alongside the parse result rather than
//! printed, so callers (and tests) can inspect what was discarded without
//! capturing output streams.

use crate::app::models::TripRecord;

/// Parsing result with normalized trips and statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Successfully parsed trip records, in original row order
    pub trips: Vec<TripRecord>,

    /// Parsing statistics and diagnostics
    pub stats: ParseStats,
}

/// Parsing statistics for one ingestion pass
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Raw lines in the document, including the header
    pub lines_total: usize,

    /// Blank (whitespace-only) lines discarded
    pub blank_lines: usize,

    /// "Total" summary rows discarded
    pub summary_rows: usize,

    /// Exact duplicate lines discarded (first occurrence kept)
    pub duplicate_lines: usize,

    /// Data rows that opened a trip record
    pub destination_rows: usize,

    /// Data rows treated as continuations of an open record
    pub continuation_rows: usize,

    /// Trip records in the final collection
    pub trips_parsed: usize,

    /// Assembled records dropped for missing destination or date range
    pub records_dropped: usize,

    /// Human-readable descriptions of every discarded contribution
    pub diagnostics: Vec<String>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether the pass consumed every data row without discards
    pub fn is_clean(&self) -> bool {
        self.records_dropped == 0 && self.diagnostics.is_empty()
    }

    /// Total data rows that were considered for record assembly
    pub fn data_rows(&self) -> usize {
        self.destination_rows + self.continuation_rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stats_are_clean() {
        let stats = ParseStats::new();
        assert!(stats.is_clean());
        assert_eq!(stats.data_rows(), 0);
    }

    #[test]
    fn test_drops_and_diagnostics_mark_unclean() {
        let mut stats = ParseStats::new();
        stats.records_dropped = 1;
        assert!(!stats.is_clean());

        let mut stats = ParseStats::new();
        stats.diagnostics.push("orphan continuation".to_string());
        assert!(!stats.is_clean());
    }
}
