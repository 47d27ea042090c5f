//! Parsing statistics and result structures

use crate::app::models::Measurement;

/// Complete result of one file ingestion
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Canonical measurements in source-file order
    pub measurements: Vec<Measurement>,

    /// Point names of rows that failed to parse or validate
    pub unread_points: Vec<String>,

    /// Row-level counters for reporting
    pub stats: ParseStats,
}

/// Row-level counters collected during parsing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// Data rows encountered
    pub total_rows: usize,

    /// Rows promoted to canonical measurements
    pub measurements_parsed: usize,

    /// Rows recovered into the unread list or dropped as malformed
    pub rows_skipped: usize,
}

impl ParseStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Share of rows parsed successfully, as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_rows == 0 {
            100.0
        } else {
            (self.measurements_parsed as f64 / self.total_rows as f64) * 100.0
        }
    }
}
