//! Format-tagged measurement reading
//!
//! The driver owns the fixed part of the algorithm, reading the file,
//! validating the header, walking the rows, and recovering per-row failures
//! into the unread list. Everything vendor-specific lives behind
//! [`FormatReader`], so adding a format means supplying a column set, a
//! timestamp pattern, and a field mapping.

use std::path::Path;

use csv::StringRecord;
use tracing::{debug, info};

use super::columns::ColumnMap;
use super::emlid::EmlidReader;
use super::header::validate_header;
use super::nivel::NivelReader;
use super::stats::{ParseResult, ParseStats};
use crate::app::models::Measurement;
use crate::config::{Format, IngestOptions};
use crate::{Error, Result};

/// Vendor-specific parsing behavior
pub trait FormatReader {
    /// Column holding the point name, used for unread-row reporting
    fn name_column(&self) -> &'static str;

    /// Columns that must be present before any row is read
    fn mandatory_columns(&self, is_global: bool) -> Vec<&'static str>;

    /// Parse one data row into a validated measurement
    ///
    /// Returns `None` when the row is unreadable or fails validation; the
    /// driver records the row in the unread list and continues.
    fn parse_record(
        &self,
        record: &StringRecord,
        columns: &ColumnMap,
        is_global: bool,
    ) -> Option<Measurement>;
}

/// Concrete reader for a format selector
pub fn format_reader(format: Format) -> Box<dyn FormatReader> {
    match format {
        Format::Emlid => Box::new(EmlidReader),
        Format::Nivel => Box::new(NivelReader),
    }
}

/// Measurement file reader for one ingestion configuration
///
/// Each call builds fresh collections; separate calls share no state, so
/// independent files may be read concurrently by independent callers.
#[derive(Debug, Clone)]
pub struct MeasurementReader {
    options: IngestOptions,
}

impl MeasurementReader {
    /// Create a reader for the given ingestion options
    pub fn new(options: IngestOptions) -> Self {
        Self { options }
    }

    /// The options this reader was built with
    pub fn options(&self) -> &IngestOptions {
        &self.options
    }

    /// Read a measurement file into canonical records plus the unread list
    pub fn read_file(&self, file_path: &Path) -> Result<ParseResult> {
        info!(
            "Reading {} measurement file: {}",
            self.options.format,
            file_path.display()
        );

        let content = std::fs::read_to_string(file_path).map_err(|e| {
            Error::io(
                format!("Failed to read file '{}'", file_path.display()),
                e,
            )
        })?;

        self.read_content(&content, &file_path.display().to_string())
    }

    /// Read measurement CSV content under a display name for messages
    pub fn read_content(&self, content: &str, file: &str) -> Result<ParseResult> {
        if content.trim().is_empty() {
            return Err(Error::empty_file(file));
        }

        let reader = format_reader(self.options.format);

        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(self.options.delimiter.as_byte())
            .has_headers(true)
            .flexible(true)
            .from_reader(content.as_bytes());

        let headers = csv_reader
            .headers()
            .map_err(|e| Error::csv_parsing(file, "Failed to read CSV header row", Some(e)))?;

        let columns = ColumnMap::from_headers(headers);
        validate_header(
            &columns,
            &reader.mandatory_columns(self.options.is_global),
            file,
        )?;
        debug!("Header validated, {} columns mapped", columns.len());

        let mut stats = ParseStats::new();
        let mut measurements = Vec::new();
        let mut unread_points = Vec::new();

        for result in csv_reader.records() {
            stats.total_rows += 1;

            match result {
                Ok(record) => {
                    match reader.parse_record(&record, &columns, self.options.is_global) {
                        Some(measurement) => {
                            measurements.push(measurement);
                            stats.measurements_parsed += 1;
                        }
                        None => {
                            stats.rows_skipped += 1;
                            if let Some(name) = columns.value(&record, reader.name_column()) {
                                let name = name.trim();
                                if !name.is_empty() {
                                    unread_points.push(name.to_string());
                                }
                            }
                            debug!("Skipped row {}", stats.total_rows);
                        }
                    }
                }
                Err(e) => {
                    // A structurally broken row has no fields to take a name from
                    stats.rows_skipped += 1;
                    debug!("CSV error at row {}: {}", stats.total_rows, e);
                }
            }
        }

        info!(
            "Parsed {} measurements from {} rows ({} skipped)",
            stats.measurements_parsed, stats.total_rows, stats.rows_skipped
        );

        Ok(ParseResult {
            measurements,
            unread_points,
            stats,
        })
    }
}
