//! CSV readers for vendor measurement exports
//!
//! This module parses delimited measurement exports into canonical
//! [`Measurement`](crate::app::models::Measurement) records. Parsing is
//! format-tagged: each vendor format supplies its column set, timestamp
//! pattern, and field conventions behind the [`FormatReader`] trait, while
//! the surrounding algorithm stays fixed.
//!
//! ## Architecture
//!
//! - [`reader`] - The [`FormatReader`] trait and the driving [`MeasurementReader`]
//! - [`header`] - Mandatory-column validation before any row is read
//! - [`columns`] - Header-name to field-index mapping
//! - [`record`] - Draft record assembly and per-row validation
//! - [`field_parsers`] - Utility functions for typed field parsing
//! - [`emlid`] - Emlid export conventions
//! - [`nivel`] - Nivel Point export conventions
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Failure semantics
//!
//! A row that fails to parse or validate is never fatal: its point name (when
//! obtainable) is recorded in the unread list and reading continues. Only a
//! missing mandatory column, an empty file, or an unreadable file aborts the
//! whole ingestion call.
//!
//! ## Usage
//!
//! ```rust
//! use rtk_processor::app::services::csv_reader::MeasurementReader;
//! use rtk_processor::config::{Format, IngestOptions};
//!
//! # fn example() -> rtk_processor::Result<()> {
//! let reader = MeasurementReader::new(IngestOptions::new(Format::Emlid));
//! let result = reader.read_file(std::path::Path::new("survey.csv"))?;
//!
//! println!(
//!     "Parsed {} measurements from {} rows, {} skipped",
//!     result.stats.measurements_parsed,
//!     result.stats.total_rows,
//!     result.unread_points.len()
//! );
//! # Ok(())
//! # }
//! ```

pub mod columns;
pub mod emlid;
pub mod field_parsers;
pub mod header;
pub mod nivel;
pub mod reader;
pub mod record;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use columns::ColumnMap;
pub use emlid::EmlidReader;
pub use nivel::NivelReader;
pub use reader::{FormatReader, MeasurementReader, format_reader};
pub use stats::{ParseResult, ParseStats};
