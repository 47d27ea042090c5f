//! RTK Processor Library
//!
//! A Rust library for processing GNSS/RTK field-survey measurement exports
//! into averaged point coordinates and surveyor protocols.
//!
//! This library provides tools for:
//! - Parsing vendor CSV exports (Emlid, Nivel) into canonical measurements
//! - Validating mandatory header columns before any row is read
//! - Recovering per-row parse failures into an unread-point list
//! - Grouping repeat occupations of a point and averaging coordinates
//! - Computing first-to-last deviation statistics per averaged point
//! - Rendering the plain-text measurement protocol and averaged-point CSV

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod aggregator;
        pub mod csv_reader;
        pub mod protocol;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{AveragedPoint, Measurement, MeasurementDifference};
pub use config::{Delimiter, Format, IngestOptions};

/// Result type alias for the RTK processor
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for RTK processing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing error
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// CSV writing error
    #[error("CSV writing error for file '{file}': {message}")]
    CsvWriting {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Source file contains no data rows
    #[error("CSV file '{file}' is empty")]
    EmptyFile { file: String },

    /// Mandatory header columns are missing, one message per column
    #[error("Invalid header in file '{file}':\n{}", .messages.join("\n"))]
    HeaderValidation { file: String, messages: Vec<String> },

    /// Unknown measurement format selector
    #[error("Unknown measurement format: {name}")]
    UnknownFormat { name: String },

    /// Unsupported field delimiter
    #[error("Unsupported delimiter: {value}")]
    UnsupportedDelimiter { value: String },

    /// Date/time parsing error
    #[error("Date/time parsing error: {message}")]
    DateTimeParsing {
        message: String,
        #[source]
        source: chrono::ParseError,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a CSV writing error with context
    pub fn csv_writing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvWriting {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an empty file error
    pub fn empty_file(file: impl Into<String>) -> Self {
        Self::EmptyFile { file: file.into() }
    }

    /// Create a header validation error from per-column messages
    pub fn header_validation(file: impl Into<String>, messages: Vec<String>) -> Self {
        Self::HeaderValidation {
            file: file.into(),
            messages,
        }
    }

    /// Create an unknown format error
    pub fn unknown_format(name: impl Into<String>) -> Self {
        Self::UnknownFormat { name: name.into() }
    }

    /// Create an unsupported delimiter error
    pub fn unsupported_delimiter(value: impl Into<String>) -> Self {
        Self::UnsupportedDelimiter {
            value: value.into(),
        }
    }

    /// Create a date/time parsing error
    pub fn datetime_parsing(message: impl Into<String>, source: chrono::ParseError) -> Self {
        Self::DateTimeParsing {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<chrono::ParseError> for Error {
    fn from(error: chrono::ParseError) -> Self {
        Self::DateTimeParsing {
            message: "Date/time parsing failed".to_string(),
            source: error,
        }
    }
}
