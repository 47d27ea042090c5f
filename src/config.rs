//! Run configuration for ingestion, aggregation, and rendering.
//!
//! All run-mode selections travel in immutable option structs passed by
//! reference into the services, so separate ingestion calls share no state.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{
    DEFAULT_GLOBAL_PRECISION, DEFAULT_LOCAL_PRECISION, GLOBAL_PRECISION_MAX, GLOBAL_PRECISION_MIN,
    LOCAL_PRECISION_MAX, LOCAL_PRECISION_MIN, default_precision,
};
use crate::{Error, Result};

/// Vendor format of a measurement export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Format {
    /// Emlid receiver export, English column names
    Emlid,
    /// Nivel Point export, Czech column names
    Nivel,
}

impl Format {
    /// All supported formats
    pub fn all() -> &'static [Format] {
        &[Format::Emlid, Format::Nivel]
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "emlid" => Ok(Format::Emlid),
            "nivel" | "nivel point" => Ok(Format::Nivel),
            other => Err(Error::unknown_format(other)),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Emlid => write!(f, "emlid"),
            Format::Nivel => write!(f, "nivel"),
        }
    }
}

/// Field delimiter of a measurement export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Delimiter {
    Comma,
    Semicolon,
}

impl Delimiter {
    /// Byte value handed to the CSV reader/writer builders
    pub fn as_byte(self) -> u8 {
        match self {
            Delimiter::Comma => b',',
            Delimiter::Semicolon => b';',
        }
    }
}

impl Default for Delimiter {
    fn default() -> Self {
        Delimiter::Comma
    }
}

impl FromStr for Delimiter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "," | "comma" => Ok(Delimiter::Comma),
            ";" | "semicolon" => Ok(Delimiter::Semicolon),
            other => Err(Error::unsupported_delimiter(other)),
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Delimiter::Comma => write!(f, ","),
            Delimiter::Semicolon => write!(f, ";"),
        }
    }
}

/// Options for one ingestion call
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IngestOptions {
    /// Vendor format of the source file
    pub format: Format,

    /// Field delimiter used in the source file
    pub delimiter: Delimiter,

    /// Geodetic column mapping when true, projected when false
    pub is_global: bool,
}

impl IngestOptions {
    pub fn new(format: Format) -> Self {
        Self {
            format,
            delimiter: Delimiter::default(),
            is_global: false,
        }
    }

    /// Set the field delimiter
    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Select geodetic column mapping
    pub fn with_global(mut self, is_global: bool) -> Self {
        self.is_global = is_global;
        self
    }
}

/// Options for protocol and CSV output
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutputOptions {
    /// Decimal places for displayed coordinates
    pub precision: u32,

    /// Hard-wrap protocol lines to the A4 width
    pub fit_a4: bool,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            precision: DEFAULT_LOCAL_PRECISION,
            fit_a4: false,
        }
    }
}

impl OutputOptions {
    /// Options with the customary precision for the coordinate mode
    pub fn for_mode(is_global: bool) -> Self {
        Self {
            precision: default_precision(is_global),
            fit_a4: false,
        }
    }

    /// Set the display precision
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Enable or disable A4 line wrapping
    pub fn with_a4_fit(mut self, fit_a4: bool) -> Self {
        self.fit_a4 = fit_a4;
        self
    }

    /// Validate the precision against the display bounds for the mode
    pub fn validate(&self, is_global: bool) -> Result<()> {
        let (min, max) = if is_global {
            (GLOBAL_PRECISION_MIN, GLOBAL_PRECISION_MAX)
        } else {
            (LOCAL_PRECISION_MIN, LOCAL_PRECISION_MAX)
        };

        if self.precision < min || self.precision > max {
            return Err(Error::configuration(format!(
                "Precision {} is outside the {}-{} range for {} coordinates",
                self.precision,
                min,
                max,
                if is_global { "global" } else { "local" }
            )));
        }

        Ok(())
    }
}

/// Free-text survey metadata rendered into the protocol title block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurveyInfo {
    /// GNSS sensor/receiver designation
    pub sensor: String,

    /// Software used for the ETRS89 to S-JTSK transformation
    pub transformation_software: String,

    /// Field (rover) software
    pub field_software: String,

    /// Map projection
    pub projection: String,

    /// Geoid model
    pub geoid_model: String,

    /// Contractor company
    pub contractor: String,

    /// Surveyor who measured
    pub surveyor: String,

    /// Realization year of the transformation, rendered in the closing note
    pub transformation_realization: String,
}

impl SurveyInfo {
    /// Load survey metadata from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading survey metadata from {}", path.display());

        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(
                format!("Failed to read survey file '{}'", path.display()),
                e,
            )
        })?;

        serde_json::from_str(&content).map_err(|e| {
            Error::configuration(format!(
                "Invalid survey file '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Set the sensor designation
    pub fn with_sensor(mut self, sensor: impl Into<String>) -> Self {
        self.sensor = sensor.into();
        self
    }

    /// Set the surveyor name
    pub fn with_surveyor(mut self, surveyor: impl Into<String>) -> Self {
        self.surveyor = surveyor.into();
        self
    }

    /// Set the contractor company
    pub fn with_contractor(mut self, contractor: impl Into<String>) -> Self {
        self.contractor = contractor.into();
        self
    }
}
