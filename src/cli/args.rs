//! Command-line argument definitions for the RTK processor
//!
//! This module defines the complete CLI interface using the clap derive API.

use crate::config::{Delimiter, Format, IngestOptions, OutputOptions, SurveyInfo};
use crate::constants::{averaged_csv_filename, protocol_filename};
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the RTK measurement processor
///
/// Parses GNSS/RTK measurement exports, averages repeat occupations of each
/// surveyed point, and renders the plain-text measurement protocol together
/// with an averaged-point CSV.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "rtk-processor",
    version,
    about = "Average GNSS/RTK survey measurements and render surveyor protocols",
    long_about = "Parses GNSS/RTK measurement exports (Emlid, Nivel Point), groups repeat \
                  occupations of each surveyed point, averages their coordinates, and renders \
                  the plain-text measurement protocol together with an averaged-point CSV for \
                  GIS import."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the RTK processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Process a measurement export into a protocol and averaged CSV (default command)
    Process(ProcessArgs),
    /// Parse and validate a measurement export without writing output
    Inspect(InspectArgs),
}

/// Vendor format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Emlid receiver export (English column names)
    Emlid,
    /// Nivel Point export (Czech column names)
    Nivel,
}

impl From<FormatArg> for Format {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Emlid => Format::Emlid,
            FormatArg::Nivel => Format::Nivel,
        }
    }
}

/// Field delimiter selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DelimiterArg {
    /// Comma-separated fields
    Comma,
    /// Semicolon-separated fields
    Semicolon,
}

impl From<DelimiterArg> for Delimiter {
    fn from(value: DelimiterArg) -> Self {
        match value {
            DelimiterArg::Comma => Delimiter::Comma,
            DelimiterArg::Semicolon => Delimiter::Semicolon,
        }
    }
}

/// Arguments for the process command (full pipeline)
#[derive(Debug, Clone, Parser)]
pub struct ProcessArgs {
    /// Input measurement export
    #[arg(value_name = "FILE", help = "Measurement CSV export to process")]
    pub input: PathBuf,

    /// Vendor format of the export
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value = "emlid",
        help = "Vendor format of the export"
    )]
    pub format: FormatArg,

    /// Field delimiter used in the export
    #[arg(
        short = 'd',
        long = "delimiter",
        value_enum,
        default_value = "comma",
        help = "Field delimiter used in the export"
    )]
    pub delimiter: DelimiterArg,

    /// Read geodetic (global) coordinates
    ///
    /// By default the projected (local) coordinate columns are read.
    /// Geodetic mode switches to the longitude/latitude/ellipsoidal-height
    /// columns and raises the default display precision.
    #[arg(
        short = 'g',
        long = "global",
        help = "Read geodetic coordinate columns instead of projected ones"
    )]
    pub global: bool,

    /// Decimal places for displayed coordinates
    ///
    /// Defaults to 2 for projected coordinates and 9 for geodetic ones.
    /// Accepted ranges are 2-3 (projected) and 7-10 (geodetic).
    #[arg(
        short = 'p',
        long = "precision",
        value_name = "N",
        help = "Decimal places for displayed coordinates"
    )]
    pub precision: Option<u32>,

    /// Protocol output path
    ///
    /// If not specified, the protocol is written next to the input with a
    /// .txt extension.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Protocol output path"
    )]
    pub output: Option<PathBuf>,

    /// Averaged-point CSV output path
    ///
    /// If not specified, the CSV is written next to the input with an
    /// _averaged suffix.
    #[arg(
        long = "csv-output",
        value_name = "FILE",
        help = "Averaged-point CSV output path"
    )]
    pub csv_output: Option<PathBuf>,

    /// Skip writing the averaged-point CSV
    #[arg(
        long = "no-csv",
        help = "Skip writing the averaged-point CSV",
        conflicts_with = "csv_output"
    )]
    pub no_csv: bool,

    /// Render only the averaged-point listing
    ///
    /// Replaces the full protocol with one padded row per averaged point.
    #[arg(
        long = "only-averaged",
        help = "Render only the averaged-point listing instead of the full protocol"
    )]
    pub only_averaged: bool,

    /// Survey metadata file for the protocol title block
    ///
    /// JSON file with the sensor, software, projection, contractor, and
    /// surveyor fields. Missing fields render empty.
    #[arg(
        short = 's',
        long = "survey-file",
        value_name = "FILE",
        help = "Survey metadata JSON file for the protocol title block"
    )]
    pub survey_file: Option<PathBuf>,

    /// Hard-wrap protocol lines for A4 printing
    #[arg(long = "fit-a4", help = "Hard-wrap protocol lines to 80 columns for A4 printing")]
    pub fit_a4: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings and skips the summary.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the inspect command (parse and validate only)
#[derive(Debug, Clone, Parser)]
pub struct InspectArgs {
    /// Input measurement export
    #[arg(value_name = "FILE", help = "Measurement CSV export to inspect")]
    pub input: PathBuf,

    /// Vendor format of the export
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value = "emlid",
        help = "Vendor format of the export"
    )]
    pub format: FormatArg,

    /// Field delimiter used in the export
    #[arg(
        short = 'd',
        long = "delimiter",
        value_enum,
        default_value = "comma",
        help = "Field delimiter used in the export"
    )]
    pub delimiter: DelimiterArg,

    /// Read geodetic (global) coordinates
    #[arg(
        short = 'g',
        long = "global",
        help = "Read geodetic coordinate columns instead of projected ones"
    )]
    pub global: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Enable verbose logging (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl ProcessArgs {
    /// Validate the process command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input.exists() {
            return Err(Error::file_not_found(self.input.display().to_string()));
        }

        if !self.input.is_file() {
            return Err(Error::configuration(format!(
                "Input path is not a file: {}",
                self.input.display()
            )));
        }

        if let Some(survey_file) = &self.survey_file {
            if !survey_file.exists() {
                return Err(Error::configuration(format!(
                    "Survey file does not exist: {}",
                    survey_file.display()
                )));
            }
        }

        Ok(())
    }

    /// Ingestion options selected by the format flags
    pub fn ingest_options(&self) -> IngestOptions {
        IngestOptions::new(self.format.into())
            .with_delimiter(self.delimiter.into())
            .with_global(self.global)
    }

    /// Output options selected by the rendering flags
    pub fn output_options(&self) -> OutputOptions {
        let options = OutputOptions::for_mode(self.global).with_a4_fit(self.fit_a4);
        match self.precision {
            Some(precision) => options.with_precision(precision),
            None => options,
        }
    }

    /// Survey metadata for the protocol title block
    pub fn survey_info(&self) -> Result<SurveyInfo> {
        match &self.survey_file {
            Some(path) => SurveyInfo::from_file(path),
            None => Ok(SurveyInfo::default()),
        }
    }

    /// Resolved protocol output path
    pub fn protocol_path(&self) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None => {
                let stem = self.input.file_stem().unwrap_or_default().to_string_lossy();
                self.input.with_file_name(protocol_filename(&stem))
            }
        }
    }

    /// Resolved averaged-point CSV output path, `None` when skipped
    pub fn csv_path(&self) -> Option<PathBuf> {
        if self.no_csv {
            return None;
        }

        match &self.csv_output {
            Some(path) => Some(path.clone()),
            None => {
                let stem = self.input.file_stem().unwrap_or_default().to_string_lossy();
                Some(self.input.with_file_name(averaged_csv_filename(&stem)))
            }
        }
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

impl InspectArgs {
    /// Validate the inspect command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input.exists() {
            return Err(Error::file_not_found(self.input.display().to_string()));
        }

        if !self.input.is_file() {
            return Err(Error::configuration(format!(
                "Input path is not a file: {}",
                self.input.display()
            )));
        }

        Ok(())
    }

    /// Ingestion options selected by the format flags
    pub fn ingest_options(&self) -> IngestOptions {
        IngestOptions::new(self.format.into())
            .with_delimiter(self.delimiter.into())
            .with_global(self.global)
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

impl Default for ProcessArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            format: FormatArg::Emlid,
            delimiter: DelimiterArg::Comma,
            global: false,
            precision: None,
            output: None,
            csv_output: None,
            no_csv: false,
            only_averaged: false,
            survey_file: None,
            fit_a4: false,
            verbose: 0,
            quiet: false,
        }
    }
}
