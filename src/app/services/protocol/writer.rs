//! Averaged point CSV output
//!
//! Writes the averaged point list back out using the source format's own
//! column names, so the file can be re-imported by the vendor software the
//! survey came from.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;
use tracing::info;

use crate::app::models::AveragedPoint;
use crate::config::{Format, IngestOptions};
use crate::constants::{emlid_columns, nivel_columns};
use crate::{Error, Result};

/// Writer for the averaged point list
pub struct AveragedPointWriter {
    options: IngestOptions,
    precision: u32,
}

impl AveragedPointWriter {
    pub fn new(options: IngestOptions, precision: u32) -> Self {
        Self { options, precision }
    }

    /// Column names for the active format and coordinate mode
    fn headers(&self) -> [&'static str; 5] {
        match (self.options.format, self.options.is_global) {
            (Format::Emlid, true) => [
                emlid_columns::NAME,
                emlid_columns::LONGITUDE,
                emlid_columns::LATITUDE,
                emlid_columns::ELLIPSOIDAL_HEIGHT,
                emlid_columns::CODE,
            ],
            (Format::Emlid, false) => [
                emlid_columns::NAME,
                emlid_columns::EASTING,
                emlid_columns::NORTHING,
                emlid_columns::ELEVATION,
                emlid_columns::CODE,
            ],
            (Format::Nivel, true) => [
                nivel_columns::NAME,
                nivel_columns::LONGITUDE_DMS,
                nivel_columns::LATITUDE_DMS,
                nivel_columns::HEIGHT_GLOBAL,
                nivel_columns::DESCRIPTION,
            ],
            (Format::Nivel, false) => [
                nivel_columns::NAME,
                nivel_columns::LOCAL_Y,
                nivel_columns::LOCAL_X,
                nivel_columns::HEIGHT_LOCAL,
                nivel_columns::DESCRIPTION,
            ],
        }
    }

    /// Write the averaged points to a file
    pub fn write_file(&self, output_path: &Path, points: &[AveragedPoint]) -> Result<()> {
        let file = File::create(output_path).map_err(|e| {
            Error::io(
                format!("Failed to create output file '{}'", output_path.display()),
                e,
            )
        })?;

        self.write(file, points, &output_path.display().to_string())?;

        info!(
            "Wrote {} averaged points to {}",
            points.len(),
            output_path.display()
        );

        Ok(())
    }

    /// Write the averaged points to any destination
    pub fn write<W: Write>(&self, destination: W, points: &[AveragedPoint], file: &str) -> Result<()> {
        let mut csv_writer = WriterBuilder::new()
            .delimiter(self.options.delimiter.as_byte())
            .from_writer(destination);

        csv_writer
            .write_record(self.headers())
            .map_err(|e| Error::csv_writing(file, "Failed to write header row", Some(e)))?;

        for point in points {
            let record = [
                point.name.clone(),
                point.longitude.round_dp(self.precision).to_string(),
                point.latitude.round_dp(self.precision).to_string(),
                point.height.round_dp(self.precision).to_string(),
                point.code.clone(),
            ];
            csv_writer.write_record(&record).map_err(|e| {
                Error::csv_writing(
                    file,
                    format!("Failed to write point '{}'", point.name),
                    Some(e),
                )
            })?;
        }

        csv_writer
            .flush()
            .map_err(|e| Error::io(format!("Failed to flush output file '{file}'"), e))?;

        Ok(())
    }
}
