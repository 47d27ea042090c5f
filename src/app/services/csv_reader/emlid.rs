//! Emlid export conventions
//!
//! Emlid receivers export English column names, timestamps carrying a UTC
//! offset suffix, per-constellation satellite counts, and RMS accuracy
//! columns mapped onto the Y/X/Z accuracy figures.

use csv::StringRecord;

use super::columns::ColumnMap;
use super::field_parsers::{
    parse_emlid_datetime, parse_optional_count, parse_optional_decimal, parse_trimmed_string,
};
use super::reader::FormatReader;
use super::record::MeasurementDraft;
use crate::app::models::Measurement;
use crate::constants::emlid_columns as col;

/// Reader for Emlid CSV exports
#[derive(Debug, Default)]
pub struct EmlidReader;

impl FormatReader for EmlidReader {
    fn name_column(&self) -> &'static str {
        col::NAME
    }

    fn mandatory_columns(&self, is_global: bool) -> Vec<&'static str> {
        let mode_columns = if is_global {
            col::MANDATORY_GLOBAL
        } else {
            col::MANDATORY_LOCAL
        };

        col::MANDATORY
            .iter()
            .chain(mode_columns.iter())
            .copied()
            .collect()
    }

    fn parse_record(
        &self,
        record: &StringRecord,
        columns: &ColumnMap,
        is_global: bool,
    ) -> Option<Measurement> {
        // Both timestamps must parse before anything else is looked at
        let time_start =
            parse_emlid_datetime(columns.value(record, col::AVERAGING_START).unwrap_or_default())?;
        let time_end =
            parse_emlid_datetime(columns.value(record, col::AVERAGING_END).unwrap_or_default())?;

        let (longitude_column, latitude_column, height_column) = if is_global {
            (col::LONGITUDE, col::LATITUDE, col::ELLIPSOIDAL_HEIGHT)
        } else {
            (col::EASTING, col::NORTHING, col::ELEVATION)
        };

        let draft = MeasurementDraft {
            name: parse_trimmed_string(record, columns, col::NAME),
            longitude: parse_optional_decimal(record, columns, longitude_column),
            latitude: parse_optional_decimal(record, columns, latitude_column),
            height: parse_optional_decimal(record, columns, height_column),
            antenna_height: parse_optional_decimal(record, columns, col::ANTENNA_HEIGHT),
            time_start,
            time_end,
            solution_status: parse_trimmed_string(record, columns, col::SOLUTION_STATUS),
            pdop: parse_optional_decimal(record, columns, col::PDOP),
            accuracy_y: parse_optional_decimal(record, columns, col::EASTING_RMS),
            accuracy_x: parse_optional_decimal(record, columns, col::NORTHING_RMS),
            accuracy_z: parse_optional_decimal(record, columns, col::ELEVATION_RMS),
            code: parse_trimmed_string(record, columns, col::CODE),
            description: parse_trimmed_string(record, columns, col::DESCRIPTION),
            mount_point: parse_trimmed_string(record, columns, col::MOUNT_POINT),
            gps_satellites: parse_optional_count(record, columns, col::GPS_SATELLITES),
            glonass_satellites: parse_optional_count(record, columns, col::GLONASS_SATELLITES),
            galileo_satellites: parse_optional_count(record, columns, col::GALILEO_SATELLITES),
            beidou_satellites: parse_optional_count(record, columns, col::BEIDOU_SATELLITES),
            qzss_satellites: parse_optional_count(record, columns, col::QZSS_SATELLITES),
            shared_satellites: None,
        };

        draft.validate()
    }
}
