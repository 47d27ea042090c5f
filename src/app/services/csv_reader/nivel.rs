//! Nivel Point export conventions
//!
//! Nivel exports carry Czech column names and local timestamps. Geodetic
//! coordinates arrive as space-separated degrees-minutes-seconds triples,
//! projected coordinates use decimal commas, and the single HRMS figure
//! feeds both horizontal accuracy fields. The pre-aggregated shared
//! satellite count stands in for per-constellation columns.

use csv::StringRecord;

use super::columns::ColumnMap;
use super::field_parsers::{
    parse_comma_decimal, parse_dms_degrees, parse_nivel_datetime, parse_optional_count,
    parse_optional_decimal, parse_trimmed_string,
};
use super::reader::FormatReader;
use super::record::MeasurementDraft;
use crate::app::models::Measurement;
use crate::constants::nivel_columns as col;

/// Reader for Nivel Point CSV exports
#[derive(Debug, Default)]
pub struct NivelReader;

impl FormatReader for NivelReader {
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
            parse_nivel_datetime(columns.value(record, col::TIME_START).unwrap_or_default())?;
        let time_end =
            parse_nivel_datetime(columns.value(record, col::TIME_END).unwrap_or_default())?;

        let (longitude, latitude, height) = if is_global {
            (
                columns
                    .value(record, col::LONGITUDE_DMS)
                    .and_then(parse_dms_degrees),
                columns
                    .value(record, col::LATITUDE_DMS)
                    .and_then(parse_dms_degrees),
                parse_optional_decimal(record, columns, col::HEIGHT_GLOBAL),
            )
        } else {
            (
                parse_comma_decimal(record, columns, col::LOCAL_Y),
                parse_comma_decimal(record, columns, col::LOCAL_X),
                parse_optional_decimal(record, columns, col::HEIGHT_LOCAL),
            )
        };

        // One horizontal RMS figure covers both axes
        let horizontal_accuracy = parse_optional_decimal(record, columns, col::HRMS);

        let draft = MeasurementDraft {
            name: parse_trimmed_string(record, columns, col::NAME),
            longitude,
            latitude,
            height,
            antenna_height: parse_optional_decimal(record, columns, col::ANTENNA_HEIGHT),
            time_start,
            time_end,
            solution_status: parse_trimmed_string(record, columns, col::STATUS),
            pdop: parse_optional_decimal(record, columns, col::PDOP),
            accuracy_y: horizontal_accuracy,
            accuracy_x: horizontal_accuracy,
            accuracy_z: parse_optional_decimal(record, columns, col::VRMS),
            code: parse_trimmed_string(record, columns, col::DESCRIPTION),
            description: String::new(),
            mount_point: parse_trimmed_string(record, columns, col::MOUNT_POINT),
            gps_satellites: None,
            glonass_satellites: None,
            galileo_satellites: None,
            beidou_satellites: None,
            qzss_satellites: None,
            shared_satellites: parse_optional_count(record, columns, col::SHARED_SATELLITES),
        };

        draft.validate()
    }
}
