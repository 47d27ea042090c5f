//! Tests for the Nivel Point reader

use rust_decimal_macros::dec;

use super::create_temp_csv;
use crate::app::services::csv_reader::MeasurementReader;
use crate::config::{Delimiter, Format, IngestOptions};
use crate::Error;

// Real Nivel exports are semicolon delimited and use decimal commas in the
// projected Y/X columns only; every other numeric column uses dots.
const LOCAL_HEADER: &str = "Název;Y;X;Z;Ant H;StartLokální čas;EndLokální čas;\
Status;PDOP;HRMS;VRMS;MountPoint;Sdílet Sate;Popis";

const GLOBAL_HEADER: &str = "Název,Zem. délka,Zem. šířka,H,Ant H,\
StartLokální čas,EndLokální čas,Status,PDOP,HRMS,VRMS,MountPoint,\
Sdílet Sate,Popis";

fn local_options() -> IngestOptions {
    IngestOptions::new(Format::Nivel).with_delimiter(Delimiter::Semicolon)
}

fn global_options() -> IngestOptions {
    IngestOptions::new(Format::Nivel).with_global(true)
}

fn local_content(rows: &[&str]) -> String {
    let mut content = String::from(LOCAL_HEADER);
    for row in rows {
        content.push('\n');
        content.push_str(row);
    }
    content.push('\n');
    content
}

#[test]
fn test_parses_local_export_with_comma_decimals() {
    let content = local_content(&[
        "101;745210,15;1043522,84;231.62;2.000;2024-06-20 11:02:10.0;\
         2024-06-20 11:05:10.0;FIXED;1.8;0.014;0.022;CZEPOS;14;hranicni kamen",
    ]);
    let file = create_temp_csv(&content);

    let reader = MeasurementReader::new(local_options());
    let result = reader.read_file(file.path()).unwrap();

    assert_eq!(result.measurements.len(), 1);
    let point = &result.measurements[0];
    assert_eq!(point.name, "101");
    assert_eq!(point.longitude, dec!(745210.15));
    assert_eq!(point.latitude, dec!(1043522.84));
    assert_eq!(point.height, dec!(231.62));
    assert_eq!(point.antenna_height, dec!(2.000));
    assert_eq!(point.pdop, dec!(1.8));
    assert_eq!(point.solution_status, "FIXED");
    assert_eq!(point.mount_point, "CZEPOS");
    assert_eq!(point.shared_satellites, Some(14));
    assert_eq!(point.satellites_count(), 14);
    assert_eq!(point.observation_duration().num_seconds(), 180);
}

#[test]
fn test_horizontal_accuracy_covers_both_axes() {
    let content = local_content(&[
        "101;745210,15;1043522,84;231.62;2.000;2024-06-20 11:02:10.0;\
         2024-06-20 11:05:10.0;FIXED;1.8;0.014;0.022;CZEPOS;14;plot",
    ]);
    let file = create_temp_csv(&content);

    let reader = MeasurementReader::new(local_options());
    let result = reader.read_file(file.path()).unwrap();

    let point = &result.measurements[0];
    assert_eq!(point.accuracy_y, dec!(0.014));
    assert_eq!(point.accuracy_x, dec!(0.014));
    assert_eq!(point.accuracy_z, dec!(0.022));
}

#[test]
fn test_code_comes_from_the_popis_column() {
    let content = local_content(&[
        "101;745210,15;1043522,84;231.62;2.000;2024-06-20 11:02:10.0;\
         2024-06-20 11:05:10.0;FIXED;1.8;0.014;0.022;CZEPOS;14;hranicni kamen",
    ]);
    let file = create_temp_csv(&content);

    let reader = MeasurementReader::new(local_options());
    let result = reader.read_file(file.path()).unwrap();

    let point = &result.measurements[0];
    assert_eq!(point.code, "hranicni kamen");
    assert_eq!(point.description, "");
}

#[test]
fn test_parses_global_export_with_dms_coordinates() {
    let content = format!(
        "{GLOBAL_HEADER}\n\
         201,16 36 43.2,49 12 7.2,285.60,2.000,\
         2024-06-20 09:12:00.0,2024-06-20 09:15:00.0,\
         FIXED,1.5,0.011,0.016,CZEPOS,12,mez\n"
    );
    let file = create_temp_csv(&content);

    let reader = MeasurementReader::new(global_options());
    let result = reader.read_file(file.path()).unwrap();

    assert_eq!(result.measurements.len(), 1);
    let point = &result.measurements[0];
    // 16 + 36/60 + 43.2/3600 and 49 + 12/60 + 7.2/3600
    assert_eq!(point.longitude, dec!(16.612));
    assert_eq!(point.latitude, dec!(49.202));
    assert_eq!(point.height, dec!(285.60));
}

#[test]
fn test_dms_seconds_accept_comma_decimals() {
    let content = "Název;Zem. délka;Zem. šířka;H;Ant H;StartLokální čas;\
EndLokální čas;Status;PDOP;HRMS;VRMS;MountPoint;Sdílet Sate;Popis\n\
201;16 36 43,2;49 12 7,2;285.60;2.000;2024-06-20 09:12:00.0;\
2024-06-20 09:15:00.0;FIXED;1.5;0.011;0.016;CZEPOS;12;mez\n";
    let file = create_temp_csv(content);

    let options = global_options().with_delimiter(Delimiter::Semicolon);
    let reader = MeasurementReader::new(options);
    let result = reader.read_file(file.path()).unwrap();

    assert_eq!(result.measurements.len(), 1);
    assert_eq!(result.measurements[0].longitude, dec!(16.612));
    assert_eq!(result.measurements[0].latitude, dec!(49.202));
}

#[test]
fn test_malformed_dms_skips_the_row() {
    let content = format!(
        "{GLOBAL_HEADER}\n\
         201,16 36 43.2,49 12 7.2,285.60,2.000,\
         2024-06-20 09:12:00.0,2024-06-20 09:15:00.0,\
         FIXED,1.5,0.011,0.016,CZEPOS,12,mez\n\
         202,16 36,49 12 7.2,285.70,2.000,\
         2024-06-20 09:22:00.0,2024-06-20 09:25:00.0,\
         FIXED,1.5,0.011,0.016,CZEPOS,12,mez\n"
    );
    let file = create_temp_csv(&content);

    let reader = MeasurementReader::new(global_options());
    let result = reader.read_file(file.path()).unwrap();

    assert_eq!(result.measurements.len(), 1);
    assert_eq!(result.measurements[0].name, "201");
    assert_eq!(result.unread_points, vec!["202".to_string()]);
}

#[test]
fn test_vertical_accuracy_is_required_per_row() {
    let content = local_content(&[
        "101;745210,15;1043522,84;231.62;2.000;2024-06-20 11:02:10.0;\
         2024-06-20 11:05:10.0;FIXED;1.8;0.014;;CZEPOS;14;plot",
    ]);
    let file = create_temp_csv(&content);

    let reader = MeasurementReader::new(local_options());
    let result = reader.read_file(file.path()).unwrap();

    assert!(result.measurements.is_empty());
    assert_eq!(result.unread_points, vec!["101".to_string()]);
}

#[test]
fn test_global_mode_requires_the_height_column() {
    let content = "Název,Zem. délka,Zem. šířka,Ant H,StartLokální čas,\
EndLokální čas,Status,PDOP,HRMS,VRMS,MountPoint,Sdílet Sate,Popis\n\
201,16 36 43.2,49 12 7.2,2.000,2024-06-20 09:12:00.0,\
2024-06-20 09:15:00.0,FIXED,1.5,0.011,0.016,CZEPOS,12,mez\n";
    let file = create_temp_csv(content);

    let reader = MeasurementReader::new(global_options());
    let error = reader.read_file(file.path()).unwrap_err();

    match error {
        Error::HeaderValidation { messages, .. } => {
            assert_eq!(messages.len(), 2);
            assert!(messages[0].contains("'H'"));
            assert_eq!(messages[1], "Protocol processing halted.");
        }
        other => panic!("Expected header validation error, got {other:?}"),
    }
}

#[test]
fn test_local_mode_requires_the_z_column() {
    let content = "Název;Y;X;Ant H;StartLokální čas;EndLokální čas;Status;\
PDOP;HRMS;VRMS;MountPoint;Sdílet Sate;Popis\n\
101;745210,15;1043522,84;2.000;2024-06-20 11:02:10.0;\
2024-06-20 11:05:10.0;FIXED;1.8;0.014;0.022;CZEPOS;14;plot\n";
    let file = create_temp_csv(content);

    let reader = MeasurementReader::new(local_options());
    let error = reader.read_file(file.path()).unwrap_err();

    match error {
        Error::HeaderValidation { messages, .. } => {
            assert!(messages[0].contains("'Z'"));
        }
        other => panic!("Expected header validation error, got {other:?}"),
    }
}

#[test]
fn test_per_constellation_counts_are_absent() {
    let content = local_content(&[
        "101;745210,15;1043522,84;231.62;2.000;2024-06-20 11:02:10.0;\
         2024-06-20 11:05:10.0;FIXED;1.8;0.014;0.022;CZEPOS;14;plot",
    ]);
    let file = create_temp_csv(&content);

    let reader = MeasurementReader::new(local_options());
    let result = reader.read_file(file.path()).unwrap();

    let point = &result.measurements[0];
    assert_eq!(point.gps_satellites, None);
    assert_eq!(point.glonass_satellites, None);
    assert_eq!(point.shared_satellites, Some(14));
}

#[test]
fn test_missing_antenna_height_skips_the_row() {
    // Ant H is not a mandatory header column but each row needs a value
    let content = local_content(&[
        "101;745210,15;1043522,84;231.62;;2024-06-20 11:02:10.0;\
         2024-06-20 11:05:10.0;FIXED;1.8;0.014;0.022;CZEPOS;14;plot",
    ]);
    let file = create_temp_csv(&content);

    let reader = MeasurementReader::new(local_options());
    let result = reader.read_file(file.path()).unwrap();

    assert!(result.measurements.is_empty());
    assert_eq!(result.unread_points, vec!["101".to_string()]);
}

#[test]
fn test_unparsable_shared_count_falls_back_to_zero() {
    let content = local_content(&[
        "101;745210,15;1043522,84;231.62;2.000;2024-06-20 11:02:10.0;\
         2024-06-20 11:05:10.0;FIXED;1.8;0.014;0.022;CZEPOS;n/a;plot",
    ]);
    let file = create_temp_csv(&content);

    let reader = MeasurementReader::new(local_options());
    let result = reader.read_file(file.path()).unwrap();

    assert_eq!(result.measurements.len(), 1);
    let point = &result.measurements[0];
    assert_eq!(point.shared_satellites, None);
    assert_eq!(point.satellites_count(), 0);
}
