//! Test utilities for protocol rendering tests

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal_macros::dec;

use crate::app::models::{AveragedPoint, Measurement};
use crate::config::SurveyInfo;

// Test modules
mod text_tests;

/// Survey metadata fixture with every protocol field filled in
pub fn create_test_survey() -> SurveyInfo {
    SurveyInfo {
        sensor: "Emlid Reach RS2".to_string(),
        transformation_software: "Leica Infinity".to_string(),
        field_software: "ReachView 3".to_string(),
        projection: "S-JTSK / Krovak East North".to_string(),
        geoid_model: "CR-2005".to_string(),
        contractor: "Geodezie Test s.r.o.".to_string(),
        surveyor: "Jan Novak".to_string(),
        transformation_realization: "2023".to_string(),
    }
}

pub fn test_time(hour: u32, minute: u32, second: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 20)
        .unwrap()
        .and_hms_opt(hour, minute, second)
        .unwrap()
}

/// Measurement fixture with stable, display-friendly values
pub fn create_test_measurement(name: &str) -> Measurement {
    Measurement {
        name: name.to_string(),
        longitude: dec!(745123.41),
        latitude: dec!(1043210.88),
        height: dec!(228.37),
        antenna_height: dec!(1.8),
        time_start: test_time(10, 15, 30),
        time_end: test_time(10, 18, 30),
        solution_status: "FIX".to_string(),
        pdop: dec!(1.4),
        accuracy_y: dec!(0.01),
        accuracy_x: dec!(0.02),
        accuracy_z: dec!(0.03),
        code: "mark".to_string(),
        description: String::new(),
        mount_point: "CZEPOS".to_string(),
        gps_satellites: Some(9),
        glonass_satellites: Some(7),
        galileo_satellites: Some(8),
        beidou_satellites: Some(2),
        qzss_satellites: Some(0),
        shared_satellites: None,
    }
}

/// Averaged point fixture matching the measurement fixture's coordinates
pub fn create_test_point(name: &str) -> AveragedPoint {
    AveragedPoint {
        name: name.to_string(),
        longitude: dec!(745123.41),
        latitude: dec!(1043210.88),
        height: dec!(228.37),
        code: "mark".to_string(),
        is_averaged: false,
    }
}

/// Build an expected right-aligned table cell
pub fn expect_cell(value: &str, width: usize) -> String {
    format!("{value:>width$}")
}

/// Build an expected table row from cells of uniform width
pub fn expect_row(values: &[&str], width: usize) -> String {
    values.iter().map(|value| expect_cell(value, width)).collect()
}
