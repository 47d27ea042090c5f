//! Tests for the text protocol renderer

use chrono::Duration;
use rust_decimal_macros::dec;

use super::{create_test_measurement, create_test_point, create_test_survey, expect_row, test_time};
use crate::app::models::MeasurementDifference;
use crate::app::services::aggregator::aggregate;
use crate::app::services::protocol::TextProtocol;

fn renderer() -> TextProtocol {
    TextProtocol::new(create_test_survey(), 2)
}

#[test]
fn test_title_block_carries_survey_metadata() {
    let protocol = renderer().render(&[], &[], &[], false);

    assert!(protocol.starts_with(&"-".repeat(38)));
    assert!(protocol.contains("PROTOKOL GNSS (RTK) MERENI"));
    assert!(protocol.contains("GNSS Senzor: Emlid Reach RS2"));
    assert!(protocol.contains("Polni software: ReachView 3"));
    assert!(protocol.contains("Projekce: S-JTSK / Krovak East North"));
    assert!(protocol.contains("Model geoidu: CR-2005"));
    assert!(protocol.contains("Firma: Geodezie Test s.r.o."));
    assert!(protocol.contains("Meril: Jan Novak"));
    assert!(protocol.contains("realizace od 2023."));
}

#[test]
fn test_sections_appear_in_order() {
    let protocol = renderer().render(&[], &[], &[], false);

    let points = protocol.find("POUZITE A MERENE BODY").unwrap();
    let averaging = protocol.find("PRUMEROVANI BODU").unwrap();
    let coordinates = protocol.find("VYSLEDNE SOURADNICE").unwrap();
    let differences = protocol.find("ROZDILY MERENI").unwrap();

    assert!(points < averaging);
    assert!(averaging < coordinates);
    assert!(coordinates < differences);
    assert!(protocol.ends_with("\n    "));
}

#[test]
fn test_points_table_row_layout() {
    let measurement = create_test_measurement("A.1");

    let protocol = renderer().render(&[measurement], &[], &[], false);

    let expected = expect_row(
        &[
            "A.1",
            "745123.41",
            "1043210.88",
            "228.37",
            "mark",
            "1.4",
            "0.01",
            "0.02",
            "0.03",
            "CZEPOS",
            "26",
            "1.8",
            "20.06.2024",
            "10:15:30",
            "180",
            "FIX",
        ],
        13,
    );
    assert!(protocol.contains(&expected));
}

#[test]
fn test_points_table_headers_are_stacked() {
    let protocol = renderer().render(&[], &[], &[], false);

    let top = expect_row(
        &[
            "Bod c.", "Y", "X", "Z", "Kod", "PDOP", "Presnost", "Presnost", "Presnost", "Sit",
            "Pocet", "Antena", "Datum", "Zacatek", "Doba", "RTK fix",
        ],
        13,
    );
    let bottom = expect_row(
        &[
            "", "", "", "", "bodu", "", "Y", "X", "Z", "", "satelitu", "vyska (FC)", "", "mereni",
            "mereni", "",
        ],
        13,
    );
    assert!(protocol.contains(&format!("{top}\n{bottom}")));
}

#[test]
fn test_degraded_pdop_is_flagged() {
    let mut warn = create_test_measurement("W");
    warn.pdop = dec!(7.5);
    let mut alert = create_test_measurement("X");
    alert.pdop = dec!(41);

    let protocol = renderer().render(&[warn, alert], &[], &[], false);

    assert!(protocol.contains("*7.5"));
    assert!(protocol.contains("#41"));
}

#[test]
fn test_long_mount_point_is_shortened() {
    let mut measurement = create_test_measurement("A");
    measurement.mount_point = "VERYLONGMOUNTPOINT".to_string();

    let protocol = renderer().render(&[measurement], &[], &[], false);

    assert!(protocol.contains("VERYLONGMO.."));
    assert!(!protocol.contains("VERYLONGMOUNTPOINT"));
}

#[test]
fn test_code_and_description_share_one_column() {
    let mut measurement = create_test_measurement("A");
    measurement.code = "fence".to_string();
    measurement.description = "west corner".to_string();

    let protocol = renderer().render(&[measurement], &[], &[], false);

    assert!(protocol.contains("fence west corner"));
}

#[test]
fn test_averaging_block_for_repeat_occupations() {
    let first = create_test_measurement("A.1");
    let mut second = create_test_measurement("A.2");
    second.longitude = dec!(745123.45);
    second.latitude = dec!(1043210.92);
    second.height = dec!(228.41);
    second.time_start = test_time(10, 45, 30);
    second.time_end = test_time(10, 48, 30);

    let measurements = vec![first, second];
    let aggregated = aggregate(&measurements);

    let protocol = renderer().render(
        &measurements,
        &aggregated.points,
        &aggregated.differences,
        false,
    );

    // Signed member deviations from the averaged position
    let member_row = expect_row(
        &[
            "A.1",
            "745123.41",
            "1043210.88",
            "228.37",
            "-0.02",
            "-0.02",
            "-0.02",
        ],
        13,
    );
    assert!(protocol.contains(&member_row));
    assert!(protocol.contains(&"-".repeat(13 * 7)));
    assert!(protocol.contains("Cas.odstup: 0 dny 0 hodiny 30 minut 0 vteřiny"));
}

#[test]
fn test_single_occupation_point_has_no_averaging_block() {
    let measurement = create_test_measurement("B");
    let aggregated = aggregate(std::slice::from_ref(&measurement));

    let protocol = renderer().render(
        &[measurement],
        &aggregated.points,
        &aggregated.differences,
        false,
    );

    assert!(!protocol.contains(&"-".repeat(13 * 7)));
    assert!(protocol.contains("Cislo bodu"));
}

#[test]
fn test_coordinates_section_lists_points() {
    let point = create_test_point("A");

    let protocol = renderer().render(&[], &[point], &[], false);

    let expected = expect_row(&["A", "745123.41", "1043210.88", "228.37", "mark"], 18);
    assert!(protocol.contains(&expected));
}

#[test]
fn test_differences_section_row_layout() {
    let difference = MeasurementDifference {
        name: "A".to_string(),
        longitude: dec!(0.04),
        latitude: dec!(0.04),
        height: dec!(0.04),
        distance: dec!(0.069),
        delta_time: Duration::minutes(30),
    };

    let protocol = renderer().render(&[], &[], &[difference], false);

    let expected = expect_row(&["A", "0.04", "0.04", "0.04", "0.07", "30m 00s"], 18);
    assert!(protocol.contains(&expected));
}

#[test]
fn test_values_are_rounded_to_requested_precision() {
    let mut measurement = create_test_measurement("A");
    measurement.longitude = dec!(745123.4567);

    let protocol = TextProtocol::new(create_test_survey(), 3).render(&[measurement], &[], &[], false);

    assert!(protocol.contains("745123.457"));
    assert!(!protocol.contains("745123.4567"));
}

#[test]
fn test_antenna_height_is_not_rounded() {
    let mut measurement = create_test_measurement("A");
    measurement.antenna_height = dec!(1.7995);

    let protocol = renderer().render(&[measurement], &[], &[], false);

    assert!(protocol.contains("1.7995"));
}

#[test]
fn test_a4_fit_uses_single_header_line_and_wraps() {
    let measurement = create_test_measurement("A.1");

    let protocol = renderer().render(&[measurement], &[], &[], true);

    assert!(protocol.contains("Kod bodu"));
    assert!(protocol.contains("Antena vyska (FC)"));
    assert!(!protocol.contains("RTK fix"));
    assert!(protocol
        .split('\n')
        .all(|line| line.chars().count() <= 80));
}

#[test]
fn test_plain_render_keeps_wide_table_lines() {
    let measurement = create_test_measurement("A.1");

    let protocol = renderer().render(&[measurement], &[], &[], false);

    assert!(protocol.split('\n').any(|line| line.chars().count() > 80));
}

#[test]
fn test_averaged_only_listing() {
    let mut first = create_test_point("A");
    first.is_averaged = true;
    let second = create_test_point("B");

    let listing = renderer().render_averaged_only(&[first, second]);

    let expected_first = expect_row(&["A", "745123.41", "1043210.88", "228.37", "mark"], 18);
    let expected_second = expect_row(&["B", "745123.41", "1043210.88", "228.37", "mark"], 18);
    assert_eq!(listing, format!("{expected_first}\n{expected_second}"));
    assert!(!listing.contains("PROTOKOL"));
}
