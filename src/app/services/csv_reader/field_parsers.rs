//! Field parsing utilities for measurement records
//!
//! This module provides helper functions for pulling typed values out of CSV
//! records. Absent, empty, and unparsable fields all resolve to `None` (or an
//! empty string for text fields); acceptance is decided later by record
//! validation, never here.

use chrono::{DateTime, NaiveDateTime};
use csv::StringRecord;
use rust_decimal::Decimal;
use std::str::FromStr;

use super::columns::ColumnMap;
use crate::constants::{EMLID_DATETIME_FORMAT, NIVEL_DATETIME_FORMAT};

/// Parse a string field, trimmed; absent fields become the empty string
pub fn parse_trimmed_string(record: &StringRecord, columns: &ColumnMap, column: &str) -> String {
    columns
        .value(record, column)
        .map(|value| value.trim().to_string())
        .unwrap_or_default()
}

/// Parse an optional decimal field using the invariant dot notation
pub fn parse_optional_decimal(
    record: &StringRecord,
    columns: &ColumnMap,
    column: &str,
) -> Option<Decimal> {
    let value = columns.value(record, column)?.trim();

    if value.is_empty() {
        return None;
    }

    Decimal::from_str(value).ok()
}

/// Parse an optional decimal field that may use a decimal comma
pub fn parse_comma_decimal(
    record: &StringRecord,
    columns: &ColumnMap,
    column: &str,
) -> Option<Decimal> {
    let value = columns.value(record, column)?.trim().replace(',', ".");

    if value.is_empty() {
        return None;
    }

    Decimal::from_str(&value).ok()
}

/// Parse an optional satellite count field
pub fn parse_optional_count(
    record: &StringRecord,
    columns: &ColumnMap,
    column: &str,
) -> Option<u32> {
    let value = columns.value(record, column)?.trim();

    if value.is_empty() {
        return None;
    }

    value.parse::<u32>().ok()
}

/// Convert a space-separated degrees-minutes-seconds triple to decimal degrees
///
/// The triple must split into exactly three components that all parse as
/// numbers (`degrees + minutes/60 + seconds/3600`); anything else resolves to
/// `None`. Components may use a decimal comma, matching the local-coordinate
/// convention of the same exports.
pub fn parse_dms_degrees(value: &str) -> Option<Decimal> {
    let parts: Vec<&str> = value.split_whitespace().collect();

    if parts.len() != 3 {
        return None;
    }

    let degrees = Decimal::from_str(&parts[0].replace(',', ".")).ok()?;
    let minutes = Decimal::from_str(&parts[1].replace(',', ".")).ok()?;
    let seconds = Decimal::from_str(&parts[2].replace(',', ".")).ok()?;

    Some(degrees + minutes / Decimal::from(60) + seconds / Decimal::from(3600))
}

/// Parse an Emlid timestamp, wall-clock time with a UTC offset suffix
///
/// The offset identifies the displayed zone and is dropped after parsing;
/// deltas within one file compare like with like.
pub fn parse_emlid_datetime(value: &str) -> Option<NaiveDateTime> {
    DateTime::parse_from_str(value.trim(), EMLID_DATETIME_FORMAT)
        .ok()
        .map(|dt| dt.naive_local())
}

/// Parse a Nivel timestamp, already local time
pub fn parse_nivel_datetime(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value.trim(), NIVEL_DATETIME_FORMAT).ok()
}
