//! Data models for RTK survey processing
//!
//! This module contains the canonical record types produced by the format
//! readers and consumed by the aggregator and renderers. A `Measurement` is
//! only constructed after per-row validation has passed, so downstream code
//! never sees a partially-populated record.

use chrono::{Duration, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// =============================================================================
// Canonical Measurement
// =============================================================================

/// One observed epoch at one station occupation
///
/// Longitude and latitude are stored as non-negative magnitudes; the
/// hemisphere sign is a presentation concern and is dropped at ingestion.
/// In projected mode the longitude/latitude/height fields carry
/// easting/northing/elevation values instead.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Measurement {
    /// Point name exactly as read from the source file
    pub name: String,

    /// Geodetic longitude in decimal degrees, or projected easting
    pub longitude: Decimal,

    /// Geodetic latitude in decimal degrees, or projected northing
    pub latitude: Decimal,

    /// Ellipsoidal height, or projected elevation
    pub height: Decimal,

    /// Antenna height above the mark in meters
    pub antenna_height: Decimal,

    /// Observation (averaging) start, wall-clock local time
    pub time_start: NaiveDateTime,

    /// Observation (averaging) end, wall-clock local time
    pub time_end: NaiveDateTime,

    /// Solution status label reported by the receiver (e.g. "FIX")
    pub solution_status: String,

    /// Positional dilution of precision
    pub pdop: Decimal,

    /// Horizontal accuracy estimate along Y
    pub accuracy_y: Decimal,

    /// Horizontal accuracy estimate along X
    pub accuracy_x: Decimal,

    /// Vertical accuracy estimate
    pub accuracy_z: Decimal,

    /// Free-text point code
    pub code: String,

    /// Free-text point description
    pub description: String,

    /// Correction network mount point or method label
    pub mount_point: String,

    /// Per-constellation satellite counts, absent when the format omits them
    pub gps_satellites: Option<u32>,
    pub glonass_satellites: Option<u32>,
    pub galileo_satellites: Option<u32>,
    pub beidou_satellites: Option<u32>,
    pub qzss_satellites: Option<u32>,

    /// Pre-aggregated satellite count reported by some formats
    pub shared_satellites: Option<u32>,
}

impl Measurement {
    /// Total satellite count used in the solution
    ///
    /// The maximum of the pre-aggregated count and the constellation sum,
    /// which guards against double-counting when a format reports both.
    pub fn satellites_count(&self) -> u32 {
        let constellation_sum = self.gps_satellites.unwrap_or(0)
            + self.glonass_satellites.unwrap_or(0)
            + self.galileo_satellites.unwrap_or(0)
            + self.beidou_satellites.unwrap_or(0)
            + self.qzss_satellites.unwrap_or(0);

        self.shared_satellites.unwrap_or(0).max(constellation_sum)
    }

    /// Duration of the observation from averaging start to end
    pub fn observation_duration(&self) -> Duration {
        self.time_end - self.time_start
    }
}

// =============================================================================
// Aggregation Results
// =============================================================================

/// Best-estimate position of one physical point
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AveragedPoint {
    /// Inferred point name shared by the group members
    pub name: String,

    /// Arithmetic mean of the member longitudes
    pub longitude: Decimal,

    /// Arithmetic mean of the member latitudes
    pub latitude: Decimal,

    /// Arithmetic mean of the member heights
    pub height: Decimal,

    /// Code and description of the first group member, concatenated
    pub code: String,

    /// True when the point was averaged from two or more occupations
    pub is_averaged: bool,
}

/// First-to-last dispersion of one point's repeat occupations
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementDifference {
    /// Inferred point name
    pub name: String,

    /// Absolute longitude spread between the chronologically first and last
    pub longitude: Decimal,

    /// Absolute latitude spread between the chronologically first and last
    pub latitude: Decimal,

    /// Absolute height spread between the chronologically first and last
    pub height: Decimal,

    /// 3-D Euclidean distance between the first and last observation
    pub distance: Decimal,

    /// Absolute time span between the first and last observation end
    pub delta_time: Duration,
}
