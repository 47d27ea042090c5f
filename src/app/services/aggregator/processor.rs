//! Measurement grouping and averaging

use std::collections::HashMap;

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use tracing::{debug, info};

use super::identity::point_name;
use crate::app::models::{AveragedPoint, Measurement, MeasurementDifference};

/// Output of one aggregation pass
#[derive(Debug, Clone, Default)]
pub struct AggregateResult {
    /// One best-estimate position per physical point, in order of first
    /// appearance in the input
    pub points: Vec<AveragedPoint>,

    /// Dispersion records for points observed at two or more distinct
    /// end times
    pub differences: Vec<MeasurementDifference>,
}

/// Aggregate measurements into averaged points and dispersion records
///
/// Groups the input by inferred point identity, averages each group's
/// coordinates with decimal arithmetic, and compares the chronologically
/// first and last occupation of every group. Groups whose first and last
/// end times coincide (single occupations in particular) produce no
/// difference record.
pub fn aggregate(measurements: &[Measurement]) -> AggregateResult {
    let mut group_order: Vec<&str> = Vec::new();
    let mut groups: HashMap<&str, Vec<&Measurement>> = HashMap::new();

    for measurement in measurements {
        let identity = point_name(&measurement.name);
        groups
            .entry(identity)
            .or_insert_with(|| {
                group_order.push(identity);
                Vec::new()
            })
            .push(measurement);
    }

    let mut result = AggregateResult::default();

    for identity in group_order {
        let members = &groups[identity];

        result.points.push(average_group(identity, members));

        if let Some(difference) = group_difference(identity, members) {
            result.differences.push(difference);
        } else {
            debug!(
                "Point {}: single occupation or identical end times, no difference emitted",
                identity
            );
        }
    }

    info!(
        "Aggregated {} measurements into {} points ({} with repeat occupations)",
        measurements.len(),
        result.points.len(),
        result.differences.len()
    );

    result
}

/// Average one group of measurements into a single point
fn average_group(identity: &str, members: &[&Measurement]) -> AveragedPoint {
    let count = Decimal::from(members.len() as u64);
    let first = members[0];

    AveragedPoint {
        name: identity.to_string(),
        longitude: members.iter().map(|m| m.longitude).sum::<Decimal>() / count,
        latitude: members.iter().map(|m| m.latitude).sum::<Decimal>() / count,
        height: members.iter().map(|m| m.height).sum::<Decimal>() / count,
        code: format!("{} {}", first.code, first.description)
            .trim()
            .to_string(),
        is_averaged: members.len() > 1,
    }
}

/// Compare the chronologically first and last occupation of a group
///
/// Returns `None` when the two end times coincide, which covers single
/// occupations as well as repeat occupations sharing one timestamp.
fn group_difference(identity: &str, members: &[&Measurement]) -> Option<MeasurementDifference> {
    let mut chronological: Vec<&Measurement> = members.to_vec();
    chronological.sort_by_key(|m| m.time_end);

    let first = chronological.first()?;
    let last = chronological.last()?;

    let delta_time = last.time_end - first.time_end;
    if delta_time.is_zero() {
        return None;
    }

    Some(MeasurementDifference {
        name: identity.to_string(),
        longitude: (first.longitude - last.longitude).abs(),
        latitude: (first.latitude - last.latitude).abs(),
        height: (first.height - last.height).abs(),
        distance: euclidean_distance(first, last),
        delta_time,
    })
}

/// 3-D distance between two occupations
///
/// The square root is not representable in decimal arithmetic, so only
/// this step drops to binary floating point before converting back.
fn euclidean_distance(first: &Measurement, second: &Measurement) -> Decimal {
    let d_longitude = (first.longitude - second.longitude)
        .to_f64()
        .unwrap_or_default();
    let d_latitude = (first.latitude - second.latitude)
        .to_f64()
        .unwrap_or_default();
    let d_height = (first.height - second.height).to_f64().unwrap_or_default();

    let distance = (d_longitude.powi(2) + d_latitude.powi(2) + d_height.powi(2)).sqrt();

    Decimal::from_f64(distance).unwrap_or_default()
}
