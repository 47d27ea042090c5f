//! Draft record assembly and per-row validation
//!
//! Field parsing produces a draft whose numeric fields are optional; a row
//! becomes a canonical [`Measurement`] only when every validation-relevant
//! field is present. The accept/reject decision is the whole of row
//! validation, so a rejected draft carries no error, it is simply not a
//! measurement.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::app::models::Measurement;

/// Candidate measurement assembled from one data row
#[derive(Debug, Clone)]
pub struct MeasurementDraft {
    pub name: String,
    pub longitude: Option<Decimal>,
    pub latitude: Option<Decimal>,
    pub height: Option<Decimal>,
    pub antenna_height: Option<Decimal>,
    pub time_start: NaiveDateTime,
    pub time_end: NaiveDateTime,
    pub solution_status: String,
    pub pdop: Option<Decimal>,
    pub accuracy_y: Option<Decimal>,
    pub accuracy_x: Option<Decimal>,
    pub accuracy_z: Option<Decimal>,
    pub code: String,
    pub description: String,
    pub mount_point: String,
    pub gps_satellites: Option<u32>,
    pub glonass_satellites: Option<u32>,
    pub galileo_satellites: Option<u32>,
    pub beidou_satellites: Option<u32>,
    pub qzss_satellites: Option<u32>,
    pub shared_satellites: Option<u32>,
}

impl MeasurementDraft {
    /// Promote the draft to a canonical measurement
    ///
    /// A draft is valid only when longitude, latitude, height, antenna
    /// height, PDOP, and all three accuracy figures are present. Longitude
    /// and latitude are normalized to absolute value here; satellite counts
    /// stay optional.
    pub fn validate(self) -> Option<Measurement> {
        let longitude = self.longitude?;
        let latitude = self.latitude?;
        let height = self.height?;
        let antenna_height = self.antenna_height?;
        let pdop = self.pdop?;
        let accuracy_y = self.accuracy_y?;
        let accuracy_x = self.accuracy_x?;
        let accuracy_z = self.accuracy_z?;

        Some(Measurement {
            name: self.name,
            longitude: longitude.abs(),
            latitude: latitude.abs(),
            height,
            antenna_height,
            time_start: self.time_start,
            time_end: self.time_end,
            solution_status: self.solution_status,
            pdop,
            accuracy_y,
            accuracy_x,
            accuracy_z,
            code: self.code,
            description: self.description,
            mount_point: self.mount_point,
            gps_satellites: self.gps_satellites,
            glonass_satellites: self.glonass_satellites,
            galileo_satellites: self.galileo_satellites,
            beidou_satellites: self.beidou_satellites,
            qzss_satellites: self.qzss_satellites,
            shared_satellites: self.shared_satellites,
        })
    }
}
