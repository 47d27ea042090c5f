//! Application constants for the RTK processor
//!
//! This module contains column names, date patterns, protocol rendering
//! thresholds, and default values used throughout the application.

// =============================================================================
// Format Names and Delimiters
// =============================================================================

/// Supported measurement format selector names
pub const FORMAT_NAMES: &[&str] = &["emlid", "nivel"];

/// Supported field delimiters
pub const SUPPORTED_DELIMITERS: &[char] = &[',', ';'];

/// Default field delimiter in vendor exports
pub const DEFAULT_DELIMITER: char = ',';

// =============================================================================
// Emlid Format Constants
// =============================================================================

/// Column names in Emlid CSV exports
pub mod emlid_columns {
    pub const NAME: &str = "Name";
    pub const LONGITUDE: &str = "Longitude";
    pub const LATITUDE: &str = "Latitude";
    pub const ELLIPSOIDAL_HEIGHT: &str = "Ellipsoidal height";
    pub const EASTING: &str = "Easting";
    pub const NORTHING: &str = "Northing";
    pub const ELEVATION: &str = "Elevation";
    pub const ANTENNA_HEIGHT: &str = "Antenna height";
    pub const AVERAGING_START: &str = "Averaging start";
    pub const AVERAGING_END: &str = "Averaging end";
    pub const PDOP: &str = "PDOP";
    pub const EASTING_RMS: &str = "Easting RMS";
    pub const NORTHING_RMS: &str = "Northing RMS";
    pub const ELEVATION_RMS: &str = "Elevation RMS";
    pub const SOLUTION_STATUS: &str = "Solution status";
    pub const CODE: &str = "Code";
    pub const MOUNT_POINT: &str = "Mount point";
    pub const DESCRIPTION: &str = "Description";
    pub const GPS_SATELLITES: &str = "GPS Satellites";
    pub const GLONASS_SATELLITES: &str = "GLONASS Satellites";
    pub const GALILEO_SATELLITES: &str = "Galileo Satellites";
    pub const BEIDOU_SATELLITES: &str = "BeiDou Satellites";
    pub const QZSS_SATELLITES: &str = "QZSS Satellites";

    /// Columns required regardless of coordinate mode
    pub const MANDATORY: &[&str] = &[
        NAME,
        ANTENNA_HEIGHT,
        AVERAGING_START,
        AVERAGING_END,
        PDOP,
        EASTING_RMS,
        NORTHING_RMS,
        ELEVATION_RMS,
        CODE,
        MOUNT_POINT,
        GPS_SATELLITES,
        GLONASS_SATELLITES,
        GALILEO_SATELLITES,
        BEIDOU_SATELLITES,
        QZSS_SATELLITES,
    ];

    /// Extra columns required in geodetic mode
    pub const MANDATORY_GLOBAL: &[&str] = &[LONGITUDE, LATITUDE, ELLIPSOIDAL_HEIGHT];

    /// Extra columns required in projected mode
    pub const MANDATORY_LOCAL: &[&str] = &[EASTING, NORTHING, ELEVATION];
}

/// Timestamp pattern in Emlid exports, wall-clock time with a UTC offset
/// suffix (for example `2024-06-20 10:15:30.5 UTC+02:00`)
pub const EMLID_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f UTC%:z";

// =============================================================================
// Nivel Format Constants
// =============================================================================

/// Column names in Nivel Point CSV exports
pub mod nivel_columns {
    pub const NAME: &str = "Název";
    pub const LONGITUDE_DMS: &str = "Zem. délka";
    pub const LATITUDE_DMS: &str = "Zem. šířka";
    pub const HEIGHT_GLOBAL: &str = "H";
    pub const LOCAL_Y: &str = "Y";
    pub const LOCAL_X: &str = "X";
    pub const HEIGHT_LOCAL: &str = "Z";
    pub const ANTENNA_HEIGHT: &str = "Ant H";
    pub const TIME_START: &str = "StartLokální čas";
    pub const TIME_END: &str = "EndLokální čas";
    pub const PDOP: &str = "PDOP";
    pub const HRMS: &str = "HRMS";
    pub const VRMS: &str = "VRMS";
    pub const STATUS: &str = "Status";
    pub const MOUNT_POINT: &str = "MountPoint";
    pub const SHARED_SATELLITES: &str = "Sdílet Sate";
    pub const DESCRIPTION: &str = "Popis";

    /// Columns required regardless of coordinate mode
    pub const MANDATORY: &[&str] = &[
        TIME_START,
        TIME_END,
        NAME,
        PDOP,
        VRMS,
        STATUS,
        MOUNT_POINT,
        SHARED_SATELLITES,
        DESCRIPTION,
    ];

    /// Extra columns required in geodetic mode
    pub const MANDATORY_GLOBAL: &[&str] = &[HEIGHT_GLOBAL];

    /// Extra columns required in projected mode
    pub const MANDATORY_LOCAL: &[&str] = &[HEIGHT_LOCAL];
}

/// Timestamp pattern in Nivel exports, already local time
/// (for example `2024-06-20 10:15:30.5`)
pub const NIVEL_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

// =============================================================================
// Protocol Rendering Constants
// =============================================================================

/// PDOP above this value is flagged as degraded in the protocol
pub const PDOP_WARN_THRESHOLD: u32 = 7;

/// PDOP above this value is flagged as unusable in the protocol
pub const PDOP_ALERT_THRESHOLD: u32 = 40;

/// Marker appended before a degraded PDOP value
pub const PDOP_WARN_MARKER: &str = "*";

/// Marker appended before an unusable PDOP value
pub const PDOP_ALERT_MARKER: &str = "#";

/// Maximum protocol line width for A4 printing
pub const A4_LINE_WIDTH: usize = 80;

/// Column pad width for the measured-points table
pub const POINTS_TABLE_PAD: usize = 13;

/// Wider measured-points pad used when fitting the protocol to A4
pub const POINTS_TABLE_PAD_A4: usize = 20;

/// Column pad width for the summary tables
pub const SUMMARY_TABLE_PAD: usize = 18;

/// Separator line above and below the protocol title
pub const TITLE_SEPARATOR_WIDTH: usize = 38;

/// Separator line around section headings
pub const SECTION_SEPARATOR_WIDTH: usize = 25;

/// Protocol timestamp display formats
pub const PROTOCOL_DATE_FORMAT: &str = "%d.%m.%Y";
pub const PROTOCOL_TIME_FORMAT: &str = "%H:%M:%S";

// =============================================================================
// Precision Defaults
// =============================================================================

/// Display precision bounds for projected (local) coordinates
pub const LOCAL_PRECISION_MIN: u32 = 2;
pub const LOCAL_PRECISION_MAX: u32 = 3;
pub const DEFAULT_LOCAL_PRECISION: u32 = 2;

/// Display precision bounds for geodetic (global) coordinates
pub const GLOBAL_PRECISION_MIN: u32 = 7;
pub const GLOBAL_PRECISION_MAX: u32 = 10;
pub const DEFAULT_GLOBAL_PRECISION: u32 = 9;

// =============================================================================
// Output File Constants
// =============================================================================

/// Default protocol output file extension
pub const PROTOCOL_FILE_EXTENSION: &str = "txt";

/// Suffix appended to the input stem for the averaged-points CSV
pub const AVERAGED_CSV_SUFFIX: &str = "_averaged";

// =============================================================================
// Helper Functions
// =============================================================================

/// Get the marker prefix for a PDOP value rendered in the protocol
pub fn pdop_marker(pdop: rust_decimal::Decimal) -> &'static str {
    if pdop > rust_decimal::Decimal::from(PDOP_ALERT_THRESHOLD) {
        PDOP_ALERT_MARKER
    } else if pdop > rust_decimal::Decimal::from(PDOP_WARN_THRESHOLD) {
        PDOP_WARN_MARKER
    } else {
        ""
    }
}

/// Expected protocol output filename for an input file stem
pub fn protocol_filename(stem: &str) -> String {
    format!("{}.{}", stem, PROTOCOL_FILE_EXTENSION)
}

/// Expected averaged-points CSV filename for an input file stem
pub fn averaged_csv_filename(stem: &str) -> String {
    format!("{}{}.csv", stem, AVERAGED_CSV_SUFFIX)
}

/// Default display precision for a coordinate mode
pub fn default_precision(is_global: bool) -> u32 {
    if is_global {
        DEFAULT_GLOBAL_PRECISION
    } else {
        DEFAULT_LOCAL_PRECISION
    }
}
