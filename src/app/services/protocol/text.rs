//! Plain-text GNSS (RTK) measurement protocol
//!
//! The protocol is a fixed-layout ASCII document with four tables: the
//! measured points, per-point averaging breakdowns, final coordinates, and
//! first-to-last dispersion. All values are right-aligned into fixed-width
//! columns; the table pad widens when the protocol is re-wrapped for A4.

use rust_decimal::Decimal;

use super::duration;
use crate::app::models::{AveragedPoint, Measurement, MeasurementDifference};
use crate::app::services::aggregator::point_name;
use crate::config::SurveyInfo;
use crate::constants::{
    pdop_marker, A4_LINE_WIDTH, POINTS_TABLE_PAD, POINTS_TABLE_PAD_A4, PROTOCOL_DATE_FORMAT,
    PROTOCOL_TIME_FORMAT, SECTION_SEPARATOR_WIDTH, SUMMARY_TABLE_PAD, TITLE_SEPARATOR_WIDTH,
};

/// Measured-points table headers, stacked over two lines
const POINTS_HEADER_TOP: [&str; 16] = [
    "Bod c.", "Y", "X", "Z", "Kod", "PDOP", "Presnost", "Presnost", "Presnost", "Sit", "Pocet",
    "Antena", "Datum", "Zacatek", "Doba", "RTK fix",
];
const POINTS_HEADER_BOTTOM: [&str; 16] = [
    "", "", "", "", "bodu", "", "Y", "X", "Z", "", "satelitu", "vyska (FC)", "", "mereni",
    "mereni", "",
];

/// Single-line headers used with the wider A4 table pad
const POINTS_HEADER_A4: [&str; 15] = [
    "Bod c.",
    "Y",
    "X",
    "Z",
    "Kod bodu",
    "PDOP",
    "Presnost Y",
    "Presnost X",
    "Presnost Z",
    "Sit",
    "Pocet satelitu",
    "Antena vyska (FC)",
    "Datum",
    "Zacatek mereni",
    "Doba mereni",
];

const AVERAGING_HEADERS: [&str; 7] = ["Cislo bodu", "Y", "X", "Z", "dY", "dX", "dZ"];
const COORDINATES_HEADERS: [&str; 5] = ["Cislo bodu", "Y", "X", "Z", "Kod"];
const DIFFERENCES_HEADERS: [&str; 6] = ["Cislo bodu", "dY", "dX", "dZ", "dM", "delta cas"];

/// Renderer for the plain-text measurement protocol
pub struct TextProtocol {
    survey: SurveyInfo,
    precision: u32,
}

impl TextProtocol {
    pub fn new(survey: SurveyInfo, precision: u32) -> Self {
        Self { survey, precision }
    }

    /// Render the full protocol document
    ///
    /// With `fit_a4` the measured-points table switches to single-line
    /// headers with a wider pad, and the finished document is re-wrapped so
    /// no line exceeds the A4 width.
    pub fn render(
        &self,
        measurements: &[Measurement],
        points: &[AveragedPoint],
        differences: &[MeasurementDifference],
        fit_a4: bool,
    ) -> String {
        let table_pad = if fit_a4 {
            POINTS_TABLE_PAD_A4
        } else {
            POINTS_TABLE_PAD
        };

        let sections = [
            self.title_block(),
            self.points_section(measurements, table_pad, fit_a4),
            self.averaging_section(measurements, points, table_pad),
            self.coordinates_section(points),
            self.differences_section(differences),
        ];

        let mut protocol = sections.join("\n\n");
        protocol.push_str("\n    ");

        if fit_a4 {
            protocol = fit_for_a4(&protocol);
        }

        protocol
    }

    /// Render just the averaged point list, one padded row per point
    pub fn render_averaged_only(&self, points: &[AveragedPoint]) -> String {
        points
            .iter()
            .map(|point| {
                pad_row(
                    &[
                        point.name.clone(),
                        self.rounded(point.longitude),
                        self.rounded(point.latitude),
                        self.rounded(point.height),
                        point.code.clone(),
                    ],
                    SUMMARY_TABLE_PAD,
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn title_block(&self) -> String {
        let separator = "-".repeat(TITLE_SEPARATOR_WIDTH);

        format!(
            "{separator}\n\
             PROTOKOL GNSS (RTK) MERENI\n\
             {separator}\n\
             \n\
             GNSS Senzor: {sensor}\n\
             Software pro transformaci mezi ETRS89 a S-JTSK pomoci zpresnene globalni transformace: {transformation_software}\n\
             Polni software: {field_software}\n\
             Projekce: {projection}\n\
             Model geoidu: {geoid_model}\n\
             Firma: {contractor}\n\
             Meril: {surveyor}\n\
             \n\
             Pro vypocet S-JTSK souradnic a Bpv vysek byla pouzita zpresnena globalni transformace mezi ETRS89 a S-JTSK, realizace od {realization}.",
            sensor = self.survey.sensor,
            transformation_software = self.survey.transformation_software,
            field_software = self.survey.field_software,
            projection = self.survey.projection,
            geoid_model = self.survey.geoid_model,
            contractor = self.survey.contractor,
            surveyor = self.survey.surveyor,
            realization = self.survey.transformation_realization,
        )
    }

    fn points_section(&self, measurements: &[Measurement], table_pad: usize, fit_a4: bool) -> String {
        let header_top = if fit_a4 {
            pad_row(&POINTS_HEADER_A4, table_pad)
        } else {
            pad_row(&POINTS_HEADER_TOP, table_pad)
        };
        let header_bottom = if fit_a4 {
            String::new()
        } else {
            pad_row(&POINTS_HEADER_BOTTOM, table_pad)
        };

        let rows = measurements
            .iter()
            .map(|measurement| pad_row(&self.point_row(measurement, table_pad), table_pad))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "{heading}\n\n{header_top}\n{header_bottom}\n\n{rows}",
            heading = section_heading("POUZITE A MERENE BODY"),
        )
    }

    fn averaging_section(
        &self,
        measurements: &[Measurement],
        points: &[AveragedPoint],
        table_pad: usize,
    ) -> String {
        format!(
            "{heading}\n\n{headers}\n    \n{blocks}",
            heading = section_heading("PRUMEROVANI BODU"),
            headers = pad_row(&AVERAGING_HEADERS, table_pad),
            blocks = self.averaging_blocks(measurements, points, table_pad),
        )
    }

    fn coordinates_section(&self, points: &[AveragedPoint]) -> String {
        let rows = points
            .iter()
            .map(|point| {
                pad_row(
                    &[
                        point.name.clone(),
                        self.rounded(point.longitude),
                        self.rounded(point.latitude),
                        self.rounded(point.height),
                        point.code.clone(),
                    ],
                    SUMMARY_TABLE_PAD,
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "{heading}\n\n{headers}\n\n{rows}",
            heading = section_heading("VYSLEDNE SOURADNICE"),
            headers = pad_row(&COORDINATES_HEADERS, SUMMARY_TABLE_PAD),
        )
    }

    fn differences_section(&self, differences: &[MeasurementDifference]) -> String {
        let rows = differences
            .iter()
            .map(|difference| {
                pad_row(
                    &[
                        difference.name.clone(),
                        self.rounded(difference.longitude),
                        self.rounded(difference.latitude),
                        self.rounded(difference.height),
                        self.rounded(difference.distance),
                        duration::short_czech(difference.delta_time),
                    ],
                    SUMMARY_TABLE_PAD,
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "{heading}\n\n{headers}\n\n{rows}",
            heading = section_heading("ROZDILY MERENI"),
            headers = pad_row(&DIFFERENCES_HEADERS, SUMMARY_TABLE_PAD),
        )
    }

    /// One averaging block per multi-occupation point
    ///
    /// Each block lists the member measurements with their signed deviation
    /// from the averaged position, a dashed rule, and a summary row with the
    /// spelled-out time gap between the first and last member.
    fn averaging_blocks(
        &self,
        measurements: &[Measurement],
        points: &[AveragedPoint],
        table_pad: usize,
    ) -> String {
        let mut blocks = String::new();

        for point in points {
            let mut members: Vec<&Measurement> = measurements
                .iter()
                .filter(|m| point_name(&m.name) == point.name)
                .collect();
            members.sort_by(|a, b| a.name.cmp(&b.name));

            if members.len() <= 1 {
                continue;
            }

            blocks.push('\n');

            for member in &members {
                let row = [
                    member.name.clone(),
                    self.rounded(member.longitude),
                    self.rounded(member.latitude),
                    self.rounded(member.height),
                    self.rounded(member.longitude - point.longitude),
                    self.rounded(member.latitude - point.latitude),
                    self.rounded(member.height - point.height),
                ];
                blocks.push_str(&pad_row(&row, table_pad));
                blocks.push('\n');
            }

            blocks.push_str(&"-".repeat(table_pad * AVERAGING_HEADERS.len()));
            blocks.push('\n');

            // Members are in name order here, so the gap is taken as an
            // absolute value rather than assuming chronology
            let time_gap = (members[members.len() - 1].time_end - members[0].time_end).abs();

            let summary = [
                point.name.clone(),
                self.rounded(point.longitude),
                self.rounded(point.latitude),
                self.rounded(point.height),
                format!("    Cas.odstup: {}", duration::long_czech(time_gap)),
            ];
            blocks.push_str(&pad_row(&summary, table_pad));
            blocks.push('\n');
        }

        blocks
    }

    /// The sixteen table values for one measured point
    fn point_row(&self, measurement: &Measurement, table_pad: usize) -> [String; 16] {
        [
            measurement.name.clone(),
            self.rounded(measurement.longitude),
            self.rounded(measurement.latitude),
            self.rounded(measurement.height),
            format!("{} {}", measurement.code, measurement.description)
                .trim()
                .to_string(),
            format!(
                "{}{}",
                pdop_marker(measurement.pdop),
                self.rounded(measurement.pdop)
            ),
            self.rounded(measurement.accuracy_y),
            self.rounded(measurement.accuracy_x),
            self.rounded(measurement.accuracy_z),
            truncate_to_pad(&measurement.mount_point, table_pad),
            measurement.satellites_count().to_string(),
            measurement.antenna_height.to_string(),
            measurement
                .time_start
                .format(PROTOCOL_DATE_FORMAT)
                .to_string(),
            measurement
                .time_start
                .format(PROTOCOL_TIME_FORMAT)
                .to_string(),
            observation_seconds(measurement),
            measurement.solution_status.clone(),
        ]
    }

    fn rounded(&self, value: Decimal) -> String {
        value.round_dp(self.precision).to_string()
    }
}

fn section_heading(title: &str) -> String {
    let separator = "-".repeat(SECTION_SEPARATOR_WIDTH);
    format!("{separator}\n{title}\n{separator}")
}

fn pad_row<S: AsRef<str>>(values: &[S], width: usize) -> String {
    values
        .iter()
        .map(|value| pad_left(value.as_ref(), width))
        .collect()
}

fn pad_left(value: &str, width: usize) -> String {
    format!("{value:>width$}")
}

/// Shorten a network label so it cannot overflow its column
fn truncate_to_pad(value: &str, table_pad: usize) -> String {
    if value.chars().count() >= table_pad {
        let prefix: String = value.chars().take(table_pad - 3).collect();
        format!("{prefix}..")
    } else {
        value.to_string()
    }
}

/// Observation duration in seconds, fractional only when needed
fn observation_seconds(measurement: &Measurement) -> String {
    let seconds = measurement.observation_duration().num_milliseconds() as f64 / 1000.0;
    format!("{seconds}")
}

/// Re-wrap lines longer than the A4 width into hard chunks
///
/// Wrapped lines are set off by blank lines so the table context stays
/// visible in the printout.
fn fit_for_a4(protocol: &str) -> String {
    let mut wrapped_lines: Vec<String> = Vec::new();

    for line in protocol.split('\n') {
        if line.chars().count() <= A4_LINE_WIDTH {
            wrapped_lines.push(line.to_string());
            continue;
        }

        wrapped_lines.push("\n".to_string());

        let characters: Vec<char> = line.chars().collect();
        for chunk in characters.chunks(A4_LINE_WIDTH) {
            let mut piece: String = chunk.iter().collect();
            piece.push('\n');
            wrapped_lines.push(piece);
        }
    }

    wrapped_lines.join("\n")
}
