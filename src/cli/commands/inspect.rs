//! Inspect command implementation for the RTK processor CLI
//!
//! Parses and validates a measurement export without writing any output,
//! reporting per-file statistics and the skipped-row list.

use super::shared::{ProcessingSummary, setup_logging};
use crate::app::services::aggregator::aggregate;
use crate::app::services::csv_reader::{MeasurementReader, ParseResult};
use crate::cli::args::InspectArgs;
use crate::Result;
use colored::*;
use std::time::Instant;
use tracing::{debug, info};

/// Inspect command runner
///
/// Runs the parsing and aggregation stages only. Fatal file problems (missing
/// mandatory columns, empty file, unknown format) propagate as errors, which
/// the binary turns into a non-zero exit status.
pub fn run_inspect(args: InspectArgs) -> Result<ProcessingSummary> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level(), false)?;

    info!("Inspecting {}", args.input.display());
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let ingest_options = args.ingest_options();
    let reader = MeasurementReader::new(ingest_options);
    let parsed = reader.read_file(&args.input)?;
    let aggregated = aggregate(&parsed.measurements);

    print_report(&args, &parsed, aggregated.points.len());

    Ok(ProcessingSummary {
        measurements_read: parsed.stats.measurements_parsed,
        rows_skipped: parsed.stats.rows_skipped,
        points_produced: aggregated.points.len(),
        points_averaged: aggregated
            .points
            .iter()
            .filter(|point| point.is_averaged)
            .count(),
        differences_computed: aggregated.differences.len(),
        unread_points: parsed.unread_points,
        processing_time: start_time.elapsed(),
        output_files: Vec::new(),
    })
}

/// Print the colored inspection report
fn print_report(args: &InspectArgs, parsed: &ParseResult, points: usize) {
    println!("\n{}", "Inspection report".bright_green().bold());
    println!("  {} {}", "File:".bright_cyan(), args.input.display());
    println!(
        "  {} {}",
        "Format:".bright_cyan(),
        args.ingest_options().format
    );
    println!(
        "  {} {}",
        "Rows:".bright_cyan(),
        parsed.stats.total_rows.to_string().bright_white().bold()
    );
    println!(
        "  {} {}",
        "Measurements:".bright_cyan(),
        parsed
            .stats
            .measurements_parsed
            .to_string()
            .bright_white()
            .bold()
    );
    println!(
        "  {} {}",
        "Points:".bright_cyan(),
        points.to_string().bright_white().bold()
    );
    println!(
        "  {} {:.1}%",
        "Success rate:".bright_cyan(),
        parsed.stats.success_rate()
    );

    if !parsed.unread_points.is_empty() {
        println!(
            "\n{} {}",
            "Skipped rows:".bright_yellow().bold(),
            parsed
                .unread_points
                .len()
                .to_string()
                .bright_white()
                .bold()
        );
        for name in &parsed.unread_points {
            println!("  {}", name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::cli::args::{DelimiterArg, FormatArg, InspectArgs};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn inspect_args(input: &NamedTempFile) -> InspectArgs {
        InspectArgs {
            input: input.path().to_path_buf(),
            format: FormatArg::Emlid,
            delimiter: DelimiterArg::Comma,
            global: false,
            verbose: 0,
        }
    }

    #[test]
    fn test_inspect_reports_counts() {
        let content = "Name,Easting,Northing,Elevation,Antenna height,\
Averaging start,Averaging end,Solution status,PDOP,Easting RMS,Northing RMS,\
Elevation RMS,Code,Mount point,Description,GPS Satellites,GLONASS Satellites,\
Galileo Satellites,BeiDou Satellites,QZSS Satellites\n\
A.1,745123.410,1043210.880,228.370,1.800,\
2024-06-20 10:15:30.5 UTC+02:00,2024-06-20 10:18:30.5 UTC+02:00,\
FIX,1.4,0.009,0.011,0.018,mark,CZEPOS,,9,7,8,2,0\n\
A.2,745123.450,1043210.920,228.410,1.800,\
not a timestamp,2024-06-20 10:28:00.0 UTC+02:00,\
FIX,1.6,0.010,0.012,0.020,mark,CZEPOS,,8,7,8,2,0\n";
        let mut input = NamedTempFile::new().unwrap();
        input.write_all(content.as_bytes()).unwrap();
        input.flush().unwrap();

        let summary = run_inspect(inspect_args(&input)).unwrap();

        assert_eq!(summary.measurements_read, 1);
        assert_eq!(summary.rows_skipped, 1);
        assert_eq!(summary.points_produced, 1);
        assert_eq!(summary.unread_points, vec!["A.2".to_string()]);
        assert!(summary.output_files.is_empty());
    }

    #[test]
    fn test_inspect_fails_on_empty_file() {
        let input = NamedTempFile::new().unwrap();

        let error = run_inspect(inspect_args(&input)).unwrap_err();
        assert!(matches!(error, Error::EmptyFile { .. }));
    }
}
