//! Process command implementation for the RTK processor CLI
//!
//! This module contains the complete processing workflow: parse the export,
//! aggregate repeat occupations, render the protocol, and write outputs.

use super::shared::{ProcessingSummary, setup_logging};
use crate::app::services::aggregator::aggregate;
use crate::app::services::csv_reader::MeasurementReader;
use crate::app::services::protocol::{AveragedPointWriter, TextProtocol};
use crate::cli::args::ProcessArgs;
use crate::{Error, Result};
use colored::*;
use std::time::Instant;
use tracing::{debug, info};

/// Process command runner
///
/// Orchestrates the whole pipeline:
/// 1. Set up logging and validate arguments
/// 2. Parse the export into canonical measurements
/// 3. Aggregate repeat occupations into averaged points
/// 4. Render and write the protocol and the averaged-point CSV
/// 5. Print a summary
pub fn run_process(args: ProcessArgs) -> Result<ProcessingSummary> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level(), args.quiet)?;

    info!("Starting RTK processor");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let ingest_options = args.ingest_options();
    let output_options = args.output_options();
    output_options.validate(ingest_options.is_global)?;
    let survey = args.survey_info()?;

    info!(
        "Reading {} as {} export ({} coordinates)",
        args.input.display(),
        ingest_options.format,
        if ingest_options.is_global {
            "geodetic"
        } else {
            "projected"
        }
    );

    let reader = MeasurementReader::new(ingest_options);
    let parsed = reader.read_file(&args.input)?;

    info!(
        "Parsed {} measurements from {} rows",
        parsed.stats.measurements_parsed, parsed.stats.total_rows
    );

    let aggregated = aggregate(&parsed.measurements);

    let protocol = TextProtocol::new(survey, output_options.precision);
    let document = if args.only_averaged {
        protocol.render_averaged_only(&aggregated.points)
    } else {
        protocol.render(
            &parsed.measurements,
            &aggregated.points,
            &aggregated.differences,
            output_options.fit_a4,
        )
    };

    let protocol_path = args.protocol_path();
    std::fs::write(&protocol_path, &document).map_err(|e| {
        Error::io(
            format!("Failed to write protocol '{}'", protocol_path.display()),
            e,
        )
    })?;
    info!("Protocol written to {}", protocol_path.display());

    let mut output_files = vec![protocol_path];

    if let Some(csv_path) = args.csv_path() {
        let writer = AveragedPointWriter::new(ingest_options, output_options.precision);
        writer.write_file(&csv_path, &aggregated.points)?;
        output_files.push(csv_path);
    }

    let summary = ProcessingSummary {
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
        output_files,
    };

    if !args.quiet {
        print_summary(&summary);
    }

    Ok(summary)
}

/// Print the colored processing summary
fn print_summary(summary: &ProcessingSummary) {
    println!("\n{}", "Processing complete".bright_green().bold());
    println!(
        "  {} {}",
        "Measurements read:".bright_cyan(),
        summary.measurements_read.to_string().bright_white().bold()
    );
    println!(
        "  {} {}",
        "Points produced:".bright_cyan(),
        summary.points_produced.to_string().bright_white().bold()
    );
    println!(
        "  {} {}",
        "Averaged from repeats:".bright_cyan(),
        summary.points_averaged.to_string().bright_white().bold()
    );
    println!(
        "  {} {:.2}s",
        "Elapsed:".bright_cyan(),
        summary.processing_time.as_secs_f64()
    );

    for file in &summary.output_files {
        println!("  {} {}", "Written:".bright_cyan(), file.display());
    }

    if summary.has_skipped_rows() {
        println!(
            "\n{} {}",
            "Skipped rows:".bright_yellow().bold(),
            summary.rows_skipped.to_string().bright_white().bold()
        );
        for name in summary.unread_points.iter().take(10) {
            println!("  {}", name);
        }
        if summary.unread_points.len() > 10 {
            println!("  ...");
        }
    }
}
