//! Shared components for CLI commands
//!
//! This module contains common types and functions used across the command
//! implementations.

use crate::Result;
use std::path::PathBuf;
use tracing::debug;

/// Processing statistics for reporting across all commands
#[derive(Debug, Clone, Default)]
pub struct ProcessingSummary {
    /// Rows promoted to canonical measurements
    pub measurements_read: usize,
    /// Rows skipped as unparsable or invalid
    pub rows_skipped: usize,
    /// Averaged points produced
    pub points_produced: usize,
    /// Points averaged from two or more occupations
    pub points_averaged: usize,
    /// Measurement differences computed for repeat occupations
    pub differences_computed: usize,
    /// Point names of the skipped rows
    pub unread_points: Vec<String>,
    /// Total processing time
    pub processing_time: std::time::Duration,
    /// Files written
    pub output_files: Vec<PathBuf>,
}

impl ProcessingSummary {
    /// Whether any source row was dropped during parsing
    pub fn has_skipped_rows(&self) -> bool {
        self.rows_skipped > 0 || !self.unread_points.is_empty()
    }
}

/// Set up structured logging writing to stderr
///
/// Quiet mode drops timestamps and targets for a compact error-only stream.
/// Uses `try_init` so repeated calls (as in tests) are harmless.
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("rtk_processor={}", log_level)));

    let initialized = if quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    if initialized.is_ok() {
        debug!("Logging initialized at level: {}", log_level);
    }

    Ok(())
}
