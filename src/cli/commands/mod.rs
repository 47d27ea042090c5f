//! Command implementations for the RTK processor CLI
//!
//! This module contains the main command execution logic and reporting for
//! the CLI interface. Each command is implemented in its own module:
//! - `process`: the full file-to-protocol pipeline
//! - `inspect`: parse and validate a file without writing output

pub mod inspect;
pub mod process;
pub mod shared;

pub use shared::ProcessingSummary;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Dispatch to the selected subcommand
pub fn run(args: Args) -> Result<ProcessingSummary> {
    match args.get_command() {
        Commands::Process(process_args) => process::run_process(process_args),
        Commands::Inspect(inspect_args) => inspect::run_inspect(inspect_args),
    }
}
