use clap::Parser;
use rtk_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(_summary) => {
            // Success - the summary has already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("RTK Processor - GNSS Measurement Averaging Tool");
    println!("===============================================");
    println!();
    println!("Parses GNSS/RTK measurement exports, averages repeat occupations of");
    println!("each surveyed point, and renders the surveyor measurement protocol");
    println!("together with an averaged-point CSV.");
    println!();
    println!("USAGE:");
    println!("    rtk-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    process     Process an export into a protocol and averaged CSV (main command)");
    println!("    inspect     Parse and validate an export without writing output");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Process an Emlid export with projected coordinates:");
    println!("    rtk-processor process survey.csv");
    println!();
    println!("    # Semicolon-delimited Nivel Point export with geodetic coordinates:");
    println!("    rtk-processor process survey.csv --format nivel --delimiter semicolon --global");
    println!();
    println!("    # Render the protocol wrapped for A4 printing with survey metadata:");
    println!("    rtk-processor process survey.csv --fit-a4 --survey-file survey.json");
    println!();
    println!("    # Validate a file and list skipped rows:");
    println!("    rtk-processor inspect survey.csv --format nivel");
    println!();
    println!("For detailed help on any command, use:");
    println!("    rtk-processor <COMMAND> --help");
}
