//! Bingo CLI
//!
//! Command-line interface for bingo event deltas and MVP rankings

use bingo_core::logging_facility::{init, Profile};
use clap::{Parser, Subcommand, ValueEnum};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "bingo")]
#[command(about = "Bingo - event progress deltas and MVP rankings", long_about = None)]
struct Cli {
    /// Log output format (logs go to stderr)
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show per-participant progress between the two captures
    Delta(commands::delta::DeltaArgs),
    /// Rank each team's best performer per subcategory
    Mvp(commands::mvp::MvpArgs),
    /// List the event roster, or prepare the capture directories
    Roster(commands::roster::RosterArgs),
    /// Validate a snapshot file and store it in the capture layout
    Import(commands::import::ImportArgs),
}

fn main() {
    let cli = Cli::parse();

    init(match cli.log_format {
        LogFormat::Text => Profile::Development,
        LogFormat::Json => Profile::Production,
    });

    let result = match cli.command {
        Commands::Delta(args) => commands::delta::execute(args),
        Commands::Mvp(args) => commands::mvp::execute(args),
        Commands::Roster(args) => commands::roster::execute(args),
        Commands::Import(args) => commands::import::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
