//! Import command
//!
//! Usage: bingo import --team <TEAM> --participant <ID> --phase <before|after> <FILE>

use super::{elapsed_ms, PhaseArg};
use bingo_core::errors::{ExError, ExErrorKind};
use bingo_core::model::Phase;
use bingo_core::snapshot::parse_snapshot_bytes;
use bingo_core::{log_op_end, log_op_error, log_op_start};
use bingo_store::FsSnapshotStore;
use clap::Args;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Hiscores JSON file to import
    pub file: PathBuf,

    #[arg(long)]
    pub team: String,

    #[arg(long)]
    pub participant: String,

    #[arg(long, value_enum)]
    pub phase: PhaseArg,

    /// Root of the capture layout
    #[arg(long, default_value = "stats")]
    pub stats: PathBuf,
}

/// Execute import command
pub fn execute(args: ImportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let start = Instant::now();
    log_op_start!(
        "cli_import",
        team = args.team.as_str(),
        participant = args.participant.as_str()
    );

    match run(&args) {
        Ok(path) => {
            log_op_end!("cli_import", duration_ms = elapsed_ms(start));
            println!("✓ Imported to {}", path.display());
            Ok(())
        }
        Err(err) => {
            log_op_error!("cli_import", err.clone(), duration_ms = elapsed_ms(start));
            Err(err.into())
        }
    }
}

fn run(args: &ImportArgs) -> Result<PathBuf, ExError> {
    let bytes = std::fs::read(&args.file).map_err(|e| {
        ExError::new(ExErrorKind::Io)
            .with_op("cli_import")
            .with_message(format!("{}: {}", args.file.display(), e))
    })?;

    let phase = Phase::from(args.phase);
    let snapshot = parse_snapshot_bytes(&bytes).map_err(|e| {
        e.with_team(args.team.clone())
            .with_participant(args.participant.clone())
            .with_phase(phase.as_str())
    })?;

    FsSnapshotStore::new(&args.stats).put_snapshot(&args.team, &args.participant, phase, &snapshot)
}
