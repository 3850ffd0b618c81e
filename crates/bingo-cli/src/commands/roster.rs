//! Roster command
//!
//! Usage: bingo roster [--prepare <before|after>] [--json]

use super::{elapsed_ms, PhaseArg, SourceArgs};
use bingo_core::errors::{ExError, ExErrorKind};
use bingo_core::model::Phase;
use bingo_core::{log_op_end, log_op_error, log_op_start};
use bingo_store::FsSnapshotStore;
use clap::Args;
use std::time::Instant;

#[derive(Debug, Args)]
pub struct RosterArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Create `<stats>/<phase>/<team>/` directories for every team
    #[arg(long, value_enum)]
    pub prepare: Option<PhaseArg>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Execute roster command
pub fn execute(args: RosterArgs) -> Result<(), Box<dyn std::error::Error>> {
    let start = Instant::now();
    log_op_start!("cli_roster");

    match run(&args) {
        Ok(()) => {
            log_op_end!("cli_roster", duration_ms = elapsed_ms(start));
            Ok(())
        }
        Err(err) => {
            log_op_error!("cli_roster", err.clone(), duration_ms = elapsed_ms(start));
            Err(err.into())
        }
    }
}

fn run(args: &RosterArgs) -> Result<(), ExError> {
    let (roster, _) = args.source.load()?;

    if let Some(phase) = args.prepare {
        let phase = Phase::from(phase);
        FsSnapshotStore::new(&args.source.stats).prepare_layout(&roster, phase)?;
        println!(
            "✓ Prepared {} team directories under {}",
            roster.teams().len(),
            args.source.stats.join(phase.dir_name()).display()
        );
        return Ok(());
    }

    if args.json {
        let text = serde_json::to_string_pretty(roster.teams()).map_err(|e| {
            ExError::new(ExErrorKind::Serialization)
                .with_op("cli_roster")
                .with_message(e.to_string())
        })?;
        println!("{}", text);
        return Ok(());
    }

    for team in roster.teams() {
        println!("{} ({})", team.name, team.members.len());
        for member in &team.members {
            println!("  - {}", member);
        }
    }
    Ok(())
}
