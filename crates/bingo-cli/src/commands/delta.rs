//! Delta command
//!
//! Usage: bingo delta [--team <TEAM> --participant <ID>] [--json]

use super::{elapsed_ms, SourceArgs};
use bingo_core::delta::participant_delta;
use bingo_core::errors::{ExError, ExErrorKind};
use bingo_core::render::render_delta_summary;
use bingo_core::{log_op_end, log_op_error, log_op_start};
use bingo_store::FsSnapshotStore;
use clap::Args;
use serde_json::json;
use std::time::Instant;

#[derive(Debug, Args)]
pub struct DeltaArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Only this team
    #[arg(long)]
    pub team: Option<String>,

    /// Only this participant (requires --team)
    #[arg(long, requires = "team")]
    pub participant: Option<String>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Execute delta command
pub fn execute(args: DeltaArgs) -> Result<(), Box<dyn std::error::Error>> {
    let start = Instant::now();
    log_op_start!("cli_delta");

    match run(&args) {
        Ok(()) => {
            log_op_end!("cli_delta", duration_ms = elapsed_ms(start));
            Ok(())
        }
        Err(err) => {
            log_op_error!("cli_delta", err.clone(), duration_ms = elapsed_ms(start));
            Err(err.into())
        }
    }
}

fn run(args: &DeltaArgs) -> Result<(), ExError> {
    let store = FsSnapshotStore::new(&args.source.stats);

    let targets: Vec<(String, String)> = match (&args.team, &args.participant) {
        (Some(team), Some(participant)) => vec![(team.clone(), participant.clone())],
        // clap rejects --participant without --team
        (team, _) => {
            let (roster, _) = args.source.load()?;
            let targets: Vec<_> = roster
                .participants()
                .filter(|(t, _)| team.as_deref().map_or(true, |wanted| *t == wanted))
                .map(|(t, p)| (t.to_string(), p.to_string()))
                .collect();
            if let (Some(team), true) = (team, targets.is_empty()) {
                return Err(ExError::new(ExErrorKind::NotFound)
                    .with_op("cli_delta")
                    .with_team(team.clone())
                    .with_message("Team has no participants in the roster"));
            }
            targets
        }
    };

    let mut rendered = Vec::with_capacity(targets.len());
    for (team, participant) in &targets {
        let delta = participant_delta(&store, team, participant)?;
        if args.json {
            rendered.push(json!({
                "team": team,
                "participant": participant,
                "delta": delta,
            }));
        } else {
            print!("{}", render_delta_summary(team, participant, &delta));
            println!();
        }
    }

    if args.json {
        let text = serde_json::to_string_pretty(&rendered).map_err(|e| {
            ExError::new(ExErrorKind::Serialization)
                .with_op("cli_delta")
                .with_message(e.to_string())
        })?;
        println!("{}", text);
    }
    Ok(())
}
