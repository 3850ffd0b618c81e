//! MVP command
//!
//! Usage: bingo mvp [--subcategory <CATEGORY.KEY>] [--json]

use super::{elapsed_ms, SourceArgs};
use bingo_core::catalogue::Subcategory;
use bingo_core::errors::{ExError, ExErrorKind};
use bingo_core::mvp::{collect_deltas, get_all_mvps, get_specific_mvps, Standing};
use bingo_core::render::render_mvp_summary;
use bingo_core::{log_op_end, log_op_error, log_op_start};
use bingo_store::FsSnapshotStore;
use clap::Args;
use serde_json::json;
use std::time::Instant;

#[derive(Debug, Args)]
pub struct MvpArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Rank a single subcategory, e.g. `bosses.zulrah`
    #[arg(long)]
    pub subcategory: Option<String>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Execute mvp command
pub fn execute(args: MvpArgs) -> Result<(), Box<dyn std::error::Error>> {
    let start = Instant::now();
    log_op_start!("cli_mvp");

    match run(&args) {
        Ok(()) => {
            log_op_end!("cli_mvp", duration_ms = elapsed_ms(start));
            Ok(())
        }
        Err(err) => {
            log_op_error!("cli_mvp", err.clone(), duration_ms = elapsed_ms(start));
            Err(err.into())
        }
    }
}

fn run(args: &MvpArgs) -> Result<(), ExError> {
    let (roster, metrics) = args.source.load()?;
    let store = FsSnapshotStore::new(&args.source.stats);

    let Some(path) = &args.subcategory else {
        let report = get_all_mvps(&roster, &metrics, &store);
        if args.json {
            println!("{}", to_json(&report)?);
        } else {
            print!("{}", render_mvp_summary(&report));
        }
        return Ok(());
    };

    let subcategory = Subcategory::parse_path(path)?;
    let metric = metrics.for_category(subcategory.category());
    let deltas = collect_deltas(&roster, &store);
    let entries = get_specific_mvps(&deltas, subcategory, metric);

    if args.json {
        let value = json!({
            "subcategory": subcategory.to_string(),
            "metric": metric,
            "entries": entries,
            "skipped": deltas.skipped(),
        });
        println!("{}", to_json(&value)?);
        return Ok(());
    }

    println!("{} (by {})", subcategory, metric);
    if entries.is_empty() {
        println!("  nobody progressed");
    }
    for (idx, entry) in entries.iter().enumerate() {
        let label = match standing_at(idx) {
            Standing::EventMvp => "Event MVP",
            Standing::TeamMvp => "Team MVP",
        };
        println!(
            "  {}. {}: {} ({}) +{}",
            idx + 1,
            label,
            entry.participant,
            entry.team,
            entry.difference
        );
    }
    for skipped in deltas.skipped() {
        eprintln!(
            "skipped {} ({}): {}",
            skipped.participant, skipped.team, skipped.code
        );
    }
    Ok(())
}

fn standing_at(idx: usize) -> Standing {
    if idx == 0 {
        Standing::EventMvp
    } else {
        Standing::TeamMvp
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, ExError> {
    serde_json::to_string_pretty(value).map_err(|e| {
        ExError::new(ExErrorKind::Serialization)
            .with_op("cli_mvp")
            .with_message(e.to_string())
    })
}
