pub mod delta;
pub mod import;
pub mod mvp;
pub mod roster;

use bingo_core::errors::Result;
use bingo_core::model::{Phase, Roster};
use bingo_core::mvp::RankingMetrics;
use bingo_core::store::RosterProvider;
use bingo_store::{load_event_config, DirectoryRoster};
use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// Where snapshots live and where the roster comes from
#[derive(Debug, Args)]
pub struct SourceArgs {
    /// Root of the capture layout (`before_event/`, `after_event/`)
    #[arg(long, default_value = "stats")]
    pub stats: PathBuf,

    /// Event configuration file (JSON or YAML)
    #[arg(long, default_value = "config.json")]
    pub config: PathBuf,

    /// Discover the roster from `<stats>/before_event/` instead of the config
    #[arg(long)]
    pub from_dir: bool,
}

impl SourceArgs {
    /// Roster and ranking metrics for this invocation
    ///
    /// The directory roster has no ranking section, so it ranks by the defaults.
    pub fn load(&self) -> Result<(Roster, RankingMetrics)> {
        if self.from_dir {
            let roster = DirectoryRoster::new(&self.stats).list_teams()?;
            return Ok((roster, RankingMetrics::default()));
        }
        let config = load_event_config(&self.config)?;
        let metrics = config.ranking_metrics()?;
        Ok((config.list_teams()?, metrics))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PhaseArg {
    Before,
    After,
}

impl From<PhaseArg> for Phase {
    fn from(arg: PhaseArg) -> Self {
        match arg {
            PhaseArg::Before => Phase::Before,
            PhaseArg::After => Phase::After,
        }
    }
}

pub fn elapsed_ms(start: std::time::Instant) -> u64 {
    start.elapsed().as_millis() as u64
}
