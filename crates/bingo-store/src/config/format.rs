use bingo_core::catalogue::{Category, Metric};
use bingo_core::errors::{EventError, ExError};
use bingo_core::model::{Roster, Team};
use bingo_core::mvp::RankingMetrics;
use bingo_core::store::RosterProvider;
use serde::{Deserialize, Serialize};

/// Parsed event configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EventConfig {
    pub teams: Vec<Team>,
    #[serde(default)]
    pub ranking: RankingOverrides,
}

/// Per-category replacements for the default ranking metrics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RankingOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Metric>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minigames: Option<Metric>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bosses: Option<Metric>,
}

impl RankingOverrides {
    /// Apply the overrides on top of the defaults
    ///
    /// # Errors
    ///
    /// `MetricNotTracked` if an override names a metric its category lacks
    pub fn resolve(&self) -> Result<RankingMetrics, EventError> {
        let mut metrics = RankingMetrics::default();
        for (category, metric) in [
            (Category::Skills, self.skills),
            (Category::Minigames, self.minigames),
            (Category::Bosses, self.bosses),
        ] {
            if let Some(metric) = metric {
                metrics = metrics.with_override(category, metric)?;
            }
        }
        Ok(metrics)
    }
}

impl EventConfig {
    /// Validated roster in configuration order
    ///
    /// # Errors
    ///
    /// `NoTeams` when the list is empty, otherwise whatever
    /// [`Roster::new`] rejects
    pub fn roster(&self) -> Result<Roster, EventError> {
        if self.teams.is_empty() {
            return Err(EventError::NoTeams);
        }
        Roster::new(self.teams.clone())
    }

    /// # Errors
    ///
    /// See [`RankingOverrides::resolve`]
    pub fn ranking_metrics(&self) -> Result<RankingMetrics, EventError> {
        self.ranking.resolve()
    }
}

impl RosterProvider for EventConfig {
    fn list_teams(&self) -> bingo_core::Result<Roster> {
        self.roster().map_err(ExError::from)
    }
}
