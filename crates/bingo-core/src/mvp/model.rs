use crate::catalogue::{Boss, Category, Metric, Minigame, Skill, Subcategory};
use crate::errors::EventError;
use bingo_core_types::RunId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Which metric decides the ranking in each category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankingMetrics {
    skills: Metric,
    minigames: Metric,
    bosses: Metric,
}

impl Default for RankingMetrics {
    /// skills → xp, minigames → score, bosses → kills
    fn default() -> Self {
        Self {
            skills: Metric::Xp,
            minigames: Metric::Score,
            bosses: Metric::Kills,
        }
    }
}

impl RankingMetrics {
    /// # Errors
    ///
    /// `MetricNotTracked` if any metric is not recorded for its category
    pub fn new(skills: Metric, minigames: Metric, bosses: Metric) -> Result<Self, EventError> {
        Self::default()
            .with_override(Category::Skills, skills)?
            .with_override(Category::Minigames, minigames)?
            .with_override(Category::Bosses, bosses)
    }

    /// Replace the metric for one category
    ///
    /// # Errors
    ///
    /// `MetricNotTracked` if `metric` is not recorded for `category`
    pub fn with_override(mut self, category: Category, metric: Metric) -> Result<Self, EventError> {
        if !category.tracks(metric) {
            return Err(EventError::MetricNotTracked {
                category: category.key().to_string(),
                metric: metric.key().to_string(),
            });
        }
        match category {
            Category::Skills => self.skills = metric,
            Category::Minigames => self.minigames = metric,
            Category::Bosses => self.bosses = metric,
        }
        Ok(self)
    }

    pub fn for_category(&self, category: Category) -> Metric {
        match category {
            Category::Skills => self.skills,
            Category::Minigames => self.minigames,
            Category::Bosses => self.bosses,
        }
    }
}

/// One team's representative for a subcategory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MvpEntry {
    pub participant: String,
    pub team: String,
    pub difference: i64,
}

/// Participant left out of a ranking pass because its delta was unavailable
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedParticipant {
    pub team: String,
    pub participant: String,
    /// Stable error code, e.g. `ERR_NOT_FOUND`
    pub code: String,
    pub message: String,
}

/// How a participant placed in one subcategory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Standing {
    /// First place across all teams
    EventMvp,
    /// Best of their team, but not first overall
    TeamMvp,
}

/// Result of one full ranking pass
#[derive(Debug, Clone, Serialize)]
pub struct MvpReport {
    pub run_id: RunId,
    pub generated_at: DateTime<Utc>,
    pub metrics: RankingMetrics,
    pub skills: BTreeMap<Skill, Vec<MvpEntry>>,
    pub minigames: BTreeMap<Minigame, Vec<MvpEntry>>,
    pub bosses: BTreeMap<Boss, Vec<MvpEntry>>,
    pub skipped: Vec<SkippedParticipant>,
}

impl MvpReport {
    pub(crate) fn empty(run_id: RunId, metrics: RankingMetrics) -> Self {
        Self {
            run_id,
            generated_at: Utc::now(),
            metrics,
            skills: BTreeMap::new(),
            minigames: BTreeMap::new(),
            bosses: BTreeMap::new(),
            skipped: Vec::new(),
        }
    }

    pub(crate) fn insert(&mut self, subcategory: Subcategory, entries: Vec<MvpEntry>) {
        match subcategory {
            Subcategory::Skill(s) => {
                self.skills.insert(s, entries);
            }
            Subcategory::Minigame(m) => {
                self.minigames.insert(m, entries);
            }
            Subcategory::Boss(b) => {
                self.bosses.insert(b, entries);
            }
        }
    }

    /// Ordered representatives for a subcategory (empty if nobody progressed)
    pub fn entries(&self, subcategory: Subcategory) -> &[MvpEntry] {
        let list = match subcategory {
            Subcategory::Skill(s) => self.skills.get(&s),
            Subcategory::Minigame(m) => self.minigames.get(&m),
            Subcategory::Boss(b) => self.bosses.get(&b),
        };
        list.map(Vec::as_slice).unwrap_or_default()
    }

    /// Ordered participant ids only
    pub fn names(&self, subcategory: Subcategory) -> Vec<&str> {
        self.entries(subcategory)
            .iter()
            .map(|e| e.participant.as_str())
            .collect()
    }

    pub fn event_mvp(&self, subcategory: Subcategory) -> Option<&MvpEntry> {
        self.entries(subcategory).first()
    }

    /// Placement of `participant` of `team` in `subcategory`, if ranked at all
    pub fn standing(&self, team: &str, participant: &str, subcategory: Subcategory) -> Option<Standing> {
        self.entries(subcategory)
            .iter()
            .position(|e| e.team == team && e.participant == participant)
            .map(|idx| {
                if idx == 0 {
                    Standing::EventMvp
                } else {
                    Standing::TeamMvp
                }
            })
    }

    /// Event MVP of every subcategory that has one, in catalogue order
    pub fn leaders(&self) -> Vec<(Subcategory, &MvpEntry)> {
        Subcategory::all()
            .into_iter()
            .filter_map(|sub| self.event_mvp(sub).map(|e| (sub, e)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(participant: &str, team: &str, difference: i64) -> MvpEntry {
        MvpEntry {
            participant: participant.to_string(),
            team: team.to_string(),
            difference,
        }
    }

    #[test]
    fn test_default_metrics() {
        let metrics = RankingMetrics::default();
        assert_eq!(metrics.for_category(Category::Skills), Metric::Xp);
        assert_eq!(metrics.for_category(Category::Minigames), Metric::Score);
        assert_eq!(metrics.for_category(Category::Bosses), Metric::Kills);
    }

    #[test]
    fn test_untracked_metric_rejected() {
        let err = RankingMetrics::new(Metric::Xp, Metric::Kills, Metric::Kills).unwrap_err();
        assert_eq!(
            err,
            EventError::MetricNotTracked {
                category: "minigames".to_string(),
                metric: "kills".to_string(),
            }
        );
    }

    #[test]
    fn test_override_to_level() {
        let metrics = RankingMetrics::default()
            .with_override(Category::Skills, Metric::Level)
            .unwrap();
        assert_eq!(metrics.for_category(Category::Skills), Metric::Level);
        assert_eq!(metrics.for_category(Category::Bosses), Metric::Kills);
    }

    #[test]
    fn test_standing_and_names() {
        let zulrah = Subcategory::Boss(Boss::Zulrah);
        let mut report = MvpReport::empty(RunId::new(), RankingMetrics::default());
        report.insert(zulrah, vec![entry("p2", "A", 80), entry("p3", "B", 30)]);

        assert_eq!(report.names(zulrah), vec!["p2", "p3"]);
        assert_eq!(report.standing("A", "p2", zulrah), Some(Standing::EventMvp));
        assert_eq!(report.standing("B", "p3", zulrah), Some(Standing::TeamMvp));
        assert_eq!(report.standing("B", "p2", zulrah), None);
        assert!(report.entries(Subcategory::Boss(Boss::Obor)).is_empty());
        assert_eq!(report.leaders().len(), 1);
    }
}
