//! Ranking pass over a roster.
//!
//! Deltas are computed once per participant up front ([`collect_deltas`])
//! and reused for every subcategory of the pass. Nothing is cached between
//! passes.

use crate::catalogue::{Category, Metric, Subcategory};
use crate::delta::participant_delta;
use crate::model::{Delta, Roster};
use crate::mvp::model::{MvpEntry, MvpReport, RankingMetrics, SkippedParticipant};
use crate::store::SnapshotStore;
use crate::{log_op_end, log_op_start};
use bingo_core_types::RunId;
use std::time::Instant;

/// Deltas of one team's members, in roster order
#[derive(Debug, Clone, Default)]
pub struct TeamDeltas {
    pub team: String,
    pub members: Vec<(String, Delta)>,
}

/// Every available delta of a roster, grouped by team in roster order
#[derive(Debug, Clone, Default)]
pub struct RosterDeltas {
    teams: Vec<TeamDeltas>,
    skipped: Vec<SkippedParticipant>,
}

impl RosterDeltas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a member's delta, opening a new team group when `team` changes
    pub fn push(&mut self, team: &str, participant: impl Into<String>, delta: Delta) {
        let group = self.team_group(team);
        group.members.push((participant.into(), delta));
    }

    /// Register a team with no computable members yet
    pub fn push_team(&mut self, team: &str) {
        self.team_group(team);
    }

    fn team_group(&mut self, team: &str) -> &mut TeamDeltas {
        let idx = match self.teams.iter().position(|t| t.team == team) {
            Some(idx) => idx,
            None => {
                self.teams.push(TeamDeltas {
                    team: team.to_string(),
                    members: Vec::new(),
                });
                self.teams.len() - 1
            }
        };
        &mut self.teams[idx]
    }

    pub fn teams(&self) -> &[TeamDeltas] {
        &self.teams
    }

    pub fn skipped(&self) -> &[SkippedParticipant] {
        &self.skipped
    }

    pub fn delta(&self, team: &str, participant: &str) -> Option<&Delta> {
        self.teams
            .iter()
            .find(|t| t.team == team)?
            .members
            .iter()
            .find(|(p, _)| p == participant)
            .map(|(_, d)| d)
    }
}

/// Compute every member's delta once
///
/// A member whose snapshots cannot be fetched is recorded as skipped and
/// logged at `warn`; the rest of the roster is still processed.
pub fn collect_deltas<S: SnapshotStore + ?Sized>(roster: &Roster, store: &S) -> RosterDeltas {
    let mut deltas = RosterDeltas::new();
    for team in roster.teams() {
        deltas.push_team(&team.name);
        for member in &team.members {
            match participant_delta(store, &team.name, member) {
                Ok(delta) => deltas.push(&team.name, member.clone(), delta),
                Err(err) => {
                    tracing::warn!(
                        team = team.name.as_str(),
                        participant = member.as_str(),
                        err.code = err.code(),
                        "skipping participant without a usable delta: {}",
                        err
                    );
                    deltas.skipped.push(SkippedParticipant {
                        team: team.name.clone(),
                        participant: member.clone(),
                        code: err.code().to_string(),
                        message: err.to_string(),
                    });
                }
            }
        }
    }
    deltas
}

/// Rank the teams' best performers for one subcategory
///
/// Members whose delta has no entry for `subcategory` are ignored. A team
/// whose best difference is not positive is left out.
pub fn get_specific_mvps(deltas: &RosterDeltas, subcategory: Subcategory, metric: Metric) -> Vec<MvpEntry> {
    let mut mvps: Vec<MvpEntry> = Vec::new();

    for team in deltas.teams() {
        let mut best: Option<(&str, i64)> = None;
        for (participant, delta) in &team.members {
            let Some(difference) = delta.metric(subcategory, metric) else {
                continue;
            };
            if best.map_or(true, |(_, current)| difference > current) {
                best = Some((participant.as_str(), difference));
            }
        }

        if let Some((participant, difference)) = best {
            if difference > 0 {
                mvps.push(MvpEntry {
                    participant: participant.to_string(),
                    team: team.team.clone(),
                    difference,
                });
            }
        }
    }

    // sort_by is stable: equal differences keep team order
    mvps.sort_by(|a, b| b.difference.cmp(&a.difference));
    mvps
}

/// Run a full ranking pass over every catalogue subcategory
pub fn get_all_mvps<S: SnapshotStore + ?Sized>(
    roster: &Roster,
    metrics: &RankingMetrics,
    store: &S,
) -> MvpReport {
    let start = Instant::now();
    let run_id = RunId::new();
    log_op_start!(
        "get_all_mvps",
        run_id = run_id.as_str(),
        team_count = roster.teams().len() as u64
    );

    let deltas = collect_deltas(roster, store);
    let mut report = MvpReport::empty(run_id, *metrics);

    for category in Category::ALL.iter().copied() {
        let metric = metrics.for_category(category);
        for subcategory in category.subcategories() {
            report.insert(subcategory, get_specific_mvps(&deltas, subcategory, metric));
        }
    }
    report.skipped = deltas.skipped;

    log_op_end!(
        "get_all_mvps",
        duration_ms = start.elapsed().as_millis() as u64,
        run_id = report.run_id.as_str(),
        skipped_count = report.skipped.len() as u64
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::Boss;
    use crate::model::BossLine;

    fn kills(value: i64) -> Delta {
        let mut delta = Delta::new();
        delta.bosses.insert(Boss::Zulrah, BossLine { rank: 0, kills: value });
        delta
    }

    const ZULRAH: Subcategory = Subcategory::Boss(Boss::Zulrah);

    #[test]
    fn test_first_member_wins_ties() {
        let mut deltas = RosterDeltas::new();
        deltas.push("A", "p1", kills(10));
        deltas.push("A", "p2", kills(10));

        let mvps = get_specific_mvps(&deltas, ZULRAH, Metric::Kills);
        assert_eq!(mvps.len(), 1);
        assert_eq!(mvps[0].participant, "p1");
    }

    #[test]
    fn test_non_positive_best_excluded() {
        let mut deltas = RosterDeltas::new();
        deltas.push("A", "p1", kills(0));
        deltas.push("B", "p2", kills(-4));
        deltas.push("C", "p3", kills(1));

        let mvps = get_specific_mvps(&deltas, ZULRAH, Metric::Kills);
        assert_eq!(mvps.len(), 1);
        assert_eq!(mvps[0].team, "C");
    }

    #[test]
    fn test_equal_team_bests_keep_team_order() {
        let mut deltas = RosterDeltas::new();
        deltas.push("A", "p1", kills(7));
        deltas.push("B", "p2", kills(9));
        deltas.push("C", "p3", kills(7));

        let teams: Vec<_> = get_specific_mvps(&deltas, ZULRAH, Metric::Kills)
            .into_iter()
            .map(|e| e.team)
            .collect();
        assert_eq!(teams, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_members_without_subcategory_ignored() {
        let mut deltas = RosterDeltas::new();
        deltas.push("A", "p1", Delta::new());
        deltas.push_team("B");

        assert!(get_specific_mvps(&deltas, ZULRAH, Metric::Kills).is_empty());
    }

    #[test]
    fn test_push_groups_by_team() {
        let mut deltas = RosterDeltas::new();
        deltas.push("A", "p1", kills(1));
        deltas.push("B", "p2", kills(2));
        deltas.push("A", "p3", kills(3));

        assert_eq!(deltas.teams().len(), 2);
        assert_eq!(deltas.teams()[0].members.len(), 2);
        assert_eq!(deltas.delta("A", "p3"), Some(&kills(3)));
        assert_eq!(deltas.delta("B", "p3"), None);
    }
}
