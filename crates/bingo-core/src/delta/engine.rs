//! Delta computation engine.
//!
//! The core entry point is [`compute_delta`], which walks the "after"
//! snapshot and resolves every leaf against the matching "before" leaf.

use crate::catalogue::{Metric, Subcategory};
use crate::errors::Result;
use crate::model::{Delta, Phase, Snapshot, Stat, UNTRACKED_SENTINEL};
use crate::store::SnapshotStore;
use std::collections::BTreeMap;

/// Resolve one leaf of the delta.
///
/// A tracked "before" value is subtracted from the raw "after" value; an
/// untracked or absent one leaves "after" as-is. A result equal to the
/// `-1` sentinel is then coerced to `0`, so no leaf ever reads as untracked.
///
/// | after | before | result |
/// |---|---|---|
/// | `Tracked(a)` | `Tracked(b)` | `a - b` (negative kept, except `-1`) |
/// | `Tracked(a)` | `Untracked` or absent | `a` |
/// | `Untracked` | `Tracked(b)` | `-1 - b` (`0` when `b == 0`) |
/// | `Untracked` | `Untracked` or absent | `0` |
pub fn resolve_stat(after: Stat, before: Option<Stat>) -> i64 {
    let raw = i64::from(after);
    let diff = match before {
        Some(Stat::Tracked(b)) => raw.saturating_sub(b),
        _ => raw,
    };
    if diff == UNTRACKED_SENTINEL {
        0
    } else {
        diff
    }
}

/// Compute the per-metric change between two snapshots of one participant.
///
/// "after" drives the walk: subcategories only present in "before" are
/// dropped, subcategories only present in "after" resolve as if every
/// "before" value were untracked.
pub fn compute_delta(before: &Snapshot, after: &Snapshot) -> Delta {
    Delta {
        skills: diff_table(&before.skills, &after.skills, |a, b| {
            a.zip_map(b, resolve_stat)
        }),
        minigames: diff_table(&before.minigames, &after.minigames, |a, b| {
            a.zip_map(b, resolve_stat)
        }),
        bosses: diff_table(&before.bosses, &after.bosses, |a, b| {
            a.zip_map(b, resolve_stat)
        }),
    }
}

fn diff_table<K, L, D>(
    before: &BTreeMap<K, L>,
    after: &BTreeMap<K, L>,
    diff: impl Fn(&L, Option<&L>) -> D,
) -> BTreeMap<K, D>
where
    K: Ord + Copy,
{
    after
        .iter()
        .map(|(key, line)| (*key, diff(line, before.get(key))))
        .collect()
}

/// Fetch both snapshots for one participant and compute their delta.
///
/// # Errors
///
/// Propagates the store's failure (typically `NotFound`) untouched; no
/// defaults are substituted for missing snapshots.
pub fn participant_delta<S: SnapshotStore + ?Sized>(
    store: &S,
    team: &str,
    participant: &str,
) -> Result<Delta> {
    let before = store.fetch_snapshot(team, participant, Phase::Before)?;
    let after = store.fetch_snapshot(team, participant, Phase::After)?;
    tracing::debug!(team, participant, "computing participant delta");
    Ok(compute_delta(&before, &after))
}

impl Delta {
    /// Non-zero leaves in catalogue order
    pub fn changes(&self) -> Vec<(Subcategory, Metric, i64)> {
        self.leaves()
            .into_iter()
            .filter(|(_, _, value)| *value != 0)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::{Boss, Skill};
    use crate::model::{BossLine, SkillLine};

    fn boss(kills: i64) -> BossLine<Stat> {
        BossLine {
            rank: Stat::Untracked,
            kills: Stat::from(kills),
        }
    }

    #[test]
    fn test_resolve_table() {
        assert_eq!(resolve_stat(Stat::Tracked(15), Some(Stat::Tracked(10))), 5);
        assert_eq!(resolve_stat(Stat::Tracked(20), Some(Stat::Untracked)), 20);
        assert_eq!(resolve_stat(Stat::Tracked(20), None), 20);
        assert_eq!(resolve_stat(Stat::Untracked, Some(Stat::Tracked(7))), -8);
        assert_eq!(resolve_stat(Stat::Untracked, Some(Stat::Tracked(0))), 0);
        assert_eq!(resolve_stat(Stat::Untracked, Some(Stat::Untracked)), 0);
        assert_eq!(resolve_stat(Stat::Untracked, None), 0);
    }

    #[test]
    fn test_decrease_is_preserved() {
        assert_eq!(resolve_stat(Stat::Tracked(900), Some(Stat::Tracked(1000))), -100);
        assert_eq!(resolve_stat(Stat::Tracked(3), Some(Stat::Tracked(5))), -2);
    }

    #[test]
    fn test_difference_of_minus_one_reads_as_zero() {
        assert_eq!(resolve_stat(Stat::Tracked(4), Some(Stat::Tracked(5))), 0);
    }

    #[test]
    fn test_before_only_subcategory_is_dropped() {
        let mut before = Snapshot::new();
        before.bosses.insert(Boss::Obor, boss(3));
        let mut after = Snapshot::new();
        after.bosses.insert(Boss::Zulrah, boss(4));

        let delta = compute_delta(&before, &after);
        assert_eq!(delta.bosses.len(), 1);
        assert!(delta.bosses.contains_key(&Boss::Zulrah));
    }

    #[test]
    fn test_inputs_are_not_mutated() {
        let mut before = Snapshot::new();
        before.skills.insert(
            Skill::Attack,
            SkillLine {
                rank: Stat::Tracked(50),
                level: Stat::Tracked(70),
                xp: Stat::Tracked(1000),
            },
        );
        let mut after = before.clone();
        after.skills.get_mut(&Skill::Attack).unwrap().xp = Stat::Tracked(1500);
        let (before_copy, after_copy) = (before.clone(), after.clone());

        let delta = compute_delta(&before, &after);

        assert_eq!(before, before_copy);
        assert_eq!(after, after_copy);
        assert_eq!(delta.skills[&Skill::Attack].xp, 500);
    }

    #[test]
    fn test_changes_skip_zero_leaves() {
        let mut before = Snapshot::new();
        before.bosses.insert(Boss::Zulrah, boss(10));
        let mut after = Snapshot::new();
        after.bosses.insert(Boss::Zulrah, boss(12));

        let changes = compute_delta(&before, &after).changes();
        assert_eq!(
            changes,
            vec![(Subcategory::Boss(Boss::Zulrah), Metric::Kills, 2)]
        );
    }
}
