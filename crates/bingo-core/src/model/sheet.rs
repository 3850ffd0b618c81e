//! Stat sheets: the typed `category → subcategory → metric` structure.
//!
//! One generic [`StatSheet`] carries both captured snapshots (`Stat` leaves)
//! and computed deltas (`i64` leaves), so the two always share a shape.
//! Tables are `BTreeMap`s keyed by catalogue enums, which makes iteration
//! follow catalogue order.

use crate::catalogue::{Boss, Metric, Minigame, Skill, Subcategory};
use crate::model::stat::Stat;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

macro_rules! stat_line {
    ($(#[$meta:meta])* $name:ident { $($field:ident => $metric:ident),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        pub struct $name<V> {
            $(pub $field: V,)+
        }

        impl<V: Copy> $name<V> {
            /// Value for `metric`, or `None` if this line does not record it
            pub fn get(&self, metric: Metric) -> Option<V> {
                match metric {
                    $(Metric::$metric => Some(self.$field),)+
                    _ => None,
                }
            }

            /// `(metric, value)` pairs in wire order
            pub fn entries(&self) -> Vec<(Metric, V)> {
                vec![$((Metric::$metric, self.$field)),+]
            }

            /// Combine field-by-field with an optional counterpart line
            pub fn zip_map<U>(
                &self,
                other: Option<&Self>,
                mut f: impl FnMut(V, Option<V>) -> U,
            ) -> $name<U> {
                $name {
                    $($field: f(self.$field, other.map(|o| o.$field)),)+
                }
            }
        }
    };
}

stat_line!(
    /// Per-skill record
    SkillLine { rank => Rank, level => Level, xp => Xp }
);

stat_line!(
    /// Per-minigame record
    MinigameLine { rank => Rank, score => Score }
);

stat_line!(
    /// Per-boss record
    BossLine { rank => Rank, kills => Kills }
);

/// Statistics for one participant, grouped by category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatSheet<V> {
    pub skills: BTreeMap<Skill, SkillLine<V>>,
    pub minigames: BTreeMap<Minigame, MinigameLine<V>>,
    pub bosses: BTreeMap<Boss, BossLine<V>>,
}

/// Captured statistics at one point in time
pub type Snapshot = StatSheet<Stat>;

/// Per-metric change between two snapshots of the same participant
pub type Delta = StatSheet<i64>;

impl<V> Default for StatSheet<V> {
    fn default() -> Self {
        Self {
            skills: BTreeMap::new(),
            minigames: BTreeMap::new(),
            bosses: BTreeMap::new(),
        }
    }
}

impl<V: Copy> StatSheet<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if the sheet has an entry for `subcategory`
    pub fn contains(&self, subcategory: Subcategory) -> bool {
        match subcategory {
            Subcategory::Skill(s) => self.skills.contains_key(&s),
            Subcategory::Minigame(m) => self.minigames.contains_key(&m),
            Subcategory::Boss(b) => self.bosses.contains_key(&b),
        }
    }

    /// Leaf value at `(subcategory, metric)`
    ///
    /// `None` when the subcategory is absent from this sheet, or when the
    /// metric is not recorded for the subcategory's category.
    pub fn metric(&self, subcategory: Subcategory, metric: Metric) -> Option<V> {
        match subcategory {
            Subcategory::Skill(s) => self.skills.get(&s).and_then(|l| l.get(metric)),
            Subcategory::Minigame(m) => self.minigames.get(&m).and_then(|l| l.get(metric)),
            Subcategory::Boss(b) => self.bosses.get(&b).and_then(|l| l.get(metric)),
        }
    }

    /// Every `(subcategory, metric, value)` leaf in catalogue order
    pub fn leaves(&self) -> Vec<(Subcategory, Metric, V)> {
        let mut out = Vec::new();
        for (skill, line) in &self.skills {
            out.extend(
                line.entries()
                    .into_iter()
                    .map(|(m, v)| (Subcategory::Skill(*skill), m, v)),
            );
        }
        for (minigame, line) in &self.minigames {
            out.extend(
                line.entries()
                    .into_iter()
                    .map(|(m, v)| (Subcategory::Minigame(*minigame), m, v)),
            );
        }
        for (boss, line) in &self.bosses {
            out.extend(
                line.entries()
                    .into_iter()
                    .map(|(m, v)| (Subcategory::Boss(*boss), m, v)),
            );
        }
        out
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty() && self.minigames.is_empty() && self.bosses.is_empty()
    }
}
