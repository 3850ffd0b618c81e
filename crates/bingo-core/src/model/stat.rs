use serde::{Deserialize, Serialize};

/// Wire value the hiscores format uses for "not ranked / not tracked"
pub const UNTRACKED_SENTINEL: i64 = -1;

/// A captured statistic value
///
/// The hiscores JSON overloads `-1` to mean "not tracked at capture time".
/// That encoding is confined to (de)serialization; in memory the two cases
/// are distinct variants, and a tracked zero is a real zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum Stat {
    Tracked(i64),
    Untracked,
}

impl Stat {
    /// Tracked value, if any
    pub fn value(self) -> Option<i64> {
        match self {
            Stat::Tracked(v) => Some(v),
            Stat::Untracked => None,
        }
    }
}

impl From<i64> for Stat {
    fn from(raw: i64) -> Self {
        if raw == UNTRACKED_SENTINEL {
            Stat::Untracked
        } else {
            Stat::Tracked(raw)
        }
    }
}

impl From<Stat> for i64 {
    fn from(stat: Stat) -> Self {
        match stat {
            Stat::Tracked(v) => v,
            Stat::Untracked => UNTRACKED_SENTINEL,
        }
    }
}
