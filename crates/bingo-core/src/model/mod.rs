pub mod roster;
pub mod sheet;
pub mod stat;

pub use roster::{Phase, Roster, Team};
pub use sheet::{BossLine, Delta, MinigameLine, SkillLine, Snapshot, StatSheet};
pub use stat::{Stat, UNTRACKED_SENTINEL};
