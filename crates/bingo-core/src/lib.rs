//! Bingo Core - snapshot deltas and MVP rankings for team bingo events
//!
//! This crate provides:
//! - The static category / subcategory / metric catalogue
//! - Typed snapshots (`Stat::{Tracked, Untracked}`) and their JSON codec
//! - The Delta Engine (`delta::compute_delta`)
//! - The MVP Ranking Engine (`mvp::get_all_mvps`)
//! - Store and roster seams, plus an in-memory snapshot store
//! - Plain-text summary rendering
//! - The error and logging facilities shared by the other crates

pub mod catalogue;
pub mod delta;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod mvp;
pub mod render;
pub mod snapshot;
pub mod store;

pub use bingo_core_types::schema;

// Re-export commonly used types
pub use catalogue::{Boss, Category, Metric, Minigame, Skill, Subcategory};
pub use delta::compute_delta;
pub use errors::{EventError, ExError, ExErrorKind, Result};
pub use model::{Delta, Phase, Roster, Snapshot, Stat, Team};
pub use mvp::{get_all_mvps, MvpEntry, MvpReport, RankingMetrics};
pub use store::{MemorySnapshotStore, RosterProvider, SnapshotStore};
