//! Bingo Store - filesystem persistence and event configuration
//!
//! Provides:
//! - `FsSnapshotStore`: snapshots under `<root>/<before_event|after_event>/<team>/<participant>.json`
//! - `DirectoryRoster`: roster discovered from captured snapshot directories
//! - `EventConfig`: teams and ranking overrides from a JSON or YAML file
//! - Atomic temp-file + rename writes

pub mod config;
pub mod errors;
pub mod fs;

// Re-export key types
pub use config::{load_event_config, EventConfig, RankingOverrides};
pub use errors::Result;
pub use fs::{DirectoryRoster, FsSnapshotStore};
