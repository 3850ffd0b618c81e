//! Filesystem snapshot layout
//!
//! ```text
//! <root>/
//!   before_event/<team>/<participant>.json
//!   after_event/<team>/<participant>.json
//! ```

pub mod atomic;
pub mod roster;
pub mod snapshot_store;

pub use roster::DirectoryRoster;
pub use snapshot_store::FsSnapshotStore;
