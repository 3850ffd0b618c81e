//! Error helpers for bingo-store
//!
//! Builds bingo-core `ExError`s with store-specific context

use bingo_core::errors::{EventError, ExError, ExErrorKind};
use bingo_core::model::Phase;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

/// Create a missing snapshot error
pub fn snapshot_missing(team: &str, participant: &str, phase: Phase) -> ExError {
    EventError::SnapshotNotFound {
        team: team.to_string(),
        participant: participant.to_string(),
        phase: phase.as_str().to_string(),
    }
    .into()
}

/// Create an event configuration error
pub fn config_invalid(reason: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidConfig)
        .with_op("load_event_config")
        .with_message(reason.to_string())
}

/// Reject names that cannot be used as a single path component
pub fn invalid_name(kind: &str, name: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op("snapshot_path")
        .with_message(format!("{} name {:?} cannot be used as a path component", kind, name))
}
