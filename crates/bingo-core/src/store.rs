//! Collaborator seams: where snapshots and rosters come from.
//!
//! The engines only ever read through these traits. `bingo-store` provides
//! the filesystem implementations; [`MemorySnapshotStore`] serves tests and
//! callers that already hold snapshots in memory.

use crate::errors::{EventError, Result};
use crate::model::{Phase, Roster, Snapshot};
use std::collections::HashMap;

/// Read access to captured snapshots, keyed by team + participant + phase
pub trait SnapshotStore {
    /// Fetch one captured snapshot
    ///
    /// # Errors
    ///
    /// - `NotFound`: nothing captured for this key
    /// - implementation-specific I/O or decoding failures
    fn fetch_snapshot(&self, team: &str, participant: &str, phase: Phase) -> Result<Snapshot>;
}

/// Source of the ordered team list for a ranking pass
pub trait RosterProvider {
    /// List teams and members; iteration order must be stable for one pass
    ///
    /// # Errors
    ///
    /// Implementation-specific (unreadable config, invalid roster, ...)
    fn list_teams(&self) -> Result<Roster>;
}

impl RosterProvider for Roster {
    fn list_teams(&self) -> Result<Roster> {
        Ok(self.clone())
    }
}

/// In-memory snapshot store
#[derive(Debug, Clone, Default)]
pub struct MemorySnapshotStore {
    snapshots: HashMap<(String, String, Phase), Snapshot>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert (or replace) one snapshot
    pub fn insert(
        &mut self,
        team: impl Into<String>,
        participant: impl Into<String>,
        phase: Phase,
        snapshot: Snapshot,
    ) {
        self.snapshots
            .insert((team.into(), participant.into(), phase), snapshot);
    }

    /// Insert both phases for one participant
    pub fn insert_pair(
        &mut self,
        team: impl Into<String>,
        participant: impl Into<String>,
        before: Snapshot,
        after: Snapshot,
    ) {
        let team = team.into();
        let participant = participant.into();
        self.insert(team.clone(), participant.clone(), Phase::Before, before);
        self.insert(team, participant, Phase::After, after);
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn fetch_snapshot(&self, team: &str, participant: &str, phase: Phase) -> Result<Snapshot> {
        self.snapshots
            .get(&(team.to_string(), participant.to_string(), phase))
            .cloned()
            .ok_or_else(|| {
                EventError::SnapshotNotFound {
                    team: team.to_string(),
                    participant: participant.to_string(),
                    phase: phase.to_string(),
                }
                .into()
            })
    }
}
