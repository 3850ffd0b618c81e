use crate::errors::{invalid_name, io_error, snapshot_missing, Result};
use crate::fs::atomic::atomic_write;
use bingo_core::model::{Phase, Roster, Snapshot};
use bingo_core::snapshot::{parse_snapshot_bytes, snapshot_to_json};
use bingo_core::store::SnapshotStore;
use std::fs;
use std::path::{Path, PathBuf};

/// Snapshot store backed by the stats directory layout
#[derive(Debug, Clone)]
pub struct FsSnapshotStore {
    root: PathBuf,
}

impl FsSnapshotStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding every team of one phase
    pub fn phase_dir(&self, phase: Phase) -> PathBuf {
        self.root.join(phase.dir_name())
    }

    /// File path for one snapshot
    ///
    /// # Errors
    ///
    /// `InvalidInput` if the team or participant name is empty, `.`/`..`,
    /// or contains a path separator
    pub fn snapshot_path(&self, team: &str, participant: &str, phase: Phase) -> Result<PathBuf> {
        check_component("team", team)?;
        check_component("participant", participant)?;
        Ok(self
            .phase_dir(phase)
            .join(team)
            .join(format!("{}.json", participant)))
    }

    pub fn has_snapshot(&self, team: &str, participant: &str, phase: Phase) -> bool {
        self.snapshot_path(team, participant, phase)
            .map(|p| p.is_file())
            .unwrap_or(false)
    }

    /// Persist a snapshot, replacing any previous capture
    ///
    /// # Errors
    ///
    /// - `InvalidInput` for unusable names
    /// - `Serialization` / `Io` if the file cannot be produced
    pub fn put_snapshot(
        &self,
        team: &str,
        participant: &str,
        phase: Phase,
        snapshot: &Snapshot,
    ) -> Result<PathBuf> {
        let path = self.snapshot_path(team, participant, phase)?;
        let bytes = snapshot_to_json(snapshot)?;
        atomic_write(&path, &bytes)?;
        tracing::debug!(
            team,
            participant,
            phase = phase.as_str(),
            path = %path.display(),
            "snapshot written"
        );
        Ok(path)
    }

    /// Create `<phase>/<team>/` for every team of the roster
    ///
    /// # Errors
    ///
    /// `InvalidInput` for unusable team names, `Io` if a directory cannot be created
    pub fn prepare_layout(&self, roster: &Roster, phase: Phase) -> Result<()> {
        for team in roster.teams() {
            check_component("team", &team.name)?;
            fs::create_dir_all(self.phase_dir(phase).join(&team.name))
                .map_err(|e| io_error("prepare_layout", e))?;
        }
        Ok(())
    }
}

impl SnapshotStore for FsSnapshotStore {
    fn fetch_snapshot(&self, team: &str, participant: &str, phase: Phase) -> Result<Snapshot> {
        let path = self.snapshot_path(team, participant, phase)?;
        if !path.is_file() {
            return Err(snapshot_missing(team, participant, phase));
        }

        let bytes = fs::read(&path).map_err(|e| {
            io_error("fetch_snapshot", e)
                .with_team(team)
                .with_participant(participant)
                .with_phase(phase.as_str())
        })?;

        parse_snapshot_bytes(&bytes).map_err(|e| {
            e.with_team(team)
                .with_participant(participant)
                .with_phase(phase.as_str())
        })
    }
}

fn check_component(kind: &str, name: &str) -> Result<()> {
    let bad = name.trim().is_empty()
        || name == "."
        || name == ".."
        || name.contains('/')
        || name.contains('\\');
    if bad {
        return Err(invalid_name(kind, name));
    }
    Ok(())
}
