use crate::errors::{io_error, Result};
use bingo_core::errors::{ExError, ExErrorKind};
use bingo_core::model::{Phase, Roster, Team};
use bingo_core::store::RosterProvider;
use std::fs;
use std::path::{Path, PathBuf};

/// Roster discovered from the "before" snapshot directories
///
/// Every directory under `<root>/before_event/` is a team and every
/// `*.json` file inside it is a member. Teams and members are sorted by
/// name so that repeated listings agree.
#[derive(Debug, Clone)]
pub struct DirectoryRoster {
    root: PathBuf,
}

impl DirectoryRoster {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl RosterProvider for DirectoryRoster {
    fn list_teams(&self) -> Result<Roster> {
        let base = self.root.join(Phase::Before.dir_name());
        if !base.is_dir() {
            return Err(ExError::new(ExErrorKind::NotFound)
                .with_op("list_teams")
                .with_message(format!("no snapshot directory at {}", base.display())));
        }

        let mut team_names = Vec::new();
        for entry in fs::read_dir(&base).map_err(|e| io_error("list_teams", e))? {
            let entry = entry.map_err(|e| io_error("list_teams", e))?;
            if !entry.path().is_dir() {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => team_names.push(name),
                Err(raw) => tracing::warn!(name = ?raw, "skipping non UTF-8 team directory"),
            }
        }
        team_names.sort();

        let mut teams = Vec::with_capacity(team_names.len());
        for name in team_names {
            let members = list_members(&base.join(&name))?;
            teams.push(Team::new(name, members));
        }

        tracing::debug!(team_count = teams.len() as u64, "roster discovered from directory");
        Roster::new(teams).map_err(ExError::from)
    }
}

fn list_members(team_dir: &Path) -> Result<Vec<String>> {
    let mut members = Vec::new();
    for entry in fs::read_dir(team_dir).map_err(|e| io_error("list_members", e))? {
        let path = entry.map_err(|e| io_error("list_members", e))?.path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            members.push(stem.to_string());
        }
    }
    members.sort();
    Ok(members)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"{}").unwrap();
    }

    #[test]
    fn test_teams_and_members_sorted() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "before_event/Zeta/b.json");
        touch(dir.path(), "before_event/Zeta/a.json");
        touch(dir.path(), "before_event/Alpha/c.json");
        touch(dir.path(), "before_event/Alpha/notes.txt");
        touch(dir.path(), "after_event/Omega/x.json");

        let roster = DirectoryRoster::new(dir.path()).list_teams().unwrap();

        let pairs: Vec<_> = roster.participants().collect();
        assert_eq!(pairs, vec![("Alpha", "c"), ("Zeta", "a"), ("Zeta", "b")]);
    }

    #[test]
    fn test_missing_directory_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = DirectoryRoster::new(dir.path()).list_teams().unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::NotFound);
    }
}
