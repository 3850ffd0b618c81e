use crate::errors::EventError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Point in time a snapshot was captured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Before,
    After,
}

impl Phase {
    /// Directory name used by the on-disk snapshot layout
    pub fn dir_name(self) -> &'static str {
        match self {
            Phase::Before => "before_event",
            Phase::After => "after_event",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Before => "before",
            Phase::After => "after",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One team and its members, in roster order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    #[serde(default)]
    pub members: Vec<String>,
}

impl Team {
    pub fn new(name: impl Into<String>, members: Vec<String>) -> Self {
        Self {
            name: name.into(),
            members,
        }
    }
}

/// Ordered teams taking part in an event
///
/// Participant ids are unique within a team but may repeat across teams.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Roster {
    teams: Vec<Team>,
}

impl Roster {
    /// Build a validated roster
    ///
    /// # Errors
    ///
    /// - `EmptyTeamName` / `EmptyParticipant` for blank names
    /// - `DuplicateTeam` when two teams share a name
    /// - `DuplicateParticipant` when a member is listed twice in one team
    pub fn new(teams: Vec<Team>) -> Result<Self, EventError> {
        let mut team_names = HashSet::new();
        for team in &teams {
            if team.name.trim().is_empty() {
                return Err(EventError::EmptyTeamName);
            }
            if !team_names.insert(team.name.as_str()) {
                return Err(EventError::DuplicateTeam {
                    team: team.name.clone(),
                });
            }

            let mut members = HashSet::new();
            for member in &team.members {
                if member.trim().is_empty() {
                    return Err(EventError::EmptyParticipant {
                        team: team.name.clone(),
                    });
                }
                if !members.insert(member.as_str()) {
                    return Err(EventError::DuplicateParticipant {
                        team: team.name.clone(),
                        participant: member.clone(),
                    });
                }
            }
        }
        Ok(Self { teams })
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn team(&self, name: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.name == name)
    }

    /// Total member count across all teams
    pub fn participant_count(&self) -> usize {
        self.teams.iter().map(|t| t.members.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// `(team, participant)` pairs in roster order
    pub fn participants(&self) -> impl Iterator<Item = (&str, &str)> {
        self.teams.iter().flat_map(|t| {
            t.members
                .iter()
                .map(move |m| (t.name.as_str(), m.as_str()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(name: &str, members: &[&str]) -> Team {
        Team::new(name, members.iter().map(|m| m.to_string()).collect())
    }

    #[test]
    fn test_valid_roster_keeps_order() {
        let roster = Roster::new(vec![team("B", &["p2", "p1"]), team("A", &["p3"])]).unwrap();
        let pairs: Vec<_> = roster.participants().collect();
        assert_eq!(pairs, vec![("B", "p2"), ("B", "p1"), ("A", "p3")]);
        assert_eq!(roster.participant_count(), 3);
    }

    #[test]
    fn test_same_participant_in_two_teams_is_allowed() {
        let roster = Roster::new(vec![team("A", &["p1"]), team("B", &["p1"])]);
        assert!(roster.is_ok());
    }

    #[test]
    fn test_duplicate_participant_within_team_rejected() {
        let err = Roster::new(vec![team("A", &["p1", "p1"])]).unwrap_err();
        assert_eq!(
            err,
            EventError::DuplicateParticipant {
                team: "A".to_string(),
                participant: "p1".to_string(),
            }
        );
    }

    #[test]
    fn test_duplicate_team_rejected() {
        let err = Roster::new(vec![team("A", &[]), team("A", &["p1"])]).unwrap_err();
        assert_eq!(
            err,
            EventError::DuplicateTeam {
                team: "A".to_string()
            }
        );
    }

    #[test]
    fn test_blank_names_rejected() {
        assert_eq!(
            Roster::new(vec![team("  ", &[])]).unwrap_err(),
            EventError::EmptyTeamName
        );
        assert!(matches!(
            Roster::new(vec![team("A", &[""])]).unwrap_err(),
            EventError::EmptyParticipant { .. }
        ));
    }

    #[test]
    fn test_phase_dir_names() {
        assert_eq!(Phase::Before.dir_name(), "before_event");
        assert_eq!(Phase::After.dir_name(), "after_event");
        assert_eq!(Phase::After.to_string(), "after");
    }
}
