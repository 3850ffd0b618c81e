use thiserror::Error;

/// Result type alias using the canonical ExError
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and machine-readable CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Structural/Validation
    InvalidInput,
    /// Event configuration or ranking metric map is unusable
    InvalidConfig,
    /// Snapshot bytes are not valid UTF-8 JSON, or a metric value is not an integer
    InvalidSnapshot,
    NotFound,
    DuplicateTeam,
    DuplicateParticipant,
    /// A category, subcategory or metric name is not in the static catalogue
    UnknownCatalogueKey,

    // Integration/IO
    Io,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::InvalidSnapshot => "ERR_INVALID_SNAPSHOT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::DuplicateTeam => "ERR_DUPLICATE_TEAM",
            ExErrorKind::DuplicateParticipant => "ERR_DUPLICATE_PARTICIPANT",
            ExErrorKind::UnknownCatalogueKey => "ERR_UNKNOWN_CATALOGUE_KEY",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification kind for programmatic handling plus the event
/// context (team, participant, phase) the failure was observed in.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    team: Option<String>,
    participant: Option<String>,
    phase: Option<String>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            team: None,
            participant: None,
            phase: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add team context
    pub fn with_team(mut self, team: impl Into<String>) -> Self {
        self.team = Some(team.into());
        self
    }

    /// Add participant context
    pub fn with_participant(mut self, participant: impl Into<String>) -> Self {
        self.participant = Some(participant.into());
        self
    }

    /// Add snapshot phase context
    pub fn with_phase(mut self, phase: impl Into<String>) -> Self {
        self.phase = Some(phase.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn team(&self) -> Option<&str> {
        self.team.as_deref()
    }

    pub fn participant(&self) -> Option<&str> {
        self.participant.as_deref()
    }

    pub fn phase(&self) -> Option<&str> {
        self.phase.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(team) = &self.team {
            write!(f, " (team: {})", team)?;
        }
        if let Some(participant) = &self.participant {
            write!(f, " (participant: {})", participant)?;
        }
        if let Some(phase) = &self.phase {
            write!(f, " (phase: {})", phase)?;
        }
        if let Some(source) = &self.source {
            write!(f, " <- {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain validation errors for rosters, catalogue lookups and ranking config
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EventError {
    /// Event has no teams at all
    #[error("Event configuration declares no teams")]
    NoTeams,

    /// Team name is empty or whitespace-only
    #[error("Team name cannot be empty")]
    EmptyTeamName,

    /// Two teams share a name
    #[error("Duplicate team: {team}")]
    DuplicateTeam { team: String },

    /// Participant id is empty or whitespace-only
    #[error("Team {team} has an empty participant name")]
    EmptyParticipant { team: String },

    /// Participant listed twice in the same team
    #[error("Participant {participant} is listed twice in team {team}")]
    DuplicateParticipant { team: String, participant: String },

    /// Key not present in the static catalogue
    #[error("Unknown {category} entry: {key}")]
    UnknownCatalogueKey { category: String, key: String },

    /// Ranking metric is not recorded for the category
    #[error("Metric {metric} is not tracked for {category}")]
    MetricNotTracked { category: String, metric: String },

    /// No snapshot captured for this participant and phase
    #[error("No {phase} snapshot for {participant} in team {team}")]
    SnapshotNotFound {
        team: String,
        participant: String,
        phase: String,
    },
}

/// Conversion from EventError to ExError
impl From<EventError> for ExError {
    fn from(err: EventError) -> Self {
        let message = err.to_string();
        match err {
            EventError::NoTeams | EventError::EmptyTeamName => {
                ExError::new(ExErrorKind::InvalidConfig).with_message(message)
            }

            EventError::DuplicateTeam { team } => ExError::new(ExErrorKind::DuplicateTeam)
                .with_team(team)
                .with_message(message),

            EventError::EmptyParticipant { team } => ExError::new(ExErrorKind::InvalidConfig)
                .with_team(team)
                .with_message(message),

            EventError::DuplicateParticipant { team, participant } => {
                ExError::new(ExErrorKind::DuplicateParticipant)
                    .with_team(team)
                    .with_participant(participant)
                    .with_message(message)
            }

            EventError::UnknownCatalogueKey { .. } => {
                ExError::new(ExErrorKind::UnknownCatalogueKey).with_message(message)
            }

            EventError::MetricNotTracked { .. } => {
                ExError::new(ExErrorKind::InvalidConfig).with_message(message)
            }

            EventError::SnapshotNotFound {
                team,
                participant,
                phase,
            } => ExError::new(ExErrorKind::NotFound)
                .with_op("fetch_snapshot")
                .with_team(team)
                .with_participant(participant)
                .with_phase(phase)
                .with_message("Snapshot not found"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code_and_context() {
        let err = ExError::new(ExErrorKind::NotFound)
            .with_op("fetch_snapshot")
            .with_team("Zulrah Zoomers")
            .with_participant("R elate")
            .with_message("Snapshot not found");

        let text = err.to_string();
        assert!(text.starts_with("[ERR_NOT_FOUND]"));
        assert!(text.contains("fetch_snapshot"));
        assert!(text.contains("(team: Zulrah Zoomers)"));
        assert!(text.contains("(participant: R elate)"));
    }

    #[test]
    fn test_source_chain_exposed_through_std_error() {
        use std::error::Error;

        let inner = ExError::new(ExErrorKind::Io).with_message("disk gone");
        let outer = ExError::new(ExErrorKind::NotFound).with_source(inner);

        assert_eq!(outer.source_error().map(|e| e.kind()), Some(ExErrorKind::Io));
        assert!(outer.source().is_some());
    }
}
