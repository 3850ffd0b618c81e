//! Event config parser with validation
//!
//! Validates team list presence, name uniqueness and ranking overrides

use crate::config::format::EventConfig;
use crate::errors::{config_invalid, io_error, Result};
use bingo_core::errors::ExError;
use std::fs;
use std::path::Path;

/// Source syntax of a configuration file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    /// `.json` is JSON; anything else (`.yaml`, `.yml`, no extension) is YAML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ConfigFormat::Json,
            _ => ConfigFormat::Yaml,
        }
    }
}

/// Load and validate an event configuration file
///
/// # Errors
///
/// - `Io` if the file cannot be read
/// - `InvalidConfig` for syntax errors, no teams, blank names or bad ranking overrides
/// - `DuplicateTeam` / `DuplicateParticipant` for repeated names
pub fn load_event_config(path: &Path) -> Result<EventConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        let err = io_error("load_event_config", e);
        let message = format!("{}: {}", path.display(), err.message());
        err.with_message(message)
    })?;

    parse_event_config_str(&content, ConfigFormat::from_path(path))
}

/// Parse and validate configuration text
///
/// # Errors
///
/// Same as [`load_event_config`], minus `Io`
pub fn parse_event_config_str(content: &str, format: ConfigFormat) -> Result<EventConfig> {
    let config: EventConfig = match format {
        ConfigFormat::Json => serde_json::from_str(content)
            .map_err(|e| config_invalid(&format!("JSON parse error: {}", e)))?,
        ConfigFormat::Yaml => serde_yaml::from_str(content)
            .map_err(|e| config_invalid(&format!("YAML parse error: {}", e)))?,
    };

    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &EventConfig) -> Result<()> {
    config
        .roster()
        .map_err(|e| ExError::from(e).with_op("load_event_config"))?;
    config
        .ranking_metrics()
        .map_err(|e| ExError::from(e).with_op("load_event_config"))?;

    tracing::debug!(
        team_count = config.teams.len() as u64,
        "event config validated"
    );
    Ok(())
}
