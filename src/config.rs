//! Driver configuration loaded from TOML.

use crate::games::tictactoe::{Move, MoveParseError};
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// How results are printed.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable boards and labels.
    #[default]
    Text,
    /// One JSON document per command.
    Json,
}

/// Configuration for the command-line driver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct PlayConfig {
    /// Output format.
    format: OutputFormat,

    /// Print every move's value alongside the chosen move.
    show_analysis: bool,

    /// Moves played before the engine takes over (`row,col`, index or label).
    opening: Vec<String>,
}

impl PlayConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(format = ?config.format, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Applies command-line overrides on top of the file settings.
    ///
    /// `--json` beats `--format`, which beats the file's `format`. A
    /// non-empty `--opening` replaces the file's opening; an empty one keeps it.
    #[instrument(skip(self, opening), fields(opening_len = opening.len()))]
    pub fn merge_cli(self, json: bool, format: Option<OutputFormat>, opening: Vec<String>) -> Self {
        let format = if json {
            OutputFormat::Json
        } else {
            format.unwrap_or(self.format)
        };
        let opening = if opening.is_empty() {
            self.opening
        } else {
            opening
        };
        Self {
            format,
            opening,
            ..self
        }
    }

    /// Parses the configured opening into moves.
    #[instrument(skip(self), fields(opening = ?self.opening))]
    pub fn opening_moves(&self) -> Result<Vec<Move>, MoveParseError> {
        self.opening.iter().map(|s| s.parse()).collect()
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
