//! Frontend configuration loaded from TOML.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Settings for the terminal frontend.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TuiConfig {
    /// Show the move list newest first on startup.
    #[serde(default)]
    start_reversed: bool,

    /// Filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// File that receives log output (the terminal is in raw mode).
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Show the key help bar.
    #[serde(default = "default_show_help")]
    show_help: bool,
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("timetravel.log")
}

fn default_show_help() -> bool {
    true
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            start_reversed: false,
            log_filter: default_log_filter(),
            log_file: default_log_file(),
            show_help: default_show_help(),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from a TOML file.
    ///
    /// Runs before the subscriber is installed, so nothing is logged here.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads the file named on the command line, if any, and applies
    /// the remaining flags on top of it.
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(config.with_overrides(cli))
    }

    /// Applies command-line flags. Flags win over the file.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if cli.reversed {
            self.start_reversed = true;
        }
        if let Some(log_file) = &cli.log_file {
            self.log_file = log_file.clone();
        }
        debug!(?self, "Resolved config");
        self
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
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
