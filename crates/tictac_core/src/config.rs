//! Game configuration loaded from TOML.

use super::strategy::Difficulty;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings for a play session.
///
/// Every field has a default, so an empty file (or no file) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Pause before the computer replies, in milliseconds.
    #[serde(default = "default_think_delay_ms")]
    think_delay_ms: u64,

    /// Difficulty for the first round.
    #[serde(default)]
    difficulty: Difficulty,

    /// Fixed RNG seed for reproducible opponents.
    #[serde(default)]
    seed: Option<u64>,

    /// Where the terminal UI writes its log.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_think_delay_ms() -> u64 {
    500
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictac.log")
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            think_delay_ms: default_think_delay_ms(),
            difficulty: Difficulty::default(),
            seed: None,
            log_file: default_log_file(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(difficulty = %config.difficulty, think_delay_ms = config.think_delay_ms, "Config loaded");
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// The think delay as a [`Duration`].
    pub fn think_delay(&self) -> Duration {
        Duration::from_millis(self.think_delay_ms)
    }

    /// Overrides the starting difficulty.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Overrides the think delay.
    pub fn with_think_delay_ms(mut self, think_delay_ms: u64) -> Self {
        self.think_delay_ms = think_delay_ms;
        self
    }

    /// Overrides the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
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
    /// Creates a new configuration error at the caller's location.
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
