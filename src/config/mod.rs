//! Game settings
//!
//! Settings live in `config.toml` under the platform config directory. A
//! missing or unreadable file falls back to defaults; command-line flags are
//! applied on top by the binary.

use crate::core::MAX_ATTEMPTS;
use crate::wordlists::{DEFAULT_LENGTH, SUPPORTED_LENGTHS};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Upper bound on guesses per game
pub const MAX_ATTEMPTS_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Letters per word
    pub word_length: usize,

    /// Guesses allowed per game
    pub max_attempts: usize,

    /// Custom word list file, one word per line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wordlist: Option<PathBuf>,

    /// Random word instead of the word of the day
    pub practice: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            word_length: DEFAULT_LENGTH,
            max_attempts: MAX_ATTEMPTS,
            wordlist: None,
            practice: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("No built-in word list for {0}-letter words (supported: 5, 6, 7); pass --wordlist")]
    UnsupportedLength(usize),
    #[error("max_attempts must be between 1 and 10, got {0}")]
    InvalidAttempts(usize),
}

impl Config {
    /// Default location: `<config dir>/zombordle/config.toml`
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("zombordle").join("config.toml"))
    }

    /// Load settings from `path`, or the default location when `None`
    ///
    /// Never fails: problems are logged and defaults are used instead.
    #[must_use]
    pub fn load(path: Option<&Path>) -> Self {
        let path = match path.map(Path::to_path_buf).or_else(Self::default_path) {
            Some(p) => p,
            None => return Self::default(),
        };

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => return config,
                Err(e) => tracing::warn!("Failed to parse config: {}", e),
            },
            Err(e) => tracing::warn!("Failed to read config: {}", e),
        }

        Self::default()
    }

    /// Write settings to `path`, creating parent directories
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the file cannot
    /// be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        tracing::info!(path = %path.display(), "saved config");
        Ok(())
    }

    /// Check the settings make a playable game
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for an unsupported word length (without a custom
    /// list) or an attempt count outside `1..=MAX_ATTEMPTS_LIMIT`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.wordlist.is_none() && !SUPPORTED_LENGTHS.contains(&self.word_length) {
            return Err(ConfigError::UnsupportedLength(self.word_length));
        }
        if !(1..=MAX_ATTEMPTS_LIMIT).contains(&self.max_attempts) {
            return Err(ConfigError::InvalidAttempts(self.max_attempts));
        }
        Ok(())
    }
}
