//! Settings loaded from an optional TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::instrument;

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "tictactoe.toml";

/// User settings for the terminal game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// File receiving tracing output (never the terminal).
    log_file: PathBuf,

    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    log_filter: String,

    /// Capture mouse clicks on the grid.
    mouse: bool,

    /// Input poll interval in milliseconds.
    poll_interval_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from("tictactoe.log"),
            log_filter: "info".to_string(),
            mouse: true,
            poll_interval_ms: 100,
        }
    }
}

impl Settings {
    /// Parses settings from TOML text; missing keys keep their defaults.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let settings: Settings = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        if settings.poll_interval_ms == 0 {
            return Err(ConfigError::new("poll_interval_ms must be positive".to_string()));
        }
        Ok(settings)
    }

    /// Loads settings from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Loads the given file, or the default file if present, or defaults.
    ///
    /// An explicitly named file must exist; the default one may be absent.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => Ok(Self::default()),
        }
    }

    /// Replaces the log file.
    pub fn with_log_file(mut self, log_file: PathBuf) -> Self {
        self.log_file = log_file;
        self
    }

    /// Turns mouse capture on or off.
    pub fn with_mouse(mut self, mouse: bool) -> Self {
        self.mouse = mouse;
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        assert_eq!(Settings::from_toml("").unwrap(), Settings::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let settings = Settings::from_toml("mouse = false\nlog_filter = \"debug\"").unwrap();
        assert!(!*settings.mouse());
        assert_eq!(settings.log_filter(), "debug");
        assert_eq!(*settings.poll_interval_ms(), 100);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = Settings::from_toml("colour = \"red\"").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_zero_poll_interval_rejected() {
        assert!(Settings::from_toml("poll_interval_ms = 0").is_err());
    }

    #[test]
    fn test_overrides() {
        let settings = Settings::default()
            .with_log_file(PathBuf::from("other.log"))
            .with_mouse(false);
        assert_eq!(settings.log_file(), &PathBuf::from("other.log"));
        assert!(!*settings.mouse());
    }
}
