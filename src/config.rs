//! Configuration management for the office contact crate.
//!
//! Settings are read from environment variables, with an optional `.env`
//! file loaded first.

use crate::domain::UNSET_PLACEHOLDER;
use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::{Path, PathBuf};

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Configuration for formatting and logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Text rendered for an unset area code or number (default: "")
    pub unset_placeholder: String,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `UNSET_FIELD_PLACEHOLDER`: Placeholder for unset telephone fields (default: "")
    /// - `LOG_LEVEL`: Logging level (default: "error")
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::DotenvError` if a `.env` file exists but cannot be
    /// parsed, and `ConfigError::InvalidValue` for an unknown log level.
    pub fn from_env() -> ConfigResult<Self> {
        Self::check_dotenv(dotenvy::dotenv())?;
        Self::read_env()
    }

    /// Load configuration from environment variables after loading the
    /// given env file instead of searching for `.env`.
    ///
    /// A missing file is ignored, the same as in [`Config::from_env`].
    pub fn from_env_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        Self::check_dotenv(dotenvy::from_path(path).map(|()| path.to_path_buf()))?;
        Self::read_env()
    }

    /// Treat a missing env file as fine and anything else as an error.
    fn check_dotenv(result: Result<PathBuf, dotenvy::Error>) -> ConfigResult<()> {
        match result {
            Ok(_) => Ok(()),
            Err(e) if e.not_found() => Ok(()),
            Err(e) => Err(ConfigError::DotenvError(e.to_string())),
        }
    }

    fn read_env() -> ConfigResult<Self> {
        let unset_placeholder =
            env::var("UNSET_FIELD_PLACEHOLDER").unwrap_or_else(|_| UNSET_PLACEHOLDER.to_string());

        let log_level = match env::var("LOG_LEVEL") {
            Ok(val) => Self::parse_log_level(&val)?,
            Err(_) => "error".to_string(),
        };

        Ok(Config {
            unset_placeholder,
            log_level,
        })
    }

    /// Placeholder for unset telephone fields.
    pub fn placeholder(&self) -> &str {
        &self.unset_placeholder
    }

    /// Normalize and validate a log level name.
    fn parse_log_level(val: &str) -> ConfigResult<String> {
        let level = val.trim().to_ascii_lowercase();
        if LOG_LEVELS.contains(&level.as_str()) {
            Ok(level)
        } else {
            Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: format!("Must be one of {}, got: {}", LOG_LEVELS.join("|"), val),
            })
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            unset_placeholder: UNSET_PLACEHOLDER.to_string(),
            log_level: "error".to_string(),
        }
    }
}
