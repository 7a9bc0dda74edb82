//! Configuration management for the phonebook.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file. Nothing here writes to stdout, which belongs to the REPL.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default prompt shown before each command.
pub const DEFAULT_PROMPT: &str = "Enter command: ";

/// Default log filter.
pub const DEFAULT_LOG_LEVEL: &str = "error";

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Configuration for the phonebook REPL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Prompt written before each read (default: "Enter command: ")
    pub prompt: String,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `PHONEBOOK_PROMPT`: Prompt text (default: "Enter command: ")
    /// - `LOG_LEVEL`: One of trace/debug/info/warn/error/off (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let prompt = Self::parse_env_string("PHONEBOOK_PROMPT", DEFAULT_PROMPT)?;
        let log_level = Self::parse_env_string("LOG_LEVEL", DEFAULT_LOG_LEVEL)?.to_lowercase();

        if !LOG_LEVELS.contains(&log_level.as_str()) {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: format!("Must be one of {}, got: {}", LOG_LEVELS.join("/"), log_level),
            });
        }

        Ok(Config { prompt, log_level })
    }

    /// Read a non-empty string variable, falling back to a default when unset.
    fn parse_env_string(var_name: &str, default: &str) -> ConfigResult<String> {
        match env::var(var_name) {
            Ok(val) if val.trim().is_empty() => Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Cannot be empty".to_string(),
            }),
            Ok(val) => Ok(val),
            Err(env::VarError::NotPresent) => Ok(default.to_string()),
            Err(env::VarError::NotUnicode(_)) => Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Must be valid UTF-8".to_string(),
            }),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prompt: DEFAULT_PROMPT.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
