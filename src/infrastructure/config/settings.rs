//! Adapter settings.
//!
//! Resolution order, highest first: environment variables, an optional TOML
//! file, built-in defaults.
//!
//! ```toml
//! topic_creator_command = "/var/vcap/packages/topic_manager/topic_creator"
//! topic_deleter_command = "/var/vcap/packages/topic_manager/topic_deleter"
//!
//! [logging]
//! level = "info"
//! format = "json"
//! ```

use std::path::Path;

use serde::Deserialize;

use super::logging::LoggingConfig;
use crate::error::{ConfigError, Result};

/// Default location of the executable that creates topics.
pub const DEFAULT_TOPIC_CREATOR: &str = "/var/vcap/packages/topic_manager/topic_creator";

/// Default location of the executable that deletes topics.
pub const DEFAULT_TOPIC_DELETER: &str = "/var/vcap/packages/topic_manager/topic_deleter";

pub const TOPIC_CREATOR_ENV: &str = "TOPIC_CREATOR_COMMAND";
pub const TOPIC_DELETER_ENV: &str = "TOPIC_DELETER_COMMAND";
pub const LOG_LEVEL_ENV: &str = "SERVICE_ADAPTER_LOG_LEVEL";
pub const LOG_FORMAT_ENV: &str = "SERVICE_ADAPTER_LOG_FORMAT";

/// Runtime settings for one adapter invocation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub topic_creator_command: String,
    pub topic_deleter_command: String,
    pub logging: LoggingConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            topic_creator_command: DEFAULT_TOPIC_CREATOR.into(),
            topic_deleter_command: DEFAULT_TOPIC_DELETER.into(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Settings {
    /// Load settings from `path` (if any) and the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if a value
    /// from any source is invalid.
    #[allow(clippy::result_large_err)]
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let settings = match path {
            Some(path) => {
                let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
                Self::parse_toml(&content)?
            }
            None => Self::default(),
        };

        let settings = settings.apply_overrides(|key| std::env::var(key).ok())?;
        settings.validate()?;
        Ok(settings)
    }

    /// Parse settings from TOML. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or mistyped values.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content).map_err(ConfigError::Parse)?)
    }

    /// Apply overrides looked up by environment variable name.
    ///
    /// Empty values are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an unknown log format.
    #[allow(clippy::result_large_err)]
    pub fn apply_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(command) = lookup(TOPIC_CREATOR_ENV) {
            self.topic_creator_command = command;
        }
        if let Some(command) = lookup(TOPIC_DELETER_ENV) {
            self.topic_deleter_command = command;
        }
        if let Some(level) = lookup(LOG_LEVEL_ENV) {
            self.logging.level = level;
        }
        if let Some(format) = lookup(LOG_FORMAT_ENV) {
            self.logging.format = format.parse()?;
        }

        Ok(self)
    }

    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        if self.topic_creator_command.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "topic_creator_command",
            }
            .into());
        }
        if self.topic_deleter_command.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "topic_deleter_command",
            }
            .into());
        }
        self.logging.validate()?;
        Ok(())
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
