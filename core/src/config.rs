//! Client configuration. The only setting is the service base URL.

use std::env;

pub const BASE_URL_ENV: &str = "PACEMAKER_URL";
pub const DEFAULT_BASE_URL: &str = "http://localhost:7000";

/// Rejected configuration value, naming the variable it came from.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid configuration value for {0}: {1}")]
    Invalid(&'static str, String),
}

/// Where the Pacemaker service lives. Nothing else is configurable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
        }
    }

    /// Reads `PACEMAKER_URL`, falling back to `http://localhost:7000`.
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var(BASE_URL_ENV) {
            Ok(value) => Self::from_value(&value),
            Err(_) => Ok(Self::default()),
        }
    }

    fn from_value(value: &str) -> Result<Self, ConfigError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::Invalid(BASE_URL_ENV, "empty".to_string()));
        }
        Ok(Self::new(trimmed))
    }
}
