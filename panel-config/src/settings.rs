//! # Loader Settings
//!
//! Runtime knobs for the loader and the networked provider.
//!
//! # Environment Variables
//! - `PANEL_CONFIG_BASE_URL`: origin serving `/config/*.json`
//!   (default: "http://localhost:5173")
//! - `PANEL_FETCH_TIMEOUT_SECONDS`: upper bound for one provider fetch
//!   (default: 10, range 1-600)

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct LoaderSettings {
    /// Origin the networked provider fetches from.
    #[serde(default = "default_base_url")]
    #[validate(url)]
    pub base_url: String,

    /// Seconds a single provider fetch may take before it is abandoned.
    #[serde(default = "default_fetch_timeout_seconds")]
    #[validate(range(min = 1, max = 600))]
    pub fetch_timeout_seconds: u64,
}

fn default_base_url() -> String {
    "http://localhost:5173".to_string()
}

fn default_fetch_timeout_seconds() -> u64 {
    10
}

impl Default for LoaderSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            fetch_timeout_seconds: default_fetch_timeout_seconds(),
        }
    }
}

impl LoaderSettings {
    /// Reads settings from the environment and validates them.
    pub fn from_env() -> Result<Self> {
        let fetch_timeout_seconds = match env::var("PANEL_FETCH_TIMEOUT_SECONDS") {
            Ok(raw) => raw.trim().parse().map_err(|e| ConfigError::Configuration {
                message: format!("PANEL_FETCH_TIMEOUT_SECONDS must be an integer: {e}"),
            })?,
            Err(_) => default_fetch_timeout_seconds(),
        };

        let settings = Self {
            base_url: env::var("PANEL_CONFIG_BASE_URL").unwrap_or_else(|_| default_base_url()),
            fetch_timeout_seconds,
        };
        settings.check()?;
        Ok(settings)
    }

    #[must_use]
    pub fn builder() -> LoaderSettingsBuilder {
        LoaderSettingsBuilder::default()
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_seconds)
    }

    /// Runs `validator` rules and converts violations into a configuration
    /// error.
    pub fn check(&self) -> Result<()> {
        self.validate().map_err(|e| ConfigError::Configuration {
            message: format!("invalid loader settings: {e}"),
        })
    }
}

/// Builder for `LoaderSettings`.
#[derive(Default)]
pub struct LoaderSettingsBuilder {
    base_url: Option<String>,
    fetch_timeout_seconds: Option<u64>,
}

impl LoaderSettingsBuilder {
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn fetch_timeout_seconds(mut self, seconds: u64) -> Self {
        self.fetch_timeout_seconds = Some(seconds);
        self
    }

    pub fn build(self) -> Result<LoaderSettings> {
        let settings = LoaderSettings {
            base_url: self.base_url.unwrap_or_else(default_base_url),
            fetch_timeout_seconds: self
                .fetch_timeout_seconds
                .unwrap_or_else(default_fetch_timeout_seconds),
        };
        settings.check()?;
        Ok(settings)
    }
}
