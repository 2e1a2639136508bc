//! Error types for configuration loading.

use crate::kind::ConfigKind;
use thiserror::Error;

/// Result type alias for the configuration service.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors raised while resolving a configuration document.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The caller asked for a key outside the known set. Never retried.
    #[error("Invalid configuration key: {key}")]
    InvalidArgument { key: String },

    /// The provider could not produce a document.
    #[error("Failed to load {kind} config: {reason}")]
    FetchFailure { kind: ConfigKind, reason: String },

    /// The provider did not answer within the fetch timeout.
    #[error("Loading {kind} config timed out after {after_ms}ms")]
    Timeout { kind: ConfigKind, after_ms: u64 },

    /// The caller cancelled the fetch.
    #[error("Loading {kind} config was cancelled")]
    Cancelled { kind: ConfigKind },

    /// Settings or host environment are unusable.
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl ConfigError {
    pub fn fetch(kind: ConfigKind, reason: impl Into<String>) -> Self {
        Self::FetchFailure {
            kind,
            reason: reason.into(),
        }
    }

    /// True for every error that means "the provider did not deliver".
    ///
    /// These are never cached, so calling `load` again performs a new fetch.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            Self::FetchFailure { .. } | Self::Timeout { .. } | Self::Cancelled { .. }
        )
    }

    /// The kind the failed operation was about, if any.
    pub fn kind(&self) -> Option<ConfigKind> {
        match self {
            Self::FetchFailure { kind, .. } | Self::Timeout { kind, .. } | Self::Cancelled { kind } => {
                Some(*kind)
            }
            Self::InvalidArgument { .. } | Self::Configuration { .. } => None,
        }
    }
}
