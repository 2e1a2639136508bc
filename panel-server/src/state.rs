//! Application state for the panel server.

use panel_config::{BridgeLayout, ConfigLoader, ConfigStore, HostedProvider};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use validator::Validate;

use crate::error::{Result, ServerError};

/// Configuration for the panel server.
#[derive(Debug, Clone, Validate)]
pub struct ServerConfig {
    /// Host to bind the server to.
    pub host: String,
    /// Port to bind the server to.
    pub port: u16,
    /// Directory holding `config/<kind>-config.json`.
    pub config_root: PathBuf,
    /// Upper bound for one document read.
    #[validate(range(min = 1, max = 600))]
    pub fetch_timeout_seconds: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            config_root: PathBuf::from("resources"),
            fetch_timeout_seconds: 10,
        }
    }
}

impl ServerConfig {
    /// Creates a new configuration from environment variables.
    ///
    /// Reads `HOST`, `PORT`, `PANEL_CONFIG_ROOT` and
    /// `PANEL_FETCH_TIMEOUT_SECONDS`.
    pub fn from_env() -> Result<Self> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|e| ServerError::Configuration(format!("Invalid PORT {raw:?}: {e}")))?,
            Err(_) => 3000,
        };

        let fetch_timeout_seconds = match std::env::var("PANEL_FETCH_TIMEOUT_SECONDS") {
            Ok(raw) => raw.trim().parse().map_err(|e| {
                ServerError::Configuration(format!(
                    "Invalid PANEL_FETCH_TIMEOUT_SECONDS {raw:?}: {e}"
                ))
            })?,
            Err(_) => 10,
        };

        Self::builder()
            .host(std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()))
            .port(port)
            .config_root(std::env::var("PANEL_CONFIG_ROOT").unwrap_or_else(|_| "resources".to_string()))
            .fetch_timeout_seconds(fetch_timeout_seconds)
            .build()
    }

    /// Creates a builder for configuration.
    #[must_use]
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Directory served under `/config`.
    pub fn config_dir(&self) -> PathBuf {
        self.config_root.join("config")
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_seconds)
    }
}

/// Builder for `ServerConfig`.
#[derive(Default)]
pub struct ServerConfigBuilder {
    host: Option<String>,
    port: Option<u16>,
    config_root: Option<PathBuf>,
    fetch_timeout_seconds: Option<u64>,
}

impl ServerConfigBuilder {
    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    #[must_use]
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    #[must_use]
    pub fn config_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.config_root = Some(root.into());
        self
    }

    #[must_use]
    pub fn fetch_timeout_seconds(mut self, seconds: u64) -> Self {
        self.fetch_timeout_seconds = Some(seconds);
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> Result<ServerConfig> {
        let config = ServerConfig {
            host: self.host.unwrap_or_else(|| "0.0.0.0".to_string()),
            port: self.port.unwrap_or(3000),
            config_root: self
                .config_root
                .unwrap_or_else(|| PathBuf::from("resources")),
            fetch_timeout_seconds: self.fetch_timeout_seconds.unwrap_or(10),
        };

        config
            .validate()
            .map_err(|e| ServerError::Configuration(format!("Invalid server config: {e}")))?;
        Ok(config)
    }
}

/// Shared application state for Axum handlers.
#[derive(Clone)]
pub struct AppState {
    /// Loader backed by the file bridge over `config_root`.
    pub loader: Arc<ConfigLoader>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// When the state was created, for uptime reporting.
    pub started_at: Instant,
}

impl AppState {
    /// Creates a new application state reading documents from disk.
    pub fn new(config: ServerConfig) -> Self {
        let provider = HostedProvider::from_layout(BridgeLayout::Packaged {
            resources_path: config.config_root.clone(),
        });
        let loader = ConfigLoader::new(Arc::new(ConfigStore::new()), Arc::new(provider))
            .with_fetch_timeout(config.fetch_timeout());
        Self::with_loader(Arc::new(loader), config)
    }

    /// Creates application state around an existing loader (useful for
    /// testing).
    #[must_use]
    pub fn with_loader(loader: Arc<ConfigLoader>, config: ServerConfig) -> Self {
        Self {
            loader,
            config: Arc::new(config),
            started_at: Instant::now(),
        }
    }
}
