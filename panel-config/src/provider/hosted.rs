//! Hosted provider: reads documents through the desktop host's bridge.
//!
//! The bridge owns path resolution. The file bridge shipped here maps a name
//! such as `android-config` to `<root>/config/android-config.json`, where
//! `root` is the project checkout during development and the application's
//! resources directory once packaged.

use crate::documents::ConfigDocument;
use crate::error::{ConfigError, Result};
use crate::kind::ConfigKind;
use crate::provider::ConfigProvider;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Failure reported by a host bridge.
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("Invalid config name: {name}")]
    InvalidName { name: String },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Privileged capability exposed by the desktop host.
#[async_trait]
pub trait HostBridge: Send + Sync {
    /// Returns the parsed JSON for `name` (a file stem such as
    /// `windows-config`).
    async fn get_config_file(&self, name: &str) -> std::result::Result<serde_json::Value, BridgeError>;

    /// Human-readable location for diagnostics.
    fn describe(&self) -> String;
}

/// Directory layout the file bridge resolves against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeLayout {
    /// Running from a source checkout.
    Development { project_root: PathBuf },
    /// Running from an installed bundle.
    Packaged { resources_path: PathBuf },
}

impl BridgeLayout {
    pub fn root(&self) -> &Path {
        match self {
            Self::Development { project_root } => project_root,
            Self::Packaged { resources_path } => resources_path,
        }
    }

    pub fn config_dir(&self) -> PathBuf {
        self.root().join("config")
    }
}

/// Host bridge backed by JSON files on disk.
#[derive(Debug, Clone)]
pub struct FileBridge {
    layout: BridgeLayout,
}

impl FileBridge {
    pub fn new(layout: BridgeLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &BridgeLayout {
        &self.layout
    }

    /// Resolves `name` to a file path, refusing anything that could escape
    /// the config directory.
    pub fn config_path(&self, name: &str) -> std::result::Result<PathBuf, BridgeError> {
        if name.is_empty() || name.contains(['/', '\\']) || name.contains("..") {
            return Err(BridgeError::InvalidName {
                name: name.to_string(),
            });
        }
        Ok(self.layout.config_dir().join(format!("{name}.json")))
    }
}

#[async_trait]
impl HostBridge for FileBridge {
    async fn get_config_file(&self, name: &str) -> std::result::Result<serde_json::Value, BridgeError> {
        let path = self.config_path(name)?;
        debug!(path = %path.display(), "Reading config file");

        let bytes = tokio::fs::read(&path).await.map_err(|source| BridgeError::Io {
            path: path.clone(),
            source,
        })?;

        serde_json::from_slice(&bytes).map_err(|source| BridgeError::Parse { path, source })
    }

    fn describe(&self) -> String {
        match &self.layout {
            BridgeLayout::Development { .. } => {
                format!("development:{}", self.layout.config_dir().display())
            }
            BridgeLayout::Packaged { .. } => {
                format!("packaged:{}", self.layout.config_dir().display())
            }
        }
    }
}

/// Provider that delegates every fetch to a [`HostBridge`].
#[derive(Clone)]
pub struct HostedProvider {
    bridge: Arc<dyn HostBridge>,
}

impl HostedProvider {
    pub fn new(bridge: Arc<dyn HostBridge>) -> Self {
        Self { bridge }
    }

    pub fn from_layout(layout: BridgeLayout) -> Self {
        Self::new(Arc::new(FileBridge::new(layout)))
    }

    pub fn bridge(&self) -> &Arc<dyn HostBridge> {
        &self.bridge
    }
}

impl std::fmt::Debug for HostedProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostedProvider")
            .field("bridge", &self.bridge.describe())
            .finish()
    }
}

#[async_trait]
impl ConfigProvider for HostedProvider {
    fn name(&self) -> &'static str {
        "hosted"
    }

    async fn fetch(&self, kind: ConfigKind) -> Result<ConfigDocument> {
        let value = self
            .bridge
            .get_config_file(&kind.file_stem())
            .await
            .map_err(|e| {
                warn!(kind = %kind, error = %e, "Host bridge failed to read config");
                ConfigError::fetch(kind, e.to_string())
            })?;

        ConfigDocument::from_json(kind, value)
    }
}
