//! Provider selection, decided once at startup.
//!
//! # Environment Variables
//! - `PANEL_HOST_BRIDGE`: `development` or `packaged`; unset means no bridge
//! - `PANEL_PROJECT_ROOT`: project root for the development layout
//!   (default: current directory)
//! - `PANEL_RESOURCES_PATH`: resources directory for the packaged layout
//!   (required when packaged)

use crate::documents::ConfigDocument;
use crate::error::{ConfigError, Result};
use crate::kind::ConfigKind;
use crate::provider::ConfigProvider;
use crate::provider::hosted::{BridgeLayout, HostBridge, HostedProvider};
use crate::provider::networked::NetworkedProvider;
use crate::settings::LoaderSettings;
use async_trait::async_trait;
use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// What the host process offers, captured once.
#[derive(Clone, Default)]
pub struct HostEnvironment {
    bridge: Option<Arc<dyn HostBridge>>,
}

impl HostEnvironment {
    /// A plain browser-like context: no privileged bridge.
    pub fn without_bridge() -> Self {
        Self { bridge: None }
    }

    pub fn with_bridge(bridge: Arc<dyn HostBridge>) -> Self {
        Self {
            bridge: Some(bridge),
        }
    }

    pub fn with_layout(layout: BridgeLayout) -> Self {
        Self::with_bridge(Arc::new(crate::provider::hosted::FileBridge::new(layout)))
    }

    /// Inspects the process environment for a host bridge.
    pub fn detect() -> Result<Self> {
        let Ok(mode) = env::var("PANEL_HOST_BRIDGE") else {
            return Ok(Self::without_bridge());
        };

        let layout = match mode.trim().to_lowercase().as_str() {
            "" | "none" => return Ok(Self::without_bridge()),
            "development" | "dev" => {
                let project_root = match env::var("PANEL_PROJECT_ROOT") {
                    Ok(root) => PathBuf::from(root),
                    Err(_) => env::current_dir().map_err(|e| ConfigError::Configuration {
                        message: format!("cannot determine current directory: {e}"),
                    })?,
                };
                BridgeLayout::Development { project_root }
            }
            "packaged" => {
                let resources_path = env::var("PANEL_RESOURCES_PATH").map_err(|_| {
                    ConfigError::Configuration {
                        message: "PANEL_RESOURCES_PATH not set for packaged host bridge"
                            .to_string(),
                    }
                })?;
                BridgeLayout::Packaged {
                    resources_path: PathBuf::from(resources_path),
                }
            }
            other => {
                return Err(ConfigError::Configuration {
                    message: format!("unknown PANEL_HOST_BRIDGE mode: {other}"),
                });
            }
        };

        Ok(Self::with_layout(layout))
    }

    pub fn has_bridge(&self) -> bool {
        self.bridge.is_some()
    }

    pub fn bridge(&self) -> Option<&Arc<dyn HostBridge>> {
        self.bridge.as_ref()
    }
}

impl std::fmt::Debug for HostEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostEnvironment")
            .field("bridge", &self.bridge.as_ref().map(|b| b.describe()))
            .finish()
    }
}

/// The closed set of transports.
#[derive(Debug, Clone)]
pub enum ActiveProvider {
    Hosted(HostedProvider),
    Networked(NetworkedProvider),
}

impl ActiveProvider {
    /// Where documents come from, for diagnostics.
    pub fn location(&self) -> String {
        match self {
            Self::Hosted(p) => p.bridge().describe(),
            Self::Networked(p) => p.base_url().to_string(),
        }
    }
}

#[async_trait]
impl ConfigProvider for ActiveProvider {
    fn name(&self) -> &'static str {
        match self {
            Self::Hosted(p) => p.name(),
            Self::Networked(p) => p.name(),
        }
    }

    async fn fetch(&self, kind: ConfigKind) -> Result<ConfigDocument> {
        match self {
            Self::Hosted(p) => p.fetch(kind).await,
            Self::Networked(p) => p.fetch(kind).await,
        }
    }
}

/// Hosted when the environment offers a bridge, networked otherwise.
pub fn select_provider(environment: &HostEnvironment, settings: &LoaderSettings) -> ActiveProvider {
    let provider = match environment.bridge() {
        Some(bridge) => ActiveProvider::Hosted(HostedProvider::new(Arc::clone(bridge))),
        None => ActiveProvider::Networked(NetworkedProvider::new(settings.base_url.clone())),
    };

    info!(
        provider = provider.name(),
        location = %provider.location(),
        "Selected config provider"
    );
    provider
}
