//! # Configuration Documents
//!
//! Typed schemas for the three documents and the envelope the loader caches.
//!
//! Documents are immutable once parsed and shared as `Arc`s, so a cache hit
//! hands out the very same allocation that was stored.

pub mod android;
pub mod device;
pub mod windows;

pub use android::{AndroidConfig, AndroidDisplay, AndroidFeatures, AndroidNetwork};
pub use device::{DeviceConfig, DeviceStatus};
pub use windows::{DiskEntry, NetworkInterface, PerformanceSnapshot, WindowsConfig};

use crate::error::{ConfigError, Result};
use crate::kind::ConfigKind;
use serde::Serialize;
use std::sync::Arc;

/// One resolved configuration document, tagged by kind.
#[derive(Debug, Clone)]
pub enum ConfigDocument {
    Windows(Arc<WindowsConfig>),
    Android(Arc<AndroidConfig>),
    Device(Arc<DeviceConfig>),
}

impl ConfigDocument {
    /// Parses a JSON value into the schema for `kind`.
    ///
    /// Shape mismatches are reported as fetch failures: the provider delivered
    /// something, but not a usable document.
    pub fn from_json(kind: ConfigKind, value: serde_json::Value) -> Result<Self> {
        let parsed = match kind {
            ConfigKind::Windows => serde_json::from_value(value).map(|c| Self::Windows(Arc::new(c))),
            ConfigKind::Android => serde_json::from_value(value).map(|c| Self::Android(Arc::new(c))),
            ConfigKind::Device => serde_json::from_value(value).map(|c| Self::Device(Arc::new(c))),
        };
        parsed.map_err(|e| ConfigError::fetch(kind, format!("invalid document: {e}")))
    }

    /// Parses raw bytes (file contents or an HTTP body).
    pub fn from_slice(kind: ConfigKind, bytes: &[u8]) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_slice(bytes)
            .map_err(|e| ConfigError::fetch(kind, format!("malformed JSON: {e}")))?;
        Self::from_json(kind, value)
    }

    pub fn kind(&self) -> ConfigKind {
        match self {
            Self::Windows(_) => ConfigKind::Windows,
            Self::Android(_) => ConfigKind::Android,
            Self::Device(_) => ConfigKind::Device,
        }
    }

    pub fn as_windows(&self) -> Option<&Arc<WindowsConfig>> {
        match self {
            Self::Windows(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_android(&self) -> Option<&Arc<AndroidConfig>> {
        match self {
            Self::Android(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_device(&self) -> Option<&Arc<DeviceConfig>> {
        match self {
            Self::Device(c) => Some(c),
            _ => None,
        }
    }

    /// True when both envelopes point at the same allocation.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Windows(a), Self::Windows(b)) => Arc::ptr_eq(a, b),
            (Self::Android(a), Self::Android(b)) => Arc::ptr_eq(a, b),
            (Self::Device(a), Self::Device(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    pub fn to_json(&self) -> Result<serde_json::Value> {
        let value = match self {
            Self::Windows(c) => serde_json::to_value(c.as_ref()),
            Self::Android(c) => serde_json::to_value(c.as_ref()),
            Self::Device(c) => serde_json::to_value(c.as_ref()),
        };
        value.map_err(|e| ConfigError::Configuration {
            message: format!("failed to serialize {} config: {e}", self.kind()),
        })
    }
}

impl From<WindowsConfig> for ConfigDocument {
    fn from(config: WindowsConfig) -> Self {
        Self::Windows(Arc::new(config))
    }
}

impl From<AndroidConfig> for ConfigDocument {
    fn from(config: AndroidConfig) -> Self {
        Self::Android(Arc::new(config))
    }
}

impl From<DeviceConfig> for ConfigDocument {
    fn from(config: DeviceConfig) -> Self {
        Self::Device(Arc::new(config))
    }
}

/// All three documents, produced only when every load succeeded.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigSet {
    pub windows: Arc<WindowsConfig>,
    pub android: Arc<AndroidConfig>,
    pub device: Arc<DeviceConfig>,
}
