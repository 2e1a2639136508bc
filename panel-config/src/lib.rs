//! # Panel Configuration Service
//!
//! Loads and caches the three configuration documents shown by the Seewo
//! touch-panel dashboard.
//!
//! This crate provides:
//! - Typed schemas for the Windows, Android and device documents
//! - An in-memory store keyed by document kind
//! - A loader that memoizes fetches, bounds them with a timeout and allows at
//!   most one in-flight fetch per kind
//! - Hosted (file bridge) and networked (HTTP) providers, selected once at
//!   startup from the host environment
//! - Simulated realtime performance metrics for live dashboard tiles

pub mod documents;
pub mod error;
pub mod kind;
pub mod loader;
pub mod performance;
pub mod provider;
pub mod settings;
pub mod store;

pub use documents::{AndroidConfig, ConfigDocument, ConfigSet, DeviceConfig, WindowsConfig};
pub use error::{ConfigError, Result};
pub use kind::ConfigKind;
pub use loader::ConfigLoader;
pub use performance::{RealtimePerformance, realtime_snapshot};
pub use provider::hosted::{BridgeLayout, FileBridge, HostBridge, HostedProvider};
pub use provider::networked::NetworkedProvider;
pub use provider::selection::{ActiveProvider, HostEnvironment, select_provider};
pub use provider::ConfigProvider;
pub use settings::LoaderSettings;
pub use store::ConfigStore;
pub use validator::Validate;
