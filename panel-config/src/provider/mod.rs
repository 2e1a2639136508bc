//! # Configuration Providers
//!
//! Transports that fetch a document the store does not hold yet.
//!
//! - [`hosted::HostedProvider`]: reads through a privileged host bridge
//! - [`networked::NetworkedProvider`]: issues an HTTP GET against a static path
//! - [`selection`]: picks one of the two once per process

pub mod hosted;
pub mod networked;
pub mod selection;

use crate::documents::ConfigDocument;
use crate::error::Result;
use crate::kind::ConfigKind;
use async_trait::async_trait;

/// Capability that produces a full configuration document for a kind.
///
/// Implementations must not cache; memoization belongs to the loader.
/// Every failure (I/O, non-success status, malformed or mis-shaped JSON) is
/// reported as [`crate::ConfigError::FetchFailure`].
#[async_trait]
pub trait ConfigProvider: Send + Sync {
    /// Short name used in logs, e.g. `hosted` or `networked`.
    fn name(&self) -> &'static str;

    async fn fetch(&self, kind: ConfigKind) -> Result<ConfigDocument>;
}
