//! Shared test fixtures for the panel workspace.
//!
//! Provides:
//! - The sample documents shipped under `resources/config/`, parsed or raw
//! - A helper that lays those samples out as a bridge config directory
//! - A programmable stub provider that counts its calls per kind

mod fixtures;
mod stub;

pub use fixtures::*;
pub use stub::{StubProvider, StubResponse};
