//! # Panel Server
//!
//! HTTP server backing the Seewo panel dashboard in a plain browser context.
//!
//! ## Endpoints
//!
//! - `GET /config/{file}` - Static configuration documents (what the
//!   networked provider fetches)
//! - `GET /api/health` - Health check
//! - `GET /api/system-info` - Windows summary, Android document and a live
//!   performance snapshot
//! - `GET /api/config` - All three documents
//! - `GET /api/config/{kind}` - One document
//! - `POST /api/config/{kind}/reload` - Re-read one document
//! - `DELETE /api/config/cache` - Drop every cached document
//!
//! The server's own loader reads through the hosted file bridge rooted at the
//! configured resources directory.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;
pub mod system_info;

pub use error::ServerError;
pub use server::PanelServer;
pub use state::{AppState, ServerConfig};
