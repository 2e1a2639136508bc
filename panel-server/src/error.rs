//! Error types for the panel server.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use panel_config::ConfigError;
use serde::Serialize;
use thiserror::Error;

/// Result type alias for the server.
pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Error, Debug)]
pub enum ServerError {
    /// Document loading failed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Invalid server configuration.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Server startup error.
    #[error("Server error: {0}")]
    Server(String),

    /// Route does not exist.
    #[error("Route {0} not found")]
    NotFound(String),

    /// Route exists but not for this method.
    #[error("Method {method} not allowed on {path}")]
    MethodNotAllowed { method: String, path: String },
}

/// Error response body for HTTP endpoints.
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match &self {
            Self::Config(e @ ConfigError::InvalidArgument { .. }) => (
                StatusCode::BAD_REQUEST,
                "INVALID_ARGUMENT",
                e.to_string(),
                None,
            ),
            Self::Config(e @ ConfigError::FetchFailure { .. }) => {
                tracing::warn!(error = %e, "Config fetch failed");
                (
                    StatusCode::BAD_GATEWAY,
                    "FETCH_FAILURE",
                    "Failed to load configuration".to_string(),
                    Some(e.to_string()),
                )
            }
            Self::Config(e @ ConfigError::Timeout { .. }) => (
                StatusCode::GATEWAY_TIMEOUT,
                "FETCH_TIMEOUT",
                e.to_string(),
                None,
            ),
            Self::Config(e @ ConfigError::Cancelled { .. }) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "FETCH_CANCELLED",
                e.to_string(),
                None,
            ),
            Self::Config(ConfigError::Configuration { .. }) | Self::Configuration(_) => {
                tracing::error!(error = %self, "Configuration error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CONFIGURATION_ERROR",
                    self.to_string(),
                    None,
                )
            }
            Self::Server(msg) => {
                tracing::error!(message = %msg, "Server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "SERVER_ERROR",
                    "Something went wrong".to_string(),
                    Some(msg.clone()),
                )
            }
            Self::NotFound(route) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("Route {route} not found"),
                None,
            ),
            Self::MethodNotAllowed { .. } => (
                StatusCode::METHOD_NOT_ALLOWED,
                "METHOD_NOT_ALLOWED",
                self.to_string(),
                None,
            ),
        };

        let body = ErrorResponse {
            error: message,
            code: code.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}
