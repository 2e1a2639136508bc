//! HTTP request handlers for the panel server.

use axum::{
    Json,
    extract::{OriginalUri, Path, State},
    http::{Method, StatusCode},
    response::IntoResponse,
};
use panel_config::{ConfigKind, ConfigSet, realtime_snapshot};
use serde::Serialize;
use std::sync::Arc;

use crate::error::{Result, ServerError};
use crate::state::AppState;
use crate::system_info::{SystemInfoResponse, WindowsSummary};

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub uptime_seconds: f64,
    pub cached: Vec<ConfigKind>,
}

/// Cache clear response.
#[derive(Debug, Serialize)]
pub struct ClearedResponse {
    pub success: bool,
    pub cleared: usize,
}

/// GET /api/health
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            uptime_seconds: state.started_at.elapsed().as_secs_f64(),
            cached: state.loader.store().cached_kinds(),
        }),
    )
}

/// GET /api/system-info
///
/// Combines the Windows summary, the Android document and a fresh performance
/// snapshot.
pub async fn system_info(State(state): State<Arc<AppState>>) -> Result<Json<SystemInfoResponse>> {
    tracing::debug!("Building system info");

    let (windows, android) = tokio::try_join!(state.loader.windows(), state.loader.android())?;

    Ok(Json(SystemInfoResponse {
        windows_info: WindowsSummary::from(windows.as_ref()),
        android_info: android,
        performance: realtime_snapshot(),
        timestamp: chrono::Utc::now().timestamp_millis(),
    }))
}

/// GET /api/config
pub async fn get_all_configs(State(state): State<Arc<AppState>>) -> Result<Json<ConfigSet>> {
    let set = state.loader.load_all().await?;
    Ok(Json(set))
}

/// GET /api/config/{kind}
pub async fn get_config(
    State(state): State<Arc<AppState>>,
    Path(kind): Path<String>,
) -> Result<Json<serde_json::Value>> {
    let document = state.loader.load_by_name(&kind).await?;
    Ok(Json(document.to_json()?))
}

/// POST /api/config/{kind}/reload
pub async fn reload_config(
    State(state): State<Arc<AppState>>,
    Path(kind): Path<String>,
) -> Result<Json<serde_json::Value>> {
    let kind: ConfigKind = kind.parse()?;
    tracing::info!(kind = %kind, "Reloading config on request");

    let document = state.loader.reload(kind).await?;
    Ok(Json(document.to_json()?))
}

/// DELETE /api/config/cache
pub async fn clear_cache(State(state): State<Arc<AppState>>) -> Json<ClearedResponse> {
    let cleared = state.loader.store().len();
    state.loader.clear(None);
    tracing::info!(cleared, "Config cache cleared");

    Json(ClearedResponse {
        success: true,
        cleared,
    })
}

/// Fallback for unknown routes.
pub async fn not_found(OriginalUri(uri): OriginalUri) -> ServerError {
    ServerError::NotFound(uri.path().to_string())
}

/// Fallback for known routes hit with an unsupported method.
pub async fn method_not_allowed(method: Method, OriginalUri(uri): OriginalUri) -> ServerError {
    ServerError::MethodNotAllowed {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}
