//! Route definitions for the panel server.

use axum::{
    Router,
    handler::HandlerWithoutStateExt,
    routing::{delete, get, post},
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::handlers;
use crate::state::AppState;

/// Creates the Axum router with all routes configured.
pub fn create_router(state: Arc<AppState>) -> Router {
    // The dashboard may be served from a dev server on another origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let config_api = Router::new()
        .route("/", get(handlers::get_all_configs))
        .route("/cache", delete(handlers::clear_cache))
        .route("/{kind}", get(handlers::get_config))
        .route("/{kind}/reload", post(handlers::reload_config));

    let api = Router::new()
        .route("/health", get(handlers::health))
        .route("/system-info", get(handlers::system_info))
        .nest("/config", config_api);

    // Missing documents get the same JSON 404 as unknown routes.
    let static_config =
        ServeDir::new(state.config.config_dir()).not_found_service(handlers::not_found.into_service());

    Router::new()
        .nest_service("/config", static_config)
        .nest("/api", api)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .fallback(handlers::not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
