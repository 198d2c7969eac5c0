//! Route definitions for the API server

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Creates the main application router with all routes and middleware
pub fn create_router(state: Arc<AppState>) -> Router {
    // Charts are served from another origin during presentations
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/rolling", post(handlers::rolling_window))
        .route("/synthetic", get(handlers::synthetic_series))
        .route("/synthetic/rolling", get(handlers::synthetic_rolling))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
