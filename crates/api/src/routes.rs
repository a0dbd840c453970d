use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/policies", get(handlers::get_policies))
        .with_state(state)
}

/// Scrape endpoint mounted at the configured telemetry path.
pub fn create_metrics_routes(state: AppState, metrics_path: &str) -> Router {
    Router::new()
        .route(metrics_path, get(handlers::get_metrics))
        .with_state(state)
}
