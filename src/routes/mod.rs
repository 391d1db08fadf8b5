use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::config::{create_cors_layer, AllowedOrigins};
use crate::handlers::{create_event, health_check, list_events, root};
use crate::state::AppState;

pub fn create_routes(state: AppState, allowed_origins: &AllowedOrigins) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/eventos", get(list_events).post(create_event))
        .layer(TraceLayer::new_for_http())
        .layer(create_cors_layer(allowed_origins))
        .with_state(state)
}
