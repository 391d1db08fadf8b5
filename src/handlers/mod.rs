use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::state::AppState;
use crate::utils::response::{success, MessageResponse};

pub mod events;

pub use events::{create_event, list_events};

pub const ROOT_MESSAGE: &str = "FUNDAEVENTO Backend Activo";

pub async fn root() -> Response {
    success(MessageResponse {
        message: ROOT_MESSAGE,
    })
}

#[derive(Serialize)]
struct HealthPayload {
    status: &'static str,
    service: &'static str,
    database: &'static str,
}

/// Readiness: unlike `/`, this touches the datastore.
pub async fn health_check(State(state): State<AppState>) -> Response {
    match state.events.ping().await {
        Ok(()) => success(HealthPayload {
            status: "ok",
            service: "fundaevento-api",
            database: "up",
        }),
        Err(e) => {
            tracing::warn!(error = %e, "Health check failed");
            let payload = HealthPayload {
                status: "degraded",
                service: "fundaevento-api",
                database: "down",
            };
            (StatusCode::SERVICE_UNAVAILABLE, Json(payload)).into_response()
        }
    }
}
