use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::models::{Event, NewEvent};
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::{success, CreatedResponse, EventListResponse};

pub const CREATED_MESSAGE: &str = "Evento creado con éxito";

pub async fn list_events(State(state): State<AppState>) -> Response {
    match state.events.list().await {
        Ok(rows) => {
            let eventos = rows
                .into_iter()
                .map(|row| Event::from_row(row, state.budget_policy))
                .collect();
            success(EventListResponse { eventos })
        }
        Err(e) => e.into_response_with(state.error_mode),
    }
}

pub async fn create_event(
    State(state): State<AppState>,
    payload: Result<Json<NewEvent>, JsonRejection>,
) -> Response {
    // Shape errors never reach the datastore.
    let Json(event) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            return AppError::ValidationError(rejection.body_text()).into_response();
        }
    };

    match state.events.insert(&event).await {
        Ok(id) => success(CreatedResponse {
            message: CREATED_MESSAGE,
            id,
        }),
        Err(e) => e.into_response_with(state.error_mode),
    }
}
