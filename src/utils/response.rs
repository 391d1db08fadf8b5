use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::models::Event;

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Serialize)]
pub struct EventListResponse {
    pub eventos: Vec<Event>,
}

#[derive(Serialize)]
pub struct CreatedResponse {
    pub message: &'static str,
    pub id: i32,
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: String,
}

pub fn success<T>(body: T) -> Response
where
    T: Serialize,
{
    (StatusCode::OK, Json(body)).into_response()
}

pub fn error(message: impl Into<String>, status: StatusCode) -> Response {
    let body = ApiErrorResponse {
        error: message.into(),
    };

    (status, Json(body)).into_response()
}
