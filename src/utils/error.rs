use std::str::FromStr;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{error, warn};

use crate::utils::response::error as error_response;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Connection error: {0}")]
    ConnectionError(#[source] sqlx::Error),

    #[error("Query error: {0}")]
    QueryError(#[source] sqlx::Error),

    #[error("Insert error: {0}")]
    InsertError(#[source] sqlx::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::ConnectionError(_) => StatusCode::BAD_GATEWAY,
            AppError::QueryError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InsertError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }

    /// Message safe to hand to API consumers.
    pub fn public_message(&self) -> String {
        match self {
            AppError::ValidationError(msg) => msg.clone(),
            AppError::ConnectionError(_) => "Could not connect to the datastore".to_string(),
            AppError::QueryError(_) => "Failed to list events".to_string(),
            AppError::InsertError(_) => "Failed to create event".to_string(),
        }
    }

    fn log(&self) {
        match self {
            AppError::ValidationError(msg) => {
                warn!(reason = %msg, "Rejected request");
            }
            AppError::ConnectionError(e) | AppError::QueryError(e) | AppError::InsertError(e) => {
                error!(error = ?e, kind = %self, "Database error");
            }
        }
    }

    /// Renders the error according to the configured envelope.
    pub fn into_response_with(self, mode: ErrorMode) -> Response {
        match mode {
            ErrorMode::Legacy if !self.is_client_error() => {
                self.log();
                let message = match &self {
                    AppError::ConnectionError(e)
                    | AppError::QueryError(e)
                    | AppError::InsertError(e) => e.to_string(),
                    AppError::ValidationError(msg) => msg.clone(),
                };
                error_response(message, StatusCode::OK)
            }
            _ => self.into_response(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Log internal details
        self.log();

        // Only expose high-level message to the client
        error_response(self.public_message(), status)
    }
}

/// Status mapping used for datastore failures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorMode {
    /// 4xx/5xx statuses carrying `{"error": ...}`.
    #[default]
    Status,
    /// Datastore failures come back as 200 with the raw driver message,
    /// for consumers written against the earlier service.
    Legacy,
}

impl FromStr for ErrorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "status" => Ok(ErrorMode::Status),
            "legacy" => Ok(ErrorMode::Legacy),
            other => Err(format!("unknown error response mode '{}'", other)),
        }
    }
}
