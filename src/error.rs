// src/error.rs
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::services::handler::HandlerError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid request: {0}")]
    Validation(String),

    #[error("request body rejected: {1}")]
    Body(StatusCode, String),

    #[error("chat handler failed: {0}")]
    Handler(#[from] HandlerError),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            // size limits and unreadable bodies keep axum's own status
            JsonRejection::BytesRejection(inner) => AppError::Body(inner.status(), inner.body_text()),
            other => AppError::Validation(other.body_text()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Body(status, _) => *status,
            AppError::Handler(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = match &self {
            AppError::Handler(err) => {
                tracing::error!(error = %err, "chat handler error");
                "internal server error".to_string()
            }
            AppError::Validation(msg) | AppError::Body(_, msg) => {
                tracing::debug!(%msg, %status, "rejected chat request");
                self.to_string()
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
