use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        rejection::JsonRejection,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;
use crate::recipes::normalize::NormalizeError;

/// The message every upstream or model-output failure is reported with.
pub const KITCHEN_FAILURE_MESSAGE: &str = "Sanji slipped in the kitchen. Try again.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid JSON body: {0}")]
    InvalidJson(#[from] JsonRejection),

    #[error("Invalid multipart body: {0}")]
    InvalidMultipart(#[from] MultipartRejection),

    #[error("Multipart error: {0}")]
    Multipart(#[from] MultipartError),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Model output error: {0}")]
    Normalize(#[from] NormalizeError),
}

impl AppError {
    /// Machine-readable code. Upstream failures keep distinct codes even
    /// though they share one status and message.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_)
            | AppError::InvalidJson(_)
            | AppError::InvalidMultipart(_)
            | AppError::Multipart(_) => "VALIDATION_ERROR",
            AppError::Llm(LlmError::RateLimited(_)) => "UPSTREAM_RATE_LIMITED",
            AppError::Llm(LlmError::Api { .. }) => "UPSTREAM_REJECTED",
            AppError::Llm(LlmError::Http(_)) | AppError::Llm(LlmError::EmptyContent) => {
                "UPSTREAM_UNAVAILABLE"
            }
            AppError::Normalize(NormalizeError::MalformedJson(_)) => "MALFORMED_OUTPUT",
            AppError::Normalize(NormalizeError::SchemaMismatch(_)) => "SCHEMA_MISMATCH",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::InvalidJson(rejection) => (rejection.status(), rejection.body_text()),
            AppError::InvalidMultipart(rejection) => (rejection.status(), rejection.body_text()),
            AppError::Multipart(e) => (e.status(), e.body_text()),
            AppError::Llm(e) => {
                tracing::error!("LLM error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    KITCHEN_FAILURE_MESSAGE.to_string(),
                )
            }
            AppError::Normalize(e) => {
                tracing::error!("Model output error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    KITCHEN_FAILURE_MESSAGE.to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": self.code(),
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
