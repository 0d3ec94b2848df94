use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::document::DocumentError;
use crate::models::resume::UnknownKey;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Core operations are total; everything here is a rejected request shape.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid document data: {0}")]
    Document(#[from] DocumentError),
}

impl From<UnknownKey> for AppError {
    fn from(err: UnknownKey) -> Self {
        AppError::Validation(err.to_string())
    }
}

/// Request bodies are taken as `Value` and decoded here, so shape errors get
/// the same JSON error body as everything else.
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Document(DocumentError::Malformed(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::Document(
                e @ (DocumentError::UnknownKey(_) | DocumentError::NotNested(_)),
            ) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", e.to_string()),
            AppError::Document(e) => {
                tracing::debug!("Rejected document payload: {e}");
                (StatusCode::BAD_REQUEST, "INVALID_DOCUMENT", e.to_string())
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
