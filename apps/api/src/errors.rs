use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Upstream failures keep their original message text in the response body;
/// callers need it to see what the external service said.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Transcript error: {0}")]
    Transcript(String),

    #[error("Jira error: {0}")]
    Jira(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, "LLM_ERROR", msg.clone())
            }
            AppError::Transcript(msg) => {
                tracing::error!("Transcript error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "TRANSCRIPT_ERROR",
                    msg.clone(),
                )
            }
            AppError::Jira(msg) => {
                tracing::error!("Jira error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, "JIRA_ERROR", msg.clone())
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
