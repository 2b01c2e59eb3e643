use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("approval request {0} not found")]
    RequestNotFound(u64),

    #[error("malformed request body: {0}")]
    MalformedBody(String),

    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type, code, msg) = match &self {
            AppError::RequestNotFound(id) => (
                StatusCode::NOT_FOUND,
                "invalid_request_error",
                "request_not_found",
                format!("no approval request with id {}", id),
            ),
            AppError::MalformedBody(detail) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "invalid_request_error",
                "malformed_body",
                detail.clone(),
            ),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "internal_server_error",
                    "internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "message": msg,
                "type": error_type,
                "code": code,
            }
        }));

        (status, body).into_response()
    }
}
