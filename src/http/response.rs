//! Caller-facing errors and their HTTP rendering.
//!
//! # Responsibilities
//! - Define the small, stable error vocabulary every lab answers with
//! - Map each error to a status code and a JSON body
//! - Keep internal error text out of responses (it is logged instead)
//!
//! # Design Decisions
//! - Bodies are `{"status": <code>, "message": "<stable message>"}`
//! - Only `SchemaViolation` carries caller-supplied detail, since the caller sent it

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

/// Errors surfaced to callers of any lab.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed input, the caller's fault.
    #[error("bad request")]
    BadRequest,

    /// No matching local or upstream resource.
    #[error("not found")]
    NotFound,

    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("forbidden")]
    Forbidden,

    /// Network failure or timeout talking to a collaborator.
    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    /// Request body did not match the expected shape.
    #[error("{0}")]
    SchemaViolation(String),

    /// Anything else. The text is for logs only.
    #[error("unclassified: {0}")]
    Unclassified(String),
}

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: u16,
    pub message: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest | ApiError::SchemaViolation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::UpstreamUnavailable(_) | ApiError::Unclassified(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// The message a caller sees.
    pub fn public_message(&self) -> String {
        match self {
            ApiError::SchemaViolation(detail) => detail.clone(),
            ApiError::UpstreamUnavailable(_) | ApiError::Unclassified(_) => {
                "internal server error".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }
        let body = ErrorBody {
            status: status.as_u16(),
            message: self.public_message(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound(_) => ApiError::NotFound,
            StoreError::ResourceExists(_) => ApiError::Unclassified(error.to_string()),
        }
    }
}

/// Fallback for unmatched local routes.
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
