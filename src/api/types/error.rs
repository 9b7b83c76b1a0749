//! Error envelope returned by every endpoint

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// What went wrong, for logs and tests. Never serialized: callers only see
/// the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// The request could not be parsed into operation parameters
    InvalidRequest,
    /// The store or the renderer failed while handling a well-formed request
    Upstream,
}

/// Wire format: `{"error": "<message>"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: String,
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub kind: ApiErrorKind,
    pub response: ApiErrorResponse,
}

impl ApiError {
    pub fn new(status: StatusCode, kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            status,
            kind,
            response: ApiErrorResponse {
                error: message.into(),
            },
        }
    }

    /// Unparseable or missing request parameters
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            ApiErrorKind::InvalidRequest,
            message,
        )
    }

    /// Failure raised while running an operation
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            ApiErrorKind::Upstream,
            message,
        )
    }

    pub fn message(&self) -> &str {
        &self.response.error
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.response)).into_response()
    }
}

/// Every domain failure looks the same to the caller.
impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        tracing::error!(error = %err, "Error processing request");
        Self::upstream(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.response.error)
    }
}

impl std::error::Error for ApiError {}
