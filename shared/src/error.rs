//! Unified Error Handling
//!
//! Application-wide error type and the `{error}` response body every failing
//! request serializes to.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::error;

/// Wire shape of every error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Application-level error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== Authorization Errors ==========
    #[error("Invalid admin password")]
    InvalidCredentials,

    // ========== Routing Errors ==========
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Not found: {0}")]
    NotFound(String),

    // ========== Remote Store Errors ==========
    /// The remote store refused a write. The message is the remote's own,
    /// passed through verbatim; the admin UI needs the underlying cause
    /// (usually a version-token mismatch) to decide to re-fetch and retry.
    #[error("{0}")]
    RemoteRejected(String),

    // ========== System Errors ==========
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    /// Create an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Create a RemoteRejected error
    pub fn remote_rejected(message: impl Into<String>) -> Self {
        Self::RemoteRejected(message.into())
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        match self {
            AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::RemoteRejected(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.http_status();
        let message = self.to_string();

        if status.is_server_error() {
            error!(status = %status.as_u16(), error = %message, "Request failed");
        }

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Result type for API operations
pub type AppResult<T> = Result<T, AppError>;
