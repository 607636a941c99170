//! Application error type and its HTTP mapping.
//!
//! Every error renders as a plain-text body. Client errors carry a
//! human-readable reason; internal errors are logged with full detail and
//! answered with an opaque message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use crate::domain::repositories::StoreError;

/// Body sent for every `500` response.
pub const INTERNAL_ERROR_BODY: &str = "Server error";

#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed input or a failed create precondition (`400`).
    #[error("{message}")]
    Validation { message: String },

    /// Missing or wrong credential (`401`).
    #[error("{message}")]
    Unauthorized { message: String },

    /// Update on a key that does not exist (`404`).
    #[error("{message}")]
    NotFound { message: String },

    /// Store or other infrastructure failure (`500`).
    #[error("internal error: {message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        AppError::internal(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match self {
            AppError::Validation { message }
            | AppError::Unauthorized { message }
            | AppError::NotFound { message } => (status, message).into_response(),
            AppError::Internal { message } => {
                error!(error = %message, "Request failed");
                (status, INTERNAL_ERROR_BODY).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::bad_request("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::unauthorized("x").status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(AppError::not_found("x").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::internal("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_store_error_becomes_internal() {
        let err: AppError = StoreError::Command("connection reset".to_string()).into();

        assert!(matches!(err, AppError::Internal { .. }));
        assert!(err.to_string().contains("connection reset"));
    }

    #[tokio::test]
    async fn test_internal_response_hides_detail() {
        let response = AppError::internal("secret backend detail").into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert_eq!(body, INTERNAL_ERROR_BODY);
        assert!(!body.contains("secret"));
    }

    #[tokio::test]
    async fn test_client_error_response_carries_message() {
        let response = AppError::not_found("Key does not exist").into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"Key does not exist");
    }
}
