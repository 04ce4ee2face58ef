//! Service error type and the JSON error payload it renders to.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Body of every non-success response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Errors returned by HTTP handlers
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Request was rejected by validation.
    #[error("{message}")]
    BadRequest { message: String },
    /// No route matched.
    #[error("{message}")]
    NotFound { message: String },
    /// Statement failed. The cause is logged and never sent to the client.
    #[error("database error: {0}")]
    Internal(String),
}

impl From<DomainError> for ServiceError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::InvalidInput(message) => ServiceError::BadRequest { message },
            DomainError::Internal(cause) => ServiceError::Internal(cause),
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            ServiceError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            ServiceError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            ServiceError::Internal(cause) => {
                tracing::error!(error = %cause, "Database error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Database error".to_string())
            }
        };
        (status, Json(ErrorResponse { error })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_map_to_service_errors() {
        let bad: ServiceError = DomainError::InvalidInput("Task title cannot be empty".into()).into();
        assert!(matches!(bad, ServiceError::BadRequest { ref message } if message == "Task title cannot be empty"));

        let internal: ServiceError = DomainError::Internal("disk full".into()).into();
        assert!(matches!(internal, ServiceError::Internal(ref cause) if cause == "disk full"));
    }

    #[test]
    fn test_status_codes() {
        let bad = ServiceError::BadRequest { message: "nope".into() }.into_response();
        assert_eq!(bad.status(), StatusCode::BAD_REQUEST);

        let missing = ServiceError::NotFound { message: "not found: /x".into() }.into_response();
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);

        let internal = ServiceError::Internal("constraint failed".into()).into_response();
        assert_eq!(internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_internal_error_body_is_opaque() {
        let response = ServiceError::Internal("no such table: tasks".into()).into_response();
        let body = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
        let parsed: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed, ErrorResponse { error: "Database error".to_string() });
    }
}
