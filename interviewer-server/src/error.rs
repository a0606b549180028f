//! Server error types

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use interviewer_core::InterviewError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while running the interviewer server
#[derive(Debug, Error)]
pub enum ServerError {
    /// Failed to bind to the specified address
    #[error("failed to bind to {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// Internal server error
    #[error("internal error: {0}")]
    Internal(String),
}

/// JSON body returned for every failed request
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    /// Whether repeating the same request may succeed
    pub retryable: bool,
}

/// Interview failure rendered as an HTTP response
#[derive(Debug)]
pub struct ApiError(pub InterviewError);

impl From<InterviewError> for ApiError {
    fn from(error: InterviewError) -> Self {
        Self(error)
    }
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match &self.0 {
            InterviewError::InvalidDomain(_) => (StatusCode::BAD_REQUEST, "INVALID_DOMAIN"),
            InterviewError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "INVALID_REQUEST"),
            InterviewError::SessionNotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            e if e.is_timeout() => (StatusCode::GATEWAY_TIMEOUT, "UPSTREAM_TIMEOUT"),
            InterviewError::QuestionGeneration(_)
            | InterviewError::Evaluation(_)
            | InterviewError::Persistence(_) => (StatusCode::BAD_GATEWAY, "UPSTREAM_FAILURE"),
            InterviewError::InvariantViolation(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        if status.is_server_error() {
            tracing::error!(error = %self.0, code, "Request failed");
        }
        let body = ErrorResponse {
            error: self.0.to_string(),
            code: code.to_string(),
            retryable: self.0.is_retryable(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use interviewer_core::CollaboratorError;
    use std::time::Duration;

    fn status_of(error: InterviewError) -> StatusCode {
        ApiError(error).into_response().status()
    }

    #[test]
    fn caller_errors_map_to_client_statuses() {
        assert_eq!(
            status_of(InterviewError::InvalidDomain("x".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(InterviewError::InvalidRequest("x".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(InterviewError::SessionNotFound("x".into())),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn collaborator_errors_map_to_gateway_statuses() {
        assert_eq!(
            status_of(InterviewError::Evaluation(CollaboratorError::Unavailable(
                "down".into()
            ))),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            status_of(InterviewError::QuestionGeneration(CollaboratorError::Timeout(
                Duration::from_secs(30)
            ))),
            StatusCode::GATEWAY_TIMEOUT
        );
    }

    #[test]
    fn invariant_violation_is_internal_error() {
        assert_eq!(
            status_of(InterviewError::InvariantViolation("drift".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn bind_error_displays_address() {
        let error = ServerError::Bind {
            addr: "127.0.0.1:80".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(error.to_string().contains("127.0.0.1:80"));
    }
}
