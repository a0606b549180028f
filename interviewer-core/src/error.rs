//! Error types for interviewer-core

use std::time::Duration;

use thiserror::Error;

/// Top-level error type for interview operations
#[derive(Error, Debug)]
pub enum InterviewError {
    #[error("Invalid domain: {0}")]
    InvalidDomain(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Covers both unknown ids and sessions that already finished
    #[error("Session not found: {0}")]
    SessionNotFound(String),

    #[error("Question generation failed: {0}")]
    QuestionGeneration(#[source] CollaboratorError),

    #[error("Answer evaluation failed: {0}")]
    Evaluation(#[source] CollaboratorError),

    #[error("Transcript persistence failed: {0}")]
    Persistence(#[source] CollaboratorError),

    #[error("Internal invariant violated: {0}")]
    InvariantViolation(String),
}

impl InterviewError {
    /// Whether the caller can retry the same step unchanged
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::QuestionGeneration(_) | Self::Evaluation(_) | Self::Persistence(_)
        )
    }

    /// Whether the failure came from a collaborator exceeding its deadline
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::QuestionGeneration(e) | Self::Evaluation(e) | Self::Persistence(e) => {
                matches!(e, CollaboratorError::Timeout(_))
            }
            _ => false,
        }
    }
}

/// Errors raised by question generators, evaluators and transcript sinks
#[derive(Error, Debug)]
pub enum CollaboratorError {
    #[error("timed out after {0:?}")]
    Timeout(Duration),

    #[error("unavailable: {0}")]
    Unavailable(String),

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_not_found_displays_id() {
        let error = InterviewError::SessionNotFound("abc123".to_string());
        assert!(error.to_string().contains("Session not found"));
        assert!(error.to_string().contains("abc123"));
    }

    #[test]
    fn invalid_domain_displays_value() {
        let error = InterviewError::InvalidDomain("marketing".to_string());
        assert_eq!(error.to_string(), "Invalid domain: marketing");
    }

    #[test]
    fn collaborator_failures_are_retryable() {
        let error = InterviewError::Evaluation(CollaboratorError::Unavailable("down".into()));
        assert!(error.is_retryable());
        assert!(!error.is_timeout());

        let error = InterviewError::Persistence(CollaboratorError::Timeout(Duration::from_secs(1)));
        assert!(error.is_retryable());
        assert!(error.is_timeout());
    }

    #[test]
    fn caller_errors_are_not_retryable() {
        assert!(!InterviewError::InvalidDomain("x".into()).is_retryable());
        assert!(!InterviewError::SessionNotFound("x".into()).is_retryable());
        assert!(!InterviewError::InvariantViolation("x".into()).is_retryable());
    }

    #[test]
    fn collaborator_error_converts_from_io_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error: CollaboratorError = io_error.into();
        assert!(matches!(error, CollaboratorError::Io(_)));
        assert!(error.to_string().contains("denied"));
    }

    #[test]
    fn collaborator_error_converts_from_serde_json() {
        let json_err = serde_json::from_str::<String>("invalid").unwrap_err();
        let error: CollaboratorError = json_err.into();
        assert!(matches!(error, CollaboratorError::Serialization(_)));
    }

    #[test]
    fn question_generation_wraps_source() {
        use std::error::Error as _;

        let error =
            InterviewError::QuestionGeneration(CollaboratorError::InvalidResponse("{}".into()));
        assert!(error.source().is_some());
        assert!(error.to_string().contains("invalid response"));
    }
}
