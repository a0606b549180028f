//! Error types for model-backed collaborators.

use interviewer_core::CollaboratorError;
use thiserror::Error;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while talking to a model.
#[derive(Debug, Error)]
pub enum Error {
    /// Provider API returned an error status.
    #[error("provider API error: {0}")]
    ProviderApi(String),

    /// Request failed before a response arrived.
    #[error("request failed: {0}")]
    Request(String),

    /// The model replied, but not in the expected shape.
    #[error("unexpected model reply: {0}")]
    InvalidReply(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<Error> for CollaboratorError {
    fn from(error: Error) -> Self {
        match error {
            Error::ProviderApi(msg) | Error::Request(msg) => CollaboratorError::Unavailable(msg),
            Error::InvalidReply(msg) => CollaboratorError::InvalidResponse(msg),
            Error::Serialization(e) => CollaboratorError::Serialization(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formats_correctly() {
        let err = Error::ProviderApi("status 500".to_string());
        assert_eq!(err.to_string(), "provider API error: status 500");
    }

    #[test]
    fn request_errors_become_unavailable() {
        let err: CollaboratorError = Error::Request("connection refused".to_string()).into();
        assert!(matches!(err, CollaboratorError::Unavailable(msg) if msg == "connection refused"));
    }

    #[test]
    fn invalid_reply_becomes_invalid_response() {
        let err: CollaboratorError = Error::InvalidReply("no JSON".to_string()).into();
        assert!(matches!(err, CollaboratorError::InvalidResponse(_)));
    }

    #[test]
    fn error_from_serde_json() {
        let json_err: serde_json::Error = serde_json::from_str::<String>("invalid").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Serialization(_)));
    }
}
