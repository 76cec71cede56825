// src/shared/content_error.rs
use crate::auth::application::ports::incoming::SessionError;

/// Error surfaced by every content store operation.
///
/// Backend failures are carried as the backend's own message; nothing is
/// retried or rewritten on the way up.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    #[error(transparent)]
    Unauthenticated(#[from] SessionError),

    #[error("Record not found")]
    NotFound,

    #[error("Invalid input: {0}")]
    Invalid(String),

    #[error("{0}")]
    Backend(String),
}

impl ContentError {
    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, ContentError::Unauthenticated(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_error_converts_to_unauthenticated() {
        let err: ContentError = SessionError::SessionExpired.into();
        assert!(err.is_unauthenticated());
        assert_eq!(err.to_string(), "Session expired - please login again");
    }

    #[test]
    fn test_backend_message_is_passed_through() {
        let err = ContentError::Backend("duplicate key value".to_string());
        assert_eq!(err.to_string(), "duplicate key value");
        assert!(!err.is_unauthenticated());
    }
}
