//! Error types for comment-thread

use crate::types::CommentId;
use thiserror::Error;

/// Main error type for comment-thread
#[derive(Debug, Error)]
pub enum ThreadError {
    /// A reply's id already exists somewhere in the thread
    #[error("Duplicate comment id: {0}")]
    DuplicateId(CommentId),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<ThreadError>,
    },
}

impl ThreadError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        ThreadError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

/// Result type alias for comment-thread
pub type Result<T> = std::result::Result<T, ThreadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ThreadError::DuplicateId(CommentId::from_string("c-42"));
        assert_eq!(err.to_string(), "Duplicate comment id: c-42");
    }

    #[test]
    fn test_error_with_context() {
        let err = ThreadError::Validation("reply text is empty".to_string());
        let err = err.with_context("Failed to add reply");
        assert!(err.to_string().contains("Failed to add reply"));
    }

    #[test]
    fn test_serde_error_conversion() {
        let serde_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: ThreadError = serde_err.into();
        assert!(matches!(err, ThreadError::Serde(_)));
    }
}
