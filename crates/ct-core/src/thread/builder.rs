//! Reply builder for fluent API

use super::model::Comment;
use super::validator::ReplyValidator;
use crate::error::{Result, ThreadError};
use crate::types::CommentId;
use chrono::Utc;

/// Builder for creating reply nodes with fluent API
///
/// Generates a fresh random id unless the caller supplies one (callers
/// with their own id scheme, e.g. a counter, set it explicitly).
pub struct ReplyBuilder {
    id: Option<CommentId>,
    author: Option<String>,
    text: Option<String>,
    validator: ReplyValidator,
}

impl ReplyBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            id: None,
            author: None,
            text: None,
            validator: ReplyValidator::new(),
        }
    }

    /// Set an explicit id
    pub fn id(mut self, id: CommentId) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the author display name
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set the body text
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Use a custom validator (e.g. with configured limits)
    pub fn validator(mut self, validator: ReplyValidator) -> Self {
        self.validator = validator;
        self
    }

    /// Build the reply node
    pub fn build(self) -> Result<Comment> {
        let author = self
            .author
            .ok_or_else(|| ThreadError::Validation("Reply author is required".to_string()))?;
        let text = self
            .text
            .ok_or_else(|| ThreadError::Validation("Reply text is required".to_string()))?;

        self.validator.validate_author(&author)?;
        self.validator.validate_text(&text)?;

        Ok(Comment {
            id: self.id.unwrap_or_else(CommentId::generate),
            author,
            text,
            created_at: Utc::now(),
            replies: Vec::new(),
        })
    }
}

impl Default for ReplyBuilder {
    fn default() -> Self {
        Self::new()
    }
}
