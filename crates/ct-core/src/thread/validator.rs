//! Reply validation

use crate::config::LimitConfig;
use crate::error::{Result, ThreadError};

/// Maximum reply text length (default)
pub const MAX_TEXT_LENGTH: usize = 2000;

/// Maximum author name length (default)
pub const MAX_AUTHOR_LENGTH: usize = 100;

/// Validator for reply content
pub struct ReplyValidator {
    max_text_length: usize,
    max_author_length: usize,
}

impl ReplyValidator {
    /// Create a new validator with default settings
    pub fn new() -> Self {
        Self {
            max_text_length: MAX_TEXT_LENGTH,
            max_author_length: MAX_AUTHOR_LENGTH,
        }
    }

    /// Create a new validator with custom max text length
    pub fn with_max_text_length(max_text_length: usize) -> Self {
        Self {
            max_text_length,
            max_author_length: MAX_AUTHOR_LENGTH,
        }
    }

    /// Create a validator from configured limits
    pub fn from_limits(limits: &LimitConfig) -> Self {
        Self {
            max_text_length: limits.max_text_length,
            max_author_length: limits.max_author_length,
        }
    }

    /// Validate reply body text
    pub fn validate_text(&self, text: &str) -> Result<()> {
        let trimmed = text.trim();

        if trimmed.is_empty() {
            return Err(ThreadError::Validation(
                "Reply text cannot be empty".to_string(),
            ));
        }

        if trimmed.len() > self.max_text_length {
            return Err(ThreadError::Validation(format!(
                "Reply text exceeds maximum length of {} characters",
                self.max_text_length
            )));
        }

        Ok(())
    }

    /// Validate an author display name
    pub fn validate_author(&self, author: &str) -> Result<()> {
        let trimmed = author.trim();

        if trimmed.is_empty() {
            return Err(ThreadError::Validation(
                "Author name cannot be empty".to_string(),
            ));
        }

        if trimmed.len() > self.max_author_length {
            return Err(ThreadError::Validation(format!(
                "Author name exceeds maximum length of {} characters",
                self.max_author_length
            )));
        }

        Ok(())
    }
}

impl Default for ReplyValidator {
    fn default() -> Self {
        Self::new()
    }
}
