//! Core type definitions for comment-thread

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a comment node
///
/// Ids are caller-supplied and opaque to the engine; the only contract is
/// uniqueness within one thread's lifetime. The constructors below cover
/// the common schemes: random UUID, content hash, or an arbitrary string
/// (e.g. a caller-maintained counter).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommentId(pub String);

impl CommentId {
    /// Generate a new random CommentId
    pub fn generate() -> Self {
        CommentId(format!("c_{}", &Uuid::new_v4().to_string()[..8]))
    }

    /// Create a CommentId from author, text, and a sequence number
    ///
    /// Stable for identical inputs, so callers that replay the same reply
    /// stream get the same ids back.
    pub fn from_content(author: &str, text: &str, seq: u64) -> Self {
        let hash = blake3::hash(format!("{}:{}:{}", author, seq, text).as_bytes());
        CommentId(format!("c_{}", &hash.to_hex()[..12]))
    }

    /// Create a CommentId from a string
    pub fn from_string(s: impl Into<String>) -> Self {
        CommentId(s.into())
    }

    /// Get the string value
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if the id is empty (malformed)
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
