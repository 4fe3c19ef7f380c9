//! ct-core - Core library for comment-thread
//!
//! This crate provides the nested reply tree engine: an immutable,
//! append-only forest of comments with path-copying updates, identity
//! lookup, and a depth-first traversal for rendering.

pub mod config;
pub mod error;
pub mod thread;
pub mod types;

pub use error::{Result, ThreadError};
pub use thread::{Comment, CommentThread, FlatEntry, Flatten, ReplyBuilder, ReplyValidator};
pub use types::CommentId;
