//! Comment thread module
//!
//! Handles the reply tree model, traversal, validation, and construction.

pub mod builder;
pub mod flatten;
pub mod model;
pub mod validator;

pub use builder::ReplyBuilder;
pub use flatten::{FlatEntry, Flatten};
pub use model::{Comment, CommentThread};
pub use validator::ReplyValidator;
