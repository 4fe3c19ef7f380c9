//! Comment thread data model
//!
//! A thread is a forest of comments. Mutation never happens in place:
//! `add_reply` returns a new thread in which only the nodes on the path
//! from the root to the reply target are freshly constructed; every other
//! subtree is the same `Arc` allocation as in the original thread.

use super::flatten::Flatten;
use crate::error::{Result, ThreadError};
use crate::types::CommentId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// A single comment node
///
/// All fields are immutable once the node is created; edits are not part
/// of the model. New replies are appended at the end of `replies`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Unique comment identifier
    pub id: CommentId,
    /// Display name of the author
    pub author: String,
    /// Body content
    pub text: String,
    /// When the comment was created
    pub created_at: DateTime<Utc>,
    /// Direct replies, in insertion order
    #[serde(default)]
    pub replies: Vec<Arc<Comment>>,
}

impl Comment {
    /// Create a new comment with no replies
    pub fn new(id: CommentId, author: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id,
            author: author.into(),
            text: text.into(),
            created_at: Utc::now(),
            replies: Vec::new(),
        }
    }

    /// Number of direct replies
    pub fn reply_count(&self) -> usize {
        self.replies.len()
    }

    /// Rebuild this node with a different reply list, keeping everything
    /// else identical. Used on the path-copy spine.
    fn with_replies(&self, replies: Vec<Arc<Comment>>) -> Self {
        Self {
            id: self.id.clone(),
            author: self.author.clone(),
            text: self.text.clone(),
            created_at: self.created_at,
            replies,
        }
    }
}

/// An immutable forest of comments
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommentThread {
    /// Top-level comments, in insertion order
    roots: Vec<Arc<Comment>>,
}

impl CommentThread {
    /// Create an empty thread
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a thread from seed comments
    pub fn from_roots(roots: impl IntoIterator<Item = Comment>) -> Self {
        Self {
            roots: roots.into_iter().map(Arc::new).collect(),
        }
    }

    /// Top-level comments
    pub fn roots(&self) -> &[Arc<Comment>] {
        &self.roots
    }

    /// Append a reply under the comment with id `target`
    ///
    /// Returns a new thread; `self` is never modified. Branches off the
    /// root-to-target path are shared with `self` by `Arc`. A `target`
    /// that no longer exists in the thread is treated as "nothing to do"
    /// and yields a thread equal to `self` (the caller derives targets
    /// from a rendered thread, so a stale id is not an error).
    ///
    /// Fails loudly on a malformed reply or an id collision, since id
    /// uniqueness is what `find` correctness rests on.
    ///
    /// Recursion depth follows nesting depth; the practical ceiling is
    /// the call stack, not a limit enforced here.
    pub fn add_reply(&self, target: &CommentId, reply: Comment) -> Result<CommentThread> {
        validate_reply(&reply)?;

        if self.contains(&reply.id) {
            return Err(ThreadError::DuplicateId(reply.id));
        }

        let reply = Arc::new(reply);
        match graft(&self.roots, target, &reply) {
            Some(roots) => Ok(CommentThread { roots }),
            None => {
                debug!(target_id = %target, "reply target not found, thread unchanged");
                Ok(self.clone())
            }
        }
    }

    /// Find a comment by id, depth-first pre-order, first match
    pub fn find(&self, id: &CommentId) -> Option<&Comment> {
        self.flatten()
            .find(|entry| &entry.comment.id == id)
            .map(|entry| entry.comment)
    }

    /// Check whether any comment in the thread has this id
    pub fn contains(&self, id: &CommentId) -> bool {
        self.find(id).is_some()
    }

    /// Depth-first pre-order traversal pairing each comment with its depth
    ///
    /// Roots are depth 0. The iterator is lazy and can be re-created from
    /// the same thread any number of times with identical results.
    pub fn flatten(&self) -> Flatten<'_> {
        Flatten::new(&self.roots)
    }

    /// Total number of comments across all depths
    pub fn len(&self) -> usize {
        self.flatten().count()
    }

    /// Check if the thread has no comments
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Depth of the deepest comment, or `None` for an empty thread
    pub fn max_depth(&self) -> Option<usize> {
        self.flatten().map(|entry| entry.depth).max()
    }
}

/// Reject a malformed reply before any traversal happens
fn validate_reply(reply: &Comment) -> Result<()> {
    if reply.id.is_empty() {
        return Err(ThreadError::Validation("reply id is empty".to_string()));
    }
    if reply.author.trim().is_empty() {
        return Err(ThreadError::Validation("reply author is empty".to_string()));
    }
    if reply.text.trim().is_empty() {
        return Err(ThreadError::Validation("reply text is empty".to_string()));
    }
    if !reply.replies.is_empty() {
        return Err(ThreadError::Validation(
            "a new reply must not carry replies of its own".to_string(),
        ));
    }
    Ok(())
}

/// Path-copying insert: returns the rebuilt sibling list when `target`
/// lives somewhere under `nodes`, `None` otherwise.
///
/// Only the node containing `target` and its ancestors are reconstructed;
/// all other entries of the returned list are `Arc` clones of the input.
fn graft(
    nodes: &[Arc<Comment>],
    target: &CommentId,
    reply: &Arc<Comment>,
) -> Option<Vec<Arc<Comment>>> {
    for (idx, node) in nodes.iter().enumerate() {
        let rebuilt = if &node.id == target {
            let mut replies = node.replies.clone();
            replies.push(Arc::clone(reply));
            node.with_replies(replies)
        } else if let Some(replies) = graft(&node.replies, target, reply) {
            node.with_replies(replies)
        } else {
            continue;
        };

        let mut out = nodes.to_vec();
        out[idx] = Arc::new(rebuilt);
        return Some(out);
    }
    None
}
