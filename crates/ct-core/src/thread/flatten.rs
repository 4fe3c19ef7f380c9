//! Depth-first traversal of a comment thread

use super::model::Comment;
use std::sync::Arc;

/// A comment paired with its nesting depth (roots are depth 0)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatEntry<'a> {
    /// The visited comment
    pub comment: &'a Comment,
    /// Number of ancestors above the comment
    pub depth: usize,
}

/// Lazy pre-order iterator over a thread
///
/// Visits each comment before any of its replies, replies left to right,
/// root branches in order. Borrows the thread, so re-invoking `flatten`
/// on the same value yields the same sequence.
#[derive(Debug)]
pub struct Flatten<'a> {
    stack: Vec<(&'a Comment, usize)>,
}

impl<'a> Flatten<'a> {
    pub(crate) fn new(roots: &'a [Arc<Comment>]) -> Self {
        Self {
            stack: roots.iter().rev().map(|c| (c.as_ref(), 0)).collect(),
        }
    }
}

impl<'a> Iterator for Flatten<'a> {
    type Item = FlatEntry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (comment, depth) = self.stack.pop()?;
        for reply in comment.replies.iter().rev() {
            self.stack.push((reply.as_ref(), depth + 1));
        }
        Some(FlatEntry { comment, depth })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // At least the pending stack entries remain.
        (self.stack.len(), None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thread::model::CommentThread;
    use crate::types::CommentId;

    fn id(s: &str) -> CommentId {
        CommentId::from_string(s)
    }

    fn scenario_thread() -> CommentThread {
        let mut first = Comment::new(id("1"), "John Doe", "This is a great post!");
        let mut jane = Comment::new(id("2"), "Jane Smith", "I agree!");
        jane.replies.push(Arc::new(Comment::new(id("4"), "You", "Me too")));
        first.replies.push(Arc::new(jane));
        let second = Comment::new(id("3"), "Bob Johnson", "Thanks for sharing");
        CommentThread::from_roots([first, second])
    }

    #[test]
    fn test_preorder_with_depths() {
        let thread = scenario_thread();
        let order: Vec<(String, usize)> = thread
            .flatten()
            .map(|e| (e.comment.id.to_string(), e.depth))
            .collect();

        assert_eq!(
            order,
            vec![
                ("1".to_string(), 0),
                ("2".to_string(), 1),
                ("4".to_string(), 2),
                ("3".to_string(), 0),
            ]
        );
    }

    #[test]
    fn test_visits_every_node_once() {
        let thread = scenario_thread();
        let entries: Vec<_> = thread.flatten().collect();
        assert_eq!(entries.len(), 4);

        let mut ids: Vec<_> = entries.iter().map(|e| e.comment.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn test_parent_before_descendants() {
        let thread = scenario_thread();
        let ids: Vec<_> = thread.flatten().map(|e| e.comment.id.as_str()).collect();

        let pos = |wanted: &str| ids.iter().position(|i| *i == wanted).unwrap();
        assert!(pos("1") < pos("2"));
        assert!(pos("2") < pos("4"));
    }

    #[test]
    fn test_restartable() {
        let thread = scenario_thread();
        let first: Vec<(String, usize)> = thread
            .flatten()
            .map(|e| (e.comment.id.to_string(), e.depth))
            .collect();
        let second: Vec<(String, usize)> = thread
            .flatten()
            .map(|e| (e.comment.id.to_string(), e.depth))
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_thread() {
        let thread = CommentThread::new();
        assert_eq!(thread.flatten().count(), 0);
    }

    #[test]
    fn test_size_hint_lower_bound() {
        let thread = scenario_thread();
        let iter = thread.flatten();
        assert_eq!(iter.size_hint().0, 2); // two root branches pending
    }
}
