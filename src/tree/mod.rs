//! Key Tree Module
//!
//! Unbalanced binary search tree ordered by request id.
//!
//! ## Responsibilities
//! - Point lookup of a request's name by id
//! - Ascending-id traversal for display
//! - Deletion with in-order successor replacement
//!
//! ## Shape
//! No rebalancing: inserting ids in sorted order degrades the tree into a
//! list. Every walk is iterative so a degenerate tree costs time, not stack.
//!
//! Ordering rule: left subtree `< node.id`, right subtree `>= node.id`.

mod bst;

pub use bst::{Iter, KeyTree};

use crate::RequestId;

/// Read-only view of one tree node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEntry {
    pub id: RequestId,
    pub name: String,
}

impl KeyEntry {
    pub fn new(id: RequestId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
