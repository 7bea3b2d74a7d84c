//! KeyTree implementation
//!
//! Owned-subtree BST: each node exclusively owns its children.

use std::mem;

use super::KeyEntry;
use crate::RequestId;

type Link = Option<Box<Node>>;

struct Node {
    id: RequestId,
    name: String,
    left: Link,
    right: Link,
}

impl Node {
    fn new(id: RequestId, name: String) -> Box<Self> {
        Box::new(Self {
            id,
            name,
            left: None,
            right: None,
        })
    }

    fn entry(&self) -> KeyEntry {
        KeyEntry::new(self.id, self.name.clone())
    }
}

/// Binary search tree keyed by request id
#[derive(Default)]
pub struct KeyTree {
    root: Link,
}

impl KeyTree {
    /// Create a new empty tree
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Attach a new leaf at the first empty slot on the search path.
    ///
    /// An id equal to an existing one goes right, below the older node.
    pub fn insert(&mut self, id: RequestId, name: impl Into<String>) {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = if id < node.id {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *link = Some(Node::new(id, name.into()));
    }

    /// Find the first node on the search path holding `id`
    pub fn search(&self, id: RequestId) -> Option<KeyEntry> {
        self.find(id).map(Node::entry)
    }

    /// Check whether `id` is present
    pub fn contains(&self, id: RequestId) -> bool {
        self.find(id).is_some()
    }

    /// Rename the node holding `id`, returning false if it is absent
    pub fn set_name(&mut self, id: RequestId, name: impl Into<String>) -> bool {
        let link = Self::locate(&mut self.root, id);
        match link {
            Some(node) => {
                node.name = name.into();
                true
            }
            None => false,
        }
    }

    /// Remove `id` and return the entry it held.
    ///
    /// A node with two children takes over the id and name of its in-order
    /// successor, which is then unlinked from the right subtree. Deleting an
    /// absent id leaves the tree unchanged.
    pub fn delete(&mut self, id: RequestId) -> Option<KeyEntry> {
        let link = Self::locate(&mut self.root, id);
        let node = link.as_mut()?;

        if node.left.is_some() {
            if let Some(mut successor) = Self::detach_min(&mut node.right) {
                mem::swap(&mut node.id, &mut successor.id);
                mem::swap(&mut node.name, &mut successor.name);
                return Some(KeyEntry::new(successor.id, successor.name));
            }
        }

        // At most one child: splice it into the parent's link
        let mut node = link.take()?;
        *link = node.left.take().or_else(|| node.right.take());
        Some(KeyEntry::new(node.id, node.name))
    }

    /// All entries in ascending id order
    pub fn traverse(&self) -> Vec<KeyEntry> {
        self.iter().collect()
    }

    /// Borrowing in-order iterator
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.root.as_deref())
    }

    /// Number of nodes, counted by a full walk
    pub fn size(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<&Node> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.left.as_deref());
            stack.extend(node.right.as_deref());
        }
        count
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes on the longest root-to-leaf path (0 when empty)
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node, usize)> = self
            .root
            .as_deref()
            .map(|node| (node, 1))
            .into_iter()
            .collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left.as_deref().map(|n| (n, depth + 1)));
            stack.extend(node.right.as_deref().map(|n| (n, depth + 1)));
        }
        height
    }

    // =========================================================================
    // Internal Helpers
    // =========================================================================

    fn find(&self, id: RequestId) -> Option<&Node> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            if id == node.id {
                return Some(node);
            }
            current = if id < node.id {
                node.left.as_deref()
            } else {
                node.right.as_deref()
            };
        }
        None
    }

    /// Return the link that holds `id`, or the empty link where it would go
    fn locate(mut link: &mut Link, id: RequestId) -> &mut Link {
        loop {
            let go_left = match link.as_deref() {
                Some(node) if id != node.id => id < node.id,
                _ => return link,
            };
            if let Some(node) = link {
                link = if go_left {
                    &mut node.left
                } else {
                    &mut node.right
                };
            }
        }
    }

    /// Unlink the leftmost node below `link`, splicing its right child in
    fn detach_min(mut link: &mut Link) -> Option<Box<Node>> {
        while link.as_ref().map_or(false, |node| node.left.is_some()) {
            if let Some(node) = link {
                link = &mut node.left;
            }
        }
        let mut min = link.take()?;
        *link = min.right.take();
        Some(min)
    }
}

impl Drop for KeyTree {
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

/// In-order iterator over a KeyTree
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iter<'a> {
    fn new(root: Option<&'a Node>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut current: Option<&'a Node>) {
        while let Some(node) = current {
            self.stack.push(node);
            current = node.left.as_deref();
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = KeyEntry;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(node.entry())
    }
}

impl<'a> IntoIterator for &'a KeyTree {
    type Item = KeyEntry;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
