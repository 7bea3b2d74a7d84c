//! Request Index Module
//!
//! Keeps the key tree and the priority heap describing the same requests.
//!
//! ## Responsibilities
//! - Apply every mutation to both structures before returning
//! - Resolve duplicate inserts and priority decreases per `Config`
//! - Join name (tree) and priority (heap) into a `Request` view

use std::cmp::Ordering;

use crate::config::{Config, DuplicatePolicy, PriorityPolicy};
use crate::error::{IndexError, Result};
use crate::heap::{HeapSlot, PriorityHeap};
use crate::tree::{KeyEntry, KeyTree};
use crate::{Priority, RequestId};

/// A request as seen from outside the index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub id: RequestId,
    pub name: String,
    pub priority: Priority,
}

/// What `insert_request` did with its arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// New id, stored in both structures
    Inserted,

    /// Existing id, name and priority overwritten in place
    Replaced,

    /// Existing id, a second entry was stored behind the first
    Shadowed,

    /// Existing id, nothing changed
    Rejected,
}

/// What `change_priority` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityChange {
    Raised { old: Priority },
    Lowered { old: Priority },
    Unchanged,
    /// A decrease refused under `PriorityPolicy::RejectDecrease`
    Rejected { current: Priority },
    NotFound,
}

impl PriorityChange {
    /// Whether the id was present in the heap
    pub fn found(&self) -> bool {
        !matches!(self, PriorityChange::NotFound)
    }
}

/// The request index
///
/// ## Consistency
///
/// Both sub-structures are private. Every `&mut self` method updates the
/// tree and the heap before it returns, so between calls the ids in the tree
/// and the ids in the heap are the same multiset. The tree owns names, the
/// heap owns priorities.
///
/// ## Concurrency
///
/// Not internally synchronized. A caller sharing one index across threads
/// must hold a single lock around each whole call; locking the two halves
/// separately would let a reader see an id in one structure but not the
/// other.
pub struct RequestIndex {
    /// Index configuration
    config: Config,

    /// Names, ordered by id
    tree: KeyTree,

    /// Priorities, max at the root
    heap: PriorityHeap,
}

impl RequestIndex {
    /// Create an empty index with default config
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create an empty index with the given config
    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            tree: KeyTree::new(),
            heap: PriorityHeap::new(),
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Insert a request into both structures
    ///
    /// An id that is already live is handled by `Config::duplicate_policy`.
    pub fn insert_request(
        &mut self,
        id: RequestId,
        name: impl Into<String>,
        priority: Priority,
    ) -> InsertOutcome {
        let name = name.into();

        if self.tree.contains(id) {
            match self.config.duplicate_policy {
                DuplicatePolicy::Reject => {
                    tracing::debug!("Rejected duplicate request id {}", id);
                    return InsertOutcome::Rejected;
                }
                DuplicatePolicy::Replace => {
                    self.tree.set_name(id, name);
                    if self.heap.update_priority(id, priority).is_none() {
                        tracing::warn!("Request {} had no heap slot, re-adding it", id);
                        self.heap.insert(id, priority);
                    }
                    tracing::debug!("Replaced request {} (priority {})", id, priority);
                    return InsertOutcome::Replaced;
                }
                DuplicatePolicy::Shadow => {
                    self.tree.insert(id, name);
                    self.heap.insert(id, priority);
                    tracing::debug!("Shadowed request {} (priority {})", id, priority);
                    return InsertOutcome::Shadowed;
                }
            }
        }

        self.tree.insert(id, name);
        self.heap.insert(id, priority);
        tracing::debug!("Inserted request {} (priority {})", id, priority);
        InsertOutcome::Inserted
    }

    /// Remove a request from both structures
    ///
    /// The tree removal and the heap scan are independent; an absent id is a
    /// no-op for both and returns `None`.
    pub fn delete_request(&mut self, id: RequestId) -> Option<Request> {
        let entry = self.tree.delete(id);
        let slot = self.heap.delete_by_id(id);

        match (entry, slot) {
            (None, None) => None,
            (Some(entry), Some(slot)) => {
                tracing::debug!("Deleted request {}", id);
                Some(Request {
                    id,
                    name: entry.name,
                    priority: slot.priority,
                })
            }
            (entry, slot) => {
                tracing::warn!(
                    "Request {} was only in the {}",
                    id,
                    if entry.is_some() { "key tree" } else { "heap" }
                );
                Some(Request {
                    id,
                    name: entry.map(|e| e.name).unwrap_or_default(),
                    priority: slot.map(|s| s.priority).unwrap_or_default(),
                })
            }
        }
    }

    /// Extract the highest-priority request and drop it from the tree too
    ///
    /// Under `DuplicatePolicy::Shadow` the name comes from the first tree
    /// node holding the id, which need not be the entry that set the
    /// extracted priority.
    pub fn process_highest_priority(&mut self) -> Option<Request> {
        let slot = self.heap.extract_max()?;
        let name = match self.tree.delete(slot.id) {
            Some(entry) => entry.name,
            None => {
                tracing::warn!("Processed request {} had no key tree node", slot.id);
                String::new()
            }
        };

        tracing::debug!("Processed request {} (priority {})", slot.id, slot.priority);
        Some(Request {
            id: slot.id,
            name,
            priority: slot.priority,
        })
    }

    /// Raise the priority of `id`; returns whether the id was found
    ///
    /// A lower priority is handled by `Config::priority_policy`.
    pub fn increase_priority(&mut self, id: RequestId, new_priority: Priority) -> bool {
        self.change_priority(id, new_priority).found()
    }

    /// Set the priority of `id` and report what happened
    pub fn change_priority(&mut self, id: RequestId, new_priority: Priority) -> PriorityChange {
        let current = match self.heap.priority_of(id) {
            Some(priority) => priority,
            None => return PriorityChange::NotFound,
        };

        let change = match new_priority.cmp(&current) {
            Ordering::Greater => {
                self.heap.increase_priority(id, new_priority);
                PriorityChange::Raised { old: current }
            }
            Ordering::Equal => PriorityChange::Unchanged,
            Ordering::Less => match self.config.priority_policy {
                PriorityPolicy::RejectDecrease => PriorityChange::Rejected { current },
                PriorityPolicy::Resift => {
                    self.heap.update_priority(id, new_priority);
                    PriorityChange::Lowered { old: current }
                }
            },
        };

        tracing::debug!("Priority change for {}: {:?}", id, change);
        change
    }

    // =========================================================================
    // Lookups
    // =========================================================================

    /// Look up the name of `id` (key tree only)
    pub fn search_request(&self, id: RequestId) -> Option<KeyEntry> {
        self.tree.search(id)
    }

    /// Look up name and priority of `id`
    pub fn get(&self, id: RequestId) -> Option<Request> {
        let entry = self.tree.search(id)?;
        let priority = self.heap.priority_of(id)?;
        Some(Request {
            id,
            name: entry.name,
            priority,
        })
    }

    /// The request `process_highest_priority` would return next
    pub fn peek_highest(&self) -> Option<Request> {
        let slot = self.heap.peek()?;
        let entry = self.tree.search(slot.id)?;
        Some(Request {
            id: slot.id,
            name: entry.name,
            priority: slot.priority,
        })
    }

    /// Tree entries in ascending id order
    pub fn traverse_key_tree(&self) -> Vec<KeyEntry> {
        self.tree.traverse()
    }

    /// Heap slots in internal array order
    pub fn peek_heap(&self) -> &[HeapSlot] {
        self.heap.peek_all()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Node count of the key tree (full walk)
    pub fn size_key_tree(&self) -> usize {
        self.tree.size()
    }

    /// Slot count of the heap
    pub fn size_heap(&self) -> usize {
        self.heap.size()
    }

    pub fn is_empty_key_tree(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn is_empty_heap(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of live requests
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Longest root-to-leaf path in the key tree
    pub fn tree_height(&self) -> usize {
        self.tree.height()
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    // =========================================================================
    // Diagnostics
    // =========================================================================

    /// Check tree ordering, the heap property and that both hold the same ids
    pub fn verify(&self) -> Result<()> {
        let entries = self.tree.traverse();
        let allow_equal = self.config.duplicate_policy == DuplicatePolicy::Shadow;

        for pair in entries.windows(2) {
            let ordered = match pair[0].id.cmp(&pair[1].id) {
                Ordering::Less => true,
                Ordering::Equal => allow_equal,
                Ordering::Greater => false,
            };
            if !ordered {
                return Err(IndexError::Inconsistent(format!(
                    "key tree out of order at ids {} and {}",
                    pair[0].id, pair[1].id
                )));
            }
        }

        if !self.heap.is_valid() {
            return Err(IndexError::Inconsistent(
                "heap property violated".to_string(),
            ));
        }

        let tree_ids: Vec<RequestId> = entries.iter().map(|e| e.id).collect();
        let mut heap_ids: Vec<RequestId> = self.heap.iter().map(|s| s.id).collect();
        heap_ids.sort_unstable();

        if tree_ids != heap_ids {
            return Err(IndexError::Inconsistent(format!(
                "key tree holds {} ids, heap holds {} ids, sets differ",
                tree_ids.len(),
                heap_ids.len()
            )));
        }

        Ok(())
    }
}

impl Default for RequestIndex {
    fn default() -> Self {
        Self::new()
    }
}
