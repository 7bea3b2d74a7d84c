//! Priority Heap Module
//!
//! Array-backed binary max-heap ordered by priority.
//!
//! ## Layout
//! ```text
//! index:     0    1    2    3    4    5    6
//!          ┌────┬────┬────┬────┬────┬────┬────┐
//!          │root│ L  │ R  │ LL │ LR │ RL │ RR │
//!          └────┴────┴────┴────┴────┴────┴────┘
//! children(i) = 2i+1, 2i+2      parent(i) = (i-1)/2
//! ```
//!
//! ## Ordering
//! - Sift-up swaps only on a strictly greater priority, so equal priorities
//!   keep no particular order (not stable)
//! - Sift-down prefers the left child when both children tie

mod max_heap;

pub use max_heap::PriorityHeap;

use crate::{Priority, RequestId};

/// One heap slot: the id it belongs to and its current priority
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapSlot {
    pub id: RequestId,
    pub priority: Priority,
}

impl HeapSlot {
    pub fn new(id: RequestId, priority: Priority) -> Self {
        Self { id, priority }
    }
}
