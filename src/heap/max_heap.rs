//! PriorityHeap implementation

use std::cmp::Ordering;

use super::HeapSlot;
use crate::{Priority, RequestId};

/// Binary max-heap of (id, priority) slots
#[derive(Debug, Clone, Default)]
pub struct PriorityHeap {
    slots: Vec<HeapSlot>,
}

impl PriorityHeap {
    /// Create a new empty heap
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Append a slot and sift it up into place
    pub fn insert(&mut self, id: RequestId, priority: Priority) {
        self.slots.push(HeapSlot::new(id, priority));
        self.sift_up(self.slots.len() - 1);
    }

    /// Highest-priority slot, without removing it
    pub fn peek(&self) -> Option<&HeapSlot> {
        self.slots.first()
    }

    /// Remove and return the highest-priority slot
    pub fn extract_max(&mut self) -> Option<HeapSlot> {
        if self.slots.is_empty() {
            return None;
        }
        let max = self.slots.swap_remove(0);
        if !self.slots.is_empty() {
            self.sift_down(0);
        }
        Some(max)
    }

    /// Remove the first slot (in array order) holding `id`.
    ///
    /// The last slot is moved into the hole. It came from another subtree,
    /// so it may belong above the hole as well as below it.
    pub fn delete_by_id(&mut self, id: RequestId) -> Option<HeapSlot> {
        let index = self.position(id)?;
        let removed = self.slots.swap_remove(index);
        if index < self.slots.len() {
            self.sift_down(index);
            self.sift_up(index);
        }
        Some(removed)
    }

    /// Set the priority of `id` and sift it up.
    ///
    /// Only correct for increases: a lower priority is stored as given and
    /// left where it is, which can break the heap property below it. Use
    /// `update_priority` when the direction is not known.
    pub fn increase_priority(&mut self, id: RequestId, new_priority: Priority) -> bool {
        match self.position(id) {
            Some(index) => {
                self.slots[index].priority = new_priority;
                self.sift_up(index);
                true
            }
            None => false,
        }
    }

    /// Set the priority of `id`, sifting whichever way restores the heap.
    ///
    /// Returns the previous priority, or `None` if `id` is absent.
    pub fn update_priority(&mut self, id: RequestId, new_priority: Priority) -> Option<Priority> {
        let index = self.position(id)?;
        let old = self.slots[index].priority;
        self.slots[index].priority = new_priority;
        match new_priority.cmp(&old) {
            Ordering::Greater => self.sift_up(index),
            Ordering::Less => self.sift_down(index),
            Ordering::Equal => {}
        }
        Some(old)
    }

    /// Current priority of `id`
    pub fn priority_of(&self, id: RequestId) -> Option<Priority> {
        self.position(id).map(|index| self.slots[index].priority)
    }

    /// Array index of the first slot holding `id` (linear scan)
    pub fn position(&self, id: RequestId) -> Option<usize> {
        self.slots.iter().position(|slot| slot.id == id)
    }

    /// All slots in internal array order (not sorted by priority)
    pub fn peek_all(&self) -> &[HeapSlot] {
        &self.slots
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HeapSlot> {
        self.slots.iter()
    }

    pub fn size(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Check the max-heap property over every parent/child pair
    pub fn is_valid(&self) -> bool {
        (1..self.slots.len()).all(|i| self.slots[(i - 1) / 2].priority >= self.slots[i].priority)
    }

    // =========================================================================
    // Sifting
    // =========================================================================

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.slots[index].priority > self.slots[parent].priority {
                self.slots.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.slots.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut largest = index;

            if left < len && self.slots[left].priority > self.slots[largest].priority {
                largest = left;
            }
            if right < len && self.slots[right].priority > self.slots[largest].priority {
                largest = right;
            }

            if largest == index {
                break;
            }

            self.slots.swap(index, largest);
            index = largest;
        }
    }
}

impl<'a> IntoIterator for &'a PriorityHeap {
    type Item = &'a HeapSlot;
    type IntoIter = std::slice::Iter<'a, HeapSlot>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
