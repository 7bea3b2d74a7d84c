//! PriorityHeap Tests
//!
//! Tests verify:
//! - Insert / peek / extract-max ordering
//! - Tie handling in sift-down
//! - Deletion by id from any position
//! - Priority increase and two-way update

use reqindex::heap::{HeapSlot, PriorityHeap};

// =============================================================================
// Helper Functions
// =============================================================================

fn heap_with(slots: &[(i64, i64)]) -> PriorityHeap {
    let mut heap = PriorityHeap::new();
    for &(id, priority) in slots {
        heap.insert(id, priority);
        assert!(heap.is_valid());
    }
    heap
}

fn drain_priorities(heap: &mut PriorityHeap) -> Vec<i64> {
    let mut out = Vec::new();
    while let Some(slot) = heap.extract_max() {
        assert!(heap.is_valid());
        out.push(slot.priority);
    }
    out
}

// =============================================================================
// Basic Operations Tests
// =============================================================================

#[test]
fn test_new_heap_is_empty() {
    let mut heap = PriorityHeap::new();
    assert!(heap.is_empty());
    assert_eq!(heap.size(), 0);
    assert_eq!(heap.peek(), None);
    assert_eq!(heap.extract_max(), None);
}

#[test]
fn test_insert_keeps_max_at_root() {
    let heap = heap_with(&[(1, 5), (2, 9), (3, 7)]);

    assert_eq!(heap.peek(), Some(&HeapSlot::new(2, 9)));
    assert_eq!(heap.len(), 3);
}

#[test]
fn test_peek_all_is_array_order() {
    let heap = heap_with(&[(1, 5), (2, 9), (3, 7)]);

    // 9 sifts up over 5; 7 is not greater than 9 and stays in slot 2
    assert_eq!(
        heap.peek_all(),
        &[HeapSlot::new(2, 9), HeapSlot::new(1, 5), HeapSlot::new(3, 7)]
    );
}

#[test]
fn test_equal_priority_does_not_swap_on_insert() {
    let heap = heap_with(&[(1, 4), (2, 4)]);
    assert_eq!(heap.peek_all()[0].id, 1);
}

#[test]
fn test_extract_max_in_descending_order() {
    let mut heap = heap_with(&[(1, 3), (2, 17), (3, 8), (4, 1), (5, 17), (6, 12), (7, -4), (8, 0)]);
    assert_eq!(drain_priorities(&mut heap), vec![17, 17, 12, 8, 3, 1, 0, -4]);
    assert!(heap.is_empty());
}

#[test]
fn test_sift_down_prefers_left_on_tie() {
    // root 10, children both 5
    let mut heap = heap_with(&[(1, 10), (2, 5), (3, 5), (4, 1)]);

    // 1 moves to the root, then swaps with the left child
    assert_eq!(heap.extract_max(), Some(HeapSlot::new(1, 10)));
    assert_eq!(heap.peek_all()[0], HeapSlot::new(2, 5));
    assert_eq!(heap.peek_all()[1], HeapSlot::new(4, 1));
    assert_eq!(heap.peek_all()[2], HeapSlot::new(3, 5));
}

// =============================================================================
// Delete Tests
// =============================================================================

#[test]
fn test_delete_by_id_root() {
    let mut heap = heap_with(&[(1, 5), (2, 9), (3, 7)]);

    assert_eq!(heap.delete_by_id(2), Some(HeapSlot::new(2, 9)));
    assert!(heap.is_valid());
    assert_eq!(heap.peek(), Some(&HeapSlot::new(3, 7)));
}

#[test]
fn test_delete_by_id_last_slot() {
    let mut heap = heap_with(&[(1, 5), (2, 9), (3, 7)]);

    assert_eq!(heap.delete_by_id(3), Some(HeapSlot::new(3, 7)));
    assert_eq!(heap.len(), 2);
    assert!(heap.is_valid());
}

#[test]
fn test_delete_by_id_moved_slot_can_rise() {
    // Array: [100, 50, 90, 40, 45, 85, 80]
    let mut heap = heap_with(&[(1, 100), (2, 50), (3, 90), (4, 40), (5, 45), (6, 85), (7, 80)]);
    assert_eq!(heap.peek_all()[3], HeapSlot::new(4, 40));

    // 80 lands under 50 and has to move up
    heap.delete_by_id(4);
    assert!(heap.is_valid());
    assert_eq!(heap.peek_all()[1], HeapSlot::new(7, 80));
    assert_eq!(drain_priorities(&mut heap), vec![100, 90, 85, 80, 50, 45]);
}

#[test]
fn test_delete_by_id_missing_is_noop() {
    let mut heap = heap_with(&[(1, 5), (2, 9)]);
    let before = heap.peek_all().to_vec();

    assert_eq!(heap.delete_by_id(42), None);
    assert_eq!(heap.delete_by_id(42), None);
    assert_eq!(heap.peek_all(), before.as_slice());
}

// =============================================================================
// Priority Change Tests
// =============================================================================

#[test]
fn test_increase_priority_moves_to_root() {
    let mut heap = heap_with(&[(1, 5), (2, 9), (3, 7), (10, 1)]);

    assert!(heap.increase_priority(10, 99));
    assert_eq!(heap.peek(), Some(&HeapSlot::new(10, 99)));
    assert!(heap.is_valid());
}

#[test]
fn test_increase_priority_missing_id() {
    let mut heap = PriorityHeap::new();
    assert!(!heap.increase_priority(999, 5));
}

#[test]
fn test_increase_priority_with_decrease_can_break_heap() {
    let mut heap = heap_with(&[(1, 10), (2, 5)]);

    // Documented contract: increase_priority only sifts up
    assert!(heap.increase_priority(1, 0));
    assert!(!heap.is_valid());
}

#[test]
fn test_update_priority_both_directions() {
    let mut heap = heap_with(&[(1, 10), (2, 5), (3, 7), (4, 2)]);

    assert_eq!(heap.update_priority(1, 0), Some(10));
    assert!(heap.is_valid());
    assert_eq!(heap.peek().map(|s| s.id), Some(3));

    assert_eq!(heap.update_priority(4, 50), Some(2));
    assert!(heap.is_valid());
    assert_eq!(heap.peek().map(|s| s.id), Some(4));

    assert_eq!(heap.update_priority(99, 1), None);
    assert_eq!(heap.priority_of(1), Some(0));
}

#[test]
fn test_position_and_priority_of() {
    let heap = heap_with(&[(1, 5), (2, 9)]);

    assert_eq!(heap.position(2), Some(0));
    assert_eq!(heap.position(3), None);
    assert_eq!(heap.priority_of(1), Some(5));
    assert_eq!(heap.priority_of(3), None);
}
