//! Proofs that the heap invariant survives bounded operation sequences

#[cfg(kani)]
use rust_binary_heap::{BinaryHeap, HeapKind};

/// Proof that any mix of inserts and extracts keeps the heap valid
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_operation_sequence_keeps_invariant() {
    let kind = if kani::any() { HeapKind::Max } else { HeapKind::Min };
    let mut heap: BinaryHeap<u8> = BinaryHeap::with_capacity(1, kind).unwrap();

    for _ in 0..4 {
        if kani::any() {
            heap.insert(kani::any());
        } else {
            let _ = heap.extract();
        }
        assert!(heap.is_valid());
    }
}

/// Proof that to_sorted_sequence leaves len and peek unchanged
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(5)]
fn verify_sorted_sequence_restores_heap() {
    let kind = if kani::any() { HeapKind::Max } else { HeapKind::Min };
    let values: [u8; 3] = kani::any();
    let heap = BinaryHeap::from_sequence(values, kind);

    let len = heap.len();
    let peek = *heap.peek().unwrap();
    let sorted = heap.to_sorted_sequence();

    assert!(sorted.len() == len);
    assert!(sorted[0] == peek);
    assert!(heap.len() == len);
    assert!(*heap.peek().unwrap() == peek);
    assert!(heap.is_valid());
}
