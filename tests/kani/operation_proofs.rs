//! Proofs about individual operations
//!
//! Each proof checks one operation's contract for all inputs of a small heap.

#[cfg(kani)]
use rust_binary_heap::{BinaryHeap, HeapError, HeapKind};

#[cfg(kani)]
fn any_kind() -> HeapKind {
    if kani::any() {
        HeapKind::Max
    } else {
        HeapKind::Min
    }
}

/// Proof that insert always increments the length
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(5)]
fn verify_insert_increments_len() {
    let mut heap: BinaryHeap<u32> = BinaryHeap::with_capacity(2, any_kind()).unwrap();
    heap.insert(kani::any());
    heap.insert(kani::any());

    let initial_len = heap.len();
    heap.insert(kani::any());

    assert!(heap.len() == initial_len + 1);
    assert!(heap.capacity() >= heap.len());
}

/// Proof that extract decrements the length and returns the root
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(5)]
fn verify_extract_returns_peek() {
    let mut heap: BinaryHeap<u32> = BinaryHeap::new(any_kind());
    heap.insert(kani::any());
    heap.insert(kani::any());
    heap.insert(kani::any());

    let root = *heap.peek().unwrap();
    let initial_len = heap.len();

    assert!(heap.extract() == Ok(root));
    assert!(heap.len() == initial_len - 1);
}

/// Proof that peek and extract on an empty heap fail with Empty
#[cfg(kani)]
#[kani::proof]
fn verify_empty_heap_errors() {
    let mut heap: BinaryHeap<u32> = BinaryHeap::new(any_kind());
    assert!(heap.peek() == Err(HeapError::Empty));
    assert!(heap.extract() == Err(HeapError::Empty));
    assert!(heap.len() == 0);
}

/// Proof that peek on a max-heap is at least every element
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(5)]
fn verify_max_peek_is_maximum() {
    let a: u32 = kani::any();
    let b: u32 = kani::any();
    let c: u32 = kani::any();
    let heap = BinaryHeap::from_sequence([a, b, c], HeapKind::Max);

    let top = *heap.peek().unwrap();
    assert!(top >= a && top >= b && top >= c);
    assert!(top == a || top == b || top == c);
}

/// Proof that peek on a min-heap is at most every element
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(5)]
fn verify_min_peek_is_minimum() {
    let a: u32 = kani::any();
    let b: u32 = kani::any();
    let c: u32 = kani::any();
    let heap = BinaryHeap::from_sequence([a, b, c], HeapKind::Min);

    let top = *heap.peek().unwrap();
    assert!(top <= a && top <= b && top <= c);
    assert!(top == a || top == b || top == c);
}
