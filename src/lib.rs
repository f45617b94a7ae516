//! Array-backed binary heap priority queue
//!
//! This crate provides a [`BinaryHeap`] stored in one contiguous vector that is
//! either a max-heap or a min-heap, selected by [`HeapKind`] at construction.
//!
//! # Features
//!
//! - **Linear-time build**: [`BinaryHeap::from_sequence`] heapifies bottom-up in O(n)
//! - **Insert / extract**: O(log n), with amortized O(1) capacity doubling
//! - **Restorable sort**: [`BinaryHeap::to_sorted_sequence`] returns every element in
//!   extraction order and leaves the heap intact
//! - **Checked internals**: misuse of internal slots surfaces as [`HeapError`] rather
//!   than silently corrupting the heap
//!
//! # Example
//!
//! ```rust
//! use rust_binary_heap::{BinaryHeap, HeapError, HeapKind};
//!
//! let mut heap = BinaryHeap::new(HeapKind::Max);
//! heap.insert(5);
//! heap.insert(9);
//! heap.insert(1);
//!
//! assert_eq!(heap.peek(), Ok(&9));
//! assert_eq!(heap.to_sorted_sequence(), vec![9, 5, 1]);
//! assert_eq!(heap.extract(), Ok(9));
//! assert_eq!(heap.extract(), Ok(5));
//! assert_eq!(heap.extract(), Ok(1));
//! assert_eq!(heap.extract(), Err(HeapError::Empty));
//! ```

pub mod binary;
pub mod error;
pub mod iter;
pub mod kind;
pub mod stdlib_compat;

pub use binary::{BinaryHeap, DEFAULT_CAPACITY};
pub use error::HeapError;
pub use kind::HeapKind;
