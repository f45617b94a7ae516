//! Standard library compatibility layer
//!
//! Trait impls that let [`BinaryHeap`] stand in for
//! `std::collections::BinaryHeap`.
//!
//! # Differences from `std::collections::BinaryHeap`
//!
//! - **Orientation**: conversions that cannot name a kind (`Default`,
//!   `FromIterator`, `From<Vec<T>>`) produce a max-heap, matching std. Use
//!   [`BinaryHeap::from_sequence`] to build a min-heap without `Reverse<T>`.
//! - **Empty access**: `peek` and `extract` return `Result` instead of
//!   `Option`; `.ok()` recovers the std shape.
//!
//! # Example
//!
//! ```rust
//! use rust_binary_heap::BinaryHeap;
//!
//! let mut heap: BinaryHeap<i32> = [5, 3, 7].into_iter().collect();
//! heap.extend([1, 9]);
//! assert_eq!(heap.peek().ok(), Some(&9));
//! assert_eq!(heap.extract().ok(), Some(9));
//! ```

use crate::binary::BinaryHeap;
use crate::kind::HeapKind;

impl<T: Ord> Default for BinaryHeap<T> {
    fn default() -> Self {
        Self::new(HeapKind::default())
    }
}

impl<T: Ord> FromIterator<T> for BinaryHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_sequence(iter, HeapKind::default())
    }
}

impl<T: Ord> Extend<T> for BinaryHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<'a, T: Ord + Copy + 'a> Extend<&'a T> for BinaryHeap<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T: Ord> From<Vec<T>> for BinaryHeap<T> {
    fn from(vec: Vec<T>) -> Self {
        Self::from_sequence(vec, HeapKind::default())
    }
}

impl<T: Ord> From<std::collections::BinaryHeap<T>> for BinaryHeap<T> {
    fn from(heap: std::collections::BinaryHeap<T>) -> Self {
        Self::from_sequence(heap.into_vec(), HeapKind::Max)
    }
}

impl<T> From<BinaryHeap<T>> for Vec<T> {
    fn from(heap: BinaryHeap<T>) -> Self {
        heap.into_vec()
    }
}
