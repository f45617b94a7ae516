//! Array-backed binary heap
//!
//! A binary heap stored in a contiguous vector, oriented as a max-heap or a
//! min-heap by the [`HeapKind`] chosen at construction.
//!
//! # Time Complexity
//!
//! | Operation            | Complexity         |
//! |----------------------|--------------------|
//! | `insert`             | O(log n) amortized |
//! | `extract`            | O(log n)           |
//! | `peek`               | O(1)               |
//! | `from_sequence`      | O(n)               |
//! | `to_sorted_sequence` | O(n log n)         |
//!
//! # Layout
//!
//! Elements live in slots `0..len` with `parent(i) = (i - 1) / 2`,
//! `left(i) = 2i + 1` and `right(i) = 2i + 2`. For every live child the parent
//! compares favorably according to the heap's kind (`>=` for
//! [`HeapKind::Max`], `<=` for [`HeapKind::Min`]).
//!
//! # Example
//!
//! ```rust
//! use rust_binary_heap::{BinaryHeap, HeapKind};
//!
//! let mut heap = BinaryHeap::from_sequence([5, 3, 8, 1, 9, 2], HeapKind::Min);
//! heap.insert(0);
//!
//! assert_eq!(heap.peek(), Ok(&0));
//! assert_eq!(heap.extract(), Ok(0));
//! assert_eq!(heap.to_sorted_sequence(), vec![1, 2, 3, 5, 8, 9]);
//! assert_eq!(heap.len(), 6);
//! ```

use crate::error::HeapError;
use crate::kind::HeapKind;

/// Capacity used when none is given
pub const DEFAULT_CAPACITY: usize = 31;

#[inline]
fn parent(index: usize) -> usize {
    (index - 1) / 2
}

#[inline]
fn left(index: usize) -> usize {
    2 * index + 1
}

#[inline]
fn right(index: usize) -> usize {
    2 * index + 2
}

/// Capacity for a heap built from `len` elements: one less than the next
/// power of two strictly greater than `len`, so the build never grows.
fn sequence_capacity(len: usize) -> usize {
    len.checked_add(1)
        .and_then(usize::checked_next_power_of_two)
        .map_or(len, |pow| pow - 1)
        .max(1)
}

#[cold]
#[track_caller]
fn defect(err: HeapError) -> ! {
    panic!("binary heap defect: {err}")
}

#[cold]
#[track_caller]
fn insert_failed(err: HeapError) -> ! {
    match err {
        HeapError::AllocationFailed { .. } => panic!("binary heap allocation failed: {err}"),
        _ => defect(err),
    }
}

/// A binary max-heap or min-heap
///
/// The element type only needs a total order; the direction is decided by the
/// [`HeapKind`] passed at construction and never changes afterwards.
#[derive(Debug, Clone)]
pub struct BinaryHeap<T> {
    /// Live elements in heap order
    pub(crate) data: Vec<T>,
    /// Logical capacity; `capacity + 1` doubles on growth
    capacity: usize,
    kind: HeapKind,
}

impl<T> BinaryHeap<T> {
    /// Returns the number of live elements
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the heap holds no elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements the heap can hold before it grows
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the orientation fixed at construction
    pub fn kind(&self) -> HeapKind {
        self.kind
    }

    /// Returns the live elements in storage order
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consumes the heap, returning its elements in storage order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Drops every element, keeping the allocated capacity
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Shrinks the capacity down to the number of live elements (at least one)
    pub fn shrink_to_fit(&mut self) {
        self.capacity = self.data.len().max(1);
        self.data.shrink_to(self.capacity);
    }

    /// Swaps two live slots
    ///
    /// Every sift goes through here; an index past the live range means the
    /// heap's own bookkeeping is broken.
    fn exchange(&mut self, i: usize, j: usize) -> Result<(), HeapError> {
        let len = self.data.len();
        if let Some(index) = [i, j].into_iter().find(|&index| index >= len) {
            return Err(HeapError::IndexOutOfBounds { index, len });
        }
        self.data.swap(i, j);
        Ok(())
    }

    /// Grows the capacity until it exceeds the current length
    ///
    /// Each step doubles `capacity + 1`, so a capacity of `2^k - 1` stays one
    /// below a power of two.
    fn grow(&mut self) -> Result<(), HeapError> {
        let len = self.data.len();
        let mut capacity = self.capacity;
        while capacity <= len {
            capacity = capacity
                .checked_add(1)
                .and_then(|slots| slots.checked_mul(2))
                .map(|slots| slots - 1)
                .ok_or(HeapError::AllocationFailed {
                    requested: usize::MAX,
                })?;
        }
        self.data
            .try_reserve_exact(capacity - len)
            .map_err(|_| HeapError::AllocationFailed {
                requested: capacity,
            })?;
        log::trace!(
            "binary heap grew from {} to {} slots at len {}",
            self.capacity,
            capacity,
            len
        );
        self.capacity = capacity;
        Ok(())
    }
}

impl<T: Ord> BinaryHeap<T> {
    /// Creates an empty heap with [`DEFAULT_CAPACITY`]
    pub fn new(kind: HeapKind) -> Self {
        Self {
            data: Vec::with_capacity(DEFAULT_CAPACITY),
            capacity: DEFAULT_CAPACITY,
            kind,
        }
    }

    /// Creates an empty heap with room for `capacity` elements
    ///
    /// # Errors
    /// Returns [`HeapError::ZeroCapacity`] if `capacity` is zero.
    pub fn with_capacity(capacity: usize, kind: HeapKind) -> Result<Self, HeapError> {
        if capacity == 0 {
            return Err(HeapError::ZeroCapacity);
        }
        Ok(Self {
            data: Vec::with_capacity(capacity),
            capacity,
            kind,
        })
    }

    /// Builds a heap from an unordered sequence in linear time
    pub fn from_sequence<I: IntoIterator<Item = T>>(items: I, kind: HeapKind) -> Self {
        let mut data: Vec<T> = items.into_iter().collect();
        let capacity = sequence_capacity(data.len());
        data.reserve_exact(capacity - data.len());

        let mut heap = Self {
            data,
            capacity,
            kind,
        };
        if let Err(err) = heap.build() {
            defect(err);
        }
        heap
    }

    /// Returns the root element without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap has no elements.
    pub fn peek(&self) -> Result<&T, HeapError> {
        self.data.first().ok_or(HeapError::Empty)
    }

    /// Inserts an element, growing the storage if it is full
    ///
    /// # Panics
    /// Panics if the storage cannot grow. Use [`try_insert`](Self::try_insert)
    /// to handle allocation failure.
    pub fn insert(&mut self, value: T) {
        if let Err(err) = self.try_insert(value) {
            insert_failed(err);
        }
    }

    /// Inserts an element, reporting allocation failure instead of panicking
    ///
    /// # Errors
    /// Returns [`HeapError::AllocationFailed`] if the storage cannot grow; the
    /// heap is left unchanged.
    pub fn try_insert(&mut self, value: T) -> Result<(), HeapError> {
        if self.data.len() >= self.capacity {
            self.grow()?;
        }
        self.data.push(value);
        self.sift_up(self.data.len() - 1)
    }

    /// Removes and returns the root element
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap has no elements.
    pub fn extract(&mut self) -> Result<T, HeapError> {
        let last = self.data.len().checked_sub(1).ok_or(HeapError::Empty)?;
        self.exchange(0, last)?;
        let root = self.data.pop().ok_or(HeapError::Empty)?;
        self.sift_down(0)?;
        Ok(root)
    }

    /// Returns every element in extraction order
    ///
    /// The output is descending for a max-heap and ascending for a min-heap.
    /// The sort runs over a clone, so the heap itself is untouched even if
    /// `T::cmp` panics partway through.
    pub fn to_sorted_sequence(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.clone().into_sorted_vec()
    }

    /// Consumes the heap, returning its elements in extraction order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        if let Err(err) = self.sort_in_place() {
            defect(err);
        }
        self.data
    }

    /// Returns true if every parent compares favorably against its children
    pub fn is_valid(&self) -> bool {
        self.check().is_ok()
    }

    /// Reports the first parent/child pair that breaks the heap invariant
    ///
    /// # Errors
    /// Returns [`HeapError::InvariantViolated`] naming the offending slots.
    pub fn check(&self) -> Result<(), HeapError> {
        for child in 1..self.data.len() {
            let parent = parent(child);
            if self.kind.prefers(&self.data[child], &self.data[parent]) {
                return Err(HeapError::InvariantViolated { parent, child });
            }
        }
        Ok(())
    }

    /// Bottom-up heapify, starting at the last slot with children
    fn build(&mut self) -> Result<(), HeapError> {
        let len = self.data.len();
        for index in (0..len / 2).rev() {
            self.sift_down(index)?;
        }
        log::trace!("built {:?} binary heap of {} elements", self.kind, len);
        Ok(())
    }

    /// Heapsort over the live range, then reverse into extraction order
    fn sort_in_place(&mut self) -> Result<(), HeapError> {
        for end in (1..self.data.len()).rev() {
            self.exchange(0, end)?;
            self.sift_down_range(0, end)?;
        }
        self.data.reverse();
        log::trace!("sorted {} elements in place", self.data.len());
        Ok(())
    }

    fn sift_up(&mut self, mut index: usize) -> Result<(), HeapError> {
        while index > 0 {
            let parent = parent(index);
            if !self.kind.prefers(&self.data[index], &self.data[parent]) {
                break;
            }
            self.exchange(index, parent)?;
            index = parent;
        }
        Ok(())
    }

    fn sift_down(&mut self, index: usize) -> Result<(), HeapError> {
        self.sift_down_range(index, self.data.len())
    }

    /// Sift down treating only slots below `end` as live
    fn sift_down_range(&mut self, mut index: usize, end: usize) -> Result<(), HeapError> {
        loop {
            let left = left(index);
            if left >= end {
                return Ok(());
            }
            let right = right(index);
            let mut best = left;
            if right < end && self.kind.prefers(&self.data[right], &self.data[left]) {
                best = right;
            }

            // Ties keep the parent in place
            if !self.kind.prefers(&self.data[best], &self.data[index]) {
                return Ok(());
            }
            self.exchange(index, best)?;
            index = best;
        }
    }
}
