//! Enumeration and bulk copy-out
//!
//! Iteration walks the live elements in storage order, which is heap order
//! rather than sorted order. Slots past `len()` are never visited. Use
//! [`BinaryHeap::to_sorted_sequence`] for an ordered view.

use std::iter::FusedIterator;
use std::slice;
use std::vec;

use crate::binary::BinaryHeap;

/// Borrowing iterator over a heap's live elements in storage order
///
/// Created by [`BinaryHeap::iter`]. Call `iter()` again for a fresh pass.
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: slice::Iter<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over a heap's elements in storage order
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    inner: vec::IntoIter<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> BinaryHeap<T> {
    /// Returns an iterator over the live elements in storage order
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.data.iter(),
        }
    }

    /// Copies the live elements into `buffer` starting at `offset`
    ///
    /// Returns the number of elements copied. Nothing is copied, and zero is
    /// returned, when the buffer has fewer than `len()` slots from `offset` on.
    pub fn copy_into(&self, buffer: &mut [T], offset: usize) -> usize
    where
        T: Clone,
    {
        let Some(target) = buffer
            .get_mut(offset..)
            .and_then(|tail| tail.get_mut(..self.data.len()))
        else {
            return 0;
        };
        target.clone_from_slice(&self.data);
        self.data.len()
    }
}

impl<'a, T> IntoIterator for &'a BinaryHeap<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for BinaryHeap<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.into_vec().into_iter(),
        }
    }
}
