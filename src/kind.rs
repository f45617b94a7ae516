//! Heap orientation
//!
//! A [`HeapKind`] is fixed when a heap is created and decides which end of the
//! ordering sits at the root.

use std::cmp::Ordering;

/// Selects whether the root holds the greatest or the least element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HeapKind {
    /// Every parent is `>=` its children; extraction yields descending order
    #[default]
    Max,
    /// Every parent is `<=` its children; extraction yields ascending order
    Min,
}

impl HeapKind {
    /// Returns true if `a` must sit strictly above `b` in a heap of this kind
    ///
    /// Equal elements never outrank each other, so sifting stops on ties.
    #[inline]
    pub fn prefers<T: Ord + ?Sized>(self, a: &T, b: &T) -> bool {
        self.order(a, b) == Ordering::Greater
    }

    /// Three-way comparison oriented so that `Greater` means "closer to the root"
    #[inline]
    pub fn order<T: Ord + ?Sized>(self, a: &T, b: &T) -> Ordering {
        match self {
            HeapKind::Max => a.cmp(b),
            HeapKind::Min => b.cmp(a),
        }
    }
}
