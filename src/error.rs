//! Error type for binary heap operations

use std::fmt;

/// Error type for heap operations
///
/// [`HeapError::Empty`] is the only error a caller hits during normal use.
/// [`HeapError::IndexOutOfBounds`] and [`HeapError::InvariantViolated`]
/// signal a defect in the heap itself and never surface from correct
/// internal use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// `peek` or `extract` was called on a heap with no elements
    Empty,
    /// An internal exchange addressed a slot outside the live range
    IndexOutOfBounds {
        /// The offending index
        index: usize,
        /// Number of live elements at the time of the exchange
        len: usize,
    },
    /// A heap was requested with room for zero elements
    ZeroCapacity,
    /// Growing the backing storage failed
    AllocationFailed {
        /// The capacity that could not be reserved
        requested: usize,
    },
    /// A parent does not compare favorably against one of its children
    InvariantViolated {
        /// Index of the parent slot
        parent: usize,
        /// Index of the child slot that should have been above it
        child: usize,
    },
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::Empty => write!(f, "heap is empty"),
            HeapError::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} is out of bounds for heap of length {len}")
            }
            HeapError::ZeroCapacity => write!(f, "heap capacity must be greater than zero"),
            HeapError::AllocationFailed { requested } => {
                write!(f, "failed to grow heap storage to {requested} elements")
            }
            HeapError::InvariantViolated { parent, child } => {
                write!(
                    f,
                    "heap invariant violated: child at {child} outranks parent at {parent}"
                )
            }
        }
    }
}

impl std::error::Error for HeapError {}
