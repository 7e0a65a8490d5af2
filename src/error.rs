//! Errors reported by [`DHeap`](crate::DHeap) operations.
//!
//! Every check runs before the heap is touched, so a call that returns an error leaves the
//! heap exactly as it was.

use thiserror::Error;

/// Result type alias using [`HeapError`].
pub type Result<T, E = HeapError> = core::result::Result<T, E>;

/// Errors that can occur in heap operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// Heap arity must be at least 2.
    #[error("heap arity must be at least 2, got {0}")]
    InvalidArity(usize),

    /// Requested capacity can't hold the items already in the heap.
    #[error("capacity {requested} is less than the current length {len}")]
    CapacityBelowLen { requested: usize, len: usize },

    /// An absent item (`None`) was passed where an item is required.
    #[error("absent items can't be stored in the heap")]
    MissingItem,

    /// The operation needs at least one item in the heap.
    #[error("the heap is empty")]
    Empty,
}

/// Broad classification of a [`HeapError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller passed a value the operation can't accept.
    InvalidArgument,
    /// The heap is not in a state that allows the operation.
    InvalidState,
}

impl HeapError {
    /// Returns the [`ErrorKind`] of this error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArity(_) | Self::CapacityBelowLen { .. } | Self::MissingItem => {
                ErrorKind::InvalidArgument
            }
            Self::Empty => ErrorKind::InvalidState,
        }
    }
}
