//! Errors raised by heap and priority-queue operations.

use thiserror::Error;

/// Structural failure of a [`BinaryHeap`](crate::heap::BinaryHeap) or
/// [`PriorityQueue`](crate::queue::PriorityQueue) operation.
///
/// None of these leave the container modified: every failing operation is a
/// no-op on the backing storage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeapError {
    /// Insert into a heap whose occupied prefix already fills the storage.
    #[error("heap is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },

    /// `increase_value` was given a value smaller than the current one.
    #[error("new value at index {index} is smaller than the current value")]
    ValueDecreased { index: usize },

    /// `increase_value` targeted a slot past the occupied prefix.
    #[error("slot {index} is empty (heap size {size})")]
    EmptySlot { index: usize, size: usize },

    /// Index at or beyond the allocated storage.
    #[error("index {index} out of bounds (capacity {capacity})")]
    IndexOutOfBounds { index: usize, capacity: usize },

    /// Requested storage is too small for the occupied elements.
    #[error("capacity {requested} is below the {size} occupied slots")]
    CapacityBelowSize { requested: usize, size: usize },
}
