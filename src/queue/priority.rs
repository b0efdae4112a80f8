//! Priority queue backed by a binary max-heap.

use std::fmt;

use tracing::debug;

use crate::error::HeapError;
use crate::heap::BinaryHeap;

/// A max-priority queue that owns one [`BinaryHeap`].
///
/// "Maximum" means highest priority under `T`'s ordering, which need not be
/// the numerically largest value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityQueue<T> {
    heap: BinaryHeap<T>,
}

impl<T: Ord> PriorityQueue<T> {
    /// Creates an empty queue with room for `capacity` elements.
    pub fn new(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::new(capacity),
        }
    }

    /// Creates a queue that adopts and heapifies `values`.
    pub fn from_vec(values: Vec<T>) -> Self {
        Self {
            heap: BinaryHeap::from_vec(values),
        }
    }

    /// Inserts an element, growing the storage by exactly one slot if full.
    pub fn insert(&mut self, element: T) {
        if self.heap.size() >= self.heap.capacity() {
            let grown = self.heap.capacity() + 1;
            debug!(capacity = grown, "priority queue full, growing by one slot");
            // Growing never drops below the occupied size.
            let _ = self.heap.set_capacity(grown);
        }
        self.heap.push_within_capacity(element);
    }

    /// Highest-priority element without removing it.
    ///
    /// Returns `None` for an empty queue, zero-capacity queues included.
    pub fn maximum(&self) -> Option<&T> {
        self.heap.element_at(0).ok().flatten()
    }

    /// Removes and returns the highest-priority element.
    pub fn extract_maximum(&mut self) -> Option<T> {
        self.heap.extract_root()
    }

    /// Raises the element at `index` to `element` and restores order.
    ///
    /// See [`BinaryHeap::increase_value`] for the rejection rules.
    pub fn increase_value(&mut self, index: usize, element: T) -> Result<(), HeapError> {
        self.heap.increase_value(index, element)
    }

    /// Number of queued elements.
    pub fn size(&self) -> usize {
        self.heap.size()
    }

    /// Allocated slots in the backing heap.
    pub fn capacity(&self) -> usize {
        self.heap.capacity()
    }

    /// Whether no element is queued.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Raw slot access in heap order.
    pub fn element_at(&self, index: usize) -> Result<Option<&T>, HeapError> {
        self.heap.element_at(index)
    }

    /// Whether an equal element is queued.
    pub fn contains(&self, element: &T) -> bool {
        self.heap.contains(element)
    }

    /// Drops every queued element, keeping the capacity.
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Queued elements in heap (storage) order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.heap.iter()
    }

    /// Read-only view of the backing heap.
    pub fn heap(&self) -> &BinaryHeap<T> {
        &self.heap
    }
}

impl<T: Ord> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<T: Ord> From<Vec<T>> for PriorityQueue<T> {
    fn from(values: Vec<T>) -> Self {
        Self::from_vec(values)
    }
}

impl<T: fmt::Display> fmt::Display for PriorityQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.heap, f)
    }
}
