//! Binary max-heap over a slot buffer.
//!
//! # Algorithm
//!
//! - **Sift-down**: compare a node with its children, left child first, and
//!   swap it with the strictly largest one until no child is larger.
//! - **Sift-up**: swap a node with its parent while the parent is smaller.
//! - **Build-heap**: sift-down every non-leaf node, last one first.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 6.2–6.5

use std::fmt;

use tracing::{debug, warn};

use crate::error::HeapError;

/// A binary max-heap with an explicit capacity.
///
/// Slots `[0, size)` hold elements in heap order; slots `[size, capacity)`
/// are `None`. The physical layout, empty slots included, is observable
/// through [`slots`](Self::slots) and the `Display` impl.
///
/// # Example
/// ```
/// use u_slideshow::heap::BinaryHeap;
///
/// let mut heap = BinaryHeap::from_vec(vec![2, 1, 3, 10, 15, 8]);
/// assert_eq!(heap.to_string(), "[15, 10, 8, 2, 1, 3]");
/// assert_eq!(heap.extract_root(), Some(15));
/// assert_eq!(heap.size(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryHeap<T> {
    slots: Vec<Option<T>>,
    size: usize,
}

impl<T: Ord> BinaryHeap<T> {
    /// Creates an empty heap with `capacity` empty slots.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: empty_slots(capacity),
            size: 0,
        }
    }

    /// Creates a heap that adopts `values` and heapifies them in place.
    ///
    /// Capacity equals the number of values.
    pub fn from_vec(values: Vec<T>) -> Self {
        let size = values.len();
        let mut heap = Self {
            slots: values.into_iter().map(Some).collect(),
            size,
        };
        heap.build_heap();
        heap
    }

    /// Creates a heap from `values` with room for `capacity` elements.
    ///
    /// Slots past the adopted values are empty.
    pub fn from_vec_with_capacity(capacity: usize, values: Vec<T>) -> Result<Self, HeapError> {
        if capacity < values.len() {
            return Err(HeapError::CapacityBelowSize {
                requested: capacity,
                size: values.len(),
            });
        }
        let mut heap = Self::from_vec(values);
        heap.slots.resize_with(capacity, || None);
        Ok(heap)
    }

    /// Whether the heap holds no elements.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of occupied slots.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of allocated slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Reallocates the slot buffer to `new_capacity` slots.
    ///
    /// Occupied slots are kept in place; added slots are empty. Shrinking
    /// below the current size is rejected.
    pub fn set_capacity(&mut self, new_capacity: usize) -> Result<(), HeapError> {
        if new_capacity < self.size {
            return Err(HeapError::CapacityBelowSize {
                requested: new_capacity,
                size: self.size,
            });
        }
        debug!(from = self.capacity(), to = new_capacity, "resizing heap storage");
        self.slots.resize_with(new_capacity, || None);
        Ok(())
    }

    /// Returns the slot at `index`: `Ok(None)` if it is empty.
    pub fn element_at(&self, index: usize) -> Result<Option<&T>, HeapError> {
        self.slots
            .get(index)
            .map(Option::as_ref)
            .ok_or(HeapError::IndexOutOfBounds {
                index,
                capacity: self.capacity(),
            })
    }

    /// Parent index, `None` for the root.
    pub fn parent_index(index: usize) -> Option<usize> {
        if index == 0 {
            None
        } else {
            Some((index - 1) / 2)
        }
    }

    /// Left child index. May lie past the occupied prefix.
    pub fn left_child_index(index: usize) -> usize {
        2 * index + 1
    }

    /// Right child index. May lie past the occupied prefix.
    pub fn right_child_index(index: usize) -> usize {
        2 * index + 2
    }

    /// Exchanges two slots. No ordering is restored afterwards.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<(), HeapError> {
        let capacity = self.capacity();
        for index in [a, b] {
            if index >= capacity {
                return Err(HeapError::IndexOutOfBounds { index, capacity });
            }
        }
        self.slots.swap(a, b);
        Ok(())
    }

    /// Lets the element at `index` float down until its subtree is a heap.
    ///
    /// Both child subtrees must already satisfy the heap property. Indices
    /// outside the occupied prefix are ignored.
    pub fn sift_down(&mut self, mut index: usize) {
        if index >= self.size {
            return;
        }
        loop {
            let left = Self::left_child_index(index);
            let right = Self::right_child_index(index);

            let mut largest = index;
            if left < self.size && self.slots[left] > self.slots[largest] {
                largest = left;
            }
            if right < self.size && self.slots[right] > self.slots[largest] {
                largest = right;
            }

            if largest == index {
                return;
            }
            self.slots.swap(index, largest);
            index = largest;
        }
    }

    /// Moves the element at `index` up while its parent is smaller.
    ///
    /// Indices outside the occupied prefix are ignored.
    pub fn sift_up(&mut self, mut index: usize) {
        if index >= self.size {
            return;
        }
        while let Some(parent) = Self::parent_index(index) {
            if self.slots[parent] >= self.slots[index] {
                break;
            }
            self.slots.swap(parent, index);
            index = parent;
        }
    }

    /// Restores heap order over the whole occupied prefix, bottom-up.
    pub fn build_heap(&mut self) {
        for index in (0..self.size / 2).rev() {
            self.sift_down(index);
        }
    }

    /// Adds `value` and sifts it up.
    ///
    /// Fails with [`HeapError::CapacityExceeded`] when every slot is taken;
    /// the heap is left unchanged and `value` is dropped.
    pub fn insert(&mut self, value: T) -> Result<(), HeapError> {
        if self.size == self.capacity() {
            warn!(capacity = self.capacity(), "heap is full, insert rejected");
            return Err(HeapError::CapacityExceeded {
                capacity: self.capacity(),
            });
        }
        self.push_within_capacity(value);
        Ok(())
    }

    /// Appends into the first empty slot. Caller guarantees one exists.
    pub(crate) fn push_within_capacity(&mut self, value: T) {
        debug_assert!(self.size < self.capacity());
        self.slots[self.size] = Some(value);
        self.size += 1;
        self.sift_up(self.size - 1);
    }

    /// Removes and returns the maximum, or `None` when empty.
    pub fn extract_root(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let last = self.size - 1;
        self.slots.swap(0, last);
        let maximum = self.slots[last].take();
        self.size = last;
        self.sift_down(0);
        maximum
    }

    /// Replaces the element at `index` with a value that is not smaller,
    /// then sifts it up.
    ///
    /// An equal value is accepted. A smaller value is rejected with
    /// [`HeapError::ValueDecreased`] and the heap is left unchanged.
    pub fn increase_value(&mut self, index: usize, value: T) -> Result<(), HeapError> {
        let capacity = self.capacity();
        if index >= capacity {
            return Err(HeapError::IndexOutOfBounds { index, capacity });
        }
        let current = match &self.slots[index] {
            Some(current) if index < self.size => current,
            _ => {
                return Err(HeapError::EmptySlot {
                    index,
                    size: self.size,
                })
            }
        };
        if value < *current {
            warn!(index, "new value is smaller than the current one, update rejected");
            return Err(HeapError::ValueDecreased { index });
        }
        self.slots[index] = Some(value);
        self.sift_up(index);
        Ok(())
    }

    /// Empties every slot. Capacity is unchanged.
    pub fn clear(&mut self) {
        for slot in &mut self.slots[..self.size] {
            *slot = None;
        }
        self.size = 0;
    }

    /// Linear scan of the occupied slots.
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|element| element == value)
    }

    /// Occupied elements in storage order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.slots[..self.size].iter().flatten()
    }

    /// Full physical layout, empty slots included.
    pub fn slots(&self) -> &[Option<T>] {
        &self.slots
    }

    /// Checks the max-heap property over the occupied prefix.
    pub fn is_valid(&self) -> bool {
        (1..self.size).all(|child| {
            Self::parent_index(child).is_some_and(|parent| self.slots[parent] >= self.slots[child])
        })
    }

    /// Consumes the heap, returning the occupied elements in storage order.
    pub fn into_vec(self) -> Vec<T> {
        self.slots.into_iter().flatten().collect()
    }
}

impl<T: Ord> Default for BinaryHeap<T> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<T: fmt::Display> fmt::Display for BinaryHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match slot {
                Some(value) => write!(f, "{value}")?,
                None => write!(f, "None")?,
            }
        }
        write!(f, "]")
    }
}

fn empty_slots<T>(capacity: usize) -> Vec<Option<T>> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_new_heap_is_empty() {
        let heap: BinaryHeap<i32> = BinaryHeap::new(3);
        assert!(heap.is_empty());
        assert_eq!(heap.size(), 0);
        assert_eq!(heap.capacity(), 3);
        assert_eq!(heap.to_string(), "[None, None, None]");
    }

    #[test]
    fn test_default_has_no_capacity() {
        let heap: BinaryHeap<i32> = BinaryHeap::default();
        assert_eq!(heap.capacity(), 0);
        assert_eq!(heap.to_string(), "[]");
    }

    #[test]
    fn test_from_vec_heapifies() {
        let heap = BinaryHeap::from_vec(vec![2, 1, 3, 10, 15, 8]);
        assert_eq!(heap.to_string(), "[15, 10, 8, 2, 1, 3]");
        assert_eq!(heap.size(), 6);
        assert_eq!(heap.capacity(), 6);
        assert!(heap.is_valid());

        assert_eq!(BinaryHeap::from_vec(vec![7, 9]).to_string(), "[9, 7]");
        assert_eq!(BinaryHeap::from_vec(vec![6]).to_string(), "[6]");
    }

    #[test]
    fn test_from_vec_with_capacity() {
        let heap = BinaryHeap::from_vec_with_capacity(5, vec![1, 4, 2]).unwrap();
        assert_eq!(heap.to_string(), "[4, 1, 2, None, None]");
        assert_eq!(heap.size(), 3);
        assert_eq!(heap.capacity(), 5);
    }

    #[test]
    fn test_from_vec_with_capacity_too_small() {
        let err = BinaryHeap::from_vec_with_capacity(1, vec![1, 2]).unwrap_err();
        assert_eq!(
            err,
            HeapError::CapacityBelowSize {
                requested: 1,
                size: 2
            }
        );
    }

    #[test]
    fn test_index_math() {
        assert_eq!(BinaryHeap::<i32>::parent_index(0), None);
        assert_eq!(BinaryHeap::<i32>::parent_index(1), Some(0));
        assert_eq!(BinaryHeap::<i32>::parent_index(2), Some(0));
        assert_eq!(BinaryHeap::<i32>::parent_index(6), Some(2));
        assert_eq!(BinaryHeap::<i32>::left_child_index(2), 5);
        assert_eq!(BinaryHeap::<i32>::right_child_index(2), 6);
    }

    #[test]
    fn test_element_at() {
        let mut heap = BinaryHeap::new(2);
        heap.insert(5).unwrap();
        assert_eq!(heap.element_at(0), Ok(Some(&5)));
        assert_eq!(heap.element_at(1), Ok(None));
        assert_eq!(
            heap.element_at(2),
            Err(HeapError::IndexOutOfBounds {
                index: 2,
                capacity: 2
            })
        );
    }

    #[test]
    fn test_swap_bounds_checked() {
        let mut heap = BinaryHeap::from_vec(vec![3, 1]);
        heap.swap(0, 1).unwrap();
        assert_eq!(heap.to_string(), "[1, 3]");
        assert!(!heap.is_valid());
        assert!(heap.swap(0, 2).is_err());
        assert_eq!(heap.to_string(), "[1, 3]");
    }

    #[test]
    fn test_sift_down_restores_root() {
        let mut heap = BinaryHeap::from_vec(vec![9, 7, 8]);
        heap.swap(0, 2).unwrap();
        heap.sift_down(0);
        assert_eq!(heap.to_string(), "[9, 7, 8]");
    }

    #[test]
    fn test_sift_ignores_empty_slots() {
        let mut heap = BinaryHeap::from_vec_with_capacity(4, vec![2, 1]).unwrap();
        heap.sift_down(3);
        heap.sift_up(3);
        assert_eq!(heap.to_string(), "[2, 1, None, None]");
    }

    #[test]
    fn test_insert_sifts_up() {
        let mut heap = BinaryHeap::from_vec_with_capacity(5, vec![7, 9]).unwrap();
        heap.insert(12).unwrap();
        assert_eq!(heap.to_string(), "[12, 7, 9, None, None]");
        heap.insert(3).unwrap();
        assert_eq!(heap.to_string(), "[12, 7, 9, 3, None]");
        heap.insert(8).unwrap();
        assert_eq!(heap.to_string(), "[12, 8, 9, 3, 7]");
    }

    #[test]
    fn test_insert_into_full_heap_rejected() {
        let mut heap = BinaryHeap::from_vec(vec![4, 2]);
        assert_eq!(
            heap.insert(10),
            Err(HeapError::CapacityExceeded { capacity: 2 })
        );
        assert_eq!(heap.to_string(), "[4, 2]");
        assert_eq!(heap.size(), 2);
    }

    #[test]
    fn test_extract_root_clears_last_slot() {
        let mut heap = BinaryHeap::from_vec(vec![2, 1, 3, 10, 15, 8]);
        assert_eq!(heap.extract_root(), Some(15));
        assert_eq!(heap.to_string(), "[10, 3, 8, 2, 1, None]");
        assert_eq!(heap.size(), 5);
        assert_eq!(heap.capacity(), 6);
    }

    #[test]
    fn test_extract_root_empty() {
        let mut heap: BinaryHeap<i32> = BinaryHeap::new(4);
        assert_eq!(heap.extract_root(), None);
        assert_eq!(heap.size(), 0);

        let mut zero: BinaryHeap<i32> = BinaryHeap::new(0);
        assert_eq!(zero.extract_root(), None);
    }

    #[test]
    fn test_increase_value_sequence() {
        let mut heap = BinaryHeap::from_vec(vec![2, 1, 3, 10, 15, 8]);
        heap.increase_value(1, 27).unwrap();
        assert_eq!(heap.to_string(), "[27, 15, 8, 2, 1, 3]");
        assert_eq!(heap.extract_root(), Some(27));
        assert_eq!(heap.to_string(), "[15, 3, 8, 2, 1, None]");
        heap.increase_value(3, 4).unwrap();
        assert_eq!(heap.to_string(), "[15, 4, 8, 3, 1, None]");
        heap.increase_value(0, 16).unwrap();
        assert_eq!(heap.to_string(), "[16, 4, 8, 3, 1, None]");
    }

    #[test]
    fn test_increase_value_rejects_decrease() {
        let mut heap = BinaryHeap::from_vec(vec![20, 9]);
        assert_eq!(
            heap.increase_value(0, 15),
            Err(HeapError::ValueDecreased { index: 0 })
        );
        assert_eq!(heap.to_string(), "[20, 9]");
    }

    #[test]
    fn test_increase_value_accepts_equal() {
        let mut heap = BinaryHeap::from_vec(vec![20, 9]);
        assert!(heap.increase_value(1, 9).is_ok());
        assert_eq!(heap.to_string(), "[20, 9]");
    }

    #[test]
    fn test_increase_value_empty_and_out_of_range() {
        let mut heap = BinaryHeap::from_vec_with_capacity(3, vec![5]).unwrap();
        assert_eq!(
            heap.increase_value(1, 6),
            Err(HeapError::EmptySlot { index: 1, size: 1 })
        );
        assert_eq!(
            heap.increase_value(3, 6),
            Err(HeapError::IndexOutOfBounds {
                index: 3,
                capacity: 3
            })
        );
        assert_eq!(heap.to_string(), "[5, None, None]");
    }

    #[test]
    fn test_set_capacity() {
        let mut heap = BinaryHeap::from_vec(vec![3, 1]);
        heap.set_capacity(4).unwrap();
        assert_eq!(heap.to_string(), "[3, 1, None, None]");
        heap.set_capacity(2).unwrap();
        assert_eq!(heap.to_string(), "[3, 1]");
        assert_eq!(
            heap.set_capacity(1),
            Err(HeapError::CapacityBelowSize {
                requested: 1,
                size: 2
            })
        );
        assert_eq!(heap.capacity(), 2);
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut heap = BinaryHeap::from_vec(vec![1, 2, 3]);
        heap.clear();
        assert!(heap.is_empty());
        assert_eq!(heap.capacity(), 3);
        assert_eq!(heap.to_string(), "[None, None, None]");
    }

    #[test]
    fn test_contains() {
        let mut heap = BinaryHeap::from_vec(vec![4, 8, 15]);
        assert!(heap.contains(&8));
        assert!(!heap.contains(&16));
        heap.extract_root();
        assert!(!heap.contains(&15));

        let empty: BinaryHeap<i32> = BinaryHeap::new(2);
        assert!(!empty.contains(&0));
    }

    #[test]
    fn test_into_vec() {
        let heap = BinaryHeap::from_vec_with_capacity(4, vec![1, 2]).unwrap();
        assert_eq!(heap.into_vec(), vec![2, 1]);
    }

    #[test]
    fn test_random_operations_keep_heap_property() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut heap = BinaryHeap::new(64);
        let mut shadow: Vec<i32> = Vec::new();

        for _ in 0..2000 {
            match rng.random_range(0..3) {
                0 => {
                    let value = rng.random_range(-50..50);
                    if heap.insert(value).is_ok() {
                        shadow.push(value);
                    } else {
                        assert_eq!(heap.size(), heap.capacity());
                    }
                }
                1 => {
                    let expected = shadow.iter().copied().max();
                    assert_eq!(heap.extract_root(), expected);
                    if let Some(max) = expected {
                        let pos = shadow.iter().position(|&v| v == max).unwrap();
                        shadow.swap_remove(pos);
                    }
                }
                _ => {
                    if !heap.is_empty() {
                        let index = rng.random_range(0..heap.size());
                        let current = *heap.element_at(index).unwrap().unwrap();
                        let bumped = current + rng.random_range(0..10);
                        heap.increase_value(index, bumped).unwrap();
                        let pos = shadow.iter().position(|&v| v == current).unwrap();
                        shadow[pos] = bumped;
                    }
                }
            }
            assert!(heap.is_valid());
            assert_eq!(heap.size(), shadow.len());
        }
    }

    #[test]
    fn test_drain_is_non_increasing() {
        let mut rng = SmallRng::seed_from_u64(7);
        let values: Vec<i32> = (0..100).map(|_| rng.random_range(0..1000)).collect();
        let mut heap = BinaryHeap::from_vec(values);

        let mut previous = i32::MAX;
        while let Some(value) = heap.extract_root() {
            assert!(value <= previous);
            previous = value;
        }
        assert!(heap.is_empty());
        assert_eq!(heap.capacity(), 100);
    }
}
