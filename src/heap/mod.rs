//! Array-backed binary max-heap.
//!
//! The heap keeps its elements in a fixed-length slot buffer. The first
//! `size` slots are occupied and satisfy the max-heap property; the
//! remaining slots up to `capacity` are empty. Capacity only changes when the
//! caller asks for it.
//!
//! # Index Layout
//!
//! | Relation | Index |
//! |----------|-------|
//! | Parent of `i` (i > 0) | `(i - 1) / 2` |
//! | Left child of `i` | `2i + 1` |
//! | Right child of `i` | `2i + 2` |
//!
//! # Complexity
//!
//! | Operation | Cost |
//! |-----------|------|
//! | `insert`, `extract_root`, `increase_value` | O(log n) |
//! | `from_vec` (bottom-up heapify) | O(n) |
//! | `contains` | O(n) |
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 6 (Heapsort)

mod binary;

pub use binary::BinaryHeap;
