//! Binary max-heap, priority queue, and a time-ordered slide scheduler.
//!
//! The heap and queue are generic containers over any totally ordered type.
//! The scheduler layers on top of them to deliver slides in display order.
//!
//! # Modules
//!
//! - **`heap`**: `BinaryHeap` — array-backed max-heap with explicit capacity
//! - **`queue`**: `PriorityQueue` — max-priority queue that grows on demand
//! - **`models`**: `Slide` — display text plus display time, earliest first
//! - **`scheduler`**: `SlideShowQueue`, `SlideShow`, `SlideShowConfig`
//! - **`validation`**: Slide input checks (blank text, time window, duplicates)
//! - **`error`**: `HeapError` for rejected heap and queue operations
//!
//! # Architecture
//!
//! Data flows one way: slides enter through `PriorityQueue::insert` and
//! leave through `PriorityQueue::extract_maximum`. Everything is
//! single-threaded and in-memory; callers that share a queue across threads
//! must wrap it themselves.
//!
//! # References
//!
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 6
//! - Williams (1964), "Algorithm 232: Heapsort"

pub mod error;
pub mod heap;
pub mod models;
pub mod queue;
pub mod scheduler;
pub mod validation;

pub use error::HeapError;
