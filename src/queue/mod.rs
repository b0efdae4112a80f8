//! Max-priority queue over a [`BinaryHeap`](crate::heap::BinaryHeap).
//!
//! The queue adds ordering semantics on top of the heap: the highest-ranked
//! element is always at the front, and the queue grows its storage one slot
//! at a time instead of rejecting inserts.
//!
//! # Usage
//!
//! ```
//! use u_slideshow::queue::PriorityQueue;
//!
//! let mut queue = PriorityQueue::new(2);
//! queue.insert(3);
//! queue.insert(8);
//! queue.insert(5); // grows to capacity 3
//!
//! assert_eq!(queue.maximum(), Some(&8));
//! assert_eq!(queue.extract_maximum(), Some(8));
//! assert_eq!(queue.capacity(), 3);
//! ```

mod priority;

pub use priority::PriorityQueue;
