//! Double-Ended Priority Queues for Rust
//!
//! This crate provides a double-ended priority queue (DEPQ): a container that
//! supports insertion and efficient access to, and removal of, both its maximum
//! and its minimum element.
//!
//! # Features
//!
//! - **Dual Heap**: a max-heap and a min-heap over the same elements, kept in
//!   sync through per-element cross-indices. O(log n) insert and extract at
//!   either end, O(1) peek at either end.
//! - **Custom ordering**: any [`compare::Compare`] implementation can order the
//!   heap, including closures and reversed or key-based comparators.
//! - **Amortized resizing**: storage doubles when full and halves at quarter
//!   occupancy.
//!
//! # Example
//!
//! ```rust
//! use rust_dual_heap::dual_heap::DualHeap;
//! use rust_dual_heap::{DoubleEndedHeap, HeapError};
//!
//! let mut heap = DualHeap::new();
//! heap.insert("b");
//! heap.insert("a");
//! heap.insert("c");
//!
//! assert_eq!(heap.peek_max(), Ok(&"c"));
//! assert_eq!(heap.peek_min(), Ok(&"a"));
//! assert_eq!(heap.extract_max(), Ok("c"));
//! assert_eq!(heap.extract_min(), Ok("a"));
//! assert_eq!(heap.extract_max(), Ok("b"));
//! assert!(heap.is_empty());
//! assert_eq!(heap.extract_min(), Err(HeapError::Empty));
//! ```

pub mod dual_heap;
pub mod storage;
pub mod traits;

// Re-export the main types for convenience
pub use dual_heap::DualHeap;
pub use traits::{DoubleEndedHeap, HeapError};
