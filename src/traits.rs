//! Common traits for double-ended heap data structures
//!
//! This module provides the contract shared by double-ended priority queues:
//!
//! - [`DoubleEndedHeap`]: insertion plus access to, and removal of, both extremes
//! - [`HeapError`]: the failure reported when an extreme is requested from an empty heap
//!
//! Unlike `std::collections::BinaryHeap`, which only exposes its maximum, a
//! double-ended heap answers both `max` and `min` queries in O(1) and removes
//! either extreme in O(log n).

use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The heap holds no elements, so there is no extreme to return
    Empty,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::Empty => write!(f, "heap is empty"),
        }
    }
}

impl std::error::Error for HeapError {}

/// Base trait for double-ended priority queues
///
/// Every query or removal of an extreme returns `Err(HeapError::Empty)` on an
/// empty heap and leaves the heap untouched.
///
/// # Example
///
/// ```rust
/// use rust_dual_heap::{DoubleEndedHeap, HeapError};
/// use rust_dual_heap::dual_heap::DualHeap;
///
/// let mut heap: DualHeap<&str> = DoubleEndedHeap::new();
/// heap.insert("b");
/// heap.insert("a");
/// heap.insert("c");
///
/// assert_eq!(heap.peek_max(), Ok(&"c"));
/// assert_eq!(heap.peek_min(), Ok(&"a"));
/// assert_eq!(heap.extract_max(), Ok("c"));
/// assert_eq!(heap.extract_min(), Ok("a"));
/// assert_eq!(heap.extract_max(), Ok("b"));
/// assert_eq!(heap.extract_min(), Err(HeapError::Empty));
/// ```
pub trait DoubleEndedHeap<T> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n), amortized over backing-store growth.
    fn insert(&mut self, value: T);

    /// Returns the maximum element without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek_max(&self) -> Result<&T, HeapError>;

    /// Returns the minimum element without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek_min(&self) -> Result<&T, HeapError>;

    /// Removes and returns the maximum element
    ///
    /// # Time Complexity
    /// O(log n), amortized over backing-store shrinking.
    fn extract_max(&mut self) -> Result<T, HeapError>;

    /// Removes and returns the minimum element
    ///
    /// # Time Complexity
    /// O(log n), amortized over backing-store shrinking.
    fn extract_min(&mut self) -> Result<T, HeapError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(HeapError::Empty.to_string(), "heap is empty");
    }

    #[test]
    fn test_error_is_std_error() {
        fn fails() -> Result<(), Box<dyn std::error::Error>> {
            let result: Result<(), HeapError> = Err(HeapError::Empty);
            result?;
            Ok(())
        }
        let err = fails().unwrap_err();
        assert_eq!(err.to_string(), "heap is empty");
    }
}
