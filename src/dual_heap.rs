//! Dual Heap implementation
//!
//! A double-ended priority queue built from two binary heaps, a max-heap and a
//! min-heap, that hold the same set of elements in different orders.
//!
//! # Structure
//!
//! Each element is stored once in an [`ElementArena`]. Both heaps are arrays
//! of arena indices, and every element records its current slot in each heap
//! (`max_slot` and `min_slot`). A swap inside one heap updates only that heap's
//! slot field, so the element's position in the companion heap is always exact.
//!
//! Removing the maximum therefore knows where the same element sits in the
//! min-heap, and can repair the min-heap at that slot without searching for it.
//! Removing the minimum is symmetric.
//!
//! # Capacity
//!
//! Both heaps and the arena share one logical capacity. It doubles when an
//! insert finds it full and halves once occupancy drops to a quarter, so a
//! sequence alternating inserts and removals at a boundary never reallocates
//! on every call.
//!
//! # Time Complexity
//!
//! | Operation     | Complexity          |
//! |---------------|---------------------|
//! | `insert`      | O(log n) amortized  |
//! | `extract_max` | O(log n) amortized  |
//! | `extract_min` | O(log n) amortized  |
//! | `peek_max`    | O(1)                |
//! | `peek_min`    | O(1)                |
//! | `len`         | O(1)                |
//!
//! # Example
//!
//! ```rust
//! use rust_dual_heap::dual_heap::DualHeap;
//!
//! let mut heap = DualHeap::new();
//! heap.insert(5);
//! heap.insert(1);
//! heap.insert(9);
//!
//! assert_eq!(heap.min_max(), Ok((&1, &9)));
//! assert_eq!(heap.extract_max(), Ok(9));
//! assert_eq!(heap.extract_min(), Ok(1));
//! assert_eq!(heap.len(), 1);
//! ```

use std::fmt;

use compare::{natural, Compare, Natural};

use crate::storage::{resize_vec, Element, ElementArena};
use crate::traits::{DoubleEndedHeap, HeapError};

/// Smallest logical capacity a dual heap ever shrinks to
pub const MIN_CAPACITY: usize = 2;

/// Which of the two heaps an operation addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Max,
    Min,
}

impl Side {
    fn opposite(self) -> Side {
        match self {
            Side::Max => Side::Min,
            Side::Min => Side::Max,
        }
    }
}

/// A double-ended priority queue backed by two index-synchronized binary heaps
///
/// Equal values are kept as distinct elements, each removed separately.
/// The ordering comes from the comparator `C`, which defaults to the natural
/// order of `T`.
///
/// It is a logic error for a value to change its ordering relative to the
/// other values while it is in the heap.
#[derive(Clone)]
pub struct DualHeap<T, C: Compare<T> = Natural<T>> {
    elements: ElementArena<T>,
    /// Arena indices in max-heap order
    max_heap: Vec<usize>,
    /// Arena indices in min-heap order
    min_heap: Vec<usize>,
    capacity: usize,
    cmp: C,
}

impl<T: Ord> DualHeap<T> {
    /// Creates an empty heap ordered by the natural order of `T`
    pub fn new() -> Self {
        Self::with_comparator(natural())
    }

    /// Creates an empty heap able to hold at least `capacity` elements before growing
    ///
    /// The capacity is rounded up to a power of two.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, natural())
    }
}

impl<T, C: Compare<T>> DualHeap<T, C> {
    /// Creates an empty heap ordered by the given comparator
    pub fn with_comparator(cmp: C) -> Self {
        Self::with_capacity_and_comparator(MIN_CAPACITY, cmp)
    }

    /// Creates an empty heap with the given capacity, ordered by the given comparator
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        let capacity = capacity.max(MIN_CAPACITY).next_power_of_two();
        Self {
            elements: ElementArena::with_capacity(capacity),
            max_heap: Vec::with_capacity(capacity),
            min_heap: Vec::with_capacity(capacity),
            capacity,
            cmp,
        }
    }

    /// Returns the number of elements in the heap
    #[inline]
    pub fn len(&self) -> usize {
        self.max_heap.len()
    }

    /// Returns true if the heap is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.max_heap.is_empty()
    }

    /// Returns the logical capacity shared by both heaps
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the comparator ordering this heap
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Inserts a value
    ///
    /// The new element is appended to both heaps and swims up each of them
    /// independently.
    pub fn insert(&mut self, value: T) {
        if self.len() == self.capacity {
            self.set_capacity(self.capacity * 2);
        }

        let slot = self.len();
        let index = self.elements.insert(value, slot, slot);
        self.max_heap.push(index);
        self.min_heap.push(index);

        self.swim(Side::Max, slot);
        self.swim(Side::Min, slot);
    }

    /// Returns the maximum value without removing it
    pub fn peek_max(&self) -> Result<&T, HeapError> {
        self.peek(Side::Max)
    }

    /// Returns the minimum value without removing it
    pub fn peek_min(&self) -> Result<&T, HeapError> {
        self.peek(Side::Min)
    }

    /// Returns the minimum and maximum values at once
    ///
    /// For a single element both references point at the same value.
    pub fn min_max(&self) -> Result<(&T, &T), HeapError> {
        Ok((self.peek_min()?, self.peek_max()?))
    }

    /// Removes and returns the maximum value
    pub fn extract_max(&mut self) -> Result<T, HeapError> {
        self.extract(Side::Max)
    }

    /// Removes and returns the minimum value
    pub fn extract_min(&mut self) -> Result<T, HeapError> {
        self.extract(Side::Min)
    }

    /// Removes every element and resets the capacity to [`MIN_CAPACITY`]
    pub fn clear(&mut self) {
        self.elements.clear();
        self.max_heap.clear();
        self.min_heap.clear();
        self.set_capacity(MIN_CAPACITY);
    }

    /// Returns an iterator over the values in arbitrary order
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.elements.iter(),
        }
    }

    /// Consumes the heap and returns its values in arbitrary order
    pub fn into_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }

    /// Consumes the heap and returns its values in ascending order
    pub fn into_sorted_vec(self) -> Vec<T> {
        let DualHeap { elements, cmp, .. } = self;
        let mut values: Vec<T> = elements.into_iter().map(|e| e.value).collect();
        values.sort_by(|a, b| cmp.compare(a, b));
        values
    }

    /// Checks every structural invariant of the heap
    ///
    /// The heap is valid if:
    ///
    /// 1. Both heaps and the arena hold the same number of elements, within capacity
    /// 2. Every heap slot refers to an element whose slot field points back at it
    /// 3. Every max-heap parent compares >= its children
    /// 4. Every min-heap parent compares <= its children
    pub fn verify_invariants(&self) -> bool {
        let len = self.len();
        if self.min_heap.len() != len
            || self.elements.len() != len
            || len > self.capacity
            || self.capacity < MIN_CAPACITY
        {
            return false;
        }

        for side in [Side::Max, Side::Min] {
            let heap = self.heap(side);
            for (slot, &index) in heap.iter().enumerate() {
                if index >= len || slot_of(&self.elements[index], side) != slot {
                    return false;
                }
            }
            for slot in 1..len {
                let parent = (slot - 1) / 2;
                if self.outranks(side, slot, parent) {
                    return false;
                }
            }
        }
        true
    }

    fn heap(&self, side: Side) -> &[usize] {
        match side {
            Side::Max => &self.max_heap,
            Side::Min => &self.min_heap,
        }
    }

    fn value_at(&self, side: Side, slot: usize) -> &T {
        &self.elements[self.heap(side)[slot]].value
    }

    /// Whether the value at slot `a` strictly belongs above the value at slot `b`
    fn outranks(&self, side: Side, a: usize, b: usize) -> bool {
        let (x, y) = (self.value_at(side, a), self.value_at(side, b));
        match side {
            Side::Max => self.cmp.compares_gt(x, y),
            Side::Min => self.cmp.compares_lt(x, y),
        }
    }

    fn peek(&self, side: Side) -> Result<&T, HeapError> {
        if self.is_empty() {
            return Err(HeapError::Empty);
        }
        Ok(self.value_at(side, 0))
    }

    fn extract(&mut self, side: Side) -> Result<T, HeapError> {
        let top = match self.heap(side).first() {
            Some(&index) => index,
            None => return Err(HeapError::Empty),
        };
        let other = side.opposite();
        let other_slot = slot_of(&self.elements[top], other);
        let last = self.len() - 1;

        // Park the outgoing element at the tail of both heaps and cut it off.
        self.swap(other, other_slot, last);
        self.swap(side, 0, last);
        self.max_heap.pop();
        self.min_heap.pop();

        let (removed, relocation) = self.elements.swap_remove(top);
        if let Some(moved) = relocation {
            self.max_heap[moved.max_slot] = moved.index;
            self.min_heap[moved.min_slot] = moved.index;
        }

        if self.capacity > MIN_CAPACITY && self.len() <= self.capacity / 4 {
            self.set_capacity(self.capacity / 2);
        }

        if !self.is_empty() {
            self.sink(side, 0);
            // The element moved into the companion hole came from another
            // subtree and may belong above it as well as below it.
            if other_slot < self.len() && self.sink(other, other_slot) == other_slot {
                self.swim(other, other_slot);
            }
        }
        Ok(removed.value)
    }

    /// Moves the element at `slot` towards the root until its parent outranks it.
    /// Returns the slot it settled in.
    fn swim(&mut self, side: Side, mut slot: usize) -> usize {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if !self.outranks(side, slot, parent) {
                break;
            }
            self.swap(side, slot, parent);
            slot = parent;
        }
        slot
    }

    /// Moves the element at `slot` towards the leaves until no child outranks it.
    /// Returns the slot it settled in.
    fn sink(&mut self, side: Side, mut slot: usize) -> usize {
        let len = self.len();
        loop {
            let left = 2 * slot + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            // ties go to the right child
            let child = if right < len && !self.outranks(side, left, right) {
                right
            } else {
                left
            };
            if !self.outranks(side, child, slot) {
                break;
            }
            self.swap(side, slot, child);
            slot = child;
        }
        slot
    }

    /// Exchanges two slots of one heap, updating only that heap's slot fields
    fn swap(&mut self, side: Side, a: usize, b: usize) {
        let heap = match side {
            Side::Max => &mut self.max_heap,
            Side::Min => &mut self.min_heap,
        };
        heap.swap(a, b);
        let (at_a, at_b) = (heap[a], heap[b]);

        match side {
            Side::Max => {
                self.elements[at_a].max_slot = a;
                self.elements[at_b].max_slot = b;
            }
            Side::Min => {
                self.elements[at_a].min_slot = a;
                self.elements[at_b].min_slot = b;
            }
        }
    }

    fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity.max(MIN_CAPACITY);
        self.elements.resize_capacity(self.capacity);
        resize_vec(&mut self.max_heap, self.capacity);
        resize_vec(&mut self.min_heap, self.capacity);
    }
}

fn slot_of<T>(element: &Element<T>, side: Side) -> usize {
    match side {
        Side::Max => element.max_slot,
        Side::Min => element.min_slot,
    }
}

impl<T, C: Compare<T> + Default> DoubleEndedHeap<T> for DualHeap<T, C> {
    fn new() -> Self {
        Self::with_comparator(C::default())
    }

    fn is_empty(&self) -> bool {
        DualHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        DualHeap::len(self)
    }

    fn insert(&mut self, value: T) {
        DualHeap::insert(self, value)
    }

    fn peek_max(&self) -> Result<&T, HeapError> {
        DualHeap::peek_max(self)
    }

    fn peek_min(&self) -> Result<&T, HeapError> {
        DualHeap::peek_min(self)
    }

    fn extract_max(&mut self) -> Result<T, HeapError> {
        DualHeap::extract_max(self)
    }

    fn extract_min(&mut self) -> Result<T, HeapError> {
        DualHeap::extract_min(self)
    }
}

impl<T, C: Compare<T> + Default> Default for DualHeap<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T: fmt::Debug, C: Compare<T>> fmt::Debug for DualHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Ord> From<Vec<T>> for DualHeap<T> {
    fn from(values: Vec<T>) -> Self {
        let mut heap = Self::with_capacity(values.len());
        heap.extend(values);
        heap
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for DualHeap<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::default();
        heap.extend(iter);
        heap
    }
}

impl<T, C: Compare<T>> Extend<T> for DualHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T: 'a + Copy, C: Compare<T>> Extend<&'a T> for DualHeap<T, C> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

/// An iterator over the values of a [`DualHeap`] in arbitrary order
#[derive(Clone)]
pub struct Iter<'a, T> {
    inner: std::slice::Iter<'a, Element<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next().map(|element| &element.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        self.inner.next_back().map(|element| &element.value)
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

/// An owning iterator over the values of a [`DualHeap`] in arbitrary order
pub struct IntoIter<T> {
    inner: std::vec::IntoIter<Element<T>>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next().map(|element| element.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back().map(|element| element.value)
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T, C: Compare<T>> IntoIterator for DualHeap<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            inner: self.elements.into_iter(),
        }
    }
}

impl<'a, T, C: Compare<T>> IntoIterator for &'a DualHeap<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
