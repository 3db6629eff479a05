//! Element storage shared by the two heaps of a [`DualHeap`](crate::dual_heap::DualHeap)
//!
//! Every logical element lives exactly once in an [`ElementArena`]. The max-heap
//! and min-heap only hold arena indices, and each [`Element`] remembers where it
//! currently sits in both heaps. Those back-references are plain positions, not
//! ownership edges, so the arena is the single owner of every value.
//!
//! # Design
//!
//! The arena is dense: removal uses `swap_remove`, which moves the last element
//! into the vacated index. The caller is told about that move through
//! [`Relocation`] so it can repoint both heaps at the element's new index.
//! Keeping the arena dense lets it grow and shrink together with the heaps.

use std::ops::{Index, IndexMut};

/// A logical heap element: the value plus its slot in each heap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element<T> {
    /// The stored value
    pub value: T,
    /// Current position in the max-heap's backing array
    pub max_slot: usize,
    /// Current position in the min-heap's backing array
    pub min_slot: usize,
}

/// Heap positions of an element that `swap_remove` moved to a new arena index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relocation {
    /// The arena index the element now occupies
    pub index: usize,
    /// Its slot in the max-heap (unchanged by the move)
    pub max_slot: usize,
    /// Its slot in the min-heap (unchanged by the move)
    pub min_slot: usize,
}

/// Dense arena owning every element of a dual heap
#[derive(Debug, Clone)]
pub struct ElementArena<T> {
    elements: Vec<Element<T>>,
}

impl<T> ElementArena<T> {
    /// Creates an arena able to hold `capacity` elements without reallocating
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
        }
    }

    /// Number of live elements
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Stores a new element and returns its arena index
    pub fn insert(&mut self, value: T, max_slot: usize, min_slot: usize) -> usize {
        let index = self.elements.len();
        self.elements.push(Element {
            value,
            max_slot,
            min_slot,
        });
        index
    }

    /// Removes the element at `index`, returning it together with the
    /// relocation of the element that was moved into `index` (if any)
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn swap_remove(&mut self, index: usize) -> (Element<T>, Option<Relocation>) {
        let removed = self.elements.swap_remove(index);
        let relocation = self.elements.get(index).map(|moved| Relocation {
            index,
            max_slot: moved.max_slot,
            min_slot: moved.min_slot,
        });
        (removed, relocation)
    }

    /// Grows or shrinks the backing allocation towards `capacity` elements
    ///
    /// Never drops below the number of live elements.
    pub fn resize_capacity(&mut self, capacity: usize) {
        resize_vec(&mut self.elements, capacity);
    }

    /// Drops every element
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Iterates over the stored elements in arena order
    pub fn iter(&self) -> std::slice::Iter<'_, Element<T>> {
        self.elements.iter()
    }
}

impl<T> IntoIterator for ElementArena<T> {
    type Item = Element<T>;
    type IntoIter = std::vec::IntoIter<Element<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<T> Index<usize> for ElementArena<T> {
    type Output = Element<T>;

    #[inline]
    fn index(&self, index: usize) -> &Element<T> {
        &self.elements[index]
    }
}

impl<T> IndexMut<usize> for ElementArena<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Element<T> {
        &mut self.elements[index]
    }
}

/// Moves a vector's allocation towards exactly `capacity` slots
pub(crate) fn resize_vec<E>(vec: &mut Vec<E>, capacity: usize) {
    let capacity = capacity.max(vec.len());
    if capacity > vec.capacity() {
        vec.reserve_exact(capacity - vec.len());
    } else {
        vec.shrink_to(capacity);
    }
}
