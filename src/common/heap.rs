//! Array-backed binary heap ordered by a [comparator](Compare).
//!
//! The element at the root is always the "best" one with respect to the
//! comparator, that is, no element compares less than it. With the default
//! [`Natural`] comparator it is therefore the minimum, with a
//! [reversed](Reversed) comparator the maximum.
//!
//! # Examples
//!
//! ```
//! use algokit::{MaxHeap, MinHeap};
//!
//! let mut heap = MinHeap::new();
//! heap.extend([5, 3, 8, 1]);
//! assert_eq!(heap.into_sorted_vec(), vec![1, 3, 5, 8]);
//!
//! let mut heap = MaxHeap::new();
//! heap.extend([5, 3, 8, 1]);
//! assert_eq!(heap.extract(), Ok(8));
//! ```

use std::fmt;

use crate::core::{error::EmptyHeapError, Compare, Natural, Reversed};

/// Heap with the smallest element at the top.
pub type MinHeap<T> = BinaryHeap<T, Natural>;

/// Heap with the largest element at the top.
pub type MaxHeap<T> = BinaryHeap<T, Reversed<Natural>>;

/// Binary heap parameterized by a [comparator](Compare).
///
/// See [module](self) documentation for more details and example.
#[derive(Clone)]
pub struct BinaryHeap<T, C = Natural> {
    data: Vec<T>,
    cmp: C,
}

impl<T, C> BinaryHeap<T, C>
where
    C: Compare<T>,
{
    /// Creates an empty heap with default-constructed comparator.
    pub fn new() -> Self
    where
        C: Default,
    {
        Self::with_comparator(C::default())
    }

    pub fn with_comparator(cmp: C) -> Self {
        Self {
            data: Vec::new(),
            cmp,
        }
    }

    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            cmp,
        }
    }

    /// Builds a heap from arbitrary ordered elements in _O(n)_.
    pub fn from_vec_with_comparator(data: Vec<T>, cmp: C) -> Self {
        let mut heap = Self { data, cmp };
        heap.rebuild();
        heap
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Returns the top element without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Inserts an element in _O(log n)_.
    pub fn insert(&mut self, value: T) {
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
    }

    /// Removes and returns the top element in _O(log n)_.
    pub fn extract(&mut self) -> Result<T, EmptyHeapError> {
        self.pop().ok_or(EmptyHeapError)
    }

    /// Like [`extract`](BinaryHeap::extract), but returns `None` on an empty
    /// heap.
    pub fn pop(&mut self) -> Option<T> {
        let last = self.data.len().checked_sub(1)?;
        self.data.swap(0, last);
        let top = self.data.pop();

        if !self.data.is_empty() {
            self.sift_down(0);
        }

        top
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Consumes the heap and returns its elements ordered from the top.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Some(value) = self.pop() {
            sorted.push(value);
        }
        sorted
    }

    /// Returns the underlying storage in no particular order.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;

            if !self.cmp.less_than(&self.data[i], &self.data[parent]) {
                break;
            }

            self.data.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.data.len();

        loop {
            let left = 2 * i + 1;
            let right = left + 1;

            if left >= len {
                break;
            }

            let better = if right < len && self.cmp.less_than(&self.data[right], &self.data[left])
            {
                right
            } else {
                left
            };

            if !self.cmp.less_than(&self.data[better], &self.data[i]) {
                break;
            }

            self.data.swap(i, better);
            i = better;
        }
    }

    fn rebuild(&mut self) {
        for i in (0..self.data.len() / 2).rev() {
            self.sift_down(i);
        }
    }
}

impl<T, C> Default for BinaryHeap<T, C>
where
    C: Compare<T> + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> Extend<T> for BinaryHeap<T, C>
where
    C: Compare<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);

        for value in iter {
            self.insert(value);
        }
    }
}

impl<T, C> FromIterator<T> for BinaryHeap<T, C>
where
    C: Compare<T> + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec_with_comparator(iter.into_iter().collect(), C::default())
    }
}

impl<T: fmt::Debug, C> fmt::Debug for BinaryHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryHeap")
            .field("data", &self.data)
            .finish()
    }
}
