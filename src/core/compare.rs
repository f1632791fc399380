//! Pluggable total orders over pairs of elements.
//!
//! A comparator is a value, not a type hierarchy: the
//! [heap](crate::common::BinaryHeap) is a single implementation parameterized
//! by a comparator, and a max-heap is just a min-heap given a
//! [reversed](Compare::reversed) comparator.
//!
//! Any closure `Fn(&T, &T) -> Ordering` is a comparator.
//!
//! # Examples
//!
//! ```
//! use std::cmp::Ordering;
//!
//! use algokit::core::{Compare, Natural};
//!
//! assert!(Natural.less_than(&1, &2));
//! assert!(Natural.reversed().less_than(&2, &1));
//!
//! let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
//! assert_eq!(by_len.compare(&"abc", &"de"), Ordering::Greater);
//! ```

use std::cmp::Ordering;

/// Three-way comparison of two elements.
///
/// Implementations must be pure and consistent (`a < b` and `b < c` implies
/// `a < c`). A violation breaks the heap-order property without any
/// immediate symptom; the extraction order is simply wrong.
pub trait Compare<T: ?Sized> {
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering;

    fn less_than(&self, lhs: &T, rhs: &T) -> bool {
        self.compare(lhs, rhs) == Ordering::Less
    }

    fn less_than_or_equal(&self, lhs: &T, rhs: &T) -> bool {
        self.compare(lhs, rhs) != Ordering::Greater
    }

    fn greater_than(&self, lhs: &T, rhs: &T) -> bool {
        self.compare(lhs, rhs) == Ordering::Greater
    }

    fn greater_than_or_equal(&self, lhs: &T, rhs: &T) -> bool {
        self.compare(lhs, rhs) != Ordering::Less
    }

    fn equal(&self, lhs: &T, rhs: &T) -> bool {
        self.compare(lhs, rhs) == Ordering::Equal
    }

    /// Returns a comparator with the inverted ordering.
    fn reversed(self) -> Reversed<Self>
    where
        Self: Sized,
    {
        Reversed(self)
    }
}

impl<F, T> Compare<T> for F
where
    F: Fn(&T, &T) -> Ordering,
    T: ?Sized,
{
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        (self)(lhs, rhs)
    }
}

/// Ascending order given by [`PartialOrd`].
///
/// Incomparable values (e.g., NaN) are treated as equal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Natural;

impl Natural {
    // `Natural` compares any `PartialOrd` type, so the trait method would
    // leave the element type ambiguous.
    pub fn reversed(self) -> Reversed<Self> {
        Reversed(self)
    }
}

impl<T: PartialOrd + ?Sized> Compare<T> for Natural {
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        lhs.partial_cmp(rhs).unwrap_or(Ordering::Equal)
    }
}

/// Inverted ordering of the wrapped comparator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Reversed<C>(pub C);

impl<C> Reversed<C> {
    /// Reversing a reversed comparator gives back the original one.
    pub fn reversed(self) -> C {
        self.0
    }
}

impl<T, C> Compare<T> for Reversed<C>
where
    C: Compare<T>,
    T: ?Sized,
{
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        self.0.compare(rhs, lhs)
    }
}
