use std::{cmp::Ordering, fmt, ops::Add};

/// Numeric edge weight usable by the graph algorithms.
///
/// Implemented for all primitive integer and floating point types. The
/// distances of shortest paths are accumulated in the same type, so make sure
/// it is wide enough for the sums that can occur.
pub trait Weight: PartialOrd + Add<Self, Output = Self> + Clone + fmt::Debug + Sized {
    fn zero() -> Self;

    /// Weight of an edge added without an explicit weight.
    fn one() -> Self;

    fn inf() -> Self;

    /// `true` if the type cannot represent negative values. Algorithms use it
    /// to skip negativity checks, which then compile away.
    fn is_unsigned() -> bool;

    /// Total order over weights. Incomparable values (NaN) are considered
    /// equal.
    fn cmp_weight(&self, other: &Self) -> Ordering {
        self.partial_cmp(other).unwrap_or(Ordering::Equal)
    }

    fn is_negative(&self) -> bool {
        !Self::is_unsigned() && *self < Self::zero()
    }
}

/// An item paired with a priority. Comparisons look only at the priority.
#[derive(Debug, Clone, Copy)]
pub struct Weighted<T, W>(pub T, pub W);

impl<T, W: PartialEq> PartialEq for Weighted<T, W> {
    fn eq(&self, other: &Self) -> bool {
        self.1.eq(&other.1)
    }
}

impl<T, W: Eq> Eq for Weighted<T, W> {}

impl<T, W: PartialOrd> PartialOrd for Weighted<T, W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.1.partial_cmp(&other.1)
    }
}

impl<T, W: Ord> Ord for Weighted<T, W> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.1.cmp(&other.1)
    }
}

macro_rules! impl_int_weight {
    ($ty:ty, $is_unsigned:expr) => {
        impl Weight for $ty {
            fn zero() -> Self {
                0
            }

            fn one() -> Self {
                1
            }

            fn inf() -> Self {
                <$ty>::MAX
            }

            fn is_unsigned() -> bool {
                $is_unsigned
            }
        }
    };
}

impl_int_weight!(i8, false);
impl_int_weight!(i16, false);
impl_int_weight!(i32, false);
impl_int_weight!(i64, false);
impl_int_weight!(i128, false);
impl_int_weight!(u8, true);
impl_int_weight!(u16, true);
impl_int_weight!(u32, true);
impl_int_weight!(u64, true);
impl_int_weight!(u128, true);
impl_int_weight!(isize, false);
impl_int_weight!(usize, true);

macro_rules! impl_float_weight {
    ($ty:ty) => {
        impl Weight for $ty {
            fn zero() -> Self {
                0.0
            }

            fn one() -> Self {
                1.0
            }

            fn inf() -> Self {
                <$ty>::INFINITY
            }

            fn is_unsigned() -> bool {
                false
            }

            fn cmp_weight(&self, other: &Self) -> Ordering {
                self.total_cmp(other)
            }
        }
    };
}

impl_float_weight!(f32);
impl_float_weight!(f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weighted_compares_priority_only() {
        assert!(Weighted("a", 1) < Weighted("b", 2));
        assert_eq!(Weighted("a", 3), Weighted("b", 3));
    }

    #[test]
    fn negativity() {
        assert!(Weight::is_negative(&-1i32));
        assert!(!Weight::is_negative(&0i32));
        assert!(!Weight::is_negative(&5u8));
        assert!(Weight::is_negative(&-0.5f64));
        assert!(!Weight::is_negative(&0.0f64));
    }

    #[test]
    fn float_total_order() {
        assert_eq!(1.0f64.cmp_weight(&2.0), Ordering::Less);
        assert_eq!(f64::NAN.cmp_weight(&f64::NAN), Ordering::Equal);
    }
}
