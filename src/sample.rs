//! Value traits shared by the heaps, the selection routines and the median engines

use std::cmp::Ordering;

/// A value with a total order
///
/// Integers use their [`Ord`] implementation.
/// Floats use the IEEE 754 `totalOrder` predicate, so `NaN` sorts after `+inf`
/// (and negative `NaN` before `-inf`) instead of comparing as unordered.
pub trait TotalOrd {
    /// Compares `self` with `other` under the total order
    fn total_cmp(&self, other: &Self) -> Ordering;

    /// Whether `self` sorts strictly before `other`
    #[inline]
    fn total_lt(&self, other: &Self) -> bool {
        self.total_cmp(other) == Ordering::Less
    }

    /// Whether `self` sorts strictly after `other`
    #[inline]
    fn total_gt(&self, other: &Self) -> bool {
        self.total_cmp(other) == Ordering::Greater
    }
}

/// A numeric value whose median can be reported
///
/// Medians are always reported as [`f64`].
/// For an even number of values, the median is the [`Sample::average`] of the two middle values.
pub trait Sample: TotalOrd + Copy {
    /// Converts the value to an [`f64`]
    ///
    /// For 64 bit integers beyond 2^53 this rounds to the nearest representable float.
    fn to_f64(self) -> f64;

    /// Average of `self` and `other`
    ///
    /// Computed in [`f64`], so integer sums cannot overflow.
    /// Finite floats whose sum would overflow are halved before adding instead.
    #[inline]
    fn average(self, other: Self) -> f64 {
        let (a, b) = (self.to_f64(), other.to_f64());
        let sum = a + b;
        if sum.is_infinite() && a.is_finite() && b.is_finite() {
            a / 2. + b / 2.
        } else {
            sum / 2.
        }
    }
}

macro_rules! impl_sample_for_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl TotalOrd for $t {
                #[inline]
                fn total_cmp(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }
            }

            impl Sample for $t {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

macro_rules! impl_sample_for_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl TotalOrd for $t {
                #[inline]
                fn total_cmp(&self, other: &Self) -> Ordering {
                    <$t>::total_cmp(self, other)
                }
            }

            impl Sample for $t {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_sample_for_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_sample_for_float!(f32, f64);
