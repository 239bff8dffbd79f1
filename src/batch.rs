//! One-shot medians over collected data

use crate::{select_kth, Sample};

/// Computes the exact median of `values` using quickselect
///
/// Returns `None` if `values` is empty.
///
/// **The slice is reordered in place.**
/// The middle element(s) end up at their sorted positions, but the rest is only partially ordered.
/// Copy the data first if the original order matters.
///
/// Runs in O(n) on average, O(n²) in the worst case (see [`select_kth`]).
///
/// ```
/// let mut data = [18.5, 83.0, 21.5, 21.25, 63.5, 64.0];
/// assert_eq!(medians::median_of(&mut data), Some(42.5));
/// ```
pub fn median_of<T: Sample>(values: &mut [T]) -> Option<f64> {
    let n = values.len();
    if n == 0 {
        return None;
    }

    let half = n / 2;
    let upper = match select_kth(values, half) {
        Ok(v) => *v,
        Err(e) => unreachable!("middle index is always in range: {e}"),
    };
    if n % 2 == 1 {
        return Some(upper.to_f64());
    }

    let lower = match select_kth(values, half - 1) {
        Ok(v) => *v,
        Err(e) => unreachable!("middle index is always in range: {e}"),
    };
    Some(lower.average(upper))
}

/// Reads the median straight out of data that is already sorted in ascending order
///
/// Returns `None` if `values` is empty.
/// If the data isn't sorted, the result is meaningless (but still one of the values, or an average of two).
pub fn median_of_sorted<T: Sample>(values: &[T]) -> Option<f64> {
    let n = values.len();
    let half = n / 2;

    match n {
        0 => None,
        _ if n % 2 == 1 => Some(values[half].to_f64()),
        _ => Some(values[half - 1].average(values[half])),
    }
}
