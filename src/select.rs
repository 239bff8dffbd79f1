//! In-place partitioning and order statistic selection

use std::cmp::Ordering;

use crate::{SelectError, TotalOrd};

/// Reorders `slice` so every element matching `pred` comes before every element that doesn't
///
/// Returns the index of the first element that does not match (or `slice.len()` if all do).
/// Runs in a single O(n) pass with two cursors closing in from both ends.
/// Neither side is sorted, and the relative order of elements is not preserved.
///
/// ```
/// let mut values = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
/// let boundary = medians::partition(&mut values, |v| v % 2 == 1);
///
/// assert_eq!(boundary, 5);
/// assert!(values[..boundary].iter().all(|v| v % 2 == 1));
/// assert!(values[boundary..].iter().all(|v| v % 2 == 0));
/// ```
pub fn partition<T, P>(slice: &mut [T], mut pred: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    // Everything in [0, front) matches, everything in [back, len) doesn't
    let mut front = 0;
    let mut back = slice.len();

    loop {
        while front < back && pred(&slice[front]) {
            front += 1;
        }
        while front < back && !pred(&slice[back - 1]) {
            back -= 1;
        }

        if front == back {
            return front;
        }

        slice.swap(front, back - 1);
        front += 1;
        back -= 1;
    }
}

/// Moves the `index`-th smallest element of `slice` into position `index`
///
/// Afterwards, no element before `index` is greater than the selected one,
/// and no element after it is smaller. The two sides are left unsorted.
/// Returns a reference to the selected element.
///
/// The pivot is always the element currently sitting at `index`, which makes this O(n) on average
/// but O(n²) for adversarial inputs, the same worst case as a naive quicksort.
///
/// # Errors
///
/// Returns [`SelectError::OutOfRange`] if `index >= slice.len()`.
/// The slice is not modified in that case.
///
/// ```
/// let mut values = [9, 2, 8, 2, 0, 2, 2, 1, 2, 2];
/// let fifth = medians::select_kth(&mut values, 5).unwrap();
/// assert_eq!(*fifth, 2);
///
/// assert!(medians::select_kth(&mut values, 10).is_err());
/// ```
pub fn select_kth<T: TotalOrd>(slice: &mut [T], index: usize) -> Result<&mut T, SelectError> {
    select_kth_by(slice, index, |a, b| a.total_lt(b))
}

/// Like [`select_kth`], but ordered by the strict "less than" predicate `is_less`
pub fn select_kth_by<T, F>(
    slice: &mut [T],
    index: usize,
    mut is_less: F,
) -> Result<&mut T, SelectError>
where
    F: FnMut(&T, &T) -> bool,
{
    let len = slice.len();
    if index >= len {
        #[cfg(feature = "log")]
        log::debug!(
            "Rejecting selection of index {} from {} elements",
            index,
            len
        );

        return Err(SelectError::OutOfRange { index, len });
    }

    // The window [lo, hi) always contains `index`
    let mut lo = 0;
    let mut hi = len;

    loop {
        let last = hi - 1;
        slice.swap(index, last);

        let (window, pivot) = slice[lo..hi].split_at_mut(last - lo);
        let pivot = &pivot[0];
        let boundary = lo + partition(window, |v| is_less(v, pivot));

        slice.swap(boundary, last);

        match boundary.cmp(&index) {
            Ordering::Less => lo = boundary + 1,
            Ordering::Greater => hi = boundary,
            Ordering::Equal => return Ok(&mut slice[index]),
        }
    }
}
