//! Exact running median over a stream, kept in two heaps

use std::cmp::Ordering;

use crate::{MaxHeap, MinHeap, Sample};

/// Exact median of a data stream, updated as each value arrives
///
/// The [`Self::new`] constructor creates the engine in an initial, empty state.
/// Then, values can be subsequently added with [`Self::push`].
/// The median can then be fetched at any time with [`Self::median`].
///
/// Internally the values are split across two heaps:
/// a max-heap holding the lower half of the stream and a min-heap holding the upper half.
/// The heaps never differ in size by more than one,
/// so the median is always one of the heap tops, or the average of both.
///
/// Pushing costs O(log n), and reading the median is O(1).
/// Unlike an approximation, every value is retained, so memory grows linearly with the stream.
#[derive(Debug)]
pub struct RunningMedian<T> {
    /// Values at or below the median, largest on top
    lower: MaxHeap<T>,
    /// Values at or above the median, smallest on top
    upper: MinHeap<T>,
    /// Median of everything pushed so far
    ///
    /// `None` until the first value arrives.
    median: Option<f64>,
}

impl<T> Default for RunningMedian<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RunningMedian<T> {
    /// Constructs a new [`Self`], without any values
    pub fn new() -> Self {
        Self {
            lower: MaxHeap::new(),
            upper: MinHeap::new(),
            median: None,
        }
    }

    /// Constructs a new [`Self`] with room for roughly `capacity` values before reallocating
    pub fn with_capacity(capacity: usize) -> Self {
        let half = capacity / 2 + 1;
        Self {
            lower: MaxHeap::with_capacity(half),
            upper: MinHeap::with_capacity(half),
            median: None,
        }
    }

    /// Gets the median of the values pushed so far
    ///
    /// Returns `None` if no values have been pushed.
    #[inline]
    pub fn median(&self) -> Option<f64> {
        self.median
    }

    /// Gets the median of the values pushed so far
    ///
    /// If no values have been pushed, this returns zero as a fallback.
    #[inline]
    pub fn median_or_default(&self) -> f64 {
        self.median.unwrap_or_default()
    }

    /// Total number of values pushed so far
    pub fn count(&self) -> usize {
        self.lower.len() + self.upper.len()
    }

    /// Whether no values have been pushed yet
    pub fn is_empty(&self) -> bool {
        self.median.is_none()
    }

    /// Number of values held in the lower half
    pub fn lower_len(&self) -> usize {
        self.lower.len()
    }

    /// Number of values held in the upper half
    pub fn upper_len(&self) -> usize {
        self.upper.len()
    }
}

impl<T: Sample> RunningMedian<T> {
    /// Processes a new value in the stream, updating the median
    pub fn push(&mut self, value: T) {
        match self.median {
            // First value: it is the median
            None => self.lower.push(value),
            Some(median) => match self.side_of(value, median) {
                Ordering::Less => self.lower.push(value),
                Ordering::Greater => self.upper.push(value),
                Ordering::Equal => {
                    // Ties go to the smaller half, favoring the lower half
                    if self.upper.len() < self.lower.len() {
                        self.upper.push(value);
                    } else {
                        self.lower.push(value);
                    }
                }
            },
        }

        self.rebalance();
        self.median = self.current_median();
    }

    /// Which half `value` belongs to, relative to the current `median`
    ///
    /// Values outside the span of the two heap tops are routed by comparing against the tops directly,
    /// so a lossy conversion to [`f64`] can never place a value on the wrong side of a top.
    fn side_of(&self, value: T, median: f64) -> Ordering {
        if let Some(top) = self.lower.peek() {
            if value.total_lt(top) {
                return Ordering::Less;
            }
        }
        if let Some(top) = self.upper.peek() {
            if value.total_gt(top) {
                return Ordering::Greater;
            }
        }

        value.to_f64().total_cmp(&median)
    }

    /// Moves a heap top across if one half has grown two larger than the other
    fn rebalance(&mut self) {
        if self.lower.len() > self.upper.len() + 1 {
            if let Some(top) = self.lower.pop() {
                #[cfg(feature = "log")]
                log::trace!(
                    "Rebalancing: moving {} from lower ({}) to upper ({})",
                    top.to_f64(),
                    self.lower.len() + 1,
                    self.upper.len()
                );

                self.upper.push(top);
            }
        } else if self.upper.len() > self.lower.len() + 1 {
            if let Some(top) = self.upper.pop() {
                #[cfg(feature = "log")]
                log::trace!(
                    "Rebalancing: moving {} from upper ({}) to lower ({})",
                    top.to_f64(),
                    self.upper.len() + 1,
                    self.lower.len()
                );

                self.lower.push(top);
            }
        }
    }

    /// Recomputes the median from the heap tops
    fn current_median(&self) -> Option<f64> {
        match (self.lower.peek(), self.upper.peek()) {
            (None, None) => None,
            (Some(lo), None) => Some(lo.to_f64()),
            (None, Some(hi)) => Some(hi.to_f64()),
            (Some(lo), Some(hi)) => Some(match self.lower.len().cmp(&self.upper.len()) {
                Ordering::Equal => lo.average(*hi),
                Ordering::Greater => lo.to_f64(),
                Ordering::Less => hi.to_f64(),
            }),
        }
    }
}

impl<T: Sample> Extend<T> for RunningMedian<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for v in iter {
            self.push(v);
        }
    }
}

impl<T: Sample> FromIterator<T> for RunningMedian<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut running = Self::new();
        running.extend(iter);
        running
    }
}
