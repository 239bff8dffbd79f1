//! Array-backed binary heap with a pluggable priority order

use crate::{Buffer, TotalOrd};

/// Decides which of two values sits closer to the root of a [`BinaryHeap`]
///
/// Any `Fn(&T, &T) -> bool` closure is an order, so ad-hoc priorities don't need a new type.
pub trait HeapOrder<T> {
    /// Whether `a` has priority over `b`
    ///
    /// Must be a strict order: a value never has priority over itself.
    fn has_priority(&self, a: &T, b: &T) -> bool;
}

/// Smallest value on top
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MinOrder;

/// Largest value on top
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MaxOrder;

impl<T: TotalOrd> HeapOrder<T> for MinOrder {
    #[inline]
    fn has_priority(&self, a: &T, b: &T) -> bool {
        a.total_lt(b)
    }
}

impl<T: TotalOrd> HeapOrder<T> for MaxOrder {
    #[inline]
    fn has_priority(&self, a: &T, b: &T) -> bool {
        a.total_gt(b)
    }
}

impl<T, F> HeapOrder<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn has_priority(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Heap with the smallest value on top
pub type MinHeap<T> = BinaryHeap<T, MinOrder>;

/// Heap with the largest value on top
pub type MaxHeap<T> = BinaryHeap<T, MaxOrder>;

/// A binary heap stored level by level in a [`Buffer`]
///
/// The root lives at index 0 and the children of node `i` at `2i + 1` and `2i + 2`.
/// No node has priority over its parent under the heap's [`HeapOrder`].
///
/// | Operation | Cost |
/// |-----------|------|
/// | [`Self::push`] | O(log n) |
/// | [`Self::pop`] | O(log n) |
/// | [`Self::peek`] | O(1) |
/// | [`Self::len`] | O(1) |
///
/// Values of equal priority come out in no particular order.
#[derive(Debug)]
pub struct BinaryHeap<T, O = MinOrder> {
    data: Buffer<T>,
    order: O,
}

impl<T, O: Default> Default for BinaryHeap<T, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, O: Default> BinaryHeap<T, O> {
    /// Constructs an empty heap
    pub fn new() -> Self {
        Self::with_order(O::default())
    }

    /// Constructs an empty heap with room for `capacity` values
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Buffer::with_capacity(capacity),
            order: O::default(),
        }
    }
}

impl<T, O> BinaryHeap<T, O> {
    /// Constructs an empty heap using the given order
    ///
    /// ```
    /// use medians::BinaryHeap;
    ///
    /// // Longest word first
    /// let mut heap = BinaryHeap::with_order(|a: &&str, b: &&str| a.len() > b.len());
    /// heap.push("fig");
    /// heap.push("banana");
    /// heap.push("kiwi");
    /// assert_eq!(heap.peek(), Some(&"banana"));
    /// ```
    pub fn with_order(order: O) -> Self {
        Self {
            data: Buffer::new(),
            order,
        }
    }

    /// Number of values in the heap
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the heap holds no values
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The value with the highest priority, or `None` if the heap is empty
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.data.get(0)
    }
}

impl<T, O: HeapOrder<T>> BinaryHeap<T, O> {
    /// Adds a value to the heap
    pub fn push(&mut self, value: T) {
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
    }

    /// Removes and returns the value with the highest priority
    ///
    /// Returns `None` if the heap is empty.
    pub fn pop(&mut self) -> Option<T> {
        let last = self.data.len().checked_sub(1)?;
        self.data.swap(0, last);
        let top = self.data.pop();
        self.sift_down(0);

        top
    }

    /// Drains the heap, returning its values in priority order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Some(v) = self.pop() {
            sorted.push(v);
        }

        sorted
    }

    /// Moves the value at `node` toward the root until its parent has priority
    fn sift_up(&mut self, mut node: usize) {
        while node > 0 {
            let parent = (node - 1) / 2;

            if !self.order.has_priority(&self.data[node], &self.data[parent]) {
                break;
            }

            self.data.swap(node, parent);
            node = parent;
        }
    }

    /// Moves the value at `node` toward the leaves until neither child has priority over it
    fn sift_down(&mut self, mut node: usize) {
        let len = self.data.len();

        loop {
            let left = 2 * node + 1;
            if left >= len {
                // Leaf
                break;
            }

            let right = left + 1;
            let mut child = left;
            if right < len && self.order.has_priority(&self.data[right], &self.data[left]) {
                child = right;
            }

            if !self.order.has_priority(&self.data[child], &self.data[node]) {
                break;
            }

            self.data.swap(node, child);
            node = child;
        }
    }

    /// Checks the heap ordering invariant over every node
    #[cfg(test)]
    pub(crate) fn is_heap(&self) -> bool {
        (1..self.data.len()).all(|node| {
            let parent = (node - 1) / 2;
            !self.order.has_priority(&self.data[node], &self.data[parent])
        })
    }
}

impl<T, O: HeapOrder<T> + Default> FromIterator<T> for BinaryHeap<T, O> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}

impl<T, O: HeapOrder<T>> Extend<T> for BinaryHeap<T, O> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for v in iter {
            self.push(v);
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const NUMBERS: [i32; 7] = [400, 13, 100, 220, 1, 544, 93];

    #[test]
    fn min_on_top() {
        let heap: MinHeap<i32> = NUMBERS.into_iter().collect();
        assert_eq!(heap.peek(), Some(&1));
        assert_eq!(heap.len(), NUMBERS.len());
    }

    #[test]
    fn next_min_after_pop() {
        let mut heap: MinHeap<i32> = NUMBERS.into_iter().collect();
        assert_eq!(heap.pop(), Some(1));
        assert_eq!(heap.peek(), Some(&13));
    }

    #[test]
    fn max_on_top() {
        let heap: MaxHeap<i32> = NUMBERS.into_iter().collect();
        assert_eq!(heap.peek(), Some(&544));
    }

    #[test]
    fn pops_in_sorted_order() {
        let heap: MinHeap<i32> = NUMBERS.into_iter().collect();
        let mut expected = NUMBERS.to_vec();
        expected.sort();

        assert_eq!(heap.into_sorted_vec(), expected);
    }

    #[test]
    fn empty_heap() {
        let mut heap: MaxHeap<f64> = MaxHeap::new();
        assert!(heap.is_empty());
        assert_eq!(heap.peek(), None);
        assert_eq!(heap.pop(), None);
    }

    #[test]
    fn single_value() {
        let mut heap: MinHeap<u8> = MinHeap::with_capacity(1);
        heap.push(7);
        assert_eq!(heap.pop(), Some(7));
        assert!(heap.is_empty());
    }

    #[test]
    fn floats_with_nan() {
        let mut heap: MaxHeap<f64> = [1.5, f64::NAN, -3.0, 8.25].into_iter().collect();
        assert!(heap.pop().is_some_and(f64::is_nan));
        assert_eq!(heap.pop(), Some(8.25));
        assert!(heap.is_heap());
    }

    #[test]
    fn closure_order() {
        let mut heap = BinaryHeap::with_order(|a: &(u32, char), b: &(u32, char)| a.0 > b.0);
        heap.extend([(2, 'b'), (9, 'z'), (5, 'm')]);
        assert_eq!(heap.pop(), Some((9, 'z')));
        assert_eq!(heap.pop(), Some((5, 'm')));
    }

    #[derive(Debug, Clone)]
    enum Op {
        Push(i16),
        Pop,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![3 => any::<i16>().prop_map(Op::Push), 1 => Just(Op::Pop)]
    }

    proptest! {
        #[test]
        fn invariant_holds_after_any_ops(ops in prop::collection::vec(op(), 0..400)) {
            let mut min: MinHeap<i16> = MinHeap::new();
            let mut max: MaxHeap<i16> = MaxHeap::new();
            // Kept sorted ascending
            let mut reference: Vec<i16> = Vec::new();

            for op in ops {
                match op {
                    Op::Push(v) => {
                        min.push(v);
                        max.push(v);
                        let at = reference.partition_point(|r| *r < v);
                        reference.insert(at, v);
                    }
                    Op::Pop => {
                        prop_assert_eq!(min.pop(), reference.first().copied());
                        prop_assert_eq!(max.pop(), reference.last().copied());

                        // Put the popped values back so both heaps keep the reference multiset
                        if let (Some(lo), Some(hi)) = (reference.first(), reference.last()) {
                            min.push(*lo);
                            max.push(*hi);
                        }
                    }
                }

                prop_assert_eq!(min.len(), reference.len());
                prop_assert!(min.is_heap());
                prop_assert!(max.is_heap());
            }
        }
    }
}
