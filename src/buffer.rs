//! Owned, growable storage with an explicit growth policy

use std::ops::{Index, IndexMut};

/// Contiguous, exclusively owned storage for a sequence of values
///
/// This is a thin layer over [`Vec`] that pins down how the storage grows:
/// it starts at [`Buffer::DEFAULT_CAPACITY`] and, whenever an append would overflow it,
/// the capacity is multiplied by [`Buffer::GROWTH_RATIO`].
/// Existing elements are moved into the new allocation in order.
///
/// The buffer deliberately does not implement [`Clone`].
/// It can only be handed over by moving it, so an O(n) copy can never happen by accident.
///
/// Indexing with `buffer[i]` panics if `i` is not below [`Buffer::len`].
/// Use [`Buffer::get`] for a checked lookup.
#[derive(Debug)]
pub struct Buffer<T> {
    items: Vec<T>,
}

impl<T> Default for Buffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Buffer<T> {
    /// Capacity of a buffer created by [`Self::new`]
    pub const DEFAULT_CAPACITY: usize = 128;

    /// Factor the capacity is multiplied by when the buffer is full
    pub const GROWTH_RATIO: f64 = 1.8;

    /// Constructs an empty buffer with [`Self::DEFAULT_CAPACITY`]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Constructs an empty buffer with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Number of live elements
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the buffer holds no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of elements the buffer can hold before it has to grow
    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Appends a value to the end of the buffer
    ///
    /// Amortized O(1).
    pub fn push(&mut self, value: T) {
        if self.items.len() == self.items.capacity() {
            self.grow();
        }

        self.items.push(value);
    }

    /// Removes the last value, or returns `None` if the buffer is empty
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Removes every value, keeping the allocation
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Checked read access
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Checked write access
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    /// Swaps the elements at positions `a` and `b`
    ///
    /// # Panics
    ///
    /// Panics if either position is not below [`Self::len`].
    #[inline]
    pub fn swap(&mut self, a: usize, b: usize) {
        self.items.swap(a, b);
    }

    /// The live elements as a slice
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// The live elements as a mutable slice
    ///
    /// This is the range the in-place selection routines operate on.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    /// Iterates over the live elements in order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Consumes the buffer, returning its elements
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    fn grow(&mut self) {
        let old_capacity = self.items.capacity();
        // A zero-capacity buffer would never grow by multiplication alone
        let new_capacity =
            ((old_capacity as f64 * Self::GROWTH_RATIO) as usize).max(old_capacity + 1);

        #[cfg(feature = "log")]
        log::trace!(
            "Growing buffer from {} to {} elements",
            old_capacity,
            new_capacity
        );

        self.items.reserve_exact(new_capacity - self.items.len());
    }
}

impl<T> Index<usize> for Buffer<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        let len = self.items.len();
        match self.items.get(index) {
            Some(v) => v,
            None => panic!("buffer index {index} out of bounds for length {len}"),
        }
    }
}

impl<T> IndexMut<usize> for Buffer<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.items.len();
        match self.items.get_mut(index) {
            Some(v) => v,
            None => panic!("buffer index {index} out of bounds for length {len}"),
        }
    }
}

impl<T> From<Vec<T>> for Buffer<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for Buffer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut buffer = Self::new();
        buffer.extend(iter);
        buffer
    }
}

impl<T> Extend<T> for Buffer<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for v in iter {
            self.push(v);
        }
    }
}

impl<'a, T> IntoIterator for &'a Buffer<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
