use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use core::ops::{Index, IndexMut};

use crate::error::IntVecError;
use crate::iter::{IntoIter, Iter, IterMut};

/// Capacity used by the first allocation of an empty vector.
const INITIAL_CAPACITY: usize = 1;

/// Capacity after the next growth step: 0 becomes 1, anything else doubles.
#[must_use]
pub(crate) const fn grown_capacity(capacity: usize) -> usize {
    if capacity == 0 {
        INITIAL_CAPACITY
    } else {
        // An `i32` buffer can not exceed `isize::MAX` bytes, so doubling fits in `usize`
        capacity * 2
    }
}

/// A growable, exclusively owned array of `i32`
///
/// The buffer is a boxed slice whose length is the capacity; `len` counts the
/// live prefix. An empty boxed slice owns no allocation, so the vector holds
/// a buffer exactly when `capacity() > 0`.
///
/// Any operation that reallocates (`push` past capacity, `reserve`,
/// `extend_from_slice`) invalidates outstanding iterators and references.
/// They all take `&mut self`, so the borrow checker rejects such code.
pub struct IntVec {
    buffer: Box<[i32]>,
    len: usize,
}

impl IntVec {
    /// Creates an empty vector without allocating.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buffer: Box::default(),
            len: 0,
        }
    }

    /// Creates a vector of `len` zeros with `capacity() == len`.
    #[must_use]
    pub fn with_len(len: usize) -> Self {
        Self {
            buffer: vec![0; len].into_boxed_slice(),
            len,
        }
    }

    /// Creates an empty vector with room for at least `capacity` values.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let mut values = Self::new();
        values.reserve(capacity);
        values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[i32] {
        &self.buffer[..self.len]
    }

    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [i32] {
        &mut self.buffer[..self.len]
    }

    fn check_bounds(&self, index: usize) -> Result<(), IntVecError> {
        if index >= self.len {
            Err(IntVecError::IndexOutOfBounds {
                index,
                length: self.len,
            })
        } else {
            Ok(())
        }
    }

    /// Returns the value at `index`, or `None` if it is out of bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<i32> {
        self.as_slice().get(index).copied()
    }

    #[must_use]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut i32> {
        self.as_mut_slice().get_mut(index)
    }

    /// Tries to get the value at the specified index.
    ///
    /// # Errors
    ///
    /// Returns `IntVecError::IndexOutOfBounds` if `index` is out of bounds.
    pub fn try_get(&self, index: usize) -> Result<i32, IntVecError> {
        self.check_bounds(index)?;
        Ok(self.buffer[index])
    }

    #[must_use]
    pub fn first(&self) -> Option<i32> {
        self.as_slice().first().copied()
    }

    #[must_use]
    pub fn last(&self) -> Option<i32> {
        self.as_slice().last().copied()
    }

    /// Appends a value, growing the buffer first if it is full.
    ///
    /// Growth goes from capacity 0 to 1 and doubles after that, so a run of
    /// `n` pushes copies at most `2n` values in total.
    pub fn push(&mut self, value: i32) {
        if self.len == self.capacity() {
            self.reallocate(grown_capacity(self.capacity()));
        }
        self.buffer[self.len] = value;
        self.len += 1;
    }

    /// Removes and returns the last value.
    ///
    /// The vacated slot keeps its value; only the length changes.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    pub fn pop(&mut self) -> i32 {
        assert!(self.len > 0, "Cannot pop from empty vector");
        self.len -= 1;
        self.buffer[self.len]
    }

    /// Tries to remove and return the last value.
    ///
    /// # Errors
    ///
    /// Returns `IntVecError::EmptyVector` if the vector is empty.
    pub fn try_pop(&mut self) -> Result<i32, IntVecError> {
        if self.len == 0 {
            return Err(IntVecError::EmptyVector);
        }
        Ok(self.pop())
    }

    /// Drops the live values but keeps the buffer.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Shortens the vector to `len` values. No-op if it is already shorter.
    pub fn truncate(&mut self, len: usize) {
        self.len = self.len.min(len);
    }

    /// Makes the capacity at least `capacity`. Never shrinks.
    pub fn reserve(&mut self, capacity: usize) {
        if capacity > self.capacity() {
            self.reallocate(capacity);
        }
    }

    /// Appends every value of `values`.
    ///
    /// The resulting capacity is the one the same sequence of `push` calls
    /// would reach, but the buffer is reallocated at most once.
    pub fn extend_from_slice(&mut self, values: &[i32]) {
        let required = self.len + values.len();
        let mut capacity = self.capacity();
        while capacity < required {
            capacity = grown_capacity(capacity);
        }
        self.reserve(capacity);
        self.buffer[self.len..required].copy_from_slice(values);
        self.len = required;
    }

    /// Exchanges the contents of two vectors without copying any value.
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.buffer, &mut other.buffer);
        core::mem::swap(&mut self.len, &mut other.len);
    }

    /// Moves the contents out, leaving `self` empty and unallocated.
    #[must_use]
    pub fn take(&mut self) -> Self {
        core::mem::take(self)
    }

    fn reallocate(&mut self, capacity: usize) {
        tracing::trace!(
            old_capacity = self.capacity(),
            new_capacity = capacity,
            len = self.len,
            "reallocating buffer"
        );
        let mut buffer = vec![0; capacity].into_boxed_slice();
        buffer[..self.len].copy_from_slice(self.as_slice());
        self.buffer = buffer;
    }

    /// Returns an iterator over the live values.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.as_slice())
    }

    #[must_use]
    pub fn iter_mut(&mut self) -> IterMut<'_> {
        self.as_mut_slice().iter_mut()
    }
}

impl Default for IntVec {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for IntVec {
    /// Deep copy that keeps the capacity of the source.
    fn clone(&self) -> Self {
        let mut buffer = vec![0; self.capacity()].into_boxed_slice();
        buffer[..self.len].copy_from_slice(self.as_slice());
        Self {
            buffer,
            len: self.len,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        if self.capacity() == source.capacity() {
            self.buffer[..source.len].copy_from_slice(source.as_slice());
            self.len = source.len;
        } else {
            *self = source.clone();
        }
    }
}

impl Index<usize> for IntVec {
    type Output = i32;

    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    fn index(&self, index: usize) -> &i32 {
        assert!(
            index < self.len,
            "Index {} out of bounds for vector of length {}",
            index,
            self.len
        );
        &self.buffer[index]
    }
}

impl IndexMut<usize> for IntVec {
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    fn index_mut(&mut self, index: usize) -> &mut i32 {
        assert!(
            index < self.len,
            "Index {} out of bounds for vector of length {}",
            index,
            self.len
        );
        &mut self.buffer[index]
    }
}

impl PartialEq for IntVec {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for IntVec {}

impl fmt::Debug for IntVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl AsRef<[i32]> for IntVec {
    fn as_ref(&self) -> &[i32] {
        self.as_slice()
    }
}

impl AsMut<[i32]> for IntVec {
    fn as_mut(&mut self) -> &mut [i32] {
        self.as_mut_slice()
    }
}

impl From<&[i32]> for IntVec {
    /// Allocates exactly `values.len()` slots.
    fn from(values: &[i32]) -> Self {
        Self {
            buffer: Box::from(values),
            len: values.len(),
        }
    }
}

impl<const N: usize> From<[i32; N]> for IntVec {
    fn from(values: [i32; N]) -> Self {
        Self::from(&values[..])
    }
}

impl From<Vec<i32>> for IntVec {
    fn from(values: Vec<i32>) -> Self {
        let buffer = values.into_boxed_slice();
        let len = buffer.len();
        Self { buffer, len }
    }
}

impl FromIterator<i32> for IntVec {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<i32>>())
    }
}

impl Extend<i32> for IntVec {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl IntoIterator for IntVec {
    type Item = i32;
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        let mut values = self.buffer.into_vec();
        values.truncate(self.len);
        values.into_iter()
    }
}

impl<'a> IntoIterator for &'a IntVec {
    type Item = &'a i32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut IntVec {
    type Item = &'a mut i32;
    type IntoIter = IterMut<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
