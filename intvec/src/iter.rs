use core::iter::FusedIterator;

/// Iterator over the live values of an `IntVec`
///
/// Besides stepping from both ends it supports random access relative to
/// the front: `nth`/`nth_back` jump forward in O(1), [`Iter::retreat`] and
/// [`Iter::step_back`] move the front back toward index 0, [`Iter::offset`]
/// peeks at any distance, and [`Iter::offset_from`] measures the distance
/// between two iterators over the same vector.
///
/// This iterator implements `Clone`.
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    values: &'a [i32],
    front: usize,
    back: usize,
}

/// Mutable iterator over the live values of an `IntVec`
pub type IterMut<'a> = core::slice::IterMut<'a, i32>;

/// Owning iterator over the live values of an `IntVec`
pub type IntoIter = alloc::vec::IntoIter<i32>;

impl<'a> Iter<'a> {
    pub(crate) fn new(values: &'a [i32]) -> Self {
        Self {
            values,
            front: 0,
            back: values.len(),
        }
    }

    /// Index of the next value `next()` would return.
    #[must_use]
    pub fn position(&self) -> usize {
        self.front
    }

    /// Value `n` places after the front, without advancing.
    ///
    /// Returns `None` if that position is past the back of the iterator.
    #[must_use]
    pub fn offset(&self, n: usize) -> Option<&'a i32> {
        let index = self.front.checked_add(n)?;
        if index < self.back {
            self.values.get(index)
        } else {
            None
        }
    }

    /// Moves the front `n` places back and returns the value now at the
    /// front, which `next()` yields again.
    ///
    /// Returns `None` and leaves the iterator unchanged if that would move
    /// before index 0. `retreat(0)` is the same as `offset(0)`.
    pub fn retreat(&mut self, n: usize) -> Option<&'a i32> {
        let index = self.front.checked_sub(n)?;
        self.front = index;
        self.offset(0)
    }

    /// Moves the front one place back. Same as `retreat(1)`.
    pub fn step_back(&mut self) -> Option<&'a i32> {
        self.retreat(1)
    }

    /// Signed distance from `origin`'s front to this iterator's front.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn offset_from(&self, origin: &Iter<'a>) -> isize {
        self.front as isize - origin.front as isize
    }

    /// The values not yet yielded, as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &'a [i32] {
        &self.values[self.front..self.back]
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a i32;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            let result = self.values.get(self.front);
            self.front += 1;
            result
        } else {
            None
        }
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        let remaining = self.back - self.front;
        if n >= remaining {
            self.front = self.back;
            return None;
        }
        self.front += n;
        self.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }

    fn count(self) -> usize {
        self.back - self.front
    }

    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            self.back -= 1;
            self.values.get(self.back)
        } else {
            None
        }
    }

    fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
        let remaining = self.back - self.front;
        if n >= remaining {
            self.back = self.front;
            return None;
        }
        self.back -= n;
        self.next_back()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
