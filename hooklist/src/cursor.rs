use core::fmt;
use core::iter::FusedIterator;
use core::ptr::NonNull;

use crate::error::ListError;
use crate::hook::{Linked, ListHook};
use crate::list::List;

/// A position in a [`List`]: either an element or the end
///
/// The end sits between the last and the first element, so moving past
/// either boundary wraps around through it, like stepping over the
/// sentinel of the underlying ring.
///
/// A cursor survives any insertion or removal that does not touch its own
/// element. If its element is removed from the list, the cursor still
/// returns that element from [`current`](Cursor::current) but can no
/// longer move: `move_next`/`move_prev` panic and the `try_` variants
/// return [`ListError::Detached`].
pub struct Cursor<'l, 'a, T: Linked> {
    list: &'l List<'a, T>,
    current: NonNull<ListHook>,
}

impl<'l, 'a, T: Linked> Cursor<'l, 'a, T> {
    pub(crate) fn new(list: &'l List<'a, T>, current: NonNull<ListHook>) -> Self {
        Self { list, current }
    }

    /// The element under the cursor, `None` at the end.
    #[must_use]
    pub fn current(&self) -> Option<&'a T> {
        if self.is_end() {
            return None;
        }
        // SAFETY: a non-end position was reached through this list's ring
        Some(unsafe { List::<'a, T>::element(self.current) })
    }

    #[must_use]
    pub fn is_end(&self) -> bool {
        self.current == self.list.sentinel()
    }

    /// Returns `false` once the element under the cursor has left the list.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        // SAFETY: the position is the sentinel or a record that outlives the list
        self.is_end() || unsafe { ListHook::owner_of(self.current) } == Some(self.list.sentinel())
    }

    /// Tries to step towards the back, wrapping from the end to the front.
    ///
    /// # Errors
    ///
    /// Returns `ListError::Detached` if the element under the cursor was
    /// removed from the list.
    pub fn try_move_next(&mut self) -> Result<(), ListError> {
        if !self.is_attached() {
            return Err(ListError::Detached);
        }
        // SAFETY: the position is part of this list's ring
        self.current = unsafe { ListHook::next_of(self.current) };
        Ok(())
    }

    /// Tries to step towards the front, wrapping from the end to the back.
    ///
    /// # Errors
    ///
    /// Returns `ListError::Detached` if the element under the cursor was
    /// removed from the list.
    pub fn try_move_prev(&mut self) -> Result<(), ListError> {
        if !self.is_attached() {
            return Err(ListError::Detached);
        }
        // SAFETY: the position is part of this list's ring
        self.current = unsafe { ListHook::prev_of(self.current) };
        Ok(())
    }

    /// Steps towards the back, wrapping from the end to the front.
    ///
    /// # Panics
    ///
    /// Panics if the element under the cursor was removed from the list.
    pub fn move_next(&mut self) {
        if self.try_move_next().is_err() {
            panic!("Cursor element was removed from the list");
        }
    }

    /// Steps towards the front, wrapping from the end to the back.
    ///
    /// # Panics
    ///
    /// Panics if the element under the cursor was removed from the list.
    pub fn move_prev(&mut self) {
        if self.try_move_prev().is_err() {
            panic!("Cursor element was removed from the list");
        }
    }

    /// The element after the cursor, `None` if that is the end.
    ///
    /// # Panics
    ///
    /// Panics if the element under the cursor was removed from the list.
    #[must_use]
    pub fn peek_next(&self) -> Option<&'a T> {
        let mut next = *self;
        next.move_next();
        next.current()
    }

    /// The element before the cursor, `None` if that is the end.
    ///
    /// # Panics
    ///
    /// Panics if the element under the cursor was removed from the list.
    #[must_use]
    pub fn peek_prev(&self) -> Option<&'a T> {
        let mut prev = *self;
        prev.move_prev();
        prev.current()
    }
}

impl<T: Linked> Clone for Cursor<'_, '_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Linked> Copy for Cursor<'_, '_, T> {}

impl<T: Linked> PartialEq for Cursor<'_, '_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current && self.list.sentinel() == other.list.sentinel()
    }
}

impl<T: Linked> Eq for Cursor<'_, '_, T> {}

impl<T: Linked + fmt::Debug> fmt::Debug for Cursor<'_, '_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cursor").field(&self.current()).finish()
    }
}

/// Front-to-back iterator over a [`List`]
///
/// Follows the same rule as [`Cursor`]: removing elements the iterator has
/// not reached yet, other than the next one from either end, is fine;
/// removing the next one makes the following `next`/`next_back` panic.
///
/// This iterator implements `Clone`.
pub struct Iter<'l, 'a, T: Linked> {
    head: Cursor<'l, 'a, T>,
    tail: Cursor<'l, 'a, T>,
    finished: bool,
}

impl<'l, 'a, T: Linked> Iter<'l, 'a, T> {
    pub(crate) fn new(list: &'l List<'a, T>) -> Self {
        let head = list.cursor_front();
        Self {
            head,
            tail: list.cursor_back(),
            finished: head.is_end(),
        }
    }
}

impl<'a, T: Linked> Iterator for Iter<'_, 'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        assert!(
            self.head.is_attached(),
            "Iterator element was removed from the list"
        );
        let Some(elem) = self.head.current() else {
            self.finished = true;
            return None;
        };
        if self.head == self.tail {
            self.finished = true;
        } else {
            self.head.move_next();
        }
        Some(elem)
    }
}

impl<T: Linked> DoubleEndedIterator for Iter<'_, '_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        assert!(
            self.tail.is_attached(),
            "Iterator element was removed from the list"
        );
        let Some(elem) = self.tail.current() else {
            self.finished = true;
            return None;
        };
        if self.head == self.tail {
            self.finished = true;
        } else {
            self.tail.move_prev();
        }
        Some(elem)
    }
}

impl<T: Linked> FusedIterator for Iter<'_, '_, T> {}

impl<T: Linked> Clone for Iter<'_, '_, T> {
    fn clone(&self) -> Self {
        Self {
            head: self.head,
            tail: self.tail,
            finished: self.finished,
        }
    }
}
