use alloc::boxed::Box;
use core::cell::Cell;
use core::fmt;
use core::marker::PhantomData;
use core::ptr::NonNull;

use crate::cursor::{Cursor, Iter};
use crate::error::ListError;
use crate::hook::{Linked, ListHook};

/// A circular doubly-linked list threaded through hooks embedded in
/// caller-owned records
///
/// The list owns only its sentinel hook. Records are borrowed for `'a`, so
/// every record outlives every list it can be linked into; dropping the list
/// unlinks whatever is still in it and leaves the records alone.
///
/// The sentinel lives in its own allocation, so moving the `List` value
/// does not move the ring. `core::mem::take` hands the ring over and leaves
/// an empty list behind.
///
/// All operations take `&self`. The list is a handle over `Cell`-based link
/// state, which is what lets [`Cursor`]s stay usable while other elements
/// are pushed or removed.
pub struct List<'a, T: Linked> {
    dummy: NonNull<ListHook>,
    // Invariant in 'a: `push_back(&self, ..)` must not accept shorter-lived records
    _marker: PhantomData<Cell<&'a T>>,
}

impl<'a, T: Linked> List<'a, T> {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        let dummy = NonNull::from(Box::leak(Box::new(ListHook::new_sentinel())));
        Self {
            dummy,
            _marker: PhantomData,
        }
    }

    pub(crate) fn sentinel(&self) -> NonNull<ListHook> {
        self.dummy
    }

    /// # Safety
    ///
    /// `hook` must belong to a record linked into this list (or linked into
    /// it earlier through the safe API), never to a sentinel.
    pub(crate) unsafe fn element(hook: NonNull<ListHook>) -> &'a T {
        unsafe { T::from_hook(hook).as_ref() }
    }

    fn hook_ptr(elem: &T) -> NonNull<ListHook> {
        // SAFETY: `elem` is a live record
        unsafe { T::hook_of(NonNull::from(elem)) }
    }

    fn first_hook(&self) -> Option<NonNull<ListHook>> {
        // SAFETY: the sentinel is alive as long as `self`
        let first = unsafe { ListHook::next_of(self.dummy) };
        (first != self.dummy).then_some(first)
    }

    fn last_hook(&self) -> Option<NonNull<ListHook>> {
        // SAFETY: the sentinel is alive as long as `self`
        let last = unsafe { ListHook::prev_of(self.dummy) };
        (last != self.dummy).then_some(last)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.first_hook().is_none()
    }

    /// Counts the elements by walking the ring. O(n).
    #[must_use]
    pub fn len(&self) -> usize {
        let mut count = 0;
        // SAFETY: every hook in the ring is alive
        let mut hook = unsafe { ListHook::next_of(self.dummy) };
        while hook != self.dummy {
            count += 1;
            hook = unsafe { ListHook::next_of(hook) };
        }
        count
    }

    /// Returns `true` if `elem` is currently linked into this list. O(1).
    #[must_use]
    pub fn contains(&self, elem: &T) -> bool {
        // SAFETY: `elem` is a live record
        unsafe { ListHook::owner_of(Self::hook_ptr(elem)) == Some(self.dummy) }
    }

    /// Links `elem` at the back.
    ///
    /// An element linked anywhere else, in this list or another one, is
    /// moved rather than duplicated.
    pub fn push_back(&self, elem: &'a T) {
        let hook = Self::hook_ptr(elem);
        // SAFETY: `elem` outlives the list; ring members are alive
        unsafe {
            ListHook::unlink_raw(hook);
            ListHook::splice_after(ListHook::prev_of(self.dummy), hook);
        }
    }

    /// Links `elem` at the front, moving it if it is linked elsewhere.
    pub fn push_front(&self, elem: &'a T) {
        // SAFETY: `elem` outlives the list; ring members are alive
        unsafe { ListHook::splice_after(self.dummy, Self::hook_ptr(elem)) }
    }

    /// Returns the first element.
    ///
    /// # Panics
    ///
    /// Panics if the list is empty.
    #[must_use]
    pub fn front(&self) -> &'a T {
        match self.try_front() {
            Ok(elem) => elem,
            Err(_) => panic!("Cannot access front of empty list"),
        }
    }

    /// Returns the last element.
    ///
    /// # Panics
    ///
    /// Panics if the list is empty.
    #[must_use]
    pub fn back(&self) -> &'a T {
        match self.try_back() {
            Ok(elem) => elem,
            Err(_) => panic!("Cannot access back of empty list"),
        }
    }

    /// Tries to return the first element.
    ///
    /// # Errors
    ///
    /// Returns `ListError::Empty` if the list is empty.
    pub fn try_front(&self) -> Result<&'a T, ListError> {
        let first = self.first_hook().ok_or(ListError::Empty)?;
        // SAFETY: `first` is an element of this list
        Ok(unsafe { Self::element(first) })
    }

    /// Tries to return the last element.
    ///
    /// # Errors
    ///
    /// Returns `ListError::Empty` if the list is empty.
    pub fn try_back(&self) -> Result<&'a T, ListError> {
        let last = self.last_hook().ok_or(ListError::Empty)?;
        // SAFETY: `last` is an element of this list
        Ok(unsafe { Self::element(last) })
    }

    /// Unlinks and returns the first element. The element is not dropped.
    ///
    /// # Panics
    ///
    /// Panics if the list is empty.
    pub fn pop_front(&self) -> &'a T {
        match self.try_pop_front() {
            Ok(elem) => elem,
            Err(_) => panic!("Cannot pop from empty list"),
        }
    }

    /// Unlinks and returns the last element. The element is not dropped.
    ///
    /// # Panics
    ///
    /// Panics if the list is empty.
    pub fn pop_back(&self) -> &'a T {
        match self.try_pop_back() {
            Ok(elem) => elem,
            Err(_) => panic!("Cannot pop from empty list"),
        }
    }

    /// Tries to unlink and return the first element.
    ///
    /// # Errors
    ///
    /// Returns `ListError::Empty` if the list is empty.
    pub fn try_pop_front(&self) -> Result<&'a T, ListError> {
        let elem = self.try_front()?;
        elem.hook().unlink();
        Ok(elem)
    }

    /// Tries to unlink and return the last element.
    ///
    /// # Errors
    ///
    /// Returns `ListError::Empty` if the list is empty.
    pub fn try_pop_back(&self) -> Result<&'a T, ListError> {
        let elem = self.try_back()?;
        elem.hook().unlink();
        Ok(elem)
    }

    /// Unlinks `elem` if it belongs to this list. Returns whether it did.
    pub fn remove(&self, elem: &T) -> bool {
        if !self.contains(elem) {
            return false;
        }
        elem.hook().unlink();
        true
    }

    /// Unlinks every element, returning how many there were.
    pub fn clear(&self) -> usize {
        let mut count = 0;
        while let Some(first) = self.first_hook() {
            // SAFETY: `first` is an element of this list
            unsafe { ListHook::unlink_raw(first) };
            count += 1;
        }
        count
    }

    /// Cursor at the first element, or at the end if the list is empty.
    #[must_use]
    pub fn cursor_front(&self) -> Cursor<'_, 'a, T> {
        // SAFETY: the sentinel is alive as long as `self`
        Cursor::new(self, unsafe { ListHook::next_of(self.dummy) })
    }

    /// Cursor at the last element, or at the end if the list is empty.
    #[must_use]
    pub fn cursor_back(&self) -> Cursor<'_, 'a, T> {
        // SAFETY: the sentinel is alive as long as `self`
        Cursor::new(self, unsafe { ListHook::prev_of(self.dummy) })
    }

    /// Cursor at the end position, between the last and the first element.
    #[must_use]
    pub fn cursor_end(&self) -> Cursor<'_, 'a, T> {
        Cursor::new(self, self.dummy)
    }

    /// Cursor at `elem`, without walking the list.
    ///
    /// # Panics
    ///
    /// Panics if `elem` is not linked into this list.
    #[must_use]
    pub fn cursor_to(&self, elem: &T) -> Cursor<'_, 'a, T> {
        assert!(self.contains(elem), "Element is not linked into this list");
        Cursor::new(self, Self::hook_ptr(elem))
    }

    /// Tries to place a cursor at `elem`.
    ///
    /// # Errors
    ///
    /// Returns `ListError::NotInList` if `elem` is not linked into this list.
    pub fn try_cursor_to(&self, elem: &T) -> Result<Cursor<'_, 'a, T>, ListError> {
        if !self.contains(elem) {
            return Err(ListError::NotInList);
        }
        Ok(Cursor::new(self, Self::hook_ptr(elem)))
    }

    /// Iterates from front to back.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, 'a, T> {
        Iter::new(self)
    }
}

impl<T: Linked> Default for List<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Linked> Drop for List<'_, T> {
    fn drop(&mut self) {
        let unlinked = self.clear();
        if unlinked > 0 {
            tracing::trace!(unlinked, "dropped list with linked elements");
        }
        // SAFETY: allocated in `new`, and no hook points at it after `clear`
        drop(unsafe { Box::from_raw(self.dummy.as_ptr()) });
    }
}

impl<'l, 'a, T: Linked> IntoIterator for &'l List<'a, T> {
    type Item = &'a T;
    type IntoIter = Iter<'l, 'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Linked + fmt::Debug> fmt::Debug for List<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
