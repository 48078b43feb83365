//! The embeddable link node and the trait that ties it to its record.

use core::cell::Cell;
use core::fmt;
use core::ptr::NonNull;

type Link = Cell<Option<NonNull<ListHook>>>;

/// A link point embedded inside a larger record
///
/// Every hook belongs to exactly one ring: when unlinked, the ring is the
/// hook alone. An unlinked hook stores `None` instead of a pointer to
/// itself, so moving an unlinked hook (or the record around it) is fine.
/// A linked hook must stay where it is until it is unlinked.
///
/// All link state lives in `Cell`s: rings are rewired through shared
/// references, and hooks are neither `Send` nor `Sync`.
pub struct ListHook {
    prev: Link,
    next: Link,
    // Sentinel of the list this hook is linked into, `None` outside of lists
    owner: Link,
    sentinel: bool,
}

impl ListHook {
    /// Creates an unlinked hook.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            prev: Cell::new(None),
            next: Cell::new(None),
            owner: Cell::new(None),
            sentinel: false,
        }
    }

    pub(crate) const fn new_sentinel() -> Self {
        Self {
            prev: Cell::new(None),
            next: Cell::new(None),
            owner: Cell::new(None),
            sentinel: true,
        }
    }

    /// Returns `true` if the hook shares its ring with at least one other hook.
    #[must_use]
    pub fn is_linked(&self) -> bool {
        self.next.get().is_some()
    }

    /// Removes the hook from its ring, leaving it alone in a ring of one.
    ///
    /// Unlinking an unlinked hook does nothing.
    pub fn unlink(&self) {
        // SAFETY: a linked hook's neighbors are alive and in place
        unsafe { Self::unlink_raw(NonNull::from(self)) }
    }

    /// Moves `other` out of whatever ring holds it and inserts it right
    /// after `self`.
    ///
    /// Linking a hook after itself unlinks it.
    ///
    /// # Safety
    ///
    /// Neither hook may be moved or dropped while linked, except that
    /// dropping a hook unlinks it first. If `self` belongs to a
    /// [`List`](crate::List), the record embedding `other` must outlive
    /// that list.
    pub unsafe fn link_after(&self, other: &ListHook) {
        // SAFETY: forwarded to the caller
        unsafe { Self::splice_after(NonNull::from(self), NonNull::from(other)) }
    }

    /// # Safety
    ///
    /// `node` must point to a live hook.
    pub(crate) unsafe fn next_of(node: NonNull<ListHook>) -> NonNull<ListHook> {
        unsafe { node.as_ref() }.next.get().unwrap_or(node)
    }

    /// # Safety
    ///
    /// `node` must point to a live hook.
    pub(crate) unsafe fn prev_of(node: NonNull<ListHook>) -> NonNull<ListHook> {
        unsafe { node.as_ref() }.prev.get().unwrap_or(node)
    }

    /// # Safety
    ///
    /// `node` must point to a live hook.
    pub(crate) unsafe fn owner_of(node: NonNull<ListHook>) -> Option<NonNull<ListHook>> {
        let hook = unsafe { node.as_ref() };
        if hook.sentinel {
            Some(node)
        } else {
            hook.owner.get()
        }
    }

    unsafe fn set_next(node: NonNull<ListHook>, next: NonNull<ListHook>) {
        let link = if next == node { None } else { Some(next) };
        unsafe { node.as_ref() }.next.set(link);
    }

    unsafe fn set_prev(node: NonNull<ListHook>, prev: NonNull<ListHook>) {
        let link = if prev == node { None } else { Some(prev) };
        unsafe { node.as_ref() }.prev.set(link);
    }

    /// # Safety
    ///
    /// `node` and its ring neighbors must be live hooks.
    pub(crate) unsafe fn unlink_raw(node: NonNull<ListHook>) {
        unsafe {
            let prev = Self::prev_of(node);
            let next = Self::next_of(node);
            Self::set_next(prev, next);
            Self::set_prev(next, prev);

            let hook = node.as_ref();
            hook.prev.set(None);
            hook.next.set(None);
            if !hook.sentinel {
                hook.owner.set(None);
            }
        }
    }

    /// # Safety
    ///
    /// `at`, `node` and all their ring neighbors must be live hooks.
    pub(crate) unsafe fn splice_after(at: NonNull<ListHook>, node: NonNull<ListHook>) {
        unsafe {
            Self::unlink_raw(node);
            if at == node {
                return;
            }
            let next = Self::next_of(at);
            Self::set_prev(node, at);
            Self::set_next(node, next);
            Self::set_prev(next, node);
            Self::set_next(at, node);
            node.as_ref().owner.set(Self::owner_of(at));
        }
    }
}

impl Default for ListHook {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ListHook {
    fn drop(&mut self) {
        self.unlink();
    }
}

impl fmt::Debug for ListHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListHook")
            .field("linked", &self.is_linked())
            .field("sentinel", &self.sentinel)
            .finish()
    }
}

/// Records that embed a [`ListHook`] and can be threaded into a [`List`](crate::List)
///
/// Use [`impl_linked!`](crate::impl_linked) rather than implementing this by
/// hand when the hook is a plain field.
///
/// # Safety
///
/// `hook_of` and `from_hook` must be exact inverses: `hook_of` returns the
/// address of one specific `ListHook` field of the record, and `from_hook`
/// maps that address back to the record. Pointer provenance must be kept,
/// so derive the field pointer with `addr_of!`, never through a reference.
pub unsafe trait Linked: Sized {
    /// Address of the hook embedded in the record at `this`.
    ///
    /// # Safety
    ///
    /// `this` must point to a live record.
    unsafe fn hook_of(this: NonNull<Self>) -> NonNull<ListHook>;

    /// Address of the record that embeds `hook`.
    ///
    /// # Safety
    ///
    /// `hook` must have been returned by `hook_of` for a live record.
    unsafe fn from_hook(hook: NonNull<ListHook>) -> NonNull<Self>;

    /// The embedded hook.
    fn hook(&self) -> &ListHook {
        // SAFETY: `self` is a live record
        unsafe { Self::hook_of(NonNull::from(self)).as_ref() }
    }
}

/// Implements [`Linked`] for a record type with a `ListHook` field.
///
/// ```
/// use hooklist::{impl_linked, ListHook};
///
/// struct Task {
///     id: u32,
///     hook: ListHook,
/// }
///
/// impl_linked!(Task, hook);
/// ```
#[macro_export]
macro_rules! impl_linked {
    ($record:ty, $field:ident) => {
        // SAFETY: `hook_of` and `from_hook` use the offset of the same field
        unsafe impl $crate::Linked for $record {
            unsafe fn hook_of(
                this: ::core::ptr::NonNull<Self>,
            ) -> ::core::ptr::NonNull<$crate::ListHook> {
                unsafe {
                    ::core::ptr::NonNull::new_unchecked(::core::ptr::addr_of_mut!(
                        (*this.as_ptr()).$field
                    ))
                }
            }

            unsafe fn from_hook(
                hook: ::core::ptr::NonNull<$crate::ListHook>,
            ) -> ::core::ptr::NonNull<Self> {
                let offset = ::core::mem::offset_of!($record, $field);
                unsafe {
                    ::core::ptr::NonNull::new_unchecked(
                        hook.as_ptr().cast::<u8>().sub(offset).cast::<Self>(),
                    )
                }
            }
        }
    };
}
