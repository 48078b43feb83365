#![no_std]

//! `hooklist`: an intrusive circular doubly-linked list.
//!
//! Records carry their own link node, a [`ListHook`], and a [`List`] threads
//! them into a ring around a sentinel hook. The list never allocates per
//! element and never owns or drops the records it links.
//!
//! This crate is `no_std` compatible; it needs `alloc` for the sentinel only.
//! The optional `std` feature only enables `std` in `thiserror` and `tracing`;
//! the crate itself behaves the same with or without it.
//!
//! # Performance Characteristics
//!
//! ## Time Complexity
//! - `push_back()`, `push_front()`, `pop_*()`, `remove()`: O(1)
//! - `contains()`, `cursor_to()`: O(1), every hook knows which list holds it
//! - `len()`: O(n), the list keeps no counter
//! - `clear()` and dropping the list: O(n)
//!
//! ## Invariants
//! - every hook sits in exactly one ring; an unlinked hook is a ring of one
//! - traversing `len() + 1` steps from the end position in either direction
//!   returns to the end position
//! - a record is linked into at most one list; pushing it into a list moves
//!   it out of the previous one
//!
//! # Ownership
//!
//! Records are borrowed for the list's `'a`, so they outlive the list.
//! Dropping the list unlinks whatever is still in it and leaves the records
//! in place:
//!
//! ```
//! use hooklist::{impl_linked, List, ListHook};
//!
//! struct Job {
//!     id: u32,
//!     hook: ListHook,
//! }
//! impl_linked!(Job, hook);
//!
//! let a = Job { id: 1, hook: ListHook::new() };
//! let b = Job { id: 2, hook: ListHook::new() };
//! let c = Job { id: 3, hook: ListHook::new() };
//!
//! let list = List::new();
//! list.push_back(&a);
//! list.push_back(&b);
//! list.push_back(&c);
//! assert_eq!(list.iter().map(|job| job.id).collect::<Vec<_>>(), [1, 2, 3]);
//!
//! assert_eq!(list.pop_front().id, 1);
//! b.hook.unlink();
//! assert_eq!(list.iter().map(|job| job.id).collect::<Vec<_>>(), [3]);
//!
//! drop(list);
//! assert!(!c.hook.is_linked());
//! assert_eq!(c.id, 3);
//! ```
//!
//! # Cursors
//!
//! A [`Cursor`] stays valid while other elements come and go. The end
//! position sits between the back and the front, so stepping wraps:
//!
//! ```
//! # use hooklist::{impl_linked, List, ListHook};
//! # struct Job { id: u32, hook: ListHook }
//! # impl_linked!(Job, hook);
//! let jobs: Vec<Job> = (1..=3).map(|id| Job { id, hook: ListHook::new() }).collect();
//! let list = List::new();
//! for job in &jobs {
//!     list.push_back(job);
//! }
//!
//! let mut cursor = list.cursor_to(&jobs[2]);
//! list.remove(&jobs[1]);
//! assert_eq!(cursor.peek_prev().map(|job| job.id), Some(1));
//!
//! cursor.move_next();
//! assert!(cursor.is_end());
//! cursor.move_next();
//! assert_eq!(cursor.current().map(|job| job.id), Some(1));
//! ```
//!
//! # Error Handling
//!
//! Caller mistakes panic with a diagnostic; each checked operation also has
//! a `try_` twin that reports a [`ListError`].
//!
//! ```
//! # use hooklist::{impl_linked, List, ListError, ListHook};
//! # struct Job { id: u32, hook: ListHook }
//! # impl_linked!(Job, hook);
//! let job = Job { id: 7, hook: ListHook::new() };
//! let list = List::new();
//! assert_eq!(list.try_pop_back().err(), Some(ListError::Empty));
//! assert_eq!(list.try_cursor_to(&job).err(), Some(ListError::NotInList));
//!
//! list.push_back(&job);
//! let mut cursor = list.cursor_front();
//! list.remove(&job);
//! assert_eq!(cursor.try_move_next(), Err(ListError::Detached));
//! ```

extern crate alloc;

mod cursor;
mod error;
mod hook;
mod list;

// Re-export public types and traits
pub use cursor::{Cursor, Iter};
pub use error::ListError;
pub use hook::{Linked, ListHook};
pub use list::List;
