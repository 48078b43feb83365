#![no_std]

//! `IntVec`: a growable, exclusively owned array of `i32`.
//!
//! `IntVec` keeps an explicit `(buffer, len)` pair where the buffer length is
//! the capacity. Growth follows a fixed, tested policy instead of whatever
//! the standard library's `Vec` happens to do: the first push allocates one
//! slot and every later growth doubles the capacity.
//!
//! This crate is `no_std` compatible; it needs `alloc` for the buffer.
//! The optional `std` feature only enables `std` in `thiserror` and `tracing`;
//! the crate itself behaves the same with or without it.
//!
//! # Performance Characteristics
//!
//! ## Time Complexity
//! - `push()`: amortized O(1); a push into a full buffer copies the live values once
//! - `pop()`, `clear()`, `truncate()`: O(1), nothing is freed
//! - `reserve()`: O(len) when it grows, O(1) otherwise (it never shrinks)
//! - `swap()`: O(1), only the buffer handles and lengths are exchanged
//! - `clone()`: O(len), the copy keeps the source capacity
//!
//! ## Invariants
//! - `len() <= capacity()`
//! - the vector owns an allocation if and only if `capacity() > 0`
//! - capacity never decreases, except by replacing the whole value
//!   (`take()`, assignment)
//!
//! ## Iterator Invalidation
//!
//! Reallocation moves every value. Iterators and references obtained before a
//! `push` past capacity, a growing `reserve` or `extend_from_slice` would
//! dangle; all of these take `&mut self`, so such code does not compile.
//!
//! # Error Handling
//!
//! Caller mistakes are never silently ignored. Each checked operation comes
//! in two flavors: the plain one panics with a diagnostic, the `try_` one
//! reports an [`IntVecError`].
//!
//! ```
//! # use intvec::{int_vec, IntVecError};
//! let mut values = int_vec![4, 5];
//! assert_eq!(values.try_get(2), Err(IntVecError::IndexOutOfBounds { index: 2, length: 2 }));
//! assert_eq!(values.pop(), 5);
//! assert_eq!(values.pop(), 4);
//! assert_eq!(values.try_pop(), Err(IntVecError::EmptyVector));
//! ```
//!
//! # Growth
//!
//! ```
//! # use intvec::IntVec;
//! let mut values = IntVec::new();
//! assert_eq!(values.capacity(), 0);
//!
//! for i in 0..5 {
//!     values.push(i);
//! }
//! assert_eq!(values.len(), 5);
//! assert_eq!(values.capacity(), 8); // 1 -> 2 -> 4 -> 8
//!
//! values.pop();
//! values.pop();
//! assert_eq!(values.as_slice(), &[0, 1, 2]);
//!
//! values.clear();
//! assert!(values.is_empty());
//! assert_eq!(values.capacity(), 8);
//! ```
//!
//! # Ownership
//!
//! Cloning copies the values; moving hands over the buffer.
//!
//! ```
//! # use intvec::int_vec;
//! let mut a = int_vec![1, 2, 3];
//! let mut b = a.clone();
//! b[0] = 100;
//! assert_eq!(a[0], 1);
//!
//! let moved = a.take();
//! assert_eq!(moved.len(), 3);
//! assert_eq!(a.len(), 0);
//! assert_eq!(a.capacity(), 0);
//!
//! b.swap(&mut a);
//! assert_eq!(a.as_slice(), &[100, 2, 3]);
//! assert!(b.is_empty());
//! ```
//!
//! # Iterator Support
//!
//! ```
//! # use intvec::int_vec;
//! let values = int_vec![10, 20, 30, 40];
//!
//! let mut iter = values.iter();
//! assert_eq!(iter.offset(2), Some(&30));
//! assert_eq!(iter.nth(1), Some(&20));
//! assert_eq!(iter.next_back(), Some(&40));
//! assert_eq!(iter.len(), 1);
//!
//! let total: i32 = values.iter().sum();
//! assert_eq!(total, 100);
//! ```

extern crate alloc;

mod core;
mod error;
mod iter;

// Re-export public types and traits
pub use crate::core::IntVec;
pub use error::IntVecError;
pub use iter::{IntoIter, Iter, IterMut};

/// Creates an [`IntVec`] holding the listed values, with capacity equal to
/// their count.
///
/// ```
/// # use intvec::int_vec;
/// let values = int_vec![3, 1, 4];
/// assert_eq!(values.capacity(), 3);
/// assert_eq!(int_vec![].capacity(), 0);
/// ```
#[macro_export]
macro_rules! int_vec {
    () => {
        $crate::IntVec::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::IntVec::from([$($value),+])
    };
}
