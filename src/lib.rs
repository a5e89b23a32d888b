//! `SentVec`: a growable contiguous vector with sentinel-on-out-of-range
//! access and cursor-based editing.
//!
//! `SentVec` owns a single contiguous allocation and tracks a logical length
//! against an allocated capacity (doubling growth, initial capacity 15). Two
//! policies distinguish it from the standard `Vec`:
//!
//! - **Out-of-range access never fails.** Positions are signed, and any
//!   access outside `[0, len)` returns a reference to the container's
//!   *sentinel*: one default-constructed element living as long as the
//!   container. There is no panic and no `Option` on the access path.
//! - **Plain copy loops.** Growth, shrink, and shift are simple O(n) clone
//!   loops over default-initialized slots, which is why the element type
//!   must be `Default + Clone`.
//!
//! # Basic usage
//!
//! ```
//! use sentvec::SentVec;
//!
//! let mut vec = SentVec::new();
//! vec.push(10);
//! vec.push(20);
//! vec.push(30);
//!
//! assert_eq!(vec.len(), 3);
//! assert_eq!(*vec.at(1), 20);
//! assert_eq!(vec.pop(), Some(30));
//! ```
//!
//! # The sentinel contract
//!
//! The sentinel is returned by *mutable* reference too, so writing through
//! an out-of-range access changes the value that every later out-of-range
//! access on the same container observes. This aliasing is deliberate and
//! part of the public contract:
//!
//! ```
//! use sentvec::SentVec;
//!
//! let mut vec: SentVec<i32> = SentVec::new();
//! vec.push(1);
//!
//! // Out-of-range access is not an error: it resolves to the sentinel.
//! assert_eq!(*vec.at(5), 0);
//! assert_eq!(*vec.at(-1), 0);
//!
//! // The sentinel is one shared, mutable cell per container.
//! *vec.at_mut(5) = 42;
//! assert_eq!(*vec.at(-1), 42);
//! ```
//!
//! # Cursors
//!
//! A [`Cursor`] is a clamped position into a specific container: it steps
//! forward and backward within `[0, len]`, dereferences (falling back to the
//! sentinel at the one-past-end position), and compares equal only to
//! cursors of the same container at the same position. A [`CursorMut`]
//! additionally edits the container at its position:
//!
//! ```
//! use sentvec::SentVec;
//!
//! let mut vec: SentVec<i32> = [10, 20, 30].into_iter().collect();
//!
//! let mut cur = vec.cursor_mut(1);
//! cur.insert(99).unwrap();
//! assert_eq!(vec.as_slice(), &[10, 99, 20, 30]);
//!
//! let mut cur = vec.cursor_mut(0);
//! let removed = cur.remove().unwrap();
//! assert_eq!(removed, 10);
//! assert_eq!(vec.as_slice(), &[99, 20, 30]);
//! ```
//!
//! # Errors
//!
//! The only reported failures are the structural ones with no sensible
//! sentinel fallback: pop/insert/erase on an empty container and erase at a
//! position with no live element. These return [`SentVecError`] instead of
//! touching memory out of bounds.
//!
//! # Concurrency
//!
//! Single-threaded by design. Cursors borrow their container, so the borrow
//! checker enforces what the design otherwise only documents: a cursor
//! cannot outlive or concurrently mutate its container.

mod buffer;
mod core;
mod cursor;
mod error;
mod iter;

pub use crate::core::SentVec;
pub use crate::cursor::{Cursor, CursorMut};
pub use crate::error::SentVecError;
pub use crate::iter::Iter;
