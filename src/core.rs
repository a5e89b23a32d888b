use std::cmp::min;
use std::ops::{Index, IndexMut};

use crate::buffer::Buffer;
use crate::cursor::{Cursor, CursorMut};
use crate::error::SentVecError;
use crate::iter::Iter;

const INITIAL_CAPACITY: usize = 15;

/// A growable contiguous vector with sentinel-on-out-of-range access.
///
/// Positions are signed; any access outside `[0, len)` resolves to the
/// container's sentinel, a single default-constructed `T` that lives as
/// long as the container. See the crate docs for the aliasing contract.
#[derive(Debug)]
pub struct SentVec<T: Default + Clone> {
    pub(crate) buf: Buffer<T>,
    pub(crate) len: usize,
    sentinel: T,
}

impl<T: Default + Clone> SentVec<T> {
    /// Creates an empty container with the default pre-allocated capacity (15).
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    /// Creates an empty container with the given pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        SentVec {
            buf: Buffer::with_capacity(capacity),
            len: 0,
            sentinel: T::default(),
        }
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
        self.buf.capacity()
    }

    /// The one bounds check shared by every access path: maps a signed
    /// position onto a live slot index, or `None` for the sentinel.
    fn slot(&self, position: isize) -> Option<usize> {
        let idx = usize::try_from(position).ok()?;
        (idx < self.len).then_some(idx)
    }

    /// Clamp a requested position into `[0, len]`, the valid cursor range.
    pub(crate) fn clamp_position(&self, position: isize) -> usize {
        usize::try_from(position).map_or(0, |idx| min(idx, self.len))
    }

    /// Returns the element at `position`, or the sentinel if `position`
    /// is outside `[0, len)`.
    ///
    /// This never fails: out-of-range access is a silent condition, not an
    /// error. The returned sentinel is the same cell for every out-of-range
    /// access on this container.
    #[must_use]
    pub fn at(&self, position: isize) -> &T {
        match self.slot(position) {
            Some(idx) => &self.buf[idx],
            None => &self.sentinel,
        }
    }

    /// Mutable form of [`at`](Self::at).
    ///
    /// Writing through an out-of-range position mutates the shared sentinel:
    /// every later out-of-range access on this container observes the
    /// written value. This aliasing is part of the contract.
    #[must_use]
    pub fn at_mut(&mut self, position: isize) -> &mut T {
        match self.slot(position) {
            Some(idx) => &mut self.buf[idx],
            None => &mut self.sentinel,
        }
    }

    /// Appends `value`, doubling the capacity first when full.
    ///
    /// Amortized O(1); O(n) on a growth step.
    pub fn push(&mut self, value: T) {
        if self.len == self.capacity() {
            self.grow();
        }
        self.buf[self.len] = value;
        self.len += 1;
    }

    /// Removes and returns the last element.
    ///
    /// Returns `None` if the container is empty. The vacated slot is
    /// overwritten with a default value; capacity never shrinks.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(std::mem::take(&mut self.buf[self.len]))
    }

    /// Tries to remove and return the last element.
    ///
    /// # Errors
    ///
    /// Returns `SentVecError::Empty` if the container is empty.
    pub fn try_pop(&mut self) -> Result<T, SentVecError> {
        self.pop().ok_or(SentVecError::Empty { operation: "pop" })
    }

    /// Forgets all elements without releasing the buffer.
    ///
    /// Prior values remain physically present in the allocation but are no
    /// longer reachable through the public API (indexed access past the new
    /// length resolves to the sentinel).
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Reallocates to exactly `new_capacity` slots.
    ///
    /// When `new_capacity < len()` only the first `new_capacity` elements
    /// survive and the length is clamped to match; the tail is silently
    /// dropped. That contract is the caller's to respect.
    pub fn reserve(&mut self, new_capacity: usize) {
        self.len = self.buf.reserve(new_capacity, self.len);
    }

    fn grow(&mut self) {
        let new_capacity = (self.capacity() * 2).max(1);
        self.buf.reserve(new_capacity, self.len);
    }

    /// Inserts `value` before `position`, shifting later elements one slot
    /// right. The position is clamped into `[0, len]` first.
    ///
    /// # Errors
    ///
    /// Returns `SentVecError::Empty` if the container is empty: insertion
    /// relies on a live last element to seed the shift, so the empty case is
    /// a contract violation (use [`push`](Self::push) instead).
    pub fn insert_at(&mut self, position: isize, value: T) -> Result<(), SentVecError> {
        if self.len == 0 {
            return Err(SentVecError::Empty {
                operation: "insert",
            });
        }
        let idx = self.clamp_position(position);
        if self.len == self.capacity() {
            self.grow();
        }
        let mut i = self.len;
        while i > idx {
            self.buf[i] = self.buf[i - 1].clone();
            i -= 1;
        }
        self.buf[idx] = value;
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the element at `position`, shifting later
    /// elements one slot left.
    ///
    /// # Errors
    ///
    /// Returns `SentVecError::Empty` if the container is empty, and
    /// `SentVecError::PositionOutOfBounds` if `position` does not name a
    /// live element (the one-past-end position included).
    pub fn remove_at(&mut self, position: isize) -> Result<T, SentVecError> {
        if self.len == 0 {
            return Err(SentVecError::Empty { operation: "erase" });
        }
        let idx = self
            .slot(position)
            .ok_or(SentVecError::PositionOutOfBounds {
                position,
                length: self.len,
            })?;
        let removed = std::mem::take(&mut self.buf[idx]);
        for i in idx..self.len - 1 {
            self.buf[i] = self.buf[i + 1].clone();
        }
        self.buf[self.len - 1] = T::default();
        self.len -= 1;
        Ok(removed)
    }

    /// Returns a cursor at position 0.
    #[must_use]
    pub fn begin(&self) -> Cursor<'_, T> {
        self.cursor(0)
    }

    /// Returns a cursor at the one-past-end position.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn end(&self) -> Cursor<'_, T> {
        self.cursor(self.len as isize)
    }

    /// Returns a cursor at `position`, clamped into `[0, len]`.
    #[must_use]
    pub fn cursor(&self, position: isize) -> Cursor<'_, T> {
        Cursor::new(self, position)
    }

    /// Returns an editing cursor at `position`, clamped into `[0, len]`.
    ///
    /// The editing cursor borrows the container exclusively and carries the
    /// insert/remove operations.
    #[must_use]
    pub fn cursor_mut(&mut self, position: isize) -> CursorMut<'_, T> {
        CursorMut::new(self, position)
    }

    /// Returns an iterator over the live elements.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// The live prefix of the buffer as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.buf[..self.len]
    }

    /// Mutable form of [`as_slice`](Self::as_slice).
    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.len;
        &mut self.buf[..len]
    }
}

impl<T: Default + Clone> Default for SentVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Default + Clone> Clone for SentVec<T> {
    /// Deep copy: a freshly sized buffer of the same capacity, exactly
    /// `len` elements copied over, and a fresh default sentinel (sentinel
    /// corruption does not propagate to copies).
    fn clone(&self) -> Self {
        let mut buf: Buffer<T> = Buffer::with_capacity(self.capacity());
        for (slot, value) in buf[..self.len].iter_mut().zip(self.as_slice()) {
            slot.clone_from(value);
        }
        SentVec {
            buf,
            len: self.len,
            sentinel: T::default(),
        }
    }
}

impl<T: Default + Clone + PartialEq> PartialEq for SentVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Default + Clone + Eq> Eq for SentVec<T> {}

impl<T: Default + Clone> FromIterator<T> for SentVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Self::new();
        for value in iter {
            vec.push(value);
        }
        vec
    }
}

/// Indexed access with the same contract as [`SentVec::at`]: out-of-range
/// positions resolve to the sentinel instead of panicking.
impl<T: Default + Clone> Index<isize> for SentVec<T> {
    type Output = T;

    fn index(&self, position: isize) -> &T {
        self.at(position)
    }
}

impl<T: Default + Clone> IndexMut<isize> for SentVec<T> {
    fn index_mut(&mut self, position: isize) -> &mut T {
        self.at_mut(position)
    }
}
