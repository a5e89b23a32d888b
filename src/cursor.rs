use crate::core::SentVec;
use crate::error::SentVecError;

/// A clamped position into a `SentVec`.
///
/// The position is clamped into `[0, owner.len()]` at construction; the
/// one-past-end position is the container's [`end`](SentVec::end). Stepping
/// never leaves that range. Dereferencing the one-past-end position (or any
/// stale position) resolves to the container's sentinel.
///
/// A cursor borrows its container shared, so many cursors may traverse one
/// container concurrently and loops terminate by comparing with `end()`:
///
/// ```
/// # use sentvec::SentVec;
/// let vec: SentVec<i32> = [1, 2, 3].into_iter().collect();
/// let mut cur = vec.begin();
/// let mut sum = 0;
/// while cur != vec.end() {
///     sum += *cur.get();
///     cur.advance();
/// }
/// assert_eq!(sum, 6);
/// ```
#[derive(Debug)]
pub struct Cursor<'a, T: Default + Clone> {
    owner: &'a SentVec<T>,
    position: isize,
}

// Manual impls: a cursor is copyable whatever the element type is, since it
// only holds a reference and a position.
impl<T: Default + Clone> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Default + Clone> Copy for Cursor<'_, T> {}

impl<'a, T: Default + Clone> Cursor<'a, T> {
    #[allow(clippy::cast_possible_wrap)]
    pub(crate) fn new(owner: &'a SentVec<T>, position: isize) -> Self {
        let position = owner.clamp_position(position) as isize;
        Cursor { owner, position }
    }

    /// Returns the element at the current position, or the container's
    /// sentinel if the position is not in `[0, len)`.
    #[must_use]
    pub fn get(&self) -> &'a T {
        self.owner.at(self.position)
    }

    /// Steps one position forward, stopping at the one-past-end position.
    #[allow(clippy::cast_possible_wrap)]
    pub fn advance(&mut self) {
        if self.position < self.owner.len() as isize {
            self.position += 1;
        }
    }

    /// Steps one position backward, stopping at position 0.
    pub fn retreat(&mut self) {
        if self.position > 0 {
            self.position -= 1;
        }
    }

    /// The raw stored position. May be stale relative to the owner's
    /// current length; dereferencing then yields the sentinel.
    #[must_use]
    pub fn position(&self) -> isize {
        self.position
    }
}

/// Two cursors are equal iff they reference the same container instance
/// and hold the same position.
impl<T: Default + Clone> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.owner, other.owner) && self.position == other.position
    }
}

impl<T: Default + Clone> Eq for Cursor<'_, T> {}

/// An editing cursor: a clamped position plus exclusive access to the
/// container, carrying the insert/remove operations.
///
/// Created by [`SentVec::cursor_mut`]. While it lives, no other cursor or
/// access to the container can exist; loop termination uses
/// [`at_end`](CursorMut::at_end) instead of comparison with `end()`.
#[derive(Debug)]
pub struct CursorMut<'a, T: Default + Clone> {
    owner: &'a mut SentVec<T>,
    position: isize,
}

impl<'a, T: Default + Clone> CursorMut<'a, T> {
    #[allow(clippy::cast_possible_wrap)]
    pub(crate) fn new(owner: &'a mut SentVec<T>, position: isize) -> Self {
        let position = owner.clamp_position(position) as isize;
        CursorMut { owner, position }
    }

    /// Returns the element at the current position, or the sentinel.
    #[must_use]
    pub fn get(&self) -> &T {
        self.owner.at(self.position)
    }

    /// Mutable form of [`get`](Self::get). Out of range this is a mutable
    /// borrow of the shared sentinel; writes through it are visible to
    /// every later out-of-range access on the container.
    #[must_use]
    pub fn get_mut(&mut self) -> &mut T {
        self.owner.at_mut(self.position)
    }

    /// Steps one position forward, stopping at the one-past-end position.
    #[allow(clippy::cast_possible_wrap)]
    pub fn advance(&mut self) {
        if self.position < self.owner.len() as isize {
            self.position += 1;
        }
    }

    /// Steps one position backward, stopping at position 0.
    pub fn retreat(&mut self) {
        if self.position > 0 {
            self.position -= 1;
        }
    }

    /// The raw stored position.
    #[must_use]
    pub fn position(&self) -> isize {
        self.position
    }

    /// True iff the cursor is at the one-past-end position.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn at_end(&self) -> bool {
        self.position == self.owner.len() as isize
    }

    /// Inserts `value` before the current position, then advances one
    /// position so the cursor ends up just past the inserted element.
    ///
    /// # Errors
    ///
    /// Returns `SentVecError::Empty` if the container is empty
    /// (see [`SentVec::insert_at`]).
    pub fn insert(&mut self, value: T) -> Result<(), SentVecError> {
        self.owner.insert_at(self.position, value)?;
        self.position += 1;
        Ok(())
    }

    /// Removes and returns the element at the current position. The
    /// position is unchanged and afterwards names the removed element's
    /// successor, or one-past-end if the last element was removed.
    ///
    /// # Errors
    ///
    /// Returns `SentVecError::Empty` if the container is empty, and
    /// `SentVecError::PositionOutOfBounds` if the cursor is at the
    /// one-past-end position.
    pub fn remove(&mut self) -> Result<T, SentVecError> {
        self.owner.remove_at(self.position)
    }
}
