use std::cmp::min;
use std::ops::{Deref, DerefMut};

/// The single contiguous allocation backing a `SentVec`.
///
/// Every slot is default-constructed at allocation time, so slots in
/// `[len, capacity)` always hold a valid (if logically unused) value.
/// Resizing is allocate-copy-release: a fresh allocation, a plain clone
/// loop over the surviving prefix, and the old allocation dropped.
#[derive(Debug)]
pub(crate) struct Buffer<T> {
    slots: Box<[T]>,
}

impl<T: Default + Clone> Buffer<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Buffer {
            slots: alloc_slots(capacity),
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Reallocate to `new_capacity` slots, carrying over the first
    /// `min(live, new_capacity)` elements.
    ///
    /// Returns the number of elements carried over. When
    /// `new_capacity < live` the tail of the logical sequence is silently
    /// dropped; the caller owns that contract.
    pub(crate) fn reserve(&mut self, new_capacity: usize, live: usize) -> usize {
        let mut slots: Box<[T]> = alloc_slots(new_capacity);
        let carried = min(live, new_capacity);
        for (slot, value) in slots[..carried].iter_mut().zip(&self.slots[..carried]) {
            slot.clone_from(value);
        }
        self.slots = slots;
        carried
    }
}

fn alloc_slots<T: Default>(capacity: usize) -> Box<[T]> {
    (0..capacity).map(|_| T::default()).collect()
}

impl<T> Deref for Buffer<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.slots
    }
}

impl<T> DerefMut for Buffer<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocates_default_slots() {
        let buf: Buffer<i32> = Buffer::with_capacity(4);
        assert_eq!(buf.capacity(), 4);
        assert_eq!(&buf[..], &[0, 0, 0, 0]);
    }

    #[test]
    fn test_reserve_carries_live_prefix() {
        let mut buf: Buffer<i32> = Buffer::with_capacity(3);
        buf[0] = 7;
        buf[1] = 8;
        buf[2] = 9;

        let carried = buf.reserve(6, 2);
        assert_eq!(carried, 2);
        assert_eq!(buf.capacity(), 6);
        assert_eq!(&buf[..], &[7, 8, 0, 0, 0, 0]);
    }

    #[test]
    fn test_reserve_below_live_truncates() {
        let mut buf: Buffer<i32> = Buffer::with_capacity(4);
        for i in 0..4 {
            buf[i] = i as i32 + 1;
        }

        let carried = buf.reserve(2, 4);
        assert_eq!(carried, 2);
        assert_eq!(&buf[..], &[1, 2]);
    }

    #[test]
    fn test_zero_capacity() {
        let mut buf: Buffer<i32> = Buffer::with_capacity(0);
        assert_eq!(buf.capacity(), 0);
        assert_eq!(buf.reserve(1, 0), 0);
        assert_eq!(buf.capacity(), 1);
    }
}
