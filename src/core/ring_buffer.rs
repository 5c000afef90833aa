//! Array-backed ring buffer for O(1) deque operations with cache locality.
//!
//! This module provides a circular buffer sized once at construction, used as
//! the monotonic deque inside [`Enumerator`](super::enumerator::Enumerator).
//! Unlike `VecDeque`, the buffer never grows: the capacity is rounded up to a
//! power of two so that wraparound is a mask instead of a division.

use std::mem::MaybeUninit;

/// A fixed-capacity circular buffer with deque-like operations.
///
/// Restricted to `Copy` elements, so slots never need dropping and `clear`
/// is O(1).
///
/// # Panics
/// `push_back` panics if the buffer is full. Callers must ensure
/// elements are popped before exceeding capacity.
pub struct RingBuffer<T: Copy> {
    data: Box<[MaybeUninit<T>]>,
    mask: usize,
    head: usize,
    len: usize,
}

impl<T: Copy> RingBuffer<T> {
    /// Create a new empty ring buffer holding at least `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        let cap = capacity.max(1).next_power_of_two();
        let data = (0..cap).map(|_| MaybeUninit::uninit()).collect();
        Self {
            data,
            mask: cap - 1,
            head: 0,
            len: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Clears all elements from the buffer.
    #[inline]
    pub fn clear(&mut self) {
        self.head = 0;
        self.len = 0;
    }

    /// Returns a reference to the front element, or `None` if empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        if self.len == 0 {
            None
        } else {
            // SAFETY: head is initialized when len > 0
            Some(unsafe { self.data[self.head].assume_init_ref() })
        }
    }

    /// Returns a reference to the back element, or `None` if empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        if self.len == 0 {
            None
        } else {
            let idx = (self.head + self.len - 1) & self.mask;
            // SAFETY: slots head..head+len are initialized
            Some(unsafe { self.data[idx].assume_init_ref() })
        }
    }

    /// Adds an element to the back of the buffer.
    ///
    /// # Panics
    /// Panics if the buffer is full.
    #[inline]
    pub fn push_back(&mut self, value: T) {
        assert!(
            self.len < self.data.len(),
            "RingBuffer overflow: len={}, capacity={}",
            self.len,
            self.data.len()
        );
        let idx = (self.head + self.len) & self.mask;
        self.data[idx] = MaybeUninit::new(value);
        self.len += 1;
    }

    /// Removes and returns the front element, or `None` if empty.
    #[inline]
    pub fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            // SAFETY: head is initialized when len > 0
            let value = unsafe { self.data[self.head].assume_init() };
            self.head = (self.head + 1) & self.mask;
            self.len -= 1;
            Some(value)
        }
    }

    /// Removes and returns the back element, or `None` if empty.
    #[inline]
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            let idx = (self.head + self.len) & self.mask;
            // SAFETY: this slot was initialized before decrementing len
            Some(unsafe { self.data[idx].assume_init() })
        }
    }
}

impl<T: Copy> Clone for RingBuffer<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            mask: self.mask,
            head: self.head,
            len: self.len,
        }
    }
}
