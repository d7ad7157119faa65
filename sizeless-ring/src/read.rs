//! Read accessors for `RingBuffer`.
//!
//! None of these move a cursor or change slot occupancy.

use crate::{
    iter::{Iter, IterMut},
    ring::RingBuffer,
};

impl<T> RingBuffer<T> {
    /// Peek at the front (oldest) element.
    #[inline]
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        let cursors = self.cursors?;
        self.slots[cursors.head].as_ref()
    }

    /// Peek at the back (newest) element.
    #[inline]
    #[must_use]
    pub fn peek_back(&self) -> Option<&T> {
        let cursors = self.cursors?;
        self.slots[cursors.tail].as_ref()
    }

    /// Get element by position (0 = front).
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        let cursors = self.cursors?;
        let capacity = self.capacity();
        if index >= cursors.len(capacity) {
            return None;
        }
        self.slots[cursors.slot(index, capacity)].as_ref()
    }

    /// Iterate front to back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Iterate mutably, front to back.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }
}
