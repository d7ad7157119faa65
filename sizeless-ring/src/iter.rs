//! Iterators for `RingBuffer`.
//!
//! The occupied range `[head, tail]` is at most two contiguous runs of the
//! slot store: `head..` up to the end, then `..=tail` after a wrap. The
//! borrowing iterators walk those two runs in order.

use core::{iter::FusedIterator, ops::Range, slice};

use crate::{cursor::Cursors, ring::RingBuffer};

/// Slot ranges covering the occupied region, front run first.
fn occupied_runs(cursors: Option<Cursors>, capacity: usize) -> (Range<usize>, Range<usize>) {
    match cursors {
        None => (0..0, 0..0),
        Some(c) if c.tail >= c.head => (c.head..c.tail + 1, 0..0),
        Some(c) => (c.head..capacity, 0..c.tail + 1),
    }
}

/// Immutable iterator, front to back.
pub struct Iter<'a, T> {
    front: slice::Iter<'a, Option<T>>,
    back: slice::Iter<'a, Option<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(ring: &'a RingBuffer<T>) -> Self {
        let (front, back) = occupied_runs(ring.cursors, ring.capacity());
        Self {
            front: ring.slots[front].iter(),
            back: ring.slots[back].iter(),
            remaining: ring.len(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.front.next().or_else(|| self.back.next())?;
        self.remaining -= 1;
        slot.as_ref()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let slot = self.back.next_back().or_else(|| self.front.next_back())?;
        self.remaining -= 1;
        slot.as_ref()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            front: self.front.clone(),
            back: self.back.clone(),
            remaining: self.remaining,
        }
    }
}

/// Mutable iterator, front to back.
///
/// Cursors and occupancy are untouched; only element values can change.
pub struct IterMut<'a, T> {
    front: slice::IterMut<'a, Option<T>>,
    back: slice::IterMut<'a, Option<T>>,
    remaining: usize,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(ring: &'a mut RingBuffer<T>) -> Self {
        let remaining = ring.len();
        let (front, back) = occupied_runs(ring.cursors, ring.capacity());
        // The wrapped run always lies before the front run.
        let (low, high) = ring.slots.split_at_mut(front.start);
        Self {
            front: high[..front.len()].iter_mut(),
            back: low[back].iter_mut(),
            remaining,
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.front.next().or_else(|| self.back.next())?;
        self.remaining -= 1;
        slot.as_mut()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let slot = self.back.next_back().or_else(|| self.front.next_back())?;
        self.remaining -= 1;
        slot.as_mut()
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator; dequeues front to back.
pub struct IntoIter<T> {
    ring: RingBuffer<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.ring.dequeue()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.ring.len();
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for RingBuffer<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { ring: self }
    }
}

impl<'a, T> IntoIterator for &'a RingBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        Iter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a mut RingBuffer<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IterMut::new(self)
    }
}
