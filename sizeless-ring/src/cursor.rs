//! Head/tail cursor pair.
//!
//! The pair is stored as `Option<Cursors>` by the ring: `None` is the
//! unset sentinel for both cursors at once, so a state with one cursor set
//! and the other unset cannot be built.

/// Inclusive circular range `[head, tail]` of occupied slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Cursors {
    pub(crate) head: usize,
    pub(crate) tail: usize,
}

impl Cursors {
    /// Cursors of a buffer holding exactly one element in slot 0.
    pub(crate) const ORIGIN: Self = Self { head: 0, tail: 0 };

    /// Index following `index`, wrapping at `capacity`.
    #[inline]
    pub(crate) const fn advance(index: usize, capacity: usize) -> usize {
        let next = index + 1;
        if next == capacity { 0 } else { next }
    }

    /// Number of occupied slots (always at least one).
    #[inline]
    pub(crate) const fn len(self, capacity: usize) -> usize {
        if self.tail >= self.head {
            self.tail - self.head + 1
        } else {
            capacity - self.head + self.tail + 1
        }
    }

    /// True when `head` and `tail` denote the same slot.
    #[inline]
    pub(crate) const fn is_single(self) -> bool {
        self.head == self.tail
    }

    /// Slot index of the element `offset` positions behind the head.
    ///
    /// Caller guarantees `offset < self.len(capacity)`.
    #[inline]
    pub(crate) const fn slot(self, offset: usize, capacity: usize) -> usize {
        let to_end = capacity - self.head;
        if offset < to_end {
            self.head + offset
        } else {
            offset - to_end
        }
    }

    /// Tail slot after one more enqueue.
    #[inline]
    pub(crate) const fn next_tail(self, capacity: usize) -> usize {
        Self::advance(self.tail, capacity)
    }

    /// Cursors after the head element is removed, or `None` if it was the last.
    #[inline]
    pub(crate) const fn pop_front(self, capacity: usize) -> Option<Self> {
        if self.is_single() {
            None
        } else {
            Some(Self {
                head: Self::advance(self.head, capacity),
                tail: self.tail,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Cursors;

    #[test]
    fn advance_wraps_at_capacity() {
        assert_eq!(Cursors::advance(0, 1), 0);
        assert_eq!(Cursors::advance(0, 3), 1);
        assert_eq!(Cursors::advance(2, 3), 0);
    }

    #[test]
    fn len_counts_inclusive_range() {
        assert_eq!(Cursors::ORIGIN.len(4), 1);
        assert_eq!(Cursors { head: 1, tail: 3 }.len(4), 3);
        // wrapped: slots 3, 0, 1
        assert_eq!(Cursors { head: 3, tail: 1 }.len(4), 3);
        // full, wrapped
        assert_eq!(Cursors { head: 2, tail: 1 }.len(4), 4);
    }

    #[test]
    fn slot_wraps_past_end() {
        let c = Cursors { head: 2, tail: 0 };
        assert_eq!(c.slot(0, 3), 2);
        assert_eq!(c.slot(1, 3), 0);
    }

    #[test]
    fn pop_front_resets_on_last_element() {
        assert_eq!(Cursors::ORIGIN.pop_front(4), None);
        assert_eq!(
            Cursors { head: 3, tail: 0 }.pop_front(4),
            Some(Cursors { head: 0, tail: 0 })
        );
    }
}
