//! Fixed-capacity FIFO ring buffer with cursor-derived occupancy.

use alloc::boxed::Box;
use core::{fmt, iter::FusedIterator};

use tracing::{debug, trace};

use crate::{
    builder::RingBufferBuilder,
    cursor::Cursors,
    error::{InvalidCapacitySnafu, InvalidElementSnafu, QueueFullSnafu, Result},
    traits::{RingConsumer, RingInfo, RingProducer},
};

/// Label used in log events when none is configured.
pub(crate) const DEFAULT_LABEL: &str = "ring";

/// Fixed-capacity FIFO queue over a single contiguous slot store.
///
/// No element count is stored. The ring is empty when its cursors are
/// unset; otherwise the occupied slots are exactly the circular range
/// `[head, tail]`, and both the length and fullness are derived from it.
///
/// A full ring refuses new elements; the oldest element is only ever
/// removed by [`dequeue`](Self::dequeue) (or [`clear`](Self::clear) /
/// [`drain`](Self::drain)).
#[derive(Clone)]
pub struct RingBuffer<T> {
    pub(crate) slots: Box<[Option<T>]>,
    pub(crate) cursors: Option<Cursors>,
    label: &'static str,
}

impl<T> RingBuffer<T> {
    /// Create a builder for configuring a [`RingBuffer`].
    ///
    /// # Example
    ///
    /// ```
    /// use sizeless_ring::RingBuffer;
    ///
    /// let ring = RingBuffer::<u64>::builder()
    ///     .capacity(8)
    ///     .label("telemetry")
    ///     .build()?;
    /// assert_eq!(ring.label(), "telemetry");
    /// # Ok::<(), sizeless_ring::RingError>(())
    /// ```
    #[must_use]
    pub fn builder() -> RingBufferBuilder<T> {
        RingBufferBuilder::new()
    }

    /// Create an empty ring with `capacity` slots.
    ///
    /// # Errors
    /// [`RingError::InvalidCapacity`](crate::RingError::InvalidCapacity) if
    /// `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_label(capacity, DEFAULT_LABEL)
    }

    pub(crate) fn with_label(capacity: usize, label: &'static str) -> Result<Self> {
        if capacity == 0 {
            debug!(ring = label, capacity, "rejected ring capacity");
            return InvalidCapacitySnafu { capacity }.fail();
        }

        Ok(Self {
            slots: core::iter::repeat_with(|| None).take(capacity).collect(),
            cursors: None,
            label,
        })
    }

    /// Append `element` at the tail.
    ///
    /// # Errors
    /// [`RingError::QueueFull`](crate::RingError::QueueFull) if no slot is
    /// free. The ring is unchanged and `element` is dropped; use
    /// [`RingProducer::try_push`] to get it back instead.
    pub fn enqueue(&mut self, element: T) -> Result<()> {
        let slot = self.claim_tail()?;
        self.store(slot, element);
        Ok(())
    }

    /// Append an element that may be absent.
    ///
    /// `None` is refused before fullness is considered; `Some` behaves as
    /// [`enqueue`](Self::enqueue).
    ///
    /// # Errors
    /// [`RingError::InvalidElement`](crate::RingError::InvalidElement) for
    /// `None`, [`RingError::QueueFull`](crate::RingError::QueueFull) if no
    /// slot is free. The ring is unchanged in both cases.
    pub fn enqueue_nullable(&mut self, element: Option<T>) -> Result<()> {
        let Some(element) = element else {
            debug!(ring = self.label, "enqueue rejected: absent element");
            return InvalidElementSnafu.fail();
        };
        self.enqueue(element)
    }

    /// Remove and return the front element, or `None` if empty.
    #[must_use = "dequeue removes the element; use `peek` to look without removing"]
    pub fn dequeue(&mut self) -> Option<T> {
        let cursors = self.cursors?;
        let element = self.slots[cursors.head].take();
        debug_assert!(element.is_some(), "head slot must be occupied");

        self.cursors = cursors.pop_front(self.capacity());
        if self.cursors.is_none() {
            trace!(ring = self.label, "ring drained to empty");
        }
        element
    }

    /// Number of elements in the ring.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cursors.map_or(0, |c| c.len(self.capacity()))
    }

    /// True if the cursors are unset.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cursors.is_none()
    }

    /// True if every slot is occupied.
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        let full = self.len() == self.capacity();
        debug_assert_eq!(full, self.slots.iter().all(Option::is_some));
        full
    }

    /// Number of slots, fixed at construction.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of free slots.
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.capacity() - self.len()
    }

    /// Name attached to this ring's log events.
    #[inline]
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Drop every element and unset the cursors.
    pub fn clear(&mut self) {
        if self.cursors.take().is_some() {
            self.slots.iter_mut().for_each(|slot| *slot = None);
            trace!(ring = self.label, "ring cleared");
        }
    }

    /// Remove all elements front to back, returning an iterator.
    ///
    /// Elements the iterator has not yielded when it is dropped are
    /// removed anyway.
    #[inline]
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain { ring: self }
    }

    /// Reserve the slot for the next element and move the tail onto it.
    ///
    /// Cursors are only touched on success.
    fn claim_tail(&mut self) -> Result<usize> {
        let capacity = self.capacity();

        let Some(cursors) = self.cursors else {
            trace!(ring = self.label, "ring became non-empty");
            self.cursors = Some(Cursors::ORIGIN);
            return Ok(Cursors::ORIGIN.tail);
        };

        if self.is_full() {
            debug!(ring = self.label, capacity, "enqueue rejected: ring is full");
            return QueueFullSnafu { capacity }.fail();
        }

        let next = cursors.next_tail(capacity);
        if next == cursors.head {
            debug!(
                ring = self.label,
                capacity,
                head = cursors.head,
                "enqueue rejected: tail would overrun head"
            );
            return QueueFullSnafu { capacity }.fail();
        }

        self.cursors = Some(Cursors { tail: next, ..cursors });
        Ok(next)
    }

    #[inline]
    fn store(&mut self, slot: usize, element: T) {
        debug_assert!(self.slots[slot].is_none(), "tail slot must be free");
        self.slots[slot] = Some(element);
    }
}

/// Draining iterator over a [`RingBuffer`].
pub struct Drain<'a, T> {
    ring: &'a mut RingBuffer<T>,
}

impl<T> Iterator for Drain<'_, T> {
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

impl<T> ExactSizeIterator for Drain<'_, T> {}
impl<T> FusedIterator for Drain<'_, T> {}

impl<T> Drop for Drain<'_, T> {
    fn drop(&mut self) {
        while self.ring.dequeue().is_some() {}
    }
}

impl<T: fmt::Debug> fmt::Debug for RingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Items<'a, T>(&'a RingBuffer<T>);

        impl<T: fmt::Debug> fmt::Debug for Items<'_, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_list().entries(self.0.iter()).finish()
            }
        }

        f.debug_struct("RingBuffer")
            .field("label", &self.label)
            .field("capacity", &self.capacity())
            .field("items", &Items(self))
            .finish()
    }
}

impl<T> RingInfo for RingBuffer<T> {
    #[inline]
    fn len(&self) -> usize {
        RingBuffer::len(self)
    }

    #[inline]
    fn capacity(&self) -> usize {
        RingBuffer::capacity(self)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        RingBuffer::is_empty(self)
    }

    #[inline]
    fn is_full(&self) -> bool {
        RingBuffer::is_full(self)
    }
}

impl<T> RingProducer<T> for RingBuffer<T> {
    #[inline]
    fn try_push(&mut self, item: T) -> core::result::Result<(), T> {
        match self.claim_tail() {
            Ok(slot) => {
                self.store(slot, item);
                Ok(())
            }
            Err(_) => Err(item),
        }
    }
}

impl<T> RingConsumer<T> for RingBuffer<T> {
    #[inline]
    fn try_pop(&mut self) -> Option<T> {
        self.dequeue()
    }

    #[inline]
    fn peek(&self) -> Option<&T> {
        RingBuffer::peek(self)
    }
}
