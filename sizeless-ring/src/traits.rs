//! Shared vocabulary for bounded FIFO rings.

/// Occupancy of a bounded ring.
pub trait RingInfo {
    /// Number of elements currently held.
    fn len(&self) -> usize;

    /// Fixed number of slots.
    fn capacity(&self) -> usize;

    /// `true` when nothing is held.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `true` when no slot is free.
    fn is_full(&self) -> bool {
        self.len() >= self.capacity()
    }
}

/// Tail side of a ring: appends elements.
///
/// Implementations never overwrite: a full ring refuses the element.
/// See [`RingBuffer`](crate::RingBuffer).
pub trait RingProducer<T>: RingInfo {
    /// Append `item` at the tail.
    ///
    /// # Errors
    /// Hands `item` back as `Err(item)` when no slot is free.
    fn try_push(&mut self, item: T) -> Result<(), T>;
}

/// Head side of a ring: removes or inspects the oldest element.
///
/// See [`RingBuffer`](crate::RingBuffer).
pub trait RingConsumer<T>: RingInfo {
    /// Remove the oldest element, `None` if the ring is empty.
    #[must_use]
    fn try_pop(&mut self) -> Option<T>;

    /// Oldest element without removing it, `None` if the ring is empty.
    #[must_use]
    fn peek(&self) -> Option<&T>;
}

/// Both ends of a ring.
///
/// Blanket-implemented for every [`RingProducer`] + [`RingConsumer`].
pub trait RingTrait<T>: RingProducer<T> + RingConsumer<T> {}

impl<T, R: RingProducer<T> + RingConsumer<T>> RingTrait<T> for R {}
