//! Builder pattern for constructing ring buffers.

use core::marker::PhantomData;

use crate::{RingBuffer, error::Result, ring::DEFAULT_LABEL};

/// Builder for constructing a [`RingBuffer`].
///
/// Created via [`RingBuffer::builder()`]. Configure options with chained
/// methods, then call [`.build()`](Self::build) to construct the ring.
///
/// # Example
///
/// ```
/// use sizeless_ring::{RingBuffer, RingError};
///
/// // Label shows up as the `ring` field of every log event.
/// let ring = RingBuffer::<u32>::builder().capacity(4).label("ingest").build()?;
/// assert_eq!(ring.capacity(), 4);
///
/// // Capacity is mandatory.
/// let missing = RingBuffer::<u32>::builder().build();
/// assert_eq!(missing.unwrap_err(), RingError::InvalidCapacity { capacity: 0 });
/// # Ok::<(), RingError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RingBufferBuilder<T> {
    capacity: usize,
    label: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> RingBufferBuilder<T> {
    pub(crate) fn new() -> Self {
        Self {
            capacity: 0,
            label: DEFAULT_LABEL,
            _marker: PhantomData,
        }
    }

    /// Set the number of slots. Must be at least 1.
    #[must_use]
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Set the name recorded on log events. Defaults to `"ring"`.
    #[must_use]
    pub fn label(mut self, label: &'static str) -> Self {
        self.label = label;
        self
    }

    /// Build the [`RingBuffer`].
    ///
    /// # Errors
    /// [`RingError::InvalidCapacity`](crate::RingError::InvalidCapacity) if
    /// no capacity (or zero) was configured.
    pub fn build(self) -> Result<RingBuffer<T>> {
        RingBuffer::with_label(self.capacity, self.label)
    }
}
