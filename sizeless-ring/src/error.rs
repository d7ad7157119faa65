//! Error types for ring construction and insertion.

use snafu::Snafu;

/// Error raised by [`RingBuffer`](crate::RingBuffer) construction or enqueue.
///
/// Every variant is local to the failed call: no buffer is produced for
/// [`InvalidCapacity`](Self::InvalidCapacity), and the buffer is left
/// untouched for the other two.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub))]
pub enum RingError {
    /// Capacity below one slot.
    #[snafu(display("invalid capacity {capacity}: must be at least 1"))]
    InvalidCapacity {
        /// Requested capacity.
        capacity: usize,
    },

    /// An absent element was offered for insertion.
    #[snafu(display("cannot enqueue an absent element"))]
    InvalidElement,

    /// No free slot is available.
    #[snafu(display("queue is full ({capacity} slots)"))]
    QueueFull {
        /// Capacity of the rejecting buffer.
        capacity: usize,
    },
}

/// Result type for ring operations.
pub type Result<T, E = RingError> = core::result::Result<T, E>;
