//! Fixed-capacity FIFO ring buffer without an element count.
//!
//! [`RingBuffer`] keeps its occupancy implicit in a pair of cursors: an
//! unset pair means empty, a set pair `(head, tail)` means the inclusive
//! circular range `[head, tail]` is occupied. Nothing is ever overwritten;
//! a full buffer refuses new elements until one is dequeued.
//!
//! # Example
//!
//! ```
//! use sizeless_ring::{RingBuffer, RingError};
//!
//! let mut ring = RingBuffer::new(2)?;
//! ring.enqueue(1)?;
//! ring.enqueue(2)?;
//! assert_eq!(ring.enqueue(3), Err(RingError::QueueFull { capacity: 2 }));
//!
//! assert_eq!(ring.dequeue(), Some(1));
//! ring.enqueue(3)?;
//! assert_eq!(ring.iter().copied().collect::<Vec<_>>(), [2, 3]);
//! # Ok::<(), RingError>(())
//! ```
//!
//! # Features
//!
//! - `std` (default): `std::error::Error` for [`RingError`], std-backed tracing.
//! - (none): `no_std` + `alloc`.

#![no_std]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod builder;
mod cursor;
mod error;
mod iter;
mod read;
mod ring;
mod traits;

#[cfg(test)]
mod tests;

pub use builder::RingBufferBuilder;
pub use error::{Result, RingError};
pub use iter::{IntoIter, Iter, IterMut};
pub use ring::{Drain, RingBuffer};
pub use traits::{RingConsumer, RingInfo, RingProducer, RingTrait};
