//! Walk a small ring through fill, rejection, wrap and drain.
//!
//! ```sh
//! RUST_LOG=sizeless_ring=trace cargo run -p sizeless-ring --example queue
//! ```

use sizeless_ring::{RingBuffer, RingError};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), RingError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut ring = RingBuffer::builder().capacity(3).label("jobs").build()?;

    for job in ["fetch", "parse", "index"] {
        ring.enqueue(job)?;
    }
    info!(len = ring.len(), full = ring.is_full(), "filled");

    if let Err(err) = ring.enqueue("publish") {
        info!(%err, "refused while full");
    }

    let done = ring.dequeue();
    info!(?done, front = ?ring.peek(), "dequeued one");

    // The freed slot is at the front of the store; the tail wraps into it.
    ring.enqueue("publish")?;
    info!(items = ?ring, "wrapped");

    for job in ring.drain() {
        info!(job, "drained");
    }
    info!(empty = ring.is_empty(), "finished");

    Ok(())
}
