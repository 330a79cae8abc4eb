//! Owned producer and consumer halves of a frame ring.
//!
//! Splitting moves the ring behind an `Arc` shared by exactly two handles.
//! Neither handle is `Clone` and both operations take `&mut self`, so the
//! single-producer single-consumer contract is checked by the compiler.
//!
//! ```
//! use frame_ring::{Frame, RingBuffer};
//!
//! let (mut tx, mut rx) = RingBuffer::new(3).unwrap().split();
//!
//! tx.push(Frame::from("A"));
//! tx.push(Frame::from("B"));
//!
//! assert_eq!(rx.pop().unwrap(), "B");
//! assert!(rx.pop().is_none());
//! ```

use crate::buffer::RingBuffer;
use crate::cursor::Cursors;
use crate::stats::RingStats;
use crate::sync::Arc;
use crate::Frame;
use tracing::debug;

impl<T> RingBuffer<T> {
    /// Split the ring into its producer and consumer halves
    pub fn split(self) -> (Producer<T>, Consumer<T>) {
        debug!("Splitting frame ring with {} slots", self.capacity());
        let ring = Arc::new(self);
        (
            Producer {
                ring: Arc::clone(&ring),
            },
            Consumer { ring },
        )
    }
}

/// Writing half of a split frame ring
pub struct Producer<T = Frame> {
    ring: Arc<RingBuffer<T>>,
}

impl<T> Producer<T> {
    /// Store a frame, overwriting the oldest unread slot if needed.
    ///
    /// Succeeds even after the consumer is dropped; the frame is simply
    /// never read.
    #[inline]
    pub fn push(&mut self, frame: T) {
        self.ring.push(frame);
    }

    /// False once the consumer half has been dropped
    pub fn is_consumer_alive(&self) -> bool {
        Arc::strong_count(&self.ring) > 1
    }

    /// Get the buffer capacity
    pub fn capacity(&self) -> usize {
        self.ring.capacity()
    }

    /// Delivery counters shared with the consumer
    pub fn stats(&self) -> RingStats {
        self.ring.stats()
    }
}

/// Reading half of a split frame ring
pub struct Consumer<T = Frame> {
    ring: Arc<RingBuffer<T>>,
}

impl<T: Clone> Consumer<T> {
    /// Take the newest frame pushed since the last pop.
    ///
    /// Keeps returning the last unread frame after the producer is dropped,
    /// then `None`.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.ring.pop()
    }
}

impl<T> Consumer<T> {
    /// False once the producer half has been dropped
    pub fn is_producer_alive(&self) -> bool {
        Arc::strong_count(&self.ring) > 1
    }

    /// Get the buffer capacity
    pub fn capacity(&self) -> usize {
        self.ring.capacity()
    }

    /// Number of pushes since the last successful pop
    pub fn pending(&self) -> usize {
        self.ring.pending()
    }

    /// Consistent snapshot of both cursors and the pending count
    pub fn cursors(&self) -> Cursors {
        self.ring.cursors()
    }

    /// Delivery counters shared with the producer
    pub fn stats(&self) -> RingStats {
        self.ring.stats()
    }
}

impl<T> std::fmt::Debug for Producer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Producer").field("ring", &self.ring).finish()
    }
}

impl<T> std::fmt::Debug for Consumer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Consumer").field("ring", &self.ring).finish()
    }
}
