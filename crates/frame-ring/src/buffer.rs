//! Lossy Latest-Frame Ring Buffer
//!
//! The producer writes each frame into the slot under its write cursor, then
//! advances the cursor. The consumer jumps straight to the slot behind the
//! write cursor, i.e. the most recently completed frame, and pins it as its
//! read cursor. The write cursor always skips the pinned slot, so a frame the
//! consumer is looking at is never overwritten; anything the consumer did not
//! get to is simply overwritten later.
//!
//! # Synchronization
//!
//! Cursor bookkeeping is guarded by one lock shared by both sides and held
//! only for the O(1) index update. The frame transfer happens outside that
//! lock, through a per-slot lock that is never contended in correct SPSC use:
//! the producer only touches the write slot, the consumer only the read slot,
//! and the two cursors are always distinct. Because a slot is fully written
//! before the write cursor moves past it, and the consumer leaves with an
//! owned clone, a popped frame is never observed mid-write.
//!
//! # Threading contract
//!
//! At most one thread may call [`RingBuffer::push`] and at most one thread
//! may call [`RingBuffer::pop`] at any time. Use [`RingBuffer::split`] to have
//! the compiler enforce this.

use crate::config::RingConfig;
use crate::cursor::{self, Cursors, MIN_CAPACITY};
use crate::error::{Result, RingError};
use crate::stats::RingStats;
use crate::sync::{lock, AtomicUsize, Mutex, Ordering};
use crate::Frame;
use tracing::{debug, trace};

/// Default buffer capacity, the smallest ring that never blocks
pub const DEFAULT_CAPACITY: usize = MIN_CAPACITY;

/// Bookkeeping guarded by the cursor lock
#[derive(Debug)]
struct State {
    read: Option<usize>,
    pending: usize,
    pushed: u64,
    delivered: u64,
    skipped: u64,
}

impl State {
    const fn new() -> Self {
        Self {
            read: None,
            pending: 0,
            pushed: 0,
            delivered: 0,
            skipped: 0,
        }
    }
}

/// Lossy SPSC ring buffer that always pops the newest frame
pub struct RingBuffer<T = Frame> {
    /// Pre-allocated slots, one lock each
    slots: Box<[Mutex<Option<T>>]>,
    /// Slot the producer writes next. Only stored while `state` is held,
    /// so the consumer reads a value consistent with `state`.
    write: AtomicUsize,
    state: Mutex<State>,
}

impl<T> RingBuffer<T> {
    /// Create a new ring buffer with given capacity.
    ///
    /// Fails with [`RingError::InvalidCapacity`] if `capacity` is below 3:
    /// with fewer slots the cursors cannot always step around each other.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity < MIN_CAPACITY {
            return Err(RingError::InvalidCapacity {
                capacity,
                min: MIN_CAPACITY,
            });
        }

        Ok(Self::allocate(capacity))
    }

    /// Create a buffer with default capacity (3 slots)
    pub fn with_default_capacity() -> Self {
        Self::allocate(DEFAULT_CAPACITY)
    }

    /// Allocate slots for an already validated capacity
    fn allocate(capacity: usize) -> Self {
        debug_assert!(capacity >= MIN_CAPACITY);
        debug!("Created frame ring with {} slots", capacity);

        Self {
            slots: (0..capacity).map(|_| Mutex::new(None)).collect(),
            write: AtomicUsize::new(0),
            state: Mutex::new(State::new()),
        }
    }

    /// Create a buffer sized by configuration
    pub fn from_config(config: &RingConfig) -> Result<Self> {
        Self::new(config.capacity)
    }

    /// Store a frame, dropping whatever unread frame occupied its slot.
    ///
    /// Never blocks on the consumer and never fails. Must only be called
    /// from the single producer thread.
    pub fn push(&self, frame: T) {
        // Only the producer moves the write cursor, so this value is stable
        // until the cursor update below.
        let write = self.write.load(Ordering::Relaxed);

        // Replaced frame is dropped after the slot lock is released.
        let _replaced = {
            let mut slot = lock(&self.slots[write]);
            slot.replace(frame)
        };

        let mut state = lock(&self.state);
        let next = cursor::advance(write, state.read, self.slots.len());
        self.write.store(next, Ordering::Relaxed);
        state.pending += 1;
        state.pushed += 1;
    }

    /// Take the most recently completed frame, if any arrived since the last pop.
    ///
    /// Older unread frames are skipped. Returns `None` without touching any
    /// state when nothing new was pushed. Must only be called from the single
    /// consumer thread.
    pub fn pop(&self) -> Option<T>
    where
        T: Clone,
    {
        let read = {
            let mut state = lock(&self.state);
            if state.pending == 0 {
                return None;
            }

            let write = self.write.load(Ordering::Relaxed);
            let read = cursor::retreat(write, state.read, self.slots.len());
            let skipped = state.pending - 1;
            if skipped > 0 {
                trace!("Skipping {} superseded frames", skipped);
            }

            state.read = Some(read);
            state.skipped += skipped as u64;
            state.delivered += 1;
            state.pending = 0;
            read
        };

        lock(&self.slots[read]).clone()
    }

    /// Get the buffer capacity
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of pushes since the last successful pop
    pub fn pending(&self) -> usize {
        lock(&self.state).pending
    }

    /// True when a pop would return `None`
    pub fn is_empty(&self) -> bool {
        self.pending() == 0
    }

    /// Consistent snapshot of both cursors and the pending count
    pub fn cursors(&self) -> Cursors {
        let state = lock(&self.state);
        Cursors {
            write: self.write.load(Ordering::Relaxed),
            read: state.read,
            pending: state.pending,
        }
    }

    /// Delivery counters since construction
    pub fn stats(&self) -> RingStats {
        let state = lock(&self.state);
        RingStats {
            capacity: self.slots.len(),
            pushed: state.pushed,
            delivered: state.delivered,
            skipped: state.skipped,
            pending: state.pending as u64,
        }
    }
}

impl<T> Default for RingBuffer<T> {
    fn default() -> Self {
        Self::with_default_capacity()
    }
}

impl<T> std::fmt::Debug for RingBuffer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RingBuffer")
            .field("capacity", &self.capacity())
            .field("cursors", &self.cursors())
            .finish()
    }
}
