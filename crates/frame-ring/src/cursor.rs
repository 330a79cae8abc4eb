//! Cursor arithmetic for the frame ring.
//!
//! The producer and consumer cursors must never land on the same slot. Both
//! moves are pure functions of the cursor being moved, the cursor it must
//! avoid, and the capacity, so they are tested here without any locking.
//!
//! With at least [`MIN_CAPACITY`] slots a single extra step always clears
//! the collision: the avoided slot is the one just stepped onto, so the next
//! one over is neither it nor the starting slot.

use serde::{Deserialize, Serialize};

/// Smallest capacity for which both cursors can always move without blocking
pub const MIN_CAPACITY: usize = 3;

/// Step forward one slot, stepping once more if that lands on `avoid`.
///
/// `index` must not equal `avoid` and `capacity` must be at least
/// [`MIN_CAPACITY`].
#[inline]
pub fn advance(index: usize, avoid: Option<usize>, capacity: usize) -> usize {
    debug_assert!(capacity >= MIN_CAPACITY);
    debug_assert!(avoid != Some(index));

    let mut next = (index + 1) % capacity;
    if Some(next) == avoid {
        next = (next + 1) % capacity;
    }
    debug_assert!(Some(next) != avoid);
    next
}

/// Step backward one slot, stepping once more if that lands on `avoid`.
///
/// Same preconditions as [`advance`].
#[inline]
pub fn retreat(index: usize, avoid: Option<usize>, capacity: usize) -> usize {
    debug_assert!(capacity >= MIN_CAPACITY);
    debug_assert!(avoid != Some(index));

    let mut prev = (index + capacity - 1) % capacity;
    if Some(prev) == avoid {
        prev = (prev + capacity - 1) % capacity;
    }
    debug_assert!(Some(prev) != avoid);
    prev
}

/// Snapshot of the ring's bookkeeping, taken under the cursor lock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursors {
    /// Slot the producer writes next
    pub write: usize,
    /// Slot the consumer last read, `None` before the first successful pop
    pub read: Option<usize>,
    /// Pushes completed since the last successful pop
    pub pending: usize,
}

impl Cursors {
    #[cfg(test)]
    pub(crate) const fn new() -> Self {
        Self {
            write: 0,
            read: None,
            pending: 0,
        }
    }

    /// True while the two cursors point at different slots
    pub fn is_disjoint(&self) -> bool {
        self.read != Some(self.write)
    }
}
