//! Delivery statistics

use serde::{Deserialize, Serialize};

/// Counters describing what happened to every pushed frame.
///
/// Each push ends up in exactly one bucket, so
/// `pushed == delivered + skipped + pending` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RingStats {
    /// Number of slots in the ring
    pub capacity: usize,
    /// Total frames pushed
    pub pushed: u64,
    /// Frames handed to the consumer
    pub delivered: u64,
    /// Frames superseded by a newer one before any pop returned them
    pub skipped: u64,
    /// Frames pushed since the last successful pop
    pub pending: u64,
}

impl RingStats {
    /// Fraction of pushed frames the consumer never saw (0.0 to 1.0)
    pub fn drop_ratio(&self) -> f64 {
        if self.pushed == 0 {
            return 0.0;
        }
        self.skipped as f64 / self.pushed as f64
    }
}
