//! Lossy Latest-Frame Ring Buffer
//!
//! A fixed-capacity ring shared by one producer and one consumer exchanging
//! discrete byte frames. The producer never blocks: when the consumer falls
//! behind, unread frames are overwritten. The consumer always receives the
//! most recently completed frame and each frame at most once.
//!
//! ```
//! use frame_ring::{Frame, RingBuffer};
//!
//! let ring = RingBuffer::new(3).unwrap();
//! ring.push(Frame::from("A"));
//! ring.push(Frame::from("B"));
//! ring.push(Frame::from("C"));
//!
//! assert_eq!(ring.pop().unwrap(), "C");
//! assert!(ring.pop().is_none());
//! ```

mod buffer;
mod config;
mod cursor;
mod error;
mod frame;
mod split;
mod stats;
mod sync;

pub use buffer::{RingBuffer, DEFAULT_CAPACITY};
pub use config::{RingConfig, ENV_PREFIX};
pub use cursor::{advance, retreat, Cursors, MIN_CAPACITY};
pub use error::{Result, RingError};
pub use frame::Frame;
pub use split::{Consumer, Producer};
pub use stats::RingStats;
