//! Frame Ring Error Types

use thiserror::Error;

/// Errors produced by the frame ring
#[derive(Debug, Error)]
pub enum RingError {
    /// Capacity too small for the cursors to stay on distinct slots
    #[error("Invalid capacity {capacity}: ring needs at least {min} slots")]
    InvalidCapacity { capacity: usize, min: usize },

    /// Typed frame could not be encoded or decoded
    #[error("Frame codec error: {0}")]
    Codec(#[from] postcard::Error),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, RingError>;
