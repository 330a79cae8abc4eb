//! Frame ring configuration

use crate::cursor::MIN_CAPACITY;
use crate::error::{Result, RingError};
use crate::DEFAULT_CAPACITY;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Prefix for environment overrides, e.g. `FRAME_RING_CAPACITY=8`
pub const ENV_PREFIX: &str = "FRAME_RING";

/// Frame ring configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RingConfig {
    /// Number of frame slots
    pub capacity: usize,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl RingConfig {
    /// Load configuration from an optional file, then apply environment overrides.
    ///
    /// The file format is inferred from its extension (toml, yaml, json, ...).
    /// A missing file is not an error; defaults apply.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading frame ring config from {}", path.display());

        let settings = config::Config::builder()
            .add_source(config::File::from(path).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()?;

        let cfg: Self = settings.try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check that the configured ring can be built
    pub fn validate(&self) -> Result<()> {
        if self.capacity < MIN_CAPACITY {
            return Err(RingError::InvalidCapacity {
                capacity: self.capacity,
                min: MIN_CAPACITY,
            });
        }
        Ok(())
    }
}
