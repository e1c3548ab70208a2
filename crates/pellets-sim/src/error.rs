use thiserror::Error;

use pellets_core::error::{ConfigError, RangeError};
use pellets_physics::WorldError;

/// Top-level error type for pellets-sim.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("World error: {0}")]
    World(#[from] WorldError),

    #[error("Random range error: {0}")]
    Range(#[from] RangeError),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
