use thiserror::Error;

/// Configuration errors.
///
/// Invalid configuration fails fast at construction; values are never
/// silently clamped.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid timestep: {0} (must be > 0)")]
    InvalidTimestep(f64),

    #[error("Invalid world extent: {width}x{height} (both must be > 0)")]
    InvalidWorldExtent { width: f64, height: f64 },

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl ConfigError {
    /// Shorthand for an [`ConfigError::InvalidValue`] with owned strings.
    pub fn invalid(field: &str, message: &str) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Inverted bounds passed to [`RandomRange::next`](crate::rng::RandomRange::next).
///
/// Copy + static layout for cheap propagation; callers must normalize
/// bounds before sampling.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("Inverted random range: min {min} > max {max}")]
pub struct RangeError {
    pub min: f64,
    pub max: f64,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
