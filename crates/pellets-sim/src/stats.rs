use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// SimStats
// ---------------------------------------------------------------------------

/// Cumulative run statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SimStats {
    /// Total fixed ticks executed.
    pub ticks: u64,
    /// Particles spawned by the drop script so far.
    pub particles_spawned: u32,
}

impl SimStats {
    /// Create empty stats.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ticks: 0,
            particles_spawned: 0,
        }
    }

    /// Reset all statistics.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
