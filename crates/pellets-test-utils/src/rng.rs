//! Deterministic RNG utilities for reproducible tests.

use pellets_core::rng::RandomRange;

/// Create a deterministic [`RandomRange`] from a seed.
///
/// All test randomization should go through this to ensure reproducibility.
#[must_use]
pub fn seeded_range(seed: u64) -> RandomRange {
    RandomRange::from_seed(seed)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
