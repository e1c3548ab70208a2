use serde::{Deserialize, Serialize};

/// Effects a scheduled action can fire against the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Effect {
    /// Drop one particle at a randomized x just above the top of the world.
    SpawnParticle,
}
