//! Shared fixtures for pellets tests.

pub mod fixtures;
pub mod rng;

pub use fixtures::{drop_ball, test_config, world_with_bounds};
pub use rng::seeded_range;
