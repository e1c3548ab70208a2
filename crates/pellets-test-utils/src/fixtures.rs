//! World and configuration fixtures.

use nalgebra::Vector2;

use pellets_core::config::SimConfig;
use pellets_physics::{Body, BodyId, BodyKind, PhysicsWorld, Rect, Shape};

/// Seeded default configuration for reproducible full-stack tests.
#[must_use]
pub fn test_config() -> SimConfig {
    SimConfig {
        seed: Some(42),
        ..SimConfig::default()
    }
}

/// Empty world with the given extent under standard test gravity.
#[must_use]
pub fn world_with_bounds(width: f64, height: f64) -> PhysicsWorld {
    PhysicsWorld::new(Rect::new(width, height), Vector2::new(0.0, -10.0))
}

/// Insert a unit-mass circular particle at rest.
pub fn drop_ball(world: &mut PhysicsWorld, x: f64, y: f64, radius: f64) -> BodyId {
    let id = world.alloc_id();
    world
        .add_body(Body::new_dynamic(
            id,
            BodyKind::Particle,
            Shape::circle(radius),
            Vector2::new(x, y),
            Vector2::zeros(),
            1.0,
        ))
        .expect("fresh id cannot collide")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
