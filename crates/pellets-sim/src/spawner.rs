//! Particle spawning policy and the scripted drop composition.

use nalgebra::Vector2;

use pellets_actions::Action;
use pellets_core::rng::RandomRange;
use pellets_physics::{Body, BodyId, BodyKind, PhysicsWorld, Rect, Shape};

use crate::effect::Effect;
use crate::error::SimError;

// ---------------------------------------------------------------------------
// ParticleSpawner
// ---------------------------------------------------------------------------

/// Creates one particle per scheduled tick with randomized placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleSpawner {
    radius: f64,
    mass: f64,
}

impl ParticleSpawner {
    /// Spawner for particles of the given radius and mass.
    #[must_use]
    pub const fn new(radius: f64, mass: f64) -> Self {
        Self { radius, mass }
    }

    /// Particle radius.
    #[must_use]
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// Create one dynamic circular particle just above the top of the
    /// visible area, at a uniformly random x, with zero initial velocity,
    /// and insert it into the world.
    ///
    /// Cannot fail under a validated configuration: the sampling range and
    /// the body parameters are both known good.
    pub fn spawn_one_into(
        &self,
        world: &mut PhysicsWorld,
        bounds: Rect,
        rng: &mut RandomRange,
    ) -> Result<BodyId, SimError> {
        let x = rng.next(0.0, bounds.width)?;
        let y = bounds.height - self.radius;
        let id = world.alloc_id();
        let body = Body::new_dynamic(
            id,
            BodyKind::Particle,
            Shape::circle(self.radius),
            Vector2::new(x, y),
            Vector2::zeros(),
            self.mass,
        );
        Ok(world.add_body(body)?)
    }
}

// ---------------------------------------------------------------------------
// Drop script
// ---------------------------------------------------------------------------

/// The scripted drop: `count` particles, one every `interval` seconds.
///
/// Builds `Repeat(Sequence([Run(SpawnParticle), Wait(interval)]), count)`.
#[must_use]
pub fn particle_drop(interval: f64, count: u32) -> Action<Effect> {
    Action::repeat(
        Action::sequence(vec![
            Action::run(Effect::SpawnParticle),
            Action::wait(interval),
        ]),
        count,
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn test_world() -> PhysicsWorld {
        PhysicsWorld::new(Rect::new(400.0, 320.0), Vector2::new(0.0, -10.0))
    }

    #[test]
    fn spawned_particle_starts_just_below_the_top() {
        let mut world = test_world();
        let mut rng = RandomRange::from_seed(42);
        let spawner = ParticleSpawner::new(4.0, 1.0);
        let bounds = world.bounds();
        let id = spawner
            .spawn_one_into(&mut world, bounds, &mut rng)
            .unwrap();
        let body = world.get(id).unwrap();
        assert_eq!(body.position.y, 320.0 - 4.0);
        assert!((0.0..400.0).contains(&body.position.x));
        assert_eq!(body.velocity(), Vector2::zeros());
        assert_eq!(body.kind, BodyKind::Particle);
        assert!(body.is_dynamic());
    }

    #[test]
    fn spawns_get_fresh_ids() {
        let mut world = test_world();
        let mut rng = RandomRange::from_seed(0);
        let spawner = ParticleSpawner::new(4.0, 1.0);
        let bounds = world.bounds();
        let a = spawner
            .spawn_one_into(&mut world, bounds, &mut rng)
            .unwrap();
        let b = spawner
            .spawn_one_into(&mut world, bounds, &mut rng)
            .unwrap();
        assert_ne!(a, b);
        assert_eq!(world.len(), 2);
    }

    #[test]
    fn drop_script_duration_is_interval_times_count() {
        let script = particle_drop(1.0, 100);
        assert!((script.duration() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn drop_script_with_zero_count_is_a_noop() {
        let script = particle_drop(1.0, 0);
        assert_eq!(script.duration(), 0.0);
    }
}
