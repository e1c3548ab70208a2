//! The tick driver.
//!
//! [`Simulation`] exclusively owns the world, the scheduler, the spawner,
//! and the RNG. Each [`tick`](Simulation::tick) advances the scheduler
//! first and steps the world second, strictly in that order; nothing else
//! holds a mutable reference across a tick boundary.

use pellets_actions::{Action, ActionScheduler, PendingId};
use pellets_core::config::SimConfig;
use pellets_core::rng::RandomRange;
use pellets_core::time::SimTime;
use pellets_physics::{Body, PhysicsWorld};

use crate::effect::Effect;
use crate::error::SimError;
use crate::spawner::ParticleSpawner;
use crate::stats::SimStats;

// ---------------------------------------------------------------------------
// Simulation
// ---------------------------------------------------------------------------

/// A composed scene being driven at a fixed timestep.
///
/// Built by [`SceneBuilder`](crate::builder::SceneBuilder).
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimConfig,
    world: PhysicsWorld,
    scheduler: ActionScheduler<Effect>,
    spawner: ParticleSpawner,
    rng: RandomRange,
    time: SimTime,
    stats: SimStats,
}

impl Simulation {
    /// Build a scene from a validated configuration with no extra props.
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        crate::builder::SceneBuilder::new().with_config(config).build()
    }

    pub(crate) fn from_parts(
        config: SimConfig,
        world: PhysicsWorld,
        scheduler: ActionScheduler<Effect>,
        spawner: ParticleSpawner,
        rng: RandomRange,
    ) -> Self {
        Self {
            config,
            world,
            scheduler,
            spawner,
            rng,
            time: SimTime::new(),
            stats: SimStats::new(),
        }
    }

    /// Execute one fixed tick: fire due effects, then step the world.
    pub fn tick(&mut self) -> Result<(), SimError> {
        let dt = self.config.timestep;
        for effect in self.scheduler.advance(dt) {
            self.apply(effect)?;
        }
        self.world.step(dt);
        self.time.advance_secs(dt);
        self.stats.ticks += 1;
        Ok(())
    }

    /// Execute `ticks` fixed ticks.
    pub fn run(&mut self, ticks: u64) -> Result<(), SimError> {
        for _ in 0..ticks {
            self.tick()?;
        }
        Ok(())
    }

    fn apply(&mut self, effect: Effect) -> Result<(), SimError> {
        match effect {
            Effect::SpawnParticle => {
                let bounds = self.world.bounds();
                self.spawner
                    .spawn_one_into(&mut self.world, bounds, &mut self.rng)?;
                self.stats.particles_spawned += 1;
            }
        }
        Ok(())
    }

    /// Register an extra action against this scene's scheduler.
    pub fn schedule(&mut self, action: Action<Effect>) -> PendingId {
        self.scheduler.schedule(action)
    }

    /// Cancel a pending action.
    pub fn cancel(&mut self, id: PendingId) -> bool {
        self.scheduler.cancel(id)
    }

    /// Whether every scheduled action (including the drop script) has
    /// finished.
    #[must_use]
    pub const fn script_done(&self) -> bool {
        self.scheduler.is_idle()
    }

    /// The world, read-only.
    #[must_use]
    pub const fn world(&self) -> &PhysicsWorld {
        &self.world
    }

    /// Read-only snapshot of the bodies in creation order, for renderers.
    pub fn bodies(&self) -> impl Iterator<Item = &Body> {
        self.world.bodies()
    }

    /// Elapsed simulation time.
    #[must_use]
    pub const fn time(&self) -> SimTime {
        self.time
    }

    /// Run statistics.
    #[must_use]
    pub const fn stats(&self) -> &SimStats {
        &self.stats
    }

    /// The configuration the scene was built from.
    #[must_use]
    pub const fn config(&self) -> &SimConfig {
        &self.config
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn one_per_second_config() -> SimConfig {
        SimConfig {
            timestep: 1.0,
            spawn_interval: 1.0,
            spawn_count: 5,
            seed: Some(42),
            ..SimConfig::default()
        }
    }

    #[test]
    fn tick_spawns_on_schedule() {
        let mut sim = Simulation::new(one_per_second_config()).unwrap();
        sim.tick().unwrap();
        assert_eq!(sim.stats().particles_spawned, 1);
        sim.run(4).unwrap();
        assert_eq!(sim.stats().particles_spawned, 5);
        assert!(sim.script_done());
    }

    #[test]
    fn no_spawns_after_script_completes() {
        let mut sim = Simulation::new(one_per_second_config()).unwrap();
        sim.run(20).unwrap();
        assert_eq!(sim.stats().particles_spawned, 5);
        assert_eq!(sim.world().len(), 5);
    }

    #[test]
    fn time_advances_with_ticks() {
        let mut sim = Simulation::new(one_per_second_config()).unwrap();
        sim.run(3).unwrap();
        assert_eq!(sim.time(), SimTime::from_secs(3.0));
        assert_eq!(sim.stats().ticks, 3);
    }

    #[test]
    fn extra_scheduled_action_fires() {
        let mut sim = Simulation::new(one_per_second_config()).unwrap();
        sim.schedule(Action::run(Effect::SpawnParticle));
        sim.tick().unwrap();
        // Drop script + extra action both fired this tick.
        assert_eq!(sim.stats().particles_spawned, 2);
    }

    #[test]
    fn cancelled_action_never_fires() {
        let mut sim = Simulation::new(one_per_second_config()).unwrap();
        let id = sim.schedule(Action::run(Effect::SpawnParticle));
        assert!(sim.cancel(id));
        sim.tick().unwrap();
        assert_eq!(sim.stats().particles_spawned, 1);
    }

    #[test]
    fn invalid_config_fails_at_build() {
        let config = SimConfig {
            particle_radius: -4.0,
            ..SimConfig::default()
        };
        assert!(matches!(Simulation::new(config), Err(SimError::Config(_))));
    }
}
