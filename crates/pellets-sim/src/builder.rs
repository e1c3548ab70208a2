//! Scene builder for composing a ready-to-run [`Simulation`].
//!
//! # Example
//!
//! ```
//! use pellets_sim::SceneBuilder;
//!
//! let sim = SceneBuilder::new().build().unwrap();
//! assert!(sim.world().is_empty());
//! ```

use nalgebra::Vector2;

use pellets_actions::ActionScheduler;
use pellets_core::config::SimConfig;
use pellets_core::error::ConfigError;
use pellets_core::rng::RandomRange;
use pellets_physics::{Body, BodyKind, PhysicsWorld, Rect, Shape};

use crate::error::SimError;
use crate::runner::Simulation;
use crate::spawner::{ParticleSpawner, particle_drop};

// ---------------------------------------------------------------------------
// PropEntry
// ---------------------------------------------------------------------------

/// A decorative shape to drop into the scene before the script runs.
#[derive(Debug, Clone)]
struct PropEntry {
    shape: Shape,
    position: Vector2<f64>,
    mass: f64,
}

// ---------------------------------------------------------------------------
// SceneBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for a complete scene: configuration, decorative props,
/// and the scripted particle drop.
#[derive(Debug, Clone)]
pub struct SceneBuilder {
    config: SimConfig,
    props: Vec<PropEntry>,
}

impl Default for SceneBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneBuilder {
    /// Create a builder with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: SimConfig::default(),
            props: Vec::new(),
        }
    }

    /// Replace the configuration.
    #[must_use]
    pub fn with_config(mut self, config: SimConfig) -> Self {
        self.config = config;
        self
    }

    /// Override the random seed (convenience for the common case).
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Add a dynamic decorative prop at `position`.
    #[must_use]
    pub fn with_prop(mut self, shape: Shape, position: Vector2<f64>, mass: f64) -> Self {
        self.props.push(PropEntry {
            shape,
            position,
            mass,
        });
        self
    }

    /// Validate the configuration and assemble the scene.
    pub fn build(self) -> Result<Simulation, SimError> {
        self.config.validate()?;
        for prop in &self.props {
            if !(prop.mass > 0.0 && prop.mass.is_finite()) {
                return Err(ConfigError::invalid("prop mass", "must be > 0").into());
            }
        }

        let bounds = Rect::new(self.config.world_width, self.config.world_height);
        let gravity = Vector2::new(self.config.gravity[0], self.config.gravity[1]);
        let mut world = PhysicsWorld::new(bounds, gravity)
            .with_drag(self.config.drag)
            .with_restitution(self.config.restitution);

        for prop in self.props {
            let id = world.alloc_id();
            world.add_body(Body::new_dynamic(
                id,
                BodyKind::Prop,
                prop.shape,
                prop.position,
                Vector2::zeros(),
                prop.mass,
            ))?;
        }

        let mut scheduler = ActionScheduler::new();
        scheduler.schedule(particle_drop(
            self.config.spawn_interval,
            self.config.spawn_count,
        ));

        let spawner = ParticleSpawner::new(self.config.particle_radius, self.config.particle_mass);
        let rng = match self.config.seed {
            Some(seed) => RandomRange::from_seed(seed),
            None => RandomRange::from_entropy(),
        };

        Ok(Simulation::from_parts(
            self.config,
            world,
            scheduler,
            spawner,
            rng,
        ))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
