use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// Serde default functions
// ---------------------------------------------------------------------------

const fn default_timestep() -> f64 {
    1.0 / 60.0
}
const fn default_world_width() -> f64 {
    400.0
}
const fn default_world_height() -> f64 {
    320.0
}
const fn default_gravity() -> [f64; 2] {
    [0.0, -9.81]
}
const fn default_restitution() -> f64 {
    0.5
}
const fn default_particle_radius() -> f64 {
    4.0
}
const fn default_particle_mass() -> f64 {
    1.0
}
const fn default_spawn_interval() -> f64 {
    1.0
}
const fn default_spawn_count() -> u32 {
    100
}

// ---------------------------------------------------------------------------
// SimConfig
// ---------------------------------------------------------------------------

/// Main simulation configuration.
///
/// Every externally supplied parameter lives here; nothing is defaulted
/// in code paths a caller cannot override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Fixed simulation timestep in seconds (default: 1/60).
    #[serde(default = "default_timestep")]
    pub timestep: f64,

    /// World width in world units (default: 400).
    #[serde(default = "default_world_width")]
    pub world_width: f64,

    /// World height in world units (default: 320).
    #[serde(default = "default_world_height")]
    pub world_height: f64,

    /// Gravity vector [x, y] applied to dynamic bodies (default: [0, -9.81]).
    #[serde(default = "default_gravity")]
    pub gravity: [f64; 2],

    /// Linear drag coefficient scaling velocity toward zero (default: 0).
    #[serde(default)]
    pub drag: f64,

    /// Collision restitution in [0, 1]: 1 = elastic, 0 = fully inelastic
    /// (default: 0.5).
    #[serde(default = "default_restitution")]
    pub restitution: f64,

    /// Radius of spawned particles (default: 4).
    #[serde(default = "default_particle_radius")]
    pub particle_radius: f64,

    /// Mass of spawned particles in kilograms (default: 1).
    #[serde(default = "default_particle_mass")]
    pub particle_mass: f64,

    /// Seconds between scheduled particle spawns (default: 1).
    #[serde(default = "default_spawn_interval")]
    pub spawn_interval: f64,

    /// Total number of particles the drop script spawns (default: 100).
    #[serde(default = "default_spawn_count")]
    pub spawn_count: u32,

    /// Master random seed. `None` seeds from entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            timestep: default_timestep(),
            world_width: default_world_width(),
            world_height: default_world_height(),
            gravity: default_gravity(),
            drag: 0.0,
            restitution: default_restitution(),
            particle_radius: default_particle_radius(),
            particle_mass: default_particle_mass(),
            spawn_interval: default_spawn_interval(),
            spawn_count: default_spawn_count(),
            seed: None,
        }
    }
}

impl SimConfig {
    /// Validate configuration. Returns Err on invalid values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.timestep > 0.0 && self.timestep.is_finite()) {
            return Err(ConfigError::InvalidTimestep(self.timestep));
        }
        if !(self.world_width > 0.0 && self.world_height > 0.0)
            || !self.world_width.is_finite()
            || !self.world_height.is_finite()
        {
            return Err(ConfigError::InvalidWorldExtent {
                width: self.world_width,
                height: self.world_height,
            });
        }
        if !self.gravity.iter().all(|g| g.is_finite()) {
            return Err(ConfigError::invalid("gravity", "components must be finite"));
        }
        if !(self.drag >= 0.0 && self.drag.is_finite()) {
            return Err(ConfigError::invalid("drag", "must be >= 0"));
        }
        if !(0.0..=1.0).contains(&self.restitution) {
            return Err(ConfigError::invalid("restitution", "must be in [0, 1]"));
        }
        if !(self.particle_radius > 0.0 && self.particle_radius.is_finite()) {
            return Err(ConfigError::invalid("particle_radius", "must be > 0"));
        }
        if self.particle_radius * 2.0 > self.world_width.min(self.world_height) {
            return Err(ConfigError::invalid(
                "particle_radius",
                "must fit inside the world extent",
            ));
        }
        if !(self.particle_mass > 0.0 && self.particle_mass.is_finite()) {
            return Err(ConfigError::invalid("particle_mass", "must be > 0"));
        }
        if !(self.spawn_interval >= 0.0 && self.spawn_interval.is_finite()) {
            return Err(ConfigError::invalid("spawn_interval", "must be >= 0"));
        }
        Ok(())
    }

    /// Simulation rate in Hz.
    #[must_use]
    pub fn tick_hz(&self) -> f64 {
        1.0 / self.timestep
    }

    /// Load from TOML file.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
