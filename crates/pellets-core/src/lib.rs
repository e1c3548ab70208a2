// pellets-core: Config, errors, time, and bounded RNG for the pellets simulation.

pub mod config;
pub mod error;
pub mod rng;
pub mod time;

pub mod prelude {
    pub use crate::config::SimConfig;
    pub use crate::error::{ConfigError, RangeError};
    pub use crate::rng::RandomRange;
    pub use crate::time::{FixedStep, SimTime};
}
