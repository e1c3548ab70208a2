// pellets-actions: Declarative timed action tree and scheduler.

pub mod action;
pub mod scheduler;

pub use action::Action;
pub use scheduler::{ActionScheduler, PendingId};
