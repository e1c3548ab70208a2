// pellets-physics: Bounded 2D rigid-body world for the pellets simulation.

pub mod body;
pub mod boundary;
pub mod shape;
pub mod world;

pub use body::{Body, BodyId, BodyKind, Motion};
pub use boundary::{Boundary, Edge, Rect};
pub use shape::Shape;
pub use world::{PhysicsWorld, WorldError};
