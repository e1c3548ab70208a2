use std::fmt;

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::shape::Shape;

// ---------------------------------------------------------------------------
// BodyId
// ---------------------------------------------------------------------------

/// Unique body identifier, stable for the body's lifetime.
///
/// Allocated by [`PhysicsWorld`](crate::world::PhysicsWorld) in creation
/// order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct BodyId(pub u64);

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// BodyKind
// ---------------------------------------------------------------------------

/// Typed tag replacing the source scene's string-named nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyKind {
    /// Decorative scene shape with an attached physics body.
    Prop,
    /// Particle dropped by the spawner.
    Particle,
}

// ---------------------------------------------------------------------------
// Motion
// ---------------------------------------------------------------------------

/// Dynamics classification of a body.
///
/// Static bodies are volume-less collision edges: no mass, position fixed
/// at creation, velocity identically zero. Encoding that as a variant makes
/// "static body with nonzero velocity" unrepresentable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Motion {
    Static,
    Dynamic { velocity: Vector2<f64>, mass: f64 },
}

// ---------------------------------------------------------------------------
// Body
// ---------------------------------------------------------------------------

/// A physical entity: shape, dynamics classification, kinematic state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub id: BodyId,
    pub kind: BodyKind,
    pub shape: Shape,
    pub position: Vector2<f64>,
    pub motion: Motion,
}

impl Body {
    /// Dynamic body with the given initial velocity and mass (> 0).
    #[must_use]
    pub fn new_dynamic(
        id: BodyId,
        kind: BodyKind,
        shape: Shape,
        position: Vector2<f64>,
        velocity: Vector2<f64>,
        mass: f64,
    ) -> Self {
        debug_assert!(mass > 0.0 && mass.is_finite(), "dynamic body mass: {mass}");
        Self {
            id,
            kind,
            shape,
            position,
            motion: Motion::Dynamic { velocity, mass },
        }
    }

    /// Static body fixed at `position`.
    #[must_use]
    pub const fn new_static(
        id: BodyId,
        kind: BodyKind,
        shape: Shape,
        position: Vector2<f64>,
    ) -> Self {
        Self {
            id,
            kind,
            shape,
            position,
            motion: Motion::Static,
        }
    }

    /// Whether the body moves under simulated forces.
    #[must_use]
    pub const fn is_dynamic(&self) -> bool {
        matches!(self.motion, Motion::Dynamic { .. })
    }

    /// Current velocity; identically zero for static bodies.
    #[must_use]
    pub fn velocity(&self) -> Vector2<f64> {
        match self.motion {
            Motion::Static => Vector2::zeros(),
            Motion::Dynamic { velocity, .. } => velocity,
        }
    }

    /// Inverse mass; zero for static (infinite-mass) bodies.
    #[must_use]
    pub fn inv_mass(&self) -> f64 {
        match self.motion {
            Motion::Static => 0.0,
            Motion::Dynamic { mass, .. } => 1.0 / mass,
        }
    }

    /// Bounding-circle radius used for collision detection.
    #[must_use]
    pub fn bounding_radius(&self) -> f64 {
        self.shape.bounding_radius()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
