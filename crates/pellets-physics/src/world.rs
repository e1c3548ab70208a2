//! The bounded rigid-body world.
//!
//! [`PhysicsWorld`] owns the boundary and every body, advances the
//! simulation with semi-implicit Euler, and resolves collisions. `step` is
//! a pure function of current state and `dt`: no hidden randomness, and
//! bodies are always visited in creation order.

use nalgebra::Vector2;
use thiserror::Error;

use crate::body::{Body, BodyId, Motion};
use crate::boundary::{Boundary, Rect};

// ---------------------------------------------------------------------------
// WorldError
// ---------------------------------------------------------------------------

/// World mutation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WorldError {
    /// Id collision on insert. Ids are allocated internally, so this marks
    /// a programming error: fatal in debug builds, the insert is rejected
    /// (never overwritten) in release builds.
    #[error("Duplicate body id: {0}")]
    DuplicateId(BodyId),
}

// ---------------------------------------------------------------------------
// PhysicsWorld
// ---------------------------------------------------------------------------

/// Bounded world of rigid bodies: static boundary loop + creation-ordered
/// dynamic bodies under constant gravity.
#[derive(Debug, Clone)]
pub struct PhysicsWorld {
    bounds: Rect,
    boundary: Boundary,
    gravity: Vector2<f64>,
    drag: f64,
    restitution: f64,
    bodies: Vec<Body>,
    next_id: u64,
}

impl PhysicsWorld {
    /// Create an empty world with the given extent and gravity.
    #[must_use]
    pub fn new(bounds: Rect, gravity: Vector2<f64>) -> Self {
        Self {
            bounds,
            boundary: Boundary::from_rect(bounds),
            gravity,
            drag: 0.0,
            restitution: 0.5,
            bodies: Vec::new(),
            next_id: 0,
        }
    }

    /// Set the linear drag coefficient (>= 0).
    #[must_use]
    pub const fn with_drag(mut self, drag: f64) -> Self {
        self.drag = drag;
        self
    }

    /// Set the collision restitution coefficient in [0, 1].
    #[must_use]
    pub const fn with_restitution(mut self, restitution: f64) -> Self {
        self.restitution = restitution;
        self
    }

    /// The world extent.
    #[must_use]
    pub const fn bounds(&self) -> Rect {
        self.bounds
    }

    /// The static boundary loop.
    #[must_use]
    pub const fn boundary(&self) -> &Boundary {
        &self.boundary
    }

    /// Allocate the next body id in creation order.
    pub const fn alloc_id(&mut self) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Insert a body whose id was allocated by [`alloc_id`](Self::alloc_id).
    pub fn add_body(&mut self, body: Body) -> Result<BodyId, WorldError> {
        let id = body.id;
        let duplicate = self.bodies.iter().any(|b| b.id == id);
        debug_assert!(!duplicate, "duplicate body id {id}");
        if duplicate {
            return Err(WorldError::DuplicateId(id));
        }
        self.bodies.push(body);
        Ok(id)
    }

    /// Remove a body. Returns `false` (no-op) if the id is absent. This is
    /// the only deletion path.
    pub fn remove_body(&mut self, id: BodyId) -> bool {
        let before = self.bodies.len();
        self.bodies.retain(|b| b.id != id);
        self.bodies.len() != before
    }

    /// Look up a body by id.
    #[must_use]
    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    /// Read-only snapshot of the bodies in creation order, for renderers
    /// and tests.
    pub fn bodies(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter()
    }

    /// Number of bodies currently in the world.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Whether the world holds no bodies.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Advance the simulation by one fixed timestep.
    ///
    /// A zero `dt` is an exact no-op: no integration and no collision
    /// resolution, so positions and velocities are left untouched.
    pub fn step(&mut self, dt: f64) {
        debug_assert!(dt >= 0.0 && dt.is_finite(), "timestep: {dt}");
        if dt == 0.0 {
            return;
        }
        self.integrate(dt);
        self.resolve_pair_collisions();
        self.resolve_boundary_collisions();
    }

    /// Semi-implicit Euler: velocity first (gravity, then drag damping),
    /// then position from the updated velocity.
    fn integrate(&mut self, dt: f64) {
        let gravity = self.gravity;
        let damping = 1.0 / (1.0 + self.drag * dt);
        for body in &mut self.bodies {
            let Motion::Dynamic { velocity, .. } = &mut body.motion else {
                continue;
            };
            *velocity += gravity * dt;
            *velocity *= damping;
            let v = *velocity;
            body.position += v * dt;
            debug_assert!(
                body.position.x.is_finite() && body.position.y.is_finite(),
                "body {} position diverged",
                body.id
            );
        }
    }

    /// Test every pair with at least one dynamic body, in creation order.
    fn resolve_pair_collisions(&mut self) {
        let restitution = self.restitution;
        let n = self.bodies.len();
        for i in 0..n {
            for j in (i + 1)..n {
                let (head, tail) = self.bodies.split_at_mut(j);
                let a = &mut head[i];
                let b = &mut tail[0];
                if !a.is_dynamic() && !b.is_dynamic() {
                    continue;
                }
                collide_pair(a, b, restitution);
            }
        }
    }

    /// Keep dynamic bodies inside the boundary loop: push out along each
    /// edge's inward normal and reflect the approaching velocity component.
    fn resolve_boundary_collisions(&mut self) {
        let restitution = self.restitution;
        for body in &mut self.bodies {
            let r = body.bounding_radius();
            let Motion::Dynamic { velocity, .. } = &mut body.motion else {
                continue;
            };
            for edge in self.boundary.edges() {
                let depth = (body.position - edge.a).dot(&edge.normal);
                if depth < r {
                    body.position += edge.normal * (r - depth);
                    let vn = velocity.dot(&edge.normal);
                    if vn < 0.0 {
                        *velocity -= edge.normal * ((1.0 + restitution) * vn);
                    }
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Pair collision response
// ---------------------------------------------------------------------------

/// Bounding-circle overlap test plus impulse response for one pair.
/// At least one side is dynamic; static-static pairs never reach here.
fn collide_pair(a: &mut Body, b: &mut Body, restitution: f64) {
    let r_sum = a.bounding_radius() + b.bounding_radius();
    let delta = b.position - a.position;
    let dist_sq = delta.norm_squared();
    if dist_sq >= r_sum * r_sum {
        return;
    }
    let dist = dist_sq.sqrt();
    // Coincident centers get a fixed separation axis to stay deterministic.
    let normal = if dist > 0.0 {
        delta / dist
    } else {
        Vector2::new(0.0, 1.0)
    };
    let penetration = r_sum - dist;

    match (&mut a.motion, &mut b.motion) {
        (
            Motion::Dynamic {
                velocity: va,
                mass: ma,
            },
            Motion::Dynamic {
                velocity: vb,
                mass: mb,
            },
        ) => {
            let inv_a = 1.0 / *ma;
            let inv_b = 1.0 / *mb;
            let vel_n = (*vb - *va).dot(&normal);
            // Impulse only while approaching; separating pairs just get
            // the positional correction.
            if vel_n < 0.0 {
                let impulse = -(1.0 + restitution) * vel_n / (inv_a + inv_b);
                *va -= normal * (impulse * inv_a);
                *vb += normal * (impulse * inv_b);
            }
            let correction = normal * (penetration / (inv_a + inv_b));
            a.position -= correction * inv_a;
            b.position += correction * inv_b;
        }
        (Motion::Dynamic { velocity, .. }, Motion::Static) => {
            let vn = velocity.dot(&normal);
            if vn > 0.0 {
                *velocity -= normal * ((1.0 + restitution) * vn);
            }
            a.position -= normal * penetration;
        }
        (Motion::Static, Motion::Dynamic { velocity, .. }) => {
            let vn = velocity.dot(&normal);
            if vn < 0.0 {
                *velocity -= normal * ((1.0 + restitution) * vn);
            }
            b.position += normal * penetration;
        }
        (Motion::Static, Motion::Static) => unreachable!("static pair filtered by caller"),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
