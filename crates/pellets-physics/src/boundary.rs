use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Rect
// ---------------------------------------------------------------------------

/// World extent, supplied once at construction. The origin is the bottom
/// left corner; gravity in the default configuration points toward y = 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a new extent.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether a point lies inside the extent.
    #[must_use]
    pub fn contains(&self, point: Vector2<f64>) -> bool {
        (0.0..=self.width).contains(&point.x) && (0.0..=self.height).contains(&point.y)
    }
}

// ---------------------------------------------------------------------------
// Edge
// ---------------------------------------------------------------------------

/// One static boundary segment with its interior-facing unit normal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub a: Vector2<f64>,
    pub b: Vector2<f64>,
    /// Unit normal pointing into the world interior.
    pub normal: Vector2<f64>,
}

// ---------------------------------------------------------------------------
// Boundary
// ---------------------------------------------------------------------------

/// Closed loop of line segments derived from the world's rectangular
/// extent; always static.
///
/// Penetration is measured as signed distance along each edge's inward
/// normal, so a body that ends up fully outside the loop is still pushed
/// back inside in a single resolution pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Boundary {
    edges: [Edge; 4],
}

impl Boundary {
    /// Build the boundary loop for a rectangular extent, counter-clockwise
    /// from the floor.
    #[must_use]
    pub fn from_rect(rect: Rect) -> Self {
        let (w, h) = (rect.width, rect.height);
        let corner = |x: f64, y: f64| Vector2::new(x, y);
        Self {
            edges: [
                // floor
                Edge {
                    a: corner(0.0, 0.0),
                    b: corner(w, 0.0),
                    normal: Vector2::new(0.0, 1.0),
                },
                // right wall
                Edge {
                    a: corner(w, 0.0),
                    b: corner(w, h),
                    normal: Vector2::new(-1.0, 0.0),
                },
                // ceiling
                Edge {
                    a: corner(w, h),
                    b: corner(0.0, h),
                    normal: Vector2::new(0.0, -1.0),
                },
                // left wall
                Edge {
                    a: corner(0.0, h),
                    b: corner(0.0, 0.0),
                    normal: Vector2::new(1.0, 0.0),
                },
            ],
        }
    }

    /// The boundary segments in loop order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
