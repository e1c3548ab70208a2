use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Shape
// ---------------------------------------------------------------------------

/// Collision geometry of a body. Immutable once the body is constructed.
///
/// Polygon points are ordered, convex, and relative to the body position.
/// Polygon collision uses the bounding circle; that is the accepted
/// simplification for this core, not an approximation of convenience.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    Circle { radius: f64 },
    Polygon { points: Vec<Vector2<f64>> },
}

impl Shape {
    /// Circle with the given radius.
    #[must_use]
    pub const fn circle(radius: f64) -> Self {
        Self::Circle { radius }
    }

    /// Convex polygon from points relative to the body position.
    #[must_use]
    pub const fn polygon(points: Vec<Vector2<f64>>) -> Self {
        Self::Polygon { points }
    }

    /// Radius of the smallest origin-centered circle containing the shape.
    #[must_use]
    pub fn bounding_radius(&self) -> f64 {
        match self {
            Self::Circle { radius } => *radius,
            Self::Polygon { points } => points
                .iter()
                .map(Vector2::norm)
                .fold(0.0, f64::max),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_bounding_radius() {
        let shape = Shape::circle(4.0);
        assert!((shape.bounding_radius() - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn polygon_bounding_radius_is_farthest_point() {
        let shape = Shape::polygon(vec![
            Vector2::new(-3.0, 0.0),
            Vector2::new(3.0, 0.0),
            Vector2::new(0.0, 4.0),
        ]);
        assert!((shape.bounding_radius() - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_polygon_has_zero_radius() {
        let shape = Shape::polygon(Vec::new());
        assert_eq!(shape.bounding_radius(), 0.0);
    }
}
