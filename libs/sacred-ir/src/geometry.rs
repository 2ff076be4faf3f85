//! # Geometry Value Types
//!
//! Plain 2D value types produced by the pattern generators.
//!
//! Everything here is an immutable value: generators create instances
//! fresh on every call and never hold references to returned data.

use glam::DVec2;
use serde::{Deserialize, Serialize};

// =============================================================================
// POINT
// =============================================================================

/// A 2D coordinate.
///
/// Converts to and from [`glam::DVec2`] for vector arithmetic.
///
/// # Example
///
/// ```rust
/// use sacred_ir::Point;
///
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(3.0, 4.0);
/// assert_eq!(a.distance(&b), 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// The origin, `(0, 0)`.
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    /// Creates a point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(&self, other: &Point) -> f64 {
        DVec2::from(*self).distance(DVec2::from(*other))
    }

    /// Returns this point translated by an offset.
    #[inline]
    pub fn offset(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

impl From<Point> for DVec2 {
    fn from(p: Point) -> Self {
        DVec2::new(p.x, p.y)
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Point::new(v.x, v.y)
    }
}

// =============================================================================
// CIRCLE
// =============================================================================

/// A positioned circle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// Horizontal coordinate of the center.
    pub x: f64,
    /// Vertical coordinate of the center.
    pub y: f64,
    /// Radius.
    pub r: f64,
}

impl Circle {
    /// Creates a circle.
    pub const fn new(x: f64, y: f64, r: f64) -> Self {
        Self { x, y, r }
    }

    /// Creates a circle around a center point.
    pub const fn around(center: Point, r: f64) -> Self {
        Self {
            x: center.x,
            y: center.y,
            r,
        }
    }

    /// The center as a [`Point`].
    #[inline]
    pub const fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

// =============================================================================
// TRIANGLE
// =============================================================================

/// Three vertices forming a triangle outline.
///
/// Vertex order is semantic: generators emit the apex first, so consumers
/// can read orientation (upward vs. downward) from `points[0]` without
/// inspecting coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    /// The three vertices, apex first.
    pub points: [Point; 3],
}

impl Triangle {
    /// Creates a triangle from three vertices, apex first.
    pub const fn new(apex: Point, base_left: Point, base_right: Point) -> Self {
        Self {
            points: [apex, base_left, base_right],
        }
    }

    /// The apex vertex.
    #[inline]
    pub const fn apex(&self) -> Point {
        self.points[0]
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_distance() {
        let a = Point::new(1.0, 1.0);
        let b = Point::new(4.0, 5.0);
        assert!((a.distance(&b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_point_dvec2_roundtrip() {
        let p = Point::new(-2.5, 7.25);
        let v: DVec2 = p.into();
        assert_eq!(Point::from(v), p);
    }

    #[test]
    fn test_circle_center() {
        let c = Circle::new(3.0, -1.0, 2.0);
        assert_eq!(c.center(), Point::new(3.0, -1.0));
    }

    #[test]
    fn test_circle_around() {
        let c = Circle::around(Point::new(1.0, 2.0), 0.5);
        assert_eq!(c, Circle::new(1.0, 2.0, 0.5));
    }

    #[test]
    fn test_triangle_apex_first() {
        let t = Triangle::new(
            Point::new(0.0, -1.0),
            Point::new(-1.0, 1.0),
            Point::new(1.0, 1.0),
        );
        assert_eq!(t.apex(), Point::new(0.0, -1.0));
    }
}
