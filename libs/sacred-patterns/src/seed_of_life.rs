//! # Seed of Life
//!
//! One center circle plus a hexagon of six circles of the same radius.

use sacred_ir::{Circle, Point, SeedOfLife};

use crate::polygon::generate_polygon_points;

/// Generates a Seed of Life figure.
///
/// Returns exactly seven circles, all of radius `radius`: the center circle
/// first, then one circle at each hexagon vertex in ascending angular order.
///
/// # Example
///
/// ```rust
/// use sacred_patterns::generate_seed_of_life;
/// use sacred_ir::Point;
///
/// let seed = generate_seed_of_life(10.0, Point::ORIGIN);
/// assert_eq!(seed.circles.len(), 7);
/// ```
pub fn generate_seed_of_life(radius: f64, center: Point) -> SeedOfLife {
    let mut circles = Vec::with_capacity(7);
    circles.push(Circle::around(center, radius));

    for point in generate_polygon_points(6, radius, 0.0, center) {
        circles.push(Circle::around(point, radius));
    }

    SeedOfLife { circles }
}
