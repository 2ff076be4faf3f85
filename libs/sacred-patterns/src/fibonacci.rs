//! # Fibonacci Spiral
//!
//! A finite ordered sequence of points on an outward spiral.

use glam::DVec2;
use sacred_ir::Point;
use std::f64::consts::PI;

use config::constants::SPIRAL_RADIAL_GAIN;

/// Generates a Fibonacci spiral point sequence.
///
/// For `i` in `[0, point_count)`: `ratio = i / (point_count - 1)`,
/// `angle = ratio * turns * 2 * PI`, `r = scale * sqrt(angle) * 5`, and the
/// point is `center + r * (cos(angle), sin(angle))`. Angle and radius both
/// increase monotonically, so the spiral winds outward without
/// self-intersecting, and the first point is exactly `center`.
///
/// # Preconditions
///
/// `turns >= 0.0` and `point_count >= 2`. These are the caller's
/// responsibility and are deliberately not validated.
///
/// # Example
///
/// ```rust
/// use sacred_patterns::generate_fibonacci_spiral;
/// use sacred_ir::Point;
///
/// let points = generate_fibonacci_spiral(2.0, 50, 1.0, Point::ORIGIN);
/// assert_eq!(points.len(), 50);
/// assert_eq!(points[0], Point::ORIGIN);
/// ```
pub fn generate_fibonacci_spiral(
    turns: f64,
    point_count: u32,
    scale: f64,
    center: Point,
) -> Vec<Point> {
    let origin = DVec2::from(center);

    (0..point_count)
        .map(|i| {
            let ratio = i as f64 / (point_count - 1) as f64;
            let angle = ratio * turns * 2.0 * PI;
            let r = scale * angle.sqrt() * SPIRAL_RADIAL_GAIN;
            Point::from(origin + r * DVec2::from_angle(angle))
        })
        .collect()
}
