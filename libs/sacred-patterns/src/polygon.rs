//! # Polygon Kernel
//!
//! Generates N equally spaced points on a circle. Every other generator in
//! this crate builds on it.

use glam::DVec2;
use sacred_ir::Point;
use std::f64::consts::PI;

/// Generates the vertices of a regular polygon.
///
/// Point `i` sits at angle `i * (2*PI / sides) + rotation` from the center,
/// at distance `radius`, for `i` in `[0, sides)`. Points come back in
/// ascending angular order starting at `rotation`.
///
/// # Preconditions
///
/// `sides >= 3` and `radius >= 0.0`. These are the caller's responsibility
/// and are deliberately not validated.
///
/// # Example
///
/// ```rust
/// use sacred_patterns::generate_polygon_points;
/// use sacred_ir::Point;
///
/// let hex = generate_polygon_points(6, 10.0, 0.0, Point::ORIGIN);
/// assert_eq!(hex.len(), 6);
/// assert!((hex[0].x - 10.0).abs() < 1e-9);
/// assert!(hex[0].y.abs() < 1e-9);
/// ```
pub fn generate_polygon_points(sides: u32, radius: f64, rotation: f64, center: Point) -> Vec<Point> {
    let step = 2.0 * PI / sides as f64;
    let origin = DVec2::from(center);

    (0..sides)
        .map(|i| {
            let theta = i as f64 * step + rotation;
            Point::from(origin + radius * DVec2::from_angle(theta))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::constants::EPSILON;

    #[test]
    fn test_point_count() {
        for sides in 3..12 {
            assert_eq!(
                generate_polygon_points(sides, 5.0, 0.0, Point::ORIGIN).len(),
                sides as usize
            );
        }
    }

    #[test]
    fn test_points_on_circle() {
        let center = Point::new(3.0, -2.0);
        let points = generate_polygon_points(7, 4.5, 0.3, center);
        for p in &points {
            assert!((p.distance(&center) - 4.5).abs() < EPSILON);
        }
    }

    #[test]
    fn test_uniform_angular_spacing() {
        let points = generate_polygon_points(6, 1.0, 0.0, Point::ORIGIN);
        let step = 2.0 * PI / 6.0;
        for (i, p) in points.iter().enumerate() {
            let angle = p.y.atan2(p.x).rem_euclid(2.0 * PI);
            let expected = (i as f64 * step).rem_euclid(2.0 * PI);
            assert!((angle - expected).abs() < EPSILON);
        }
    }

    #[test]
    fn test_rotation_shifts_first_point() {
        let rotated = generate_polygon_points(4, 2.0, PI / 2.0, Point::ORIGIN);
        assert!(rotated[0].x.abs() < EPSILON);
        assert!((rotated[0].y - 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_zero_radius_collapses_to_center() {
        let center = Point::new(1.0, 1.0);
        for p in generate_polygon_points(5, 0.0, 0.0, center) {
            assert!(p.distance(&center) < EPSILON);
        }
    }
}
