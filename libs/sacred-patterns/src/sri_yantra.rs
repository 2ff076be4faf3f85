//! # Sri Yantra
//!
//! Nine scaled interlocking triangles (four upward, five downward), two
//! bounding circles, and the bindu center point.
//!
//! Each triangle is equilateral and centroid-centered on the figure's
//! center. Vertex order is apex first, then the two base vertices
//! left-to-right; consumers read orientation from the apex, so the order
//! must not change.

use sacred_ir::{Circle, Point, SriYantra, Triangle};

/// Base width factor for the upward triangles.
const UPWARD_BASE_FACTOR: f64 = 0.85;
/// Inner bounding circle radius factor.
const INNER_CIRCLE_FACTOR: f64 = 0.4;
/// Outer bounding circle radius factor.
const OUTER_CIRCLE_FACTOR: f64 = 0.95;
/// Bindu radius factor.
const BINDU_FACTOR: f64 = 0.05;

/// Generates a Sri Yantra figure.
///
/// Four upward triangles with base `0.85 * size`, scaled by `1 - i * 0.2`;
/// five downward triangles with base `size`, scaled by `0.9 - i * 0.18`.
/// The inner circle has radius `0.4 * size`, the outer `0.95 * size`, and
/// the bindu `0.05 * size`, all centered on `center`.
///
/// # Example
///
/// ```rust
/// use sacred_patterns::generate_sri_yantra;
/// use sacred_ir::Point;
///
/// let yantra = generate_sri_yantra(100.0, Point::ORIGIN);
/// assert_eq!(yantra.triangles.len(), 9);
/// assert_eq!(yantra.circles[0].r, 40.0);
/// assert_eq!(yantra.circles[1].r, 95.0);
/// assert_eq!(yantra.bindu.r, 5.0);
/// ```
pub fn generate_sri_yantra(size: f64, center: Point) -> SriYantra {
    let mut triangles = Vec::with_capacity(9);

    for i in 0..4 {
        let scale = 1.0 - i as f64 * 0.2;
        triangles.push(upward_triangle(size * UPWARD_BASE_FACTOR * scale, center));
    }

    for i in 0..5 {
        let scale = 0.9 - i as f64 * 0.18;
        triangles.push(downward_triangle(size * scale, center));
    }

    SriYantra {
        triangles,
        circles: [
            Circle::around(center, INNER_CIRCLE_FACTOR * size),
            Circle::around(center, OUTER_CIRCLE_FACTOR * size),
        ],
        bindu: Circle::around(center, BINDU_FACTOR * size),
    }
}

/// Equilateral triangle with apex above the base, centroid at `center`.
///
/// Vertex order: apex, base-left, base-right.
fn upward_triangle(base: f64, center: Point) -> Triangle {
    let height = base * 3.0_f64.sqrt() / 2.0;
    Triangle::new(
        center.offset(0.0, -2.0 * height / 3.0),
        center.offset(-base / 2.0, height / 3.0),
        center.offset(base / 2.0, height / 3.0),
    )
}

/// Equilateral triangle with apex below the base, centroid at `center`.
///
/// Vertex order: apex, base-left, base-right.
fn downward_triangle(base: f64, center: Point) -> Triangle {
    let height = base * 3.0_f64.sqrt() / 2.0;
    Triangle::new(
        center.offset(0.0, 2.0 * height / 3.0),
        center.offset(-base / 2.0, -height / 3.0),
        center.offset(base / 2.0, -height / 3.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::constants::EPSILON;

    #[test]
    fn test_nine_triangles() {
        let yantra = generate_sri_yantra(100.0, Point::ORIGIN);
        assert_eq!(yantra.triangles.len(), 9);
    }

    #[test]
    fn test_circle_radii() {
        let yantra = generate_sri_yantra(100.0, Point::ORIGIN);
        assert_eq!(yantra.circles[0].r, 40.0);
        assert_eq!(yantra.circles[1].r, 95.0);
        assert_eq!(yantra.bindu.r, 5.0);
        assert_eq!(yantra.bindu.center(), Point::ORIGIN);
    }

    #[test]
    fn test_upward_apexes_point_up() {
        let yantra = generate_sri_yantra(100.0, Point::ORIGIN);
        // Screen coordinates: up is negative y
        for t in &yantra.triangles[..4] {
            assert!(t.apex().y < 0.0);
            assert!(t.points[1].y > 0.0);
            assert!(t.points[2].y > 0.0);
        }
    }

    #[test]
    fn test_downward_apexes_point_down() {
        let yantra = generate_sri_yantra(100.0, Point::ORIGIN);
        for t in &yantra.triangles[4..] {
            assert!(t.apex().y > 0.0);
        }
    }

    #[test]
    fn test_triangles_shrink_within_group() {
        let yantra = generate_sri_yantra(100.0, Point::ORIGIN);
        let base_width = |t: &Triangle| t.points[2].x - t.points[1].x;
        for pair in yantra.triangles[..4].windows(2) {
            assert!(base_width(&pair[1]) < base_width(&pair[0]));
        }
        for pair in yantra.triangles[4..].windows(2) {
            assert!(base_width(&pair[1]) < base_width(&pair[0]));
        }
    }

    #[test]
    fn test_triangles_are_equilateral() {
        let yantra = generate_sri_yantra(80.0, Point::new(10.0, -5.0));
        for t in &yantra.triangles {
            let ab = t.points[0].distance(&t.points[1]);
            let bc = t.points[1].distance(&t.points[2]);
            let ca = t.points[2].distance(&t.points[0]);
            assert!((ab - bc).abs() < EPSILON);
            assert!((bc - ca).abs() < EPSILON);
        }
    }

    #[test]
    fn test_centroids_on_center() {
        let center = Point::new(-3.0, 6.0);
        let yantra = generate_sri_yantra(50.0, center);
        for t in &yantra.triangles {
            let cx = (t.points[0].x + t.points[1].x + t.points[2].x) / 3.0;
            let cy = (t.points[0].y + t.points[1].y + t.points[2].y) / 3.0;
            assert!((cx - center.x).abs() < EPSILON);
            assert!((cy - center.y).abs() < EPSILON);
        }
    }
}
