//! # Vesica Piscis
//!
//! Two overlapping circles of equal radius and their two intersection
//! points, via closed-form trigonometry.

use sacred_ir::{Circle, Point, VesicaPiscis};

/// Generates a Vesica Piscis figure.
///
/// `overlap` is clamped to `[0, 1]`: 0 means the circles merely touch
/// (separation `2 * radius`), 1 means they coincide. The circle centers sit
/// at `center.x -/+ d/2` where `d = 2 * radius * (1 - overlap)`, and the
/// intersection points at `(center.x, center.y +/- h)` with
/// `h = sqrt(radius^2 - (d/2)^2)`. The clamp guarantees `d <= 2 * radius`,
/// so `h` is always well-defined.
///
/// # Example
///
/// ```rust
/// use sacred_patterns::generate_vesica_piscis;
/// use sacred_ir::Point;
///
/// let vesica = generate_vesica_piscis(10.0, 0.5, Point::ORIGIN);
/// assert_eq!(vesica.circles[0].r, 10.0);
/// assert_eq!(vesica.intersection_points[0].x, 0.0);
/// ```
pub fn generate_vesica_piscis(radius: f64, overlap: f64, center: Point) -> VesicaPiscis {
    let overlap = overlap.clamp(0.0, 1.0);
    let d = 2.0 * radius * (1.0 - overlap);

    let circles = [
        Circle::new(center.x - d / 2.0, center.y, radius),
        Circle::new(center.x + d / 2.0, center.y, radius),
    ];

    let h = (radius * radius - (d / 2.0) * (d / 2.0)).sqrt();
    let intersection_points = [
        Point::new(center.x, center.y + h),
        Point::new(center.x, center.y - h),
    ];

    VesicaPiscis {
        circles,
        intersection_points,
    }
}
