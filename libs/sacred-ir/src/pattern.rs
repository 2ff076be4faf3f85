//! # Pattern IR
//!
//! Pattern parameter and result types.
//!
//! A [`PatternSpec`] carries the fully resolved numeric parameters for one
//! figure; the generator crate turns it into a [`PatternGeometry`]. All
//! values are concrete numbers - there are no expressions, defaults, or
//! hidden state to resolve.

use serde::{Deserialize, Serialize};

use crate::geometry::{Circle, Point, Triangle};
use crate::graph::GeometryGraph;

// =============================================================================
// PATTERN SPEC
// =============================================================================

/// Parameters for one pattern generation call.
///
/// Out-of-range values follow the kernel's clamping rules: `iterations`
/// clamps to `[1, 3]`, `detail` to `[1, 5]`, `overlap` to `[0, 1]`.
/// Structural preconditions (`sides >= 3`, non-negative radii,
/// `point_count >= 2`) are the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PatternSpec {
    /// Regular polygon points.
    Polygon {
        /// Number of vertices (precondition: at least 3).
        sides: u32,
        /// Circumradius.
        radius: f64,
        /// Rotation of the first vertex, in radians.
        rotation: f64,
        /// Center of the polygon.
        center: Point,
    },

    /// Seed of Life: one center circle plus a hexagon of six.
    SeedOfLife {
        /// Radius of every circle.
        radius: f64,
        /// Center of the figure.
        center: Point,
    },

    /// Flower of Life: recursive hexagonal expansion.
    FlowerOfLife {
        /// Expansion depth, clamped to `[1, 3]`.
        iterations: u32,
        /// Radius of every circle.
        radius: f64,
        /// Center of the figure.
        center: Point,
    },

    /// Metatron's Cube: tiered node/edge graph.
    MetatronsCube {
        /// Base radius of the inner hexagon.
        radius: f64,
        /// Detail tier, clamped to `[1, 5]`.
        detail: u32,
        /// Center of the figure.
        center: Point,
    },

    /// Vesica Piscis: two overlapping circles.
    VesicaPiscis {
        /// Radius of both circles.
        radius: f64,
        /// Overlap fraction, clamped to `[0, 1]`.
        overlap: f64,
        /// Midpoint between the two circle centers.
        center: Point,
    },

    /// Sri Yantra: nine interlocking triangles.
    SriYantra {
        /// Overall figure size.
        size: f64,
        /// Center of the figure.
        center: Point,
    },

    /// Fibonacci spiral point sequence.
    FibonacciSpiral {
        /// Number of full revolutions (precondition: non-negative).
        turns: f64,
        /// Number of points (precondition: at least 2).
        point_count: u32,
        /// Radial scale factor.
        scale: f64,
        /// Center of the spiral.
        center: Point,
    },
}

// =============================================================================
// PATTERN OUTPUTS
// =============================================================================

/// Seed of Life output: exactly seven circles, center first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedOfLife {
    /// Circles in deterministic order: center, then hexagon points.
    pub circles: Vec<Circle>,
}

/// Flower of Life output: circles in BFS visitation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowerOfLife {
    /// Circles, center first; no two centers within dedup tolerance.
    pub circles: Vec<Circle>,
}

/// Vesica Piscis output: two circles and their intersection points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VesicaPiscis {
    /// Left and right circles.
    pub circles: [Circle; 2],
    /// Upper and lower intersection points (coincident when the circles
    /// merely touch).
    pub intersection_points: [Point; 2],
}

/// Sri Yantra output: triangles, bounding circles, and the bindu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SriYantra {
    /// Nine triangles: four upward, then five downward.
    pub triangles: Vec<Triangle>,
    /// Inner and outer bounding circles.
    pub circles: [Circle; 2],
    /// The center point, as a small circle.
    pub bindu: Circle,
}

// =============================================================================
// PATTERN GEOMETRY
// =============================================================================

/// Result of generating one [`PatternSpec`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PatternGeometry {
    /// Regular polygon vertices in ascending angular order.
    Polygon {
        /// The vertices.
        points: Vec<Point>,
    },
    /// Seed of Life circles.
    SeedOfLife(SeedOfLife),
    /// Flower of Life circles.
    FlowerOfLife(FlowerOfLife),
    /// Metatron's Cube graph.
    MetatronsCube(GeometryGraph),
    /// Vesica Piscis circles and intersections.
    VesicaPiscis(VesicaPiscis),
    /// Sri Yantra figure.
    SriYantra(SriYantra),
    /// Fibonacci spiral points, innermost first.
    FibonacciSpiral {
        /// The ordered point sequence.
        points: Vec<Point>,
    },
}

// =============================================================================
// TESTS
// =============================================================================
