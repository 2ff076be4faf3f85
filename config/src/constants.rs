//! # Configuration Constants
//!
//! Centralized constants for the sacred-geometry kernel. All precision
//! tolerances, clamp bounds, and display parameters are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Proportion**: Shared mathematical constants (golden ratio)
//! - **Bounds**: Clamp ranges for generator inputs
//! - **Graph**: Edge-synthesis and node-display parameters
//! - **Spiral**: Fibonacci spiral tuning

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance, e.g. when checking that polygon points sit at the
/// requested radius.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-10));
/// ```
pub const EPSILON: f64 = 1e-9;

/// Tolerance for circle-center deduplication.
///
/// Two candidate circle centers closer than this are treated as the same
/// point during Flower of Life expansion. Matches the quantization scale
/// below: coordinates are rounded to 3 decimal places before being used
/// as dedup keys.
pub const DEDUP_EPSILON: f64 = 1e-3;

/// Scaling factor for converting f64 coordinates to i64 dedup keys.
///
/// Coordinates are multiplied by this factor and rounded, giving a stable
/// integer key at 3-decimal-place precision.
///
/// # Example
///
/// ```rust
/// use config::constants::COORD_KEY_SCALE;
///
/// fn to_key(value: f64) -> i64 {
///     (value * COORD_KEY_SCALE).round() as i64
/// }
///
/// assert_eq!(to_key(1.0004), to_key(1.0));
/// ```
pub const COORD_KEY_SCALE: f64 = 1e3;

// =============================================================================
// PROPORTION CONSTANTS
// =============================================================================

/// The golden ratio, `(1 + sqrt(5)) / 2`.
///
/// Exposed for proportional layout decisions made by consumers of the
/// kernel; the generators themselves do not depend on it.
///
/// # Example
///
/// ```rust
/// use config::constants::PHI;
///
/// let golden_width = 100.0 * PHI;
/// assert!((PHI - 1.618_033_988_75).abs() < 1e-12);
/// ```
pub const PHI: f64 = 1.618_033_988_75;

// =============================================================================
// BOUNDS CONSTANTS
// =============================================================================

/// Minimum Flower of Life expansion depth.
pub const MIN_FLOWER_ITERATIONS: u32 = 1;

/// Maximum Flower of Life expansion depth.
///
/// Bounds the breadth-first expansion: each level adds one ring of
/// hexagonal neighbors, so circle count grows quadratically with depth.
pub const MAX_FLOWER_ITERATIONS: u32 = 3;

/// Minimum Metatron's Cube detail tier.
pub const MIN_CUBE_DETAIL: u32 = 1;

/// Maximum Metatron's Cube detail tier.
///
/// Tier 5 adds the final decagon ring; there is nothing beyond it.
pub const MAX_CUBE_DETAIL: u32 = 5;

// =============================================================================
// GRAPH CONSTANTS
// =============================================================================

/// Distance factor for synthesized edges in Metatron's Cube.
///
/// A newly inserted vertex (tiers 3-5) is connected to every existing node
/// whose Euclidean distance is strictly less than this factor times the
/// base radius.
pub const NEIGHBOR_EDGE_FACTOR: f64 = 2.0;

/// Display size of the center node.
pub const NODE_SIZE_CENTER: f64 = 10.0;

/// Display size of inner-hexagon nodes (tier 1).
pub const NODE_SIZE_INNER_HEX: f64 = 8.0;

/// Display size of outer-hexagon nodes (tier 2).
pub const NODE_SIZE_OUTER_HEX: f64 = 6.0;

/// Display size of Platonic-solid vertices (tiers 3 and 4).
pub const NODE_SIZE_SOLID: f64 = 5.0;

/// Display size of decagon-ring vertices (tier 5).
pub const NODE_SIZE_DECAGON: f64 = 4.0;

// =============================================================================
// SPIRAL CONSTANTS
// =============================================================================

/// Radial gain for the Fibonacci spiral.
///
/// The spiral radius at parameter `angle` is `scale * sqrt(angle) * gain`;
/// this constant is the gain. Chosen so a two-turn spiral at scale 1 spans
/// roughly the same extent as a radius-18 circle.
pub const SPIRAL_RADIAL_GAIN: f64 = 5.0;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Quantizes a coordinate pair to an integer dedup key.
///
/// Both coordinates are rounded to 3 decimal places (via
/// [`COORD_KEY_SCALE`]); points closer than [`DEDUP_EPSILON`] map to the
/// same key.
///
/// # Example
///
/// ```rust
/// use config::constants::coord_key;
///
/// assert_eq!(coord_key(1.0001, -2.0), coord_key(0.9999, -2.0004));
/// assert_ne!(coord_key(1.0, 0.0), coord_key(1.01, 0.0));
/// ```
#[inline]
pub fn coord_key(x: f64, y: f64) -> (i64, i64) {
    (
        (x * COORD_KEY_SCALE).round() as i64,
        (y * COORD_KEY_SCALE).round() as i64,
    )
}

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-10));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-10));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
