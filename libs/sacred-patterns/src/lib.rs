//! # Sacred Patterns
//!
//! Pure, deterministic pattern generation for recursive geometric figures.
//!
//! ## Architecture
//!
//! ```text
//! sacred-ir (PatternSpec) → sacred-patterns (PatternGeometry)
//! ```
//!
//! Every generator is a pure function of its explicit numeric parameters:
//! no hidden state, no randomness, no I/O. Calls allocate their own working
//! structures and return fully-owned results, so generators may be invoked
//! concurrently without coordination. Out-of-range depth/detail/overlap
//! inputs are silently clamped; structural preconditions (`sides >= 3`,
//! non-negative radii, `point_count >= 2`) are documented per function and
//! not validated.
//!
//! ## Usage
//!
//! ```rust
//! use sacred_patterns::{generate_flower_of_life, PHI};
//! use sacred_ir::Point;
//!
//! let flower = generate_flower_of_life(2, 40.0, Point::ORIGIN);
//! assert_eq!(flower.circles.len(), 19);
//!
//! // PHI is re-exported for proportional layout outside the kernel
//! assert!((PHI * PHI - PHI - 1.0).abs() < 1e-9);
//! ```

pub mod fibonacci;
pub mod flower_of_life;
pub mod from_spec;
pub mod metatrons_cube;
pub mod polygon;
pub mod seed_of_life;
pub mod sri_yantra;
pub mod vesica_piscis;

// Re-export public API
pub use config::constants::PHI;
pub use fibonacci::generate_fibonacci_spiral;
pub use flower_of_life::generate_flower_of_life;
pub use from_spec::generate;
pub use metatrons_cube::generate_metatrons_cube;
pub use polygon::generate_polygon_points;
pub use seed_of_life::generate_seed_of_life;
pub use sri_yantra::generate_sri_yantra;
pub use vesica_piscis::generate_vesica_piscis;
