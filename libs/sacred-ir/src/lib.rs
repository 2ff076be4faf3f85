//! # Sacred IR
//!
//! Value types and pattern IR for the sacred-geometry kernel.
//!
//! ## Architecture
//!
//! ```text
//! sacred-ir (PatternSpec) → sacred-patterns (PatternGeometry)
//! ```
//!
//! All types are plain serde-serializable data: generators allocate results
//! fresh per call and the caller owns them fully afterwards.
//!
//! ## Example
//!
//! ```rust
//! use sacred_ir::{PatternSpec, Point};
//!
//! let spec = PatternSpec::FlowerOfLife {
//!     iterations: 2,
//!     radius: 40.0,
//!     center: Point::ORIGIN,
//! };
//! let json = serde_json::to_string(&spec).unwrap();
//! let back: PatternSpec = serde_json::from_str(&json).unwrap();
//! assert_eq!(spec, back);
//! ```

pub mod geometry;
pub mod graph;
pub mod pattern;

// Re-export public API
pub use geometry::{Circle, Point, Triangle};
pub use graph::{Connection, GeometryGraph, GraphError, Node};
pub use pattern::{FlowerOfLife, PatternGeometry, PatternSpec, SeedOfLife, SriYantra, VesicaPiscis};
