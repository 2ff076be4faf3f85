//! # Config Crate
//!
//! Centralized configuration constants for the sacred-geometry kernel.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, PHI, coord_key};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 1e-10; // smaller than EPSILON (1e-9)
//! let is_zero = value.abs() < EPSILON;
//! assert!(is_zero);
//!
//! // Quantized keys deduplicate nearly-identical points
//! assert_eq!(coord_key(0.0004, 0.0), coord_key(0.0, 0.0));
//!
//! // PHI is shared with layout code outside the kernel
//! assert!(PHI > 1.6 && PHI < 1.62);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Pure Values**: No platform-specific or runtime-derived values
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
