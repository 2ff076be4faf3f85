//! # Spec to Geometry Dispatch
//!
//! Turns a [`PatternSpec`] into its [`PatternGeometry`] by calling the
//! matching generator. There is no failure path: out-of-range inputs are
//! clamped by the generators themselves.

use sacred_ir::{PatternGeometry, PatternSpec};

use crate::fibonacci::generate_fibonacci_spiral;
use crate::flower_of_life::generate_flower_of_life;
use crate::metatrons_cube::generate_metatrons_cube;
use crate::polygon::generate_polygon_points;
use crate::seed_of_life::generate_seed_of_life;
use crate::sri_yantra::generate_sri_yantra;
use crate::vesica_piscis::generate_vesica_piscis;

/// Generates the geometry for one pattern spec.
///
/// # Example
///
/// ```rust
/// use sacred_patterns::generate;
/// use sacred_ir::{PatternGeometry, PatternSpec, Point};
///
/// let spec = PatternSpec::SeedOfLife {
///     radius: 10.0,
///     center: Point::ORIGIN,
/// };
/// match generate(&spec) {
///     PatternGeometry::SeedOfLife(seed) => assert_eq!(seed.circles.len(), 7),
///     _ => unreachable!(),
/// }
/// ```
pub fn generate(spec: &PatternSpec) -> PatternGeometry {
    match spec {
        PatternSpec::Polygon {
            sides,
            radius,
            rotation,
            center,
        } => PatternGeometry::Polygon {
            points: generate_polygon_points(*sides, *radius, *rotation, *center),
        },

        PatternSpec::SeedOfLife { radius, center } => {
            PatternGeometry::SeedOfLife(generate_seed_of_life(*radius, *center))
        }

        PatternSpec::FlowerOfLife {
            iterations,
            radius,
            center,
        } => PatternGeometry::FlowerOfLife(generate_flower_of_life(*iterations, *radius, *center)),

        PatternSpec::MetatronsCube {
            radius,
            detail,
            center,
        } => PatternGeometry::MetatronsCube(generate_metatrons_cube(*radius, *detail, *center)),

        PatternSpec::VesicaPiscis {
            radius,
            overlap,
            center,
        } => PatternGeometry::VesicaPiscis(generate_vesica_piscis(*radius, *overlap, *center)),

        PatternSpec::SriYantra { size, center } => {
            PatternGeometry::SriYantra(generate_sri_yantra(*size, *center))
        }

        PatternSpec::FibonacciSpiral {
            turns,
            point_count,
            scale,
            center,
        } => PatternGeometry::FibonacciSpiral {
            points: generate_fibonacci_spiral(*turns, *point_count, *scale, *center),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sacred_ir::Point;

    #[test]
    fn test_dispatch_matches_direct_call() {
        let spec = PatternSpec::MetatronsCube {
            radius: 40.0,
            detail: 3,
            center: Point::ORIGIN,
        };
        let dispatched = generate(&spec);
        let direct = generate_metatrons_cube(40.0, 3, Point::ORIGIN);
        assert_eq!(dispatched, PatternGeometry::MetatronsCube(direct));
    }

    #[test]
    fn test_dispatch_covers_every_variant() {
        let center = Point::ORIGIN;
        let specs = [
            PatternSpec::Polygon {
                sides: 5,
                radius: 1.0,
                rotation: 0.0,
                center,
            },
            PatternSpec::SeedOfLife {
                radius: 1.0,
                center,
            },
            PatternSpec::FlowerOfLife {
                iterations: 2,
                radius: 1.0,
                center,
            },
            PatternSpec::MetatronsCube {
                radius: 1.0,
                detail: 2,
                center,
            },
            PatternSpec::VesicaPiscis {
                radius: 1.0,
                overlap: 0.5,
                center,
            },
            PatternSpec::SriYantra { size: 1.0, center },
            PatternSpec::FibonacciSpiral {
                turns: 1.0,
                point_count: 10,
                scale: 1.0,
                center,
            },
        ];

        for spec in &specs {
            // Each spec must produce its own geometry variant
            let geometry = generate(spec);
            let matches = matches!(
                (spec, &geometry),
                (PatternSpec::Polygon { .. }, PatternGeometry::Polygon { .. })
                    | (PatternSpec::SeedOfLife { .. }, PatternGeometry::SeedOfLife(_))
                    | (PatternSpec::FlowerOfLife { .. }, PatternGeometry::FlowerOfLife(_))
                    | (PatternSpec::MetatronsCube { .. }, PatternGeometry::MetatronsCube(_))
                    | (PatternSpec::VesicaPiscis { .. }, PatternGeometry::VesicaPiscis(_))
                    | (PatternSpec::SriYantra { .. }, PatternGeometry::SriYantra(_))
                    | (
                        PatternSpec::FibonacciSpiral { .. },
                        PatternGeometry::FibonacciSpiral { .. }
                    )
            );
            assert!(matches, "variant mismatch for {spec:?}");
        }
    }
}
