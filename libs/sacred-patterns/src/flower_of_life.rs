//! # Flower of Life
//!
//! Breadth-first hexagonal expansion of the Seed of Life with point
//! deduplication.
//!
//! Adjacent hexagons share vertices, so naive expansion would regenerate
//! the same centers forever. Visited centers are tracked in a hash set
//! keyed by quantized coordinates (3 decimal places); a candidate whose key
//! is already present is skipped.

use std::collections::{HashSet, VecDeque};

use config::constants::{coord_key, MAX_FLOWER_ITERATIONS, MIN_FLOWER_ITERATIONS};
use sacred_ir::{Circle, FlowerOfLife, Point};

use crate::polygon::generate_polygon_points;

/// Generates a Flower of Life figure.
///
/// `iterations` is clamped to `[1, 3]`. Expansion starts from `center` at
/// depth 0; each dequeued point contributes its six hexagonal neighbors,
/// and unvisited neighbors become new circles enqueued at depth + 1.
/// Nothing is enqueued past the iteration cap, so the expansion always
/// terminates. Output order is BFS visitation order, center first.
///
/// Invariant: no two output circles share a center within 1e-3.
///
/// # Example
///
/// ```rust
/// use sacred_patterns::generate_flower_of_life;
/// use sacred_ir::Point;
///
/// let flower = generate_flower_of_life(1, 10.0, Point::ORIGIN);
/// assert_eq!(flower.circles.len(), 7);
/// ```
pub fn generate_flower_of_life(iterations: u32, radius: f64, center: Point) -> FlowerOfLife {
    let iterations = iterations.clamp(MIN_FLOWER_ITERATIONS, MAX_FLOWER_ITERATIONS);

    let mut circles = Vec::new();
    let mut visited: HashSet<(i64, i64)> = HashSet::new();
    let mut queue: VecDeque<(Point, u32)> = VecDeque::new();

    visited.insert(coord_key(center.x, center.y));
    circles.push(Circle::around(center, radius));
    queue.push_back((center, 0));

    while let Some((point, depth)) = queue.pop_front() {
        if depth >= iterations {
            continue;
        }

        for neighbor in generate_polygon_points(6, radius, 0.0, point) {
            let key = coord_key(neighbor.x, neighbor.y);
            if visited.insert(key) {
                circles.push(Circle::around(neighbor, radius));
                queue.push_back((neighbor, depth + 1));
            }
        }
    }

    FlowerOfLife { circles }
}
