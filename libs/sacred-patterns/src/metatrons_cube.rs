//! # Metatron's Cube
//!
//! Builds a labeled node/edge graph across up to five detail tiers: the
//! center, two hexagons, and three Platonic-solid vertex rings.
//!
//! Tiers 1-2 use explicit spoke and ring edges. Tiers 3-5 synthesize edges
//! by distance: each new vertex is compared against the node set as it
//! exists at the moment of its own insertion and linked to every node
//! closer than twice the base radius. The process is insertion-order
//! dependent - a vertex never retroactively gains edges to nodes added
//! after it - and edges are not deduplicated, so the same node pair can
//! carry both an explicit edge and a distance edge. Both behaviors are
//! part of the figure's defined topology; do not symmetrize or dedup.

use std::f64::consts::PI;

use config::constants::{
    MAX_CUBE_DETAIL, MIN_CUBE_DETAIL, NEIGHBOR_EDGE_FACTOR, NODE_SIZE_CENTER, NODE_SIZE_DECAGON,
    NODE_SIZE_INNER_HEX, NODE_SIZE_OUTER_HEX, NODE_SIZE_SOLID,
};
use sacred_ir::{Connection, GeometryGraph, Node, Point};

use crate::polygon::generate_polygon_points;

/// Generates a Metatron's Cube graph.
///
/// `detail` is clamped to `[1, 5]`; each tier adds nodes on top of the
/// previous ones:
///
/// - tier 1: center plus an inner hexagon (spokes + ring)
/// - tier 2: an outer hexagon at twice the radius (same-index spokes + ring)
/// - tier 3: three tetrahedron vertices
/// - tier 4: four octahedron vertices at cardinal offsets
/// - tier 5: a ten-vertex decagon ring
///
/// # Example
///
/// ```rust
/// use sacred_patterns::generate_metatrons_cube;
/// use sacred_ir::Point;
///
/// let graph = generate_metatrons_cube(50.0, 1, Point::ORIGIN);
/// assert_eq!(graph.node_count(), 7);
/// assert_eq!(graph.connection_count(), 12);
/// assert!(graph.validate().is_ok());
/// ```
pub fn generate_metatrons_cube(radius: f64, detail: u32, center: Point) -> GeometryGraph {
    let detail = detail.clamp(MIN_CUBE_DETAIL, MAX_CUBE_DETAIL);
    let mut graph = GeometryGraph::new();

    graph.add_node(Node::new("center", center, NODE_SIZE_CENTER));

    // Tier 1: inner hexagon, spoked to the center and ring-connected.
    for (i, point) in generate_polygon_points(6, radius, 0.0, center)
        .into_iter()
        .enumerate()
    {
        graph.add_node(Node::new(format!("hex1_{i}"), point, NODE_SIZE_INNER_HEX));
        graph.add_connection(Connection::new("center", format!("hex1_{i}")));
    }
    for i in 0..6 {
        graph.add_connection(Connection::new(
            format!("hex1_{i}"),
            format!("hex1_{}", (i + 1) % 6),
        ));
    }

    // Tier 2: outer hexagon, spoked to the same-index inner vertex.
    if detail >= 2 {
        for (i, point) in generate_polygon_points(6, 2.0 * radius, 0.0, center)
            .into_iter()
            .enumerate()
        {
            graph.add_node(Node::new(format!("hex2_{i}"), point, NODE_SIZE_OUTER_HEX));
            graph.add_connection(Connection::new(format!("hex1_{i}"), format!("hex2_{i}")));
        }
        for i in 0..6 {
            graph.add_connection(Connection::new(
                format!("hex2_{i}"),
                format!("hex2_{}", (i + 1) % 6),
            ));
        }
    }

    let threshold = NEIGHBOR_EDGE_FACTOR * radius;

    // Tier 3: tetrahedron vertices.
    if detail >= 3 {
        let offsets = [(0.0, -1.5), (1.3, 0.75), (-1.3, 0.75)];
        for (i, (dx, dy)) in offsets.into_iter().enumerate() {
            let point = center.offset(dx * radius, dy * radius);
            insert_with_distance_edges(
                &mut graph,
                Node::new(format!("tetra_{i}"), point, NODE_SIZE_SOLID),
                threshold,
            );
        }
    }

    // Tier 4: octahedron vertices at cardinal offsets, clockwise from top.
    if detail >= 4 {
        let offsets = [(0.0, -2.0), (2.0, 0.0), (0.0, 2.0), (-2.0, 0.0)];
        for (i, (dx, dy)) in offsets.into_iter().enumerate() {
            let point = center.offset(dx * radius, dy * radius);
            insert_with_distance_edges(
                &mut graph,
                Node::new(format!("octa_{i}"), point, NODE_SIZE_SOLID),
                threshold,
            );
        }
    }

    // Tier 5: decagon ring, offset by half a step so it interleaves with
    // the hexagons.
    if detail >= 5 {
        for (i, point) in generate_polygon_points(10, 1.8 * radius, PI / 10.0, center)
            .into_iter()
            .enumerate()
        {
            insert_with_distance_edges(
                &mut graph,
                Node::new(format!("deca_{i}"), point, NODE_SIZE_DECAGON),
                threshold,
            );
        }
    }

    graph
}

/// Links a new node to every node already in the graph closer than
/// `threshold`, then inserts it.
///
/// The comparison set is the graph at this exact moment: earlier same-tier
/// nodes participate, later ones do not.
fn insert_with_distance_edges(graph: &mut GeometryGraph, node: Node, threshold: f64) {
    let position = node.position();
    for existing in &graph.nodes {
        if existing.position().distance(&position) < threshold {
            graph
                .connections
                .push(Connection::new(node.id.clone(), existing.id.clone()));
        }
    }
    graph.add_node(node);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_one_counts() {
        let graph = generate_metatrons_cube(40.0, 1, Point::ORIGIN);
        assert_eq!(graph.node_count(), 7);
        // 6 spokes + 6 ring edges
        assert_eq!(graph.connection_count(), 12);
    }

    #[test]
    fn test_detail_two_counts() {
        let graph = generate_metatrons_cube(40.0, 2, Point::ORIGIN);
        assert_eq!(graph.node_count(), 13);
        // 12 from tier 1, plus 6 spokes and 6 ring edges
        assert_eq!(graph.connection_count(), 24);
    }

    #[test]
    fn test_node_count_strictly_increasing_with_detail() {
        let counts: Vec<usize> = (1..=5)
            .map(|d| generate_metatrons_cube(40.0, d, Point::ORIGIN).node_count())
            .collect();
        for pair in counts.windows(2) {
            assert!(pair[0] < pair[1], "counts not increasing: {counts:?}");
        }
    }

    #[test]
    fn test_tier_node_populations() {
        let graph = generate_metatrons_cube(40.0, 5, Point::ORIGIN);
        // 1 center + 6 + 6 + 3 + 4 + 10
        assert_eq!(graph.node_count(), 30);
        assert!(graph.node("center").is_some());
        assert!(graph.node("hex1_5").is_some());
        assert!(graph.node("hex2_0").is_some());
        assert!(graph.node("tetra_2").is_some());
        assert!(graph.node("octa_3").is_some());
        assert!(graph.node("deca_9").is_some());
    }

    #[test]
    fn test_graph_validates_at_every_detail() {
        for detail in 1..=5 {
            let graph = generate_metatrons_cube(25.0, detail, Point::new(5.0, 5.0));
            assert!(graph.validate().is_ok(), "detail {detail} failed validation");
        }
    }

    #[test]
    fn test_detail_clamped() {
        let low = generate_metatrons_cube(40.0, 0, Point::ORIGIN);
        assert_eq!(low.node_count(), 7);

        let high = generate_metatrons_cube(40.0, 99, Point::ORIGIN);
        let max = generate_metatrons_cube(40.0, 5, Point::ORIGIN);
        assert_eq!(high.node_count(), max.node_count());
        assert_eq!(high.connection_count(), max.connection_count());
    }

    #[test]
    fn test_tetra_vertices_link_to_nearby_hex() {
        let r = 40.0;
        let graph = generate_metatrons_cube(r, 3, Point::ORIGIN);
        // tetra_0 sits at (0, -1.5r), within 2r of the center and the
        // whole inner hexagon
        let tetra = graph.node("tetra_0").unwrap();
        assert!(graph.degree("tetra_0") > 0);
        let center_dist = tetra.position().distance(&Point::ORIGIN);
        assert!(center_dist < 2.0 * r);
        assert!(graph
            .connections
            .iter()
            .any(|c| c.from == "tetra_0" && c.to == "center"));
    }

    #[test]
    fn test_tetra_vertices_mutually_unlinked() {
        let graph = generate_metatrons_cube(40.0, 3, Point::ORIGIN);
        // Every tetra pair is ~2.6r apart, beyond the 2r threshold
        for a in 0..3 {
            for b in (a + 1)..3 {
                let a = format!("tetra_{a}");
                let b = format!("tetra_{b}");
                assert!(!graph
                    .connections
                    .iter()
                    .any(|c| c.touches(&a) && c.touches(&b)));
            }
        }
    }

    #[test]
    fn test_distance_edges_are_insertion_ordered() {
        let graph = generate_metatrons_cube(40.0, 5, Point::ORIGIN);
        // Adjacent decagon vertices sit ~1.11r apart, so each links to its
        // already-inserted neighbor; the edge runs from the newer node to
        // the older one
        assert!(graph
            .connections
            .iter()
            .any(|c| c.from == "deca_1" && c.to == "deca_0"));
        assert!(graph
            .connections
            .iter()
            .any(|c| c.from == "deca_9" && c.to == "deca_0"));
        // The first-inserted decagon vertex never originates a same-tier edge
        assert!(!graph
            .connections
            .iter()
            .any(|c| c.from == "deca_0" && c.to.starts_with("deca")));
    }

    #[test]
    fn test_deterministic_output() {
        let a = generate_metatrons_cube(33.0, 5, Point::new(-2.0, 4.0));
        let b = generate_metatrons_cube(33.0, 5, Point::new(-2.0, 4.0));
        assert_eq!(a, b);
    }
}
