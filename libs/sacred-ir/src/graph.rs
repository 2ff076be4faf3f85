//! # Geometry Graph
//!
//! Labeled node/edge graph structures, the output shape of the Metatron's
//! Cube generator.
//!
//! Connections are undirected and may contain duplicates: the generator's
//! explicit ring/spoke rules and its distance rule can each contribute an
//! edge for the same node pair, and the kernel deliberately does not
//! deduplicate them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::Point;

// =============================================================================
// NODE
// =============================================================================

/// A labeled graph vertex.
///
/// `active` and `pulsing` are rendering state owned by consumers; the
/// kernel always emits them as `false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Identifier, unique within one generated graph.
    pub id: String,
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
    /// Display size hint.
    pub size: f64,
    /// Optional display label.
    pub label: Option<String>,
    /// Whether the node is highlighted (consumer-owned).
    pub active: bool,
    /// Whether the node is animating (consumer-owned).
    pub pulsing: bool,
}

impl Node {
    /// Creates a node with default rendering state.
    pub fn new(id: impl Into<String>, position: Point, size: f64) -> Self {
        Self {
            id: id.into(),
            x: position.x,
            y: position.y,
            size,
            label: None,
            active: false,
            pulsing: false,
        }
    }

    /// The position as a [`Point`].
    #[inline]
    pub const fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

// =============================================================================
// CONNECTION
// =============================================================================

/// An undirected edge referencing two node ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    /// Id of one endpoint.
    pub from: String,
    /// Id of the other endpoint.
    pub to: String,
}

impl Connection {
    /// Creates a connection between two node ids.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// True if this connection touches the given node id at either end.
    #[inline]
    pub fn touches(&self, id: &str) -> bool {
        self.from == id || self.to == id
    }
}

// =============================================================================
// GRAPH ERROR
// =============================================================================

/// Structural defects reported by [`GeometryGraph::validate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    /// Two nodes share an id.
    #[error("duplicate node id: {id}")]
    DuplicateNodeId { id: String },

    /// A connection endpoint names a node that does not exist.
    #[error("connection {from} -> {to} references an unknown node")]
    UnknownEndpoint { from: String, to: String },
}

// =============================================================================
// GEOMETRY GRAPH
// =============================================================================

/// A node/edge graph, owned exclusively by the caller after generation.
///
/// # Example
///
/// ```rust
/// use sacred_ir::{Connection, GeometryGraph, Node, Point};
///
/// let mut graph = GeometryGraph::new();
/// graph.add_node(Node::new("a", Point::ORIGIN, 1.0));
/// graph.add_node(Node::new("b", Point::new(1.0, 0.0), 1.0));
/// graph.add_connection(Connection::new("a", "b"));
/// assert!(graph.validate().is_ok());
/// assert_eq!(graph.degree("a"), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeometryGraph {
    /// Graph vertices.
    pub nodes: Vec<Node>,
    /// Undirected edges (duplicates permitted).
    pub connections: Vec<Connection>,
}

impl GeometryGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph with pre-allocated capacity.
    pub fn with_capacity(node_count: usize, connection_count: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(node_count),
            connections: Vec::with_capacity(connection_count),
        }
    }

    /// Returns the number of nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of connections.
    #[inline]
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// Appends a node.
    pub fn add_node(&mut self, node: Node) {
        self.nodes.push(node);
    }

    /// Appends a connection.
    pub fn add_connection(&mut self, connection: Connection) {
        self.connections.push(connection);
    }

    /// Looks up a node by id.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Number of connections touching the given node id.
    ///
    /// Duplicate edges count once each.
    pub fn degree(&self, id: &str) -> usize {
        self.connections.iter().filter(|c| c.touches(id)).count()
    }

    /// Validates graph structure.
    ///
    /// Checks:
    /// - Node ids are unique
    /// - Every connection endpoint names an existing node
    ///
    /// Duplicate connections are legal and not reported.
    pub fn validate(&self) -> Result<(), GraphError> {
        let mut seen = std::collections::HashSet::with_capacity(self.nodes.len());
        for node in &self.nodes {
            if !seen.insert(node.id.as_str()) {
                return Err(GraphError::DuplicateNodeId {
                    id: node.id.clone(),
                });
            }
        }

        for connection in &self.connections {
            if !seen.contains(connection.from.as_str()) || !seen.contains(connection.to.as_str()) {
                return Err(GraphError::UnknownEndpoint {
                    from: connection.from.clone(),
                    to: connection.to.clone(),
                });
            }
        }

        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
