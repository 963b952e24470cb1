//! Nodes: labeled vertices owning their incident edges.

use serde::Serialize;

use super::edge::Edge;
use crate::error::{GraphError, Result};

/// Default node marker size.
pub const DEFAULT_NODE_SIZE: f64 = 300.0;
/// Default node face color.
pub const DEFAULT_NODE_FACE_COLOR: &str = "#68aeba";
/// Default node border color.
pub const DEFAULT_NODE_BORDER_COLOR: &str = "#534641";
/// Default node marker style.
pub const DEFAULT_NODE_STYLE: &str = "o";

/// A labeled vertex.
///
/// A node owns its incident edges. In an undirected graph both endpoints
/// of an edge hold an equal copy of it; in a directed graph only the
/// source node does, so a directed node's edge list is its outgoing edges.
///
/// The position, size and color fields are irrelevant to every algorithm
/// in this crate; they exist for presentation collaborators and default
/// to the origin (layout is not this crate's concern).
#[derive(Debug, Clone, Serialize)]
pub struct Node {
    id: String,
    edges: Vec<Edge>,

    /// X position, used only by presentation collaborators.
    pub x: f64,
    /// Y position, used only by presentation collaborators.
    pub y: f64,
    /// Marker size, used only by presentation collaborators.
    pub size: f64,
    /// Face color, used only by presentation collaborators.
    pub face_color: String,
    /// Border color, used only by presentation collaborators.
    pub border_color: String,
    /// Marker style, used only by presentation collaborators.
    pub style: String,
}

impl Node {
    pub(crate) fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into().trim().to_string(),
            edges: Vec::new(),
            x: 0.0,
            y: 0.0,
            size: DEFAULT_NODE_SIZE,
            face_color: DEFAULT_NODE_FACE_COLOR.to_string(),
            border_color: DEFAULT_NODE_BORDER_COLOR.to_string(),
            style: DEFAULT_NODE_STYLE.to_string(),
        }
    }

    /// The node ID.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The incident edges, in attachment order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// IDs of the adjacent nodes, one entry per incident edge.
    ///
    /// For a self-loop the node is its own neighbor, exactly once per
    /// loop edge. Parallel edges produce repeated entries.
    pub fn adjacent_ids(&self) -> Vec<&str> {
        self.edges
            .iter()
            .map(|edge| {
                if edge.from() == self.id {
                    edge.to()
                } else {
                    edge.from()
                }
            })
            .collect()
    }

    /// True if the given node ID is adjacent to this node.
    pub fn has_adjacent_id(&self, id: &str) -> bool {
        let id = id.trim();
        self.adjacent_ids().iter().any(|adjacent| *adjacent == id)
    }

    /// True if the node is not connected to any other node.
    pub fn is_isolated(&self) -> bool {
        self.adjacent_ids().is_empty()
    }

    /// True if the node is connected to exactly one node.
    pub fn is_pendant(&self) -> bool {
        self.adjacent_ids().len() == 1
    }

    /// True if the node is connected to itself.
    pub fn has_loop(&self) -> bool {
        self.edges.iter().any(Edge::is_loop)
    }

    pub(crate) fn loop_count(&self) -> usize {
        self.edges.iter().filter(|edge| edge.is_loop()).count()
    }

    /// True if this node holds an edge equal to the given one.
    pub fn has_edge(&self, edge: &Edge) -> bool {
        self.edges.contains(edge)
    }

    /// True if this node holds an edge with the given ID and multiplicity
    /// index. Undirected edges answer to the reversed ID as well.
    pub fn has_edge_by_id(&self, id: &str, s: usize) -> bool {
        self.edges
            .iter()
            .any(|edge| edge.s() == s && edge.matches_id(id))
    }

    /// The edge with the given ID and multiplicity index.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EdgeNotFound`] if this node holds no such edge.
    pub fn get_edge_by_id(&self, id: &str, s: usize) -> Result<&Edge> {
        self.edges
            .iter()
            .find(|edge| edge.s() == s && edge.matches_id(id))
            .ok_or_else(|| GraphError::EdgeNotFound {
                edge_id: id.trim().to_string(),
            })
    }

    /// True if this node has an edge with the given node, at the given
    /// multiplicity index, in either orientation.
    pub fn has_edge_with(&self, other_id: &str, s: usize) -> bool {
        let other_id = other_id.trim();
        self.edges
            .iter()
            .any(|edge| edge.s() == s && (edge.to() == other_id || edge.from() == other_id))
    }

    /// The edge connecting this node with the given node at the given
    /// multiplicity index. For directed nodes only outgoing edges match.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EdgeNotFound`] if no such edge exists.
    pub fn get_edge_with(&self, other_id: &str, s: usize) -> Result<&Edge> {
        let other_id = other_id.trim();

        self.edges
            .iter()
            .find(|edge| {
                if edge.is_directed() {
                    edge.s() == s && edge.to() == other_id
                } else {
                    edge.s() == s
                        && ((edge.from() == self.id && edge.to() == other_id)
                            || (edge.from() == other_id && edge.to() == self.id))
                }
            })
            .ok_or_else(|| GraphError::EdgeNotFound {
                edge_id: format!("{}?{}", self.id, other_id),
            })
    }

    pub(crate) fn add_edge(&mut self, edge: Edge) -> Result<()> {
        if self.has_edge(&edge) {
            return Err(GraphError::invalid_argument(format!(
                "edge {} is already in node {}",
                edge.id(),
                self.id
            )));
        }
        self.edges.push(edge);
        Ok(())
    }

    pub(crate) fn remove_edge_value(&mut self, edge: &Edge) -> bool {
        match self.edges.iter().position(|held| held == edge) {
            Some(index) => {
                self.edges.remove(index);
                true
            }
            None => false,
        }
    }

    pub(crate) fn remove_edge_matching(&mut self, id: &str, s: usize) -> bool {
        match self
            .edges
            .iter()
            .position(|edge| edge.s() == s && edge.matches_id(id))
        {
            Some(index) => {
                self.edges.remove(index);
                true
            }
            None => false,
        }
    }

    pub(crate) fn clear_edges(&mut self) {
        self.edges.clear();
    }

    pub(crate) fn edges_mut(&mut self) -> &mut [Edge] {
        &mut self.edges
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let edges: Vec<String> = self.edges.iter().map(|edge| edge.to_string()).collect();
        write!(f, "{}: {{{}}}", self.id, edges.join(", "))
    }
}

/// Two nodes are equal iff they have the same ID and the same edges.
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        if self.id != other.id {
            return false;
        }

        self.edges.iter().all(|edge| other.edges.contains(edge))
            && other.edges.iter().all(|edge| self.edges.contains(edge))
    }
}
