//! The shared graph core: node collection, construction and mutation.
//!
//! [`Graph`] carries everything the directed and undirected specializations
//! have in common. The specializations ([`Digraph`](crate::Digraph),
//! [`Undigraph`](crate::Undigraph)) wrap it and add the construction rules
//! and algorithms specific to their direction.

use log::{debug, trace, warn};
use serde::Serialize;

use super::edge::Edge;
use super::node::Node;
use crate::error::{GraphError, Result};

/// An adjacency specification: node IDs mapped to their adjacent node IDs,
/// in insertion order. Duplicate targets describe multi-edges.
pub type Structure = Vec<(String, Vec<String>)>;

/// Edge weights keyed by edge ID (`a-b` or `a->b`).
pub type Weights = Vec<(String, f64)>;

/// Build a graph of either kind from an adjacency specification.
///
/// This is the kind-agnostic construction entry point; prefer
/// [`Digraph::new`](crate::Digraph::new) or
/// [`Undigraph::new`](crate::Undigraph::new) when the direction is known
/// statically.
///
/// # Errors
///
/// Returns [`GraphError::Structure`] for a malformed (or, undirected,
/// asymmetric) structure and [`GraphError::EdgeNotFound`] for a weight
/// keyed by an edge the structure does not produce.
pub fn new_graph(directed: bool, structure: Structure, weights: Weights) -> Result<Graph> {
    Graph::build(directed, structure, weights)
}

/// The shared graph core.
///
/// Owns its nodes in insertion order; every derived output (adjacency
/// matrix, exports, component listings) keys off that order, so results
/// are deterministic for a given construction sequence.
#[derive(Debug, Clone, Serialize)]
pub struct Graph {
    directed: bool,
    nodes: Vec<Node>,
}

impl Graph {
    pub(crate) fn build(directed: bool, mut structure: Structure, weights: Weights) -> Result<Self> {
        check_structure(&structure)?;

        if !directed {
            check_symmetric(&structure)?;
            fold_opposite_connections(&mut structure);
        }

        debug!(
            "building {} graph with {} nodes",
            if directed { "directed" } else { "undirected" },
            structure.len()
        );

        let mut graph = Self {
            directed,
            nodes: Vec::new(),
        };

        for (id, _) in &structure {
            graph.add_node(id)?;
        }

        for (from, targets) in &structure {
            for to in targets {
                graph.connect_nodes(from, to, None)?;
            }
        }

        for (edge_id, weight) in &weights {
            graph.apply_weight(edge_id, *weight)?;
        }

        Ok(graph)
    }

    /// Whether the graph is directed. Fixed at construction.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// The nodes, in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// The number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The number of logical edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.unique_edges().len()
    }

    /// Every logical edge exactly once, in node order then attachment
    /// order. The copy a second undirected endpoint holds is skipped.
    pub fn unique_edges(&self) -> Vec<&Edge> {
        let mut edges: Vec<&Edge> = Vec::new();

        for node in &self.nodes {
            for edge in node.edges() {
                if !edges.contains(&edge) {
                    edges.push(edge);
                }
            }
        }

        edges
    }

    /// True if an equal node (same ID, same edges) is in the graph.
    pub fn has_node(&self, node: &Node) -> bool {
        self.nodes.contains(node)
    }

    /// True if the graph has a node with the given ID.
    pub fn has_node_by_id(&self, id: &str) -> bool {
        let id = id.trim();
        self.nodes.iter().any(|node| node.id() == id)
    }

    /// The node with the given ID.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if no such node exists.
    pub fn get_node_by_id(&self, id: &str) -> Result<&Node> {
        let id = id.trim();
        self.nodes
            .iter()
            .find(|node| node.id() == id)
            .ok_or_else(|| GraphError::NodeNotFound {
                node_id: id.to_string(),
            })
    }

    /// Mutable access to the node with the given ID, e.g. to adjust its
    /// presentation fields.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if no such node exists.
    pub fn get_node_by_id_mut(&mut self, id: &str) -> Result<&mut Node> {
        let id = id.trim();
        self.nodes
            .iter_mut()
            .find(|node| node.id() == id)
            .ok_or_else(|| GraphError::NodeNotFound {
                node_id: id.to_string(),
            })
    }

    /// Add a node with the given ID (whitespace-trimmed).
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidArgument`] if the ID is already taken.
    pub fn add_node(&mut self, id: &str) -> Result<()> {
        let id = id.trim();

        if self.has_node_by_id(id) {
            return Err(GraphError::invalid_argument(format!(
                "node {id} is already in graph"
            )));
        }

        debug!("adding node {id}");
        self.nodes.push(Node::new(id));
        Ok(())
    }

    /// Connect two existing nodes with a new edge, optionally weighted.
    ///
    /// The edge's multiplicity index is one past the number of edges the
    /// source node already has towards the target. Undirected edges are
    /// registered with both endpoints, once for a self-loop.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if either endpoint is missing.
    pub fn connect_nodes(&mut self, from: &str, to: &str, weight: Option<f64>) -> Result<()> {
        let from = from.trim().to_string();
        let to = to.trim().to_string();

        self.get_node_by_id(&to)?;
        let s = self
            .get_node_by_id(&from)?
            .adjacent_ids()
            .iter()
            .filter(|id| **id == to)
            .count()
            + 1;

        debug!("connecting {from} to {to} (s={s})");
        let edge = Edge::new(&from, &to, self.directed, s, weight);

        self.node_mut(&from)?.add_edge(edge.clone())?;
        if !self.directed && to != from {
            self.node_mut(&to)?.add_edge(edge)?;
        }

        Ok(())
    }

    /// Remove a node and every edge incident to it.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if no such node exists.
    pub fn remove_node(&mut self, id: &str) -> Result<()> {
        let id = id.trim().to_string();
        debug!("removing node {id}");

        let incident: Vec<Edge> = self.get_node_by_id(&id)?.edges().to_vec();
        for edge in &incident {
            self.detach_edge(edge);
        }

        self.nodes.retain(|node| node.id() != id);
        Ok(())
    }

    /// Remove the edge with the given ID (multiplicity index 1) from every
    /// node holding it. Removing an absent edge is a no-op.
    pub fn remove_edge(&mut self, edge_id: &str) {
        let edge_id = edge_id.trim();
        debug!("removing edge {edge_id}");

        for node in &mut self.nodes {
            node.remove_edge_matching(edge_id, 1);
        }
    }

    /// Remove every edge in the graph, keeping the nodes.
    pub fn remove_all_edges(&mut self) {
        debug!("removing all edges");
        for node in &mut self.nodes {
            node.clear_edges();
        }
    }

    /// Replace a directed edge with a freshly constructed edge in the
    /// opposite direction, preserving its weight.
    ///
    /// On an undirected graph this is a warned no-op; orientation carries
    /// no meaning there.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EdgeNotFound`] if no such edge exists.
    pub fn reverse_edge(&mut self, edge_id: &str) -> Result<()> {
        if !self.directed {
            warn!("reverse_edge() only makes sense in directed graphs");
            return Ok(());
        }

        let edge_id = edge_id.trim();
        let edge = self
            .nodes
            .iter()
            .find_map(|node| {
                node.edges()
                    .iter()
                    .find(|edge| edge.s() == 1 && edge.matches_id(edge_id))
            })
            .cloned()
            .ok_or_else(|| GraphError::EdgeNotFound {
                edge_id: edge_id.to_string(),
            })?;

        debug!("reversing edge {edge_id}");
        self.detach_edge(&edge);
        self.connect_nodes(edge.to(), edge.from(), edge.weight())
    }

    // Remove one equal copy of the edge from every node holding it.
    fn detach_edge(&mut self, edge: &Edge) {
        for node in &mut self.nodes {
            node.remove_edge_value(edge);
        }
    }

    fn node_mut(&mut self, id: &str) -> Result<&mut Node> {
        self.nodes
            .iter_mut()
            .find(|node| node.id() == id)
            .ok_or_else(|| GraphError::NodeNotFound {
                node_id: id.to_string(),
            })
    }

    // ===== Weights =====

    /// True if every edge carries a (non-zero) weight.
    pub fn is_weighted(&self) -> bool {
        self.nodes
            .iter()
            .all(|node| node.edges().iter().all(Edge::has_weight))
    }

    /// The minimum edge weight in the graph.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnweightedGraph`] if any edge has no weight
    /// or the graph has no edges.
    pub fn minimum_weight(&self) -> Result<f64> {
        if !self.is_weighted() {
            return Err(GraphError::UnweightedGraph);
        }

        self.weights_iter()
            .fold(None, |min: Option<f64>, w| {
                Some(min.map_or(w, |m| m.min(w)))
            })
            .ok_or(GraphError::UnweightedGraph)
    }

    /// The maximum edge weight in the graph.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnweightedGraph`] if any edge has no weight
    /// or the graph has no edges.
    pub fn maximum_weight(&self) -> Result<f64> {
        if !self.is_weighted() {
            return Err(GraphError::UnweightedGraph);
        }

        self.weights_iter()
            .fold(None, |max: Option<f64>, w| {
                Some(max.map_or(w, |m| m.max(w)))
            })
            .ok_or(GraphError::UnweightedGraph)
    }

    /// The smallest edge weight strictly greater than the given limit,
    /// or `None` once the weight range is exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnweightedGraph`] if any edge has no weight.
    pub fn minimum_weight_above(&self, limit: f64) -> Result<Option<f64>> {
        if !self.is_weighted() {
            return Err(GraphError::UnweightedGraph);
        }

        Ok(self
            .weights_iter()
            .filter(|w| *w > limit)
            .fold(None, |min: Option<f64>, w| {
                Some(min.map_or(w, |m| m.min(w)))
            }))
    }

    /// The largest edge weight strictly smaller than the given limit,
    /// or `None` once the weight range is exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnweightedGraph`] if any edge has no weight.
    pub fn maximum_weight_below(&self, limit: f64) -> Result<Option<f64>> {
        if !self.is_weighted() {
            return Err(GraphError::UnweightedGraph);
        }

        Ok(self
            .weights_iter()
            .filter(|w| *w < limit)
            .fold(None, |max: Option<f64>, w| {
                Some(max.map_or(w, |m| m.max(w)))
            }))
    }

    /// Every edge carrying exactly the given weight, in node order then
    /// attachment order, each logical edge once.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnweightedGraph`] if any edge has no weight.
    pub fn edges_with_weight(&self, weight: f64) -> Result<Vec<Edge>> {
        if !self.is_weighted() {
            return Err(GraphError::UnweightedGraph);
        }

        let mut edges: Vec<Edge> = Vec::new();
        for node in &self.nodes {
            for edge in node.edges() {
                if edge.weight() == Some(weight) && !edges.contains(edge) {
                    edges.push(edge.clone());
                }
            }
        }

        Ok(edges)
    }

    /// The edges carrying the minimum weight.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnweightedGraph`] if any edge has no weight.
    pub fn edges_with_minimum_weight(&self) -> Result<Vec<Edge>> {
        self.edges_with_weight(self.minimum_weight()?)
    }

    /// The edges carrying the maximum weight.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnweightedGraph`] if any edge has no weight.
    pub fn edges_with_maximum_weight(&self) -> Result<Vec<Edge>> {
        self.edges_with_weight(self.maximum_weight()?)
    }

    fn weights_iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.nodes
            .iter()
            .flat_map(|node| node.edges())
            .filter_map(Edge::weight)
    }

    // Attach a weight to the first edge matching the ID, updating every
    // held copy of that edge.
    fn apply_weight(&mut self, edge_id: &str, weight: f64) -> Result<()> {
        let edge_id = edge_id.trim();

        let edge = self
            .nodes
            .iter()
            .find_map(|node| {
                node.edges()
                    .iter()
                    .find(|edge| edge.s() == 1 && edge.matches_id(edge_id))
            })
            .cloned()
            .ok_or_else(|| GraphError::EdgeNotFound {
                edge_id: edge_id.to_string(),
            })?;

        let id = edge.id();
        for node in &mut self.nodes {
            for held in node.edges_mut() {
                if held.s() == edge.s() && held.matches_id(&id) {
                    held.set_weight(weight);
                }
            }
        }

        trace!("weight {weight} attached to edge {id}");
        Ok(())
    }

    // ===== Degrees =====

    /// The degree of an undirected node: incident edge count plus one per
    /// self-loop.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::WrongGraphKind`] on a directed graph and
    /// [`GraphError::NodeNotFound`] if no such node exists.
    pub fn degree(&self, id: &str) -> Result<usize> {
        if self.directed {
            return Err(GraphError::wrong_kind(
                "for directed graphs use outdegree() or indegree()",
            ));
        }

        let node = self.get_node_by_id(id)?;
        Ok(node.edges().len() + node.loop_count())
    }

    /// The number of edges leaving a directed node.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::WrongGraphKind`] on an undirected graph and
    /// [`GraphError::NodeNotFound`] if no such node exists.
    pub fn outdegree(&self, id: &str) -> Result<usize> {
        if !self.directed {
            return Err(GraphError::wrong_kind("for undirected graphs use degree()"));
        }

        Ok(self.get_node_by_id(id)?.edges().len())
    }

    /// The number of edges arriving at a directed node.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::WrongGraphKind`] on an undirected graph and
    /// [`GraphError::NodeNotFound`] if no such node exists.
    pub fn indegree(&self, id: &str) -> Result<usize> {
        if !self.directed {
            return Err(GraphError::wrong_kind("for undirected graphs use degree()"));
        }

        let id = self.get_node_by_id(id)?.id().to_string();
        Ok(self
            .nodes
            .iter()
            .flat_map(|node| node.edges())
            .filter(|edge| edge.to() == id)
            .count())
    }

    // ===== Structure predicates =====

    /// True if the graph has no loops and, for directed graphs, no
    /// bilateral connections.
    pub fn is_simple(&self) -> Result<bool> {
        if self.directed {
            for node in &self.nodes {
                if node.has_loop() || self.has_bilateral_connection(node.id())? {
                    return Ok(false);
                }
            }
            Ok(true)
        } else {
            Ok(!self.nodes.iter().any(Node::has_loop))
        }
    }

    /// True if the graph is simple and every node is adjacent to every
    /// other node.
    pub fn is_complete(&self) -> Result<bool> {
        if !self.is_simple()? {
            return Ok(false);
        }

        for node in &self.nodes {
            for other in &self.nodes {
                if node.id() != other.id() && !node.has_adjacent_id(other.id()) {
                    return Ok(false);
                }
            }
        }

        Ok(true)
    }

    /// True if some adjacent node is connected back to this node.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if no such node exists.
    pub fn has_bilateral_connection(&self, id: &str) -> Result<bool> {
        let node = self.get_node_by_id(id)?;

        for adjacent in node.adjacent_ids() {
            if self.get_node_by_id(adjacent)?.has_adjacent_id(node.id()) {
                return Ok(true);
            }
        }

        Ok(false)
    }

    /// True if the two nodes are distinct and each is adjacent to the other.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if either node is missing.
    pub fn is_bilaterally_connected_with(&self, id: &str, other_id: &str) -> Result<bool> {
        let node = self.get_node_by_id(id)?;
        let other = self.get_node_by_id(other_id)?;

        Ok(node.id() != other.id()
            && node.has_adjacent_id(other.id())
            && other.has_adjacent_id(node.id()))
    }

    /// The adjacency matrix in node insertion order.
    ///
    /// A cell holds the connecting edge's weight if it has one, `1.0` for
    /// an unweighted adjacency and `0.0` for none.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EdgeNotFound`] if an adjacency cannot be
    /// resolved to an edge (not reachable through public construction).
    pub fn adjacency_matrix(&self) -> Result<Vec<Vec<f64>>> {
        let n = self.nodes.len();
        let mut matrix = vec![vec![0.0; n]; n];

        for (i, node) in self.nodes.iter().enumerate() {
            for (j, other) in self.nodes.iter().enumerate() {
                if node.has_adjacent_id(other.id()) {
                    let edge = node.get_edge_with(other.id(), 1)?;
                    matrix[i][j] = match edge.weight() {
                        Some(w) if w != 0.0 => w,
                        _ => 1.0,
                    };
                }
            }
        }

        Ok(matrix)
    }
}

impl std::fmt::Display for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for node in &self.nodes {
            writeln!(f, "{node}")?;
        }
        Ok(())
    }
}

pub(crate) fn normalize_structure<K: Into<String>>(structure: Vec<(K, Vec<K>)>) -> Structure {
    structure
        .into_iter()
        .map(|(id, targets)| (id.into(), targets.into_iter().map(Into::into).collect()))
        .collect()
}

pub(crate) fn normalize_weights<W: Into<String>>(weights: Vec<(W, f64)>) -> Weights {
    weights
        .into_iter()
        .map(|(edge_id, weight)| (edge_id.into(), weight))
        .collect()
}

// Every adjacency target must itself be declared as a key.
fn check_structure(structure: &Structure) -> Result<()> {
    for (_, targets) in structure {
        for target in targets {
            if !structure.iter().any(|(key, _)| key == target) {
                return Err(GraphError::structure(format!(
                    "node {target} not found as main node"
                )));
            }
        }
    }

    Ok(())
}

// Undirected structures must list every connection in both directions,
// the same number of times.
fn check_symmetric(structure: &Structure) -> Result<()> {
    for (from, targets) in structure {
        for to in targets {
            let Some((_, mirrored)) = structure.iter().find(|(key, _)| key == to) else {
                return Err(GraphError::structure(format!(
                    "node {to} not found as main node"
                )));
            };

            if !mirrored.contains(from) {
                return Err(GraphError::structure(format!(
                    "for undirected graphs, all edges must be set in both directions, \
                     node {from} is connected to {to} but {to} is not connected to {from}"
                )));
            }

            let connections = targets.iter().filter(|t| *t == to).count();
            let opposite = mirrored.iter().filter(|t| *t == from).count();

            if connections != opposite {
                return Err(GraphError::structure(format!(
                    "for undirected graphs, all multi-edges must be set in both directions, \
                     nodes {from} and {to} are connected {connections} time(s), but nodes \
                     {to} and {from} are connected {opposite} time(s)"
                )));
            }
        }
    }

    Ok(())
}

// Drop the mirrored listing of every undirected connection so each
// logical edge is constructed exactly once. Consumes the reverse entries
// in place.
fn fold_opposite_connections(structure: &mut Structure) {
    for i in 0..structure.len() {
        let from = structure[i].0.clone();
        let targets = structure[i].1.clone();

        for to in &targets {
            if *to != from {
                if let Some((_, mirrored)) = structure.iter_mut().find(|(key, _)| key == to) {
                    if let Some(position) = mirrored.iter().position(|t| t == &from) {
                        mirrored.remove(position);
                    }
                }
            }
        }
    }
}
