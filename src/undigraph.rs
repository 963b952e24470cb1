//! Undirected graphs.

use std::collections::BTreeSet;
use std::ops::{Deref, DerefMut};

use log::debug;
use serde::Serialize;

use crate::error::{GraphError, Result};
use crate::graph::{normalize_structure, normalize_weights, Graph};

/// An undirected graph.
///
/// Wraps the shared [`Graph`] core (available through `Deref`) and adds
/// the construction rules and algorithms specific to undirected graphs.
///
/// # Examples
///
/// ```
/// use graphein::Undigraph;
///
/// # fn example() -> graphein::Result<()> {
/// let graph = Undigraph::new(vec![
///     ("a", vec!["b", "c"]),
///     ("b", vec!["a", "c"]),
///     ("c", vec!["a", "b"]),
/// ])?;
///
/// assert!(graph.is_connected()?);
/// assert_eq!(graph.degree("a")?, 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Undigraph {
    core: Graph,
}

impl Deref for Undigraph {
    type Target = Graph;

    fn deref(&self) -> &Graph {
        &self.core
    }
}

impl DerefMut for Undigraph {
    fn deref_mut(&mut self) -> &mut Graph {
        &mut self.core
    }
}

impl Undigraph {
    /// Build an undirected graph from an adjacency specification.
    ///
    /// Every connection must be listed in both directions, the same
    /// number of times; the mirrored listings are folded away during
    /// construction so each logical edge is created exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Structure`] for an unknown adjacency target
    /// or an asymmetric specification.
    pub fn new<K: Into<String>>(structure: Vec<(K, Vec<K>)>) -> Result<Self> {
        Self::weighted(structure, Vec::<(String, f64)>::new())
    }

    /// Build an undirected graph with weights keyed by edge ID (`a-b`;
    /// the reversed ID works as well).
    ///
    /// # Errors
    ///
    /// As [`Undigraph::new`], plus [`GraphError::EdgeNotFound`] for a
    /// weight keyed by an edge the structure does not produce.
    pub fn weighted<K, W>(structure: Vec<(K, Vec<K>)>, weights: Vec<(W, f64)>) -> Result<Self>
    where
        K: Into<String>,
        W: Into<String>,
    {
        Ok(Self {
            core: Graph::build(
                false,
                normalize_structure(structure),
                normalize_weights(weights),
            )?,
        })
    }

    /// The underlying graph core.
    pub fn as_graph(&self) -> &Graph {
        &self.core
    }

    /// True if every node has the same degree.
    ///
    /// # Errors
    ///
    /// Propagates degree lookup failures.
    pub fn is_regular(&self) -> Result<bool> {
        match self.nodes().first() {
            Some(node) => {
                let degree = self.degree(node.id())?;
                self.is_k_regular(degree)
            }
            None => Ok(true),
        }
    }

    /// True if every node has degree `k`.
    ///
    /// # Errors
    ///
    /// Propagates degree lookup failures.
    pub fn is_k_regular(&self, k: usize) -> Result<bool> {
        for node in self.nodes() {
            if self.degree(node.id())? != k {
                return Ok(false);
            }
        }

        Ok(true)
    }

    /// True if any two nodes are connected by exactly one path: the graph
    /// is connected and has no cycle.
    ///
    /// # Errors
    ///
    /// Propagates component and cycle-scan failures.
    pub fn is_tree(&self) -> Result<bool> {
        Ok(self.is_connected()? && !self.has_cycle()?)
    }

    /// True if every node has even degree, so a closed trail through
    /// every edge exists.
    ///
    /// # Errors
    ///
    /// Propagates degree lookup failures.
    pub fn is_eulerian(&self) -> Result<bool> {
        for node in self.nodes() {
            if self.degree(node.id())? % 2 != 0 {
                return Ok(false);
            }
        }

        Ok(true)
    }

    /// True if exactly two nodes have odd degree, so an open trail
    /// through every edge exists.
    ///
    /// # Errors
    ///
    /// Propagates degree lookup failures.
    pub fn has_eulerian_trail(&self) -> Result<bool> {
        Ok(self.odd_degree_nodes()?.len() == 2)
    }

    /// The two endpoints of the Eulerian trail (the odd-degree nodes),
    /// in node order.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NoEulerianTrail`] if the graph has none.
    pub fn eulerian_trail_extremes(&self) -> Result<Vec<String>> {
        let odd = self.odd_degree_nodes()?;
        if odd.len() != 2 {
            return Err(GraphError::NoEulerianTrail);
        }

        Ok(odd)
    }

    fn odd_degree_nodes(&self) -> Result<Vec<String>> {
        let mut odd = Vec::new();
        for node in self.nodes() {
            if self.degree(node.id())? % 2 != 0 {
                odd.push(node.id().to_string());
            }
        }

        Ok(odd)
    }

    /// Two-colors the nodes with a worklist pass and reports whether the
    /// resulting sets stay disjoint. Only connected graphs qualify; a
    /// disconnected graph is never bipartite here.
    ///
    /// # Errors
    ///
    /// Propagates component expansion failures.
    pub fn is_bipartite(&self) -> Result<bool> {
        if !self.is_connected()? {
            return Ok(false);
        }

        let (set1, set2) = self.two_color()?;
        Ok(set1.intersection(&set2).next().is_none())
    }

    /// The two disjoint node sets of a bipartite graph.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidArgument`] if the graph is not
    /// bipartite.
    pub fn bipartite_components(&self) -> Result<(BTreeSet<String>, BTreeSet<String>)> {
        if !self.is_bipartite()? {
            return Err(GraphError::invalid_argument(
                "bipartite_components() can only be used in bipartite graphs",
            ));
        }

        self.two_color()
    }

    // Worklist two-coloring: pop a node, put its unassigned neighbors in
    // the set opposite its own (set 1 when unassigned itself) and requeue
    // the ones that landed in set 1.
    fn two_color(&self) -> Result<(BTreeSet<String>, BTreeSet<String>)> {
        let mut set1: BTreeSet<String> = BTreeSet::new();
        let mut set2: BTreeSet<String> = BTreeSet::new();
        let mut worklist: Vec<String> = self
            .nodes()
            .iter()
            .map(|node| node.id().to_string())
            .collect();

        while let Some(id) = worklist.pop() {
            let node = self.get_node_by_id(&id)?;

            for adjacent in node.adjacent_ids() {
                if !set1.contains(adjacent) && !set2.contains(adjacent) {
                    if set1.contains(id.as_str()) {
                        set2.insert(adjacent.to_string());
                    } else {
                        set1.insert(adjacent.to_string());
                        worklist.push(adjacent.to_string());
                    }
                }
            }
        }

        Ok((set1, set2))
    }

    /// The complement: an undirected graph connecting exactly the node
    /// pairs this graph leaves unconnected.
    ///
    /// # Errors
    ///
    /// Propagates construction failures for the complement structure.
    pub fn get_complementary_graph(&self) -> Result<Undigraph> {
        let mut structure: Vec<(String, Vec<String>)> = Vec::new();

        for node in self.nodes() {
            let mut targets = Vec::new();
            for other in self.nodes() {
                if node.id() != other.id() && !node.has_adjacent_id(other.id()) {
                    targets.push(other.id().to_string());
                }
            }
            structure.push((node.id().to_string(), targets));
        }

        Undigraph::new(structure)
    }

    /// The closure: repeatedly joins nonadjacent node pairs whose degree
    /// sum reaches the node count, until no such pair remains.
    ///
    /// # Errors
    ///
    /// Propagates degree lookups and edge insertion failures.
    pub fn get_closure(&self) -> Result<Undigraph> {
        let mut graph = self.clone();
        let n = graph.node_count();
        let ids: Vec<String> = graph
            .nodes()
            .iter()
            .map(|node| node.id().to_string())
            .collect();

        for from in &ids {
            for to in &ids {
                if from != to
                    && !graph.get_node_by_id(from)?.has_adjacent_id(to)
                    && graph.degree(from)? + graph.degree(to)? >= n
                {
                    graph.connect_nodes(from, to, None)?;
                }
            }
        }

        Ok(graph)
    }

    /// Dirac's theorem: the graph is Hamiltonian if every degree is at
    /// least half the node count. A `false` verdict proves nothing.
    ///
    /// # Errors
    ///
    /// Propagates degree lookup failures.
    pub fn apply_dirac_theorem(&self) -> Result<bool> {
        if self.nodes().is_empty() {
            return Ok(false);
        }

        let mut minimum = usize::MAX;
        for node in self.nodes() {
            minimum = minimum.min(self.degree(node.id())?);
        }

        Ok(2 * minimum >= self.node_count())
    }

    /// Ore's theorem: the graph is Hamiltonian if the two smallest
    /// degrees sum to at least the node count. A `false` verdict proves
    /// nothing.
    ///
    /// # Errors
    ///
    /// Propagates degree lookup failures.
    pub fn apply_ore_theorem(&self) -> Result<bool> {
        if self.node_count() < 2 {
            return Ok(false);
        }

        let mut degrees = Vec::new();
        for node in self.nodes() {
            degrees.push(self.degree(node.id())?);
        }
        degrees.sort_unstable();

        Ok(degrees[0] + degrees[1] >= self.node_count())
    }

    /// The minimum-weight spanning tree and its total weight.
    ///
    /// Walks the weight tiers upwards; within a tier, candidate edges are
    /// tried in node order then attachment order, and an edge closing a
    /// cycle is discarded. Stops expanding once the accumulating graph is
    /// a spanning tree.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DisconnectedGraph`] if the graph is not
    /// connected and [`GraphError::UnweightedGraph`] if any edge has no
    /// weight.
    pub fn get_minimum_spanning_tree(&self) -> Result<(Undigraph, f64)> {
        self.spanning_tree(true)
    }

    /// The maximum-weight spanning tree and its total weight.
    ///
    /// The mirror image of [`Undigraph::get_minimum_spanning_tree`],
    /// walking the weight tiers downwards.
    ///
    /// # Errors
    ///
    /// As [`Undigraph::get_minimum_spanning_tree`].
    pub fn get_maximum_spanning_tree(&self) -> Result<(Undigraph, f64)> {
        self.spanning_tree(false)
    }

    fn spanning_tree(&self, minimize: bool) -> Result<(Undigraph, f64)> {
        if !self.is_connected()? {
            return Err(GraphError::DisconnectedGraph);
        }
        if !self.is_weighted() {
            return Err(GraphError::UnweightedGraph);
        }

        debug!(
            "building {} spanning tree",
            if minimize { "minimum" } else { "maximum" }
        );

        let mut tree = self.clone();
        tree.remove_all_edges();

        let lowest = self.minimum_weight()?;
        let highest = self.maximum_weight()?;

        // Offset by one so the first tier passes the loop condition.
        let mut threshold = if minimize { lowest - 1.0 } else { highest + 1.0 };
        let mut total = 0.0;

        loop {
            if minimize {
                if threshold >= highest {
                    break;
                }
                threshold = match self.minimum_weight_above(threshold)? {
                    Some(weight) => weight,
                    None => break,
                };
            } else {
                if threshold <= lowest {
                    break;
                }
                threshold = match self.maximum_weight_below(threshold)? {
                    Some(weight) => weight,
                    None => break,
                };
            }

            for candidate in self.edges_with_weight(threshold)? {
                tree.connect_nodes(candidate.from(), candidate.to(), Some(threshold))?;
                let added_id = tree
                    .get_node_by_id(candidate.from())?
                    .get_edge_with(candidate.to(), 1)?
                    .id();

                if tree.has_cycle()? {
                    tree.remove_edge(&added_id);
                    continue;
                }

                total += threshold;

                if tree.is_tree()? {
                    break;
                }
            }
        }

        Ok((tree, total))
    }
}
