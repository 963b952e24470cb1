//! Directed graphs.

use std::collections::BTreeSet;
use std::ops::{Deref, DerefMut};

use serde::Serialize;

use crate::error::{GraphError, Result};
use crate::graph::{normalize_structure, normalize_weights, Graph};
use crate::undigraph::Undigraph;

/// A directed graph.
///
/// Wraps the shared [`Graph`] core (available through `Deref`) and adds
/// the construction rules and algorithms specific to directed graphs.
///
/// # Examples
///
/// ```
/// use graphein::Digraph;
///
/// # fn example() -> graphein::Result<()> {
/// let graph = Digraph::new(vec![
///     ("0", vec!["1", "2"]),
///     ("1", vec!["2"]),
///     ("2", vec![]),
/// ])?;
///
/// assert_eq!(graph.outdegree("0")?, 2);
/// assert_eq!(graph.indegree("2")?, 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Digraph {
    core: Graph,
}

impl Deref for Digraph {
    type Target = Graph;

    fn deref(&self) -> &Graph {
        &self.core
    }
}

impl DerefMut for Digraph {
    fn deref_mut(&mut self) -> &mut Graph {
        &mut self.core
    }
}

impl Digraph {
    /// Build a directed graph from an adjacency specification. Each
    /// listed target produces one arrow from the key node to it.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Structure`] for an unknown adjacency target.
    pub fn new<K: Into<String>>(structure: Vec<(K, Vec<K>)>) -> Result<Self> {
        Self::weighted(structure, Vec::<(String, f64)>::new())
    }

    /// Build a directed graph with weights keyed by edge ID (`a->b`).
    ///
    /// # Errors
    ///
    /// As [`Digraph::new`], plus [`GraphError::EdgeNotFound`] for a
    /// weight keyed by an edge the structure does not produce.
    pub fn weighted<K, W>(structure: Vec<(K, Vec<K>)>, weights: Vec<(W, f64)>) -> Result<Self>
    where
        K: Into<String>,
        W: Into<String>,
    {
        Ok(Self {
            core: Graph::build(
                true,
                normalize_structure(structure),
                normalize_weights(weights),
            )?,
        })
    }

    /// The underlying graph core.
    pub fn as_graph(&self) -> &Graph {
        &self.core
    }

    /// True if every node has the same outdegree.
    ///
    /// # Errors
    ///
    /// Propagates degree lookup failures.
    pub fn is_regular(&self) -> Result<bool> {
        match self.nodes().first() {
            Some(node) => {
                let outdegree = self.outdegree(node.id())?;
                self.is_k_regular(outdegree)
            }
            None => Ok(true),
        }
    }

    /// True if every node has outdegree `k`.
    ///
    /// # Errors
    ///
    /// Propagates degree lookup failures.
    pub fn is_k_regular(&self, k: usize) -> Result<bool> {
        for node in self.nodes() {
            if self.outdegree(node.id())? != k {
                return Ok(false);
            }
        }

        Ok(true)
    }

    /// True if the underlying undirected graph is a tree.
    ///
    /// # Errors
    ///
    /// Propagates conversion and component failures.
    pub fn is_tree(&self) -> Result<bool> {
        self.get_undigraph()?.is_tree()
    }

    /// True if exactly one node has indegree 0 and every other node has
    /// indegree 1, with no cycle: the arrows all point away from a root.
    ///
    /// # Errors
    ///
    /// Propagates degree lookup and cycle-scan failures.
    pub fn is_rooted_tree(&self) -> Result<bool> {
        let mut roots = 0;
        let mut branches = 0;

        for node in self.nodes() {
            match self.indegree(node.id())? {
                0 => roots += 1,
                1 => branches += 1,
                _ => {}
            }
        }

        Ok(roots == 1 && branches == self.node_count() - 1 && !self.has_cycle()?)
    }

    /// Partition of all node IDs into strongly connected components, one
    /// sorted ID list per component, the partition itself sorted.
    ///
    /// # Errors
    ///
    /// Propagates reachability failures.
    pub fn strong_connected_components(&self) -> Result<Vec<Vec<String>>> {
        let mut components: BTreeSet<Vec<String>> = BTreeSet::new();

        for node in self.nodes() {
            components.insert(self.strong_connected_component_of(node.id())?);
        }

        Ok(components.into_iter().collect())
    }

    /// True if every node is reachable from every other node along the
    /// arrows.
    ///
    /// # Errors
    ///
    /// As [`Digraph::strong_connected_components`].
    pub fn is_strongly_connected(&self) -> Result<bool> {
        Ok(self.strong_connected_components()?.len() == 1)
    }

    /// True if the underlying undirected graph is connected.
    ///
    /// # Errors
    ///
    /// Propagates conversion and component failures.
    pub fn is_weakly_connected(&self) -> Result<bool> {
        self.get_undigraph()?.is_connected()
    }

    /// True if every node has equal indegree and outdegree, so a closed
    /// trail through every arrow exists.
    ///
    /// # Errors
    ///
    /// Propagates degree lookup failures.
    pub fn is_eulerian(&self) -> Result<bool> {
        for node in self.nodes() {
            if self.indegree(node.id())? != self.outdegree(node.id())? {
                return Ok(false);
            }
        }

        Ok(true)
    }

    /// True if exactly two nodes break the indegree/outdegree balance,
    /// one short an arrow out (the trail's end) and one short an arrow in
    /// (its start).
    ///
    /// # Errors
    ///
    /// Propagates degree lookup failures.
    pub fn has_eulerian_trail(&self) -> Result<bool> {
        let unbalanced = self.unbalanced_nodes()?;

        if unbalanced.len() != 2 {
            return Ok(false);
        }

        let (_, in0, out0) = unbalanced[0].clone();
        let (_, in1, out1) = unbalanced[1].clone();

        Ok((in0 == out0 + 1 && out1 == in1 + 1) || (in1 == out1 + 1 && out0 == in0 + 1))
    }

    /// The start and end of the Eulerian trail (the unbalanced nodes),
    /// in node order.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NoEulerianTrail`] if the graph has none.
    pub fn eulerian_trail_extremes(&self) -> Result<Vec<String>> {
        if !self.has_eulerian_trail()? {
            return Err(GraphError::NoEulerianTrail);
        }

        Ok(self
            .unbalanced_nodes()?
            .into_iter()
            .map(|(id, _, _)| id)
            .collect())
    }

    fn unbalanced_nodes(&self) -> Result<Vec<(String, usize, usize)>> {
        let mut unbalanced = Vec::new();

        for node in self.nodes() {
            let indegree = self.indegree(node.id())?;
            let outdegree = self.outdegree(node.id())?;
            if indegree != outdegree {
                unbalanced.push((node.id().to_string(), indegree, outdegree));
            }
        }

        Ok(unbalanced)
    }

    /// The underlying undirected graph: every arrow becomes an edge, and
    /// one-way connections gain their mirrored listing.
    ///
    /// # Errors
    ///
    /// Propagates construction failures for the derived structure.
    pub fn get_undigraph(&self) -> Result<Undigraph> {
        let mut structure: Vec<(String, Vec<String>)> = self
            .nodes()
            .iter()
            .map(|node| {
                (
                    node.id().to_string(),
                    node.adjacent_ids().iter().map(|id| id.to_string()).collect(),
                )
            })
            .collect();

        // Mirror each connection unless the other side already lists it.
        for i in 0..structure.len() {
            let key = structure[i].0.clone();
            let targets = structure[i].1.clone();

            for target in &targets {
                if let Some((_, mirrored)) = structure.iter_mut().find(|(k, _)| k == target) {
                    if !mirrored.contains(&key) {
                        mirrored.push(key.clone());
                    }
                }
            }
        }

        Undigraph::new(structure)
    }
}
