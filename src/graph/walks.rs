//! Walk, trail, path and cycle classification over node sequences.

use itertools::Itertools;

use super::core::Graph;
use super::edge::Edge;
use super::node::Node;
use crate::error::{GraphError, Result};

impl Graph {
    /// True if every node in the sequence is adjacent to the next one
    /// (respecting edge direction in a directed graph).
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidArgument`] for fewer than 2 nodes and
    /// [`GraphError::NodeNotFound`] for an unknown node ID.
    pub fn is_walk(&self, node_ids: &[&str]) -> Result<bool> {
        let nodes = self.resolve_walk(node_ids)?;

        Ok(nodes
            .windows(2)
            .all(|pair| pair[0].has_adjacent_id(pair[1].id())))
    }

    /// True if the sequence is a walk whose first and last nodes differ.
    ///
    /// # Errors
    ///
    /// As [`Graph::is_walk`].
    pub fn is_open_walk(&self, node_ids: &[&str]) -> Result<bool> {
        if !self.is_walk(node_ids)? {
            return Ok(false);
        }

        Ok(node_ids[0].trim() != node_ids[node_ids.len() - 1].trim())
    }

    /// True if the sequence is a walk whose first and last nodes coincide.
    ///
    /// # Errors
    ///
    /// As [`Graph::is_walk`].
    pub fn is_closed_walk(&self, node_ids: &[&str]) -> Result<bool> {
        if !self.is_walk(node_ids)? {
            return Ok(false);
        }

        Ok(node_ids[0].trim() == node_ids[node_ids.len() - 1].trim())
    }

    /// True if the sequence is a walk in which no edge repeats.
    ///
    /// Edges are compared as resolved edge values (endpoints, multiplicity
    /// index and weight), not as node pairs.
    ///
    /// # Errors
    ///
    /// As [`Graph::is_walk`].
    pub fn is_trail(&self, node_ids: &[&str]) -> Result<bool> {
        if !self.is_walk(node_ids)? {
            return Ok(false);
        }

        let nodes = self.resolve_walk(node_ids)?;
        let mut used: Vec<Edge> = Vec::new();

        for pair in nodes.windows(2) {
            let edge = pair[0].get_edge_with(pair[1].id(), 1)?.clone();
            if used.contains(&edge) {
                return Ok(false);
            }
            used.push(edge);
        }

        Ok(true)
    }

    /// True if the sequence is both a closed walk and a trail.
    ///
    /// # Errors
    ///
    /// As [`Graph::is_walk`].
    pub fn is_circuit(&self, node_ids: &[&str]) -> Result<bool> {
        if !self.is_walk(node_ids)? {
            return Ok(false);
        }

        Ok(self.is_trail(node_ids)? && self.is_closed_walk(node_ids)?)
    }

    /// True if the sequence is an open walk, a trail, and repeats no node.
    ///
    /// # Errors
    ///
    /// As [`Graph::is_walk`].
    pub fn is_path(&self, node_ids: &[&str]) -> Result<bool> {
        if !self.is_walk(node_ids)? {
            return Ok(false);
        }

        let nodes = self.resolve_walk(node_ids)?;
        let repeats = nodes
            .iter()
            .any(|node| nodes.iter().filter(|other| other.id() == node.id()).count() > 1);

        Ok(self.is_trail(node_ids)? && !repeats)
    }

    /// True if the sequence is a closed walk whose prefix (the sequence
    /// minus its final node) is a path.
    ///
    /// # Errors
    ///
    /// As [`Graph::is_walk`].
    pub fn is_cycle(&self, node_ids: &[&str]) -> Result<bool> {
        if !self.is_walk(node_ids)? {
            return Ok(false);
        }

        Ok(self.is_path(&node_ids[..node_ids.len() - 1])? && self.is_closed_walk(node_ids)?)
    }

    /// True if some closed walk through distinct nodes exists.
    ///
    /// Scans node permutations of every length from 3 up to the node
    /// count; intentionally exhaustive rather than clever, which keeps it
    /// exact on multigraphs and loops alike.
    pub fn has_cycle(&self) -> Result<bool> {
        let ids: Vec<String> = self.nodes().iter().map(|n| n.id().to_string()).collect();

        for length in 3..=ids.len() {
            for permutation in ids.iter().permutations(length) {
                let mut walk: Vec<&str> = permutation.iter().map(|id| id.as_str()).collect();
                walk.push(walk[0]);

                if self.is_closed_walk(&walk)? {
                    return Ok(true);
                }
            }
        }

        Ok(false)
    }

    fn resolve_walk(&self, node_ids: &[&str]) -> Result<Vec<&Node>> {
        if node_ids.len() < 2 {
            return Err(GraphError::invalid_argument(
                "a walk must have at least 2 nodes",
            ));
        }

        node_ids.iter().map(|id| self.get_node_by_id(id)).collect()
    }
}
