//! Adjacency expansion, reachability, components and cut-set detection.

use std::collections::BTreeSet;

use crate::error::{GraphError, Result};

use super::core::Graph;

impl Graph {
    /// The node IDs reachable in exactly `power` hops from the given
    /// starting IDs: positive powers follow edge direction, negative
    /// powers run against it. The result is de-duplicated and sorted.
    ///
    /// The exclusion flags apply to the final hop only: `skip_loops`
    /// drops a starting node connected to itself from its own expansion,
    /// `skip_bilaterals` drops neighbors connected in both directions.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidArgument`] for `power == 0` and
    /// [`GraphError::NodeNotFound`] for an unknown starting ID.
    pub fn adjacency_function(
        &self,
        node_ids: &[&str],
        power: i32,
        skip_loops: bool,
        skip_bilaterals: bool,
    ) -> Result<Vec<String>> {
        if power == 0 {
            return Err(GraphError::invalid_argument(
                "power in adjacency function cannot be zero",
            ));
        }

        if power == 1 {
            self.adjacency_multiple(node_ids, skip_loops, skip_bilaterals)
        } else if power == -1 {
            self.inverse_adjacency_multiple(node_ids, skip_loops, skip_bilaterals)
        } else if power > 1 {
            let inner = self.adjacency_function(node_ids, power - 1, false, false)?;
            let inner: Vec<&str> = inner.iter().map(String::as_str).collect();
            self.adjacency_multiple(&inner, skip_loops, skip_bilaterals)
        } else {
            let inner = self.adjacency_function(node_ids, power + 1, false, false)?;
            let inner: Vec<&str> = inner.iter().map(String::as_str).collect();
            self.inverse_adjacency_multiple(&inner, skip_loops, skip_bilaterals)
        }
    }

    // One forward hop from a single node, duplicates preserved.
    fn adjacency_single(
        &self,
        node_id: &str,
        skip_loops: bool,
        skip_bilaterals: bool,
    ) -> Result<Vec<String>> {
        let node = self.get_node_by_id(node_id)?;
        let mut output: Vec<String> = node
            .adjacent_ids()
            .iter()
            .map(|id| id.to_string())
            .collect();

        if skip_loops && node.has_loop() {
            if let Some(position) = output.iter().position(|id| id == node.id()) {
                output.remove(position);
            }
        }

        if skip_bilaterals {
            for adjacent in node.adjacent_ids() {
                if self.is_bilaterally_connected_with(adjacent, node.id())? {
                    if let Some(position) = output.iter().position(|id| id == adjacent) {
                        output.remove(position);
                    }
                }
            }
        }

        Ok(output)
    }

    // One backward hop into a single node, duplicates preserved.
    fn inverse_adjacency_single(
        &self,
        node_id: &str,
        skip_loops: bool,
        skip_bilaterals: bool,
    ) -> Result<Vec<String>> {
        let node = self.get_node_by_id(node_id)?;
        let id = node.id().to_string();
        let has_loop = node.has_loop();

        let mut output: Vec<String> = Vec::new();

        for other in self.nodes() {
            for adjacent in other.adjacent_ids() {
                if adjacent == id {
                    output.push(other.id().to_string());

                    if skip_bilaterals && self.is_bilaterally_connected_with(other.id(), &id)? {
                        if let Some(position) = output.iter().position(|x| x == other.id()) {
                            output.remove(position);
                        }
                    }
                }
            }
        }

        if skip_loops && has_loop {
            if let Some(position) = output.iter().position(|x| *x == id) {
                output.remove(position);
            }
        }

        Ok(output)
    }

    fn adjacency_multiple(
        &self,
        node_ids: &[&str],
        skip_loops: bool,
        skip_bilaterals: bool,
    ) -> Result<Vec<String>> {
        let mut output = Vec::new();
        for id in node_ids {
            output.extend(self.adjacency_single(id, skip_loops, skip_bilaterals)?);
        }

        output.sort();
        output.dedup();
        Ok(output)
    }

    fn inverse_adjacency_multiple(
        &self,
        node_ids: &[&str],
        skip_loops: bool,
        skip_bilaterals: bool,
    ) -> Result<Vec<String>> {
        let mut output = Vec::new();
        for id in node_ids {
            output.extend(self.inverse_adjacency_single(id, skip_loops, skip_bilaterals)?);
        }

        output.sort();
        output.dedup();
        Ok(output)
    }

    /// The connected component containing the given node, as a sorted ID
    /// list: the fixed point of repeated one-hop forward expansion, with
    /// as many rounds as the graph has nodes.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if no such node exists.
    pub fn connected_component_of(&self, node_id: &str) -> Result<Vec<String>> {
        let id = self.get_node_by_id(node_id)?.id().to_string();
        let mut output: BTreeSet<String> = BTreeSet::from([id]);

        for _ in 0..self.node_count() {
            let gamma = {
                let current: Vec<&str> = output.iter().map(String::as_str).collect();
                self.adjacency_function(&current, 1, false, false)?
            };
            output.extend(gamma);
        }

        Ok(output.into_iter().collect())
    }

    /// Partition of all node IDs into connected components, one sorted ID
    /// list per component, the partition itself sorted.
    ///
    /// # Errors
    ///
    /// Propagates lookup failures from component expansion (not reachable
    /// on a consistent graph).
    pub fn connected_components(&self) -> Result<Vec<Vec<String>>> {
        let mut components: BTreeSet<Vec<String>> = BTreeSet::new();

        for node in self.nodes() {
            components.insert(self.connected_component_of(node.id())?);
        }

        Ok(components.into_iter().collect())
    }

    /// True if the graph has exactly one connected component.
    ///
    /// # Errors
    ///
    /// As [`Graph::connected_components`].
    pub fn is_connected(&self) -> Result<bool> {
        Ok(self.connected_components()?.len() == 1)
    }

    /// True if each of the two nodes is reachable from the other by some
    /// directed path, checked by forward and backward expansion run in
    /// lockstep for at most one round per node in the graph.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::WrongGraphKind`] on an undirected graph and
    /// [`GraphError::NodeNotFound`] for an unknown ID.
    pub fn is_strongly_connected_with(&self, node_id: &str, other_id: &str) -> Result<bool> {
        if !self.is_directed() {
            return Err(GraphError::wrong_kind(
                "is_strongly_connected_with() can only be used with directed graphs",
            ));
        }

        let id = self.get_node_by_id(node_id)?.id().to_string();
        let other = self.get_node_by_id(other_id)?.id().to_string();

        let mut reaches: BTreeSet<String> = BTreeSet::from([id.clone()]);
        let mut reached_from: BTreeSet<String> = BTreeSet::from([id.clone()]);

        for power in 1..=self.node_count() as i32 {
            let start = [id.as_str()];
            reaches.extend(self.adjacency_function(&start, power, false, false)?);
            reached_from.extend(self.adjacency_function(&start, -power, false, false)?);

            if reaches.contains(&other) && reached_from.contains(&other) {
                return Ok(true);
            }
        }

        Ok(false)
    }

    /// The strongly connected component containing the given node, as a
    /// sorted ID list.
    ///
    /// # Errors
    ///
    /// As [`Graph::is_strongly_connected_with`].
    pub fn strong_connected_component_of(&self, node_id: &str) -> Result<Vec<String>> {
        let id = self.get_node_by_id(node_id)?.id().to_string();
        let mut component: BTreeSet<String> = BTreeSet::new();

        for other in self.nodes() {
            if self.is_strongly_connected_with(&id, other.id())? {
                component.insert(other.id().to_string());
            }
        }

        Ok(component.into_iter().collect())
    }

    /// True if removing the node (with its edges) increases the number of
    /// connected components. Works on a full copy; the graph itself is
    /// never mutated.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if no such node exists.
    pub fn is_cut_node(&self, node_id: &str) -> Result<bool> {
        let before = self.connected_components()?.len();

        let mut copy = self.clone();
        copy.remove_node(node_id)?;
        let after = copy.connected_components()?.len();

        Ok(after > before)
    }

    /// All cut nodes (articulation points), in node order.
    ///
    /// # Errors
    ///
    /// As [`Graph::is_cut_node`].
    pub fn cut_nodes(&self) -> Result<Vec<String>> {
        let mut output = Vec::new();

        for node in self.nodes() {
            if self.is_cut_node(node.id())? {
                output.push(node.id().to_string());
            }
        }

        Ok(output)
    }

    /// True if removing the edge increases the number of connected
    /// components. Works on a full copy; the graph itself is never
    /// mutated.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EdgeNotFound`] if no such edge exists.
    pub fn is_cut_edge(&self, edge_id: &str) -> Result<bool> {
        if !self.nodes().iter().any(|node| node.has_edge_by_id(edge_id, 1)) {
            return Err(GraphError::EdgeNotFound {
                edge_id: edge_id.trim().to_string(),
            });
        }

        let before = self.connected_components()?.len();

        let mut copy = self.clone();
        copy.remove_edge(edge_id);
        let after = copy.connected_components()?.len();

        Ok(after > before)
    }

    /// The IDs of all cut edges (bridges), sorted and de-duplicated.
    ///
    /// # Errors
    ///
    /// As [`Graph::is_cut_edge`].
    pub fn cut_edges(&self) -> Result<Vec<String>> {
        let mut output: BTreeSet<String> = BTreeSet::new();

        for edge in self.unique_edges() {
            if self.is_cut_edge(&edge.id())? {
                output.insert(edge.id());
            }
        }

        Ok(output.into_iter().collect())
    }
}
