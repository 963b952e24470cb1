//! # graphein
//!
//! A graph-theory engine: directed and undirected graphs built from an
//! adjacency specification, with structural queries over them.
//!
//! ## Core Principles
//!
//! - **Validated Construction**: a graph only exists once its adjacency
//!   specification has been checked (and, undirected, proven symmetric)
//! - **Deterministic Output**: nodes keep insertion order, so matrices,
//!   component listings and exports are reproducible
//! - **Isolated Queries**: before/after analyses (cut sets, spanning
//!   trees) work on a full copy and never mutate the queried graph
//! - **Zero Magic**: explicit over implicit, always
//!
//! ## Architecture
//!
//! ```text
//! Digraph / Undigraph (direction-specific rules and algorithms)
//!     ↓
//! Graph core (nodes, edges, mutation, walks, adjacency, weights)
//!     ↓
//! Export surfaces (JSON, graphonline XML)
//! ```
//!
//! ## Example
//!
//! ```
//! use graphein::Undigraph;
//!
//! # fn example() -> graphein::Result<()> {
//! let graph = Undigraph::weighted(
//!     vec![("a", vec!["b", "c"]), ("b", vec!["a", "c"]), ("c", vec!["a", "b"])],
//!     vec![("a-b", 1.0), ("a-c", 2.0), ("b-c", 3.0)],
//! )?;
//!
//! let (tree, total) = graph.get_minimum_spanning_tree()?;
//! assert_eq!(total, 3.0);
//! assert_eq!(tree.edge_count(), 2);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod export;
pub mod graph;

mod digraph;
mod undigraph;

// Re-export main types
pub use digraph::Digraph;
pub use error::{GraphError, Result};
pub use graph::{new_graph, Edge, Graph, Node, Structure, Weights};
pub use undigraph::Undigraph;
