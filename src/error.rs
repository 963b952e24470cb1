//! Error types for graph operations.
//!
//! All fallible operations return [`Result<T>`] with context-rich error messages.

use thiserror::Error;

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Comprehensive error type for all graph operations.
///
/// Errors are fatal to the calling operation; no operation retries
/// internally, and a failed construction or mutation leaves no partial
/// state behind.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Malformed or asymmetric adjacency structure
    #[error("Invalid structure: {message}")]
    Structure {
        /// What is wrong with the structure
        message: String,
    },

    /// Node not found in the graph
    #[error("Node not found: {node_id}")]
    NodeNotFound {
        /// ID of the missing node
        node_id: String,
    },

    /// Edge not found in the graph
    #[error("Edge not found: {edge_id}")]
    EdgeNotFound {
        /// ID of the missing edge
        edge_id: String,
    },

    /// Weight-dependent query on a graph with one or more unweighted edges
    #[error("One or more edges have no weight")]
    UnweightedGraph,

    /// Connectivity-dependent query on a disconnected graph
    #[error("Graph is not connected")]
    DisconnectedGraph,

    /// Eulerian-trail query on a graph without one
    #[error("Graph has no eulerian trail")]
    NoEulerianTrail,

    /// Degree accessor used on the wrong graph kind
    #[error("Wrong graph kind: {message}")]
    WrongGraphKind {
        /// Which accessor was misused and what to use instead
        message: String,
    },

    /// Invalid argument (zero power, walk shorter than 2 nodes, duplicate insertion)
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of what went wrong
        message: String,
    },

    /// I/O error while writing an export file
    #[error("I/O error: {message}")]
    Io {
        /// Detailed error message
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl GraphError {
    /// Create a structure error from a message.
    pub fn structure(message: impl Into<String>) -> Self {
        Self::Structure {
            message: message.into(),
        }
    }

    /// Create an invalid-argument error from a message.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a wrong-graph-kind error from a message.
    pub fn wrong_kind(message: impl Into<String>) -> Self {
        Self::WrongGraphKind {
            message: message.into(),
        }
    }

    /// Create an I/O error from a message and optional source.
    pub fn io<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Io {
            message: message.into(),
            source: source.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        }
    }
}
