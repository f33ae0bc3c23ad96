//! Error types for graph generation and materialization.
//!
//! All fallible operations return [`Result<T>`]. Configuration problems are
//! reported before anything is written; storage problems are reported as they
//! happen and leave earlier committed batches in place.

use thiserror::Error;

/// Result type alias for graphgen operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Error type shared by the generators, the orchestrator and the host store.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Invalid generator parameters, detected at construction time.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Which parameter combination was rejected
        message: String,
    },

    /// Storage backend or host sink failure
    #[error("Storage error: {message}")]
    Storage {
        /// Detailed error message
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
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

    /// Invalid operation on the host store (e.g. self-loop relationship)
    #[error("Invalid operation: {message}")]
    InvalidOperation {
        /// Description of what went wrong
        message: String,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error details
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Materialization was stopped at a batch boundary.
    #[error("Generation cancelled after {committed_batches} committed batches")]
    Cancelled {
        /// Units of work committed before the stop was observed
        committed_batches: usize,
    },
}

impl GraphError {
    /// Create an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a storage error from a message and optional source.
    pub fn storage<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Storage {
            message: message.into(),
            source: source.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        }
    }

    /// Create a serialization error from a message and optional source.
    pub fn serialization<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Serialization {
            message: message.into(),
            source: source.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        }
    }

    /// Whether this error was raised by parameter validation.
    pub fn is_invalid_config(&self) -> bool {
        matches!(self, Self::InvalidConfig { .. })
    }
}
