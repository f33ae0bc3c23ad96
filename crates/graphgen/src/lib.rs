//! # graphgen
//!
//! Synthetic random graphs, generated reproducibly and materialized into a
//! property-graph store in bounded batches.
//!
//! ## Architecture
//!
//! ```text
//! GenerationRequest (JSON, defaults)
//!     ↓
//! Relationship generators (Erdos-Renyi, Watts-Strogatz, Barabasi-Albert, ...)
//!     ↓
//! GraphGenerator (node/relationship creation, batching, rollback)
//!     ↓
//! GraphSink (PropertyGraph or any host store)
//!     ↓
//! Storage Backend (memory, RocksDB)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use graphgen::generate::GenerationRequest;
//! use graphgen::PropertyGraph;
//!
//! let request = GenerationRequest::from_json(
//!     r#"{"algorithm": "erdos_renyi", "nodes": 20, "edges": 190, "seed": 42}"#,
//! )
//! .unwrap();
//!
//! let mut graph = PropertyGraph::in_memory().unwrap();
//! let report = request.execute(&mut graph).unwrap();
//!
//! assert_eq!(report.nodes_created, 20);
//! assert_eq!(graph.count_edges_with_type("FRIEND_OF"), 190);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod generate;
pub mod graph;
pub mod storage;

// Re-export main types
pub use error::{GraphError, Result};
pub use graph::{Direction, Edge, EdgeId, Node, NodeId, PropertyGraph, PropertyMap, PropertyValue};
pub use storage::{MemoryBackend, StorageBackend};
#[cfg(feature = "rocksdb-backend")]
pub use storage::RocksDBBackend;
