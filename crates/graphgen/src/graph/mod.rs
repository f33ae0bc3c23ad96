//! Host property-graph store.
//!
//! Generated graphs are materialized into a [`PropertyGraph`]:
//! - [`Node`]: a labelled vertex with properties
//! - [`Edge`]: a typed relationship between two nodes
//! - [`PropertyGraph`]: the store, with units of work committed as storage batches

mod property;
mod property_graph;
mod types;

pub use property::{PropertyMap, PropertyValue};
pub use property_graph::PropertyGraph;
pub use types::{Direction, Edge, EdgeId, Node, NodeId};
