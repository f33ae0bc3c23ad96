//! Host store capabilities used during materialization.

use crate::error::Result;
use crate::graph::{NodeId, PropertyGraph, PropertyMap};
use std::fmt;

/// The writes a generation run needs from its host store.
///
/// Writes between two [`commit`](GraphSink::commit) calls form one unit of
/// work. The orchestrator calls [`rollback`](GraphSink::rollback) after any
/// failure so the in-flight unit is abandoned while earlier ones stay.
pub trait GraphSink {
    /// Opaque reference to a created node.
    type NodeHandle: Copy + fmt::Debug;

    /// Create a node.
    ///
    /// # Errors
    ///
    /// Any storage failure.
    fn create_node(&mut self, label: &str, properties: PropertyMap) -> Result<Self::NodeHandle>;

    /// Create a relationship between two nodes created earlier in this run.
    ///
    /// # Errors
    ///
    /// Any storage failure.
    fn create_relationship(
        &mut self,
        source: Self::NodeHandle,
        target: Self::NodeHandle,
        rel_type: &str,
        properties: PropertyMap,
    ) -> Result<()>;

    /// Commit the current unit of work.
    ///
    /// # Errors
    ///
    /// Any storage failure. The unit of work is lost.
    fn commit(&mut self) -> Result<()>;

    /// Abandon the current unit of work.
    fn rollback(&mut self);
}

impl GraphSink for PropertyGraph {
    type NodeHandle = NodeId;

    fn create_node(&mut self, label: &str, properties: PropertyMap) -> Result<NodeId> {
        Ok(self.stage_node(label, properties))
    }

    fn create_relationship(
        &mut self,
        source: NodeId,
        target: NodeId,
        rel_type: &str,
        properties: PropertyMap,
    ) -> Result<()> {
        self.stage_edge(source, target, rel_type, properties)
            .map(|_| ())
    }

    fn commit(&mut self) -> Result<()> {
        PropertyGraph::commit(self).map(|_| ())
    }

    fn rollback(&mut self) {
        PropertyGraph::rollback(self);
    }
}
