//! The property graph store that generated graphs are written into.

use super::property::PropertyMap;
use super::types::{Direction, Edge, EdgeId, Node, NodeId};
use crate::error::{GraphError, Result};
use crate::storage::{BatchOperation, StorageBackend};
use log::{debug, info, trace};
use std::collections::{HashMap, HashSet};

const COUNTERS_KEY: &[u8] = b"meta:counters";

/// Writes staged since the last commit.
#[derive(Debug, Default)]
struct UnitOfWork {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    node_ids: HashSet<NodeId>,
}

impl UnitOfWork {
    fn len(&self) -> usize {
        self.nodes.len() + self.edges.len()
    }

    fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}

/// A labelled property graph over a [`StorageBackend`].
///
/// Writes come in two flavours. [`add_node`](Self::add_node) and
/// [`add_edge`](Self::add_edge) persist immediately. [`stage_node`](Self::stage_node)
/// and [`stage_edge`](Self::stage_edge) collect writes into a unit of work that
/// becomes visible and durable only on [`commit`](Self::commit), as one atomic
/// storage batch.
pub struct PropertyGraph {
    storage: Box<dyn StorageBackend>,
    // Monotonic ID counters; IDs of rolled back writes are not reused
    node_counter: NodeId,
    edge_counter: EdgeId,
    nodes: HashMap<NodeId, Node>,
    edges: HashMap<EdgeId, Edge>,
    adjacency_out: HashMap<NodeId, HashSet<EdgeId>>,
    adjacency_in: HashMap<NodeId, HashSet<EdgeId>>,
    pending: UnitOfWork,
}

impl PropertyGraph {
    /// Open a graph over the given storage backend, loading whatever it already holds.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Storage`] or [`GraphError::Serialization`] if the
    /// stored state cannot be read back.
    pub fn with_backend(backend: Box<dyn StorageBackend>) -> Result<Self> {
        let mut graph = Self {
            storage: backend,
            node_counter: 0,
            edge_counter: 0,
            nodes: HashMap::new(),
            edges: HashMap::new(),
            adjacency_out: HashMap::new(),
            adjacency_in: HashMap::new(),
            pending: UnitOfWork::default(),
        };

        graph.rebuild_from_storage()?;

        Ok(graph)
    }

    /// Open a persistent graph at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Storage`] if the database cannot be opened.
    #[cfg(feature = "rocksdb-backend")]
    pub fn open<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        use crate::storage::RocksDBBackend;
        info!("Opening graph at path: {:?}", path.as_ref());
        let backend = RocksDBBackend::open(path)?;
        Self::with_backend(Box::new(backend))
    }

    /// Create an empty graph over a fresh [`MemoryBackend`](crate::storage::MemoryBackend).
    ///
    /// # Errors
    ///
    /// Never fails in practice; the signature matches [`with_backend`](Self::with_backend).
    pub fn in_memory() -> Result<Self> {
        use crate::storage::MemoryBackend;
        Self::with_backend(Box::new(MemoryBackend::new()))
    }

    /// Add a node and persist it immediately.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Storage`] if persistence fails.
    pub fn add_node(&mut self, label: &str, properties: PropertyMap) -> Result<NodeId> {
        let node_id = self.next_node_id();
        debug!("Adding node: id={node_id}, label={label}");
        let node = Node::new(node_id, label, properties);

        let (key, value) = encode_node(&node)?;
        self.storage.put(&key, &value)?;
        self.save_counters()?;

        self.nodes.insert(node_id, node);
        Ok(node_id)
    }

    /// Add an edge and persist it immediately.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if either endpoint is not committed,
    /// or a storage error if persistence fails.
    pub fn add_edge(
        &mut self,
        source_id: NodeId,
        target_id: NodeId,
        rel_type: &str,
        properties: PropertyMap,
    ) -> Result<EdgeId> {
        debug!("Adding edge: source={source_id}, target={target_id}, type={rel_type}");
        self.get_node(source_id)?;
        self.get_node(target_id)?;

        let edge_id = self.next_edge_id();
        let edge = Edge::new(edge_id, source_id, target_id, rel_type, properties);

        let (key, value) = encode_edge(&edge)?;
        self.storage.put(&key, &value)?;
        self.save_counters()?;

        self.index_edge(edge);
        Ok(edge_id)
    }

    /// Stage a node in the current unit of work.
    ///
    /// The returned ID is final; the node becomes visible to lookups after
    /// [`commit`](Self::commit).
    pub fn stage_node(&mut self, label: &str, properties: PropertyMap) -> NodeId {
        let node_id = self.next_node_id();
        trace!("Staging node: id={node_id}, label={label}");
        self.pending.node_ids.insert(node_id);
        self.pending.nodes.push(Node::new(node_id, label, properties));
        node_id
    }

    /// Stage an edge in the current unit of work.
    ///
    /// Endpoints may be committed nodes or nodes staged in the same unit of work.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if an endpoint is unknown.
    pub fn stage_edge(
        &mut self,
        source_id: NodeId,
        target_id: NodeId,
        rel_type: &str,
        properties: PropertyMap,
    ) -> Result<EdgeId> {
        for endpoint in [source_id, target_id] {
            if !self.nodes.contains_key(&endpoint) && !self.pending.node_ids.contains(&endpoint) {
                return Err(GraphError::NodeNotFound {
                    node_id: endpoint.to_string(),
                });
            }
        }

        let edge_id = self.next_edge_id();
        trace!("Staging edge: id={edge_id}, source={source_id}, target={target_id}");
        self.pending
            .edges
            .push(Edge::new(edge_id, source_id, target_id, rel_type, properties));
        Ok(edge_id)
    }

    /// Number of writes staged since the last commit.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Persist the current unit of work as one atomic storage batch.
    ///
    /// Returns the number of nodes and edges committed. On failure the unit of
    /// work is discarded; earlier commits are untouched.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Serialization`] or [`GraphError::Storage`] if the
    /// batch cannot be encoded or written.
    pub fn commit(&mut self) -> Result<usize> {
        if self.pending.is_empty() {
            return Ok(0);
        }

        let unit = std::mem::take(&mut self.pending);
        let mut operations = Vec::with_capacity(unit.len() + 1);
        for node in &unit.nodes {
            let (key, value) = encode_node(node)?;
            operations.push(BatchOperation::Put { key, value });
        }
        for edge in &unit.edges {
            let (key, value) = encode_edge(edge)?;
            operations.push(BatchOperation::Put { key, value });
        }
        operations.push(BatchOperation::Put {
            key: COUNTERS_KEY.to_vec(),
            value: self.encode_counters()?,
        });

        self.storage.write_batch(operations)?;

        let committed = unit.len();
        for node in unit.nodes {
            self.nodes.insert(node.id, node);
        }
        for edge in unit.edges {
            self.index_edge(edge);
        }
        debug!("Committed unit of work with {committed} writes");

        Ok(committed)
    }

    /// Discard the current unit of work, returning how many writes were dropped.
    pub fn rollback(&mut self) -> usize {
        let dropped = self.pending.len();
        if dropped > 0 {
            debug!("Rolling back unit of work with {dropped} writes");
        }
        self.pending = UnitOfWork::default();
        dropped
    }

    /// Get a committed node by ID.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the node doesn't exist.
    pub fn get_node(&self, id: NodeId) -> Result<&Node> {
        self.nodes.get(&id).ok_or_else(|| GraphError::NodeNotFound {
            node_id: id.to_string(),
        })
    }

    /// Get a committed edge by ID.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EdgeNotFound`] if the edge doesn't exist.
    pub fn get_edge(&self, id: EdgeId) -> Result<&Edge> {
        self.edges.get(&id).ok_or_else(|| GraphError::EdgeNotFound {
            edge_id: id.to_string(),
        })
    }

    /// Iterate over committed nodes in no particular order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Iterate over committed edges in no particular order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    /// Neighbor node IDs reachable over edges in `direction`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the node doesn't exist.
    pub fn get_neighbors(&self, node_id: NodeId, direction: Direction) -> Result<Vec<NodeId>> {
        self.get_node(node_id)?;

        let mut neighbors = HashSet::new();

        if matches!(direction, Direction::Outgoing | Direction::Both) {
            for edge_id in self.adjacency_out.get(&node_id).into_iter().flatten() {
                if let Some(edge) = self.edges.get(edge_id) {
                    neighbors.insert(edge.target_id);
                }
            }
        }
        if matches!(direction, Direction::Incoming | Direction::Both) {
            for edge_id in self.adjacency_in.get(&node_id).into_iter().flatten() {
                if let Some(edge) = self.edges.get(edge_id) {
                    neighbors.insert(edge.source_id);
                }
            }
        }

        Ok(neighbors.into_iter().collect())
    }

    /// Number of committed edges touching `node_id`, in either direction.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the node doesn't exist.
    pub fn degree(&self, node_id: NodeId) -> Result<usize> {
        self.get_node(node_id)?;
        let out = self.adjacency_out.get(&node_id).map_or(0, HashSet::len);
        let inc = self.adjacency_in.get(&node_id).map_or(0, HashSet::len);
        Ok(out + inc)
    }

    /// All edges from `source_id` to `target_id`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if either node doesn't exist.
    pub fn get_edges_between(&self, source_id: NodeId, target_id: NodeId) -> Result<Vec<EdgeId>> {
        self.get_node(source_id)?;
        self.get_node(target_id)?;

        Ok(self
            .adjacency_out
            .get(&source_id)
            .into_iter()
            .flatten()
            .filter(|edge_id| {
                self.edges
                    .get(edge_id)
                    .is_some_and(|edge| edge.target_id == target_id)
            })
            .copied()
            .collect())
    }

    /// Number of committed nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of committed edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of committed nodes carrying `label`.
    pub fn count_nodes_with_label(&self, label: &str) -> usize {
        self.nodes.values().filter(|n| n.label == label).count()
    }

    /// Number of committed edges of type `rel_type`.
    pub fn count_edges_with_type(&self, rel_type: &str) -> usize {
        self.edges.values().filter(|e| e.rel_type == rel_type).count()
    }

    /// Remove every node and edge, committed or staged, and reset the ID counters.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the deletion batch fails.
    pub fn clear(&mut self) -> Result<()> {
        info!(
            "Clearing graph ({} nodes, {} edges)",
            self.nodes.len(),
            self.edges.len()
        );
        self.rollback();

        let mut operations: Vec<BatchOperation> = self
            .nodes
            .keys()
            .map(|id| BatchOperation::Delete {
                key: node_key(*id),
            })
            .chain(self.edges.keys().map(|id| BatchOperation::Delete {
                key: edge_key(*id),
            }))
            .collect();

        self.node_counter = 0;
        self.edge_counter = 0;
        operations.push(BatchOperation::Put {
            key: COUNTERS_KEY.to_vec(),
            value: self.encode_counters()?,
        });
        self.storage.write_batch(operations)?;

        self.nodes.clear();
        self.edges.clear();
        self.adjacency_out.clear();
        self.adjacency_in.clear();
        Ok(())
    }

    /// Flush committed writes to durable storage. Staged writes are not affected.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the flush fails.
    pub fn flush(&mut self) -> Result<()> {
        debug!("Flushing graph storage");
        self.save_counters()?;
        self.storage.flush()
    }

    /// Commit pending writes, flush, and drop the graph.
    ///
    /// # Errors
    ///
    /// Returns the first commit or flush error.
    pub fn close(mut self) -> Result<()> {
        self.commit()?;
        self.flush()
    }

    fn next_node_id(&mut self) -> NodeId {
        let id = self.node_counter;
        self.node_counter += 1;
        id
    }

    fn next_edge_id(&mut self) -> EdgeId {
        let id = self.edge_counter;
        self.edge_counter += 1;
        id
    }

    fn index_edge(&mut self, edge: Edge) {
        self.adjacency_out
            .entry(edge.source_id)
            .or_default()
            .insert(edge.id);
        self.adjacency_in
            .entry(edge.target_id)
            .or_default()
            .insert(edge.id);
        self.edges.insert(edge.id, edge);
    }

    fn encode_counters(&self) -> Result<Vec<u8>> {
        let counters = serde_json::json!({
            "node_counter": self.node_counter,
            "edge_counter": self.edge_counter,
        });
        serde_json::to_vec(&counters)
            .map_err(|e| GraphError::serialization("Failed to serialize counters", Some(e)))
    }

    fn save_counters(&mut self) -> Result<()> {
        let value = self.encode_counters()?;
        self.storage.put(COUNTERS_KEY, &value)
    }

    fn load_counters(&mut self) -> Result<()> {
        if let Some(value) = self.storage.get(COUNTERS_KEY)? {
            let counters: serde_json::Value = serde_json::from_slice(&value).map_err(|e| {
                GraphError::serialization("Failed to deserialize counters", Some(e))
            })?;

            if let Some(node_counter) = counters.get("node_counter").and_then(|v| v.as_u64()) {
                self.node_counter = node_counter;
            }
            if let Some(edge_counter) = counters.get("edge_counter").and_then(|v| v.as_u64()) {
                self.edge_counter = edge_counter;
            }
        }

        Ok(())
    }

    fn rebuild_from_storage(&mut self) -> Result<()> {
        self.load_counters()?;

        for (_, value) in self.storage.scan_prefix(b"node:")? {
            let node: Node = serde_json::from_slice(&value)
                .map_err(|e| GraphError::serialization("Failed to deserialize node", Some(e)))?;
            self.nodes.insert(node.id, node);
        }

        for (_, value) in self.storage.scan_prefix(b"edge:")? {
            let edge: Edge = serde_json::from_slice(&value)
                .map_err(|e| GraphError::serialization("Failed to deserialize edge", Some(e)))?;
            self.index_edge(edge);
        }

        if !self.nodes.is_empty() {
            info!(
                "Loaded {} nodes and {} edges from storage",
                self.nodes.len(),
                self.edges.len()
            );
        }
        Ok(())
    }
}

fn node_key(id: NodeId) -> Vec<u8> {
    format!("node:{id}").into_bytes()
}

fn edge_key(id: EdgeId) -> Vec<u8> {
    format!("edge:{id}").into_bytes()
}

fn encode_node(node: &Node) -> Result<(Vec<u8>, Vec<u8>)> {
    let value = serde_json::to_vec(node)
        .map_err(|e| GraphError::serialization("Failed to serialize node", Some(e)))?;
    Ok((node_key(node.id), value))
}

fn encode_edge(edge: &Edge) -> Result<(Vec<u8>, Vec<u8>)> {
    let value = serde_json::to_vec(edge)
        .map_err(|e| GraphError::serialization("Failed to serialize edge", Some(e)))?;
    Ok((edge_key(edge.id), value))
}
