//! In-memory storage backend.
//!
//! Clones share the same underlying map, so a caller can hand one clone to a
//! [`PropertyGraph`](crate::graph::PropertyGraph) and keep another to inspect
//! what was actually committed.

use super::{BatchOperation, KeyValue, StorageBackend};
use crate::error::{GraphError, Result};
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Default)]
struct MemoryState {
    data: BTreeMap<Vec<u8>, Vec<u8>>,
    batches_written: usize,
    // Reject every write_batch after this many have succeeded.
    batch_limit: Option<usize>,
}

/// In-memory storage backend using a `BTreeMap` behind an `Arc<RwLock<_>>`.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    state: Arc<RwLock<MemoryState>>,
}

impl MemoryBackend {
    /// Create a new empty in-memory backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend whose `write_batch` starts failing once `limit`
    /// batches have been written.
    ///
    /// Used to exercise partially committed materialization.
    pub fn with_batch_limit(limit: usize) -> Self {
        let backend = Self::new();
        if let Ok(mut state) = backend.state.write() {
            state.batch_limit = Some(limit);
        }
        backend
    }

    /// Number of key-value pairs stored.
    pub fn len(&self) -> usize {
        self.read().map(|state| state.data.len()).unwrap_or(0)
    }

    /// Check if the backend is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of successful `write_batch` calls.
    pub fn batches_written(&self) -> usize {
        self.read().map(|state| state.batches_written).unwrap_or(0)
    }

    /// Number of stored keys starting with `prefix`.
    pub fn count_prefix(&self, prefix: &[u8]) -> usize {
        self.read()
            .map(|state| {
                state
                    .data
                    .range(prefix.to_vec()..)
                    .take_while(|(k, _)| k.starts_with(prefix))
                    .count()
            })
            .unwrap_or(0)
    }

    /// Clear all data and counters.
    pub fn clear(&mut self) -> Result<()> {
        let mut state = self.write()?;
        state.data.clear();
        state.batches_written = 0;
        Ok(())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, MemoryState>> {
        self.state
            .read()
            .map_err(|_| GraphError::storage("Memory backend lock poisoned", None::<std::io::Error>))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, MemoryState>> {
        self.state
            .write()
            .map_err(|_| GraphError::storage("Memory backend lock poisoned", None::<std::io::Error>))
    }
}

impl StorageBackend for MemoryBackend {
    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<()> {
        self.write()?.data.insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>> {
        Ok(self.read()?.data.get(key).cloned())
    }

    fn delete(&mut self, key: &[u8]) -> Result<()> {
        self.write()?.data.remove(key);
        Ok(())
    }

    fn scan_prefix(&self, prefix: &[u8]) -> Result<Vec<KeyValue>> {
        let state = self.read()?;
        let results: Vec<KeyValue> = state
            .data
            .range(prefix.to_vec()..)
            .take_while(|(k, _)| k.starts_with(prefix))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        Ok(results)
    }

    fn write_batch(&mut self, operations: Vec<BatchOperation>) -> Result<()> {
        let mut state = self.write()?;
        if let Some(limit) = state.batch_limit {
            if state.batches_written >= limit {
                return Err(GraphError::storage(
                    format!("Batch limit of {limit} reached, rejecting write"),
                    None::<std::io::Error>,
                ));
            }
        }
        for op in operations {
            match op {
                BatchOperation::Put { key, value } => {
                    state.data.insert(key, value);
                }
                BatchOperation::Delete { key } => {
                    state.data.remove(&key);
                }
            }
        }
        state.batches_written += 1;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}
