//! Undirected edges over generation indices.

use crate::error::GraphError;
use serde::{Deserialize, Serialize};

/// Unordered pair of distinct node indices, stored with `first < second`.
///
/// Indices refer to node creation order within one generation run, not to
/// store IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "IndexPair")]
pub struct IndexEdge {
    first: usize,
    second: usize,
}

#[derive(Deserialize)]
struct IndexPair {
    first: usize,
    second: usize,
}

impl TryFrom<IndexPair> for IndexEdge {
    type Error = GraphError;

    fn try_from(pair: IndexPair) -> Result<Self, GraphError> {
        Self::new(pair.first, pair.second).ok_or_else(|| {
            GraphError::invalid_config(format!("self-loop at node {}", pair.first))
        })
    }
}

impl IndexEdge {
    /// Build an edge between `a` and `b` in either order. Returns `None` for a self-loop.
    pub fn new(a: usize, b: usize) -> Option<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Some(Self {
                first: a,
                second: b,
            }),
            std::cmp::Ordering::Greater => Some(Self {
                first: b,
                second: a,
            }),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Caller guarantees `a != b`.
    pub(crate) fn between(a: usize, b: usize) -> Self {
        debug_assert_ne!(a, b, "self-loop between {a} and {b}");
        Self {
            first: a.min(b),
            second: a.max(b),
        }
    }

    /// Smaller endpoint.
    pub fn first(&self) -> usize {
        self.first
    }

    /// Larger endpoint.
    pub fn second(&self) -> usize {
        self.second
    }

    /// Both endpoints as `(first, second)`.
    pub fn endpoints(&self) -> (usize, usize) {
        (self.first, self.second)
    }

    /// Whether `index` is one of the endpoints.
    pub fn touches(&self, index: usize) -> bool {
        self.first == index || self.second == index
    }
}
