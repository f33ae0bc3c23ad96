//! Target degree sequences.

use super::edge::IndexEdge;
use crate::error::{GraphError, Result};
use serde::{Deserialize, Serialize};

/// One target degree per node index.
///
/// Serialized as a plain JSON array, e.g. `[2, 2, 2, 2]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DegreeDistribution {
    degrees: Vec<usize>,
}

impl DegreeDistribution {
    /// Wrap a degree list. No validation happens here; see [`is_valid`](Self::is_valid).
    pub fn new(degrees: Vec<usize>) -> Self {
        Self { degrees }
    }

    /// Actual degrees of an edge list over `node_count` nodes.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidOperation`] if an edge references an index
    /// outside `0..node_count`.
    pub fn from_edges(node_count: usize, edges: &[IndexEdge]) -> Result<Self> {
        let mut degrees = vec![0usize; node_count];
        for edge in edges {
            let (a, b) = edge.endpoints();
            if b >= node_count {
                return Err(GraphError::InvalidOperation {
                    message: format!("edge ({a}, {b}) is outside 0..{node_count}"),
                });
            }
            degrees[a] += 1;
            degrees[b] += 1;
        }
        Ok(Self { degrees })
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.degrees.len()
    }

    /// Whether there are no nodes.
    pub fn is_empty(&self) -> bool {
        self.degrees.is_empty()
    }

    /// Target degree of node `index`.
    pub fn degree(&self, index: usize) -> Option<usize> {
        self.degrees.get(index).copied()
    }

    /// All target degrees in index order.
    pub fn degrees(&self) -> &[usize] {
        &self.degrees
    }

    /// Sum of all degrees, twice the edge count of any realization.
    ///
    /// `None` if the sum overflows `usize`.
    pub fn total_degree(&self) -> Option<usize> {
        self.degrees
            .iter()
            .try_fold(0usize, |total, &d| total.checked_add(d))
    }

    /// First node whose degree is outside `[0, n-1]`.
    pub fn first_out_of_range(&self) -> Option<(usize, usize)> {
        let n = self.degrees.len();
        self.degrees
            .iter()
            .copied()
            .enumerate()
            .find(|&(_, d)| d >= n)
    }

    /// Every degree is in `[0, n-1]` and the sum is even.
    pub fn is_valid(&self) -> bool {
        self.first_out_of_range().is_none()
            && self.total_degree().is_some_and(|total| total % 2 == 0)
    }

    /// Every target degree is zero.
    pub fn is_zero_list(&self) -> bool {
        self.degrees.iter().all(|&d| d == 0)
    }

    /// Erdos-Gallai test: some simple graph has exactly these degrees.
    pub fn is_graphical(&self) -> bool {
        if !self.is_valid() {
            return false;
        }

        let mut sorted = self.degrees.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        let n = sorted.len();

        let mut suffix = vec![0usize; n + 1];
        for i in (0..n).rev() {
            suffix[i] = suffix[i + 1] + sorted[i];
        }

        // `boundary` = how many degrees are >= k; shrinks as k grows
        let mut boundary = n;
        let mut prefix = 0usize;
        for k in 1..=n {
            prefix += sorted[k - 1];
            while boundary > 0 && sorted[boundary - 1] < k {
                boundary -= 1;
            }
            let capped = if boundary > k { k * (boundary - k) } else { 0 };
            let rest = suffix[boundary.max(k)];
            if prefix > k * (k - 1) + capped + rest {
                return false;
            }
        }
        true
    }
}

impl From<Vec<usize>> for DegreeDistribution {
    fn from(degrees: Vec<usize>) -> Self {
        Self::new(degrees)
    }
}
