//! Uniform `G(n, m)` sampling.
//!
//! Two regimes, picked by density `m / (n(n-1)/2)`:
//!
//! - sparse (density <= 1/2): draw random pairs and reject repeats. The
//!   rejection probability never exceeds 1/2, so the expected number of draws
//!   is below `2m`.
//! - dense: sample `m` distinct indices from the edge index space
//!   `[0, n(n-1)/2)` without replacement and decode each index to its pair.

use super::{ensure_valid, RelationshipGenerator};
use crate::error::Result;
use crate::generate::config::{ErdosRenyiConfig, GeneratorConfig};
use crate::generate::edge::IndexEdge;
use log::debug;
use rand::seq::index;
use rand::Rng;
use std::collections::HashSet;

/// Decode an edge index `k` to its pair.
///
/// `k` maps to `(j, i)` where `i` is the unique integer with
/// `i(i-1)/2 <= k < i(i+1)/2` and `j = k - i(i-1)/2`. Indices
/// `0..n(n-1)/2` cover every pair over `0..n` exactly once.
pub fn edge_index_to_pair(k: usize) -> IndexEdge {
    // Float estimate, then correct for rounding at large k
    let mut i = ((1.0 + (1.0 + 8.0 * k as f64).sqrt()) / 2.0) as usize;
    while i > 1 && triangular(i - 1) > k {
        i -= 1;
    }
    while triangular(i) <= k {
        i += 1;
    }
    let j = k - triangular(i - 1);
    IndexEdge::between(j, i)
}

/// Inverse of [`edge_index_to_pair`].
pub fn pair_to_edge_index(edge: IndexEdge) -> usize {
    let (j, i) = edge.endpoints();
    triangular(i - 1) + j
}

/// `t(t+1)/2`, the number of pairs whose larger endpoint is at most `t`.
fn triangular(t: usize) -> usize {
    t * (t + 1) / 2
}

/// Generator for [`ErdosRenyiConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErdosRenyiGenerator {
    config: ErdosRenyiConfig,
}

impl ErdosRenyiGenerator {
    /// Wrap a validated configuration.
    pub fn new(config: ErdosRenyiConfig) -> Self {
        Self { config }
    }

    /// The configuration this generator samples from.
    pub fn config(&self) -> &ErdosRenyiConfig {
        &self.config
    }

    /// Whether the rejection-sampling regime is used.
    pub fn is_sparse(&self) -> bool {
        self.config.edge_count().saturating_mul(2) <= self.config.max_edge_count()
    }

    fn sample_sparse<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<IndexEdge> {
        let n = self.config.node_count();
        let m = self.config.edge_count();
        let mut seen = HashSet::with_capacity(m);
        let mut edges = Vec::with_capacity(m);
        let mut draws = 0usize;

        while edges.len() < m {
            draws += 1;
            let a = rng.gen_range(0..n);
            // Uniform over the other n-1 nodes
            let mut b = rng.gen_range(0..n - 1);
            if b >= a {
                b += 1;
            }
            let edge = IndexEdge::between(a, b);
            if seen.insert(edge) {
                edges.push(edge);
            }
        }

        debug!("Sparse Erdos-Renyi: {m} edges after {draws} draws");
        edges
    }

    fn sample_dense<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<IndexEdge> {
        let max = self.config.max_edge_count();
        let m = self.config.edge_count();
        debug!("Dense Erdos-Renyi: sampling {m} of {max} edge indices");
        index::sample(rng, max, m)
            .into_iter()
            .map(edge_index_to_pair)
            .collect()
    }
}

impl RelationshipGenerator for ErdosRenyiGenerator {
    fn name(&self) -> &'static str {
        "erdos-renyi"
    }

    fn node_count(&self) -> usize {
        self.config.node_count()
    }

    fn expected_edge_count(&self) -> usize {
        self.config.edge_count()
    }

    fn is_valid(&self) -> bool {
        self.config.is_valid()
    }

    fn generate_edges<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<IndexEdge>> {
        ensure_valid(&self.config)?;
        if self.config.edge_count() == 0 {
            return Ok(Vec::new());
        }
        if self.is_sparse() {
            Ok(self.sample_sparse(rng))
        } else {
            Ok(self.sample_dense(rng))
        }
    }
}
