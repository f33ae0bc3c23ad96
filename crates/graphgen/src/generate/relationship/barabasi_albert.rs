//! Barabasi-Albert preferential attachment.

use super::{ensure_valid, RelationshipGenerator};
use crate::error::Result;
use crate::generate::config::{BarabasiAlbertConfig, GeneratorConfig};
use crate::generate::edge::IndexEdge;
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

/// Generator for [`BarabasiAlbertConfig`].
///
/// The first `m` nodes form a clique. Each later node `v` links to `m`
/// distinct nodes among `0..v`, each drawn with probability proportional to
/// its current degree. Degree-proportional draws pick a uniform entry of the
/// list of all edge endpoints so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarabasiAlbertGenerator {
    config: BarabasiAlbertConfig,
}

impl BarabasiAlbertGenerator {
    /// Wrap a validated configuration.
    pub fn new(config: BarabasiAlbertConfig) -> Self {
        Self { config }
    }

    /// The configuration this generator uses.
    pub fn config(&self) -> &BarabasiAlbertConfig {
        &self.config
    }
}

impl RelationshipGenerator for BarabasiAlbertGenerator {
    fn name(&self) -> &'static str {
        "barabasi-albert"
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

        let n = self.config.node_count();
        let m = self.config.edges_per_node();
        let mut edges = Vec::with_capacity(self.config.edge_count());
        let mut endpoints: Vec<usize> = Vec::with_capacity(2 * self.config.edge_count());

        for a in 0..m {
            for b in (a + 1)..m {
                edges.push(IndexEdge::between(a, b));
                endpoints.push(a);
                endpoints.push(b);
            }
        }

        let mut targets = Vec::with_capacity(m);
        for v in m..n {
            targets.clear();
            while targets.len() < m {
                // Only the single seed node of an m = 1 graph has no degree yet
                let candidate = match endpoints.choose(rng) {
                    Some(&node) => node,
                    None => rng.gen_range(0..v),
                };
                if !targets.contains(&candidate) {
                    targets.push(candidate);
                }
            }
            for &target in &targets {
                edges.push(IndexEdge::between(v, target));
                endpoints.push(v);
                endpoints.push(target);
            }
        }

        debug!("Barabasi-Albert: {} nodes, {} edges", n, edges.len());
        Ok(edges)
    }
}
