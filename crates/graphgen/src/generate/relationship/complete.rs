//! Complete graphs.

use super::{ensure_valid, RelationshipGenerator};
use crate::error::Result;
use crate::generate::config::{CompleteGraphConfig, GeneratorConfig};
use crate::generate::edge::IndexEdge;
use rand::Rng;

/// Generator for [`CompleteGraphConfig`]. Ignores the random source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompleteGraphGenerator {
    config: CompleteGraphConfig,
}

impl CompleteGraphGenerator {
    /// Wrap a validated configuration.
    pub fn new(config: CompleteGraphConfig) -> Self {
        Self { config }
    }
}

impl RelationshipGenerator for CompleteGraphGenerator {
    fn name(&self) -> &'static str {
        "complete"
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

    fn generate_edges<R: Rng + ?Sized>(&self, _rng: &mut R) -> Result<Vec<IndexEdge>> {
        ensure_valid(&self.config)?;
        let n = self.config.node_count();
        Ok((0..n)
            .flat_map(|a| ((a + 1)..n).map(move |b| IndexEdge::between(a, b)))
            .collect())
    }
}
