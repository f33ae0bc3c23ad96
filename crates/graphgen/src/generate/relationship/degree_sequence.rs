//! Simple graphs realizing a prescribed degree sequence.

use super::{ensure_valid, RelationshipGenerator};
use crate::error::{GraphError, Result};
use crate::generate::config::{DegreeSequenceConfig, GeneratorConfig};
use crate::generate::edge::IndexEdge;
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

/// Generator for [`DegreeSequenceConfig`], a randomized Havel-Hakimi.
///
/// Each round takes the node with the largest remaining degree `d` and
/// connects it to the `d` other nodes with the largest remaining degrees.
/// Ties are broken by a fresh shuffle every round. A graphical sequence is
/// always realized exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DegreeSequenceGenerator {
    config: DegreeSequenceConfig,
}

impl DegreeSequenceGenerator {
    /// Wrap a validated configuration.
    pub fn new(config: DegreeSequenceConfig) -> Self {
        Self { config }
    }

    /// The configuration this generator uses.
    pub fn config(&self) -> &DegreeSequenceConfig {
        &self.config
    }
}

impl RelationshipGenerator for DegreeSequenceGenerator {
    fn name(&self) -> &'static str {
        "degree-sequence"
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

        let distribution = self.config.degrees();
        if distribution.is_zero_list() {
            return Ok(Vec::new());
        }

        let mut remaining = distribution.degrees().to_vec();
        let mut edges = Vec::with_capacity(self.config.edge_count());
        let mut candidates: Vec<usize> = Vec::with_capacity(remaining.len());

        loop {
            candidates.clear();
            candidates.extend((0..remaining.len()).filter(|&i| remaining[i] > 0));
            if candidates.is_empty() {
                break;
            }
            candidates.shuffle(rng);
            // Stable, so equal degrees keep their shuffled order
            candidates.sort_by(|a, b| remaining[*b].cmp(&remaining[*a]));

            let hub = candidates[0];
            let wanted = remaining[hub];
            let partners = &candidates[1..];
            if partners.len() < wanted {
                return Err(GraphError::invalid_config(format!(
                    "node {hub} needs {wanted} more partners but only {} remain",
                    partners.len()
                )));
            }

            for &partner in &partners[..wanted] {
                edges.push(IndexEdge::between(hub, partner));
                remaining[partner] -= 1;
            }
            remaining[hub] = 0;
        }

        debug!("Degree sequence: {} edges", edges.len());
        Ok(edges)
    }
}
