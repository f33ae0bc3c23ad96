//! Watts-Strogatz small-world graphs.

use super::{ensure_valid, RelationshipGenerator};
use crate::error::Result;
use crate::generate::config::{GeneratorConfig, WattsStrogatzConfig};
use crate::generate::edge::IndexEdge;
use log::{debug, trace};
use rand::Rng;
use std::collections::HashSet;

/// Generator for [`WattsStrogatzConfig`].
///
/// Builds the ring lattice, then visits its edges in lattice order and with
/// probability `beta` moves the far endpoint of each to a node that is neither
/// the anchor nor already adjacent to it. Adjacency is updated as it goes, so
/// later decisions see earlier rewirings. An anchor that is already adjacent
/// to every other node keeps its edge.
#[derive(Debug, Clone, PartialEq)]
pub struct WattsStrogatzGenerator {
    config: WattsStrogatzConfig,
}

impl WattsStrogatzGenerator {
    /// Wrap a validated configuration.
    pub fn new(config: WattsStrogatzConfig) -> Self {
        Self { config }
    }

    /// The configuration this generator uses.
    pub fn config(&self) -> &WattsStrogatzConfig {
        &self.config
    }

    /// The un-rewired lattice: node `i` linked to `i+1 ..= i+k/2` (mod n), in that order.
    pub fn ring_lattice(&self) -> Vec<IndexEdge> {
        self.lattice_arcs()
            .into_iter()
            .map(|(anchor, target)| IndexEdge::between(anchor, target))
            .collect()
    }

    fn lattice_arcs(&self) -> Vec<(usize, usize)> {
        let n = self.config.node_count();
        let half = self.config.mean_degree() / 2;
        let mut arcs = Vec::with_capacity(n * half);
        for anchor in 0..n {
            for offset in 1..=half {
                arcs.push((anchor, (anchor + offset) % n));
            }
        }
        arcs
    }

    fn pick_rewire_target<R: Rng + ?Sized>(
        rng: &mut R,
        anchor: usize,
        neighbors: &HashSet<usize>,
        n: usize,
    ) -> Option<usize> {
        let eligible = n - 1 - neighbors.len();
        if eligible == 0 {
            return None;
        }

        if eligible * 2 >= n {
            // At least half the draws hit an eligible node
            loop {
                let candidate = rng.gen_range(0..n);
                if candidate != anchor && !neighbors.contains(&candidate) {
                    return Some(candidate);
                }
            }
        }

        let nth = rng.gen_range(0..eligible);
        (0..n)
            .filter(|&candidate| candidate != anchor && !neighbors.contains(&candidate))
            .nth(nth)
    }
}

impl RelationshipGenerator for WattsStrogatzGenerator {
    fn name(&self) -> &'static str {
        "watts-strogatz"
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
        let beta = self.config.beta();
        let mut arcs = self.lattice_arcs();

        let mut adjacency: Vec<HashSet<usize>> = vec![HashSet::new(); n];
        for &(anchor, target) in &arcs {
            adjacency[anchor].insert(target);
            adjacency[target].insert(anchor);
        }

        let mut rewired = 0usize;
        let mut skipped = 0usize;
        for arc in arcs.iter_mut() {
            if !rng.gen_bool(beta) {
                continue;
            }
            let (anchor, old_target) = *arc;
            match Self::pick_rewire_target(rng, anchor, &adjacency[anchor], n) {
                Some(new_target) => {
                    trace!("Rewiring ({anchor}, {old_target}) -> ({anchor}, {new_target})");
                    adjacency[anchor].remove(&old_target);
                    adjacency[old_target].remove(&anchor);
                    adjacency[anchor].insert(new_target);
                    adjacency[new_target].insert(anchor);
                    *arc = (anchor, new_target);
                    rewired += 1;
                }
                None => {
                    debug!("Node {anchor} is adjacent to every other node, keeping ({anchor}, {old_target})");
                    skipped += 1;
                }
            }
        }

        debug!(
            "Watts-Strogatz: {} edges, {rewired} rewired, {skipped} skipped",
            arcs.len()
        );
        Ok(arcs
            .into_iter()
            .map(|(anchor, target)| IndexEdge::between(anchor, target))
            .collect())
    }
}
