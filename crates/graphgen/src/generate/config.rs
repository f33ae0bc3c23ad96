//! Validated generator configurations.
//!
//! Every configuration is checked when it is built, by `new` or by serde
//! deserialization, so a value of one of these types is always valid.
//! [`GeneratorConfig::is_valid`] re-checks the same rules without side effects.

use super::distribution::DegreeDistribution;
use crate::error::{GraphError, Result};
use serde::{Deserialize, Serialize};

/// Parameters shared by all generator configurations.
pub trait GeneratorConfig {
    /// Number of nodes the generated graph has.
    fn node_count(&self) -> usize;

    /// Whether the parameters describe a realizable graph. Pure and idempotent.
    fn is_valid(&self) -> bool;
}

/// `n(n-1)/2`, or `None` if it does not fit in `usize`.
pub(crate) fn max_edges(node_count: usize) -> Option<usize> {
    node_count
        .checked_mul(node_count.saturating_sub(1))
        .map(|pairs| pairs / 2)
}

/// Erdos-Renyi `G(n, m)`: exactly `m` edges chosen uniformly among all pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ErdosRenyiParams")]
pub struct ErdosRenyiConfig {
    node_count: usize,
    edge_count: usize,
}

#[derive(Deserialize)]
struct ErdosRenyiParams {
    node_count: usize,
    edge_count: usize,
}

impl TryFrom<ErdosRenyiParams> for ErdosRenyiConfig {
    type Error = GraphError;

    fn try_from(params: ErdosRenyiParams) -> Result<Self> {
        Self::new(params.node_count, params.edge_count)
    }
}

impl ErdosRenyiConfig {
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidConfig`] unless `n >= 2` and `m <= n(n-1)/2`.
    pub fn new(node_count: usize, edge_count: usize) -> Result<Self> {
        Self::check(node_count, edge_count)?;
        Ok(Self {
            node_count,
            edge_count,
        })
    }

    fn check(node_count: usize, edge_count: usize) -> Result<()> {
        if node_count < 2 {
            return Err(GraphError::invalid_config(format!(
                "Erdos-Renyi needs at least 2 nodes, got {node_count}"
            )));
        }
        let max = max_edges(node_count).ok_or_else(|| {
            GraphError::invalid_config(format!("{node_count} nodes overflow the edge index space"))
        })?;
        if edge_count > max {
            return Err(GraphError::invalid_config(format!(
                "{edge_count} edges exceed the maximum of {max} for {node_count} nodes"
            )));
        }
        Ok(())
    }

    /// Target number of edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// `n(n-1)/2` for this configuration.
    pub fn max_edge_count(&self) -> usize {
        max_edges(self.node_count).unwrap_or(usize::MAX)
    }
}

impl GeneratorConfig for ErdosRenyiConfig {
    fn node_count(&self) -> usize {
        self.node_count
    }

    fn is_valid(&self) -> bool {
        Self::check(self.node_count, self.edge_count).is_ok()
    }
}

/// Watts-Strogatz small world: a ring lattice rewired with probability `beta`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WattsStrogatzParams")]
pub struct WattsStrogatzConfig {
    node_count: usize,
    mean_degree: usize,
    beta: f64,
}

#[derive(Deserialize)]
struct WattsStrogatzParams {
    node_count: usize,
    mean_degree: usize,
    beta: f64,
}

impl TryFrom<WattsStrogatzParams> for WattsStrogatzConfig {
    type Error = GraphError;

    fn try_from(params: WattsStrogatzParams) -> Result<Self> {
        Self::new(params.node_count, params.mean_degree, params.beta)
    }
}

impl WattsStrogatzConfig {
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidConfig`] unless `n >= 3`, `mean_degree` is
    /// even with `2 <= mean_degree < n - 1`, and `beta` lies in `[0, 1]`.
    pub fn new(node_count: usize, mean_degree: usize, beta: f64) -> Result<Self> {
        Self::check(node_count, mean_degree, beta)?;
        Ok(Self {
            node_count,
            mean_degree,
            beta,
        })
    }

    fn check(node_count: usize, mean_degree: usize, beta: f64) -> Result<()> {
        if node_count < 3 {
            return Err(GraphError::invalid_config(format!(
                "Watts-Strogatz needs at least 3 nodes, got {node_count}"
            )));
        }
        if mean_degree % 2 != 0 {
            return Err(GraphError::invalid_config(format!(
                "mean degree must be even, got {mean_degree}"
            )));
        }
        if mean_degree < 2 || mean_degree >= node_count - 1 {
            return Err(GraphError::invalid_config(format!(
                "mean degree must be in [2, {}), got {mean_degree}",
                node_count - 1
            )));
        }
        if !(0.0..=1.0).contains(&beta) {
            return Err(GraphError::invalid_config(format!(
                "rewiring probability must be in [0, 1], got {beta}"
            )));
        }
        Ok(())
    }

    /// Lattice degree of every node before rewiring.
    pub fn mean_degree(&self) -> usize {
        self.mean_degree
    }

    /// Rewiring probability.
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// `n * mean_degree / 2`, preserved by rewiring.
    pub fn edge_count(&self) -> usize {
        self.node_count * (self.mean_degree / 2)
    }
}

impl GeneratorConfig for WattsStrogatzConfig {
    fn node_count(&self) -> usize {
        self.node_count
    }

    fn is_valid(&self) -> bool {
        Self::check(self.node_count, self.mean_degree, self.beta).is_ok()
    }
}

/// Barabasi-Albert preferential attachment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BarabasiAlbertParams")]
pub struct BarabasiAlbertConfig {
    node_count: usize,
    edges_per_node: usize,
}

#[derive(Deserialize)]
struct BarabasiAlbertParams {
    node_count: usize,
    edges_per_node: usize,
}

impl TryFrom<BarabasiAlbertParams> for BarabasiAlbertConfig {
    type Error = GraphError;

    fn try_from(params: BarabasiAlbertParams) -> Result<Self> {
        Self::new(params.node_count, params.edges_per_node)
    }
}

impl BarabasiAlbertConfig {
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidConfig`] unless `1 <= edges_per_node < n`.
    pub fn new(node_count: usize, edges_per_node: usize) -> Result<Self> {
        Self::check(node_count, edges_per_node)?;
        Ok(Self {
            node_count,
            edges_per_node,
        })
    }

    fn check(node_count: usize, edges_per_node: usize) -> Result<()> {
        if edges_per_node == 0 {
            return Err(GraphError::invalid_config(
                "edges per node must be at least 1",
            ));
        }
        if edges_per_node >= node_count {
            return Err(GraphError::invalid_config(format!(
                "edges per node ({edges_per_node}) must be smaller than the node count ({node_count})"
            )));
        }
        Ok(())
    }

    /// Edges added with every node after the seed clique.
    pub fn edges_per_node(&self) -> usize {
        self.edges_per_node
    }

    /// Seed clique edges plus `edges_per_node` for every later node.
    pub fn edge_count(&self) -> usize {
        let m = self.edges_per_node;
        m * (m - 1) / 2 + (self.node_count - m) * m
    }
}

impl GeneratorConfig for BarabasiAlbertConfig {
    fn node_count(&self) -> usize {
        self.node_count
    }

    fn is_valid(&self) -> bool {
        Self::check(self.node_count, self.edges_per_node).is_ok()
    }
}

/// The complete graph on `n` nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CompleteGraphParams")]
pub struct CompleteGraphConfig {
    node_count: usize,
}

#[derive(Deserialize)]
struct CompleteGraphParams {
    node_count: usize,
}

impl TryFrom<CompleteGraphParams> for CompleteGraphConfig {
    type Error = GraphError;

    fn try_from(params: CompleteGraphParams) -> Result<Self> {
        Self::new(params.node_count)
    }
}

impl CompleteGraphConfig {
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidConfig`] unless `n >= 2` and `n(n-1)/2` fits in `usize`.
    pub fn new(node_count: usize) -> Result<Self> {
        Self::check(node_count)?;
        Ok(Self { node_count })
    }

    fn check(node_count: usize) -> Result<()> {
        if node_count < 2 {
            return Err(GraphError::invalid_config(format!(
                "a complete graph needs at least 2 nodes, got {node_count}"
            )));
        }
        if max_edges(node_count).is_none() {
            return Err(GraphError::invalid_config(format!(
                "{node_count} nodes overflow the edge index space"
            )));
        }
        Ok(())
    }

    /// `n(n-1)/2`.
    pub fn edge_count(&self) -> usize {
        max_edges(self.node_count).unwrap_or(usize::MAX)
    }
}

impl GeneratorConfig for CompleteGraphConfig {
    fn node_count(&self) -> usize {
        self.node_count
    }

    fn is_valid(&self) -> bool {
        Self::check(self.node_count).is_ok()
    }
}

/// A simple graph realizing a prescribed degree sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DegreeSequenceParams")]
pub struct DegreeSequenceConfig {
    degrees: DegreeDistribution,
}

#[derive(Deserialize)]
struct DegreeSequenceParams {
    degrees: DegreeDistribution,
}

impl TryFrom<DegreeSequenceParams> for DegreeSequenceConfig {
    type Error = GraphError;

    fn try_from(params: DegreeSequenceParams) -> Result<Self> {
        Self::new(params.degrees)
    }
}

impl DegreeSequenceConfig {
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidConfig`] if the distribution is empty,
    /// invalid, or not graphical.
    pub fn new(degrees: DegreeDistribution) -> Result<Self> {
        Self::check(&degrees)?;
        Ok(Self { degrees })
    }

    fn check(degrees: &DegreeDistribution) -> Result<()> {
        if degrees.is_empty() {
            return Err(GraphError::invalid_config("degree sequence is empty"));
        }
        if let Some((index, degree)) = degrees.first_out_of_range() {
            return Err(GraphError::invalid_config(format!(
                "degree {degree} of node {index} must be below the node count {}",
                degrees.len()
            )));
        }
        match degrees.total_degree() {
            Some(total) if total % 2 == 0 => {}
            Some(total) => {
                return Err(GraphError::invalid_config(format!(
                    "degree sequence must have an even sum, got {total}"
                )));
            }
            None => {
                return Err(GraphError::invalid_config("degree sequence sum overflows"));
            }
        }
        if !degrees.is_graphical() {
            return Err(GraphError::invalid_config(
                "degree sequence cannot be realized by a simple graph",
            ));
        }
        Ok(())
    }

    /// Target degrees, one per node index.
    pub fn degrees(&self) -> &DegreeDistribution {
        &self.degrees
    }

    /// Half the total degree.
    pub fn edge_count(&self) -> usize {
        self.degrees.total_degree().unwrap_or(0) / 2
    }
}

impl GeneratorConfig for DegreeSequenceConfig {
    fn node_count(&self) -> usize {
        self.degrees.len()
    }

    fn is_valid(&self) -> bool {
        Self::check(&self.degrees).is_ok()
    }
}
