//! Relationship generators: pure functions from a configuration and a random
//! source to a complete edge list.

mod barabasi_albert;
mod complete;
mod degree_sequence;
mod erdos_renyi;
mod watts_strogatz;

pub use barabasi_albert::BarabasiAlbertGenerator;
pub use complete::CompleteGraphGenerator;
pub use degree_sequence::DegreeSequenceGenerator;
pub use erdos_renyi::{edge_index_to_pair, pair_to_edge_index, ErdosRenyiGenerator};
pub use watts_strogatz::WattsStrogatzGenerator;

use super::config::GeneratorConfig;
use super::edge::IndexEdge;
use crate::error::{GraphError, Result};
use rand::Rng;

/// Produces the edge list of one generated graph.
///
/// Output edges are distinct, have no self-loops, and only use indices in
/// `0..node_count()`. The same configuration and the same seeded random source
/// give the same list in the same order.
pub trait RelationshipGenerator {
    /// Short algorithm name for logs.
    fn name(&self) -> &'static str;

    /// Number of nodes the edges range over.
    fn node_count(&self) -> usize;

    /// Number of edges [`generate_edges`](Self::generate_edges) will return.
    fn expected_edge_count(&self) -> usize;

    /// Whether the underlying configuration is valid.
    fn is_valid(&self) -> bool;

    /// Generate the complete edge list.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidConfig`] before any work if the
    /// configuration is invalid.
    fn generate_edges<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<IndexEdge>>;
}

pub(crate) fn ensure_valid<C: GeneratorConfig + std::fmt::Debug>(config: &C) -> Result<()> {
    if config.is_valid() {
        Ok(())
    } else {
        Err(GraphError::invalid_config(format!(
            "refusing to generate from {config:?}"
        )))
    }
}

/// The closed set of supported generators.
#[derive(Debug, Clone, PartialEq)]
pub enum Generator {
    /// Uniform `G(n, m)`
    ErdosRenyi(ErdosRenyiGenerator),
    /// Rewired ring lattice
    WattsStrogatz(WattsStrogatzGenerator),
    /// Preferential attachment
    BarabasiAlbert(BarabasiAlbertGenerator),
    /// Every pair
    Complete(CompleteGraphGenerator),
    /// Prescribed degrees
    DegreeSequence(DegreeSequenceGenerator),
}

macro_rules! dispatch {
    ($self:expr, $inner:ident => $body:expr) => {
        match $self {
            Generator::ErdosRenyi($inner) => $body,
            Generator::WattsStrogatz($inner) => $body,
            Generator::BarabasiAlbert($inner) => $body,
            Generator::Complete($inner) => $body,
            Generator::DegreeSequence($inner) => $body,
        }
    };
}

impl RelationshipGenerator for Generator {
    fn name(&self) -> &'static str {
        dispatch!(self, g => g.name())
    }

    fn node_count(&self) -> usize {
        dispatch!(self, g => g.node_count())
    }

    fn expected_edge_count(&self) -> usize {
        dispatch!(self, g => g.expected_edge_count())
    }

    fn is_valid(&self) -> bool {
        dispatch!(self, g => g.is_valid())
    }

    fn generate_edges<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<IndexEdge>> {
        dispatch!(self, g => g.generate_edges(rng))
    }
}

impl From<ErdosRenyiGenerator> for Generator {
    fn from(generator: ErdosRenyiGenerator) -> Self {
        Generator::ErdosRenyi(generator)
    }
}

impl From<WattsStrogatzGenerator> for Generator {
    fn from(generator: WattsStrogatzGenerator) -> Self {
        Generator::WattsStrogatz(generator)
    }
}

impl From<BarabasiAlbertGenerator> for Generator {
    fn from(generator: BarabasiAlbertGenerator) -> Self {
        Generator::BarabasiAlbert(generator)
    }
}

impl From<CompleteGraphGenerator> for Generator {
    fn from(generator: CompleteGraphGenerator) -> Self {
        Generator::Complete(generator)
    }
}

impl From<DegreeSequenceGenerator> for Generator {
    fn from(generator: DegreeSequenceGenerator) -> Self {
        Generator::DegreeSequence(generator)
    }
}
