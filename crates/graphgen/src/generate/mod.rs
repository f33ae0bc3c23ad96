//! Synthetic random-graph generation.
//!
//! Generation is split in two phases:
//!
//! 1. A [`RelationshipGenerator`] turns a validated configuration and a random
//!    source into a complete list of [`IndexEdge`]s over node indices `0..n`.
//!    This is a pure function with no store dependency.
//! 2. [`GraphGenerator`] creates the `n` nodes through a [`GraphSink`], maps
//!    indices to the returned handles, creates one relationship per edge and
//!    commits every `batch_size` writes.
//!
//! ```
//! use graphgen::generate::{
//!     generate_graph, GraphGeneratorConfig, WattsStrogatzConfig, WattsStrogatzGenerator,
//! };
//! use graphgen::PropertyGraph;
//! use rand::{rngs::SmallRng, SeedableRng};
//!
//! # fn main() -> graphgen::Result<()> {
//! let generator = WattsStrogatzGenerator::new(WattsStrogatzConfig::new(100, 4, 0.1)?);
//! let config = GraphGeneratorConfig::with_defaults(generator);
//! let mut graph = PropertyGraph::in_memory()?;
//! let mut rng = SmallRng::seed_from_u64(7);
//!
//! let report = generate_graph(&config, &mut graph, &mut rng)?;
//! assert_eq!(report.nodes_created, 100);
//! assert_eq!(graph.edge_count(), 200);
//! # Ok(())
//! # }
//! ```

mod config;
mod creator;
mod distribution;
mod edge;
mod orchestrator;
mod relationship;
mod request;
mod sink;

pub use config::{
    BarabasiAlbertConfig, CompleteGraphConfig, DegreeSequenceConfig, ErdosRenyiConfig,
    GeneratorConfig, WattsStrogatzConfig,
};
pub use creator::{
    NameDecorator, NodeCreator, NodeDecorator, RelationshipCreator, UuidDecorator,
    DEFAULT_LABEL, DEFAULT_RELATIONSHIP_TYPE,
};
pub use distribution::DegreeDistribution;
pub use edge::IndexEdge;
pub use orchestrator::{
    generate_graph, GenerationReport, GraphGenerator, GraphGeneratorConfig, DEFAULT_BATCH_SIZE,
};
pub use relationship::{
    edge_index_to_pair, pair_to_edge_index, BarabasiAlbertGenerator, CompleteGraphGenerator,
    DegreeSequenceGenerator, ErdosRenyiGenerator, Generator, RelationshipGenerator,
    WattsStrogatzGenerator,
};
pub use request::{AlgorithmRequest, GenerationRequest};
pub use sink::GraphSink;
