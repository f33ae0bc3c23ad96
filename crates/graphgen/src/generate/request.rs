//! JSON-facing generation requests with procedure defaults.

use super::config::{
    BarabasiAlbertConfig, CompleteGraphConfig, DegreeSequenceConfig, ErdosRenyiConfig,
    WattsStrogatzConfig,
};
use super::creator::{NodeCreator, RelationshipCreator, DEFAULT_RELATIONSHIP_TYPE};
use super::orchestrator::{GenerationReport, GraphGenerator, GraphGeneratorConfig, DEFAULT_BATCH_SIZE};
use super::relationship::{
    BarabasiAlbertGenerator, CompleteGraphGenerator, DegreeSequenceGenerator, ErdosRenyiGenerator,
    Generator, WattsStrogatzGenerator,
};
use super::sink::GraphSink;
use super::DegreeDistribution;
use crate::error::{GraphError, Result};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

const DEFAULT_NODES: usize = 1000;
const DEFAULT_ER_EDGES: usize = 10_000;
const DEFAULT_MEAN_DEGREE: usize = 4;
const DEFAULT_BETA: f64 = 0.5;
const DEFAULT_EDGES_PER_NODE: usize = 2;

/// Which algorithm to run, with its optional parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "algorithm", rename_all = "snake_case")]
pub enum AlgorithmRequest {
    /// Defaults to 1000 nodes and 10000 edges.
    ErdosRenyi {
        /// Node count
        #[serde(default, skip_serializing_if = "Option::is_none")]
        nodes: Option<usize>,
        /// Edge count
        #[serde(default, skip_serializing_if = "Option::is_none")]
        edges: Option<usize>,
    },
    /// Defaults to 1000 nodes, mean degree 4, beta 0.5.
    WattsStrogatz {
        /// Node count
        #[serde(default, skip_serializing_if = "Option::is_none")]
        nodes: Option<usize>,
        /// Even mean degree
        #[serde(default, skip_serializing_if = "Option::is_none")]
        mean_degree: Option<usize>,
        /// Rewiring probability
        #[serde(default, skip_serializing_if = "Option::is_none")]
        beta: Option<f64>,
    },
    /// Defaults to 1000 nodes and 2 edges per new node.
    BarabasiAlbert {
        /// Node count
        #[serde(default, skip_serializing_if = "Option::is_none")]
        nodes: Option<usize>,
        /// Edges added with each new node
        #[serde(default, skip_serializing_if = "Option::is_none")]
        edges_per_node: Option<usize>,
    },
    /// Every pair of `nodes` nodes.
    Complete {
        /// Node count
        nodes: usize,
    },
    /// A simple graph with exactly these degrees.
    Simple {
        /// Degree of each node
        degrees: Vec<usize>,
    },
}

/// A complete generation request.
///
/// ```
/// use graphgen::generate::GenerationRequest;
///
/// let request = GenerationRequest::from_json(
///     r#"{"algorithm": "barabasi_albert", "nodes": 100, "edges_per_node": 3, "seed": 1}"#,
/// )
/// .unwrap();
/// let mut graph = graphgen::PropertyGraph::in_memory().unwrap();
/// let report = request.execute(&mut graph).unwrap();
/// assert_eq!(report.relationships_created, 294);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Algorithm and parameters
    #[serde(flatten)]
    pub algorithm: AlgorithmRequest,
    /// Node label; `Person` with a `name` when absent, otherwise a `uuid` is added
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Relationship type, `FRIEND_OF` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship_type: Option<String>,
    /// Writes per unit of work, 1000 when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_size: Option<usize>,
    /// Seed for reproducible runs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl GenerationRequest {
    /// A request for `algorithm` with every other setting at its default.
    pub fn new(algorithm: AlgorithmRequest) -> Self {
        Self {
            algorithm,
            label: None,
            relationship_type: None,
            batch_size: None,
            seed: None,
        }
    }

    /// Parse a request from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Serialization`] for malformed JSON or an unknown algorithm.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| GraphError::serialization("invalid generation request", Some(e)))
    }

    /// Apply defaults and validate the algorithm parameters.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidConfig`] for invalid parameters.
    pub fn build_generator(&self) -> Result<Generator> {
        let generator = match &self.algorithm {
            AlgorithmRequest::ErdosRenyi { nodes, edges } => {
                ErdosRenyiGenerator::new(ErdosRenyiConfig::new(
                    nodes.unwrap_or(DEFAULT_NODES),
                    edges.unwrap_or(DEFAULT_ER_EDGES),
                )?)
                .into()
            }
            AlgorithmRequest::WattsStrogatz {
                nodes,
                mean_degree,
                beta,
            } => WattsStrogatzGenerator::new(WattsStrogatzConfig::new(
                nodes.unwrap_or(DEFAULT_NODES),
                mean_degree.unwrap_or(DEFAULT_MEAN_DEGREE),
                beta.unwrap_or(DEFAULT_BETA),
            )?)
            .into(),
            AlgorithmRequest::BarabasiAlbert {
                nodes,
                edges_per_node,
            } => BarabasiAlbertGenerator::new(BarabasiAlbertConfig::new(
                nodes.unwrap_or(DEFAULT_NODES),
                edges_per_node.unwrap_or(DEFAULT_EDGES_PER_NODE),
            )?)
            .into(),
            AlgorithmRequest::Complete { nodes } => {
                CompleteGraphGenerator::new(CompleteGraphConfig::new(*nodes)?).into()
            }
            AlgorithmRequest::Simple { degrees } => DegreeSequenceGenerator::new(
                DegreeSequenceConfig::new(DegreeDistribution::new(degrees.clone()))?,
            )
            .into(),
        };
        Ok(generator)
    }

    /// Node creator for the requested label.
    pub fn node_creator(&self) -> NodeCreator {
        match &self.label {
            Some(label) => NodeCreator::labelled(label.clone()),
            None => NodeCreator::person(),
        }
    }

    /// Relationship creator for the requested type.
    pub fn relationship_creator(&self) -> RelationshipCreator {
        RelationshipCreator::new(
            self.relationship_type
                .as_deref()
                .unwrap_or(DEFAULT_RELATIONSHIP_TYPE),
        )
    }

    /// Full orchestrator configuration for this request.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidConfig`] for invalid parameters or a zero batch size.
    pub fn to_config(&self) -> Result<GraphGeneratorConfig<Generator>> {
        GraphGeneratorConfig::new(
            self.build_generator()?,
            self.node_creator(),
            self.relationship_creator(),
            self.batch_size.unwrap_or(DEFAULT_BATCH_SIZE),
        )
    }

    /// Random source for this request: seeded when a seed is given.
    pub fn rng(&self) -> SmallRng {
        match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        }
    }

    /// Build and run this request against `sink`.
    ///
    /// # Errors
    ///
    /// See [`GraphGenerator::generate_graph`].
    pub fn execute<S: GraphSink + ?Sized>(&self, sink: &mut S) -> Result<GenerationReport> {
        self.execute_with(&GraphGenerator::new(), sink)
    }

    /// Run this request with a caller-supplied orchestrator, e.g. one with cancellation.
    ///
    /// # Errors
    ///
    /// See [`GraphGenerator::generate_graph`].
    pub fn execute_with<S: GraphSink + ?Sized>(
        &self,
        generator: &GraphGenerator,
        sink: &mut S,
    ) -> Result<GenerationReport> {
        let config = self.to_config()?;
        let mut rng = self.rng();
        generator.generate_graph(&config, sink, &mut rng)
    }
}
