//! End-to-end generation: edges first, then nodes and relationships in batches.

use super::creator::{NodeCreator, RelationshipCreator};
use super::edge::IndexEdge;
use super::relationship::RelationshipGenerator;
use super::sink::GraphSink;
use crate::error::{GraphError, Result};
use log::{debug, info};
use rand::{Rng, RngCore};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Writes per unit of work when a request does not say otherwise.
pub const DEFAULT_BATCH_SIZE: usize = 1000;

/// Everything one generation run needs besides the sink and the random source.
#[derive(Debug, Clone)]
pub struct GraphGeneratorConfig<G> {
    generator: G,
    node_creator: NodeCreator,
    relationship_creator: RelationshipCreator,
    batch_size: usize,
}

impl<G: RelationshipGenerator> GraphGeneratorConfig<G> {
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidConfig`] if `batch_size` is zero or the
    /// generator's configuration is invalid.
    pub fn new(
        generator: G,
        node_creator: NodeCreator,
        relationship_creator: RelationshipCreator,
        batch_size: usize,
    ) -> Result<Self> {
        if batch_size == 0 {
            return Err(GraphError::invalid_config("batch size must be at least 1"));
        }
        if !generator.is_valid() {
            return Err(GraphError::invalid_config(format!(
                "{} configuration is invalid",
                generator.name()
            )));
        }
        Ok(Self {
            generator,
            node_creator,
            relationship_creator,
            batch_size,
        })
    }

    /// `Person` nodes with names, `FRIEND_OF` relationships, [`DEFAULT_BATCH_SIZE`].
    pub fn with_defaults(generator: G) -> Self {
        Self {
            generator,
            node_creator: NodeCreator::default(),
            relationship_creator: RelationshipCreator::default(),
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }

    /// Replace the batch size.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidConfig`] if `batch_size` is zero.
    pub fn with_batch_size(mut self, batch_size: usize) -> Result<Self> {
        if batch_size == 0 {
            return Err(GraphError::invalid_config("batch size must be at least 1"));
        }
        self.batch_size = batch_size;
        Ok(self)
    }

    /// Whether the batch size and generator configuration are valid.
    pub fn is_valid(&self) -> bool {
        self.batch_size > 0 && self.generator.is_valid()
    }

    /// The relationship generator.
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// The node creator.
    pub fn node_creator(&self) -> &NodeCreator {
        &self.node_creator
    }

    /// The relationship creator.
    pub fn relationship_creator(&self) -> &RelationshipCreator {
        &self.relationship_creator
    }

    /// Writes per unit of work.
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }
}

/// Counts from a finished generation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Nodes created through the sink
    pub nodes_created: usize,
    /// Relationships created through the sink
    pub relationships_created: usize,
    /// Units of work committed, including the final partial one
    pub batches_committed: usize,
}

/// Drives generation runs, optionally with a cancellation flag.
#[derive(Debug, Clone, Default)]
pub struct GraphGenerator {
    cancel: Option<Arc<AtomicBool>>,
}

/// Counts writes and commits every `batch_size` of them.
struct BatchTracker {
    batch_size: usize,
    in_batch: usize,
    remaining: usize,
    committed: usize,
    cancel: Option<Arc<AtomicBool>>,
}

impl BatchTracker {
    fn record<S: GraphSink + ?Sized>(&mut self, sink: &mut S) -> Result<()> {
        self.in_batch += 1;
        self.remaining = self.remaining.saturating_sub(1);
        if self.in_batch == self.batch_size {
            self.commit(sink)?;
            // A finished run is never reported as cancelled
            if self.remaining > 0 {
                self.check_cancelled()?;
            }
        }
        Ok(())
    }

    fn commit<S: GraphSink + ?Sized>(&mut self, sink: &mut S) -> Result<()> {
        sink.commit()?;
        self.committed += 1;
        debug!(
            "Committed batch {} ({} writes)",
            self.committed, self.in_batch
        );
        self.in_batch = 0;
        Ok(())
    }

    fn finish<S: GraphSink + ?Sized>(&mut self, sink: &mut S) -> Result<()> {
        if self.in_batch > 0 {
            self.commit(sink)?;
        }
        Ok(())
    }

    fn check_cancelled(&self) -> Result<()> {
        match &self.cancel {
            Some(flag) if flag.load(Ordering::Relaxed) => Err(GraphError::Cancelled {
                committed_batches: self.committed,
            }),
            _ => Ok(()),
        }
    }
}

impl GraphGenerator {
    /// A generator without cancellation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop at the next batch boundary once `flag` is set.
    pub fn with_cancellation(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Generate a graph and write it into `sink`.
    ///
    /// The edge list is computed in full before the first write. Nodes are
    /// created in index order, so index `i` maps to the `i`-th handle. Every
    /// `batch_size` node or relationship writes are committed as one unit of
    /// work, and a final commit covers the remainder.
    ///
    /// # Errors
    ///
    /// - [`GraphError::InvalidConfig`] before anything is written.
    /// - Any sink error, after rolling back the in-flight unit of work.
    ///   Earlier batches stay committed.
    /// - [`GraphError::Cancelled`] if the cancellation flag was seen at a batch boundary.
    pub fn generate_graph<G, S, R>(
        &self,
        config: &GraphGeneratorConfig<G>,
        sink: &mut S,
        rng: &mut R,
    ) -> Result<GenerationReport>
    where
        G: RelationshipGenerator,
        S: GraphSink + ?Sized,
        R: Rng,
    {
        if !config.is_valid() {
            return Err(GraphError::invalid_config(format!(
                "{} generation config is invalid",
                config.generator.name()
            )));
        }

        let generator = &config.generator;
        let node_count = generator.node_count();
        info!(
            "Generating {} graph: {} nodes, {} relationships, batch size {}",
            generator.name(),
            node_count,
            generator.expected_edge_count(),
            config.batch_size
        );

        let edges = if generator.expected_edge_count() == 0 {
            Vec::new()
        } else {
            generator.generate_edges(rng)?
        };

        let mut tracker = BatchTracker {
            batch_size: config.batch_size,
            in_batch: 0,
            remaining: node_count.saturating_add(edges.len()),
            committed: 0,
            cancel: self.cancel.clone(),
        };

        match self.materialize(config, &edges, sink, rng, &mut tracker) {
            Ok(report) => {
                info!(
                    "Generated {} nodes and {} relationships in {} batches",
                    report.nodes_created, report.relationships_created, report.batches_committed
                );
                Ok(report)
            }
            Err(err) => {
                sink.rollback();
                Err(err)
            }
        }
    }

    fn materialize<G, S, R>(
        &self,
        config: &GraphGeneratorConfig<G>,
        edges: &[IndexEdge],
        sink: &mut S,
        rng: &mut R,
        tracker: &mut BatchTracker,
    ) -> Result<GenerationReport>
    where
        G: RelationshipGenerator,
        S: GraphSink + ?Sized,
        R: Rng,
    {
        tracker.check_cancelled()?;

        let node_count = config.generator.node_count();
        let rng: &mut dyn RngCore = rng;
        let mut handles = Vec::with_capacity(node_count);
        for index in 0..node_count {
            handles.push(config.node_creator.create(sink, index, rng)?);
            tracker.record(sink)?;
        }

        for edge in edges {
            let (a, b) = edge.endpoints();
            let (source, target) = match (handles.get(a), handles.get(b)) {
                (Some(source), Some(target)) => (*source, *target),
                _ => {
                    return Err(GraphError::InvalidOperation {
                        message: format!("edge ({a}, {b}) is outside 0..{node_count}"),
                    })
                }
            };
            config.relationship_creator.create(sink, source, target)?;
            tracker.record(sink)?;
        }

        tracker.finish(sink)?;

        Ok(GenerationReport {
            nodes_created: handles.len(),
            relationships_created: edges.len(),
            batches_committed: tracker.committed,
        })
    }
}

/// [`GraphGenerator::generate_graph`] without cancellation.
///
/// # Errors
///
/// See [`GraphGenerator::generate_graph`].
pub fn generate_graph<G, S, R>(
    config: &GraphGeneratorConfig<G>,
    sink: &mut S,
    rng: &mut R,
) -> Result<GenerationReport>
where
    G: RelationshipGenerator,
    S: GraphSink + ?Sized,
    R: Rng,
{
    GraphGenerator::new().generate_graph(config, sink, rng)
}
