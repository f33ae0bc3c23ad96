//! Node and relationship creation on top of a [`GraphSink`].

use super::sink::GraphSink;
use crate::error::Result;
use crate::graph::PropertyMap;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};
use std::fmt;
use std::sync::Arc;
use uuid::Builder;

/// Label used when a request does not name one.
pub const DEFAULT_LABEL: &str = "Person";

/// Relationship type used when a request does not name one.
pub const DEFAULT_RELATIONSHIP_TYPE: &str = "FRIEND_OF";

const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Barbara", "Claude", "Donald", "Edsger", "Frances", "Grace", "Hedy", "Ivan",
    "John", "Katherine", "Leslie", "Margaret", "Niklaus", "Radia", "Robin", "Shafi", "Tim",
    "Whitfield",
];

const LAST_NAMES: &[&str] = &[
    "Allen", "Backus", "Dijkstra", "Hamilton", "Hopper", "Johnson", "Kay", "Knuth", "Lamarr",
    "Lamport", "Liskov", "Lovelace", "McCarthy", "Milner", "Perlman", "Ritchie", "Shannon",
    "Sutherland", "Turing", "Wirth",
];

/// Adds properties to a node before it is created.
///
/// Decorators draw from the generation run's random source, so seeded runs
/// produce identical properties.
pub trait NodeDecorator: fmt::Debug + Send + Sync {
    /// Fill in properties for the node at generation index `index`.
    fn decorate(&self, index: usize, properties: &mut PropertyMap, rng: &mut dyn RngCore);
}

/// Sets a random "First Last" display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameDecorator {
    key: String,
}

impl NameDecorator {
    /// Store names under `key`.
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl Default for NameDecorator {
    fn default() -> Self {
        Self::new("name")
    }
}

impl NodeDecorator for NameDecorator {
    fn decorate(&self, _index: usize, properties: &mut PropertyMap, rng: &mut dyn RngCore) {
        let first = FIRST_NAMES.choose(rng).copied().unwrap_or("Ada");
        let last = LAST_NAMES.choose(rng).copied().unwrap_or("Lovelace");
        properties.insert(self.key.clone(), format!("{first} {last}"));
    }
}

/// Sets a random version 4 UUID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UuidDecorator {
    key: String,
}

impl UuidDecorator {
    /// Store UUIDs under `key`.
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl Default for UuidDecorator {
    fn default() -> Self {
        Self::new("uuid")
    }
}

impl NodeDecorator for UuidDecorator {
    fn decorate(&self, _index: usize, properties: &mut PropertyMap, rng: &mut dyn RngCore) {
        let bytes: [u8; 16] = rng.gen();
        properties.insert(self.key.clone(), Builder::from_random_bytes(bytes).into_uuid());
    }
}

/// Creates generated nodes with a fixed label and optional decoration.
#[derive(Debug, Clone)]
pub struct NodeCreator {
    label: String,
    decorator: Option<Arc<dyn NodeDecorator>>,
}

impl NodeCreator {
    /// Undecorated nodes with `label`.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            decorator: None,
        }
    }

    /// `Person` nodes with a random `name`.
    pub fn person() -> Self {
        Self::new(DEFAULT_LABEL).with_decorator(NameDecorator::default())
    }

    /// Nodes with a caller-chosen label and a random `uuid`.
    pub fn labelled(label: impl Into<String>) -> Self {
        Self::new(label).with_decorator(UuidDecorator::default())
    }

    /// Attach a decorator, replacing any previous one.
    pub fn with_decorator(mut self, decorator: impl NodeDecorator + 'static) -> Self {
        self.decorator = Some(Arc::new(decorator));
        self
    }

    /// Label of created nodes.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Create the node for generation index `index`.
    ///
    /// # Errors
    ///
    /// Propagates the sink's error unchanged.
    pub fn create<S: GraphSink + ?Sized>(
        &self,
        sink: &mut S,
        index: usize,
        rng: &mut dyn RngCore,
    ) -> Result<S::NodeHandle> {
        let mut properties = PropertyMap::new();
        if let Some(decorator) = &self.decorator {
            decorator.decorate(index, &mut properties, rng);
        }
        sink.create_node(&self.label, properties)
    }
}

impl Default for NodeCreator {
    fn default() -> Self {
        Self::person()
    }
}

/// Creates generated relationships with a fixed type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationshipCreator {
    rel_type: String,
}

impl RelationshipCreator {
    /// Relationships of type `rel_type`.
    pub fn new(rel_type: impl Into<String>) -> Self {
        Self {
            rel_type: rel_type.into(),
        }
    }

    /// Relationship type of created relationships.
    pub fn rel_type(&self) -> &str {
        &self.rel_type
    }

    /// Create one relationship from `source` to `target`.
    ///
    /// # Errors
    ///
    /// Propagates the sink's error unchanged.
    pub fn create<S: GraphSink + ?Sized>(
        &self,
        sink: &mut S,
        source: S::NodeHandle,
        target: S::NodeHandle,
    ) -> Result<()> {
        sink.create_relationship(source, target, &self.rel_type, PropertyMap::new())
    }
}

impl Default for RelationshipCreator {
    fn default() -> Self {
        Self::new(DEFAULT_RELATIONSHIP_TYPE)
    }
}
