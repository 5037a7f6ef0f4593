//! Vertex-weighted directed graph addressed by caller-supplied keys.

use std::fmt::Debug;
use std::hash::Hash;
use thiserror::Error;

use crate::interner::KeyInterner;

use super::indexed::{GraphError, IntGraph};
use super::types::{PathCostPair, VertexId};

/// Errors raised by the keyed graph.
///
/// Keys are carried in their `Debug` rendering so the error type does not
/// depend on the key type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyedGraphError {
    #[error("vertex key {0} already exists")]
    DuplicateKey(String),
    #[error("vertex key {0} does not exist")]
    UnknownKey(String),
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// A vertex-weighted directed graph whose vertices are hashable keys.
///
/// Holds no references between vertices: keys are interned to dense ids and
/// all structure lives in the owned `IntGraph`.
#[derive(Debug, Clone)]
pub struct Graph<K> {
    keys: KeyInterner<K>,
    graph: IntGraph,
}

impl<K> Graph<K>
where
    K: Eq + Hash + Clone + Debug,
{
    /// Create a graph with no vertices and no edges.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty graph with room for `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            keys: KeyInterner::with_capacity(capacity),
            graph: IntGraph::with_capacity(capacity),
        }
    }

    /// Number of vertices.
    pub fn order(&self) -> usize {
        self.graph.order()
    }

    /// Number of edges.
    pub fn size(&self) -> usize {
        self.graph.size()
    }

    /// All vertex keys, in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &K> + '_ {
        self.keys.keys()
    }

    /// All vertex keys with their weights, in insertion order.
    pub fn weighted_vertices(&self) -> impl Iterator<Item = (&K, f64)> + '_ {
        self.keys.keys().zip(self.graph.weights().iter().copied())
    }

    /// Whether `key` is a vertex.
    pub fn contains(&self, key: &K) -> bool {
        self.keys.get(key).is_some()
    }

    /// Weight of the key's vertex.
    pub fn weight(&self, key: &K) -> Result<f64, KeyedGraphError> {
        Ok(self.graph.weight(self.lookup(key)?)?)
    }

    /// Add `key` as a vertex with the given weight.
    pub fn add_vertex(&mut self, key: K, weight: f64) -> Result<(), KeyedGraphError> {
        if self.keys.get(&key).is_some() {
            return Err(KeyedGraphError::DuplicateKey(format!("{key:?}")));
        }

        let id = self.graph.add_vertex(weight);
        let interned = self.keys.intern(key);
        debug_assert_eq!(id, interned);
        Ok(())
    }

    /// Raise the key's vertex weight to `weight`, if larger.
    pub fn increase_weight(&mut self, key: &K, weight: f64) -> Result<(), KeyedGraphError> {
        let id = self.lookup(key)?;
        Ok(self.graph.increase_weight(id, weight)?)
    }

    /// Add a directed edge between the vertices of two keys.
    pub fn add_edge(&mut self, src: &K, dest: &K) -> Result<(), KeyedGraphError> {
        let src = self.lookup(src)?;
        let dest = self.lookup(dest)?;
        Ok(self.graph.add_edge(src, dest)?)
    }

    /// Find a path of maximal cost (total weight) and that cost.
    ///
    /// The graph must be acyclic. Single-vertex paths are considered.
    pub fn compute_max_cost_path(&self) -> Result<PathCostPair<K>, KeyedGraphError> {
        let by_id = self.graph.compute_max_cost_path()?;
        let path = by_id
            .path
            .into_iter()
            .map(|(id, weight)| Ok((self.resolve(id)?.clone(), weight)))
            .collect::<Result<Vec<_>, KeyedGraphError>>()?;

        Ok(PathCostPair {
            path,
            cost: by_id.cost,
        })
    }

    fn lookup(&self, key: &K) -> Result<VertexId, KeyedGraphError> {
        self.keys
            .get(key)
            .ok_or_else(|| KeyedGraphError::UnknownKey(format!("{key:?}")))
    }

    fn resolve(&self, id: VertexId) -> Result<&K, KeyedGraphError> {
        self.keys
            .resolve(id)
            .ok_or(KeyedGraphError::Graph(GraphError::VertexOutOfRange(id)))
    }
}

impl<K> Default for Graph<K>
where
    K: Eq + Hash + Clone + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
