//! Value types shared by the graph layers.

/// Dense vertex identifier, assigned in creation order from 0.
pub type VertexId = usize;

/// A path through a graph, and its cost.
///
/// Each path element pairs a vertex (an id or a caller key) with that
/// vertex's weight. The cost is the sum of the vertex weights along the path.
#[derive(Debug, Clone, PartialEq)]
pub struct PathCostPair<V> {
    pub path: Vec<(V, f64)>,
    pub cost: f64,
}

impl<V> PathCostPair<V> {
    /// Number of vertices on the path.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Whether the path has no vertices.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}
