//! Vertex-weighted directed graph over dense integer vertex ids.

use std::collections::VecDeque;
use thiserror::Error;

use super::types::{PathCostPair, VertexId};

/// Errors raised by the indexed graph engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("vertex {0} is out of range")]
    VertexOutOfRange(VertexId),
    #[error("can't find max weight path in empty graph")]
    EmptyGraph,
    #[error("cyclic graph cannot be topologically sorted")]
    CyclicGraph,
}

/// A vertex-weighted directed graph whose vertices are integers, numbered
/// increasingly from 0.
///
/// Vertices live in parallel arrays indexed by id; adjacency is stored as
/// lists of successor ids. Nothing is ever removed, so ids stay valid for the
/// lifetime of the graph.
#[derive(Debug, Clone, Default)]
pub struct IntGraph {
    adj: Vec<Vec<VertexId>>,
    in_degrees: Vec<usize>,
    weights: Vec<f64>,
    size: usize,
}

impl IntGraph {
    /// Create a graph with no vertices and no edges.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph with room for `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            adj: Vec::with_capacity(capacity),
            in_degrees: Vec::with_capacity(capacity),
            weights: Vec::with_capacity(capacity),
            size: 0,
        }
    }

    /// Number of vertices.
    #[inline]
    pub fn order(&self) -> usize {
        self.adj.len()
    }

    /// Number of edges.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Add a vertex with the given weight, returning its id.
    pub fn add_vertex(&mut self, weight: f64) -> VertexId {
        self.adj.push(Vec::new());
        self.in_degrees.push(0);
        self.weights.push(weight);
        self.order() - 1
    }

    /// Raise the vertex's weight to `weight`, if larger.
    pub fn increase_weight(&mut self, vertex: VertexId, weight: f64) -> Result<(), GraphError> {
        self.ensure_exists(vertex)?;
        let current = &mut self.weights[vertex];
        *current = current.max(weight);
        Ok(())
    }

    /// Add a directed edge from `src` to `dest`.
    ///
    /// Duplicate edges are not detected.
    pub fn add_edge(&mut self, src: VertexId, dest: VertexId) -> Result<(), GraphError> {
        self.ensure_exists(src)?;
        self.ensure_exists(dest)?;

        self.adj[src].push(dest);
        self.in_degrees[dest] += 1;
        self.size += 1;
        Ok(())
    }

    /// All vertex weights, indexed by id.
    #[inline]
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Weight of a vertex.
    pub fn weight(&self, vertex: VertexId) -> Result<f64, GraphError> {
        self.weights
            .get(vertex)
            .copied()
            .ok_or(GraphError::VertexOutOfRange(vertex))
    }

    /// Successors of a vertex, in edge insertion order.
    pub fn successors(&self, vertex: VertexId) -> Result<&[VertexId], GraphError> {
        self.adj
            .get(vertex)
            .map(Vec::as_slice)
            .ok_or(GraphError::VertexOutOfRange(vertex))
    }

    /// Number of edges entering a vertex.
    pub fn in_degree(&self, vertex: VertexId) -> Result<usize, GraphError> {
        self.in_degrees
            .get(vertex)
            .copied()
            .ok_or(GraphError::VertexOutOfRange(vertex))
    }

    /// Find a path of maximal cost (total vertex weight) and that cost.
    ///
    /// The graph must be acyclic. Single-vertex paths are considered, so any
    /// non-empty graph has a result.
    ///
    /// # Returns
    /// * `Ok(PathCostPair)` with `(vertex, weight)` pairs in path order
    /// * `Err(GraphError::EmptyGraph)` if there are no vertices
    /// * `Err(GraphError::CyclicGraph)` if the graph has a cycle
    pub fn compute_max_cost_path(&self) -> Result<PathCostPair<VertexId>, GraphError> {
        if self.order() == 0 {
            return Err(GraphError::EmptyGraph);
        }

        let (parents, costs) = self.compute_all_max_cost_paths()?;

        // Strict comparison keeps the lowest id among ties
        let mut finish = 0;
        for (vertex, &cost) in costs.iter().enumerate().skip(1) {
            if cost > costs[finish] {
                finish = vertex;
            }
        }

        let mut path = Vec::new();
        let mut dest = Some(finish);
        while let Some(vertex) = dest {
            path.push((vertex, self.weights[vertex]));
            dest = parents[vertex];
        }
        path.reverse();

        Ok(PathCostPair {
            path,
            cost: costs[finish],
        })
    }

    /// For every vertex, the best predecessor and the cost of the heaviest
    /// path ending there.
    fn compute_all_max_cost_paths(
        &self,
    ) -> Result<(Vec<Option<VertexId>>, Vec<f64>), GraphError> {
        let mut parents: Vec<Option<VertexId>> = vec![None; self.order()];
        let mut costs = self.weights.clone();

        for src in self.topological_order()? {
            for &dest in &self.adj[src] {
                let new_cost = costs[src] + self.weights[dest];
                if costs[dest] < new_cost {
                    parents[dest] = Some(src);
                    costs[dest] = new_cost;
                }
            }
        }

        Ok((parents, costs))
    }

    /// Topological order of all vertices using Kahn's algorithm.
    ///
    /// Roots are seeded in increasing id order.
    pub fn topological_order(&self) -> Result<Vec<VertexId>, GraphError> {
        let mut in_degrees = self.in_degrees.clone();
        let mut queue: VecDeque<VertexId> = in_degrees
            .iter()
            .enumerate()
            .filter(|(_, &degree)| degree == 0)
            .map(|(vertex, _)| vertex)
            .collect();

        let mut order = Vec::with_capacity(self.order());

        while let Some(src) = queue.pop_front() {
            for &dest in &self.adj[src] {
                in_degrees[dest] -= 1;
                if in_degrees[dest] == 0 {
                    queue.push_back(dest);
                }
            }
            order.push(src);
        }

        if order.len() != self.order() {
            return Err(GraphError::CyclicGraph);
        }

        Ok(order)
    }

    fn ensure_exists(&self, vertex: VertexId) -> Result<(), GraphError> {
        if vertex < self.order() {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange(vertex))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(pair: &PathCostPair<VertexId>) -> Vec<VertexId> {
        pair.path.iter().map(|&(v, _)| v).collect()
    }

    #[test]
    fn test_add_vertex_assigns_dense_ids() {
        let mut graph = IntGraph::new();
        assert_eq!(graph.add_vertex(1.0), 0);
        assert_eq!(graph.add_vertex(2.0), 1);
        assert_eq!(graph.add_vertex(3.0), 2);
        assert_eq!(graph.order(), 3);
        assert_eq!(graph.size(), 0);
        assert_eq!(graph.weight(1), Ok(2.0));
    }

    #[test]
    fn test_add_edge_updates_counters() {
        let mut graph = IntGraph::new();
        let a = graph.add_vertex(1.0);
        let b = graph.add_vertex(1.0);
        graph.add_edge(a, b).unwrap();

        assert_eq!(graph.size(), 1);
        assert_eq!(graph.in_degree(b), Ok(1));
        assert_eq!(graph.in_degree(a), Ok(0));
        assert_eq!(graph.successors(a).unwrap(), &[b]);
    }

    #[test]
    fn test_out_of_range_vertex() {
        let mut graph = IntGraph::new();
        let a = graph.add_vertex(1.0);

        assert_eq!(graph.add_edge(a, 5), Err(GraphError::VertexOutOfRange(5)));
        assert_eq!(graph.add_edge(7, a), Err(GraphError::VertexOutOfRange(7)));
        assert_eq!(
            graph.increase_weight(1, 3.0),
            Err(GraphError::VertexOutOfRange(1))
        );
        // Failed edge insertions leave the graph untouched
        assert_eq!(graph.size(), 0);
        assert_eq!(graph.in_degree(a), Ok(0));
    }

    #[test]
    fn test_increase_weight_keeps_max() {
        let mut graph = IntGraph::new();
        let a = graph.add_vertex(3.0);

        graph.increase_weight(a, 1.0).unwrap();
        assert_eq!(graph.weight(a), Ok(3.0));

        graph.increase_weight(a, 4.5).unwrap();
        assert_eq!(graph.weight(a), Ok(4.5));
    }

    #[test]
    fn test_empty_graph_error() {
        let graph = IntGraph::new();
        assert_eq!(graph.compute_max_cost_path(), Err(GraphError::EmptyGraph));
    }

    #[test]
    fn test_single_vertex_path() {
        let mut graph = IntGraph::new();
        graph.add_vertex(7.0);

        let result = graph.compute_max_cost_path().unwrap();
        assert_eq!(result.path, vec![(0, 7.0)]);
        assert_eq!(result.cost, 7.0);
    }

    #[test]
    fn test_chain_path() {
        let mut graph = IntGraph::new();
        let a = graph.add_vertex(1.0);
        let b = graph.add_vertex(2.0);
        let c = graph.add_vertex(3.0);
        graph.add_edge(a, b).unwrap();
        graph.add_edge(b, c).unwrap();

        let result = graph.compute_max_cost_path().unwrap();
        assert_eq!(result.len(), 3);
        assert_eq!(result.path, vec![(a, 1.0), (b, 2.0), (c, 3.0)]);
        assert_eq!(result.cost, 6.0);
    }

    #[test]
    fn test_diamond_picks_heavier_branch() {
        // a -> b -> d, a -> c -> d with c heavier than b
        let mut graph = IntGraph::new();
        let a = graph.add_vertex(1.0);
        let b = graph.add_vertex(2.0);
        let c = graph.add_vertex(5.0);
        let d = graph.add_vertex(1.0);
        graph.add_edge(a, b).unwrap();
        graph.add_edge(a, c).unwrap();
        graph.add_edge(b, d).unwrap();
        graph.add_edge(c, d).unwrap();

        let result = graph.compute_max_cost_path().unwrap();
        assert_eq!(ids(&result), vec![a, c, d]);
        assert_eq!(result.cost, 7.0);
    }

    #[test]
    fn test_relaxation_uses_vertex_weight_not_accumulated_cost() {
        // a(1) -> b(1) -> c(1): accumulating costs[dest] would overcount
        let mut graph = IntGraph::new();
        let a = graph.add_vertex(1.0);
        let b = graph.add_vertex(1.0);
        let c = graph.add_vertex(1.0);
        graph.add_edge(a, b).unwrap();
        graph.add_edge(b, c).unwrap();
        graph.add_edge(a, c).unwrap();

        let result = graph.compute_max_cost_path().unwrap();
        assert_eq!(result.cost, 3.0);
        assert_eq!(ids(&result), vec![a, b, c]);
    }

    #[test]
    fn test_heavy_isolated_vertex_wins() {
        let mut graph = IntGraph::new();
        let a = graph.add_vertex(1.0);
        let b = graph.add_vertex(1.0);
        let lone = graph.add_vertex(10.0);
        graph.add_edge(a, b).unwrap();

        let result = graph.compute_max_cost_path().unwrap();
        assert_eq!(ids(&result), vec![lone]);
        assert_eq!(result.cost, 10.0);
    }

    #[test]
    fn test_ties_break_toward_lowest_id() {
        let mut graph = IntGraph::new();
        graph.add_vertex(4.0);
        graph.add_vertex(4.0);
        graph.add_vertex(4.0);

        let result = graph.compute_max_cost_path().unwrap();
        assert_eq!(ids(&result), vec![0]);
    }

    #[test]
    fn test_path_starts_at_root() {
        // The best path ending at d must begin at a root, not at b
        let mut graph = IntGraph::new();
        let a = graph.add_vertex(3.0);
        let b = graph.add_vertex(1.0);
        let d = graph.add_vertex(1.0);
        graph.add_edge(a, b).unwrap();
        graph.add_edge(b, d).unwrap();

        let result = graph.compute_max_cost_path().unwrap();
        assert_eq!(ids(&result), vec![a, b, d]);
        assert_eq!(graph.in_degree(result.path[0].0), Ok(0));
    }

    #[test]
    fn test_duplicate_edges_are_harmless() {
        let mut graph = IntGraph::new();
        let a = graph.add_vertex(1.0);
        let b = graph.add_vertex(2.0);
        graph.add_edge(a, b).unwrap();
        graph.add_edge(a, b).unwrap();

        assert_eq!(graph.size(), 2);
        let result = graph.compute_max_cost_path().unwrap();
        assert_eq!(ids(&result), vec![a, b]);
        assert_eq!(result.cost, 3.0);
    }

    #[test]
    fn test_topological_order_respects_edges() {
        let mut graph = IntGraph::new();
        for _ in 0..5 {
            graph.add_vertex(1.0);
        }
        graph.add_edge(4, 2).unwrap();
        graph.add_edge(2, 0).unwrap();
        graph.add_edge(3, 1).unwrap();

        let order = graph.topological_order().unwrap();
        let position = |v: VertexId| order.iter().position(|&x| x == v).unwrap();
        assert_eq!(order.len(), 5);
        assert!(position(4) < position(2));
        assert!(position(2) < position(0));
        assert!(position(3) < position(1));
    }

    #[test]
    fn test_cycle_detected() {
        let mut graph = IntGraph::new();
        let a = graph.add_vertex(1.0);
        let b = graph.add_vertex(1.0);
        let c = graph.add_vertex(1.0);
        graph.add_edge(a, b).unwrap();
        graph.add_edge(b, c).unwrap();
        graph.add_edge(c, a).unwrap();

        assert_eq!(graph.topological_order(), Err(GraphError::CyclicGraph));
        assert_eq!(graph.compute_max_cost_path(), Err(GraphError::CyclicGraph));
    }

    #[test]
    fn test_self_loop_detected() {
        let mut graph = IntGraph::new();
        let a = graph.add_vertex(1.0);
        graph.add_edge(a, a).unwrap();

        assert_eq!(graph.compute_max_cost_path(), Err(GraphError::CyclicGraph));
    }
}
