//! Weighted interval scheduling over an incrementally built compatibility DAG.
//!
//! Every interval is a vertex weighted by its scheduling weight. An edge runs
//! from `a` to `b` whenever `a` finishes no later than `b` starts, so any path
//! through the graph is a set of pairwise non-overlapping intervals and the
//! heaviest path is an optimal schedule.
//!
//! Building a set of n intervals costs O(n²) and solving is O(V + E), which is
//! also O(n²) when most intervals are compatible.

use thiserror::Error;

use crate::config::IntervalSetConfig;
use crate::graph::{Graph, GraphError, KeyedGraphError};
use crate::models::{Interval, IntervalError, Schedule, WeightedInterval};
use crate::{log_changes, log_checks, log_debug};

/// Errors that can occur when adding intervals or solving.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IntervalSetError {
    #[error("invalid interval: {0}")]
    Invalid(#[from] IntervalError),
    #[error(transparent)]
    Graph(#[from] KeyedGraphError),
}

impl IntervalSetError {
    /// Whether solving failed because no interval was ever added.
    pub fn is_empty_set(&self) -> bool {
        matches!(
            self,
            IntervalSetError::Graph(KeyedGraphError::Graph(GraphError::EmptyGraph))
        )
    }
}

/// A collection of possibly overlapping positive-length intervals.
#[derive(Debug, Clone)]
pub struct IntervalSet {
    graph: Graph<Interval>,
    verbosity: u8,
}

impl IntervalSet {
    /// Create an initially empty set of intervals.
    pub fn new() -> Self {
        Self::with_config(&IntervalSetConfig::default())
    }

    pub fn with_config(config: &IntervalSetConfig) -> Self {
        Self {
            graph: Graph::with_capacity(config.capacity),
            verbosity: config.verbosity,
        }
    }

    /// Number of distinct intervals.
    pub fn len(&self) -> usize {
        self.graph.order()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of compatibility edges.
    pub fn edge_count(&self) -> usize {
        self.graph.size()
    }

    /// All distinct intervals with their current weights, in insertion order.
    pub fn intervals(&self) -> impl Iterator<Item = WeightedInterval> + '_ {
        self.graph
            .weighted_vertices()
            .map(|(&interval, weight)| WeightedInterval { interval, weight })
    }

    /// Add the interval from `start` to `finish` with the given weight.
    ///
    /// Adding bounds that are already present keeps the larger weight and
    /// leaves the compatibility edges as they were.
    ///
    /// # Returns
    /// * `Ok(())` once the interval is stored or merged
    /// * `Err(IntervalSetError::Invalid)` for non-finite values, nonpositive
    ///   duration or nonpositive weight; the set is left unchanged
    pub fn add(
        &mut self,
        start: f64,
        finish: f64,
        weight: f64,
    ) -> Result<(), IntervalSetError> {
        let weighted = WeightedInterval::new(start, finish, weight).inspect_err(|e| {
            log_checks!(self.verbosity, "Rejected interval: {}", e);
        })?;
        self.add_weighted(weighted)
    }

    /// Add an already validated weighted interval.
    pub fn add_weighted(&mut self, weighted: WeightedInterval) -> Result<(), IntervalSetError> {
        let new_interval = weighted.interval();

        match self.graph.add_vertex(new_interval, weighted.weight()) {
            Ok(()) => {}
            Err(KeyedGraphError::DuplicateKey(_)) => {
                // Bounds are unchanged, so no edges are added or removed
                self.graph.increase_weight(&new_interval, weighted.weight())?;
                log_changes!(
                    self.verbosity,
                    "Merged {} into existing interval, weight now {}",
                    weighted,
                    self.graph.weight(&new_interval)?
                );
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        }

        log_changes!(self.verbosity, "Added interval {}", weighted);

        let edges: Vec<(Interval, Interval)> = self
            .graph
            .vertices()
            .filter_map(|&old_interval| {
                if new_interval.can_precede(&old_interval) {
                    Some((new_interval, old_interval))
                } else if old_interval.can_precede(&new_interval) {
                    Some((old_interval, new_interval))
                } else {
                    None
                }
            })
            .collect();

        for (src, dest) in &edges {
            self.graph.add_edge(src, dest)?;
            log_checks!(
                self.verbosity,
                "  Edge [{}, {}) -> [{}, {})",
                src.start(),
                src.finish(),
                dest.start(),
                dest.finish()
            );
        }

        Ok(())
    }

    /// Add every interval in order, stopping at the first failure.
    pub fn add_all<I>(&mut self, intervals: I) -> Result<(), IntervalSetError>
    where
        I: IntoIterator<Item = WeightedInterval>,
    {
        for weighted in intervals {
            self.add_weighted(weighted)?;
        }
        Ok(())
    }

    /// Solve the weighted job scheduling problem on the intervals.
    ///
    /// # Returns
    /// * `Ok(Schedule)` with the chosen intervals in time order and their
    ///   total weight
    /// * `Err(IntervalSetError::Graph)` wrapping the empty-graph error if
    ///   nothing was ever added
    ///
    /// # Panics
    /// If the compatibility graph contains a cycle, which edge construction
    /// never produces.
    pub fn compute_max_cost_nonoverlapping_subset(
        &self,
    ) -> Result<Schedule, IntervalSetError> {
        log_debug!(
            self.verbosity,
            "Solving over {} intervals and {} compatibility edges",
            self.graph.order(),
            self.graph.size()
        );

        let result = match self.graph.compute_max_cost_path() {
            Ok(result) => result,
            Err(KeyedGraphError::Graph(GraphError::CyclicGraph)) => {
                unreachable!("compatibility graph contains a cycle")
            }
            Err(e) => return Err(e.into()),
        };

        let path: Vec<WeightedInterval> = result
            .path
            .into_iter()
            .map(|(interval, weight)| WeightedInterval { interval, weight })
            .collect();

        log_debug!(
            self.verbosity,
            "Best schedule has {} intervals, cost {}",
            path.len(),
            result.cost
        );

        Ok(Schedule {
            path,
            cost: result.cost,
        })
    }
}

impl Default for IntervalSet {
    fn default() -> Self {
        Self::new()
    }
}
