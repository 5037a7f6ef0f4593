//! Rust implementation of weighted interval scheduling.
//!
//! Finds a maximum-weight subset of pairwise non-overlapping intervals by
//! building a compatibility DAG as intervals are added and taking its
//! heaviest vertex-weighted path. Also provides the plain-text interval
//! format, an SVG timeline plotter and Python bindings over all of it.

// Allow clippy warning triggered by PyO3 macro expansion
#![allow(clippy::useless_conversion)]

use pyo3::prelude::*;

mod config;
pub mod graph;
pub mod interner;
pub mod interval_set;
pub mod logging;
mod models;
pub mod parsing;
pub mod plotting;

pub use config::{IntervalSetConfig, PlotConfig};
pub use graph::{Graph, GraphError, IntGraph, KeyedGraphError, PathCostPair, VertexId};
pub use interval_set::{IntervalSet, IntervalSetError};
pub use models::{Interval, IntervalError, Schedule, WeightedInterval};
pub use parsing::{format_intervals, parse_intervals, ParseError};
pub use plotting::{plot_schedule, TimelinePlot};

/// A collection of possibly overlapping intervals (PyO3 wrapper).
#[pyclass(name = "IntervalSet")]
pub struct PyIntervalSet {
    inner: IntervalSet,
}

#[pymethods]
impl PyIntervalSet {
    #[new]
    #[pyo3(signature = (config=None))]
    fn new(config: Option<IntervalSetConfig>) -> Self {
        Self {
            inner: IntervalSet::with_config(&config.unwrap_or_default()),
        }
    }

    /// Add the interval from start to finish with the given weight.
    ///
    /// # Raises
    /// * ValueError for non-finite values, nonpositive duration or weight
    fn add(&mut self, start: f64, finish: f64, weight: f64) -> PyResult<()> {
        self.inner
            .add(start, finish, weight)
            .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))
    }

    /// Solve the weighted job scheduling problem on the intervals.
    ///
    /// # Raises
    /// * ValueError if no interval was added
    fn compute_max_cost_nonoverlapping_subset(&self) -> PyResult<Schedule> {
        self.inner
            .compute_max_cost_nonoverlapping_subset()
            .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))
    }

    /// All distinct intervals with their current weights, in insertion order.
    fn intervals(&self) -> Vec<WeightedInterval> {
        self.inner.intervals().collect()
    }

    #[getter]
    fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }

    fn __repr__(&self) -> String {
        format!(
            "IntervalSet(intervals={}, edges={})",
            self.inner.len(),
            self.inner.edge_count()
        )
    }
}

/// Parse `start finish weight` lines into weighted intervals.
///
/// # Raises
/// * ValueError on the first malformed line
#[pyfunction]
#[pyo3(name = "parse_intervals", signature = (text, verbosity=0))]
fn py_parse_intervals(text: &str, verbosity: u8) -> PyResult<Vec<WeightedInterval>> {
    parse_intervals(text, verbosity)
        .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))
}

/// Render intervals as an SVG timeline, highlighting those in `highlighted`.
#[pyfunction]
#[pyo3(name = "plot", signature = (intervals, highlighted, config=None))]
fn py_plot(
    intervals: Vec<WeightedInterval>,
    highlighted: Vec<WeightedInterval>,
    config: Option<PlotConfig>,
) -> String {
    let mut plot = TimelinePlot::new(config.unwrap_or_default());
    for weighted in intervals {
        let is_highlighted = highlighted
            .iter()
            .any(|h| h.interval() == weighted.interval());
        plot.add(weighted, is_highlighted);
    }
    plot.plot()
}

/// The wi.rust Python module.
#[pymodule]
fn rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Core data types
    m.add_class::<WeightedInterval>()?;
    m.add_class::<Schedule>()?;
    m.add_class::<PyIntervalSet>()?;

    // Config types
    m.add_class::<IntervalSetConfig>()?;
    m.add_class::<PlotConfig>()?;

    // Text format and rendering
    m.add_function(wrap_pyfunction!(py_parse_intervals, m)?)?;
    m.add_function(wrap_pyfunction!(py_plot, m)?)?;

    Ok(())
}
