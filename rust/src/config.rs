//! Configuration types for the solver and the timeline plotter.

use pyo3::prelude::*;

/// Configuration for an interval set.
#[pyclass]
#[derive(Clone, Debug, Default)]
pub struct IntervalSetConfig {
    /// Verbosity level: 0=silent, 1=changes, 2=checks, 3=debug.
    #[pyo3(get, set)]
    pub verbosity: u8,
    /// Number of intervals to pre-allocate room for.
    #[pyo3(get, set)]
    pub capacity: usize,
}

#[pymethods]
impl IntervalSetConfig {
    #[new]
    #[pyo3(signature = (verbosity=None, capacity=None))]
    fn new(verbosity: Option<u8>, capacity: Option<usize>) -> Self {
        let defaults = Self::default();
        Self {
            verbosity: verbosity.unwrap_or(defaults.verbosity),
            capacity: capacity.unwrap_or(defaults.capacity),
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "IntervalSetConfig(verbosity={}, capacity={})",
            self.verbosity, self.capacity
        )
    }
}

/// Configuration for SVG timeline rendering.
#[pyclass]
#[derive(Clone, Debug)]
pub struct PlotConfig {
    /// Horizontal pixels per unit of time
    #[pyo3(get, set)]
    pub scale: f64,
    /// Height of each bar in pixels
    #[pyo3(get, set)]
    pub row_height: f64,
    /// Vertical space between rows in pixels
    #[pyo3(get, set)]
    pub row_gap: f64,
    /// Blank border around the drawing in pixels
    #[pyo3(get, set)]
    pub margin: f64,
    /// Label font size in pixels
    #[pyo3(get, set)]
    pub font_size: f64,
    /// Fill colour of ordinary bars
    #[pyo3(get, set)]
    pub fill: String,
    /// Fill colour of highlighted bars
    #[pyo3(get, set)]
    pub highlight_fill: String,
    /// Outline colour of all bars
    #[pyo3(get, set)]
    pub stroke: String,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            scale: 20.0,
            row_height: 20.0,
            row_gap: 6.0,
            margin: 10.0,
            font_size: 12.0,
            fill: "lightgray".to_string(),
            highlight_fill: "gold".to_string(),
            stroke: "black".to_string(),
        }
    }
}

#[pymethods]
impl PlotConfig {
    #[new]
    #[pyo3(signature = (
        scale=None,
        row_height=None,
        row_gap=None,
        margin=None,
        font_size=None,
        fill=None,
        highlight_fill=None,
        stroke=None
    ))]
    #[allow(clippy::too_many_arguments)]
    fn new(
        scale: Option<f64>,
        row_height: Option<f64>,
        row_gap: Option<f64>,
        margin: Option<f64>,
        font_size: Option<f64>,
        fill: Option<String>,
        highlight_fill: Option<String>,
        stroke: Option<String>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            scale: scale.unwrap_or(defaults.scale),
            row_height: row_height.unwrap_or(defaults.row_height),
            row_gap: row_gap.unwrap_or(defaults.row_gap),
            margin: margin.unwrap_or(defaults.margin),
            font_size: font_size.unwrap_or(defaults.font_size),
            fill: fill.unwrap_or(defaults.fill),
            highlight_fill: highlight_fill.unwrap_or(defaults.highlight_fill),
            stroke: stroke.unwrap_or(defaults.stroke),
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "PlotConfig(scale={}, row_height={}, highlight_fill={:?})",
            self.scale, self.row_height, self.highlight_fill
        )
    }
}
