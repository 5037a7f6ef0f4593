//! Core data types for interval scheduling.

use pyo3::prelude::*;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use thiserror::Error;

/// Reasons an interval or weight is rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IntervalError {
    #[error("{start} to {finish} has a non-finite bound")]
    NonFiniteBound { start: f64, finish: f64 },
    #[error("{start} to {finish} has nonpositive duration")]
    NonPositiveDuration { start: f64, finish: f64 },
    #[error("{start} to {finish} has non-finite duration")]
    NonFiniteDuration { start: f64, finish: f64 },
    #[error("weight {0} is not finite")]
    NonFiniteWeight(f64),
    #[error("weight {0} is not positive")]
    NonPositiveWeight(f64),
}

/// A time interval with finite bounds and positive, finite duration.
///
/// Equality, hashing and ordering look only at the bounds. Negative zero is
/// stored as positive zero so that equal intervals always hash equally.
#[derive(Clone, Copy, Debug)]
pub struct Interval {
    start: f64,
    finish: f64,
}

impl Interval {
    /// Create an interval, validating its bounds.
    pub fn new(start: f64, finish: f64) -> Result<Self, IntervalError> {
        if !start.is_finite() || !finish.is_finite() {
            return Err(IntervalError::NonFiniteBound { start, finish });
        }
        let duration = finish - start;
        if !duration.is_finite() {
            return Err(IntervalError::NonFiniteDuration { start, finish });
        }
        if duration <= 0.0 {
            return Err(IntervalError::NonPositiveDuration { start, finish });
        }

        Ok(Self {
            start: start + 0.0,
            finish: finish + 0.0,
        })
    }

    /// The left endpoint.
    #[inline]
    pub fn start(&self) -> f64 {
        self.start
    }

    /// The right endpoint.
    #[inline]
    pub fn finish(&self) -> f64 {
        self.finish
    }

    #[inline]
    pub fn duration(&self) -> f64 {
        self.finish - self.start
    }

    /// Whether this interval can be placed before `other` in a schedule.
    #[inline]
    pub fn can_precede(&self, other: &Interval) -> bool {
        self.finish <= other.start
    }

    /// Whether the two intervals share any time.
    pub fn overlaps(&self, other: &Interval) -> bool {
        !self.can_precede(other) && !other.can_precede(self)
    }
}

impl PartialEq for Interval {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.finish == other.finish
    }
}

impl Eq for Interval {}

impl Hash for Interval {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.to_bits().hash(state);
        self.finish.to_bits().hash(state);
    }
}

impl Ord for Interval {
    fn cmp(&self, other: &Self) -> Ordering {
        self.start
            .total_cmp(&other.start)
            .then(self.finish.total_cmp(&other.finish))
    }
}

impl PartialOrd for Interval {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A time interval carrying a positive scheduling weight.
#[pyclass(frozen)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeightedInterval {
    pub(crate) interval: Interval,
    pub(crate) weight: f64,
}

impl WeightedInterval {
    /// Create a weighted interval, validating bounds and weight.
    pub fn new(start: f64, finish: f64, weight: f64) -> Result<Self, IntervalError> {
        Self::from_interval(Interval::new(start, finish)?, weight)
    }

    /// Attach a weight to an already validated interval.
    pub fn from_interval(interval: Interval, weight: f64) -> Result<Self, IntervalError> {
        Ok(Self {
            interval,
            weight: validate_weight(weight)?,
        })
    }

    #[inline]
    pub fn interval(&self) -> Interval {
        self.interval
    }

    #[inline]
    pub fn start(&self) -> f64 {
        self.interval.start
    }

    #[inline]
    pub fn finish(&self) -> f64 {
        self.interval.finish
    }

    #[inline]
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

/// Compact form: space-separated start, finish and weight.
impl fmt::Display for WeightedInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.start(), self.finish(), self.weight)
    }
}

#[pymethods]
impl WeightedInterval {
    #[new]
    fn py_new(start: f64, finish: f64, weight: f64) -> PyResult<Self> {
        Self::new(start, finish, weight)
            .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))
    }

    #[getter(start)]
    fn py_start(&self) -> f64 {
        self.start()
    }

    #[getter(finish)]
    fn py_finish(&self) -> f64 {
        self.finish()
    }

    #[getter(weight)]
    fn py_weight(&self) -> f64 {
        self.weight
    }

    fn __repr__(&self) -> String {
        format!(
            "WeightedInterval(start={}, finish={}, weight={})",
            self.start(),
            self.finish(),
            self.weight
        )
    }

    fn __str__(&self) -> String {
        self.to_string()
    }
}

/// A maximum-weight set of non-overlapping intervals, in time order.
#[pyclass]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Schedule {
    #[pyo3(get)]
    pub path: Vec<WeightedInterval>,
    /// Sum of the weights on `path`.
    #[pyo3(get)]
    pub cost: f64,
}

impl Schedule {
    /// Whether `interval` was selected.
    pub fn contains(&self, interval: &Interval) -> bool {
        self.path.iter().any(|wi| wi.interval == *interval)
    }

    /// Whether every consecutive pair can legally follow one another.
    pub fn is_nonoverlapping(&self) -> bool {
        self.path
            .windows(2)
            .all(|pair| pair[0].interval.can_precede(&pair[1].interval))
    }
}

#[pymethods]
impl Schedule {
    fn __len__(&self) -> usize {
        self.path.len()
    }

    fn __repr__(&self) -> String {
        format!("Schedule(intervals={}, cost={})", self.path.len(), self.cost)
    }
}

fn validate_weight(weight: f64) -> Result<f64, IntervalError> {
    if !weight.is_finite() {
        return Err(IntervalError::NonFiniteWeight(weight));
    }
    if weight <= 0.0 {
        return Err(IntervalError::NonPositiveWeight(weight));
    }
    Ok(weight)
}
