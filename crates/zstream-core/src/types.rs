//! Value types shared across the pipeline stages

use num_traits::Float;
use serde::Serialize;
use std::fmt;

/// Mean and population standard deviation of the history at one tick
///
/// Derived on demand and never cached; a zero standard deviation is a valid
/// state (single observation, or a constant history).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatisticsSnapshot<F: Float = f64> {
    /// Arithmetic mean of every observation recorded so far
    pub mean: F,
    /// Population standard deviation (divides by N)
    pub std_dev: F,
    /// Number of observations the snapshot was taken over
    pub count: usize,
}

impl<F: Float> StatisticsSnapshot<F> {
    pub fn new(mean: F, std_dev: F, count: usize) -> Self {
        Self {
            mean,
            std_dev,
            count,
        }
    }

    /// Whether the history has no spread
    pub fn is_degenerate(&self) -> bool {
        self.std_dev == F::zero()
    }
}

/// Result of classifying one observation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Classification<F: Float = f64> {
    /// Signed distance from the mean in standard deviations
    pub z_score: F,
    pub is_anomaly: bool,
}

impl<F: Float> Classification<F> {
    /// The neutral result used when the history has zero variance
    pub fn neutral() -> Self {
        Self {
            z_score: F::zero(),
            is_anomaly: false,
        }
    }

    pub fn category(&self) -> Category {
        if self.is_anomaly {
            Category::Anomaly
        } else {
            Category::Normal
        }
    }
}

/// Which plotted series a point belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Normal,
    Anomaly,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Normal => write!(f, "Normal Data"),
            Category::Anomaly => write!(f, "Anomaly Data"),
        }
    }
}

/// A `(tick, value)` coordinate in the display window
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub tick: usize,
    pub value: f64,
}

impl Point {
    pub fn new(tick: usize, value: f64) -> Self {
        Self { tick, value }
    }
}

impl From<(usize, f64)> for Point {
    fn from((tick, value): (usize, f64)) -> Self {
        Self::new(tick, value)
    }
}
