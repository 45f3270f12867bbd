//! Z-score classification
//!
//! `z = (x - mean) / std_dev`, flagged when `z > threshold` or `z < -threshold`.
//! The threshold itself is not anomalous. A zero standard deviation short-circuits
//! to a neutral, non-anomalous result instead of dividing by zero.

use num_traits::{Float, NumCast};
use zstream_core::{Classification, Error, Result, StatisticsSnapshot, DEFAULT_THRESHOLD};

/// Classify `value` against a mean and population standard deviation
///
/// Pure; the only special case is `std_dev == 0`, which yields a zero z-score
/// and never flags the value.
pub fn classify<F: Float>(value: F, mean: F, std_dev: F, threshold: F) -> Classification<F> {
    if std_dev == F::zero() {
        return Classification::neutral();
    }
    let z_score = (value - mean) / std_dev;
    Classification {
        z_score,
        is_anomaly: z_score > threshold || z_score < -threshold,
    }
}

/// Classifier holding a validated, fixed threshold
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZScoreClassifier<F: Float = f64> {
    threshold: F,
}

impl<F: Float> ZScoreClassifier<F> {
    /// Create a classifier; the threshold must be finite and non-negative
    pub fn new(threshold: F) -> Result<Self> {
        if !threshold.is_finite() || threshold < F::zero() {
            let shown = <f64 as NumCast>::from(threshold).unwrap_or(f64::NAN);
            return Err(Error::invalid_parameter(
                "threshold",
                format!("must be finite and non-negative, got {shown}"),
            ));
        }
        Ok(Self { threshold })
    }

    pub fn threshold(&self) -> F {
        self.threshold
    }

    /// Classify against a statistics snapshot that already includes `value`
    pub fn classify(&self, value: F, snapshot: &StatisticsSnapshot<F>) -> Classification<F> {
        classify(value, snapshot.mean, snapshot.std_dev, self.threshold)
    }

    /// Classify a batch of values against one snapshot
    pub fn classify_all(
        &self,
        values: &[F],
        snapshot: &StatisticsSnapshot<F>,
    ) -> Vec<Classification<F>> {
        values.iter().map(|&v| self.classify(v, snapshot)).collect()
    }
}

impl Default for ZScoreClassifier<f64> {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}
