//! Bounded-memory statistics using Welford's algorithm
//!
//! Covers the same population as [`FullHistoryStatistics`](crate::FullHistoryStatistics)
//! in O(1) memory. Results agree up to floating point rounding, which can flip the
//! classification of values sitting right at the threshold, so this tracker is
//! opt-in rather than a drop-in replacement.

use crate::count_as;
use num_traits::{Float, NumCast};
use zstream_core::{Error, Result, StreamStatistics};

/// Running mean and sum of squared deviations
#[derive(Debug, Clone)]
pub struct IncrementalStatistics<F: Float = f64> {
    count: usize,
    mean: F,
    m2: F, // For Welford's algorithm
    range: Option<(F, F)>,
}

impl<F: Float> IncrementalStatistics<F> {
    pub fn new() -> Self {
        Self {
            count: 0,
            mean: F::zero(),
            m2: F::zero(),
            range: None,
        }
    }

    /// Smallest and largest observation recorded so far
    pub fn range(&self) -> Option<(F, F)> {
        self.range
    }

    fn ensure_non_empty(&self) -> Result<(F, F)> {
        self.range.ok_or_else(Error::empty_history)
    }
}

impl<F: Float> Default for IncrementalStatistics<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float> StreamStatistics<F> for IncrementalStatistics<F> {
    fn algorithm_name(&self) -> &'static str {
        "welford"
    }

    fn record(&mut self, value: F) {
        self.count += 1;
        // count is at least 1 here and always representable in F
        let n = <F as NumCast>::from(self.count).unwrap_or_else(F::max_value);
        let delta = value - self.mean;
        self.mean = self.mean + delta / n;
        let delta2 = value - self.mean;
        self.m2 = self.m2 + delta * delta2;

        self.range = Some(match self.range {
            Some((lo, hi)) => (lo.min(value), hi.max(value)),
            None => (value, value),
        });
    }

    fn len(&self) -> usize {
        self.count
    }

    fn mean(&self) -> Result<F> {
        let (lo, hi) = self.ensure_non_empty()?;
        if lo == hi {
            return Ok(lo);
        }
        Ok(self.mean)
    }

    fn std_dev(&self) -> Result<F> {
        let (lo, hi) = self.ensure_non_empty()?;
        if lo == hi {
            return Ok(F::zero());
        }
        let variance = self.m2 / count_as::<F>(self.count)?;
        Ok(variance.max(F::zero()).sqrt())
    }
}
