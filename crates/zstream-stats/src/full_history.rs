//! Full-history statistics
//!
//! Keeps every observation and recomputes mean and population standard deviation
//! over the entire history on each request. Memory grows without bound; early
//! ticks (small N) are statistically unstable.

use crate::count_as;
use num_traits::Float;
use zstream_core::{Error, Result, StreamStatistics};

/// Append-only history with on-demand two-pass statistics
#[derive(Debug, Clone)]
pub struct FullHistoryStatistics<F: Float = f64> {
    history: Vec<F>,
    // (min, max) of the history; equal bounds mean a constant history
    range: Option<(F, F)>,
}

impl<F: Float> FullHistoryStatistics<F> {
    pub fn new() -> Self {
        Self {
            history: Vec::new(),
            range: None,
        }
    }

    /// Pre-allocate room for `capacity` observations
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            history: Vec::with_capacity(capacity),
            range: None,
        }
    }

    /// Every observation recorded so far, in arrival order
    pub fn history(&self) -> &[F] {
        &self.history
    }

    /// Smallest and largest observation recorded so far
    pub fn range(&self) -> Option<(F, F)> {
        self.range
    }

    fn bounds(&self) -> Result<(F, F)> {
        self.range.ok_or_else(Error::empty_history)
    }

    fn sum(&self) -> F {
        self.history.iter().fold(F::zero(), |acc, &x| acc + x)
    }
}

impl<F: Float> Default for FullHistoryStatistics<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float> StreamStatistics<F> for FullHistoryStatistics<F> {
    fn algorithm_name(&self) -> &'static str {
        "full-history"
    }

    fn record(&mut self, value: F) {
        self.history.push(value);
        self.range = Some(match self.range {
            Some((lo, hi)) => (lo.min(value), hi.max(value)),
            None => (value, value),
        });
    }

    fn len(&self) -> usize {
        self.history.len()
    }

    fn mean(&self) -> Result<F> {
        let (lo, hi) = self.bounds()?;
        // A constant history has an exact mean; summing would drift.
        if lo == hi {
            return Ok(lo);
        }
        Ok(self.sum() / count_as::<F>(self.history.len())?)
    }

    fn std_dev(&self) -> Result<F> {
        let (lo, hi) = self.bounds()?;
        if lo == hi {
            return Ok(F::zero());
        }

        let n = count_as::<F>(self.history.len())?;
        let mean = self.sum() / n;
        let sum_sq = self.history.iter().fold(F::zero(), |acc, &x| {
            let d = x - mean;
            acc + d * d
        });
        Ok((sum_sq / n).sqrt())
    }
}
