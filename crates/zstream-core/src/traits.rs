//! Seams between the pipeline stages
//!
//! The per-tick pipeline is written against these traits so the tracker and the
//! value source can be swapped without touching the classification or window code.

use crate::error::Result;
use crate::types::StatisticsSnapshot;
use num_traits::Float;

/// Stream statistics over every observation recorded since start
///
/// `record` must be reflected by the next `mean`/`std_dev` call: the value being
/// classified is part of its own reference population.
pub trait StreamStatistics<F: Float> {
    /// Name of the estimation strategy
    fn algorithm_name(&self) -> &'static str;

    /// Append one observation to the history
    fn record(&mut self, value: F);

    /// Number of observations recorded so far
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Arithmetic mean over the whole history
    ///
    /// Fails with `InsufficientData` when nothing has been recorded.
    fn mean(&self) -> Result<F>;

    /// Population standard deviation over the whole history
    ///
    /// Fails with `InsufficientData` when nothing has been recorded.
    fn std_dev(&self) -> Result<F>;

    /// Mean, standard deviation and count taken together
    fn snapshot(&self) -> Result<StatisticsSnapshot<F>> {
        Ok(StatisticsSnapshot::new(self.mean()?, self.std_dev()?, self.len()))
    }
}

/// Produces exactly one observation per tick
pub trait DataSource {
    /// Draw the next observation
    fn next_value(&mut self) -> f64;

    /// Closed interval the source draws from, if bounded
    fn bounds(&self) -> Option<(f64, f64)> {
        None
    }
}

impl<D: DataSource + ?Sized> DataSource for Box<D> {
    fn next_value(&mut self) -> f64 {
        (**self).next_value()
    }

    fn bounds(&self) -> Option<(f64, f64)> {
        (**self).bounds()
    }
}
