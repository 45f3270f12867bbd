//! Value sources
//!
//! [`UniformSource`] is the synthetic stream: one draw per tick, uniform over a
//! closed interval. [`SequenceSource`] replays fixed values, which is handy for
//! scripted scenarios.

use rand::distributions::{Distribution, Uniform};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use zstream_core::{DataSource, Error, Result, StreamConfig};

/// Uniform draws from `[low, high]`
#[derive(Debug, Clone)]
pub struct UniformSource<R: Rng = ChaCha8Rng> {
    rng: R,
    dist: Uniform<f64>,
    low: f64,
    high: f64,
}

impl UniformSource<ChaCha8Rng> {
    /// Source seeded from OS entropy
    pub fn new(low: f64, high: f64) -> Result<Self> {
        Self::with_rng(ChaCha8Rng::from_entropy(), low, high)
    }

    /// Reproducible source
    pub fn seeded(low: f64, high: f64, seed: u64) -> Result<Self> {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed), low, high)
    }

    /// Source over the configured range, seeded when the config carries a seed
    pub fn from_config(config: &StreamConfig) -> Result<Self> {
        match config.seed {
            Some(seed) => Self::seeded(config.value_low, config.value_high, seed),
            None => Self::new(config.value_low, config.value_high),
        }
    }
}

impl<R: Rng> UniformSource<R> {
    pub fn with_rng(rng: R, low: f64, high: f64) -> Result<Self> {
        if !low.is_finite() || !high.is_finite() || low > high {
            return Err(Error::invalid_parameter(
                "value range",
                format!("must be finite with low <= high, got [{low}, {high}]"),
            ));
        }
        Ok(Self {
            rng,
            dist: Uniform::new_inclusive(low, high),
            low,
            high,
        })
    }
}

impl<R: Rng> DataSource for UniformSource<R> {
    fn next_value(&mut self) -> f64 {
        self.dist.sample(&mut self.rng)
    }

    fn bounds(&self) -> Option<(f64, f64)> {
        Some((self.low, self.high))
    }
}

/// Replays a fixed list of values, wrapping around at the end
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<f64>,
    position: usize,
}

impl SequenceSource {
    pub fn new(values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::InsufficientData {
                expected: 1,
                actual: 0,
            });
        }
        if let Some(&bad) = values.iter().find(|v| !v.is_finite()) {
            return Err(Error::non_finite(bad));
        }
        Ok(Self {
            values,
            position: 0,
        })
    }

    /// Values handed out so far
    pub fn position(&self) -> usize {
        self.position
    }
}

impl DataSource for SequenceSource {
    fn next_value(&mut self) -> f64 {
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value
    }

    fn bounds(&self) -> Option<(f64, f64)> {
        let lo = self.values.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Some((lo, hi))
    }
}
