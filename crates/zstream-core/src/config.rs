//! Startup configuration for the streaming detector
//!
//! All values are fixed once the pipeline is constructed.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Number of ticks shown in one display window
pub const DEFAULT_WINDOW_SIZE: usize = 100;
/// Two-sided z-score threshold
pub const DEFAULT_THRESHOLD: f64 = 0.9;
/// Lower bound of the synthetic source
pub const DEFAULT_VALUE_LOW: f64 = 0.0;
/// Upper bound of the synthetic source
pub const DEFAULT_VALUE_HIGH: f64 = 100.0;
/// Redraw period of the driver
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 300;

/// Configuration of one detector run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StreamConfig {
    /// Ticks per display window (`W`)
    pub window_size: usize,
    /// Anomaly threshold on `|z|`, exclusive
    pub threshold: f64,
    /// Lower bound of the source interval
    pub value_low: f64,
    /// Upper bound of the source interval
    pub value_high: f64,
    /// Period between ticks in milliseconds
    pub tick_interval_ms: u64,
    /// Seed for a reproducible source; entropy when absent
    pub seed: Option<u64>,
    /// Stop after this many ticks; run until stopped when absent
    pub max_ticks: Option<u64>,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            threshold: DEFAULT_THRESHOLD,
            value_low: DEFAULT_VALUE_LOW,
            value_high: DEFAULT_VALUE_HIGH,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            seed: None,
            max_ticks: None,
        }
    }
}

impl StreamConfig {
    /// Parse a JSON document; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Check every field, reporting the first invalid one
    pub fn validate(&self) -> Result<()> {
        if self.window_size == 0 {
            return Err(Error::invalid_parameter("window_size", "must be positive"));
        }
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(Error::invalid_parameter(
                "threshold",
                format!("must be finite and non-negative, got {}", self.threshold),
            ));
        }
        if !self.value_low.is_finite() || !self.value_high.is_finite() {
            return Err(Error::invalid_parameter(
                "value range",
                format!("must be finite, got [{}, {}]", self.value_low, self.value_high),
            ));
        }
        if self.value_low > self.value_high {
            return Err(Error::invalid_parameter(
                "value range",
                format!("is inverted: [{}, {}]", self.value_low, self.value_high),
            ));
        }
        if self.tick_interval_ms == 0 {
            return Err(Error::invalid_parameter("tick_interval_ms", "must be positive"));
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn value_range(&self) -> (f64, f64) {
        (self.value_low, self.value_high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = StreamConfig::default();
        assert_eq!(config.window_size, 100);
        assert_eq!(config.threshold, 0.9);
        assert_eq!(config.value_range(), (0.0, 100.0));
        assert_eq!(config.tick_interval(), Duration::from_millis(300));
        assert!(config.seed.is_none());
        assert!(config.max_ticks.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let bad = [
            StreamConfig { window_size: 0, ..Default::default() },
            StreamConfig { threshold: f64::NAN, ..Default::default() },
            StreamConfig { threshold: -0.5, ..Default::default() },
            StreamConfig { value_low: 10.0, value_high: 5.0, ..Default::default() },
            StreamConfig { value_high: f64::INFINITY, ..Default::default() },
            StreamConfig { tick_interval_ms: 0, ..Default::default() },
        ];
        for config in bad {
            assert!(
                matches!(config.validate(), Err(Error::InvalidParameter(_))),
                "accepted {config:?}"
            );
        }
    }

    #[test]
    fn test_degenerate_range_is_allowed() {
        let config = StreamConfig { value_low: 42.0, value_high: 42.0, ..Default::default() };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = StreamConfig::from_json_str(r#"{ "window_size": 50, "seed": 7 }"#).unwrap();
        assert_eq!(config.window_size, 50);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.threshold, DEFAULT_THRESHOLD);
        assert_eq!(config.tick_interval_ms, DEFAULT_TICK_INTERVAL_MS);
    }

    #[test]
    fn test_json_rejects_unknown_and_invalid() {
        assert!(matches!(
            StreamConfig::from_json_str(r#"{ "window": 50 }"#),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            StreamConfig::from_json_str(r#"{ "window_size": 0 }"#),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "threshold": 1.5, "max_ticks": 250 }}"#).unwrap();

        let config = StreamConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.threshold, 1.5);
        assert_eq!(config.max_ticks, Some(250));

        let missing = StreamConfig::from_json_file("/nonexistent/zstream.json");
        assert!(matches!(missing, Err(Error::Io(_))));
    }
}
