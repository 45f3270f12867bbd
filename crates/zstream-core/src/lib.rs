//! Core traits and types for streaming anomaly detection
//!
//! This crate holds what every stage of the pipeline agrees on:
//!
//! - [`StreamStatistics`]: the statistics tracker seam
//! - [`DataSource`]: one observation per tick
//! - [`StatisticsSnapshot`], [`Classification`], [`Point`]: values passed between stages
//! - [`StreamConfig`]: the startup configuration
//! - [`Error`] / [`Result`]: the unified error type

pub mod config;
pub mod error;
pub mod traits;
pub mod types;

pub use config::{
    StreamConfig, DEFAULT_THRESHOLD, DEFAULT_TICK_INTERVAL_MS, DEFAULT_VALUE_HIGH,
    DEFAULT_VALUE_LOW, DEFAULT_WINDOW_SIZE,
};
pub use error::{Error, Result};
pub use traits::{DataSource, StreamStatistics};
pub use types::{Category, Classification, Point, StatisticsSnapshot};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
