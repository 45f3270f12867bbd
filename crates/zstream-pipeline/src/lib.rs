//! Streaming z-score anomaly detection pipeline
//!
//! Wires the stages together into a single owned object that a periodic
//! driver ticks and a renderer reads:
//!
//! - [`source`]: one value per tick ([`UniformSource`], [`SequenceSource`])
//! - [`pipeline`]: [`AnomalyPipeline`], the per-tick cycle and its counters
//! - [`visualization`]: hooks for drawing the two series
//! - [`driver`]: fixed-rate [`Driver`] with a [`StopHandle`]
//!
//! ## Usage
//!
//! ```rust
//! use zstream_pipeline::{AnomalyPipeline, UniformSource};
//! use zstream_core::StreamConfig;
//!
//! let config = StreamConfig { seed: Some(7), ..Default::default() };
//! let source = UniformSource::from_config(&config).unwrap();
//! let mut pipeline = AnomalyPipeline::new(config, source).unwrap();
//!
//! for _ in 0..150 {
//!     pipeline.tick().unwrap();
//! }
//! let frame = pipeline.frame();
//! assert_eq!(frame.x_bounds, (100, 200));
//! assert_eq!(frame.len(), 50);
//! ```

pub mod driver;
pub mod pipeline;
#[cfg(feature = "plot")]
pub mod render;
pub mod source;
pub mod types;
pub mod visualization;

pub use driver::{Driver, StopHandle};
pub use pipeline::AnomalyPipeline;
#[cfg(feature = "plot")]
pub use render::SvgWindowRenderer;
pub use source::{SequenceSource, UniformSource};
pub use types::{RunSummary, TickOutcome};
pub use visualization::{NullStreamVisualizer, StreamVisualizer, TracingVisualizer};
