//! Streaming z-score anomaly detection
//!
//! Flags outliers in a continuously generated numeric sequence. Each tick a
//! value is appended to the full history, scored against the mean and
//! population standard deviation of that history, and placed in the normal or
//! anomaly series of a display window that resets every `W` ticks.
//!
//! This crate re-exports the workspace members:
//!
//! - [`zstream_core`]: shared types, configuration and errors
//! - [`zstream_stats`]: stream statistics trackers
//! - [`zstream_anomaly`]: z-score classification
//! - [`zstream_window`]: windowed display buffers
//! - [`zstream_pipeline`]: the per-tick pipeline, sources, visualizers and driver
//!
//! ```rust
//! use zstream::prelude::*;
//!
//! let source = SequenceSource::new(vec![10.0, 10.0, 10.0, 100.0]).unwrap();
//! let mut pipeline = AnomalyPipeline::new(StreamConfig::default(), source).unwrap();
//! let flags: Vec<bool> = (0..4).map(|_| pipeline.tick().unwrap().is_anomaly).collect();
//! assert_eq!(flags, vec![false, false, false, true]);
//! ```

pub use zstream_anomaly;
pub use zstream_core;
pub use zstream_pipeline;
pub use zstream_stats;
pub use zstream_window;

pub use zstream_core::{Error, Result};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use zstream_anomaly::{classify, ZScoreClassifier};
    pub use zstream_core::{
        Category, Classification, DataSource, Error, Point, Result, StatisticsSnapshot,
        StreamConfig, StreamStatistics,
    };
    pub use zstream_pipeline::{
        AnomalyPipeline, Driver, NullStreamVisualizer, SequenceSource, StopHandle,
        StreamVisualizer, TickOutcome, TracingVisualizer, UniformSource,
    };
    pub use zstream_stats::{FullHistoryStatistics, IncrementalStatistics};
    pub use zstream_window::{WindowBuffer, WindowFrame};
}
