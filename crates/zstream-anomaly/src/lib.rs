//! Z-score anomaly classification
//!
//! Classifies one observation at a time against the statistics of the stream
//! it belongs to. The observation is expected to already be part of that
//! population: the tracker records it before the snapshot is taken.
//!
//! ```rust
//! use zstream_anomaly::classify;
//!
//! let result = classify(100.0, 32.5, 38.97, 0.9);
//! assert!(result.is_anomaly);
//! ```

pub mod zscore;

pub use zscore::{classify, ZScoreClassifier};
pub use zstream_core::{Category, Classification};
