//! Stream statistics trackers
//!
//! Two implementations of [`StreamStatistics`]:
//!
//! - [`FullHistoryStatistics`]: keeps every observation and recomputes the mean
//!   and population standard deviation over the entire history on every call.
//!   This is what the detection pipeline uses.
//! - [`IncrementalStatistics`]: Welford's running update in constant memory.
//!
//! Both report an exact zero standard deviation for a constant history, so the
//! classifier's zero-variance guard holds regardless of rounding.
//!
//! ```rust
//! use zstream_stats::{FullHistoryStatistics, StreamStatistics};
//!
//! let mut stats = FullHistoryStatistics::new();
//! for x in [10.0, 10.0, 10.0, 100.0] {
//!     stats.record(x);
//! }
//! assert_eq!(stats.mean().unwrap(), 32.5);
//! ```

pub mod full_history;
pub mod incremental;

pub use full_history::FullHistoryStatistics;
pub use incremental::IncrementalStatistics;
pub use zstream_core::{StatisticsSnapshot, StreamStatistics};

use num_traits::{Float, NumCast};
use zstream_core::{Error, Result};

/// Convert an observation count into the float type
pub(crate) fn count_as<F: Float>(count: usize) -> Result<F> {
    <F as NumCast>::from(count).ok_or_else(|| {
        Error::InvalidInput(format!("history length {count} is not representable"))
    })
}
