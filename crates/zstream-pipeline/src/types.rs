//! Per-tick results

use serde::Serialize;
use std::fmt;
use std::time::Duration;
use zstream_core::Category;

/// Everything one tick of the pipeline produced
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TickOutcome {
    /// 0-based tick index; also the point's x-coordinate
    pub tick: usize,
    pub value: f64,
    pub z_score: f64,
    pub is_anomaly: bool,
    /// Mean of the history including this value
    pub mean: f64,
    /// Population standard deviation of the history including this value
    pub std_dev: f64,
    /// Whether the display window was cleared before this value was placed
    pub window_reset: bool,
}

impl TickOutcome {
    pub fn category(&self) -> Category {
        if self.is_anomaly {
            Category::Anomaly
        } else {
            Category::Normal
        }
    }
}

impl fmt::Display for TickOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "tick {}: value {:.3}, z {:+.3} ({})",
            self.tick,
            self.value,
            self.z_score,
            self.category()
        )
    }
}

/// Totals reported when a driver run ends
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub ticks: u64,
    pub anomalies: usize,
    pub windows_completed: usize,
    pub late_ticks: u64,
    pub elapsed: Duration,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ticks, {} anomalies, {} windows completed in {:.1?}",
            self.ticks, self.anomalies, self.windows_completed, self.elapsed
        )?;
        if self.late_ticks > 0 {
            write!(f, " ({} late)", self.late_ticks)?;
        }
        Ok(())
    }
}
