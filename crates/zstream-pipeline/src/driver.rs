//! Fixed-rate tick driver
//!
//! Calls [`AnomalyPipeline::tick`] on a fixed interval from the current thread.
//! Ticks never overlap: each one completes before the next is scheduled. A tick
//! that overruns its slot re-anchors the schedule instead of firing a burst of
//! catch-up ticks.

use crate::pipeline::AnomalyPipeline;
use crate::types::RunSummary;
use crate::visualization::StreamVisualizer;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{info, warn};
use zstream_core::{DataSource, Error, Result, StreamConfig, StreamStatistics};

/// Cloneable flag that asks a running driver to stop after the current tick
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Stop on SIGINT or SIGTERM
    ///
    /// Only one handler can be installed per process; a second call fails.
    pub fn stop_on_interrupt(&self) -> Result<()> {
        let handle = self.clone();
        ctrlc::set_handler(move || {
            info!("interrupt received, stopping after the current tick");
            handle.stop();
        })
        .map_err(|e| Error::Other(anyhow::Error::new(e)))
    }
}

/// Periodic driver for one pipeline
#[derive(Debug, Clone)]
pub struct Driver {
    interval: Duration,
    max_ticks: Option<u64>,
    stop: StopHandle,
}

impl Driver {
    pub fn new(interval: Duration) -> Result<Self> {
        if interval.is_zero() {
            return Err(Error::invalid_parameter("tick interval", "must be positive"));
        }
        Ok(Self {
            interval,
            max_ticks: None,
            stop: StopHandle::new(),
        })
    }

    /// Driver using the configured interval and tick bound
    pub fn from_config(config: &StreamConfig) -> Result<Self> {
        Ok(Self::new(config.tick_interval())?.with_max_ticks(config.max_ticks))
    }

    /// Stop after `max_ticks` ticks; `None` runs until stopped
    pub fn with_max_ticks(mut self, max_ticks: Option<u64>) -> Self {
        self.max_ticks = max_ticks;
        self
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn max_ticks(&self) -> Option<u64> {
        self.max_ticks
    }

    /// Handle for stopping the run from another thread
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    fn should_stop(&self, ticks: u64) -> bool {
        self.stop.is_stopped() || self.max_ticks.is_some_and(|max| ticks >= max)
    }

    /// Drive `pipeline` until stopped or the tick bound is reached
    ///
    /// The first tick fires immediately. Errors from a tick end the run.
    pub fn run<S, T, V>(&self, pipeline: &mut AnomalyPipeline<S, T, V>) -> Result<RunSummary>
    where
        S: DataSource,
        T: StreamStatistics<f64>,
        V: StreamVisualizer,
    {
        info!(
            interval_ms = self.interval.as_millis() as u64,
            max_ticks = ?self.max_ticks,
            window_size = pipeline.config().window_size,
            threshold = pipeline.config().threshold,
            "driver started"
        );

        let started = Instant::now();
        let windows_before = pipeline.window().completed_windows();
        let anomalies_before = pipeline.anomaly_total();
        let mut next_deadline = started;
        let mut ticks = 0u64;
        let mut late_ticks = 0u64;

        while !self.should_stop(ticks) {
            let now = Instant::now();
            if next_deadline > now {
                thread::sleep(next_deadline - now);
                if self.stop.is_stopped() {
                    break;
                }
            }

            pipeline.tick()?;
            ticks += 1;

            next_deadline += self.interval;
            let finished = Instant::now();
            if finished > next_deadline {
                late_ticks += 1;
                warn!(
                    tick = pipeline.tick_count() - 1,
                    behind_ms = (finished - next_deadline).as_millis() as u64,
                    "tick overran its slot"
                );
                next_deadline = finished;
            }
        }

        let summary = RunSummary {
            ticks,
            anomalies: pipeline.anomaly_total() - anomalies_before,
            windows_completed: pipeline.window().completed_windows() - windows_before,
            late_ticks,
            elapsed: started.elapsed(),
        };
        info!(%summary, "driver stopped");
        Ok(summary)
    }
}
