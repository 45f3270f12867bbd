//! Visualization interface for the streaming pipeline
//!
//! The pipeline calls into a visualizer once per tick and once per completed
//! window, without depending on any drawing library. The null visualizer is
//! the default and compiles to nothing.

use crate::types::TickOutcome;
use tracing::{debug, info};
use zstream_core::Result;
use zstream_window::WindowFrame;

/// Hooks for whatever is drawing the two series
pub trait StreamVisualizer {
    /// Called after every tick with the classified point
    fn record_tick(&mut self, outcome: &TickOutcome) -> Result<()>;

    /// Called with a window's final contents just before it is cleared,
    /// and once more for the partial window when the pipeline finishes
    fn window_completed(&mut self, frame: &WindowFrame<'_>) -> Result<()>;

    /// Flush output; returns paths of generated files (if any)
    fn finish(&mut self) -> Result<Vec<String>> {
        Ok(Vec::new())
    }

    /// Check if this visualizer is active
    fn is_enabled(&self) -> bool {
        true
    }
}

/// Null visualizer that performs no operations
#[derive(Default, Clone, Copy, Debug)]
pub struct NullStreamVisualizer;

impl StreamVisualizer for NullStreamVisualizer {
    #[inline(always)]
    fn record_tick(&mut self, _: &TickOutcome) -> Result<()> {
        Ok(())
    }

    #[inline(always)]
    fn window_completed(&mut self, _: &WindowFrame<'_>) -> Result<()> {
        Ok(())
    }

    #[inline(always)]
    fn is_enabled(&self) -> bool {
        false
    }
}

/// Console rendition of the plot: one log event per point
#[derive(Debug, Clone, Default)]
pub struct TracingVisualizer {
    anomalies_only: bool,
    logged: usize,
}

impl TracingVisualizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip normal points and only report anomalies
    pub fn anomalies_only(mut self) -> Self {
        self.anomalies_only = true;
        self
    }

    /// Number of points emitted so far
    pub fn logged(&self) -> usize {
        self.logged
    }
}

impl StreamVisualizer for TracingVisualizer {
    fn record_tick(&mut self, outcome: &TickOutcome) -> Result<()> {
        if outcome.is_anomaly {
            info!(
                tick = outcome.tick,
                value = outcome.value,
                z_score = outcome.z_score,
                "anomaly"
            );
        } else if !self.anomalies_only {
            info!(
                tick = outcome.tick,
                value = outcome.value,
                z_score = outcome.z_score,
                "normal"
            );
        } else {
            return Ok(());
        }
        self.logged += 1;
        Ok(())
    }

    fn window_completed(&mut self, frame: &WindowFrame<'_>) -> Result<()> {
        match frame.anomaly_ratio() {
            Some(ratio) => info!(
                window = frame.index,
                start = frame.x_bounds.0,
                end = frame.x_bounds.1,
                normal = frame.normal.len(),
                anomalies = frame.anomalies.len(),
                anomaly_ratio = ratio,
                "window complete"
            ),
            None => debug!(window = frame.index, "empty window"),
        }
        Ok(())
    }
}

/// Forward to a boxed visualizer so the binary can choose one at runtime
impl<V: StreamVisualizer + ?Sized> StreamVisualizer for Box<V> {
    fn record_tick(&mut self, outcome: &TickOutcome) -> Result<()> {
        (**self).record_tick(outcome)
    }

    fn window_completed(&mut self, frame: &WindowFrame<'_>) -> Result<()> {
        (**self).window_completed(frame)
    }

    fn finish(&mut self) -> Result<Vec<String>> {
        (**self).finish()
    }

    fn is_enabled(&self) -> bool {
        (**self).is_enabled()
    }
}
