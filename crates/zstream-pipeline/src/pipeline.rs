//! The per-tick detection pipeline
//!
//! One tick runs, in order:
//!
//! 1. draw a value from the source, rejecting NaN and infinities
//! 2. window reset check on the pre-increment tick counter
//! 3. record it into the full history, then take mean and standard deviation
//! 4. classify it against the fixed threshold
//! 5. place `(tick, value)` in the normal or anomaly series
//! 6. advance the tick counter
//!
//! All state lives in [`AnomalyPipeline`]; a driver calls [`AnomalyPipeline::tick`]
//! and a renderer reads [`AnomalyPipeline::frame`] between ticks.

use crate::types::TickOutcome;
use crate::visualization::{NullStreamVisualizer, StreamVisualizer};
use tracing::{info, trace};
use zstream_anomaly::ZScoreClassifier;
use zstream_core::{DataSource, Error, Result, StreamConfig, StreamStatistics};
use zstream_stats::FullHistoryStatistics;
use zstream_window::{WindowBuffer, WindowFrame};

/// Owns the history, the display window and the counters of one stream
#[derive(Debug)]
pub struct AnomalyPipeline<S, T = FullHistoryStatistics<f64>, V = NullStreamVisualizer>
where
    S: DataSource,
    T: StreamStatistics<f64>,
    V: StreamVisualizer,
{
    config: StreamConfig,
    source: S,
    statistics: T,
    classifier: ZScoreClassifier<f64>,
    window: WindowBuffer,
    visualizer: V,
    anomaly_total: usize,
    window_anomalies: usize,
}

impl<S: DataSource> AnomalyPipeline<S> {
    /// Pipeline with the full-history tracker and no visualizer
    pub fn new(config: StreamConfig, source: S) -> Result<Self> {
        Self::with_parts(config, source, FullHistoryStatistics::new(), NullStreamVisualizer)
    }
}

impl<S, T, V> AnomalyPipeline<S, T, V>
where
    S: DataSource,
    T: StreamStatistics<f64>,
    V: StreamVisualizer,
{
    /// Assemble a pipeline from explicit parts; the tracker must be empty
    pub fn with_parts(config: StreamConfig, source: S, statistics: T, visualizer: V) -> Result<Self> {
        config.validate()?;
        if !statistics.is_empty() {
            return Err(Error::InvalidInput(format!(
                "statistics tracker already holds {} observations",
                statistics.len()
            )));
        }
        let classifier = ZScoreClassifier::new(config.threshold)?;
        let window = WindowBuffer::new(config.window_size)?;
        Ok(Self {
            config,
            source,
            statistics,
            classifier,
            window,
            visualizer,
            anomaly_total: 0,
            window_anomalies: 0,
        })
    }

    /// Swap the visualizer, keeping all stream state
    pub fn with_visualizer<V2: StreamVisualizer>(self, visualizer: V2) -> AnomalyPipeline<S, T, V2> {
        AnomalyPipeline {
            config: self.config,
            source: self.source,
            statistics: self.statistics,
            classifier: self.classifier,
            window: self.window,
            visualizer,
            anomaly_total: self.anomaly_total,
            window_anomalies: self.window_anomalies,
        }
    }

    /// Run one full tick with a value drawn from the source
    ///
    /// A non-finite draw is rejected before the window or statistics change.
    pub fn tick(&mut self) -> Result<TickOutcome> {
        let value = self.source.next_value();
        self.ingest(value)
    }

    /// Run one full tick with a caller-supplied value
    ///
    /// Non-finite values are rejected before any state changes.
    pub fn ingest(&mut self, value: f64) -> Result<TickOutcome> {
        if !value.is_finite() {
            return Err(Error::non_finite(value));
        }
        let window_reset = self.maybe_reset()?;
        self.process(value, window_reset)
    }

    /// Ingest a run of values, stopping at the first error
    pub fn ingest_all<I>(&mut self, values: I) -> Result<Vec<TickOutcome>>
    where
        I: IntoIterator<Item = f64>,
    {
        values.into_iter().map(|v| self.ingest(v)).collect()
    }

    fn maybe_reset(&mut self) -> Result<bool> {
        if !self.window.reset_due() {
            return Ok(false);
        }
        if self.visualizer.is_enabled() {
            self.visualizer.window_completed(&self.window.frame())?;
        }
        let cleared = self.window.len();
        self.window.maybe_reset();
        info!(
            tick = self.window.tick_count(),
            cleared,
            anomalies = self.window_anomalies,
            "window reset, x-range now [{}, {})",
            self.window.window_start(),
            self.window.window_end()
        );
        self.window_anomalies = 0;
        Ok(true)
    }

    fn process(&mut self, value: f64, window_reset: bool) -> Result<TickOutcome> {
        self.statistics.record(value);
        let snapshot = self.statistics.snapshot()?;
        let classification = self.classifier.classify(value, &snapshot);

        let tick = self.window.tick_count();
        self.window.record_point(tick, value, classification.is_anomaly);
        self.window.advance_tick();

        if classification.is_anomaly {
            self.anomaly_total += 1;
            self.window_anomalies += 1;
        }

        let outcome = TickOutcome {
            tick,
            value,
            z_score: classification.z_score,
            is_anomaly: classification.is_anomaly,
            mean: snapshot.mean,
            std_dev: snapshot.std_dev,
            window_reset,
        };
        trace!(
            tick,
            value,
            z_score = outcome.z_score,
            mean = snapshot.mean,
            std_dev = snapshot.std_dev,
            anomaly = outcome.is_anomaly,
            "tick"
        );

        if self.visualizer.is_enabled() {
            self.visualizer.record_tick(&outcome)?;
        }
        Ok(outcome)
    }

    /// Hand the current partial window to the visualizer and flush it
    pub fn finish(&mut self) -> Result<Vec<String>> {
        if !self.visualizer.is_enabled() {
            return Ok(Vec::new());
        }
        if !self.window.is_empty() {
            self.visualizer.window_completed(&self.window.frame())?;
        }
        self.visualizer.finish()
    }

    /// The two series and x-bounds of the current window
    pub fn frame(&self) -> WindowFrame<'_> {
        self.window.frame()
    }

    /// Fixed y-axis range: the configured source interval
    pub fn y_bounds(&self) -> (f64, f64) {
        self.config.value_range()
    }

    pub fn config(&self) -> &StreamConfig {
        &self.config
    }

    pub fn statistics(&self) -> &T {
        &self.statistics
    }

    pub fn window(&self) -> &WindowBuffer {
        &self.window
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn visualizer(&self) -> &V {
        &self.visualizer
    }

    pub fn visualizer_mut(&mut self) -> &mut V {
        &mut self.visualizer
    }

    pub fn classifier(&self) -> &ZScoreClassifier<f64> {
        &self.classifier
    }

    /// Ticks completed since start
    pub fn tick_count(&self) -> usize {
        self.window.tick_count()
    }

    /// Anomalies flagged since start
    pub fn anomaly_total(&self) -> usize {
        self.anomaly_total
    }

    /// Anomalies flagged in the current window
    pub fn window_anomalies(&self) -> usize {
        self.window_anomalies
    }
}
