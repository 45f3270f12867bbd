//! Windowed display buffer
//!
//! Holds the points of the current window only. Every time the tick counter
//! reaches a positive multiple of the window size, both series are cleared and
//! the x-axis moves to `[tick_count, tick_count + W)`. Points from previous
//! windows are discarded, not archived.

use crate::frame::WindowFrame;
use tracing::debug;
use zstream_core::{Category, Error, Point, Result};

/// Per-category coordinate buffers for the current window
#[derive(Debug, Clone)]
pub struct WindowBuffer {
    window_size: usize,
    tick_count: usize,
    window_start: usize,
    normal_points: Vec<Point>,
    anomaly_points: Vec<Point>,
    completed_windows: usize,
}

impl WindowBuffer {
    /// Create an empty buffer; `window_size` must be positive
    pub fn new(window_size: usize) -> Result<Self> {
        if window_size == 0 {
            return Err(Error::invalid_parameter("window_size", "must be positive"));
        }
        Ok(Self {
            window_size,
            tick_count: 0,
            window_start: 0,
            normal_points: Vec::new(),
            anomaly_points: Vec::new(),
            completed_windows: 0,
        })
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Ticks completed since start (the index the next point will get)
    pub fn tick_count(&self) -> usize {
        self.tick_count
    }

    /// Lower x-bound of the current window, inclusive
    pub fn window_start(&self) -> usize {
        self.window_start
    }

    /// Upper x-bound of the current window, exclusive
    pub fn window_end(&self) -> usize {
        self.window_start.saturating_add(self.window_size)
    }

    pub fn x_bounds(&self) -> (usize, usize) {
        (self.window_start, self.window_end())
    }

    /// Number of windows cleared so far
    pub fn completed_windows(&self) -> usize {
        self.completed_windows
    }

    /// Whether the next `maybe_reset` call will clear the window
    pub fn reset_due(&self) -> bool {
        self.tick_count > 0
            && self.tick_count % self.window_size == 0
            && self.window_start != self.tick_count
    }

    /// Clear both series when the tick counter sits on a window boundary
    ///
    /// Called once per tick before the new value is produced. Returns whether a
    /// reset happened; a second call on the same tick is a no-op.
    pub fn maybe_reset(&mut self) -> bool {
        if !self.reset_due() {
            return false;
        }
        debug!(
            tick = self.tick_count,
            normal = self.normal_points.len(),
            anomalies = self.anomaly_points.len(),
            "clearing display window"
        );
        self.normal_points.clear();
        self.anomaly_points.clear();
        self.window_start = self.tick_count;
        self.completed_windows += 1;
        true
    }

    /// Append `(tick, value)` to the series picked by `is_anomaly`
    pub fn record_point(&mut self, tick: usize, value: f64, is_anomaly: bool) {
        debug_assert!(
            self.contains(tick),
            "tick {tick} outside window [{}, {})",
            self.window_start,
            self.window_end()
        );
        let point = Point::new(tick, value);
        if is_anomaly {
            self.anomaly_points.push(point);
        } else {
            self.normal_points.push(point);
        }
    }

    /// Move to the next tick
    pub fn advance_tick(&mut self) {
        self.tick_count += 1;
    }

    /// Whether `tick` falls inside the current window's x-range
    pub fn contains(&self, tick: usize) -> bool {
        tick >= self.window_start && tick < self.window_end()
    }

    pub fn normal_points(&self) -> &[Point] {
        &self.normal_points
    }

    pub fn anomaly_points(&self) -> &[Point] {
        &self.anomaly_points
    }

    pub fn points(&self, category: Category) -> &[Point] {
        match category {
            Category::Normal => &self.normal_points,
            Category::Anomaly => &self.anomaly_points,
        }
    }

    /// Points held across both series
    pub fn len(&self) -> usize {
        self.normal_points.len() + self.anomaly_points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrowed view of the current window for a renderer
    pub fn frame(&self) -> WindowFrame<'_> {
        WindowFrame {
            index: self.completed_windows,
            x_bounds: self.x_bounds(),
            normal: &self.normal_points,
            anomalies: &self.anomaly_points,
        }
    }
}
