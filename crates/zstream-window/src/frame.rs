//! Borrowed view of one display window

use std::fmt;
use zstream_core::Point;

/// What a renderer needs to draw the current window
#[derive(Debug, Clone, Copy)]
pub struct WindowFrame<'a> {
    /// Ordinal of the window since start (0 for the first)
    pub index: usize,
    /// `(window_start, window_start + W)` for the x-axis
    pub x_bounds: (usize, usize),
    pub normal: &'a [Point],
    pub anomalies: &'a [Point],
}

impl<'a> WindowFrame<'a> {
    pub fn len(&self) -> usize {
        self.normal.len() + self.anomalies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Share of the window's points that were flagged
    pub fn anomaly_ratio(&self) -> Option<f64> {
        if self.is_empty() {
            None
        } else {
            Some(self.anomalies.len() as f64 / self.len() as f64)
        }
    }

    /// Observed value range within the window
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.normal
            .iter()
            .chain(self.anomalies)
            .map(|p| p.value)
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}

impl fmt::Display for WindowFrame<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "window #{} [{}, {}): {} normal, {} anomalies",
            self.index,
            self.x_bounds.0,
            self.x_bounds.1,
            self.normal.len(),
            self.anomalies.len()
        )
    }
}
