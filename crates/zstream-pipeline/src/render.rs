//! SVG snapshots of completed windows (feature `plot`)

use crate::types::TickOutcome;
use crate::visualization::StreamVisualizer;
use plotters::prelude::*;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use tracing::debug;
use zstream_core::{Error, Result};
use zstream_window::WindowFrame;

const TITLE: &str = "Real-time Plot with Anomaly Detection using Z-scores";
const X_DESC: &str = "Random Data Points - X";
const Y_DESC: &str = "Random Data Points - Y";

fn render_error<E: Display>(err: E) -> Error {
    Error::Render(err.to_string())
}

/// Writes one SVG per completed window into a directory
#[derive(Debug, Clone)]
pub struct SvgWindowRenderer {
    output_dir: PathBuf,
    y_bounds: (f64, f64),
    size: (u32, u32),
    written: Vec<String>,
}

impl SvgWindowRenderer {
    /// Render into `output_dir` (created if missing) with a fixed y-range
    pub fn new(output_dir: impl Into<PathBuf>, y_bounds: (f64, f64)) -> Result<Self> {
        let (lo, hi) = y_bounds;
        if !lo.is_finite() || !hi.is_finite() || lo > hi {
            return Err(Error::invalid_parameter(
                "y bounds",
                format!("must be finite with low <= high, got [{lo}, {hi}]"),
            ));
        }
        let output_dir = output_dir.into();
        std::fs::create_dir_all(&output_dir)?;
        Ok(Self {
            output_dir,
            y_bounds,
            size: (1000, 600),
            written: Vec::new(),
        })
    }

    /// Image size in pixels
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    /// Files written so far
    pub fn written(&self) -> &[String] {
        &self.written
    }

    fn path_for(&self, frame: &WindowFrame<'_>) -> PathBuf {
        self.output_dir.join(format!("window_{:06}.svg", frame.x_bounds.0))
    }

    fn draw(&self, path: &Path, frame: &WindowFrame<'_>) -> Result<()> {
        let root = SVGBackend::new(path, self.size).into_drawing_area();
        root.fill(&WHITE).map_err(render_error)?;

        let (x0, x1) = frame.x_bounds;
        let (y0, y1) = if self.y_bounds.0 < self.y_bounds.1 {
            self.y_bounds
        } else {
            // Degenerate source range; pad so the axis has extent
            (self.y_bounds.0 - 1.0, self.y_bounds.1 + 1.0)
        };

        let mut chart = ChartBuilder::on(&root)
            .caption(TITLE, ("sans-serif", 22))
            .margin(12)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d(x0 as f64..x1 as f64, y0..y1)
            .map_err(render_error)?;

        chart
            .configure_mesh()
            .x_desc(X_DESC)
            .y_desc(Y_DESC)
            .draw()
            .map_err(render_error)?;

        chart
            .draw_series(
                frame
                    .normal
                    .iter()
                    .map(|p| Circle::new((p.tick as f64, p.value), 3, BLUE.filled())),
            )
            .map_err(render_error)?
            .label("Normal Data")
            .legend(|(x, y)| Circle::new((x, y), 3, BLUE.filled()));

        chart
            .draw_series(
                frame
                    .anomalies
                    .iter()
                    .map(|p| Circle::new((p.tick as f64, p.value), 4, RED.filled())),
            )
            .map_err(render_error)?
            .label("Anomaly Data")
            .legend(|(x, y)| Circle::new((x, y), 4, RED.filled()));

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::LowerRight)
            .background_style(WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .map_err(render_error)?;

        root.present().map_err(render_error)?;
        Ok(())
    }
}

impl StreamVisualizer for SvgWindowRenderer {
    fn record_tick(&mut self, _: &TickOutcome) -> Result<()> {
        Ok(())
    }

    fn window_completed(&mut self, frame: &WindowFrame<'_>) -> Result<()> {
        if frame.is_empty() {
            return Ok(());
        }
        let path = self.path_for(frame);
        self.draw(&path, frame)?;
        debug!(path = %path.display(), "wrote window snapshot");
        self.written.push(path.display().to_string());
        Ok(())
    }

    fn finish(&mut self) -> Result<Vec<String>> {
        Ok(self.written.clone())
    }
}
