//! `zstream`: run the detector against a synthetic uniform stream

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use zstream_core::StreamConfig;
use zstream_pipeline::{AnomalyPipeline, Driver, StreamVisualizer, TracingVisualizer, UniformSource};

#[derive(Parser, Debug)]
#[command(name = "zstream")]
#[command(author, version, about = "Streaming z-score anomaly detector", long_about = None)]
struct Cli {
    /// JSON configuration file; flags override its values
    #[arg(long, env = "ZSTREAM_CONFIG")]
    config: Option<PathBuf>,

    /// Ticks per display window
    #[arg(long)]
    window_size: Option<usize>,

    /// Two-sided z-score threshold
    #[arg(long)]
    threshold: Option<f64>,

    /// Lower bound of the synthetic source
    #[arg(long, allow_hyphen_values = true)]
    low: Option<f64>,

    /// Upper bound of the synthetic source
    #[arg(long, allow_hyphen_values = true)]
    high: Option<f64>,

    /// Milliseconds between ticks
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Stop after this many ticks
    #[arg(long)]
    max_ticks: Option<u64>,

    /// Seed the source for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Write an SVG of every completed window into this directory
    #[cfg(feature = "plot")]
    #[arg(long)]
    svg_dir: Option<PathBuf>,

    /// Only log anomalous points
    #[arg(long)]
    anomalies_only: bool,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Human)]
    log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Human,
    Json,
}

impl Cli {
    fn stream_config(&self) -> Result<StreamConfig> {
        let mut config = match &self.config {
            Some(path) => StreamConfig::from_json_file(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => StreamConfig::default(),
        };
        if let Some(window_size) = self.window_size {
            config.window_size = window_size;
        }
        if let Some(threshold) = self.threshold {
            config.threshold = threshold;
        }
        if let Some(low) = self.low {
            config.value_low = low;
        }
        if let Some(high) = self.high {
            config.value_high = high;
        }
        if let Some(interval_ms) = self.interval_ms {
            config.tick_interval_ms = interval_ms;
        }
        if self.max_ticks.is_some() {
            config.max_ticks = self.max_ticks;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config.validate()?;
        Ok(config)
    }
}

fn init_logging(cli: &Cli) {
    let level = if cli.quiet {
        "warn"
    } else {
        match cli.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match cli.log_format {
        LogFormat::Human => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_ansi(std::io::stderr().is_terminal())
            .init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init(),
    }
}

fn run<V: StreamVisualizer>(config: StreamConfig, visualizer: V) -> Result<()> {
    let source = UniformSource::from_config(&config)?;
    let driver = Driver::from_config(&config)?;
    driver
        .stop_handle()
        .stop_on_interrupt()
        .context("installing the interrupt handler")?;
    let mut pipeline = AnomalyPipeline::new(config, source)?.with_visualizer(visualizer);

    let summary = driver.run(&mut pipeline)?;
    let files = pipeline.finish()?;

    println!("{summary}");
    for file in files {
        println!("wrote {file}");
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);
    let config = cli.stream_config()?;

    #[cfg(feature = "plot")]
    if let Some(dir) = &cli.svg_dir {
        let renderer = zstream_pipeline::SvgWindowRenderer::new(dir, config.value_range())?;
        return run(config, renderer);
    }

    let visualizer = if cli.anomalies_only {
        TracingVisualizer::new().anomalies_only()
    } else {
        TracingVisualizer::new()
    };
    run(config, visualizer)
}
