//! End-to-end scenarios for the per-tick pipeline

use approx::assert_relative_eq;
use proptest::prelude::*;
use std::time::Duration;
use zstream_core::{Point, Result, StreamConfig, StreamStatistics};
use zstream_pipeline::{
    AnomalyPipeline, Driver, NullStreamVisualizer, SequenceSource, StreamVisualizer, TickOutcome,
    UniformSource,
};
use zstream_stats::IncrementalStatistics;
use zstream_window::WindowFrame;

/// Records what the pipeline hands to a renderer
#[derive(Debug, Default)]
struct RecordingVisualizer {
    ticks: Vec<TickOutcome>,
    windows: Vec<(usize, (usize, usize), Vec<Point>, Vec<Point>)>,
    finished: bool,
}

impl StreamVisualizer for RecordingVisualizer {
    fn record_tick(&mut self, outcome: &TickOutcome) -> Result<()> {
        self.ticks.push(*outcome);
        Ok(())
    }

    fn window_completed(&mut self, frame: &WindowFrame<'_>) -> Result<()> {
        self.windows.push((
            frame.index,
            frame.x_bounds,
            frame.normal.to_vec(),
            frame.anomalies.to_vec(),
        ));
        Ok(())
    }

    fn finish(&mut self) -> Result<Vec<String>> {
        self.finished = true;
        Ok(vec![format!("{} windows", self.windows.len())])
    }
}

fn seeded_pipeline(seed: u64) -> AnomalyPipeline<UniformSource> {
    let config = StreamConfig { seed: Some(seed), ..Default::default() };
    let source = UniformSource::from_config(&config).unwrap();
    AnomalyPipeline::new(config, source).unwrap()
}

#[test]
fn test_three_tens_then_a_hundred() {
    let config = StreamConfig::default();
    let source = SequenceSource::new(vec![10.0, 10.0, 10.0, 100.0]).unwrap();
    let mut pipeline = AnomalyPipeline::new(config, source).unwrap();

    let outcomes: Vec<TickOutcome> = (0..4).map(|_| pipeline.tick().unwrap()).collect();

    // Constant prefix: zero variance, neutral
    for o in &outcomes[..3] {
        assert_eq!(o.z_score, 0.0);
        assert!(!o.is_anomaly);
    }
    let last = outcomes[3];
    assert_eq!(last.tick, 3);
    assert_relative_eq!(last.mean, 32.5);
    assert_relative_eq!(last.std_dev, 38.97, epsilon = 1e-2);
    assert_relative_eq!(last.z_score, 1.732, epsilon = 1e-3);
    assert!(last.is_anomaly);

    // Against the final population each 10 sits at z = -1/sqrt(3), inside the threshold
    let snapshot = pipeline.statistics().snapshot().unwrap();
    let ten = pipeline.classifier().classify(10.0, &snapshot);
    assert_relative_eq!(ten.z_score, -0.577, epsilon = 1e-3);
    assert!(!ten.is_anomaly);

    let frame = pipeline.frame();
    let normal_ticks: Vec<usize> = frame.normal.iter().map(|p| p.tick).collect();
    let anomaly_ticks: Vec<usize> = frame.anomalies.iter().map(|p| p.tick).collect();
    assert_eq!(normal_ticks, vec![0, 1, 2]);
    assert_eq!(anomaly_ticks, vec![3]);
}

#[test]
fn test_window_rolls_over_on_the_hundred_and_first_value() {
    let mut pipeline = seeded_pipeline(2024);

    for _ in 0..100 {
        let outcome = pipeline.tick().unwrap();
        assert!(!outcome.window_reset);
    }
    assert_eq!(pipeline.tick_count(), 100);
    assert_eq!(pipeline.frame().len(), 100);
    assert_eq!(pipeline.frame().x_bounds, (0, 100));

    let outcome = pipeline.tick().unwrap();
    assert!(outcome.window_reset);
    assert_eq!(outcome.tick, 100);

    let frame = pipeline.frame();
    assert_eq!(frame.len(), 1);
    assert_eq!(frame.x_bounds, (100, 200));
    assert_eq!(pipeline.window().window_start(), 100);
    let placed = frame.normal.iter().chain(frame.anomalies).next().unwrap();
    assert_eq!(placed.tick, 100);
    assert_eq!(placed.value, outcome.value);

    // The statistics never forget
    assert_eq!(pipeline.statistics().len(), 101);
}

#[test]
fn test_visualizer_sees_each_completed_window() {
    let config = StreamConfig { window_size: 10, seed: Some(5), ..Default::default() };
    let source = UniformSource::from_config(&config).unwrap();
    let mut pipeline = AnomalyPipeline::new(config, source)
        .unwrap()
        .with_visualizer(RecordingVisualizer::default());

    for _ in 0..25 {
        pipeline.tick().unwrap();
    }
    let files = pipeline.finish().unwrap();

    let viz = pipeline.visualizer();
    assert!(viz.finished);
    assert_eq!(files, vec!["3 windows".to_string()]);
    assert_eq!(viz.ticks.len(), 25);

    let bounds: Vec<(usize, usize)> = viz.windows.iter().map(|w| w.1).collect();
    assert_eq!(bounds, vec![(0, 10), (10, 20), (20, 30)]);
    let sizes: Vec<usize> = viz.windows.iter().map(|w| w.2.len() + w.3.len()).collect();
    assert_eq!(sizes, vec![10, 10, 5]);

    // Anomaly points match the per-tick classification
    for (_, _, normal, anomalies) in &viz.windows {
        for p in anomalies {
            assert!(viz.ticks[p.tick].is_anomaly);
        }
        for p in normal {
            assert!(!viz.ticks[p.tick].is_anomaly);
        }
    }
}

#[test]
fn test_counters_track_windows() {
    let config = StreamConfig { window_size: 3, ..Default::default() };
    let source = SequenceSource::new(vec![0.0]).unwrap();
    let mut pipeline = AnomalyPipeline::new(config, source).unwrap();

    // 0, 0, 0, 90, ... : the 90 is an outlier against the zeros
    pipeline.ingest_all([0.0, 0.0, 0.0, 90.0, 0.0]).unwrap();
    assert_eq!(pipeline.anomaly_total(), 1);
    assert_eq!(pipeline.window_anomalies(), 1);
    assert_eq!(pipeline.window().completed_windows(), 1);

    pipeline.ingest_all([0.0, 0.0]).unwrap();
    assert_eq!(pipeline.window().completed_windows(), 2);
    assert_eq!(pipeline.anomaly_total(), 1);
    assert_eq!(pipeline.window_anomalies(), 0);
}

#[test]
fn test_incremental_tracker_variant() {
    let config = StreamConfig::default();
    let source = SequenceSource::new(vec![10.0, 10.0, 10.0, 100.0]).unwrap();
    let mut pipeline =
        AnomalyPipeline::with_parts(config, source, IncrementalStatistics::new(), NullStreamVisualizer)
            .unwrap();
    let outcomes: Vec<TickOutcome> = (0..4).map(|_| pipeline.tick().unwrap()).collect();
    assert_eq!(
        outcomes.iter().map(|o| o.is_anomaly).collect::<Vec<_>>(),
        vec![false, false, false, true]
    );
    assert_eq!(pipeline.statistics().len(), 4);
}

#[test]
fn test_driver_runs_seeded_stream() {
    let config = StreamConfig {
        window_size: 20,
        tick_interval_ms: 1,
        max_ticks: Some(45),
        seed: Some(11),
        ..Default::default()
    };
    let source = UniformSource::from_config(&config).unwrap();
    let driver = Driver::from_config(&config).unwrap();
    let mut pipeline = AnomalyPipeline::new(config, source).unwrap();

    let summary = driver.run(&mut pipeline).unwrap();
    assert_eq!(summary.ticks, 45);
    assert_eq!(summary.windows_completed, 2);
    assert_eq!(summary.anomalies, pipeline.anomaly_total());
    assert!(summary.elapsed >= Duration::from_millis(40));
    assert_eq!(pipeline.frame().x_bounds, (40, 60));
}

#[test]
fn test_stop_handle_from_another_thread() {
    let config = StreamConfig { tick_interval_ms: 2, seed: Some(3), ..Default::default() };
    let source = UniformSource::from_config(&config).unwrap();
    let driver = Driver::from_config(&config).unwrap();
    let stop = driver.stop_handle();
    let mut pipeline = AnomalyPipeline::new(config, source).unwrap();

    let stopper = std::thread::spawn(move || {
        std::thread::sleep(Duration::from_millis(30));
        stop.stop();
    });
    let summary = driver.run(&mut pipeline).unwrap();
    stopper.join().unwrap();

    assert!(summary.ticks > 0);
    assert_eq!(summary.ticks as usize, pipeline.tick_count());
}

#[test]
fn test_same_seed_same_classification() {
    let mut a = seeded_pipeline(99);
    let mut b = seeded_pipeline(99);
    for _ in 0..250 {
        assert_eq!(a.tick().unwrap(), b.tick().unwrap());
    }
}

proptest! {
    // Property: every tick lands in exactly one series of the current window
    #[test]
    fn prop_each_tick_in_one_series(
        window in 1usize..40,
        values in prop::collection::vec(0.0f64..100.0, 1..200),
    ) {
        let config = StreamConfig { window_size: window, ..Default::default() };
        let source = SequenceSource::new(vec![0.0]).unwrap();
        let mut pipeline = AnomalyPipeline::new(config, source).unwrap();
        let outcomes = pipeline.ingest_all(values.iter().copied()).unwrap();

        let frame = pipeline.frame();
        let (start, end) = frame.x_bounds;
        prop_assert_eq!(end - start, window);
        prop_assert_eq!(frame.len(), pipeline.tick_count() - start);

        for p in frame.normal {
            prop_assert!(!outcomes[p.tick].is_anomaly);
            prop_assert_eq!(p.value, values[p.tick]);
        }
        for p in frame.anomalies {
            prop_assert!(outcomes[p.tick].is_anomaly);
        }
        prop_assert_eq!(
            pipeline.anomaly_total(),
            outcomes.iter().filter(|o| o.is_anomaly).count()
        );
    }
}
