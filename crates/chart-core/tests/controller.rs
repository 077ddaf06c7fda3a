// File: crates/chart-core/tests/controller.rs
// Purpose: Controller lifecycle, guards and redraw protocol against a recording engine.

mod support;

use profile_chart_core::controller::{LIVE_DATASET, PATTERN_DATASET};
use profile_chart_core::{ChartController, ChartHandle, ControllerConfig, PlotPoint, RedrawMode, Step, MINIMUM_OVERLAY_WIDTH};
use support::{points, CanvasId, RecordingEngine};

fn controller() -> ChartController<RecordingEngine> {
    ChartController::new(RecordingEngine::default(), CanvasId("patternChart"))
}

fn ramp() -> Vec<Step> {
    vec![Step::new(0, 5.0, 30.0), Step::new(1, 0.0, 30.0)]
}

#[test]
fn updates_before_initialize_are_ignored() {
    let mut ctl = controller();
    assert_eq!(ctl.update_pattern(&ramp()).unwrap(), None);
    ctl.update_live_value(22.0, 5.0).unwrap();
    assert!(!ctl.is_initialized());
    assert!(ctl.chart().is_none());
    assert!(ctl.primary_series().is_none());
    assert_eq!(ctl.last_known_max_time(), 0.0);
}

#[test]
fn initialize_builds_one_or_two_datasets() {
    let mut plain = controller();
    plain.initialize(false).unwrap();
    let chart = plain.chart().unwrap();
    assert_eq!(chart.dataset_count(), 1);
    assert_eq!(chart.surface, CanvasId("patternChart"));
    assert_eq!(chart.config.animation_ms, 0);
    assert!(!chart.config.legend);
    assert!(chart.config.datasets[PATTERN_DATASET].style.fill);

    let mut live = controller();
    live.initialize(true).unwrap();
    let chart = live.chart().unwrap();
    assert_eq!(chart.dataset_count(), 2);
    let overlay = &chart.config.datasets[LIVE_DATASET];
    assert!(overlay.style.dash.is_some());
    assert!(!overlay.style.fill);
    assert!(overlay.style.order < chart.config.datasets[PATTERN_DATASET].style.order);
    assert!(live.has_overlay());
}

#[test]
fn second_initialize_keeps_the_first_chart() {
    let mut ctl = controller();
    ctl.initialize(false).unwrap();
    ctl.update_pattern(&ramp()).unwrap();
    ctl.initialize(true).unwrap();

    assert!(!ctl.has_overlay());
    let chart = ctl.chart().unwrap();
    assert_eq!(chart.dataset_count(), 1);
    assert_eq!(chart.redraws, vec![RedrawMode::Full]);
}

#[test]
fn failed_construction_leaves_controller_uninitialized() {
    let engine = RecordingEngine { fail_create: true, ..RecordingEngine::default() };
    let mut ctl = ChartController::new(engine, CanvasId("missing"));
    assert!(ctl.initialize(true).is_err());
    assert!(!ctl.is_initialized());
    assert!(!ctl.has_overlay());
    assert_eq!(ctl.update_pattern(&ramp()).unwrap(), None);
}

#[test]
fn update_pattern_replaces_points_and_does_full_redraw() {
    let mut ctl = controller();
    ctl.initialize(true).unwrap();

    let max_time = ctl.update_pattern(&ramp()).unwrap();
    assert_eq!(max_time, Some(5.0));
    assert_eq!(ctl.primary_series().unwrap(), points(&[(0.0, 25.0), (5.0, 30.0), (5.0, 30.0)]).as_slice());
    assert_eq!(ctl.last_known_max_time(), 5.0);

    let shorter = [Step::new(0, 0.0, 40.0), Step::new(1, 10.0, 60.0)];
    assert_eq!(ctl.update_pattern(&shorter).unwrap(), Some(10.0));
    assert_eq!(ctl.primary_series().unwrap(), points(&[(0.0, 25.0), (10.0, 60.0)]).as_slice());

    assert_eq!(ctl.chart().unwrap().redraws, vec![RedrawMode::Full, RedrawMode::Full]);
}

#[test]
fn live_value_is_a_two_point_horizontal_line() {
    let mut ctl = controller();
    ctl.initialize(true).unwrap();
    let max_time = ctl.update_pattern(&[Step::new(0, 45.0, 300.0)]).unwrap().unwrap();

    ctl.update_live_value(212.5, max_time).unwrap();
    assert_eq!(ctl.overlay_series().unwrap(), points(&[(0.0, 212.5), (45.0, 212.5)]).as_slice());
    assert_eq!(ctl.chart().unwrap().redraws, vec![RedrawMode::Full, RedrawMode::Minimal]);
}

#[test]
fn empty_pattern_then_live_value_uses_minimum_width() {
    let mut ctl = controller();
    ctl.initialize(true).unwrap();
    let max_time = ctl.update_pattern(&[]).unwrap().unwrap();
    assert_eq!(ctl.primary_series().unwrap(), points(&[(0.0, 25.0)]).as_slice());
    assert_eq!(max_time, 0.0);

    ctl.update_live_value(22.0, max_time).unwrap();
    assert_eq!(
        ctl.overlay_series().unwrap(),
        points(&[(0.0, 22.0), (MINIMUM_OVERLAY_WIDTH, 22.0)]).as_slice()
    );
}

#[test]
fn live_value_without_overlay_slot_changes_nothing() {
    let mut ctl = controller();
    ctl.initialize(false).unwrap();
    ctl.update_pattern(&ramp()).unwrap();
    let before = ctl.primary_series().unwrap().to_vec();

    ctl.update_live_value(99.0, 5.0).unwrap();

    let chart = ctl.chart().unwrap();
    assert_eq!(chart.dataset_count(), 1);
    assert_eq!(ctl.primary_series().unwrap(), before.as_slice());
    assert_eq!(chart.redraws, vec![RedrawMode::Full]);
    assert!(ctl.overlay_series().is_none());
}

#[test]
fn live_value_width_comes_from_the_caller() {
    let mut ctl = controller();
    ctl.initialize(true).unwrap();
    ctl.update_pattern(&[Step::new(0, 200.0, 500.0)]).unwrap();

    // The caller may pass a stale or different duration; it is used as given.
    ctl.update_live_value(40.0, 30.0).unwrap();
    assert_eq!(ctl.overlay_series().unwrap(), points(&[(0.0, 40.0), (30.0, 40.0)]).as_slice());
}

#[test]
fn config_overrides_start_temperature_and_minimum_width() {
    let config = ControllerConfig { start_temperature: 20.0, minimum_overlay_width: 60.0, ..ControllerConfig::default() };
    let mut ctl = ChartController::with_config(RecordingEngine::default(), CanvasId("c"), config);
    ctl.initialize(true).unwrap();

    ctl.update_pattern(&[Step::new(0, 15.0, 100.0)]).unwrap();
    assert_eq!(ctl.primary_series().unwrap()[0], PlotPoint::new(0.0, 20.0));

    ctl.update_live_value(50.0, 15.0).unwrap();
    assert_eq!(ctl.overlay_series().unwrap()[1].x, 60.0);
}
