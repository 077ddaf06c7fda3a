// File: crates/chart-core/tests/pattern_series.rs
// Purpose: Step pattern → polyline conversion, including the skip and end-marker rules.

mod support;

use profile_chart_core::{build_series, contributes, is_closing_marker, PlotPoint, Step, DEFAULT_START_TEMPERATURE};
use support::points;

#[test]
fn empty_pattern_is_origin_only() {
    let (series, max_time) = build_series(&[], DEFAULT_START_TEMPERATURE);
    assert_eq!(series, points(&[(0.0, 25.0)]));
    assert_eq!(max_time, 0.0);
}

#[test]
fn trailing_zero_step_closes_the_pattern() {
    let steps = [Step::new(0, 5.0, 30.0), Step::new(1, 0.0, 30.0)];
    let (series, max_time) = build_series(&steps, 25.0);
    assert_eq!(series, points(&[(0.0, 25.0), (5.0, 30.0), (5.0, 30.0)]));
    assert_eq!(max_time, 5.0);
}

#[test]
fn leading_zero_step_is_skipped() {
    let steps = [Step::new(0, 0.0, 40.0), Step::new(1, 10.0, 60.0)];
    let (series, max_time) = build_series(&steps, 25.0);
    assert_eq!(series, points(&[(0.0, 25.0), (10.0, 60.0)]));
    assert_eq!(max_time, 10.0);
}

#[test]
fn zero_steps_in_the_middle_contribute_nothing() {
    let steps = [
        Step::new(0, 30.0, 100.0),
        Step::new(1, 0.0, 500.0),
        Step::new(2, 0.0, 600.0),
        Step::new(3, 60.0, 100.0),
    ];
    let (series, max_time) = build_series(&steps, 20.0);
    assert_eq!(series, points(&[(0.0, 20.0), (30.0, 100.0), (90.0, 100.0)]));
    assert_eq!(max_time, 90.0);
}

#[test]
fn first_point_uses_start_temperature_even_when_first_step_is_long() {
    let steps = [Step::new(0, 120.0, 900.0)];
    let (series, _) = build_series(&steps, 18.5);
    assert_eq!(series[0].x, 0.0);
    assert_eq!(series[0].y, 18.5);
    assert_eq!(series[1].x, 120.0);
}

#[test]
fn full_eight_step_kiln_program() {
    // Ramp, soak, ramp, soak, cool, then unused slots and the end marker.
    let steps = [
        Step::new(0, 60.0, 600.0),
        Step::new(1, 30.0, 600.0),
        Step::new(2, 90.0, 1200.0),
        Step::new(3, 15.0, 1200.0),
        Step::new(4, 120.0, 200.0),
        Step::new(5, 0.0, 0.0),
        Step::new(6, 0.0, 0.0),
        Step::new(7, 0.0, 0.0),
    ];
    let (series, max_time) = build_series(&steps, 25.0);
    assert_eq!(series.len(), 7);
    assert_eq!(max_time, 315.0);
    assert_eq!(*series.last().unwrap(), PlotPoint::new(315.0, 0.0));
}

#[test]
fn closing_marker_predicate_depends_on_position() {
    let zero = Step::new(3, 0.0, 50.0);
    let timed = Step::new(3, 4.0, 50.0);

    assert!(is_closing_marker(&zero, 3, 4));
    assert!(!is_closing_marker(&zero, 2, 4));
    assert!(!is_closing_marker(&timed, 3, 4));

    assert!(contributes(&zero, 3, 4));
    assert!(!contributes(&zero, 0, 4));
    assert!(contributes(&timed, 0, 4));
}

#[test]
fn single_zero_step_is_its_own_closing_marker() {
    let (series, max_time) = build_series(&[Step::new(0, 0.0, 80.0)], 25.0);
    assert_eq!(series, points(&[(0.0, 25.0), (0.0, 80.0)]));
    assert_eq!(max_time, 0.0);
}

#[test]
fn steps_deserialize_from_controller_json() {
    let json = r#"[{"step":0,"temp":300.0,"time":45},{"temp":300,"time":0}]"#;
    let steps: Vec<Step> = serde_json::from_str(json).expect("parse steps");
    assert_eq!(steps[0], Step::new(0, 45.0, 300.0));
    assert_eq!(steps[1].step_index, 0);
    assert_eq!(steps[1].time, 0.0);

    let (series, max_time) = build_series(&steps, 25.0);
    assert_eq!(series.len(), 3);
    assert_eq!(max_time, 45.0);
}
