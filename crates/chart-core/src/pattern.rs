// File: crates/chart-core/src/pattern.rs
// Summary: Converts a ramp/hold step pattern into a cumulative time/temperature polyline.
// Notes:
// - A step's `temp` is plotted at the end of its `time` window, so the
//   renderer draws a straight ramp from the previous point. Whether the
//   controller actually ramps or jumps is not confirmed; keep this literal.

use serde::Deserialize;

use crate::types::PlotPoint;

/// Start temperature of every pattern, in °C (room temperature).
pub const DEFAULT_START_TEMPERATURE: f64 = 25.0;

/// One segment of a temperature pattern.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Step {
    /// Duration in minutes; non-negative.
    pub time: f64,
    /// Target temperature at the end of the segment.
    pub temp: f64,
    /// Ordinal position of the step within its pattern.
    #[serde(rename = "step", default)]
    pub step_index: usize,
}

impl Step {
    pub const fn new(step_index: usize, time: f64, temp: f64) -> Self {
        Self { time, temp, step_index }
    }
}

/// True for a zero-duration step in the final position: the pattern's end
/// marker, which is plotted instead of skipped.
pub fn is_closing_marker(step: &Step, index: usize, len: usize) -> bool {
    step.time == 0.0 && index + 1 == len
}

/// Whether the step at `index` adds a point to the series.
/// Zero-duration steps elsewhere are folded into the next contributing step.
pub fn contributes(step: &Step, index: usize, len: usize) -> bool {
    step.time > 0.0 || is_closing_marker(step, index, len)
}

/// Build the pattern polyline starting at `(0, start_temperature)`.
///
/// Returns the points and the cumulative time of the last contributing step.
/// An empty pattern yields the single origin point and a max time of `0`.
pub fn build_series(steps: &[Step], start_temperature: f64) -> (Vec<PlotPoint>, f64) {
    let len = steps.len();
    let mut points = Vec::with_capacity(len + 1);
    let mut elapsed = 0.0;
    points.push(PlotPoint::new(elapsed, start_temperature));

    for (index, step) in steps.iter().enumerate() {
        if !contributes(step, index, len) {
            continue;
        }
        elapsed += step.time;
        points.push(PlotPoint::new(elapsed, step.temp));
    }

    (points, elapsed)
}
