// File: crates/chart-core/src/view.rs
// Summary: Visible data ranges: full autoscale on layout, grow-only ranges on minimal redraws.

use crate::axis::Axis;
use crate::grid::nice_bounds;
use crate::series::Dataset;

/// Intervals aimed for when widening ranges to tick boundaries.
const TICK_TARGET: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    /// Fit all datasets. X always starts at the pattern origin.
    pub fn fit(datasets: &[Dataset], y_begin_at_zero: bool) -> Self {
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for (_, x1, y0, y1) in datasets.iter().filter_map(Dataset::bounds) {
            x_max = x_max.max(x1);
            y_min = y_min.min(y0);
            y_max = y_max.max(y1);
        }
        if !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
            return Self { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 };
        }

        let x_min = 0.0;
        if x_max - x_min < 1e-9 { x_max = x_min + 1.0; }
        if y_begin_at_zero {
            y_min = y_min.min(0.0);
            y_max = y_max.max(0.0);
        }
        if y_max - y_min < 1e-9 { y_max = y_min + 1.0; }

        let (y_min, y_max) = nice_bounds(y_min, y_max, TICK_TARGET);
        Self { x_min, x_max, y_min, y_max }
    }

    pub fn from_axes(x: &Axis, y: &Axis) -> Self {
        Self { x_min: x.min, x_max: x.max, y_min: y.min, y_max: y.max }
    }

    /// Grow the ranges so every point stays visible. Never shrinks; x keeps
    /// its origin and only extends to the right. Returns whether anything changed.
    pub fn include(&mut self, datasets: &[Dataset]) -> bool {
        let mut x_hi = self.x_max;
        let mut lo = self.y_min;
        let mut hi = self.y_max;
        for (_, x1, y0, y1) in datasets.iter().filter_map(Dataset::bounds) {
            x_hi = x_hi.max(x1);
            lo = lo.min(y0);
            hi = hi.max(y1);
        }
        let grow_x = x_hi > self.x_max;
        let grow_y = lo < self.y_min || hi > self.y_max;
        if grow_x {
            self.x_max = x_hi;
        }
        if grow_y {
            let (lo, hi) = nice_bounds(lo, hi, TICK_TARGET);
            self.y_min = lo;
            self.y_max = hi;
        }
        grow_x || grow_y
    }

    pub fn apply(&self, x_axis: &mut Axis, y_axis: &mut Axis) {
        x_axis.min = self.x_min;
        x_axis.max = self.x_max;
        y_axis.min = self.y_min;
        y_axis.max = self.y_max;
    }
}
