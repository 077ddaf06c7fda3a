// File: crates/chart-core/src/scale.rs
// Summary: Linear data-to-pixel transforms for the plot area.

use crate::axis::Axis;
use crate::geometry::PlotArea;

/// Linear mapping of a data interval onto a pixel interval.
/// `px_start` corresponds to `min`; for Y that is the bottom edge.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub min: f64,
    pub max: f64,
    pub px_start: f32,
    pub px_end: f32,
}

impl LinearScale {
    pub fn new(min: f64, max: f64, px_start: f32, px_end: f32) -> Self {
        let max = if (max - min).abs() < 1e-12 { min + 1.0 } else { max };
        Self { min, max, px_start, px_end }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let t = ((v - self.min) / (self.max - self.min)) as f32;
        self.px_start + t * (self.px_end - self.px_start)
    }
}

/// Both axes of a plot area.
#[derive(Clone, Copy, Debug)]
pub struct PlotScales {
    pub x: LinearScale,
    pub y: LinearScale,
}

impl PlotScales {
    pub fn new(area: &PlotArea, x_axis: &Axis, y_axis: &Axis) -> Self {
        Self {
            x: LinearScale::new(x_axis.min, x_axis.max, area.left, area.right),
            y: LinearScale::new(y_axis.min, y_axis.max, area.bottom, area.top),
        }
    }

    #[inline]
    pub fn to_px(&self, x: f64, y: f64) -> (f32, f32) {
        (self.x.to_px(x), self.y.to_px(y))
    }
}
