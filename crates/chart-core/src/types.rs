// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (plot points, surface sizes, paddings).

/// Default surface width in pixels.
pub const WIDTH: i32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 640;

/// One vertex of a plotted line.
/// `x` is elapsed time in minutes from pattern start, `y` is temperature.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

impl PlotPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for PlotPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Screen margins around the plot area, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    // Left/bottom leave room for tick labels plus a rotated/centered axis title.
    fn default() -> Self {
        Self::new(80, 24, 24, 64)
    }
}
