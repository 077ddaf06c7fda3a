// File: crates/chart-core/src/series.rs
// Summary: Dataset model: a labelled point list plus per-dataset line/fill/marker styling.

use skia_safe as skia;

use crate::types::PlotPoint;

/// Per-dataset style attributes handed to the engine at construction.
#[derive(Clone, Debug, PartialEq)]
pub struct DatasetStyle {
    pub border_color: skia::Color,
    /// Area fill under the line; only used when `fill` is set.
    pub background_color: skia::Color,
    pub border_width: f32,
    /// On/off lengths in pixels; `None` draws a solid line.
    pub dash: Option<[f32; 2]>,
    pub fill: bool,
    /// Marker radius in pixels; `0.0` hides markers.
    pub point_radius: f32,
    pub point_background: skia::Color,
    pub point_border_color: skia::Color,
    pub point_border_width: f32,
    /// Stacking order; lower values are painted last (on top).
    pub order: i32,
}

impl Default for DatasetStyle {
    fn default() -> Self {
        Self {
            border_color: skia::Color::from_argb(255, 64, 160, 255),
            background_color: skia::Color::TRANSPARENT,
            border_width: 2.0,
            dash: None,
            fill: false,
            point_radius: 0.0,
            point_background: skia::Color::TRANSPARENT,
            point_border_color: skia::Color::TRANSPARENT,
            point_border_width: 0.0,
            order: 0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Dataset {
    pub label: String,
    pub points: Vec<PlotPoint>,
    pub style: DatasetStyle,
}

impl Dataset {
    /// An empty dataset; points arrive through later updates.
    pub fn new(label: impl Into<String>, style: DatasetStyle) -> Self {
        Self { label: label.into(), points: Vec::new(), style }
    }

    /// `(min_x, max_x, min_y, max_y)` over all points, `None` when empty.
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        let first = self.points.first()?;
        let init = (first.x, first.x, first.y, first.y);
        Some(self.points.iter().fold(init, |(x0, x1, y0, y1), p| {
            (x0.min(p.x), x1.max(p.x), y0.min(p.y), y1.max(p.y))
        }))
    }
}
