// File: crates/chart-core/src/engine.rs
// Summary: Rendering-engine seam: chart construction config, dataset access and redraw modes.

use crate::axis::Axis;
use crate::error::ChartError;
use crate::series::Dataset;
use crate::theme::ChartStyle;
use crate::types::PlotPoint;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChartKind {
    #[default]
    Line,
}

/// How much work a redraw does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RedrawMode {
    /// Recompute layout (axis ranges) from the data, then repaint.
    #[default]
    Full,
    /// Repaint against the current layout, skipping transitions.
    Minimal,
}

/// Everything an engine needs to construct a chart.
#[derive(Clone, Debug)]
pub struct ChartConfig {
    pub kind: ChartKind,
    pub datasets: Vec<Dataset>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub style: ChartStyle,
    pub legend: bool,
    /// Transition length for redraws; `0` disables animation.
    pub animation_ms: u32,
}

/// A live chart object owned by its creator.
pub trait ChartHandle {
    fn dataset_count(&self) -> usize;

    fn dataset_points(&self, index: usize) -> Option<&[PlotPoint]>;

    /// Replace a dataset's point list wholesale.
    fn set_dataset_points(&mut self, index: usize, points: Vec<PlotPoint>) -> Result<(), ChartError>;

    fn redraw(&mut self, mode: RedrawMode) -> Result<(), ChartError>;
}

/// Creates charts on a drawing surface.
pub trait RenderingEngine {
    type Surface;
    type Chart: ChartHandle;

    fn create_chart(&mut self, surface: &Self::Surface, config: ChartConfig) -> Result<Self::Chart, ChartError>;
}
