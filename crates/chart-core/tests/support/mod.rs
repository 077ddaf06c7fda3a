// File: crates/chart-core/tests/support/mod.rs
// Purpose: Recording rendering engine for exercising the controller without Skia.

#![allow(dead_code)]

use profile_chart_core::{ChartConfig, ChartError, ChartHandle, PlotPoint, RedrawMode, RenderingEngine};

/// Surface identifier passed through to the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CanvasId(pub &'static str);

#[derive(Default)]
pub struct RecordingEngine {
    pub created: usize,
    pub fail_create: bool,
}

impl RenderingEngine for RecordingEngine {
    type Surface = CanvasId;
    type Chart = RecordingChart;

    fn create_chart(&mut self, surface: &CanvasId, config: ChartConfig) -> Result<RecordingChart, ChartError> {
        if self.fail_create {
            return Err(ChartError::SurfaceAllocation { width: 0, height: 0 });
        }
        self.created += 1;
        Ok(RecordingChart { surface: *surface, config, redraws: Vec::new() })
    }
}

pub struct RecordingChart {
    pub surface: CanvasId,
    pub config: ChartConfig,
    pub redraws: Vec<RedrawMode>,
}

impl ChartHandle for RecordingChart {
    fn dataset_count(&self) -> usize {
        self.config.datasets.len()
    }

    fn dataset_points(&self, index: usize) -> Option<&[PlotPoint]> {
        self.config.datasets.get(index).map(|d| d.points.as_slice())
    }

    fn set_dataset_points(&mut self, index: usize, points: Vec<PlotPoint>) -> Result<(), ChartError> {
        let count = self.config.datasets.len();
        let dataset = self
            .config
            .datasets
            .get_mut(index)
            .ok_or(ChartError::DatasetOutOfRange { index, count })?;
        dataset.points = points;
        Ok(())
    }

    fn redraw(&mut self, mode: RedrawMode) -> Result<(), ChartError> {
        self.redraws.push(mode);
        Ok(())
    }
}

pub fn points(raw: &[(f64, f64)]) -> Vec<PlotPoint> {
    raw.iter().copied().map(PlotPoint::from).collect()
}
