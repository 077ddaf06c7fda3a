// File: crates/chart-core/src/controller.rs
// Summary: Stateful pattern chart: owns one engine chart and keeps its pattern and
//          live-value datasets in sync through wholesale point replacement.

use crate::axis::Axis;
use crate::engine::{ChartConfig, ChartHandle, ChartKind, RedrawMode, RenderingEngine};
use crate::error::ChartError;
use crate::pattern::{build_series, Step, DEFAULT_START_TEMPERATURE};
use crate::series::{Dataset, DatasetStyle};
use crate::theme::ChartStyle;
use crate::types::PlotPoint;

/// Narrowest x extent of the live-value line, in minutes, so it stays
/// visible for empty or very short patterns.
pub const MINIMUM_OVERLAY_WIDTH: f64 = 10.0;

/// Dataset slot of the pattern line.
pub const PATTERN_DATASET: usize = 0;
/// Dataset slot of the live-value line, present only with the overlay enabled.
pub const LIVE_DATASET: usize = 1;

#[derive(Clone, Debug, PartialEq)]
pub struct ControllerConfig {
    pub start_temperature: f64,
    pub minimum_overlay_width: f64,
    pub style: ChartStyle,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            start_temperature: DEFAULT_START_TEMPERATURE,
            minimum_overlay_width: MINIMUM_OVERLAY_WIDTH,
            style: ChartStyle::default(),
        }
    }
}

impl ControllerConfig {
    /// Engine construction config for the pattern chart.
    pub fn chart_config(&self, include_overlay: bool) -> ChartConfig {
        let style = &self.style;
        let mut datasets = vec![Dataset::new(
            "Temperature Pattern",
            DatasetStyle {
                border_color: style.pattern_stroke,
                background_color: style.pattern_fill,
                border_width: style.pattern_width,
                dash: None,
                fill: true,
                point_radius: style.marker_radius,
                point_background: style.marker_fill,
                point_border_color: style.marker_stroke,
                point_border_width: style.marker_stroke_width,
                order: 2,
            },
        )];
        if include_overlay {
            datasets.push(Dataset::new(
                "Current Temp",
                DatasetStyle {
                    border_color: style.live_stroke,
                    border_width: style.live_width,
                    dash: Some(style.live_dash),
                    fill: false,
                    point_radius: 0.0,
                    order: 1,
                    ..DatasetStyle::default()
                },
            ));
        }

        ChartConfig {
            kind: ChartKind::Line,
            datasets,
            x_axis: Axis::time_minutes(),
            y_axis: Axis::temperature_celsius(),
            style: *style,
            legend: false,
            animation_ms: 0,
        }
    }
}

/// Owns one chart on a bound surface.
///
/// Lifecycle is `Uninitialized → Initialized`, one way. Updates issued
/// before [`initialize`](Self::initialize) are ignored.
pub struct ChartController<E: RenderingEngine> {
    engine: E,
    surface: E::Surface,
    config: ControllerConfig,
    chart: Option<E::Chart>,
    has_overlay: bool,
    last_known_max_time: f64,
}

impl<E: RenderingEngine> ChartController<E> {
    pub fn new(engine: E, surface: E::Surface) -> Self {
        Self::with_config(engine, surface, ControllerConfig::default())
    }

    pub fn with_config(engine: E, surface: E::Surface, config: ControllerConfig) -> Self {
        Self { engine, surface, config, chart: None, has_overlay: false, last_known_max_time: 0.0 }
    }

    /// Create the chart with the pattern dataset and, if `include_overlay`,
    /// the dashed live-value dataset. The overlay choice is permanent.
    pub fn initialize(&mut self, include_overlay: bool) -> Result<(), ChartError> {
        if self.chart.is_some() {
            log::debug!("initialize ignored: chart already initialized");
            return Ok(());
        }
        let chart = self
            .engine
            .create_chart(&self.surface, self.config.chart_config(include_overlay))?;
        self.chart = Some(chart);
        self.has_overlay = include_overlay;
        self.last_known_max_time = 0.0;
        Ok(())
    }

    /// Replace the pattern line and redraw with a full layout pass.
    ///
    /// Returns the pattern's total duration, or `None` before initialization.
    pub fn update_pattern(&mut self, steps: &[Step]) -> Result<Option<f64>, ChartError> {
        let Some(chart) = self.chart.as_mut() else {
            log::debug!("update_pattern ignored: chart not initialized");
            return Ok(None);
        };
        let (points, max_time) = build_series(steps, self.config.start_temperature);
        chart.set_dataset_points(PATTERN_DATASET, points)?;
        chart.redraw(RedrawMode::Full)?;
        self.last_known_max_time = max_time;
        Ok(Some(max_time))
    }

    /// Move the live-value line to `value`, spanning at least
    /// `minimum_overlay_width`. Ignored without an overlay slot.
    pub fn update_live_value(&mut self, value: f64, max_time: f64) -> Result<(), ChartError> {
        let Some(chart) = self.chart.as_mut() else {
            log::debug!("update_live_value ignored: chart not initialized");
            return Ok(());
        };
        if !self.has_overlay {
            log::debug!("update_live_value ignored: chart has no live-value dataset");
            return Ok(());
        }
        let width = max_time.max(self.config.minimum_overlay_width);
        chart.set_dataset_points(LIVE_DATASET, vec![PlotPoint::new(0.0, value), PlotPoint::new(width, value)])?;
        chart.redraw(RedrawMode::Minimal)
    }

    pub fn is_initialized(&self) -> bool {
        self.chart.is_some()
    }

    pub fn has_overlay(&self) -> bool {
        self.has_overlay
    }

    /// Duration returned by the last successful [`update_pattern`](Self::update_pattern).
    pub fn last_known_max_time(&self) -> f64 {
        self.last_known_max_time
    }

    pub fn primary_series(&self) -> Option<&[PlotPoint]> {
        self.chart.as_ref()?.dataset_points(PATTERN_DATASET)
    }

    pub fn overlay_series(&self) -> Option<&[PlotPoint]> {
        if !self.has_overlay {
            return None;
        }
        self.chart.as_ref()?.dataset_points(LIVE_DATASET)
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn chart(&self) -> Option<&E::Chart> {
        self.chart.as_ref()
    }

    pub fn chart_mut(&mut self) -> Option<&mut E::Chart> {
        self.chart.as_mut()
    }
}
