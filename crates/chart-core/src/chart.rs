// File: crates/chart-core/src/chart.rs
// Summary: Skia CPU-raster rendering engine: chart object bound to a raster surface, with
//          full/minimal redraws and PNG/RGBA frame access.

use skia_safe as skia;

use crate::axis::Axis;
use crate::engine::{ChartConfig, ChartHandle, ChartKind, RedrawMode, RenderingEngine};
use crate::error::ChartError;
use crate::geometry::PlotArea;
use crate::grid::{format_tick, nice_ticks};
use crate::scale::PlotScales;
use crate::series::Dataset;
use crate::text::TextShaper;
use crate::theme::ChartStyle;
use crate::types::{Insets, PlotPoint, HEIGHT, WIDTH};
use crate::view::ViewState;

const X_TICKS: usize = 10;
const Y_TICKS: usize = 8;
const TICK_FONT: f32 = 12.0;
const TITLE_FONT: f32 = 13.0;

/// Drawing surface description handed to [`SkiaEngine`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceSpec {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    /// Tick labels, axis titles and legend text. Off for pixel-stable output.
    pub draw_labels: bool,
}

impl Default for SurfaceSpec {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT, insets: Insets::default(), draw_labels: true }
    }
}

/// Redraws performed since construction, per mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RedrawStats {
    pub full: u64,
    pub minimal: u64,
}

/// Engine creating [`Chart`]s on CPU raster surfaces.
#[derive(Clone, Copy, Debug, Default)]
pub struct SkiaEngine;

impl RenderingEngine for SkiaEngine {
    type Surface = SurfaceSpec;
    type Chart = Chart;

    fn create_chart(&mut self, surface: &SurfaceSpec, config: ChartConfig) -> Result<Chart, ChartError> {
        Chart::new(surface, config)
    }
}

pub struct Chart {
    kind: ChartKind,
    datasets: Vec<Dataset>,
    x_axis: Axis,
    y_axis: Axis,
    style: ChartStyle,
    legend: bool,
    animation_ms: u32,
    surface: skia::Surface,
    spec: SurfaceSpec,
    text: Option<TextShaper>,
    stats: RedrawStats,
}

impl Chart {
    /// Allocate the raster surface and paint the initial frame.
    pub fn new(spec: &SurfaceSpec, config: ChartConfig) -> Result<Self, ChartError> {
        let surface = skia::surfaces::raster_n32_premul((spec.width, spec.height))
            .ok_or(ChartError::SurfaceAllocation { width: spec.width, height: spec.height })?;
        let ChartConfig { kind, datasets, x_axis, y_axis, style, legend, animation_ms } = config;
        let mut chart = Self {
            kind,
            datasets,
            x_axis,
            y_axis,
            style,
            legend,
            animation_ms,
            surface,
            spec: *spec,
            text: spec.draw_labels.then(TextShaper::new),
            stats: RedrawStats::default(),
        };
        chart.relayout();
        chart.paint();
        Ok(chart)
    }

    pub fn kind(&self) -> ChartKind { self.kind }
    pub fn datasets(&self) -> &[Dataset] { &self.datasets }
    pub fn x_axis(&self) -> &Axis { &self.x_axis }
    pub fn y_axis(&self) -> &Axis { &self.y_axis }
    pub fn style(&self) -> &ChartStyle { &self.style }
    pub fn legend(&self) -> bool { self.legend }
    pub fn animation_ms(&self) -> u32 { self.animation_ms }
    pub fn stats(&self) -> RedrawStats { self.stats }

    /// Encode the current frame as PNG.
    pub fn png_bytes(&mut self) -> Result<Vec<u8>, ChartError> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(ChartError::Encode("PNG"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Copy the current frame out as unpremultiplied RGBA8.
    /// Returns `(pixels, width, height, stride)`.
    pub fn rgba8(&mut self) -> Result<(Vec<u8>, i32, i32, usize), ChartError> {
        let (w, h) = (self.spec.width, self.spec.height);
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !self.surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(ChartError::Encode("RGBA8"));
        }
        Ok((pixels, w, h, stride))
    }

    pub fn write_png(&mut self, path: impl AsRef<std::path::Path>) -> Result<(), ChartError> {
        let bytes = self.png_bytes()?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }

    fn relayout(&mut self) {
        ViewState::fit(&self.datasets, self.y_axis.begin_at_zero).apply(&mut self.x_axis, &mut self.y_axis);
    }

    fn paint(&mut self) {
        let area = PlotArea::new(self.spec.width, self.spec.height, &self.spec.insets);
        let scales = PlotScales::new(&area, &self.x_axis, &self.y_axis);
        let canvas = self.surface.canvas();

        canvas.clear(self.style.background);
        draw_grid(canvas, &area, &scales, &self.x_axis, &self.y_axis, &self.style);
        draw_axes(canvas, &area, &self.style);
        if let Some(text) = &self.text {
            draw_labels(canvas, text, &area, &scales, &self.x_axis, &self.y_axis, &self.style);
        }

        // Higher `order` first so lower orders end up on top.
        let mut stack: Vec<&Dataset> = self.datasets.iter().collect();
        stack.sort_by_key(|d| std::cmp::Reverse(d.style.order));
        canvas.save();
        canvas.clip_rect(area.rect(), None, true);
        for dataset in stack {
            draw_dataset(canvas, &scales, &self.y_axis, dataset);
        }
        canvas.restore();

        if let (true, Some(text)) = (self.legend, &self.text) {
            draw_legend(canvas, text, &area, &self.datasets, &self.style);
        }
    }
}

impl ChartHandle for Chart {
    fn dataset_count(&self) -> usize {
        self.datasets.len()
    }

    fn dataset_points(&self, index: usize) -> Option<&[PlotPoint]> {
        self.datasets.get(index).map(|d| d.points.as_slice())
    }

    fn set_dataset_points(&mut self, index: usize, points: Vec<PlotPoint>) -> Result<(), ChartError> {
        let count = self.datasets.len();
        let dataset = self
            .datasets
            .get_mut(index)
            .ok_or(ChartError::DatasetOutOfRange { index, count })?;
        dataset.points = points;
        Ok(())
    }

    fn redraw(&mut self, mode: RedrawMode) -> Result<(), ChartError> {
        match mode {
            RedrawMode::Full => {
                self.relayout();
                self.stats.full += 1;
            }
            RedrawMode::Minimal => {
                let mut view = ViewState::from_axes(&self.x_axis, &self.y_axis);
                if view.include(&self.datasets) {
                    view.apply(&mut self.x_axis, &mut self.y_axis);
                }
                self.stats.minimal += 1;
            }
        }
        log::trace!(
            "redraw {:?}: x=[{}, {}] y=[{}, {}]",
            mode, self.x_axis.min, self.x_axis.max, self.y_axis.min, self.y_axis.max
        );
        self.paint();
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

fn draw_grid(canvas: &skia::Canvas, area: &PlotArea, scales: &PlotScales, x: &Axis, y: &Axis, style: &ChartStyle) {
    let paint = stroke_paint(style.grid, 1.0);
    for v in nice_ticks(x.min, x.max, X_TICKS) {
        let px = scales.x.to_px(v);
        canvas.draw_line((px, area.top), (px, area.bottom), &paint);
    }
    for v in nice_ticks(y.min, y.max, Y_TICKS) {
        let py = scales.y.to_px(v);
        canvas.draw_line((area.left, py), (area.right, py), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, area: &PlotArea, style: &ChartStyle) {
    let paint = stroke_paint(style.axis_line, 1.5);
    canvas.draw_line((area.left, area.bottom), (area.right, area.bottom), &paint);
    canvas.draw_line((area.left, area.top), (area.left, area.bottom), &paint);
}

fn draw_labels(
    canvas: &skia::Canvas,
    text: &TextShaper,
    area: &PlotArea,
    scales: &PlotScales,
    x: &Axis,
    y: &Axis,
    style: &ChartStyle,
) {
    for v in nice_ticks(x.min, x.max, X_TICKS) {
        let px = scales.x.to_px(v);
        text.draw_centered(canvas, &format_tick(v), px, area.bottom + 18.0, TICK_FONT, style.tick, true);
    }
    for v in nice_ticks(y.min, y.max, Y_TICKS) {
        let py = scales.y.to_px(v);
        text.draw_right(canvas, &format_tick(v), area.left - 8.0, py + TICK_FONT * 0.4, TICK_FONT, style.tick, true);
    }

    let cx = area.left + area.width() * 0.5;
    text.draw_centered(canvas, &x.title, cx, area.bottom + 44.0, TITLE_FONT, style.axis_title, false);

    // Y title reads bottom-to-top along the left margin.
    let cy = area.top + area.height() * 0.5;
    canvas.save();
    canvas.translate((area.left - 56.0, cy));
    canvas.rotate(-90.0, None);
    text.draw_centered(canvas, &y.title, 0.0, 0.0, TITLE_FONT, style.axis_title, false);
    canvas.restore();
}

fn draw_dataset(canvas: &skia::Canvas, scales: &PlotScales, y_axis: &Axis, dataset: &Dataset) {
    let style = &dataset.style;
    let Some(first) = dataset.points.first() else { return };
    let last = dataset.points[dataset.points.len() - 1];

    let mut line = skia::PathBuilder::new();
    line.move_to(scales.to_px(first.x, first.y));
    for p in dataset.points.iter().skip(1) {
        line.line_to(scales.to_px(p.x, p.y));
    }

    if style.fill && dataset.points.len() > 1 {
        let base = 0f64.clamp(y_axis.min, y_axis.max);
        let mut area = line.clone();
        area.line_to(scales.to_px(last.x, base));
        area.line_to(scales.to_px(first.x, base));
        area.close();
        canvas.draw_path(&area.snapshot(), &fill_paint(style.background_color));
    }

    if dataset.points.len() > 1 {
        let mut stroke = stroke_paint(style.border_color, style.border_width);
        if let Some([on, off]) = style.dash {
            stroke.set_path_effect(skia::PathEffect::dash(&[on, off], 0.0));
        }
        canvas.draw_path(&line.snapshot(), &stroke);
    }

    if style.point_radius > 0.0 {
        let fill = fill_paint(style.point_background);
        let ring = stroke_paint(style.point_border_color, style.point_border_width);
        for p in &dataset.points {
            let center = scales.to_px(p.x, p.y);
            canvas.draw_circle(center, style.point_radius, &fill);
            if style.point_border_width > 0.0 {
                canvas.draw_circle(center, style.point_radius, &ring);
            }
        }
    }
}

fn draw_legend(canvas: &skia::Canvas, text: &TextShaper, area: &PlotArea, datasets: &[Dataset], style: &ChartStyle) {
    let mut y = area.top + 16.0;
    for dataset in datasets {
        let x = area.right - 160.0;
        let swatch = stroke_paint(dataset.style.border_color, dataset.style.border_width.max(2.0));
        canvas.draw_line((x, y - 4.0), (x + 20.0, y - 4.0), &swatch);
        text.draw_left(canvas, &dataset.label, x + 28.0, y, TICK_FONT, style.tick, false);
        y += 18.0;
    }
}
