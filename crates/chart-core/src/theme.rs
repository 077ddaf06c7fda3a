// File: crates/chart-core/src/theme.rs
// Summary: Chart styling presets injected into the controller at initialization.

use skia_safe as skia;

/// Colors and stroke settings for the pattern chart.
///
/// Everything here is cosmetic; nothing in the update protocol depends on it.
/// The `tooltip_*` colors are only consumed by interactive hosts; the raster
/// engine never draws tooltips.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartStyle {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub tick: skia::Color,
    pub axis_title: skia::Color,

    pub pattern_stroke: skia::Color,
    pub pattern_fill: skia::Color,
    pub pattern_width: f32,
    pub marker_fill: skia::Color,
    pub marker_stroke: skia::Color,
    pub marker_radius: f32,
    pub marker_stroke_width: f32,

    pub live_stroke: skia::Color,
    pub live_width: f32,
    pub live_dash: [f32; 2],

    pub tooltip_background: skia::Color,
    pub tooltip_title: skia::Color,
    pub tooltip_body: skia::Color,
    pub tooltip_border: skia::Color,
}

impl ChartStyle {
    /// Slate/blue palette of the kiln controller web UI.
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 0x1e, 0x1e, 0x1e),
            grid: skia::Color::from_argb(255, 0x37, 0x41, 0x51),
            axis_line: skia::Color::from_argb(255, 0x4b, 0x55, 0x63),
            tick: skia::Color::from_argb(255, 0x9c, 0xa3, 0xaf),
            axis_title: skia::Color::from_argb(255, 0x6b, 0x72, 0x80),
            pattern_stroke: skia::Color::from_argb(255, 0x3b, 0x82, 0xf6),
            pattern_fill: skia::Color::from_argb(26, 0x3b, 0x82, 0xf6),
            pattern_width: 3.0,
            marker_fill: skia::Color::from_argb(255, 0x1e, 0x1e, 0x1e),
            marker_stroke: skia::Color::from_argb(255, 0x60, 0xa5, 0xfa),
            marker_radius: 4.0,
            marker_stroke_width: 2.0,
            live_stroke: skia::Color::from_argb(255, 0xef, 0x44, 0x44),
            live_width: 2.0,
            live_dash: [5.0, 5.0],
            tooltip_background: skia::Color::from_argb(230, 0x11, 0x18, 0x27),
            tooltip_title: skia::Color::WHITE,
            tooltip_body: skia::Color::from_argb(255, 0x9c, 0xa3, 0xaf),
            tooltip_border: skia::Color::from_argb(255, 0x37, 0x41, 0x51),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            grid: skia::Color::from_argb(255, 230, 230, 235),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            tick: skia::Color::from_argb(255, 100, 100, 110),
            axis_title: skia::Color::from_argb(255, 20, 20, 30),
            pattern_stroke: skia::Color::from_argb(255, 32, 120, 200),
            pattern_fill: skia::Color::from_argb(40, 32, 120, 200),
            pattern_width: 3.0,
            marker_fill: skia::Color::from_argb(255, 250, 250, 252),
            marker_stroke: skia::Color::from_argb(255, 32, 120, 200),
            marker_radius: 4.0,
            marker_stroke_width: 2.0,
            live_stroke: skia::Color::from_argb(255, 200, 60, 60),
            live_width: 2.0,
            live_dash: [5.0, 5.0],
            tooltip_background: skia::Color::from_argb(235, 255, 255, 255),
            tooltip_title: skia::Color::from_argb(255, 20, 20, 30),
            tooltip_body: skia::Color::from_argb(255, 60, 60, 70),
            tooltip_border: skia::Color::from_argb(255, 200, 200, 210),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            grid: skia::Color::from_argb(255, 0x22, 0x22, 0x22),
            axis_line: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            tick: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            axis_title: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            pattern_stroke: skia::Color::from_argb(255, 0x00, 0xff, 0xff),
            pattern_fill: skia::Color::from_argb(60, 0x00, 0xff, 0xff),
            pattern_width: 3.0,
            marker_fill: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            marker_stroke: skia::Color::from_argb(255, 0x00, 0xff, 0xff),
            marker_radius: 4.0,
            marker_stroke_width: 2.0,
            live_stroke: skia::Color::from_argb(255, 0xff, 0xff, 0x00),
            live_width: 2.0,
            live_dash: [6.0, 4.0],
            tooltip_background: skia::Color::from_argb(240, 0x00, 0x00, 0x00),
            tooltip_title: skia::Color::WHITE,
            tooltip_body: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            tooltip_border: skia::Color::WHITE,
        }
    }
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self::dark()
    }
}

/// Return a list of built-in style presets.
pub fn presets() -> Vec<ChartStyle> {
    vec![ChartStyle::dark(), ChartStyle::light(), ChartStyle::high_contrast_dark()]
}

/// Find a style by its `name`, falling back to dark.
pub fn find(name: &str) -> ChartStyle {
    presets()
        .into_iter()
        .find(|s| s.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(ChartStyle::dark)
}
