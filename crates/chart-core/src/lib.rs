// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the pattern series builder, the chart
//          controller and the Skia-backed rendering engine.

pub mod pattern;
pub mod controller;
pub mod engine;
pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod view;
pub mod theme;
pub mod text;
pub mod error;

pub use pattern::{build_series, contributes, is_closing_marker, Step, DEFAULT_START_TEMPERATURE};
pub use controller::{ChartController, ControllerConfig, MINIMUM_OVERLAY_WIDTH};
pub use engine::{ChartConfig, ChartHandle, ChartKind, RedrawMode, RenderingEngine};
pub use chart::{Chart, RedrawStats, SkiaEngine, SurfaceSpec};
pub use series::{Dataset, DatasetStyle};
pub use axis::Axis;
pub use types::{Insets, PlotPoint};
pub use view::ViewState;
pub use theme::ChartStyle;
pub use text::TextShaper;
pub use error::ChartError;
