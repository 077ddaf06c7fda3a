// File: crates/chart-core/src/geometry.rs
// Summary: Plot-area rectangle derived from surface size and insets.

use skia_safe as skia;

use crate::types::Insets;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl PlotArea {
    /// Inner rectangle of a `width`×`height` surface. Collapses to a
    /// 1-pixel area rather than inverting when insets exceed the size.
    pub fn new(width: i32, height: i32, insets: &Insets) -> Self {
        let left = insets.left as f32;
        let top = insets.top as f32;
        let right = (width as f32 - insets.right as f32).max(left + 1.0);
        let bottom = (height as f32 - insets.bottom as f32).max(top + 1.0);
        Self { left, top, right, bottom }
    }

    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }

    pub fn rect(&self) -> skia::Rect {
        skia::Rect::from_ltrb(self.left, self.top, self.right, self.bottom)
    }
}
