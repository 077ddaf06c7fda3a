// File: crates/chart-core/src/text.rs
// Summary: Tick/title text via Skia textlayout with system font fallback.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color, mono_numeric: bool) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        if mono_numeric {
            ts.set_font_families(&["Roboto Mono", "Consolas", "Menlo", "DejaVu Sans Mono", "monospace"]);
        } else {
            ts.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        }
        ts
    }

    fn layout(&self, text: &str, size: f32, color: skia::Color, mono_numeric: bool) -> Paragraph {
        let mut builder = ParagraphBuilder::new(&ParagraphStyle::new(), &self.fonts);
        builder.push_style(&Self::make_style(size, color, mono_numeric));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32, mono_numeric: bool) -> f32 {
        self.layout(text, size, skia::Color::TRANSPARENT, mono_numeric).longest_line()
    }

    /// Draw with the baseline at `y`, left edge at `x`.
    pub fn draw_left(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color, mono_numeric: bool) {
        let p = self.layout(text, size, color, mono_numeric);
        // Paragraph paints from its top-left corner.
        p.paint(canvas, (x, y - size * 0.8));
    }

    pub fn draw_right(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color, mono_numeric: bool) {
        let w = self.measure_width(text, size, mono_numeric);
        self.draw_left(canvas, text, x - w, y, size, color, mono_numeric);
    }

    pub fn draw_centered(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color, mono_numeric: bool) {
        let w = self.measure_width(text, size, mono_numeric);
        self.draw_left(canvas, text, x - w * 0.5, y, size, color, mono_numeric);
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}
