// File: crates/chart-render-skia/src/text.rs
// Summary: Text shaper using Skia textlayout; places frame labels by anchor and baseline.

use chart_core::{Baseline, Label, TextAnchor};
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};
use skia_safe as skia;

use crate::to_skia_color;

const DEFAULT_FONT_SIZE: f32 = 12.0;

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32) -> f32 {
        let p = self.layout(text, size, skia::Color::TRANSPARENT);
        // width of the longest line
        p.longest_line()
    }

    /// Draw `label` so that its anchor point sits at `(label.x, label.y)`.
    pub fn draw_label(&self, canvas: &skia::Canvas, label: &Label) {
        let size = label.style.font_size.map(|s| s as f32).unwrap_or(DEFAULT_FONT_SIZE);
        let mut color = to_skia_color(label.style.color.unwrap_or(chart_core::Color::WHITE));
        if let Some(o) = label.style.opacity {
            color = color.with_a((color.a() as f64 * o.clamp(0.0, 1.0)).round() as u8);
        }
        let p = self.layout(&label.text, size, color);
        let width = p.longest_line();
        let height = p.height();

        let x = match label.anchor {
            TextAnchor::Start => label.x as f32,
            TextAnchor::Middle => label.x as f32 - width / 2.0,
            TextAnchor::End => label.x as f32 - width,
        };
        // paragraphs paint from their top-left corner
        let top = match label.baseline {
            Baseline::Hanging | Baseline::TextTop => label.y as f32,
            Baseline::Middle | Baseline::Central => label.y as f32 - height / 2.0,
            Baseline::Auto => label.y as f32 - p.alphabetic_baseline(),
            Baseline::TextBottom => label.y as f32 - height,
        };
        p.paint(canvas, (x, top));
    }
}
