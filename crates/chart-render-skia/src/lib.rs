// File: crates/chart-render-skia/src/lib.rs
// Summary: Skia raster backend; paints chart-core frames onto CPU surfaces and encodes PNG or RGBA8.

pub mod text;

use anyhow::{Context, Result};
use chart_core::{Frame, Label, Line, Marker, Style};
use skia_safe as skia;
use tracing::debug;

pub use text::TextShaper;

pub struct RenderOptions {
    /// Labels depend on installed fonts; snapshot tests turn them off.
    pub draw_labels: bool,
    pub anti_alias: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { draw_labels: true, anti_alias: true }
    }
}

pub struct SkiaRenderer {
    pub opts: RenderOptions,
    shaper: TextShaper,
}

impl Default for SkiaRenderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

impl SkiaRenderer {
    pub fn new(opts: RenderOptions) -> Self {
        Self { opts, shaper: TextShaper::new() }
    }

    /// Paint `frame` onto any canvas, background first.
    pub fn draw(&self, canvas: &skia::Canvas, frame: &Frame) {
        canvas.clear(to_skia_color(frame.background));
        for line in &frame.grid {
            self.draw_line(canvas, line);
        }
        for line in &frame.series_lines {
            self.draw_line(canvas, line);
        }
        for marker in &frame.markers {
            self.draw_marker(canvas, marker);
        }
        for line in &frame.axes {
            self.draw_line(canvas, line);
        }
        if self.opts.draw_labels {
            for label in &frame.labels {
                self.draw_label(canvas, label);
            }
        }
        if let Some(hint) = &frame.hint {
            self.draw_marker(canvas, &hint.marker);
            if self.opts.draw_labels {
                for label in &hint.lines {
                    self.draw_label(canvas, label);
                }
            }
        }
    }

    /// Render to an encoded PNG in memory.
    pub fn render_to_png_bytes(&self, frame: &Frame) -> Result<Vec<u8>> {
        let mut surface = raster_surface(frame)?;
        self.draw(surface.canvas(), frame);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        debug!(bytes = data.len(), "encoded png");
        Ok(data.as_bytes().to_vec())
    }

    /// Render the frame to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(&self, frame: &Frame, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(frame)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    /// Render to unpremultiplied RGBA8 pixels. Returns `(pixels, width, height, stride)`.
    pub fn render_to_rgba8(&self, frame: &Frame) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = raster_surface(frame)?;
        self.draw(surface.canvas(), frame);

        let (w, h) = (surface.width(), surface.height());
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("reading {w}x{h} pixels back from the surface failed");
        }
        Ok((pixels, w, h, stride))
    }

    fn draw_line(&self, canvas: &skia::Canvas, line: &Line) {
        let Some(paint) = self.stroke_paint(&line.style) else { return };
        let s = &line.segment;
        canvas.draw_line((s.x1 as f32, s.y1 as f32), (s.x2 as f32, s.y2 as f32), &paint);
    }

    fn draw_marker(&self, canvas: &skia::Canvas, marker: &Marker) {
        let center = (marker.cx as f32, marker.cy as f32);
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(self.opts.anti_alias);
        fill.set_style(skia::paint::Style::Fill);
        fill.set_color(to_skia_color(marker.fill));
        canvas.draw_circle(center, marker.r as f32, &fill);

        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(self.opts.anti_alias);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(marker.stroke_width as f32);
        stroke.set_color(to_skia_color(marker.stroke));
        canvas.draw_circle(center, marker.r as f32, &stroke);
    }

    fn draw_label(&self, canvas: &skia::Canvas, label: &Label) {
        self.shaper.draw_label(canvas, label);
    }

    fn stroke_paint(&self, style: &Style) -> Option<skia::Paint> {
        let color = style.stroke?;
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(self.opts.anti_alias);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(style.stroke_width.unwrap_or(1.0) as f32);
        let color = match style.opacity {
            Some(o) => color.with_opacity(o),
            None => color,
        };
        paint.set_color(to_skia_color(color));
        Some(paint)
    }
}

pub(crate) fn to_skia_color(c: chart_core::Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn raster_surface(frame: &Frame) -> Result<skia::Surface> {
    let w = frame.width.ceil().max(1.0) as i32;
    let h = frame.height.ceil().max(1.0) as i32;
    skia::surfaces::raster_n32_premul((w, h)).ok_or_else(|| anyhow::anyhow!("failed to create {w}x{h} raster surface"))
}
