// File: crates/chart-core/src/svg.rs
// Summary: SVG serialization of a built frame through a streaming output sink.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::chart::{Frame, Hint, Label, Line, Marker};
use crate::error::ChartResult;
use crate::geometry::round2;
use crate::theme::Style;

pub trait OutputStream {
    fn write(&mut self, data: &str) -> ChartResult<()>;
}

impl OutputStream for String {
    fn write(&mut self, data: &str) -> ChartResult<()> {
        self.push_str(data);
        Ok(())
    }
}

pub struct OutputFile {
    file: BufWriter<File>,
}

impl OutputFile {
    pub fn create(path: &Path) -> ChartResult<OutputFile> {
        let file = BufWriter::new(File::create(path)?);
        Ok(Self { file })
    }

    /// Flush buffered output. Dropping without this loses write errors.
    pub fn finish(mut self) -> ChartResult<()> {
        self.file.flush()?;
        Ok(())
    }
}

impl OutputStream for OutputFile {
    fn write(&mut self, data: &str) -> ChartResult<()> {
        self.file.write_all(data.as_bytes())?;
        Ok(())
    }
}

pub trait Render {
    fn render<O>(&self, output: &mut O) -> ChartResult<()>
    where
        O: OutputStream;
}

impl Render for Frame {
    fn render<O>(&self, output: &mut O) -> ChartResult<()>
    where
        O: OutputStream,
    {
        let (w, h) = (num(self.width), num(self.height));
        output.write(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
        ))?;
        output.write(&format!(r#"<rect x="0" y="0" width="{w}" height="{h}" fill="{}"/>"#, self.background))?;

        output.write(r#"<g class="grid">"#)?;
        for line in &self.grid {
            line.render(output)?;
        }
        output.write("</g>")?;

        output.write(r#"<g class="series">"#)?;
        for line in &self.series_lines {
            line.render(output)?;
        }
        for marker in &self.markers {
            marker.render(output)?;
        }
        output.write("</g>")?;

        output.write(r#"<g class="axes">"#)?;
        for line in &self.axes {
            line.render(output)?;
        }
        for label in &self.labels {
            label.render(output)?;
        }
        output.write("</g>")?;

        if let Some(hint) = &self.hint {
            hint.render(output)?;
        }
        output.write("</svg>")
    }
}

impl Render for Line {
    fn render<O>(&self, output: &mut O) -> ChartResult<()>
    where
        O: OutputStream,
    {
        let s = &self.segment;
        output.write(&format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}"{}/>"#,
            num(s.x1),
            num(s.y1),
            num(s.x2),
            num(s.y2),
            style_attrs(&self.style)
        ))
    }
}

impl Render for Marker {
    fn render<O>(&self, output: &mut O) -> ChartResult<()>
    where
        O: OutputStream,
    {
        let data = match self.handle {
            Some(h) => format!(r#" data-series="{}" data-column="{}""#, h.series, h.column),
            None => String::new(),
        };
        output.write(&format!(
            r#"<circle cx="{}" cy="{}" r="{}" stroke="{}" stroke-width="{}" fill="{}"{data}/>"#,
            num(self.cx),
            num(self.cy),
            num(self.r),
            self.stroke,
            num(self.stroke_width),
            self.fill
        ))
    }
}

impl Render for Label {
    fn render<O>(&self, output: &mut O) -> ChartResult<()>
    where
        O: OutputStream,
    {
        let mut attrs = String::new();
        if let Some(c) = self.style.color {
            attrs.push_str(&format!(r#" fill="{c}""#));
        }
        if let Some(size) = self.style.font_size {
            attrs.push_str(&format!(r#" font-size="{}""#, num(size)));
        }
        if let Some(o) = self.style.opacity {
            attrs.push_str(&format!(r#" opacity="{}""#, num(o)));
        }
        output.write(&format!(
            r#"<text x="{}" y="{}" text-anchor="{}" dominant-baseline="{}"{attrs}>{}</text>"#,
            num(self.x),
            num(self.y),
            self.anchor.as_str(),
            self.baseline.as_str(),
            escape(&self.text)
        ))
    }
}

impl Render for Hint {
    fn render<O>(&self, output: &mut O) -> ChartResult<()>
    where
        O: OutputStream,
    {
        output.write(r#"<g class="hint">"#)?;
        self.marker.render(output)?;
        for line in &self.lines {
            line.render(output)?;
        }
        output.write("</g>")
    }
}

/// Serialize `frame` into `output`.
pub fn write_svg<O: OutputStream>(frame: &Frame, output: &mut O) -> ChartResult<()> {
    frame.render(output)
}

pub fn to_svg_string(frame: &Frame) -> ChartResult<String> {
    let mut out = String::new();
    frame.render(&mut out)?;
    Ok(out)
}

pub fn save_svg(frame: &Frame, path: &Path) -> ChartResult<()> {
    let mut file = OutputFile::create(path)?;
    frame.render(&mut file)?;
    file.finish()
}

fn style_attrs(style: &Style) -> String {
    let mut out = match style.stroke {
        Some(c) => format!(r#" stroke="{c}""#),
        None => String::from(r#" stroke="none""#),
    };
    if let Some(w) = style.stroke_width {
        out.push_str(&format!(r#" stroke-width="{}""#, num(w)));
    }
    if let Some(c) = style.fill {
        out.push_str(&format!(r#" fill="{c}""#));
    }
    if let Some(o) = style.opacity {
        out.push_str(&format!(r#" opacity="{}""#, num(o)));
    }
    out
}

// two decimals keep the output stable across platforms
fn num(v: f64) -> f64 {
    round2(v) + 0.0
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
