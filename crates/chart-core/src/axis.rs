// File: crates/chart-core/src/axis.rs
// Summary: Axis configuration (markings, grid, reference lines) and value formatting.

use serde::{Deserialize, Serialize};

use crate::series::date_from_key;
use crate::theme::Style;

/// Turns an axis value into display text. Injected per axis by the host.
pub trait ValueFormatter {
    fn format(&self, value: f64) -> String;
}

impl<F: Fn(f64) -> String> ValueFormatter for F {
    fn format(&self, value: f64) -> String { self(value) }
}

/// Serializable built-in formatters.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ValueFormat {
    /// `Display` of the raw number.
    #[default]
    Plain,
    /// Fixed number of decimals, truncated toward zero.
    Decimals { places: u8 },
    /// `YYYYMMDD` key rendered as `d/m/yyyy`.
    DateKey,
}

impl ValueFormatter for ValueFormat {
    fn format(&self, value: f64) -> String {
        match self {
            ValueFormat::Plain => value.to_string(),
            ValueFormat::Decimals { places } => {
                let scale = 10f64.powi(*places as i32);
                let truncated = (value * scale).trunc() / scale;
                format!("{:.*}", *places as usize, truncated)
            }
            ValueFormat::DateKey => match date_from_key(value) {
                Some(d) => d.format("%-d/%-m/%Y").to_string(),
                None => value.to_string(),
            },
        }
    }
}

/// SVG `text-anchor`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextAnchor {
    Start,
    #[default]
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// SVG `dominant-baseline`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Baseline {
    #[default]
    Middle,
    Auto,
    Hanging,
    TextBottom,
    TextTop,
    Central,
}

impl Baseline {
    pub fn as_str(&self) -> &'static str {
        match self {
            Baseline::Middle => "middle",
            Baseline::Auto => "auto",
            Baseline::Hanging => "hanging",
            Baseline::TextBottom => "text-bottom",
            Baseline::TextTop => "text-top",
            Baseline::Central => "central",
        }
    }
}

/// Horizontal reference line at a fixed value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DiscreteLine {
    pub value: f64,
    #[serde(default)]
    pub line_style: Style,
}

/// X or Y axis configuration. Pure configuration, no identity.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Axis {
    /// Style of the axis line and its ticks.
    pub style: Style,
    /// Ideal number of labelled markings along the axis.
    pub markings: Option<usize>,
    /// Horizontal offset of marking text from its tick.
    pub marking_pos_x: f64,
    /// Vertical offset of marking text from its tick.
    pub marking_pos_y: f64,
    pub marking_anchor: TextAnchor,
    pub marking_baseline: Baseline,
    pub marking_text_style: Style,
    /// Cap on discrete (minor, unlabelled) positions along the axis.
    pub max_discrete_points: Option<usize>,
    pub discrete_lines: Vec<DiscreteLine>,
    /// Draw a gridline perpendicular to the axis at every discrete point.
    pub grid: bool,
    pub grid_style: Option<Style>,
    pub format: ValueFormat,
}

impl Axis {
    pub fn new(format: ValueFormat) -> Self {
        Self { format, ..Self::default() }
    }

    pub fn with_markings(mut self, markings: usize) -> Self {
        self.markings = Some(markings);
        self
    }

    pub fn with_max_discrete_points(mut self, n: usize) -> Self {
        self.max_discrete_points = Some(n);
        self
    }

    pub fn with_grid(mut self, grid_style: Option<Style>) -> Self {
        self.grid = true;
        self.grid_style = grid_style;
        self
    }

    /// Configured cap, or `default` when unset or zero.
    pub fn discrete_points_or(&self, default: usize) -> usize {
        match self.max_discrete_points {
            Some(n) if n > 0 => n,
            _ => default,
        }
    }

    /// Grid style, falling back to the faded axis style (itself completed from `theme_axis`).
    pub fn effective_grid_style(&self, theme_axis: &Style) -> Style {
        match &self.grid_style {
            Some(style) => style.clone(),
            None => self.style.or(theme_axis).faded(),
        }
    }
}
