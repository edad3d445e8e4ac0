// File: crates/chart-core/src/theme.rs
// Summary: Colors, stroke/text styles and Light/Dark theme presets for frame output.

use std::fmt;

use serde::{Deserialize, Serialize};

/// RGBA color; serialized as a CSS color string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self { Self { r, g, b, a: 255 } }
    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self { Self { r, g, b, a } }

    /// Parse `#rgb`, `#rrggbb`, `#rrggbbaa` or one of a handful of CSS names.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            let nib = |i: usize| u8::from_str_radix(hex.get(i..i + 1)?, 16).ok();
            let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
            return match hex.len() {
                3 => Some(Self::rgb(nib(0)? * 17, nib(1)? * 17, nib(2)? * 17)),
                6 => Some(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
                8 => Some(Self::argb(byte(6)?, byte(0)?, byte(2)?, byte(4)?)),
                _ => None,
            };
        }
        let named = match s.to_ascii_lowercase().as_str() {
            "black" => Self::BLACK,
            "white" => Self::WHITE,
            "red" => Self::rgb(255, 0, 0),
            "green" => Self::rgb(0, 128, 0),
            "blue" => Self::rgb(0, 0, 255),
            "gray" | "grey" => Self::rgb(128, 128, 128),
            "orange" => Self::rgb(255, 165, 0),
            "yellow" => Self::rgb(255, 255, 0),
            "transparent" => Self::argb(0, 0, 0, 0),
            _ => return None,
        };
        Some(named)
    }

    /// Same color with its alpha scaled by `opacity` in `[0, 1]`.
    pub fn with_opacity(self, opacity: f64) -> Self {
        let a = (self.a as f64 * opacity.clamp(0.0, 1.0)).round() as u8;
        Self { a, ..self }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl TryFrom<String> for Color {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::parse(&value).ok_or_else(|| format!("unrecognised color `{value}`"))
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self { c.to_string() }
}

/// Stroke/fill/text attributes of one drawn element. Unset fields inherit.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Style {
    pub stroke: Option<Color>,
    pub stroke_width: Option<f64>,
    pub fill: Option<Color>,
    pub opacity: Option<f64>,
    pub font_size: Option<f64>,
    /// Text color.
    pub color: Option<Color>,
}

impl Style {
    pub fn stroke(color: Color, width: f64) -> Self {
        Self { stroke: Some(color), stroke_width: Some(width), ..Self::default() }
    }

    /// `self` with every unset field taken from `fallback`.
    pub fn or(&self, fallback: &Style) -> Style {
        Style {
            stroke: self.stroke.or(fallback.stroke),
            stroke_width: self.stroke_width.or(fallback.stroke_width),
            fill: self.fill.or(fallback.fill),
            opacity: self.opacity.or(fallback.opacity),
            font_size: self.font_size.or(fallback.font_size),
            color: self.color.or(fallback.color),
        }
    }

    /// Faded copy used for gridlines when no dedicated grid style is set.
    pub fn faded(&self) -> Style {
        Style { opacity: Some(0.2), ..self.clone() }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub axis: Style,
    pub marking_text: Style,
    pub line: Style,
    pub marker_fill: Color,
    /// Marker stroke when the series style has no stroke.
    pub marker_stroke: Color,
    pub hint_fill: Color,
    pub hint_text: Style,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::BLACK,
            axis: Style::stroke(Color::rgb(128, 128, 128), 2.0),
            marking_text: Style { color: Some(Color::WHITE), font_size: Some(12.0), ..Style::default() },
            line: Style::stroke(Color::rgb(64, 160, 255), 2.0),
            marker_fill: Color::BLACK,
            marker_stroke: Color::WHITE,
            hint_fill: Color::WHITE,
            hint_text: Style { color: Some(Color::WHITE), font_size: Some(12.0), ..Style::default() },
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::rgb(250, 250, 252),
            axis: Style::stroke(Color::rgb(60, 60, 70), 2.0),
            marking_text: Style { color: Some(Color::rgb(20, 20, 30)), font_size: Some(12.0), ..Style::default() },
            line: Style::stroke(Color::rgb(32, 120, 200), 2.0),
            marker_fill: Color::WHITE,
            marker_stroke: Color::rgb(20, 20, 30),
            hint_fill: Color::rgb(20, 20, 30),
            hint_text: Style { color: Some(Color::rgb(20, 20, 30)), font_size: Some(12.0), ..Style::default() },
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::dark() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::dark()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_css_colors() {
        assert_eq!(Color::parse("#808080"), Some(Color::rgb(128, 128, 128)));
        assert_eq!(Color::parse("#fff"), Some(Color::WHITE));
        assert_eq!(Color::parse("Red"), Some(Color::rgb(255, 0, 0)));
        assert_eq!(Color::parse("#30303080"), Some(Color::argb(0x80, 0x30, 0x30, 0x30)));
        assert_eq!(Color::parse("chartreuse-ish"), None);
        assert_eq!(Color::rgb(48, 48, 48).to_string(), "#303030");
    }

    #[test]
    fn style_fallback_fills_gaps() {
        let own = Style { stroke: Some(Color::WHITE), ..Style::default() };
        let merged = own.or(&Style::stroke(Color::BLACK, 3.0));
        assert_eq!(merged.stroke, Some(Color::WHITE));
        assert_eq!(merged.stroke_width, Some(3.0));
    }

    #[test]
    fn find_falls_back_to_dark() {
        assert_eq!(find("LIGHT").name, "light");
        assert_eq!(find("neon").name, "dark");
    }
}
