// File: crates/chart-core/src/config.rs
// Summary: Serializable chart configuration, loadable from TOML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::axis::Axis;
use crate::error::{ChartError, ChartResult};
use crate::normalize::Strategy;
use crate::theme::Style;
use crate::types::{Insets, HEIGHT, HINT_TEXT_HEIGHT};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ChartConfig {
    /// Surface width including margins; measured by the host when unset.
    pub width: Option<f64>,
    /// Surface height including margins.
    pub height: f64,
    pub margins: Insets,
    /// Lower bound the value axis always includes (parallel strategy only).
    pub min_value: Option<f64>,
    /// Upper bound the value axis always includes (parallel strategy only).
    pub max_value: Option<f64>,
    /// Headroom below the lowest value, in % of the value span.
    pub min_value_extra_pct: Option<f64>,
    /// Headroom above the highest value, in % of the value span.
    pub max_value_extra_pct: Option<f64>,
    pub strategy: Strategy,
    pub axis_x: Axis,
    pub axis_y: Axis,
    pub show_hint: bool,
    pub hint_text_height: f64,
    pub hint_text_style: Option<Style>,
    /// Name of a built-in theme preset.
    pub theme: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: None,
            height: HEIGHT,
            margins: Insets::default(),
            min_value: None,
            max_value: None,
            min_value_extra_pct: None,
            max_value_extra_pct: None,
            strategy: Strategy::Parallel,
            axis_x: Axis::default(),
            axis_y: Axis::default(),
            show_hint: true,
            hint_text_height: HINT_TEXT_HEIGHT,
            hint_text_style: None,
            theme: "dark".to_string(),
        }
    }
}

impl ChartConfig {
    pub fn from_toml_str(s: &str) -> ChartResult<Self> {
        let config: ChartConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> ChartResult<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }

    /// Reject values no layout could make sense of.
    pub fn validate(&self) -> ChartResult<()> {
        if !self.height.is_finite() || self.height < 0.0 {
            return Err(ChartError::Config(format!("height must be a non-negative number, got {}", self.height)));
        }
        let m = &self.margins;
        if [m.left, m.right, m.top, m.bottom].iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(ChartError::Config("margins must be non-negative".to_string()));
        }
        if let (Some(lo), Some(hi)) = (self.min_value, self.max_value) {
            if lo > hi {
                return Err(ChartError::Config(format!("min-value {lo} is above max-value {hi}")));
            }
        }
        if !(self.hint_text_height > 0.0) {
            return Err(ChartError::Config("hint-text-height must be positive".to_string()));
        }
        Ok(())
    }
}
