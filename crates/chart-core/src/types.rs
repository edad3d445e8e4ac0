// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (sizes, margins, discrete point caps).

use serde::{Deserialize, Serialize};

/// Default surface width in pixels when neither an explicit nor a measured width is known.
pub const WIDTH: f64 = 100.0;
/// Default surface height in pixels.
pub const HEIGHT: f64 = 100.0;

/// Upper bound of sample columns along X when the axis does not set one.
pub const MAX_DISCRETE_POINTS_X: usize = 255;
/// Upper bound of value steps along Y when the axis does not set one.
pub const MAX_DISCRETE_POINTS_Y: usize = 255;

pub const HINT_TEXT_HEIGHT: f64 = 15.0;

/// Space between the surface bounds and the chart area, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Insets {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Insets {
    pub const fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub fn hsum(&self) -> f64 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub fn vsum(&self) -> f64 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(10.0, 10.0, 10.0, 10.0)
    }
}

/// Where the surface width comes from for one render pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Width {
    /// Caller supplied width; wins over anything measured.
    Fixed(f64),
    /// Width measured by the host container, if it has been measured yet.
    Measured(Option<f64>),
}

impl Width {
    /// Resolve the pixel width, falling back to [`WIDTH`] when nothing usable is known.
    pub fn resolve(self) -> f64 {
        match self {
            Width::Fixed(w) if w >= 1.0 => w,
            Width::Fixed(_) => WIDTH,
            Width::Measured(Some(w)) if w > 0.0 => w,
            Width::Measured(_) => WIDTH,
        }
    }

    /// Explicit config width wins; a missing or sub-pixel one defers to the measurement.
    pub fn from_config(configured: Option<f64>, measured: Option<f64>) -> Self {
        match configured {
            Some(w) if w >= 1.0 => Width::Fixed(w),
            _ => Width::Measured(measured),
        }
    }
}
