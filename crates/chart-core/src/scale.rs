// File: crates/chart-core/src/scale.rs
// Summary: Column (X) and value (Y) transforms from chart space to pixels.

/// Value coordinate on the Y axis (e.g., price).
pub type Value = f64;

/// Horizontal scale placing discrete sample columns at a fixed pixel gap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColumnScale {
    pub left_px: f64,
    pub gap_px: f64,
}

impl ColumnScale {
    /// `columns` evenly spaced columns spanning `width` pixels from `left_px`.
    /// A single column sits on the left edge with no gap.
    pub fn new(left_px: f64, width: f64, columns: usize) -> Self {
        let gap_px = if columns > 1 { width / (columns - 1) as f64 } else { 0.0 };
        Self { left_px, gap_px }
    }
    #[inline]
    pub fn to_px(&self, column: usize) -> f64 {
        self.left_px + column as f64 * self.gap_px
    }
}

/// Vertical value scale mapping `[vmin, vmin + delta]` to `[bottom, top]` pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub top_px: f64,
    pub bottom_px: f64,
    pub vmin: Value,
    pub delta: Value,
}

impl ValueScale {
    pub fn new(top_px: f64, bottom_px: f64, vmin: Value, delta: Value) -> Self {
        let delta = if delta == 0.0 { 1.0 } else { delta };
        Self { top_px, bottom_px, vmin, delta }
    }
    #[inline]
    pub fn height(&self) -> f64 { self.bottom_px - self.top_px }
    /// Higher values map to smaller pixel rows.
    #[inline]
    pub fn to_px(&self, y: Value) -> f64 {
        self.bottom_px - ((y - self.vmin) / self.delta) * self.height()
    }
    #[inline]
    pub fn from_px(&self, py: f64) -> Value {
        self.vmin + ((self.bottom_px - py) / self.height()) * self.delta
    }
}
