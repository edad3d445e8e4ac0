// File: crates/chart-core/src/range.rs
// Summary: Value range over normalized series with seeding and percentage padding.

use crate::series::EnrichedSeries;

/// Padded value range shown on the Y axis. `delta` is never zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
    pub delta: f64,
}

impl ValueRange {
    /// Single pass min/max over every normalized value, seeded by caller bounds.
    /// `None` when there is neither data nor a seed on both ends.
    pub fn scan(series: &[EnrichedSeries<'_>], seed_min: Option<f64>, seed_max: Option<f64>) -> Option<(f64, f64)> {
        let mut min = seed_min.unwrap_or(f64::INFINITY);
        let mut max = seed_max.unwrap_or(f64::NEG_INFINITY);
        for v in series.iter().flat_map(|s| s.values()).filter(|v| v.is_finite()) {
            min = min.min(v);
            max = max.max(v);
        }
        (min.is_finite() && max.is_finite()).then_some((min, max))
    }

    /// Widen `[raw_min, raw_max]` by percentages of its span.
    pub fn padded(raw_min: f64, raw_max: f64, min_extra_pct: Option<f64>, max_extra_pct: Option<f64>) -> Self {
        let delta = nonzero(raw_max - raw_min);
        let min = raw_min - min_extra_pct.unwrap_or(0.0) / 100.0 * delta;
        let max = raw_max + max_extra_pct.unwrap_or(0.0) / 100.0 * delta;
        let delta = max - min;
        if delta == 0.0 {
            return Self { min, max: min + 1.0, delta: 1.0 };
        }
        Self { min, max, delta }
    }
}

#[inline]
fn nonzero(delta: f64) -> f64 {
    if delta == 0.0 { 1.0 } else { delta }
}
