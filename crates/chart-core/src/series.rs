// File: crates/chart-core/src/series.rs
// Summary: Data point and series model plus date-key helpers for x positions.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::theme::Style;

/// A value `y` measured at position `x`. Positions are sortable keys,
/// typically dates encoded as `YYYYMMDD`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { id: None, x, y }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Copy of this point moved to `x`.
    pub fn at(&self, x: f64) -> Self {
        Self { x, ..self.clone() }
    }

    /// Copy of this point carrying value `y`.
    pub fn valued(&self, y: f64) -> Self {
        Self { y, ..self.clone() }
    }
}

/// One line on the chart. Owned by the caller; the core only reads it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub id: String,
    pub dataset: Vec<DataPoint>,
    #[serde(default)]
    pub line_style: Style,
    #[serde(default)]
    pub label: Option<String>,
}

impl Series {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), ..Self::default() }
    }

    /// Build a series from `(x, y)` pairs.
    pub fn with_data(id: impl Into<String>, data: impl IntoIterator<Item = (f64, f64)>) -> Self {
        let dataset = data.into_iter().map(|(x, y)| DataPoint::new(x, y)).collect();
        Self { id: id.into(), dataset, ..Self::default() }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.line_style = style;
        self
    }

    pub fn push(&mut self, point: DataPoint) {
        self.dataset.push(point);
    }

    pub fn is_empty(&self) -> bool { self.dataset.is_empty() }
}

/// A series aligned onto the shared key sequence. Lives for one layout pass.
#[derive(Clone, Debug, PartialEq)]
pub struct EnrichedSeries<'a> {
    pub series: &'a Series,
    pub normalized: Vec<DataPoint>,
}

impl<'a> EnrichedSeries<'a> {
    pub fn id(&self) -> &str { &self.series.id }
    pub fn label(&self) -> Option<&str> { self.series.label.as_deref() }
    pub fn len(&self) -> usize { self.normalized.len() }
    pub fn is_empty(&self) -> bool { self.normalized.is_empty() }
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ { self.normalized.iter().map(|p| p.y) }
}

/// Encode a calendar date as a `YYYYMMDD` position key.
pub fn date_key(date: NaiveDate) -> f64 {
    (date.year() as i64 * 10_000 + date.month() as i64 * 100 + date.day() as i64) as f64
}

/// Decode a `YYYYMMDD` position key; `None` when it is not a valid date.
pub fn date_from_key(key: f64) -> Option<NaiveDate> {
    if !key.is_finite() { return None; }
    let n = key.trunc() as i64;
    let year = i32::try_from(n / 10_000).ok()?;
    let month = ((n % 10_000) / 100) as u32;
    let day = (n % 100) as u32;
    NaiveDate::from_ymd_opt(year, month, day)
}
