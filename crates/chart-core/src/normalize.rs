// File: crates/chart-core/src/normalize.rs
// Summary: Aligns independent series onto one shared, sorted key sequence with
// carry-forward gap filling and optional rebasing for comparison.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{ChartError, ChartResult};
use crate::geometry::round2;
use crate::series::{DataPoint, EnrichedSeries, Series};

/// How values of several series relate to each other on one chart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Every series keeps its own values.
    #[default]
    Parallel,
    /// Every series starts from zero: `y - first_y`.
    SameStart,
    /// Every series starts from 100: `round2(100 * y / first_y)`.
    Performance,
}

impl Strategy {
    /// Rebasing only makes sense when there is something to compare against.
    pub fn resolve(self, series_count: usize) -> Strategy {
        if series_count < 2 { Strategy::Parallel } else { self }
    }
}

/// Per-series value transform, always relative to the original first value.
#[derive(Clone, Copy, Debug)]
struct Rebase {
    strategy: Strategy,
    first: f64,
}

impl Rebase {
    fn for_series(strategy: Strategy, series: &Series) -> ChartResult<Self> {
        let first = series.dataset.first().map(|p| p.y).unwrap_or(0.0);
        if strategy == Strategy::Performance && !series.dataset.is_empty() && first == 0.0 {
            return Err(ChartError::DivisionByZero { series: series.id.clone() });
        }
        Ok(Self { strategy, first })
    }

    fn apply(&self, p: &DataPoint) -> DataPoint {
        match self.strategy {
            Strategy::Parallel => p.clone(),
            Strategy::SameStart => p.valued(p.y - self.first),
            Strategy::Performance => p.valued(round2(100.0 * p.y / self.first)),
        }
    }
}

/// Sorted union of every finite `x` across all series.
pub fn key_sequence(all: &[Series]) -> Vec<f64> {
    let mut keys: Vec<f64> = all
        .iter()
        .flat_map(|s| s.dataset.iter().map(|p| p.x))
        .filter(|x| x.is_finite())
        .collect();
    keys.sort_by(f64::total_cmp);
    keys.dedup();
    keys
}

/// Normalize `all` so every series has one value per shared key.
///
/// Keys before a series' first point are filled from that first point; keys
/// after its last point repeat the last one. Only an empty series stays empty.
/// A dataset that goes backwards in `x` is rejected with
/// [`ChartError::UnsortedSeries`].
pub fn normalize(strategy: Strategy, all: &[Series]) -> ChartResult<Vec<EnrichedSeries<'_>>> {
    let strategy = strategy.resolve(all.len());
    let keys = key_sequence(all);
    debug!(series = all.len(), keys = keys.len(), ?strategy, "normalizing series");

    all.iter()
        .map(|series| {
            check_sorted(series)?;
            let rebase = Rebase::for_series(strategy, series)?;
            let normalized = align(series, &keys, rebase)?;
            trace!(series = %series.id, points = normalized.len(), "aligned series");
            Ok(EnrichedSeries { series, normalized })
        })
        .collect()
}

fn check_sorted(series: &Series) -> ChartResult<()> {
    let mut prev = f64::NEG_INFINITY;
    for (index, p) in series.dataset.iter().enumerate().filter(|(_, p)| p.x.is_finite()) {
        if p.x < prev {
            return Err(ChartError::UnsortedSeries { series: series.id.clone(), index });
        }
        prev = p.x;
    }
    Ok(())
}

/// Single forward sweep of one dataset against the key sequence.
fn align(series: &Series, keys: &[f64], rebase: Rebase) -> ChartResult<Vec<DataPoint>> {
    let data = &series.dataset;
    // Every step advances either the cursor or the key index.
    let bound = data.len() + keys.len();
    let mut out: Vec<DataPoint> = Vec::with_capacity(keys.len());
    let mut cursor = 0usize;
    let mut k = 0usize;
    let mut steps = 0usize;

    while k < keys.len() {
        steps += 1;
        if steps > bound {
            return Err(ChartError::AlignmentOverflow { series: series.id.clone(), steps });
        }
        let key = keys[k];
        match data.get(cursor) {
            Some(head) if !head.x.is_finite() => cursor += 1,
            Some(head) if head.x < key => {
                // stale point below the key: keep it and retry the same key
                out.push(rebase.apply(head));
                cursor += 1;
            }
            Some(head) if head.x == key => {
                out.push(rebase.apply(head));
                cursor += 1;
                k += 1;
            }
            Some(head) => {
                out.push(rebase.apply(head).at(key));
                k += 1;
            }
            None => {
                if let (Some(last), false) = (data.last(), out.is_empty()) {
                    out.push(rebase.apply(last).at(key));
                }
                k += 1;
            }
        }
    }
    Ok(out)
}
