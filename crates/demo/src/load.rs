// File: crates/demo/src/load.rs
// Summary: CSV series loader with header detection and ISO date keys.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use chart_core::{date_key, DataPoint, Series};
use chrono::NaiveDate;
use tracing::{debug, warn};

const X_HEADERS: &[&str] = &["date", "x", "time", "timestamp", "day"];
const Y_HEADERS: &[&str] = &["value", "y", "close", "price", "adj_close"];

/// Load one series from `path`; its id and label are the file stem.
pub(crate) fn load_series(path: &Path) -> Result<Series> {
    let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let id = path.file_stem().and_then(|s| s.to_str()).unwrap_or("series").to_string();
    let series = read_series(&id, file).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    Ok(series.with_label(id))
}

pub(crate) fn read_series(id: &str, input: impl Read) -> Result<Series> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_reader(input);

    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    debug!(?headers, "csv headers");

    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_x = idx(X_HEADERS).unwrap_or(0);
    let i_y = idx(Y_HEADERS).unwrap_or(if i_x == 0 { 1 } else { 0 });

    let mut series = Series::new(id);
    let mut skipped = 0usize;
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let x = rec.get(i_x).and_then(parse_key);
        let y = rec.get(i_y).and_then(|s| s.parse::<f64>().ok());
        match (x, y) {
            (Some(x), Some(y)) => series.push(DataPoint::new(x, y)),
            _ => {
                skipped += 1;
                debug!(row, "skipping unparsable row");
            }
        }
    }
    if skipped > 0 {
        warn!(series = id, skipped, "rows without a usable key or value were skipped");
    }

    // files are not required to be in order
    series.dataset.sort_by(|a, b| a.x.total_cmp(&b.x));
    Ok(series)
}

/// Plain numbers are used as is; ISO dates become `YYYYMMDD` keys.
fn parse_key(s: &str) -> Option<f64> {
    if let Ok(v) = s.parse::<f64>() {
        return Some(v);
    }
    let date = s.get(..10).unwrap_or(s);
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok().map(date_key)
}
