// File: crates/chart-core/src/layout.rs
// Summary: Layout projector; maps normalized series onto pixel columns and rows
// and places axis ticks.

use tracing::debug;

use crate::axis::Axis;
use crate::downsample::sample_index;
use crate::error::{ChartError, ChartResult, NotRenderable};
use crate::geometry::Rect;
use crate::grid::{marking_divisor, shows_marking};
use crate::normalize::Strategy;
use crate::range::ValueRange;
use crate::scale::{ColumnScale, ValueScale};
use crate::series::{DataPoint, EnrichedSeries, Series};
use crate::types::{MAX_DISCRETE_POINTS_X, MAX_DISCRETE_POINTS_Y};

/// Inputs of one projection besides the series themselves.
#[derive(Clone, Copy, Debug)]
pub struct LayoutParams<'a> {
    pub area: Rect,
    pub axis_x: &'a Axis,
    pub axis_y: &'a Axis,
    pub strategy: Strategy,
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
    pub min_value_extra_pct: Option<f64>,
    pub max_value_extra_pct: Option<f64>,
}

/// A data point projected to pixels. `idx` is its index in the normalized dataset.
#[derive(Clone, Debug, PartialEq)]
pub struct Plot {
    pub x: f64,
    pub y: f64,
    pub point: DataPoint,
    pub idx: usize,
}

/// Plots of one series, one per sample column.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesPlots<'a> {
    pub series: &'a Series,
    pub plots: Vec<Plot>,
}

/// One tick along an axis. `position` is the pixel coordinate along that axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    pub index: usize,
    pub position: f64,
    pub value: f64,
    pub labelled: bool,
}

/// Result of a projection pass.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout<'a> {
    pub area: Rect,
    pub range: ValueRange,
    pub discrete_points_x: usize,
    pub discrete_points_y: usize,
    pub discrete_gap_x: f64,
    pub discrete_gap_y: f64,
    pub columns: ColumnScale,
    pub values: ValueScale,
    pub charts: Vec<SeriesPlots<'a>>,
    markings_x: Option<usize>,
    markings_y: Option<usize>,
}

/// Project `series` into `params.area`.
///
/// Every series must carry data: the column count is the shortest normalized length,
/// so a single empty series leaves nothing to draw.
pub fn project<'a>(series: &[EnrichedSeries<'a>], params: &LayoutParams<'_>) -> ChartResult<Layout<'a>> {
    if series.is_empty() {
        return Err(ChartError::NotRenderable(NotRenderable::NoSeries));
    }
    let area = params.area;
    if !(area.width() > 0.0) {
        return Err(ChartError::NotRenderable(NotRenderable::ZeroWidth));
    }
    if !(area.height() > 0.0) {
        return Err(ChartError::NotRenderable(NotRenderable::ZeroHeight));
    }

    if series.iter().all(|s| s.is_empty()) {
        return Err(ChartError::NotRenderable(NotRenderable::NoData));
    }
    if let Some(empty) = series.iter().find(|s| s.is_empty()) {
        debug!(series = %empty.series.id, "empty series blocks layout");
        return Err(ChartError::NotRenderable(NotRenderable::EmptySeries));
    }
    let shortest = series.iter().map(|s| s.len()).min().unwrap_or(0);
    let discrete_points_x = shortest.min(params.axis_x.discrete_points_or(MAX_DISCRETE_POINTS_X));

    // caller bounds only make sense while values are not rebased
    let (seed_min, seed_max) = match params.strategy.resolve(series.len()) {
        Strategy::Parallel => (params.min_value, params.max_value),
        _ => (None, None),
    };
    let (raw_min, raw_max) = ValueRange::scan(series, seed_min, seed_max)
        .ok_or(ChartError::NotRenderable(NotRenderable::NoData))?;
    let range = ValueRange::padded(raw_min, raw_max, params.min_value_extra_pct, params.max_value_extra_pct);

    let columns = ColumnScale::new(area.left, area.width(), discrete_points_x);
    let values = ValueScale::new(area.top, area.bottom, range.min, range.delta);
    let discrete_points_y = params.axis_y.discrete_points_or(MAX_DISCRETE_POINTS_Y);
    let discrete_gap_y = area.height() / discrete_points_y as f64;

    let charts = series
        .iter()
        .map(|s| SeriesPlots { series: s.series, plots: plots_for(s, discrete_points_x, &columns, &values) })
        .collect();

    debug!(
        columns = discrete_points_x,
        rows = discrete_points_y,
        min = range.min,
        max = range.max,
        "projected layout"
    );

    Ok(Layout {
        area,
        range,
        discrete_points_x,
        discrete_points_y,
        discrete_gap_x: columns.gap_px,
        discrete_gap_y,
        columns,
        values,
        charts,
        markings_x: params.axis_x.markings,
        markings_y: params.axis_y.markings,
    })
}

fn plots_for(s: &EnrichedSeries<'_>, columns: usize, xs: &ColumnScale, ys: &ValueScale) -> Vec<Plot> {
    (0..columns)
        .map(|i| {
            let idx = sample_index(s.len(), columns, i);
            let point = s.normalized[idx].clone();
            Plot { x: xs.to_px(i), y: ys.to_px(point.y), point, idx }
        })
        .collect()
}

impl<'a> Layout<'a> {
    /// Ticks along X, one per sample column. Values come from the first plotted series.
    pub fn x_ticks(&self) -> Vec<Tick> {
        let count = self.discrete_points_x;
        let divisor = marking_divisor(count, self.markings_x);
        let reference = self.charts.first();
        (0..count)
            .map(|i| Tick {
                index: i,
                position: self.columns.to_px(i),
                value: reference.map(|c| c.plots[i].point.x).unwrap_or(i as f64),
                labelled: shows_marking(i, count, divisor),
            })
            .collect()
    }

    /// Ticks along Y, `discrete_points_y + 1` of them from the bottom edge to the top edge.
    pub fn y_ticks(&self) -> Vec<Tick> {
        let steps = self.discrete_points_y;
        let divisor = marking_divisor(steps, self.markings_y);
        let gap = self.range.delta / steps as f64;
        (0..=steps)
            .map(|i| {
                let value = self.range.min + gap * i as f64;
                Tick {
                    index: i,
                    position: self.area.bottom - self.discrete_gap_y * i as f64,
                    value,
                    labelled: shows_marking(i, steps + 1, divisor),
                }
            })
            .collect()
    }

    /// Pixel row of `value` on this layout's value scale.
    pub fn value_px(&self, value: f64) -> f64 {
        self.values.to_px(value)
    }

    /// Plot at `column` of series `series`, if both exist.
    pub fn plot(&self, series: usize, column: usize) -> Option<&Plot> {
        self.charts.get(series)?.plots.get(column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;

    fn params<'a>(x: &'a Axis, y: &'a Axis) -> LayoutParams<'a> {
        LayoutParams {
            area: Rect::from_ltrb(0.0, 0.0, 100.0, 50.0),
            axis_x: x,
            axis_y: y,
            strategy: Strategy::Parallel,
            min_value: None,
            max_value: None,
            min_value_extra_pct: None,
            max_value_extra_pct: None,
        }
    }

    #[test]
    fn zero_minimum_is_renderable() {
        let all = vec![Series::with_data("a", [(1.0, 0.0), (2.0, 10.0)])];
        let norm = normalize(Strategy::Parallel, &all).unwrap();
        let (x, y) = (Axis::default(), Axis::default().with_max_discrete_points(5));
        let layout = project(&norm, &params(&x, &y)).unwrap();
        assert_eq!(layout.range.min, 0.0);
        let plots = &layout.charts[0].plots;
        assert_eq!((plots[0].x, plots[0].y), (0.0, 50.0));
        assert_eq!((plots[1].x, plots[1].y), (100.0, 0.0));
    }

    #[test]
    fn y_ticks_span_the_area() {
        let all = vec![Series::with_data("a", [(1.0, 0.0), (2.0, 10.0)])];
        let norm = normalize(Strategy::Parallel, &all).unwrap();
        let (x, y) = (Axis::default(), Axis::default().with_max_discrete_points(5).with_markings(3));
        let layout = project(&norm, &params(&x, &y)).unwrap();
        let ticks = layout.y_ticks();
        assert_eq!(ticks.len(), 6);
        assert_eq!(ticks[0].position, 50.0);
        assert_eq!(ticks[5].position, 0.0);
        assert_eq!(ticks[5].value, 10.0);
        // divisor round(5 / 2) = 3
        let labelled: Vec<usize> = ticks.iter().filter(|t| t.labelled).map(|t| t.index).collect();
        assert_eq!(labelled, vec![0, 3, 5]);
    }

    #[test]
    fn empty_series_blocks_rendering() {
        let all = vec![Series::with_data("a", [(1.0, 1.0), (2.0, 2.0), (3.0, 1.5)]), Series::new("b")];
        let norm = normalize(Strategy::Parallel, &all).unwrap();
        let (x, y) = (Axis::default(), Axis::default());
        let err = project(&norm, &params(&x, &y)).unwrap_err();
        assert!(matches!(err, ChartError::NotRenderable(NotRenderable::EmptySeries)));
    }

    #[test]
    fn all_empty_series_have_no_data() {
        let all = vec![Series::new("a"), Series::new("b")];
        let norm = normalize(Strategy::Parallel, &all).unwrap();
        let (x, y) = (Axis::default(), Axis::default());
        let err = project(&norm, &params(&x, &y)).unwrap_err();
        assert!(matches!(err, ChartError::NotRenderable(NotRenderable::NoData)));
    }
}
