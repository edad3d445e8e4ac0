// File: crates/chart-core/tests/layout.rs
// Purpose: Projection of normalized series onto pixel columns, value range padding
// and the not-renderable outcomes.

use chart_core::{Axis, Chart, ChartConfig, ChartError, ChartState, NotRenderable, Series, Strategy, Width};

fn chart_with(config: ChartConfig, series: Vec<Series>) -> Chart {
    let mut chart = Chart::new(config);
    for s in series {
        chart.add_series(s);
    }
    chart
}

fn config() -> ChartConfig {
    ChartConfig { height: 120.0, ..ChartConfig::default() }
}

#[test]
fn k_columns_are_evenly_spaced() {
    let chart = chart_with(config(), vec![Series::with_data("a", (1..=5).map(|i| (i as f64, i as f64)))]);
    let layout = chart.layout(Width::Fixed(220.0)).expect("layout");
    assert_eq!(layout.discrete_points_x, 5);
    assert_eq!(layout.discrete_gap_x, 50.0);

    let xs: Vec<f64> = layout.charts[0].plots.iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![10.0, 60.0, 110.0, 160.0, 210.0]);
    assert!(xs.windows(2).all(|w| w[1] > w[0]));
}

#[test]
fn column_count_is_capped_and_downsampled() {
    let mut cfg = config();
    cfg.axis_x = Axis::default().with_max_discrete_points(4);
    let chart = chart_with(cfg, vec![Series::with_data("a", (0..10).map(|i| (i as f64, i as f64 * 2.0)))]);
    let layout = chart.layout(Width::Fixed(220.0)).unwrap();
    assert_eq!(layout.discrete_points_x, 4);
    let picked: Vec<usize> = layout.charts[0].plots.iter().map(|p| p.idx).collect();
    assert_eq!(picked, vec![0, 3, 5, 8]);
    assert_eq!(layout.charts[0].plots[1].point.y, 6.0);
}

#[test]
fn shortest_series_limits_columns() {
    let chart = chart_with(
        config(),
        vec![
            Series::with_data("long", (0..6).map(|i| (i as f64, 1.0))),
            // duplicates emit extra stale points, so this one is longer after alignment
            Series::with_data("dup", [(0.0, 1.0), (0.0, 2.0), (5.0, 3.0)]),
        ],
    );
    let layout = chart.layout(Width::Fixed(220.0)).unwrap();
    assert_eq!(layout.discrete_points_x, 6);
    assert_eq!(layout.charts[1].plots.len(), 6);
}

#[test]
fn padding_is_a_share_of_the_raw_span() {
    let mut cfg = config();
    cfg.min_value_extra_pct = Some(10.0);
    cfg.max_value_extra_pct = Some(25.0);
    let chart = chart_with(cfg, vec![Series::with_data("a", [(1.0, 0.0), (2.0, 100.0)])]);
    let layout = chart.layout(Width::Fixed(220.0)).unwrap();
    assert_eq!(layout.range.min, 0.0 - 10.0 / 100.0 * 100.0);
    assert_eq!(layout.range.max, 125.0);
    assert_eq!(layout.range.delta, 135.0);
}

#[test]
fn higher_values_sit_higher() {
    let chart = chart_with(config(), vec![Series::with_data("a", [(1.0, 5.0), (2.0, 15.0), (3.0, 10.0)])]);
    let layout = chart.layout(Width::Fixed(220.0)).unwrap();
    let plots = &layout.charts[0].plots;
    assert_eq!(plots[0].y, 110.0);
    assert_eq!(plots[1].y, 10.0);
    assert_eq!(plots[2].y, 60.0);
}

#[test]
fn seeds_only_apply_without_rebasing() {
    let series = vec![
        Series::with_data("a", [(1.0, 10.0), (2.0, 20.0)]),
        Series::with_data("b", [(1.0, 5.0), (2.0, 8.0)]),
    ];
    let mut cfg = config();
    cfg.min_value = Some(-100.0);
    let parallel = chart_with(cfg.clone(), series.clone());
    assert_eq!(parallel.layout(Width::Fixed(220.0)).unwrap().range.min, -100.0);

    cfg.strategy = Strategy::SameStart;
    let rebased = chart_with(cfg, series);
    assert_eq!(rebased.layout(Width::Fixed(220.0)).unwrap().range.min, 0.0);
}

#[test]
fn not_renderable_outcomes_are_explicit() {
    let empty = chart_with(config(), vec![]);
    assert!(matches!(
        empty.layout(Width::Fixed(220.0)),
        Err(ChartError::NotRenderable(NotRenderable::NoSeries))
    ));

    let no_data = chart_with(config(), vec![Series::new("a"), Series::new("b")]);
    assert!(matches!(
        no_data.layout(Width::Fixed(220.0)),
        Err(ChartError::NotRenderable(NotRenderable::NoData))
    ));

    let narrow = chart_with(config(), vec![Series::with_data("a", [(1.0, 1.0)])]);
    assert!(matches!(
        narrow.layout(Width::Fixed(20.0)),
        Err(ChartError::NotRenderable(NotRenderable::ZeroWidth))
    ));

    let flat = chart_with(ChartConfig { height: 20.0, ..config() }, vec![Series::with_data("a", [(1.0, 1.0)])]);
    assert!(matches!(
        flat.layout(Width::Fixed(220.0)),
        Err(ChartError::NotRenderable(NotRenderable::ZeroHeight))
    ));
}

#[test]
fn one_empty_series_blocks_the_chart() {
    let chart = chart_with(
        config(),
        vec![Series::with_data("a", [(1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]), Series::new("b")],
    );
    assert!(matches!(
        chart.layout(Width::Fixed(200.0)),
        Err(ChartError::NotRenderable(NotRenderable::EmptySeries))
    ));
    assert!(chart.frame(Width::Fixed(200.0), &ChartState::default()).is_err());
}

#[test]
fn single_column_sits_on_left_edge() {
    let chart = chart_with(config(), vec![Series::with_data("a", [(1.0, 3.0)])]);
    let layout = chart.layout(Width::Fixed(220.0)).unwrap();
    assert_eq!(layout.discrete_points_x, 1);
    assert_eq!(layout.charts[0].plots[0].x, 10.0);
    // flat range falls back to a unit span
    assert_eq!(layout.range.delta, 1.0);
}
