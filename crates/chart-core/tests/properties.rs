// File: crates/chart-core/tests/properties.rs
// Purpose: Property tests for alignment, rebasing and projection invariants.

use std::collections::BTreeMap;

use chart_core::geometry::round2;
use chart_core::grid::{labelled_ticks, marking_divisor};
use chart_core::{key_sequence, normalize, Axis, Chart, ChartConfig, Series, Strategy as Rebase, Width};
use proptest::prelude::*;

/// Series with strictly ascending integer keys and positive values.
fn series_strategy() -> impl Strategy<Value = Vec<Series>> {
    proptest::collection::vec(proptest::collection::btree_map(0i32..200, 1.0f64..1_000.0, 0..40), 1..5).prop_map(
        |maps: Vec<BTreeMap<i32, f64>>| {
            maps.into_iter()
                .enumerate()
                .map(|(i, m)| Series::with_data(format!("s{i}"), m.into_iter().map(|(x, y)| (x as f64, y))))
                .collect()
        },
    )
}

proptest! {
    #[test]
    fn aligned_series_share_the_key_union(all in series_strategy()) {
        let keys = key_sequence(&all);
        let out = normalize(Rebase::Parallel, &all).expect("normalize");
        prop_assert_eq!(out.len(), all.len());
        for s in &out {
            if s.series.is_empty() {
                prop_assert!(s.is_empty());
                continue;
            }
            let xs: Vec<f64> = s.normalized.iter().map(|p| p.x).collect();
            prop_assert_eq!(&xs, &keys);
            // every value comes from the original dataset
            for p in &s.normalized {
                prop_assert!(s.series.dataset.iter().any(|o| o.y == p.y));
            }
        }
    }

    #[test]
    fn performance_values_are_rounded_percentages(all in series_strategy()) {
        prop_assume!(all.len() >= 2);
        let out = normalize(Rebase::Performance, &all).expect("normalize");
        for s in out.iter().filter(|s| !s.is_empty()) {
            let first = s.series.dataset[0].y;
            let allowed: Vec<f64> = s.series.dataset.iter().map(|p| round2(100.0 * p.y / first)).collect();
            for v in s.values() {
                prop_assert!(allowed.contains(&v), "{} not derived from {:?}", v, allowed);
            }
        }
    }

    #[test]
    fn plots_stay_inside_the_area(all in series_strategy(), width in 60.0f64..1_200.0, cap in 2usize..64) {
        prop_assume!(all.iter().all(|s| !s.is_empty()));
        let mut cfg = ChartConfig { height: 240.0, ..ChartConfig::default() };
        cfg.axis_x = Axis::default().with_max_discrete_points(cap);
        let mut chart = Chart::new(cfg);
        for s in all {
            chart.add_series(s);
        }
        let layout = chart.layout(Width::Fixed(width)).expect("layout");
        let area = layout.area;
        prop_assert!(layout.discrete_points_x <= cap);
        for c in &layout.charts {
            prop_assert_eq!(c.plots.len(), layout.discrete_points_x);
            for pair in c.plots.windows(2) {
                prop_assert!(pair[1].x > pair[0].x);
            }
            for p in &c.plots {
                prop_assert!(p.x >= area.left - 1e-9 && p.x <= area.right + 1e-9);
                prop_assert!(p.y >= area.top - 1e-9 && p.y <= area.bottom + 1e-9);
            }
        }
    }

    #[test]
    fn first_and_last_ticks_are_always_labelled(count in 1usize..300, markings in 0usize..20) {
        let labelled = labelled_ticks(count, marking_divisor(count, Some(markings)));
        prop_assert_eq!(labelled.first().copied(), Some(0));
        prop_assert_eq!(labelled.last().copied(), Some(count - 1));
    }
}
