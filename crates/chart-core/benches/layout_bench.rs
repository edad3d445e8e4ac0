use chart_core::{Axis, Chart, ChartConfig, ChartState, Series, Width};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn gen_chart(n: usize) -> Chart {
    let mut cfg = ChartConfig { height: 480.0, ..ChartConfig::default() };
    cfg.axis_x = Axis::default().with_markings(8).with_grid(None);
    cfg.axis_y = Axis::default().with_max_discrete_points(10).with_markings(5).with_grid(None);
    let mut chart = Chart::new(cfg);
    for s in 0..3 {
        let data = (0..n).map(|i| (i as f64, (i as f64 * 0.001 * (s + 1) as f64).cos() * 50.0 + 100.0));
        chart.add_series(Series::with_data(format!("s{s}"), data));
    }
    chart
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    for &n in &[1_000usize, 50_000usize] {
        let chart = gen_chart(n);
        group.bench_with_input(BenchmarkId::new("project", n), &chart, |b, chart| {
            b.iter(|| {
                let _ = black_box(chart.layout(Width::Fixed(1280.0)));
            });
        });
        group.bench_with_input(BenchmarkId::new("frame", n), &chart, |b, chart| {
            b.iter(|| {
                let _ = black_box(chart.frame(Width::Fixed(1280.0), &ChartState::default()));
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
