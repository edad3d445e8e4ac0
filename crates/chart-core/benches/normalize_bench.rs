use chart_core::{normalize, Series, Strategy};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

// Staggered series: each one starts later and skips every `stride`-th key.
fn gen_series(count: usize, n: usize) -> Vec<Series> {
    (0..count)
        .map(|s| {
            let stride = s + 2;
            let data = (s * 10..n)
                .filter(|i| i % stride != 0)
                .map(|i| (i as f64, 100.0 + (i as f64 * 0.01).sin() * 10.0 + s as f64));
            Series::with_data(format!("s{s}"), data)
        })
        .collect()
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    for &n in &[1_000usize, 10_000usize, 100_000usize] {
        let all = gen_series(4, n);
        for strategy in [Strategy::Parallel, Strategy::Performance] {
            group.bench_with_input(BenchmarkId::from_parameter(format!("n{n}_{strategy:?}")), &all, |b, all| {
                b.iter(|| {
                    let _ = black_box(normalize(strategy, all));
                });
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_normalize);
criterion_main!(benches);
