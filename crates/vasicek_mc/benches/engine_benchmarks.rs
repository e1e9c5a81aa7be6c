//! Criterion benchmarks for the Monte Carlo path engine.
//!
//! Benchmarks cover:
//! - Batch standard normal generation
//! - Euler-Maruyama path generation across path/step combinations

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use vasicek_mc::config::SimulationConfig;
use vasicek_mc::rng::SimRng;
use vasicek_mc::simulate::generate_paths;
use vasicek_models::models::vasicek::VasicekParams;

fn standard_params() -> VasicekParams {
    VasicekParams::new(0.1, 0.05, 0.01, 0.03).expect("valid params")
}

fn bench_fill_normal(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_normal");

    for size in [1_000, 100_000, 1_000_000] {
        let mut buffer = vec![0.0; size];
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            let mut rng = SimRng::from_seed(42);
            b.iter(|| rng.fill_normal(black_box(&mut buffer)));
        });
    }

    group.finish();
}

fn bench_generate_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_paths");
    let params = standard_params();

    for (n_paths, n_steps) in [(1_000, 100), (10_000, 100), (1_000, 2_520), (100_000, 100)] {
        let label = format!("{}paths_{}steps", n_paths, n_steps);
        let config = SimulationConfig::builder()
            .horizon(n_steps as f64 * 0.01)
            .dt(0.01)
            .n_paths(n_paths)
            .seed(42)
            .build()
            .expect("valid config");

        group.bench_with_input(
            BenchmarkId::from_parameter(&label),
            &config,
            |b, config| {
                let mut rng = SimRng::from_seed(42);
                b.iter(|| generate_paths(black_box(&params), config, &mut rng));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_fill_normal, bench_generate_paths);
criterion_main!(benches);
