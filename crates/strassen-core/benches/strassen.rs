//! Criterion benchmarks for the matrix multipliers.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use strassen_core::observers::NoOpObserver;
use strassen_core::progress::CancellationToken;
use strassen_core::{Matrix, Multiplier, NaiveMultiplier, Options, StrassenMultiplier};

fn operand(n: usize, seed: usize) -> Matrix<f64> {
    Matrix::from_fn(n, n, |i, j| ((i * 31 + j * 17 + seed) % 97) as f64 / 97.0).unwrap()
}

fn run(m: &dyn Multiplier<f64>, a: &Matrix<f64>, b: &Matrix<f64>) -> Matrix<f64> {
    m.multiply(a, b, &CancellationToken::new(), &NoOpObserver::new())
        .unwrap()
}

fn bench_multipliers(c: &mut Criterion) {
    let naive = NaiveMultiplier::new();
    let strassen = StrassenMultiplier::new(Options {
        leaf_size: 32,
        ..Options::default()
    });
    let parallel = StrassenMultiplier::new(Options {
        leaf_size: 32,
        parallel: true,
        ..Options::default()
    });

    let sizes: Vec<usize> = vec![32, 64, 128, 256];

    let multipliers: [(&str, &dyn Multiplier<f64>); 3] = [
        ("Naive", &naive),
        ("Strassen", &strassen),
        ("ParallelStrassen", &parallel),
    ];

    for (name, m) in multipliers {
        let mut group = c.benchmark_group(name);
        for &n in &sizes {
            let a = operand(n, 1);
            let b = operand(n, 2);
            group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, _| {
                bench.iter(|| run(m, &a, &b));
            });
        }
        group.finish();
    }
}

criterion_group!(benches, bench_multipliers);
criterion_main!(benches);
