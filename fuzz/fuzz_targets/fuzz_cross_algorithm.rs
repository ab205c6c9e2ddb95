#![no_main]

use libfuzzer_sys::fuzz_target;

use strassen_core::observers::NoOpObserver;
use strassen_core::{CancellationToken, Matrix, Multiplier, NaiveMultiplier, Options, StrassenMultiplier};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // First byte picks n = 2^k with k in 0..=4, second the leaf size.
    let n = 1usize << (data[0] % 5);
    let leaf_size = usize::from(data[1] % 9);
    let bytes = &data[2..];
    if bytes.len() < 2 * n * n {
        return;
    }

    // Small signed integers keep every route exact.
    let a = Matrix::from_fn(n, n, |i, j| i64::from(bytes[i * n + j] as i8)).unwrap();
    let b = Matrix::from_fn(n, n, |i, j| i64::from(bytes[n * n + i * n + j] as i8)).unwrap();

    let cancel = CancellationToken::new();
    let observer = NoOpObserver::new();
    let naive = NaiveMultiplier::new();
    let sequential = StrassenMultiplier::new(Options {
        leaf_size,
        ..Options::default()
    });
    let parallel = StrassenMultiplier::new(Options {
        leaf_size,
        parallel: true,
        parallel_threshold: 2,
    });

    let expected = naive.multiply(&a, &b, &cancel, &observer).unwrap();
    let s = sequential.multiply(&a, &b, &cancel, &observer).unwrap();
    let p = parallel.multiply(&a, &b, &cancel, &observer).unwrap();
    assert_eq!(s, expected, "Strassen != Naive at n={n}, leaf_size={leaf_size}");
    assert_eq!(p, expected, "ParallelStrassen != Naive at n={n}, leaf_size={leaf_size}");
});
