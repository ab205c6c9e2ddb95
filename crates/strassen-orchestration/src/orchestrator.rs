//! Core orchestration: parallel execution and result analysis.

use std::time::Instant;

use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use tracing::{debug, warn};

use strassen_core::observer::ProgressObserver;
use strassen_core::observers::NoOpObserver;
use strassen_core::{CancellationToken, DynMultiplier, Matrix, MatrixError};

use crate::interfaces::MultiplicationResult;

/// Execute `a × b` with all given multipliers.
pub fn execute_multiplications(
    multipliers: &[DynMultiplier],
    a: &Matrix<f64>,
    b: &Matrix<f64>,
    cancel: &CancellationToken,
) -> Vec<MultiplicationResult> {
    execute_multiplications_with_observer(multipliers, a, b, cancel, &NoOpObserver::new())
}

/// Execute `a × b` with all given multipliers and a progress observer.
///
/// A single multiplier runs on the calling thread; several run concurrently
/// on the rayon pool. Results keep the order of `multipliers`.
pub fn execute_multiplications_with_observer(
    multipliers: &[DynMultiplier],
    a: &Matrix<f64>,
    b: &Matrix<f64>,
    cancel: &CancellationToken,
    observer: &dyn ProgressObserver,
) -> Vec<MultiplicationResult> {
    if let [multiplier] = multipliers {
        return vec![run_one(multiplier, a, b, cancel, observer)];
    }

    multipliers
        .par_iter()
        .map(|multiplier| run_one(multiplier, a, b, cancel, observer))
        .collect()
}

fn run_one(
    multiplier: &DynMultiplier,
    a: &Matrix<f64>,
    b: &Matrix<f64>,
    cancel: &CancellationToken,
    observer: &dyn ProgressObserver,
) -> MultiplicationResult {
    let start = Instant::now();
    let outcome = multiplier.multiply(a, b, cancel, observer);
    let duration = start.elapsed();

    match &outcome {
        Ok(_) => debug!(algorithm = multiplier.name(), ?duration, "Multiplier finished"),
        Err(e) => warn!(algorithm = multiplier.name(), error = %e, "Multiplier failed"),
    }

    MultiplicationResult {
        algorithm: multiplier.name().to_string(),
        outcome,
        duration,
        stats: multiplier.stats(),
    }
}

/// Analyze comparison results for mismatches.
///
/// Every successful product is compared element-wise against the first one;
/// a difference above `tolerance` is a mismatch.
pub fn analyze_comparison_results(
    results: &[MultiplicationResult],
    tolerance: f64,
) -> Result<(), MatrixError> {
    let mut valid = results
        .iter()
        .filter_map(|r| r.product().map(|p| (r.algorithm.as_str(), p)));

    let Some((reference_name, reference)) = valid.next() else {
        return Err(MatrixError::Calculation("no valid results".into()));
    };

    for (name, product) in valid {
        let max_delta = reference.max_abs_diff(product).unwrap_or(f64::INFINITY);
        if max_delta.is_nan() || max_delta > tolerance {
            return Err(MatrixError::Mismatch {
                left: reference_name.to_string(),
                right: name.to_string(),
                max_delta,
            });
        }
    }

    Ok(())
}
