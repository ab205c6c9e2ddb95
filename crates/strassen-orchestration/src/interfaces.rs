//! Orchestration interfaces.

use std::time::Duration;

use strassen_core::{Matrix, MatrixError, MultiplyStats};

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present a successful multiplication.
    fn present_result(&self, result: &MultiplicationResult, product: &Matrix<f64>);

    /// Present a timing comparison of several multipliers.
    fn present_comparison(&self, results: &[MultiplicationResult]);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Result of a single multiplication run.
#[derive(Debug, Clone)]
pub struct MultiplicationResult {
    /// Multiplier name.
    pub algorithm: String,
    /// The product or a structured error.
    pub outcome: Result<Matrix<f64>, MatrixError>,
    /// Wall-clock duration of the run.
    pub duration: Duration,
    /// Counters reported by the multiplier after the run.
    pub stats: Option<MultiplyStats>,
}

impl MultiplicationResult {
    /// The product, if the run succeeded.
    #[must_use]
    pub fn product(&self) -> Option<&Matrix<f64>> {
        self.outcome.as_ref().ok()
    }
}
