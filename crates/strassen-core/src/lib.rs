//! # strassen-core
//!
//! Core library for Strassen-rs: dense matrices, quadrant views, and
//! Strassen's seven-product recursive multiplication, with a naive
//! reference multiplier, cooperative cancellation, and progress observers.

pub mod constants;
pub mod error;
pub mod matrix;
pub mod multiplier;
pub mod observer;
pub mod observers;
pub mod ops;
pub mod options;
pub mod progress;
pub mod quadrant;
pub mod registry;
pub mod stats;
pub mod strassen;

// Re-exports
pub use constants::{
    exit_codes, DEFAULT_LEAF_SIZE, DEFAULT_PARALLEL_THRESHOLD, DEFAULT_TOLERANCE,
    PROGRESS_REPORT_THRESHOLD,
};
pub use error::MatrixError;
pub use matrix::{Matrix, MatrixView, Scalar, Shape};
pub use multiplier::{Multiplier, NaiveMultiplier};
pub use observer::ProgressObserver;
pub use options::Options;
pub use progress::{CancellationToken, ProgressUpdate};
pub use quadrant::{Quadrant, Quadrants};
pub use registry::{DefaultFactory, DynMultiplier, MultiplierFactory};
pub use stats::MultiplyStats;
pub use strassen::StrassenMultiplier;

/// Multiply two square power-of-two matrices with Strassen's algorithm.
///
/// This is a convenience function for simple use cases. For parallel
/// evaluation, cancellation, or progress reporting, use
/// `StrassenMultiplier` through the `Multiplier` trait.
///
/// # Example
/// ```
/// use strassen_core::Matrix;
///
/// let a = Matrix::from_rows(&[vec![1, 1], vec![0, 1]]).unwrap();
/// let b = Matrix::from_rows(&[vec![1, 2], vec![3, 4]]).unwrap();
/// let c = strassen_core::multiply(&a, &b).unwrap();
/// assert_eq!(c.to_rows(), vec![vec![4, 6], vec![3, 4]]);
/// ```
pub fn multiply<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
    StrassenMultiplier::default().multiply(
        a,
        b,
        &CancellationToken::new(),
        &observers::NoOpObserver::new(),
    )
}
