//! Multiplier trait and the naive reference multiplier.
//!
//! `Multiplier` is the narrow interface consumed by orchestration.
//! `NaiveMultiplier` is the conventional triple loop, used as the oracle
//! the Strassen recursion is checked against.

use crate::error::MatrixError;
use crate::matrix::{alloc_filled, Matrix, Scalar, Shape};
use crate::observer::{ProgressObserver, ProgressTracker};
use crate::ops::product_row;
use crate::progress::CancellationToken;
use crate::stats::MultiplyStats;

/// Public trait for square-matrix multipliers, consumed by orchestration.
pub trait Multiplier<T: Scalar>: Send + Sync {
    /// Compute `a × b` into a freshly allocated matrix.
    fn multiply(
        &self,
        a: &Matrix<T>,
        b: &Matrix<T>,
        cancel: &CancellationToken,
        observer: &dyn ProgressObserver,
    ) -> Result<Matrix<T>, MatrixError>;

    /// Get the name of this multiplier.
    fn name(&self) -> &'static str;

    /// Accumulated work counters, if the multiplier keeps any.
    fn stats(&self) -> Option<MultiplyStats> {
        None
    }
}

/// Validate that `a` and `b` are square and of equal dimension.
pub(crate) fn check_square_pair<T>(a: &Matrix<T>, b: &Matrix<T>) -> Result<usize, MatrixError> {
    if !a.is_square() {
        return Err(MatrixError::NotSquare(a.shape()));
    }
    if !b.is_square() {
        return Err(MatrixError::NotSquare(b.shape()));
    }
    if a.dim() != b.dim() {
        return Err(MatrixError::Shape {
            op: "multiply",
            left: a.shape(),
            right: b.shape(),
        });
    }
    Ok(a.dim())
}

/// Conventional row-by-row multiplier.
pub struct NaiveMultiplier;

impl NaiveMultiplier {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for NaiveMultiplier {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> Multiplier<T> for NaiveMultiplier {
    fn multiply(
        &self,
        a: &Matrix<T>,
        b: &Matrix<T>,
        cancel: &CancellationToken,
        observer: &dyn ProgressObserver,
    ) -> Result<Matrix<T>, MatrixError> {
        let n = check_square_pair(a, b)?;
        let len = Shape::new(n, n).len()?;
        let mut out = Matrix::from_parts(n, n, alloc_filled(len, T::zero())?);
        let tracker = ProgressTracker::new(observer, "Naive", n as u64);
        let bv = b.view();
        for i in 0..n {
            cancel.check_cancelled()?;
            product_row(a.row(i), bv, out.row_mut(i));
            tracker.advance();
        }
        tracker.finish();
        Ok(out)
    }

    fn name(&self) -> &'static str {
        "Naive"
    }
}
