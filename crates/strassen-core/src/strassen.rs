//! Strassen's seven-product recursive multiplication.
//!
//! Each level splits both operands into quadrant views, forms the seven
//! operand pairs by quadrant addition/subtraction, multiplies them
//! recursively, and combines the products into the four result quadrants:
//!
//! ```text
//! q1 = (a11 + a22)(b11 + b22)     c11 = q1 + q4 - q5 + q7
//! q2 = (a21 + a22) b11            c12 = q3 + q5
//! q3 = a11 (b12 - b22)            c21 = q2 + q4
//! q4 = a22 (b21 - b11)            c22 = q1 + q3 - q2 + q6
//! q5 = (a11 + a12) b22
//! q6 = (a21 - a11)(b11 + b12)
//! q7 = (a12 - a22)(b21 + b22)
//! ```
//!
//! Quadrants of the operands are never copied; only the sums and
//! differences above are materialized. With `Options::parallel` the seven
//! products of a level run on the rayon pool and the combination waits for
//! all of them.

use rayon::prelude::*;
use tracing::{debug, trace, warn};

use crate::constants::STRASSEN_PRODUCTS;
use crate::error::MatrixError;
use crate::matrix::{alloc_filled, Matrix, MatrixView, Scalar};
use crate::multiplier::{check_square_pair, Multiplier};
use crate::observer::{ProgressObserver, ProgressTracker};
use crate::ops::{add_views, naive_views, sub_views};
use crate::options::Options;
use crate::progress::CancellationToken;
use crate::quadrant::{Quadrant, QuadrantViews};
use crate::stats::{AtomicMultiplyStats, MultiplyStats};

/// The seven Strassen products of one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Product {
    Q1,
    Q2,
    Q3,
    Q4,
    Q5,
    Q6,
    Q7,
}

const PRODUCTS: [Product; 7] = [
    Product::Q1,
    Product::Q2,
    Product::Q3,
    Product::Q4,
    Product::Q5,
    Product::Q6,
    Product::Q7,
];

/// A product operand: a bare quadrant or a materialized sum/difference.
enum Operand<'a, T> {
    Borrowed(MatrixView<'a, T>),
    Owned(Matrix<T>),
}

impl<T> Operand<'_, T> {
    fn view(&self) -> MatrixView<'_, T> {
        match self {
            Operand::Borrowed(v) => *v,
            Operand::Owned(m) => m.view(),
        }
    }
}

impl Product {
    fn operands<'a, T: Scalar>(
        self,
        a: &QuadrantViews<'a, T>,
        b: &QuadrantViews<'a, T>,
    ) -> Result<(Operand<'a, T>, Operand<'a, T>), MatrixError> {
        use Operand::{Borrowed, Owned};

        Ok(match self {
            Product::Q1 => (Owned(add_views(a.q11, a.q22)?), Owned(add_views(b.q11, b.q22)?)),
            Product::Q2 => (Owned(add_views(a.q21, a.q22)?), Borrowed(b.q11)),
            Product::Q3 => (Borrowed(a.q11), Owned(sub_views(b.q12, b.q22)?)),
            Product::Q4 => (Borrowed(a.q22), Owned(sub_views(b.q21, b.q11)?)),
            Product::Q5 => (Owned(add_views(a.q11, a.q12)?), Borrowed(b.q22)),
            Product::Q6 => (Owned(sub_views(a.q21, a.q11)?), Owned(add_views(b.q11, b.q12)?)),
            Product::Q7 => (Owned(sub_views(a.q12, a.q22)?), Owned(add_views(b.q21, b.q22)?)),
        })
    }
}

/// Per-call state shared by every level of one multiplication.
struct Run<'r> {
    cancel: &'r CancellationToken,
    tracker: &'r ProgressTracker<'r>,
}

/// Strassen multiplier for square power-of-two matrices.
///
/// # Example
/// ```
/// use strassen_core::observers::NoOpObserver;
/// use strassen_core::progress::CancellationToken;
/// use strassen_core::{Matrix, Multiplier, Options, StrassenMultiplier};
///
/// let a = Matrix::from_rows(&[vec![1.0, 1.0], vec![0.0, 1.0]]).unwrap();
/// let b = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
/// let strassen = StrassenMultiplier::new(Options::default());
/// let c = strassen
///     .multiply(&a, &b, &CancellationToken::new(), &NoOpObserver::new())
///     .unwrap();
/// assert_eq!(c.to_rows(), vec![vec![4.0, 6.0], vec![3.0, 4.0]]);
/// ```
pub struct StrassenMultiplier {
    options: Options,
    stats: AtomicMultiplyStats,
}

impl StrassenMultiplier {
    /// Create a multiplier; zero-valued options fall back to defaults.
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self {
            options: options.normalize(),
            stats: AtomicMultiplyStats::new(),
        }
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Clear the accumulated statistics.
    pub fn reset_stats(&self) {
        self.stats.reset();
    }

    fn label(&self) -> &'static str {
        if self.options.parallel {
            "ParallelStrassen"
        } else {
            "Strassen"
        }
    }

    fn multiply_views<T: Scalar>(
        &self,
        a: MatrixView<'_, T>,
        b: MatrixView<'_, T>,
        depth: u64,
        run: &Run<'_>,
    ) -> Result<Matrix<T>, MatrixError> {
        self.stats.record_call(depth);
        let n = a.rows();

        if n == 1 {
            self.stats.record_scalar();
            return Ok(Matrix::from_parts(
                1,
                1,
                alloc_filled(1, a.at(0, 0) * b.at(0, 0))?,
            ));
        }
        if n <= self.options.leaf_size {
            self.stats.record_leaf();
            return naive_views(a, b);
        }

        run.cancel.check_cancelled()?;
        trace!(depth, dim = n, "Descending into Strassen level");

        let qa = QuadrantViews::of(a);
        let qb = QuadrantViews::of(b);
        let product = |p: &Product| -> Result<Matrix<T>, MatrixError> {
            let (left, right) = p.operands(&qa, &qb)?;
            let q = self.multiply_views(left.view(), right.view(), depth + 1, run)?;
            if depth == 0 {
                run.tracker.advance();
            }
            Ok(q)
        };

        let products: Vec<Matrix<T>> =
            if self.options.parallel && n >= self.options.parallel_threshold {
                PRODUCTS.par_iter().map(product).collect::<Result<_, _>>()?
            } else {
                PRODUCTS.iter().map(product).collect::<Result<_, _>>()?
            };

        // Products finished after a cancel are discarded rather than combined.
        run.cancel.check_cancelled()?;
        combine(&products, n)
    }
}

impl Default for StrassenMultiplier {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

/// Combine the seven products into the four quadrants of an `n x n` result.
fn combine<T: Scalar>(products: &[Matrix<T>], n: usize) -> Result<Matrix<T>, MatrixError> {
    let [q1, q2, q3, q4, q5, q6, q7] = products else {
        return Err(MatrixError::Calculation(format!(
            "expected {STRASSEN_PRODUCTS} products, got {}",
            products.len()
        )));
    };

    let mut out = Matrix::square(n)?;
    out.fill_quadrant(Quadrant::TopLeft, |i, j| {
        q1[(i, j)] + q4[(i, j)] - q5[(i, j)] + q7[(i, j)]
    });
    out.fill_quadrant(Quadrant::TopRight, |i, j| q3[(i, j)] + q5[(i, j)]);
    out.fill_quadrant(Quadrant::BottomLeft, |i, j| q2[(i, j)] + q4[(i, j)]);
    out.fill_quadrant(Quadrant::BottomRight, |i, j| {
        q1[(i, j)] + q3[(i, j)] - q2[(i, j)] + q6[(i, j)]
    });
    Ok(out)
}

impl<T: Scalar> Multiplier<T> for StrassenMultiplier {
    fn multiply(
        &self,
        a: &Matrix<T>,
        b: &Matrix<T>,
        cancel: &CancellationToken,
        observer: &dyn ProgressObserver,
    ) -> Result<Matrix<T>, MatrixError> {
        let n = check_square_pair(a, b)?;
        if !n.is_power_of_two() {
            return Err(MatrixError::NotPowerOfTwo(n));
        }

        debug!(
            algorithm = self.label(),
            dim = n,
            leaf_size = self.options.leaf_size,
            parallel_threshold = self.options.parallel_threshold,
            "Starting Strassen multiplication"
        );

        let tracker = ProgressTracker::new(observer, self.label(), STRASSEN_PRODUCTS);
        let run = Run {
            cancel,
            tracker: &tracker,
        };
        let result = self.multiply_views(a.view(), b.view(), 0, &run);

        match &result {
            Ok(_) => tracker.finish(),
            Err(e @ (MatrixError::Cancelled | MatrixError::Timeout(_))) => {
                warn!(algorithm = self.label(), dim = n, error = %e, "Strassen multiplication aborted");
            }
            Err(_) => {}
        }
        result
    }

    fn name(&self) -> &'static str {
        self.label()
    }

    fn stats(&self) -> Option<MultiplyStats> {
        Some(self.stats.snapshot())
    }
}
