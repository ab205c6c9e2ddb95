//! Dense row-major matrices and borrowed views into them.
//!
//! `Matrix<T>` owns a contiguous buffer. `MatrixView<'a, T>` is a read-only
//! window into some matrix's buffer; the Strassen recursion addresses
//! quadrants through views so that only sums and differences are
//! materialized.

use std::fmt;
use std::ops::{Index, IndexMut};

use num_traits::{Float, Num};
use serde::{Deserialize, Serialize};

use crate::error::MatrixError;

/// Element types the multipliers operate on.
pub trait Scalar: Num + Copy + Send + Sync + fmt::Debug + 'static {}

impl<T> Scalar for T where T: Num + Copy + Send + Sync + fmt::Debug + 'static {}

/// Extent of a matrix in rows and columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    #[must_use]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    #[must_use]
    pub const fn is_square(self) -> bool {
        self.rows == self.cols
    }

    /// Number of elements, or `SizeOverflow` when it does not fit in `usize`.
    pub fn len(self) -> Result<usize, MatrixError> {
        self.rows
            .checked_mul(self.cols)
            .ok_or(MatrixError::SizeOverflow(self))
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Allocate a buffer of `len` copies of `value`, reporting allocator refusal.
pub(crate) fn alloc_filled<T: Copy>(len: usize, value: T) -> Result<Vec<T>, MatrixError> {
    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|_| MatrixError::Allocation { elements: len })?;
    data.resize(len, value);
    Ok(data)
}

/// Dense row-major matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "RawMatrix<T>",
    bound(deserialize = "T: Deserialize<'de>")
)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

#[derive(Deserialize)]
struct RawMatrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T> TryFrom<RawMatrix<T>> for Matrix<T> {
    type Error = MatrixError;

    fn try_from(raw: RawMatrix<T>) -> Result<Self, Self::Error> {
        let shape = Shape::new(raw.rows, raw.cols);
        if raw.data.len() != shape.len()? {
            return Err(MatrixError::DataLength {
                len: raw.data.len(),
                shape,
            });
        }
        Ok(Self {
            rows: raw.rows,
            cols: raw.cols,
            data: raw.data,
        })
    }
}

impl<T: Scalar> Matrix<T> {
    /// Create a zero-filled `rows x cols` matrix.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        let len = Shape::new(rows, cols).len()?;
        Ok(Self {
            rows,
            cols,
            data: alloc_filled(len, T::zero())?,
        })
    }

    /// Create a zero-filled `n x n` matrix.
    pub fn square(n: usize) -> Result<Self, MatrixError> {
        Self::zeros(n, n)
    }

    /// Create the `n x n` identity matrix.
    pub fn identity(n: usize) -> Result<Self, MatrixError> {
        let mut m = Self::square(n)?;
        for i in 0..n {
            m.data[i * n + i] = T::one();
        }
        Ok(m)
    }

    /// Create a matrix from row-major data.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, MatrixError> {
        Self::try_from(RawMatrix { rows, cols, data })
    }

    /// Create a matrix from a slice of rows.
    ///
    /// # Example
    /// ```
    /// use strassen_core::Matrix;
    ///
    /// let m = Matrix::from_rows(&[vec![1, 2], vec![3, 4]]).unwrap();
    /// assert_eq!(m[(1, 0)], 3);
    /// ```
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self, MatrixError> {
        let cols = rows.first().map_or(0, Vec::len);
        let len = Shape::new(rows.len(), cols).len()?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| MatrixError::Allocation { elements: len })?;
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(MatrixError::RaggedRows {
                    row: i,
                    expected: cols,
                    found: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    /// Create a matrix whose entry `(i, j)` is `f(i, j)`.
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Result<Self, MatrixError>
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut m = Self::zeros(rows, cols)?;
        for i in 0..rows {
            for j in 0..cols {
                m.data[i * cols + j] = f(i, j);
            }
        }
        Ok(m)
    }

    /// Read entry `(row, col)`.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.data[row * self.cols + col])
    }

    /// Write entry `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), MatrixError> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::IndexOutOfBounds {
                row,
                col,
                shape: self.shape(),
            });
        }
        self.data[row * self.cols + col] = value;
        Ok(())
    }

    /// Check whether every entry is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|x| x.is_zero())
    }
}

impl<T> Matrix<T> {
    /// Wrap a buffer already known to hold `rows * cols` elements.
    pub(crate) fn from_parts(rows: usize, cols: usize, data: Vec<T>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { rows, cols, data }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn shape(&self) -> Shape {
        Shape::new(self.rows, self.cols)
    }

    /// Dimension of a square matrix (its row count).
    #[must_use]
    pub fn dim(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Row-major backing data.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Borrow row `i`.
    #[must_use]
    pub fn row(&self, i: usize) -> &[T] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    pub(crate) fn row_mut(&mut self, i: usize) -> &mut [T] {
        &mut self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Copy the matrix out as nested rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        (0..self.rows).map(|i| self.row(i).to_vec()).collect()
    }

    /// Borrow the whole matrix as a view.
    #[must_use]
    pub fn view(&self) -> MatrixView<'_, T> {
        MatrixView {
            data: &self.data,
            stride: self.cols,
            row_offset: 0,
            col_offset: 0,
            rows: self.rows,
            cols: self.cols,
        }
    }
}

impl<T: Scalar + Float> Matrix<T> {
    /// Largest absolute entry-wise difference, `None` when shapes differ.
    #[must_use]
    pub fn max_abs_diff(&self, other: &Self) -> Option<T> {
        if self.shape() != other.shape() {
            return None;
        }
        Some(
            self.data
                .iter()
                .zip(&other.data)
                .map(|(&x, &y)| (x - y).abs())
                .fold(T::zero(), T::max),
        )
    }

    /// Compare entry-wise within an absolute tolerance.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tolerance: T) -> bool {
        self.max_abs_diff(other).is_some_and(|d| d <= tolerance)
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        &mut self.data[row * self.cols + col]
    }
}

/// Read-only rectangular window into a matrix buffer.
#[derive(Debug)]
pub struct MatrixView<'a, T> {
    data: &'a [T],
    stride: usize,
    row_offset: usize,
    col_offset: usize,
    rows: usize,
    cols: usize,
}

impl<T> Clone for MatrixView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for MatrixView<'_, T> {}

impl<'a, T> MatrixView<'a, T> {
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn shape(&self) -> Shape {
        Shape::new(self.rows, self.cols)
    }

    /// Borrow row `i` of the window.
    #[must_use]
    pub fn row(&self, i: usize) -> &'a [T] {
        assert!(i < self.rows, "row {i} out of bounds for {} rows", self.rows);
        let start = (self.row_offset + i) * self.stride + self.col_offset;
        &self.data[start..start + self.cols]
    }

    /// Sub-window of `rows x cols` starting at `(row, col)` of this window.
    #[must_use]
    pub fn window(&self, row: usize, col: usize, rows: usize, cols: usize) -> Self {
        assert!(
            row + rows <= self.rows && col + cols <= self.cols,
            "window out of bounds"
        );
        Self {
            data: self.data,
            stride: self.stride,
            row_offset: self.row_offset + row,
            col_offset: self.col_offset + col,
            rows,
            cols,
        }
    }
}

impl<T: Copy> MatrixView<'_, T> {
    /// Read entry `(row, col)` of the window.
    #[must_use]
    pub fn at(&self, row: usize, col: usize) -> T {
        assert!(col < self.cols, "column {col} out of bounds");
        self.row(row)[col]
    }
}

impl<T: Scalar> MatrixView<'_, T> {
    /// Copy the window into a freshly allocated matrix.
    pub fn to_matrix(&self) -> Result<Matrix<T>, MatrixError> {
        let len = self.shape().len()?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| MatrixError::Allocation { elements: len })?;
        for i in 0..self.rows {
            data.extend_from_slice(self.row(i));
        }
        Ok(Matrix::from_parts(self.rows, self.cols, data))
    }
}
