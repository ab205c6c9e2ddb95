//! Quadrant decomposition and reassembly.

use crate::error::MatrixError;
use crate::matrix::{alloc_filled, Matrix, MatrixView, Scalar, Shape};

/// One of the four equal-sized blocks of an even square matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quadrant {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
    ];

    /// Row and column offset of this quadrant for half-dimension `half`.
    #[must_use]
    pub const fn offset(self, half: usize) -> (usize, usize) {
        match self {
            Quadrant::TopLeft => (0, 0),
            Quadrant::TopRight => (0, half),
            Quadrant::BottomLeft => (half, 0),
            Quadrant::BottomRight => (half, half),
        }
    }
}

/// Owned quadrants of a matrix, each an independent copy.
#[derive(Debug, Clone, PartialEq)]
pub struct Quadrants<T> {
    pub top_left: Matrix<T>,
    pub top_right: Matrix<T>,
    pub bottom_left: Matrix<T>,
    pub bottom_right: Matrix<T>,
}

/// Borrowed quadrants of a square view.
#[derive(Debug, Clone, Copy)]
pub(crate) struct QuadrantViews<'a, T> {
    pub q11: MatrixView<'a, T>,
    pub q12: MatrixView<'a, T>,
    pub q21: MatrixView<'a, T>,
    pub q22: MatrixView<'a, T>,
}

impl<'a, T> QuadrantViews<'a, T> {
    /// Split an even square view into quadrant views without copying.
    pub(crate) fn of(view: MatrixView<'a, T>) -> Self {
        debug_assert_eq!(view.rows(), view.cols());
        debug_assert_eq!(view.rows() % 2, 0);
        let h = view.rows() / 2;
        let at = |q: Quadrant| {
            let (r, c) = q.offset(h);
            view.window(r, c, h, h)
        };
        Self {
            q11: at(Quadrant::TopLeft),
            q12: at(Quadrant::TopRight),
            q21: at(Quadrant::BottomLeft),
            q22: at(Quadrant::BottomRight),
        }
    }
}

fn check_splittable<T>(m: &Matrix<T>) -> Result<(), MatrixError> {
    if !m.is_square() {
        return Err(MatrixError::NotSquare(m.shape()));
    }
    let n = m.dim();
    if n == 0 || n % 2 != 0 {
        return Err(MatrixError::Indivisible(n));
    }
    Ok(())
}

impl<T: Scalar> Matrix<T> {
    /// Split an even square matrix into four independent quadrant copies.
    ///
    /// # Example
    /// ```
    /// use strassen_core::Matrix;
    ///
    /// let m = Matrix::from_rows(&[vec![1, 2], vec![3, 4]]).unwrap();
    /// let q = m.split().unwrap();
    /// assert_eq!(q.top_right[(0, 0)], 2);
    /// assert_eq!(q.assemble().unwrap(), m);
    /// ```
    pub fn split(&self) -> Result<Quadrants<T>, MatrixError> {
        check_splittable(self)?;
        let views = QuadrantViews::of(self.view());
        Ok(Quadrants {
            top_left: views.q11.to_matrix()?,
            top_right: views.q12.to_matrix()?,
            bottom_left: views.q21.to_matrix()?,
            bottom_right: views.q22.to_matrix()?,
        })
    }

    /// Overwrite quadrant `q` with `f(i, j)` for local indices `i, j < half`.
    pub(crate) fn fill_quadrant<F>(&mut self, q: Quadrant, mut f: F)
    where
        F: FnMut(usize, usize) -> T,
    {
        let half = self.dim() / 2;
        let (r0, c0) = q.offset(half);
        for i in 0..half {
            let row = &mut self.row_mut(r0 + i)[c0..c0 + half];
            for (j, slot) in row.iter_mut().enumerate() {
                *slot = f(i, j);
            }
        }
    }
}

impl<T: Scalar> Quadrants<T> {
    /// Dimension of each quadrant.
    #[must_use]
    pub fn half(&self) -> usize {
        self.top_left.dim()
    }

    #[must_use]
    pub fn get(&self, q: Quadrant) -> &Matrix<T> {
        match q {
            Quadrant::TopLeft => &self.top_left,
            Quadrant::TopRight => &self.top_right,
            Quadrant::BottomLeft => &self.bottom_left,
            Quadrant::BottomRight => &self.bottom_right,
        }
    }

    /// Place the quadrants into a freshly allocated `2h x 2h` matrix.
    pub fn assemble(self) -> Result<Matrix<T>, MatrixError> {
        let first = self.top_left.shape();
        if !first.is_square() {
            return Err(MatrixError::NotSquare(first));
        }
        for q in Quadrant::ALL {
            let shape = self.get(q).shape();
            if shape != first {
                return Err(MatrixError::Shape {
                    op: "assemble",
                    left: first,
                    right: shape,
                });
            }
        }

        let h = first.rows;
        let n = h * 2;
        let len = Shape::new(n, n).len()?;
        let mut out = Matrix::from_parts(n, n, alloc_filled(len, T::zero())?);
        for q in Quadrant::ALL {
            let src = self.get(q);
            out.fill_quadrant(q, |i, j| src[(i, j)]);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quadrant_offsets() {
        assert_eq!(Quadrant::TopLeft.offset(4), (0, 0));
        assert_eq!(Quadrant::TopRight.offset(4), (0, 4));
        assert_eq!(Quadrant::BottomLeft.offset(4), (4, 0));
        assert_eq!(Quadrant::BottomRight.offset(4), (4, 4));
    }

    #[test]
    fn split_copies_each_block() {
        let m = Matrix::from_fn(4, 4, |i, j| i * 4 + j).unwrap();
        let q = m.split().unwrap();
        assert_eq!(q.half(), 2);
        assert_eq!(q.top_left.to_rows(), vec![vec![0, 1], vec![4, 5]]);
        assert_eq!(q.top_right.to_rows(), vec![vec![2, 3], vec![6, 7]]);
        assert_eq!(q.bottom_left.to_rows(), vec![vec![8, 9], vec![12, 13]]);
        assert_eq!(q.bottom_right.to_rows(), vec![vec![10, 11], vec![14, 15]]);
    }

    #[test]
    fn split_quadrants_do_not_alias_source() {
        let m = Matrix::from_fn(2, 2, |i, j| (i + j) as i64).unwrap();
        let mut q = m.split().unwrap();
        q.top_left[(0, 0)] = 99;
        assert_eq!(m[(0, 0)], 0);
    }

    #[test]
    fn split_then_assemble_round_trips() {
        let m = Matrix::from_fn(8, 8, |i, j| (i * 31 + j * 7) as f64 * 0.5).unwrap();
        let back = m.split().unwrap().assemble().unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn split_rejects_odd_and_non_square() {
        let odd = Matrix::<f64>::square(3).unwrap();
        assert_eq!(odd.split().unwrap_err(), MatrixError::Indivisible(3));

        let one = Matrix::<f64>::square(1).unwrap();
        assert_eq!(one.split().unwrap_err(), MatrixError::Indivisible(1));

        let rect = Matrix::<f64>::zeros(2, 4).unwrap();
        assert!(matches!(rect.split(), Err(MatrixError::NotSquare(_))));
    }

    #[test]
    fn assemble_rejects_mismatched_quadrants() {
        let two = Matrix::<i32>::square(2).unwrap();
        let q = Quadrants {
            top_left: two.clone(),
            top_right: two.clone(),
            bottom_left: Matrix::square(1).unwrap(),
            bottom_right: two,
        };
        assert!(matches!(
            q.assemble(),
            Err(MatrixError::Shape { op: "assemble", .. })
        ));
    }

    #[test]
    fn quadrant_views_share_parent_buffer() {
        let m = Matrix::from_fn(4, 4, |i, j| i * 4 + j).unwrap();
        let v = QuadrantViews::of(m.view());
        assert_eq!(v.q12.row(1), &[6, 7]);
        assert_eq!(v.q21.at(0, 1), 9);
        assert_eq!(v.q22.at(1, 1), 15);
    }
}
