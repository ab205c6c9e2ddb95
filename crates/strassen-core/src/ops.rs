//! Element-wise arithmetic and the conventional triple-loop product.

use crate::error::MatrixError;
use crate::matrix::{alloc_filled, Matrix, MatrixView, Scalar, Shape};

/// Entry-wise sum `a + b` of two identically-shaped matrices.
///
/// # Example
/// ```
/// use strassen_core::{ops, Matrix};
///
/// let a = Matrix::from_rows(&[vec![1, 2], vec![3, 4]]).unwrap();
/// let b = Matrix::identity(2).unwrap();
/// assert_eq!(ops::add(&a, &b).unwrap().to_rows(), vec![vec![2, 2], vec![3, 5]]);
/// ```
pub fn add<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
    add_views(a.view(), b.view())
}

/// Entry-wise difference `a - b` of two identically-shaped matrices.
pub fn sub<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
    sub_views(a.view(), b.view())
}

pub(crate) fn add_views<T: Scalar>(
    a: MatrixView<'_, T>,
    b: MatrixView<'_, T>,
) -> Result<Matrix<T>, MatrixError> {
    zip_views("add", a, b, |x, y| x + y)
}

pub(crate) fn sub_views<T: Scalar>(
    a: MatrixView<'_, T>,
    b: MatrixView<'_, T>,
) -> Result<Matrix<T>, MatrixError> {
    zip_views("sub", a, b, |x, y| x - y)
}

fn zip_views<T, F>(
    op: &'static str,
    a: MatrixView<'_, T>,
    b: MatrixView<'_, T>,
    f: F,
) -> Result<Matrix<T>, MatrixError>
where
    T: Scalar,
    F: Fn(T, T) -> T,
{
    if a.shape() != b.shape() {
        return Err(MatrixError::Shape {
            op,
            left: a.shape(),
            right: b.shape(),
        });
    }
    let len = a.shape().len()?;
    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|_| MatrixError::Allocation { elements: len })?;
    for i in 0..a.rows() {
        data.extend(a.row(i).iter().zip(b.row(i)).map(|(&x, &y)| f(x, y)));
    }
    Ok(Matrix::from_parts(a.rows(), a.cols(), data))
}

/// Accumulate row `a_row · b` into `out_row` (i-k-j order).
pub(crate) fn product_row<T: Scalar>(a_row: &[T], b: MatrixView<'_, T>, out_row: &mut [T]) {
    for (k, &a_ik) in a_row.iter().enumerate() {
        for (o, &b_kj) in out_row.iter_mut().zip(b.row(k)) {
            *o = *o + a_ik * b_kj;
        }
    }
}

pub(crate) fn naive_views<T: Scalar>(
    a: MatrixView<'_, T>,
    b: MatrixView<'_, T>,
) -> Result<Matrix<T>, MatrixError> {
    if a.cols() != b.rows() {
        return Err(MatrixError::Shape {
            op: "multiply",
            left: a.shape(),
            right: b.shape(),
        });
    }
    let len = Shape::new(a.rows(), b.cols()).len()?;
    let mut out = Matrix::from_parts(a.rows(), b.cols(), alloc_filled(len, T::zero())?);
    for i in 0..a.rows() {
        product_row(a.row(i), b, out.row_mut(i));
    }
    Ok(out)
}

/// Conventional O(n³) product `a × b`. Works for any conformable shapes.
pub fn naive_product<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
    naive_views(a.view(), b.view())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(rows: &[Vec<i64>]) -> Matrix<i64> {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn add_entrywise() {
        let a = m(&[vec![1, 2], vec![3, 4]]);
        let b = m(&[vec![10, 20], vec![30, 40]]);
        assert_eq!(add(&a, &b).unwrap().to_rows(), vec![vec![11, 22], vec![33, 44]]);
    }

    #[test]
    fn sub_entrywise() {
        let a = m(&[vec![1, 2], vec![3, 4]]);
        let b = m(&[vec![10, 20], vec![30, 40]]);
        assert_eq!(
            sub(&a, &b).unwrap().to_rows(),
            vec![vec![-9, -18], vec![-27, -36]]
        );
    }

    #[test]
    fn add_does_not_touch_operands() {
        let a = m(&[vec![1, 2], vec![3, 4]]);
        let b = a.clone();
        let _ = add(&a, &b).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn mismatched_shapes_are_rejected() {
        let a = Matrix::<f64>::square(2).unwrap();
        let b = Matrix::<f64>::square(4).unwrap();
        assert_eq!(
            add(&a, &b).unwrap_err(),
            MatrixError::Shape {
                op: "add",
                left: Shape::new(2, 2),
                right: Shape::new(4, 4)
            }
        );
        assert!(matches!(sub(&a, &b), Err(MatrixError::Shape { op: "sub", .. })));
    }

    #[test]
    fn views_over_quadrants() {
        let big = Matrix::from_fn(4, 4, |i, j| (i * 4 + j) as i64).unwrap();
        let v = big.view();
        let sum = add_views(v.window(0, 0, 2, 2), v.window(2, 2, 2, 2)).unwrap();
        assert_eq!(sum.to_rows(), vec![vec![10, 12], vec![18, 20]]);
    }

    #[test]
    fn naive_product_known_values() {
        let a = m(&[vec![1, 1], vec![0, 1]]);
        let b = m(&[vec![1, 2], vec![3, 4]]);
        assert_eq!(
            naive_product(&a, &b).unwrap().to_rows(),
            vec![vec![4, 6], vec![3, 4]]
        );
    }

    #[test]
    fn naive_product_rectangular() {
        let a = m(&[vec![1, 2, 3]]);
        let b = m(&[vec![1], vec![2], vec![3]]);
        assert_eq!(naive_product(&a, &b).unwrap().to_rows(), vec![vec![14]]);
    }

    #[test]
    fn naive_product_rejects_nonconformable() {
        let a = Matrix::<i64>::zeros(2, 3).unwrap();
        assert!(naive_product(&a, &a).unwrap_err().is_shape_error());
    }
}
