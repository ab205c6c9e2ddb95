//! Property-based tests for the Strassen multiplier.
//!
//! These tests exercise the `Multiplier` trait directly and compare
//! every result against the conventional triple-loop product.

use proptest::prelude::*;

use strassen_core::observers::NoOpObserver;
use strassen_core::ops::{add, naive_product};
use strassen_core::progress::CancellationToken;
use strassen_core::{Matrix, MatrixError, Multiplier, Options, StrassenMultiplier};

fn strassen(m: &StrassenMultiplier, a: &Matrix<f64>, b: &Matrix<f64>) -> Matrix<f64> {
    m.multiply(a, b, &CancellationToken::new(), &NoOpObserver::new())
        .unwrap()
}

/// Square `2^k x 2^k` matrix with entries in [-100, 100].
fn square_matrix(k: u32) -> impl Strategy<Value = Matrix<f64>> {
    let n = 1usize << k;
    prop::collection::vec(-100.0f64..100.0, n * n)
        .prop_map(move |data| Matrix::from_vec(n, n, data).unwrap())
}

/// Pair of same-sized square matrices with `k` in `0..=4`.
fn matrix_pair() -> impl Strategy<Value = (Matrix<f64>, Matrix<f64>)> {
    (0u32..=4).prop_flat_map(|k| (square_matrix(k), square_matrix(k)))
}

fn tolerance(n: usize) -> f64 {
    // Entries are bounded by 100, so products are bounded by n * 10^4.
    1e-9 * 1e4 * n as f64
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Strassen agrees with the naive product for n = 1, 2, 4, 8, 16.
    #[test]
    fn strassen_matches_naive((a, b) in matrix_pair()) {
        let expected = naive_product(&a, &b).unwrap();
        let actual = strassen(&StrassenMultiplier::default(), &a, &b);
        prop_assert!(
            actual.approx_eq(&expected, tolerance(a.dim())),
            "n={} max delta {:?}", a.dim(), actual.max_abs_diff(&expected)
        );
    }

    /// Parallel evaluation computes the same matrix as sequential evaluation.
    #[test]
    fn parallel_matches_sequential((a, b) in matrix_pair()) {
        let parallel = StrassenMultiplier::new(Options {
            parallel: true,
            parallel_threshold: 2,
            ..Options::default()
        });
        let seq = strassen(&StrassenMultiplier::default(), &a, &b);
        let par = strassen(&parallel, &a, &b);
        prop_assert_eq!(seq, par);
    }

    /// A(B + C) = AB + AC.
    #[test]
    fn distributes_over_addition(
        (a, b, c) in (0u32..=3).prop_flat_map(|k| (square_matrix(k), square_matrix(k), square_matrix(k)))
    ) {
        let m = StrassenMultiplier::default();
        let lhs = strassen(&m, &a, &add(&b, &c).unwrap());
        let rhs = add(&strassen(&m, &a, &b), &strassen(&m, &a, &c)).unwrap();
        prop_assert!(lhs.approx_eq(&rhs, 2.0 * tolerance(a.dim())));
    }

    /// Multiplying by the identity on either side returns the operand.
    #[test]
    fn identity_is_neutral(a in (0u32..=4).prop_flat_map(square_matrix)) {
        let m = StrassenMultiplier::default();
        let id = Matrix::identity(a.dim()).unwrap();
        prop_assert!(strassen(&m, &a, &id).approx_eq(&a, 1e-9));
        prop_assert!(strassen(&m, &id, &a).approx_eq(&a, 1e-9));
    }

    /// Multiplying by the zero matrix on either side gives zero.
    #[test]
    fn zero_annihilates(a in (0u32..=4).prop_flat_map(square_matrix)) {
        let m = StrassenMultiplier::default();
        let zero = Matrix::square(a.dim()).unwrap();
        prop_assert!(strassen(&m, &a, &zero).is_zero());
        prop_assert!(strassen(&m, &zero, &a).is_zero());
    }

    /// [[a]] x [[b]] = [[a * b]].
    #[test]
    fn base_case(x in -1e6f64..1e6, y in -1e6f64..1e6) {
        let a = Matrix::from_vec(1, 1, vec![x]).unwrap();
        let b = Matrix::from_vec(1, 1, vec![y]).unwrap();
        let c = strassen(&StrassenMultiplier::default(), &a, &b);
        prop_assert_eq!(c.as_slice(), &[x * y][..]);
    }

    /// Splitting then assembling reproduces the matrix exactly.
    #[test]
    fn split_assemble_round_trip(a in (1u32..=4).prop_flat_map(square_matrix)) {
        let back = a.split().unwrap().assemble().unwrap();
        prop_assert_eq!(back, a);
    }

    /// Any leaf size produces the same product up to rounding.
    #[test]
    fn leaf_size_does_not_change_result((a, b) in matrix_pair(), leaf in 1usize..=16) {
        let leafy = StrassenMultiplier::new(Options { leaf_size: leaf, ..Options::default() });
        let expected = naive_product(&a, &b).unwrap();
        prop_assert!(strassen(&leafy, &a, &b).approx_eq(&expected, tolerance(a.dim())));
    }

    /// Non-power-of-two dimensions are shape errors, never partial results.
    #[test]
    fn non_power_of_two_rejected(n in 3usize..40) {
        prop_assume!(!n.is_power_of_two());
        let a = Matrix::<f64>::identity(n).unwrap();
        let result = StrassenMultiplier::default()
            .multiply(&a, &a, &CancellationToken::new(), &NoOpObserver::new());
        prop_assert_eq!(result, Err(MatrixError::NotPowerOfTwo(n)));
    }
}

/// [[1,1],[0,1]] x [[1,2],[3,4]] = [[4,6],[3,4]] by both routes.
#[test]
fn concrete_example_both_routes() {
    let a = Matrix::from_rows(&[vec![1.0, 1.0], vec![0.0, 1.0]]).unwrap();
    let b = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    let expected = vec![vec![4.0, 6.0], vec![3.0, 4.0]];
    assert_eq!(strassen_core::multiply(&a, &b).unwrap().to_rows(), expected);
    assert_eq!(naive_product(&a, &b).unwrap().to_rows(), expected);
}

/// A 3x3 operand against a 2x2 operand is a shape error.
#[test]
fn three_by_three_against_two_by_two() {
    let a = Matrix::<f64>::square(3).unwrap();
    let b = Matrix::<f64>::square(2).unwrap();
    let err = strassen_core::multiply(&a, &b).unwrap_err();
    assert!(err.is_shape_error(), "{err}");
}

/// The default demo input: two 4x4 matrices with entry (i, j) = i + j.
#[test]
fn index_sum_demo_matrices() {
    let a = Matrix::from_fn(4, 4, |i, j| (i + j) as f64).unwrap();
    let c = strassen_core::multiply(&a, &a).unwrap();
    assert_eq!(
        c.to_rows(),
        vec![
            vec![14.0, 20.0, 26.0, 32.0],
            vec![20.0, 30.0, 40.0, 50.0],
            vec![26.0, 40.0, 54.0, 68.0],
            vec![32.0, 50.0, 68.0, 86.0],
        ]
    );
}
