//! Common test utilities
#![allow(dead_code)]

use vecwise::matrix::Matrix;

/// Assert two f64 slices are close within tolerance
///
/// Uses the formula: |a - b| <= atol + rtol * |b|
pub fn assert_allclose_f64(a: &[f64], b: &[f64], rtol: f64, atol: f64, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={}, tol={})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}

/// Assert two f32 slices are close within tolerance
pub fn assert_allclose_f32(a: &[f32], b: &[f32], rtol: f32, atol: f32, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={}, tol={})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}

/// The 2x2 matrix [[1, 2], [3, 4]]
pub fn square_2x2() -> Matrix<f64> {
    Matrix::from_slice(&[1.0, 2.0, 3.0, 4.0], 2, 2)
}

/// A 3x4 matrix with coefficient (r, c) = r * 4 + c + 1
pub fn counting_3x4() -> Matrix<f64> {
    Matrix::from_fn(3, 4, |r, c| (r * 4 + c + 1) as f64)
}

/// Reference column sums by direct indexing
pub fn naive_col_sums(a: &Matrix<f64>) -> Vec<f64> {
    (0..a.cols())
        .map(|c| (0..a.rows()).map(|r| a[(r, c)]).sum())
        .collect()
}

/// Reference row sums by direct indexing
pub fn naive_row_sums(a: &Matrix<f64>) -> Vec<f64> {
    (0..a.rows())
        .map(|r| (0..a.cols()).map(|c| a[(r, c)]).sum())
        .collect()
}
