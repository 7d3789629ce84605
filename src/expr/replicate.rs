//! Tiling of an expression

use super::{MatrixExpr, Nested};
use crate::error::{Error, Result};

/// `row_factor x col_factor` copies of an expression laid out as a grid
///
/// Coefficient `(r, c)` is `src[r % rows][c % cols]`. The source is nested
/// for `row_factor * col_factor` reads, so an expensive source (such as a
/// partial reduction) is evaluated once instead of once per copy.
#[derive(Clone, Debug)]
pub struct Replicate<E: MatrixExpr> {
    src: Nested<E>,
    src_rows: usize,
    src_cols: usize,
    row_factor: usize,
    col_factor: usize,
}

impl<E: MatrixExpr> Replicate<E> {
    /// Tile `src` `row_factor` times vertically and `col_factor` times
    /// horizontally
    pub fn new(src: E, row_factor: usize, col_factor: usize) -> Result<Self> {
        let (src_rows, src_cols) = (src.rows(), src.cols());
        if src_rows.checked_mul(row_factor).is_none() || src_cols.checked_mul(col_factor).is_none()
        {
            return Err(Error::invalid_argument(
                "factor",
                format!("replicating {src_rows}x{src_cols} by {row_factor}x{col_factor} overflows"),
            ));
        }
        let reads = row_factor.saturating_mul(col_factor);
        Ok(Self {
            src: Nested::new(src, reads),
            src_rows,
            src_cols,
            row_factor,
            col_factor,
        })
    }

    /// Vertical replication factor
    pub fn row_factor(&self) -> usize {
        self.row_factor
    }

    /// Horizontal replication factor
    pub fn col_factor(&self) -> usize {
        self.col_factor
    }

    /// Whether the source was evaluated into a temporary
    pub fn is_source_evaluated(&self) -> bool {
        self.src.is_evaluated()
    }
}

impl<E: MatrixExpr> MatrixExpr for Replicate<E> {
    type Elem = E::Elem;

    fn rows(&self) -> usize {
        self.src_rows * self.row_factor
    }

    fn cols(&self) -> usize {
        self.src_cols * self.col_factor
    }

    #[inline]
    fn coeff(&self, row: usize, col: usize) -> E::Elem {
        self.src.coeff(row % self.src_rows, col % self.src_cols)
    }

    fn coeff_read_cost(&self) -> usize {
        self.src.coeff_read_cost()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::Matrix;

    #[test]
    fn test_replicate_grid() {
        let m = Matrix::from_slice(&[1, 2], 1, 2);
        let r = Replicate::new(&m, 2, 2).unwrap();
        assert_eq!(r.shape(), [2, 4]);
        assert_eq!(r.to_vec(), vec![1, 2, 1, 2, 1, 2, 1, 2]);
    }

    #[test]
    fn test_replicate_zero_factor() {
        let m = Matrix::from_slice(&[1, 2], 1, 2);
        let r = Replicate::new(&m, 0, 3).unwrap();
        assert_eq!(r.shape(), [0, 6]);
        assert!(r.to_vec().is_empty());
    }
}
