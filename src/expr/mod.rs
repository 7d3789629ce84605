//! Lazy matrix expressions
//!
//! Everything that can be read coefficient by coefficient implements
//! [`MatrixExpr`]: an owned [`Matrix`], a borrowed one, a partial reduction,
//! a broadcast, and the adaptors in this module. Nothing is computed until a
//! coefficient is read or the expression is evaluated.
//!
//! ```text
//! expr
//!   ├── MatrixExpr   (rows, cols, coeff, coeff_read_cost + provided helpers)
//!   ├── CwiseBinary  (coefficient-wise BinaryOp of two equally shaped exprs)
//!   ├── Replicate    (tile an expr row_factor x col_factor times)
//!   ├── Reverse      (flip each column or each row)
//!   ├── Transpose    (swap rows and columns)
//!   └── Nested       (cost-driven choice between lazy reads and a temporary)
//! ```

mod binary;
mod nested;
mod replicate;
mod reverse;
mod transpose;

pub use binary::CwiseBinary;
pub use nested::Nested;
pub use replicate::Replicate;
pub use reverse::Reverse;
pub use transpose::Transpose;

use crate::dtype::Scalar;
use crate::error::{Error, Result};
use crate::matrix::{Lane, Matrix};
use crate::vectorwise::{Direction, VectorwiseOp};

/// A read-only, coefficient-addressable matrix expression
///
/// Implementors provide the shape, random access to coefficients, and a
/// static estimate of what one coefficient read costs. Everything else is
/// provided.
///
/// `coeff` must be pure: reading the same coordinate twice yields the same
/// value as long as the sources are not mutated.
pub trait MatrixExpr {
    /// Coefficient type
    type Elem: Scalar;

    /// Number of rows
    fn rows(&self) -> usize;

    /// Number of columns
    fn cols(&self) -> usize;

    /// Coefficient at `(row, col)`
    ///
    /// Callers keep `row < rows()` and `col < cols()`; implementations may
    /// panic otherwise.
    fn coeff(&self, row: usize, col: usize) -> Self::Elem;

    /// Estimated cost of one [`coeff`](Self::coeff) call
    fn coeff_read_cost(&self) -> usize;

    /// Shape as `[rows, cols]`
    fn shape(&self) -> [usize; 2] {
        [self.rows(), self.cols()]
    }

    /// Total number of coefficients
    fn size(&self) -> usize {
        self.rows() * self.cols()
    }

    /// Whether the expression is a single row or a single column
    fn is_vector(&self) -> bool {
        self.rows() == 1 || self.cols() == 1
    }

    /// Coefficient `i` of a vector expression
    ///
    /// Row vectors are indexed along their columns, column vectors along
    /// their rows.
    fn coeff_linear(&self, i: usize) -> Self::Elem {
        if self.rows() == 1 {
            self.coeff(0, i)
        } else {
            self.coeff(i, 0)
        }
    }

    /// Bounds-checked coefficient read
    fn try_coeff(&self, row: usize, col: usize) -> Result<Self::Elem> {
        if row >= self.rows() {
            return Err(Error::IndexOutOfBounds {
                index: row,
                size: self.rows(),
            });
        }
        if col >= self.cols() {
            return Err(Error::IndexOutOfBounds {
                index: col,
                size: self.cols(),
            });
        }
        Ok(self.coeff(row, col))
    }

    /// Materialize the expression into a row-major [`Matrix`]
    fn eval(&self) -> Matrix<Self::Elem>
    where
        Self: Sized,
    {
        Matrix::from_expr(self)
    }

    /// Coefficients in row-major order
    fn to_vec(&self) -> Vec<Self::Elem> {
        let mut out = Vec::with_capacity(self.size());
        for r in 0..self.rows() {
            for c in 0..self.cols() {
                out.push(self.coeff(r, c));
            }
        }
        out
    }

    /// Subvector `index` in `direction` as a lane
    fn lane(&self, direction: Direction, index: usize) -> Lane<'_, Self> {
        Lane::new(self, direction, index)
    }

    /// Column-by-column view of the expression
    ///
    /// ```
    /// use vecwise::prelude::*;
    /// let a = Matrix::from_slice(&[1, 2, 3, 4], 2, 2);
    /// assert_eq!(a.colwise().sum().to_vec(), vec![4, 6]);
    /// ```
    fn colwise(&self) -> VectorwiseOp<&Self> {
        VectorwiseOp::new(self, Direction::Vertical)
    }

    /// Row-by-row view of the expression
    fn rowwise(&self) -> VectorwiseOp<&Self> {
        VectorwiseOp::new(self, Direction::Horizontal)
    }

    /// Vectorwise view in an explicit direction
    fn vectorwise(&self, direction: Direction) -> VectorwiseOp<&Self> {
        VectorwiseOp::new(self, direction)
    }

    /// Column-by-column view that takes ownership of a temporary expression
    fn into_colwise(self) -> VectorwiseOp<Self>
    where
        Self: Sized,
    {
        VectorwiseOp::new(self, Direction::Vertical)
    }

    /// Row-by-row view that takes ownership of a temporary expression
    fn into_rowwise(self) -> VectorwiseOp<Self>
    where
        Self: Sized,
    {
        VectorwiseOp::new(self, Direction::Horizontal)
    }

    /// Lazy transpose
    fn transpose(&self) -> Transpose<&Self> {
        Transpose::new(self)
    }

    /// Lazily reverse every column (`Vertical`) or every row (`Horizontal`)
    fn reverse(&self, direction: Direction) -> Reverse<&Self> {
        Reverse::new(self, direction)
    }
}

impl<E: MatrixExpr + ?Sized> MatrixExpr for &E {
    type Elem = E::Elem;

    #[inline]
    fn rows(&self) -> usize {
        (**self).rows()
    }

    #[inline]
    fn cols(&self) -> usize {
        (**self).cols()
    }

    #[inline]
    fn coeff(&self, row: usize, col: usize) -> Self::Elem {
        (**self).coeff(row, col)
    }

    #[inline]
    fn coeff_read_cost(&self) -> usize {
        (**self).coeff_read_cost()
    }
}
