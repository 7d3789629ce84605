//! Coefficient-wise binary expressions

use super::MatrixExpr;
use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::ops::BinaryOp;

/// `op(lhs[r][c], rhs[r][c])` for two expressions of the same shape
#[derive(Clone, Debug)]
pub struct CwiseBinary<L, R> {
    lhs: L,
    rhs: R,
    op: BinaryOp,
}

impl<L, R> CwiseBinary<L, R>
where
    L: MatrixExpr,
    R: MatrixExpr<Elem = L::Elem>,
    L::Elem: Element,
{
    /// Combine `lhs` and `rhs` coefficient by coefficient
    ///
    /// Returns `ShapeMismatch` unless both operands have the same shape.
    pub fn new(lhs: L, rhs: R, op: BinaryOp) -> Result<Self> {
        if lhs.shape() != rhs.shape() {
            return Err(Error::shape_mismatch(&lhs.shape(), &rhs.shape()));
        }
        Ok(Self { lhs, rhs, op })
    }

    /// Left operand
    pub fn lhs(&self) -> &L {
        &self.lhs
    }

    /// Right operand
    pub fn rhs(&self) -> &R {
        &self.rhs
    }

    /// The operator
    pub fn op(&self) -> BinaryOp {
        self.op
    }
}

impl<L, R> MatrixExpr for CwiseBinary<L, R>
where
    L: MatrixExpr,
    R: MatrixExpr<Elem = L::Elem>,
    L::Elem: Element,
{
    type Elem = L::Elem;

    fn rows(&self) -> usize {
        self.lhs.rows()
    }

    fn cols(&self) -> usize {
        self.lhs.cols()
    }

    #[inline]
    fn coeff(&self, row: usize, col: usize) -> L::Elem {
        self.op
            .apply(self.lhs.coeff(row, col), self.rhs.coeff(row, col))
    }

    fn coeff_read_cost(&self) -> usize {
        self.lhs.coeff_read_cost() + self.rhs.coeff_read_cost() + self.op.cost::<L::Elem>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::Matrix;

    #[test]
    fn test_cwise_sub() {
        let a = Matrix::from_slice(&[5, 6, 7, 8], 2, 2);
        let b = Matrix::from_slice(&[1, 2, 3, 4], 2, 2);
        let d = CwiseBinary::new(&a, &b, BinaryOp::Sub).unwrap();
        assert_eq!(d.to_vec(), vec![4, 4, 4, 4]);
        assert_eq!(d.coeff_read_cost(), 3);
    }

    #[test]
    fn test_cwise_shape_mismatch() {
        let a = Matrix::<f32>::zeros(2, 2);
        let b = Matrix::<f32>::zeros(2, 3);
        let err = CwiseBinary::new(&a, &b, BinaryOp::Add).unwrap_err();
        assert_eq!(err, Error::shape_mismatch(&[2, 2], &[2, 3]));
    }
}
