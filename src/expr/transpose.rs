//! Lazy transpose

use super::MatrixExpr;

/// `src` with rows and columns swapped
#[derive(Clone, Debug)]
pub struct Transpose<E> {
    src: E,
}

impl<E: MatrixExpr> Transpose<E> {
    /// Wrap `src`
    pub fn new(src: E) -> Self {
        Self { src }
    }

    /// The wrapped expression
    pub fn into_inner(self) -> E {
        self.src
    }
}

impl<E: MatrixExpr> MatrixExpr for Transpose<E> {
    type Elem = E::Elem;

    fn rows(&self) -> usize {
        self.src.cols()
    }

    fn cols(&self) -> usize {
        self.src.rows()
    }

    #[inline]
    fn coeff(&self, row: usize, col: usize) -> E::Elem {
        self.src.coeff(col, row)
    }

    fn coeff_read_cost(&self) -> usize {
        self.src.coeff_read_cost()
    }
}
