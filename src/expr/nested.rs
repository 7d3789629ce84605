//! Cost-driven nesting of a sub-expression

use super::MatrixExpr;
use crate::dtype::Scalar;
use crate::matrix::Matrix;
use tracing::trace;

/// A sub-expression held either lazily or as an evaluated temporary
///
/// A parent that reads each coefficient of its child `reads` times nests the
/// child through [`Nested::new`]. The child is materialized when
///
/// ```text
/// (reads + 1) * READ_COST  <=  (reads - 1) * child.coeff_read_cost()
/// ```
///
/// i.e. when one evaluation pass plus `reads` plain reads is no dearer than
/// `reads` lazy reads. Plain matrices never satisfy this and stay lazy.
#[derive(Clone, Debug)]
pub enum Nested<E: MatrixExpr> {
    /// Coefficients are read through the expression every time
    Lazy(E),
    /// The expression was evaluated once into a temporary
    Evaluated(Matrix<E::Elem>),
}

impl<E: MatrixExpr> Nested<E> {
    /// Nest `expr` for a parent reading each coefficient `reads` times
    pub fn new(expr: E, reads: usize) -> Self {
        let read_cost = expr.coeff_read_cost();
        if should_evaluate::<E::Elem>(reads, read_cost) {
            trace!(
                reads,
                read_cost,
                rows = expr.rows(),
                cols = expr.cols(),
                "evaluating nested expression into a temporary"
            );
            Self::Evaluated(Matrix::from_expr(&expr))
        } else {
            Self::Lazy(expr)
        }
    }

    /// Whether the sub-expression was materialized
    pub fn is_evaluated(&self) -> bool {
        matches!(self, Self::Evaluated(_))
    }
}

/// The nesting rule for a child of cost `read_cost` read `reads` times
fn should_evaluate<T: Scalar>(reads: usize, read_cost: usize) -> bool {
    let cost_eval = (reads + 1) * T::READ_COST;
    let cost_no_eval = reads.saturating_sub(1) * read_cost;
    cost_eval <= cost_no_eval
}

impl<E: MatrixExpr> MatrixExpr for Nested<E> {
    type Elem = E::Elem;

    fn rows(&self) -> usize {
        match self {
            Self::Lazy(e) => e.rows(),
            Self::Evaluated(m) => m.rows(),
        }
    }

    fn cols(&self) -> usize {
        match self {
            Self::Lazy(e) => e.cols(),
            Self::Evaluated(m) => m.cols(),
        }
    }

    #[inline]
    fn coeff(&self, row: usize, col: usize) -> E::Elem {
        match self {
            Self::Lazy(e) => e.coeff(row, col),
            Self::Evaluated(m) => m[(row, col)],
        }
    }

    fn coeff_read_cost(&self) -> usize {
        match self {
            Self::Lazy(e) => e.coeff_read_cost(),
            Self::Evaluated(_) => E::Elem::READ_COST,
        }
    }
}
