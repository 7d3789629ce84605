//! Lazy partial reduction view

use super::Direction;
use crate::error::{Error, Result};
use crate::expr::MatrixExpr;
use crate::matrix::Lane;
use crate::ops::Reducer;
use tracing::debug;

/// Each column (`Vertical`) or each row (`Horizontal`) of `src` reduced to
/// one coefficient by `functor`
///
/// For an `M x N` source the view is `1 x N` when vertical and `M x 1` when
/// horizontal. Nothing is cached: every [`coeff`](MatrixExpr::coeff) call
/// runs the functor over the current contents of the source subvector.
///
/// Reading one coefficient costs
/// `len * src.coeff_read_cost() + functor.cost(len)` where `len` is the
/// subvector length.
#[derive(Clone, Debug)]
pub struct PartialRedux<E, F> {
    src: E,
    functor: F,
    direction: Direction,
}

impl<E, F> PartialRedux<E, F>
where
    E: MatrixExpr,
    F: Reducer<E::Elem>,
{
    /// Bind `functor` to the subvectors of `src` in `direction`
    ///
    /// Returns `DegenerateInput` when the functor has no identity element
    /// and the subvectors are empty.
    pub fn new(src: E, functor: F, direction: Direction) -> Result<Self> {
        let op = functor.op();
        let len = direction.subvector_len(src.rows(), src.cols());
        if len == 0 && op.requires_nonempty() {
            debug!(
                %op,
                %direction,
                rows = src.rows(),
                cols = src.cols(),
                "partial reduction over empty subvectors"
            );
            return Err(Error::degenerate(op, len));
        }
        Ok(Self {
            src,
            functor,
            direction,
        })
    }

    /// Constructor for functors with an identity element
    pub(crate) fn with_identity(src: E, functor: F, direction: Direction) -> Self {
        debug_assert!(!functor.op().requires_nonempty());
        Self {
            src,
            functor,
            direction,
        }
    }

    /// The source expression
    pub fn source(&self) -> &E {
        &self.src
    }

    /// The reduction functor
    pub fn functor(&self) -> &F {
        &self.functor
    }

    /// Axis being reduced
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Length of each reduced subvector
    pub fn subvector_len(&self) -> usize {
        self.direction
            .subvector_len(self.src.rows(), self.src.cols())
    }

    #[inline]
    fn reduce_lane(&self, index: usize) -> F::Output {
        let lane = Lane::new(&self.src, self.direction, index);
        self.functor.reduce(lane.iter())
    }
}

impl<E, F> MatrixExpr for PartialRedux<E, F>
where
    E: MatrixExpr,
    F: Reducer<E::Elem>,
{
    type Elem = F::Output;

    fn rows(&self) -> usize {
        self.direction
            .reduced_shape(self.src.rows(), self.src.cols())
            .0
    }

    fn cols(&self) -> usize {
        self.direction
            .reduced_shape(self.src.rows(), self.src.cols())
            .1
    }

    /// Reduce the subvector addressed by `(row, col)`
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is outside the `1 x N` or `M x 1` result.
    fn coeff(&self, row: usize, col: usize) -> F::Output {
        let (index, other) = match self.direction {
            Direction::Vertical => (col, row),
            Direction::Horizontal => (row, col),
        };
        assert!(
            other == 0,
            "coefficient ({row}, {col}) out of bounds for {}x{} partial reduction",
            self.rows(),
            self.cols()
        );
        self.reduce_lane(index)
    }

    fn coeff_read_cost(&self) -> usize {
        let len = self.subvector_len();
        len * self.src.coeff_read_cost() + self.functor.cost(len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::Matrix;
    use crate::ops::{MaxCoeff, ReduceOp, Sum};

    #[test]
    fn test_shapes() {
        let a = Matrix::from_slice(&[1, 2, 3, 4, 5, 6], 2, 3);
        let v = PartialRedux::with_identity(&a, Sum, Direction::Vertical);
        assert_eq!(v.shape(), [1, 3]);
        assert_eq!(v.to_vec(), vec![5, 7, 9]);

        let h = PartialRedux::with_identity(&a, Sum, Direction::Horizontal);
        assert_eq!(h.shape(), [2, 1]);
        assert_eq!(h.to_vec(), vec![6, 15]);
        assert_eq!(h.coeff_linear(1), 15);
    }

    #[test]
    fn test_degenerate_rejected_at_construction() {
        let a = Matrix::<f64>::zeros(0, 3);
        let err = PartialRedux::new(&a, MaxCoeff, Direction::Vertical).unwrap_err();
        assert_eq!(err, Error::degenerate(ReduceOp::Max, 0));
        // Rows of a 0x3 matrix have length 3
        assert!(PartialRedux::new(&a, MaxCoeff, Direction::Horizontal).is_ok());
    }

    #[test]
    fn test_declared_cost() {
        let a = Matrix::<f64>::zeros(4, 2);
        let v = PartialRedux::with_identity(&a, Sum, Direction::Vertical);
        // 4 reads + 3 additions
        assert_eq!(v.coeff_read_cost(), 7);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_coeff_out_of_range() {
        let a = Matrix::from_slice(&[1, 2, 3, 4], 2, 2);
        let v = PartialRedux::with_identity(&a, Sum, Direction::Vertical);
        let _ = v.coeff(1, 0);
    }
}
