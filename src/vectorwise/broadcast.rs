//! Lazy extension of a vector to a full matrix shape

use super::Direction;
use crate::error::{Error, Result};
use crate::expr::MatrixExpr;
use tracing::debug;

/// A vector operand logically replicated to `rows x cols`
///
/// The operand holds one entry per subvector of the target: for
/// `Vertical` one per column, for `Horizontal` one per row. Coefficient
/// `(r, c)` is `operand[c]` or `operand[r]` respectively. Construction is
/// O(1) and the operand is never copied; it may be a row or a column vector.
#[derive(Clone, Debug)]
pub struct Broadcast<V> {
    operand: V,
    direction: Direction,
    rows: usize,
    cols: usize,
}

impl<V: MatrixExpr> Broadcast<V> {
    /// Extend `operand` to `rows x cols` along `direction`
    ///
    /// Returns `NotAVector` when the operand is not 1-D and `ShapeMismatch`
    /// when its length differs from the number of subvectors.
    pub fn new(operand: V, direction: Direction, rows: usize, cols: usize) -> Result<Self> {
        check_operand(&operand, direction, rows, cols)?;
        Ok(Self {
            operand,
            direction,
            rows,
            cols,
        })
    }

    /// The vector being broadcast
    pub fn operand(&self) -> &V {
        &self.operand
    }

    /// Broadcast axis
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

/// Validate a broadcast operand for a `rows x cols` target
///
/// Returns the operand length on success.
pub(crate) fn check_operand<V: MatrixExpr>(
    operand: &V,
    direction: Direction,
    rows: usize,
    cols: usize,
) -> Result<usize> {
    if !operand.is_vector() {
        debug!(
            %direction,
            operand_rows = operand.rows(),
            operand_cols = operand.cols(),
            "broadcast operand is not a vector"
        );
        return Err(Error::NotAVector {
            rows: operand.rows(),
            cols: operand.cols(),
        });
    }
    let expected = direction.subvector_count(rows, cols);
    if operand.size() != expected {
        debug!(
            %direction,
            expected,
            got = operand.size(),
            target_rows = rows,
            target_cols = cols,
            "broadcast operand length mismatch"
        );
        return Err(Error::shape_mismatch(&[expected], &[operand.size()]));
    }
    Ok(expected)
}

impl<V: MatrixExpr> MatrixExpr for Broadcast<V> {
    type Elem = V::Elem;

    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn coeff(&self, row: usize, col: usize) -> V::Elem {
        self.operand
            .coeff_linear(self.direction.lane_index(row, col))
    }

    fn coeff_read_cost(&self) -> usize {
        self.operand.coeff_read_cost()
    }
}
