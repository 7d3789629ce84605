//! Reversal of every column or every row

use super::MatrixExpr;
use crate::vectorwise::Direction;

/// Each subvector in `direction` read back to front
///
/// `Vertical` flips every column (`r -> rows - 1 - r`), `Horizontal` flips
/// every row (`c -> cols - 1 - c`).
#[derive(Clone, Debug)]
pub struct Reverse<E> {
    src: E,
    direction: Direction,
}

impl<E: MatrixExpr> Reverse<E> {
    /// Reverse the subvectors of `src` in `direction`
    pub fn new(src: E, direction: Direction) -> Self {
        Self { src, direction }
    }

    /// Direction being reversed
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl<E: MatrixExpr> MatrixExpr for Reverse<E> {
    type Elem = E::Elem;

    fn rows(&self) -> usize {
        self.src.rows()
    }

    fn cols(&self) -> usize {
        self.src.cols()
    }

    #[inline]
    fn coeff(&self, row: usize, col: usize) -> E::Elem {
        match self.direction {
            Direction::Vertical => self.src.coeff(self.src.rows() - 1 - row, col),
            Direction::Horizontal => self.src.coeff(row, self.src.cols() - 1 - col),
        }
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
    fn test_reverse() {
        let m = Matrix::from_slice(&[1, 2, 3, 4, 5, 6], 2, 3);
        assert_eq!(
            Reverse::new(&m, Direction::Vertical).to_vec(),
            vec![4, 5, 6, 1, 2, 3]
        );
        assert_eq!(
            Reverse::new(&m, Direction::Horizontal).to_vec(),
            vec![3, 2, 1, 6, 5, 4]
        );
    }
}
