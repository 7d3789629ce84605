//! Subvector views: one column or one row of an expression

use super::Matrix;
use crate::dtype::Scalar;
use crate::expr::MatrixExpr;
use crate::vectorwise::Direction;

/// Read-only view of subvector `index` of an expression
///
/// A `Vertical` lane is a column, a `Horizontal` lane is a row. Coefficients
/// are read from the underlying expression on demand.
pub struct Lane<'a, E: ?Sized> {
    expr: &'a E,
    direction: Direction,
    index: usize,
    len: usize,
}

impl<E: ?Sized> Clone for Lane<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: ?Sized> Copy for Lane<'_, E> {}

impl<'a, E: MatrixExpr + ?Sized> Lane<'a, E> {
    /// View subvector `index` of `expr` in `direction`
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below the subvector count.
    pub fn new(expr: &'a E, direction: Direction, index: usize) -> Self {
        let count = direction.subvector_count(expr.rows(), expr.cols());
        assert!(
            index < count,
            "{direction} subvector {index} out of bounds ({count} subvectors)"
        );
        Self {
            expr,
            direction,
            index,
            len: direction.subvector_len(expr.rows(), expr.cols()),
        }
    }

    /// Number of coefficients in the lane
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the lane is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Which subvector this is
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Direction the lane runs in
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Coefficient `k` of the lane
    #[inline]
    pub fn coeff(&self, k: usize) -> E::Elem {
        debug_assert!(k < self.len);
        let (r, c) = self.direction.lane_coord(self.index, k);
        self.expr.coeff(r, c)
    }

    /// Iterate the lane in index order
    pub fn iter(&self) -> LaneIter<'a, E> {
        LaneIter {
            lane: *self,
            pos: 0,
        }
    }

    /// Collect the lane
    pub fn to_vec(&self) -> Vec<E::Elem> {
        self.iter().collect()
    }
}

impl<'a, E: MatrixExpr + ?Sized> IntoIterator for Lane<'a, E> {
    type Item = E::Elem;
    type IntoIter = LaneIter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        LaneIter { lane: self, pos: 0 }
    }
}

/// Iterator over the coefficients of a [`Lane`]
pub struct LaneIter<'a, E: ?Sized> {
    lane: Lane<'a, E>,
    pos: usize,
}

impl<E: MatrixExpr + ?Sized> Iterator for LaneIter<'_, E> {
    type Item = E::Elem;

    #[inline]
    fn next(&mut self) -> Option<E::Elem> {
        if self.pos < self.lane.len {
            let v = self.lane.coeff(self.pos);
            self.pos += 1;
            Some(v)
        } else {
            None
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.lane.len - self.pos;
        (n, Some(n))
    }
}

impl<E: MatrixExpr + ?Sized> ExactSizeIterator for LaneIter<'_, E> {}

/// Writable view of one column or row of a [`Matrix`]
pub struct LaneMut<'a, T> {
    matrix: &'a mut Matrix<T>,
    direction: Direction,
    index: usize,
    len: usize,
}

impl<'a, T: Scalar> LaneMut<'a, T> {
    pub(crate) fn new(matrix: &'a mut Matrix<T>, direction: Direction, index: usize) -> Self {
        let (rows, cols) = (matrix.rows(), matrix.cols());
        let count = direction.subvector_count(rows, cols);
        assert!(
            index < count,
            "{direction} subvector {index} out of bounds ({count} subvectors)"
        );
        Self {
            matrix,
            direction,
            index,
            len: direction.subvector_len(rows, cols),
        }
    }

    /// Number of coefficients in the lane
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the lane is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Coefficient `k` of the lane
    #[inline]
    pub fn get(&self, k: usize) -> Option<T> {
        (k < self.len).then(|| self.matrix[self.direction.lane_coord(self.index, k)])
    }

    /// Overwrite coefficient `k`
    ///
    /// # Panics
    ///
    /// Panics if `k >= self.len()`.
    #[inline]
    pub fn set(&mut self, k: usize, value: T) {
        assert!(k < self.len, "lane index {k} out of bounds ({})", self.len);
        self.matrix[self.direction.lane_coord(self.index, k)] = value;
    }

    /// Replace every coefficient `a` with `f(a)`
    pub fn map_inplace<F: FnMut(T) -> T>(&mut self, mut f: F) {
        for k in 0..self.len {
            let at = self.direction.lane_coord(self.index, k);
            self.matrix[at] = f(self.matrix[at]);
        }
    }

    /// Set every coefficient to `value`
    pub fn fill(&mut self, value: T) {
        self.map_inplace(|_| value);
    }
}
