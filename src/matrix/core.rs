//! Core Matrix type

use super::{Lane, LaneMut, Layout};
use crate::dtype::{Element, Scalar};
use crate::error::{Error, Result};
use crate::expr::MatrixExpr;
use crate::vectorwise::{Direction, VectorwiseOpMut};
use std::fmt;
use std::ops::{Index, IndexMut};

/// Dense two-dimensional matrix owning its coefficients
///
/// `Matrix` is the storage the lazy expressions read from and the target the
/// mutating broadcasts write into. It consists of:
/// - **Data**: a `Vec<T>` holding exactly `rows * cols` coefficients
/// - **Layout**: shape and strides mapping `(row, col)` into the data
///
/// # Zero-Copy Transpose
///
/// [`Matrix::transposed`] swaps the layout and keeps the data where it is, so
/// a matrix is not necessarily row-major. All accessors go through the layout.
///
/// # Example
///
/// ```
/// use vecwise::prelude::*;
///
/// let a = Matrix::from_slice(&[1.0f64, 2.0, 3.0, 4.0], 2, 2);
/// assert_eq!(a[(1, 0)], 3.0);
/// assert_eq!(a.colwise().sum().to_vec(), vec![4.0, 6.0]);
/// ```
#[derive(Clone)]
pub struct Matrix<T> {
    data: Vec<T>,
    layout: Layout,
}

impl<T: Scalar> Matrix<T> {
    /// Create a matrix from storage and layout
    ///
    /// Returns an error if `layout` addresses a coefficient beyond `data`.
    pub fn from_parts(data: Vec<T>, layout: Layout) -> Result<Self> {
        let needed = if layout.is_empty() {
            0
        } else {
            layout.index_unchecked(layout.rows() - 1, layout.cols() - 1) + 1
        };
        if data.len() < needed {
            return Err(Error::shape_mismatch(&[needed], &[data.len()]));
        }
        Ok(Self { data, layout })
    }

    /// Create a row-major matrix taking ownership of `data`
    pub fn from_vec(data: Vec<T>, rows: usize, cols: usize) -> Result<Self> {
        let expected = rows
            .checked_mul(cols)
            .ok_or_else(|| Error::invalid_argument("shape", format!("{rows}x{cols} overflows")))?;
        if data.len() != expected {
            return Err(Error::ShapeMismatch {
                expected: vec![rows, cols],
                got: vec![data.len()],
            });
        }
        Ok(Self {
            data,
            layout: Layout::contiguous(rows, cols),
        })
    }

    /// Create a matrix from row-major data
    ///
    /// # Panics
    ///
    /// Panics if `data.len()` does not equal `rows * cols`.
    /// For a fallible alternative, use [`Self::try_from_slice`].
    pub fn from_slice(data: &[T], rows: usize, cols: usize) -> Self {
        Self::try_from_slice(data, rows, cols).expect("Matrix::from_slice failed")
    }

    /// Create a matrix from row-major data (fallible version)
    pub fn try_from_slice(data: &[T], rows: usize, cols: usize) -> Result<Self> {
        Self::from_vec(data.to_vec(), rows, cols)
    }

    /// Create a matrix from a list of equally long rows
    ///
    /// ```
    /// use vecwise::matrix::Matrix;
    /// let a = Matrix::from_rows(&[[1, 2, 3], [4, 5, 6]]).unwrap();
    /// assert_eq!(a.shape(), [2, 3]);
    /// ```
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(Error::shape_mismatch(&[cols], &[row.len()]));
            }
            data.extend_from_slice(row);
        }
        Self::from_vec(data, rows.len(), cols)
    }

    /// Create a matrix whose coefficient `(row, col)` is `f(row, col)`
    pub fn from_fn<F: FnMut(usize, usize) -> T>(rows: usize, cols: usize, mut f: F) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                data.push(f(r, c));
            }
        }
        Self {
            data,
            layout: Layout::contiguous(rows, cols),
        }
    }

    /// Create a matrix with every coefficient equal to `value`
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self {
            data: vec![value; rows * cols],
            layout: Layout::contiguous(rows, cols),
        }
    }

    /// Create a `1 x n` row vector
    pub fn row_vector(data: &[T]) -> Self {
        Self::from_fn(1, data.len(), |_, c| data[c])
    }

    /// Create an `n x 1` column vector
    pub fn col_vector(data: &[T]) -> Self {
        Self::from_fn(data.len(), 1, |r, _| data[r])
    }

    /// Evaluate any expression into a new row-major matrix
    pub fn from_expr<E: MatrixExpr<Elem = T>>(expr: &E) -> Self {
        Self::from_fn(expr.rows(), expr.cols(), |r, c| expr.coeff(r, c))
    }

    // ===== Accessors =====

    /// Number of rows
    #[inline]
    pub fn rows(&self) -> usize {
        self.layout.rows()
    }

    /// Number of columns
    #[inline]
    pub fn cols(&self) -> usize {
        self.layout.cols()
    }

    /// Shape as `[rows, cols]`
    #[inline]
    pub fn shape(&self) -> [usize; 2] {
        self.layout.shape()
    }

    /// Get the layout
    #[inline]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Total number of coefficients
    #[inline]
    pub fn len(&self) -> usize {
        self.layout.elem_count()
    }

    /// Whether the matrix has no coefficients
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.layout.is_empty()
    }

    /// Check if the data is row-major contiguous
    #[inline]
    pub fn is_contiguous(&self) -> bool {
        self.layout.is_contiguous()
    }

    /// The raw storage, in layout order
    ///
    /// Only row-major when [`Self::is_contiguous`] holds.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Coefficient at `(row, col)`, or `None` when out of bounds
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        self.layout.index(row, col).map(|i| self.data[i])
    }

    /// Overwrite the coefficient at `(row, col)`
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        let i = self.checked_index(row, col)?;
        self.data[i] = value;
        Ok(())
    }

    /// Coefficients in row-major order
    pub fn to_vec(&self) -> Vec<T> {
        if self.is_contiguous() {
            return self.data[..self.len()].to_vec();
        }
        let mut out = Vec::with_capacity(self.len());
        for r in 0..self.rows() {
            for c in 0..self.cols() {
                out.push(self[(r, c)]);
            }
        }
        out
    }

    /// Transpose without moving data
    pub fn transposed(self) -> Self {
        Self {
            data: self.data,
            layout: self.layout.transpose(),
        }
    }

    fn checked_index(&self, row: usize, col: usize) -> Result<usize> {
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
        Ok(self.layout.index_unchecked(row, col))
    }

    // ===== Subvectors =====

    /// Column `j` as a read-only lane
    ///
    /// # Panics
    ///
    /// Panics if `j >= self.cols()`.
    pub fn col(&self, j: usize) -> Lane<'_, Self> {
        Lane::new(self, Direction::Vertical, j)
    }

    /// Row `i` as a read-only lane
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.rows()`.
    pub fn row(&self, i: usize) -> Lane<'_, Self> {
        Lane::new(self, Direction::Horizontal, i)
    }

    /// Column `j` as a writable lane
    pub fn col_mut(&mut self, j: usize) -> LaneMut<'_, T> {
        self.lane_mut(Direction::Vertical, j)
    }

    /// Row `i` as a writable lane
    pub fn row_mut(&mut self, i: usize) -> LaneMut<'_, T> {
        self.lane_mut(Direction::Horizontal, i)
    }

    /// Subvector `index` in `direction` as a writable lane
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a valid subvector index.
    pub fn lane_mut(&mut self, direction: Direction, index: usize) -> LaneMut<'_, T> {
        LaneMut::new(self, direction, index)
    }

    // ===== Vectorwise entry points (mutable) =====

    /// Broadcast updates applied column by column
    pub fn colwise_mut(&mut self) -> VectorwiseOpMut<'_, T> {
        VectorwiseOpMut::new(self, Direction::Vertical)
    }

    /// Broadcast updates applied row by row
    pub fn rowwise_mut(&mut self) -> VectorwiseOpMut<'_, T> {
        VectorwiseOpMut::new(self, Direction::Horizontal)
    }

    /// Broadcast updates in an explicit direction
    pub fn vectorwise_mut(&mut self, direction: Direction) -> VectorwiseOpMut<'_, T> {
        VectorwiseOpMut::new(self, direction)
    }
}

impl<T: Element> Matrix<T> {
    /// Create a matrix filled with zeros
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, T::zero())
    }

    /// Create a matrix filled with ones
    pub fn ones(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, T::one())
    }
}

impl<T: Scalar> MatrixExpr for Matrix<T> {
    type Elem = T;

    #[inline]
    fn rows(&self) -> usize {
        self.layout.rows()
    }

    #[inline]
    fn cols(&self) -> usize {
        self.layout.cols()
    }

    #[inline]
    fn coeff(&self, row: usize, col: usize) -> T {
        self[(row, col)]
    }

    #[inline]
    fn coeff_read_cost(&self) -> usize {
        T::READ_COST
    }
}

impl<T: Scalar> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        match self.layout.index(row, col) {
            Some(i) => &self.data[i],
            None => panic!(
                "index ({row}, {col}) out of bounds for {}x{} matrix",
                self.rows(),
                self.cols()
            ),
        }
    }
}

impl<T: Scalar> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        match self.layout.index(row, col) {
            Some(i) => &mut self.data[i],
            None => panic!(
                "index ({row}, {col}) out of bounds for {}x{} matrix",
                self.rows(),
                self.cols()
            ),
        }
    }
}

/// Logical equality: same shape and same coefficients, whatever the layout
impl<T: Scalar> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.shape() == other.shape()
            && (0..self.rows())
                .all(|r| (0..self.cols()).all(|c| self[(r, c)] == other[(r, c)]))
    }
}

impl<T: Scalar> fmt::Debug for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matrix")
            .field("shape", &self.shape())
            .field("contiguous", &self.is_contiguous())
            .field("data", &self.to_vec())
            .finish()
    }
}

impl<T: Scalar> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix({}x{})", self.rows(), self.cols())?;
        for r in 0..self.rows() {
            write!(f, "[")?;
            for c in 0..self.cols() {
                if c > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{:?}", self[(r, c)])?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slice_row_major() {
        let a = Matrix::from_slice(&[1, 2, 3, 4, 5, 6], 2, 3);
        assert_eq!(a.shape(), [2, 3]);
        assert_eq!(a[(0, 2)], 3);
        assert_eq!(a[(1, 0)], 4);
        assert_eq!(a.get(2, 0), None);
    }

    #[test]
    fn test_try_from_slice_len_mismatch() {
        let err = Matrix::try_from_slice(&[1.0f32, 2.0, 3.0], 2, 2).unwrap_err();
        assert_eq!(
            err,
            Error::ShapeMismatch {
                expected: vec![2, 2],
                got: vec![3]
            }
        );
    }

    #[test]
    fn test_from_rows() {
        let a = Matrix::from_rows(&[vec![1u8, 2], vec![3, 4]]).unwrap();
        assert_eq!(a.to_vec(), vec![1, 2, 3, 4]);
        assert!(Matrix::from_rows(&[vec![1u8, 2], vec![3]]).is_err());

        let empty: Matrix<u8> = Matrix::from_rows::<Vec<u8>>(&[]).unwrap();
        assert_eq!(empty.shape(), [0, 0]);
    }

    #[test]
    fn test_transposed_shares_layout() {
        let a = Matrix::from_slice(&[1, 2, 3, 4, 5, 6], 2, 3);
        let t = a.clone().transposed();
        assert_eq!(t.shape(), [3, 2]);
        assert!(!t.is_contiguous());
        assert_eq!(t.to_vec(), vec![1, 4, 2, 5, 3, 6]);
        assert_eq!(t[(2, 1)], a[(1, 2)]);
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut a = Matrix::<f64>::zeros(2, 2);
        a.set(1, 1, 5.0).unwrap();
        assert_eq!(a[(1, 1)], 5.0);
        assert_eq!(
            a.set(0, 2, 1.0),
            Err(Error::IndexOutOfBounds { index: 2, size: 2 })
        );
    }

    #[test]
    fn test_equality_ignores_layout() {
        let a = Matrix::from_slice(&[1, 3, 2, 4], 2, 2);
        let b = Matrix::from_slice(&[1, 2, 3, 4], 2, 2).transposed();
        assert_eq!(a, b);
    }

    #[test]
    fn test_from_parts_validates_extent() {
        assert!(Matrix::from_parts(vec![0u8; 5], Layout::contiguous(2, 3)).is_err());
        assert!(Matrix::from_parts(vec![0u8; 6], Layout::contiguous(2, 3)).is_ok());
    }

    #[test]
    fn test_display() {
        let a = Matrix::from_slice(&[1, 2, 3, 4], 2, 2);
        assert_eq!(a.to_string(), "Matrix(2x2)\n[1, 2]\n[3, 4]\n");
    }
}
