//! Layout: shape and strides of a dense matrix

use std::fmt;

/// Layout describes where each coefficient of a matrix lives in storage
///
/// Coefficient `(row, col)` is stored at `row * strides[0] + col * strides[1]`.
/// A freshly allocated matrix is row-major (`strides == [cols, 1]`); a
/// transposed one swaps shape and strides without moving any data.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Layout {
    /// `[rows, cols]`
    shape: [usize; 2],
    /// Element offset between consecutive rows and consecutive columns
    strides: [usize; 2],
}

impl Layout {
    /// Create a contiguous row-major layout
    ///
    /// # Example
    /// ```
    /// use vecwise::matrix::Layout;
    /// let layout = Layout::contiguous(2, 3);
    /// assert_eq!(layout.shape(), [2, 3]);
    /// assert_eq!(layout.strides(), [3, 1]);
    /// ```
    pub fn contiguous(rows: usize, cols: usize) -> Self {
        Self {
            shape: [rows, cols],
            strides: [cols, 1],
        }
    }

    /// Create a layout with explicit shape and strides
    pub fn new(shape: [usize; 2], strides: [usize; 2]) -> Self {
        Self { shape, strides }
    }

    /// Number of rows
    #[inline]
    pub fn rows(&self) -> usize {
        self.shape[0]
    }

    /// Number of columns
    #[inline]
    pub fn cols(&self) -> usize {
        self.shape[1]
    }

    /// Get the shape as `[rows, cols]`
    #[inline]
    pub fn shape(&self) -> [usize; 2] {
        self.shape
    }

    /// Get the strides as `[row_stride, col_stride]`
    #[inline]
    pub fn strides(&self) -> [usize; 2] {
        self.strides
    }

    /// Total number of elements
    #[inline]
    pub fn elem_count(&self) -> usize {
        self.shape[0] * self.shape[1]
    }

    /// Whether the layout holds no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elem_count() == 0
    }

    /// Check if memory is contiguous in row-major order
    pub fn is_contiguous(&self) -> bool {
        self.is_empty() || *self == Self::contiguous(self.rows(), self.cols())
    }

    /// Storage index of `(row, col)`, or `None` when out of bounds
    pub fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.shape[0] && col < self.shape[1] {
            Some(self.index_unchecked(row, col))
        } else {
            None
        }
    }

    /// Storage index of `(row, col)` without a bounds check
    #[inline]
    pub fn index_unchecked(&self, row: usize, col: usize) -> usize {
        row * self.strides[0] + col * self.strides[1]
    }

    /// Create a transposed layout (swap rows and columns)
    pub fn transpose(&self) -> Self {
        Self {
            shape: [self.shape[1], self.shape[0]],
            strides: [self.strides[1], self.strides[0]],
        }
    }
}

impl fmt::Debug for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Layout")
            .field("shape", &self.shape)
            .field("strides", &self.strides)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contiguous_layout() {
        let layout = Layout::contiguous(2, 3);
        assert_eq!(layout.rows(), 2);
        assert_eq!(layout.cols(), 3);
        assert_eq!(layout.elem_count(), 6);
        assert!(layout.is_contiguous());
    }

    #[test]
    fn test_index() {
        let layout = Layout::contiguous(2, 3);
        assert_eq!(layout.index(0, 0), Some(0));
        assert_eq!(layout.index(0, 2), Some(2));
        assert_eq!(layout.index(1, 0), Some(3));
        assert_eq!(layout.index(1, 2), Some(5));
        assert_eq!(layout.index(2, 0), None);
        assert_eq!(layout.index(0, 3), None);
    }

    #[test]
    fn test_transpose() {
        let layout = Layout::contiguous(2, 3);
        let t = layout.transpose();
        assert_eq!(t.shape(), [3, 2]);
        assert_eq!(t.strides(), [1, 3]);
        assert!(!t.is_contiguous());
        // (row 2, col 1) of the transpose is (row 1, col 2) of the original
        assert_eq!(t.index(2, 1), layout.index(1, 2));
        assert_eq!(t.transpose(), layout);
    }

    #[test]
    fn test_empty_layout() {
        let layout = Layout::contiguous(0, 4);
        assert!(layout.is_empty());
        assert!(layout.is_contiguous());
        assert_eq!(layout.index(0, 0), None);
    }
}
