//! Reduction/broadcast axis

use std::fmt;

/// Which subvectors a vectorwise operation works on
///
/// `Vertical` treats each column as a subvector: reductions collapse the
/// rows and yield a `1 x cols` row vector. `Horizontal` treats each row as a
/// subvector and yields a `rows x 1` column vector.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Column by column (`colwise`)
    Vertical,
    /// Row by row (`rowwise`)
    Horizontal,
}

impl Direction {
    /// The other direction
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Vertical => Self::Horizontal,
            Self::Horizontal => Self::Vertical,
        }
    }

    /// Number of subvectors in a `rows x cols` matrix
    #[inline]
    pub const fn subvector_count(self, rows: usize, cols: usize) -> usize {
        match self {
            Self::Vertical => cols,
            Self::Horizontal => rows,
        }
    }

    /// Length of each subvector in a `rows x cols` matrix
    #[inline]
    pub const fn subvector_len(self, rows: usize, cols: usize) -> usize {
        match self {
            Self::Vertical => rows,
            Self::Horizontal => cols,
        }
    }

    /// Shape `(rows, cols)` of a partial reduction of a `rows x cols` matrix
    #[inline]
    pub const fn reduced_shape(self, rows: usize, cols: usize) -> (usize, usize) {
        match self {
            Self::Vertical => (1, cols),
            Self::Horizontal => (rows, 1),
        }
    }

    /// Matrix coordinate `(row, col)` of element `k` of subvector `index`
    #[inline]
    pub const fn lane_coord(self, index: usize, k: usize) -> (usize, usize) {
        match self {
            Self::Vertical => (k, index),
            Self::Horizontal => (index, k),
        }
    }

    /// Index of the subvector containing `(row, col)`
    #[inline]
    pub const fn lane_index(self, row: usize, col: usize) -> usize {
        match self {
            Self::Vertical => col,
            Self::Horizontal => row,
        }
    }

    /// Name of the facade entry point for this direction
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vertical => "colwise",
            Self::Horizontal => "rowwise",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shapes() {
        assert_eq!(Direction::Vertical.subvector_count(2, 5), 5);
        assert_eq!(Direction::Vertical.subvector_len(2, 5), 2);
        assert_eq!(Direction::Horizontal.subvector_count(2, 5), 2);
        assert_eq!(Direction::Horizontal.subvector_len(2, 5), 5);
        assert_eq!(Direction::Vertical.reduced_shape(2, 5), (1, 5));
        assert_eq!(Direction::Horizontal.reduced_shape(2, 5), (2, 1));
    }

    #[test]
    fn test_lane_coords_round_trip() {
        for dir in [Direction::Vertical, Direction::Horizontal] {
            let (r, c) = dir.lane_coord(3, 1);
            assert_eq!(dir.lane_index(r, c), 3);
        }
        assert_eq!(Direction::Vertical.lane_coord(3, 1), (1, 3));
        assert_eq!(Direction::Horizontal.lane_coord(3, 1), (3, 1));
    }

    #[test]
    fn test_opposite_and_name() {
        assert_eq!(Direction::Vertical.opposite(), Direction::Horizontal);
        assert_eq!(Direction::Horizontal.opposite().to_string(), "colwise");
    }
}
