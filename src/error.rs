//! Error types for vecwise

use crate::ops::ReduceOp;
use thiserror::Error;

/// Result type alias using vecwise's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in vecwise operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Shape mismatch in an operation
    #[error("Shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        /// Expected shape
        expected: Vec<usize>,
        /// Actual shape
        got: Vec<usize>,
    },

    /// Broadcast operand is not a single row or a single column
    #[error("Expected a vector operand, got a {rows}x{cols} matrix")]
    NotAVector {
        /// Rows of the offending operand
        rows: usize,
        /// Columns of the offending operand
        cols: usize,
    },

    /// Reduction without an identity applied to an empty subvector
    #[error("Reduction '{op}' needs at least one element, subvectors have length {len}")]
    DegenerateInput {
        /// The reduction that was requested
        op: ReduceOp,
        /// Length of the subvectors being reduced
        len: usize,
    },

    /// Index out of bounds
    #[error("Index {index} out of bounds for dimension of size {size}")]
    IndexOutOfBounds {
        /// The invalid index
        index: usize,
        /// Size of the dimension
        size: usize,
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },
}

impl Error {
    /// Create a shape mismatch error
    pub fn shape_mismatch(expected: &[usize], got: &[usize]) -> Self {
        Self::ShapeMismatch {
            expected: expected.to_vec(),
            got: got.to_vec(),
        }
    }

    /// Create a degenerate input error
    pub fn degenerate(op: ReduceOp, len: usize) -> Self {
        Self::DegenerateInput { op, len }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }

    /// Whether this error is a shape violation (mismatched or non-vector operand)
    pub fn is_shape_error(&self) -> bool {
        matches!(self, Self::ShapeMismatch { .. } | Self::NotAVector { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::shape_mismatch(&[3], &[2]);
        assert_eq!(err.to_string(), "Shape mismatch: expected [3], got [2]");

        let err = Error::degenerate(ReduceOp::Min, 0);
        assert_eq!(
            err.to_string(),
            "Reduction 'min_coeff' needs at least one element, subvectors have length 0"
        );
    }

    #[test]
    fn test_is_shape_error() {
        assert!(Error::shape_mismatch(&[1], &[2]).is_shape_error());
        assert!(Error::NotAVector { rows: 2, cols: 2 }.is_shape_error());
        assert!(!Error::degenerate(ReduceOp::Max, 0).is_shape_error());
    }
}
