//! Element-wise arithmetic helpers
//!
//! [`BinaryOp`] names the coefficient-wise operators a lazy
//! [`CwiseBinary`](crate::expr::CwiseBinary) expression can apply.

use crate::dtype::Element;
use std::fmt;

/// Binary operation kind
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// Addition: a + b
    Add,
    /// Subtraction: a - b
    Sub,
    /// Multiplication: a * b
    Mul,
    /// Division: a / b
    Div,
    /// Maximum: max(a, b)
    Max,
    /// Minimum: min(a, b)
    Min,
}

impl BinaryOp {
    /// Apply the operator to one pair of coefficients
    #[inline]
    pub fn apply<T: Element>(self, a: T, b: T) -> T {
        match self {
            Self::Add => a + b,
            Self::Sub => a - b,
            Self::Mul => a * b,
            Self::Div => a / b,
            Self::Max => {
                if b > a {
                    b
                } else {
                    a
                }
            }
            Self::Min => {
                if b < a {
                    b
                } else {
                    a
                }
            }
        }
    }

    /// Declared cost of one application on `T`
    #[inline]
    pub fn cost<T: Element>(self) -> usize {
        match self {
            Self::Add | Self::Sub | Self::Max | Self::Min => T::ADD_COST,
            Self::Mul | Self::Div => T::MUL_COST,
        }
    }

    /// Operator symbol for display
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Max => "max",
            Self::Min => "min",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply() {
        assert_eq!(BinaryOp::Add.apply(2.0f64, 3.0), 5.0);
        assert_eq!(BinaryOp::Sub.apply(2i32, 3), -1);
        assert_eq!(BinaryOp::Mul.apply(4u8, 3), 12);
        assert_eq!(BinaryOp::Div.apply(9.0f32, 2.0), 4.5);
        assert_eq!(BinaryOp::Max.apply(-1i64, 7), 7);
        assert_eq!(BinaryOp::Min.apply(-1i64, 7), -1);
    }

    #[test]
    fn test_cost() {
        assert_eq!(BinaryOp::Add.cost::<f64>(), f64::ADD_COST);
        assert_eq!(BinaryOp::Div.cost::<f64>(), f64::MUL_COST);
    }
}
