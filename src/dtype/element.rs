//! Arithmetic element trait

use super::Scalar;
use std::ops::{Add, Div, Mul, Sub};

/// Arithmetic coefficient type of a matrix
///
/// Everything the numeric reductions and broadcast updates need: the four
/// operators, an ordering for `min_coeff`/`max_coeff`, identities, and an
/// `f64` bridge used when a count does not fit in the element type.
///
/// `Neg` is not required, so unsigned integers qualify.
///
/// # Cost constants
///
/// `ADD_COST` and `MUL_COST` are static estimates, in the same abstract units
/// as [`Scalar::READ_COST`], of one addition and one multiplication.
/// Expressions combine them into a per-coefficient cost.
pub trait Element:
    Scalar
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + PartialOrd
{
    /// Cost of one addition (also used for comparisons)
    const ADD_COST: usize = 1;

    /// Cost of one multiplication
    const MUL_COST: usize = 1;

    /// Widen to `f64`
    fn to_f64(self) -> f64;

    /// Narrow from `f64`; integers truncate toward zero and saturate
    fn from_f64(v: f64) -> Self;

    /// Additive identity
    fn zero() -> Self;

    /// Multiplicative identity
    fn one() -> Self;

    /// Truth value used by `count`, `all` and `any`
    ///
    /// Any value that compares unequal to zero is truthy, so NaN and ±Inf
    /// count as true.
    #[inline]
    fn is_truthy(self) -> bool {
        self != Self::zero()
    }
}

macro_rules! impl_primitive_element {
    ($($t:ty => $zero:expr, $one:expr);* $(;)?) => {
        $(
            impl Element for $t {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64(v: f64) -> Self {
                    v as $t
                }

                #[inline]
                fn zero() -> Self {
                    $zero
                }

                #[inline]
                fn one() -> Self {
                    $one
                }
            }
        )*
    };
}

impl_primitive_element! {
    f64 => 0.0, 1.0;
    f32 => 0.0, 1.0;
    i64 => 0, 1;
    i32 => 0, 1;
    i16 => 0, 1;
    i8 => 0, 1;
    u64 => 0, 1;
    u32 => 0, 1;
    u16 => 0, 1;
    u8 => 0, 1;
}

#[cfg(feature = "f16")]
macro_rules! impl_half_element {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                #[inline]
                fn to_f64(self) -> f64 {
                    <$t>::to_f64(self)
                }

                #[inline]
                fn from_f64(v: f64) -> Self {
                    <$t>::from_f64(v)
                }

                #[inline]
                fn zero() -> Self {
                    <$t>::ZERO
                }

                #[inline]
                fn one() -> Self {
                    <$t>::ONE
                }
            }
        )*
    };
}

#[cfg(feature = "f16")]
impl_half_element!(half::f16, half::bf16);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_f64_bridge() {
        assert_eq!(f32::from_f64(2.5).to_f64(), 2.5);
        assert_eq!(i32::from_f64(42.9), 42);
        assert_eq!(i8::from_f64(-3.7), -3);
        // Saturating narrowing is what `mean` guards against
        assert_eq!(u8::from_f64(300.0), u8::MAX);
        assert_eq!(u8::from_f64(300.0).to_f64(), 255.0);
    }

    #[test]
    fn test_identities() {
        assert_eq!(u16::zero() + u16::one(), 1);
        assert_eq!(f64::one() * 3.0, 3.0);
    }

    #[test]
    fn test_truthiness() {
        assert!(!0.0f64.is_truthy());
        assert!(!(-0.0f64).is_truthy());
        assert!(f64::NAN.is_truthy());
        assert!(f32::INFINITY.is_truthy());
        assert!((-5i32).is_truthy());
        assert!(!0u8.is_truthy());
    }

    #[test]
    fn test_default_costs() {
        assert_eq!(f64::READ_COST, 1);
        assert_eq!(f32::ADD_COST, 1);
        assert_eq!(i64::MUL_COST, 1);
    }

    #[cfg(feature = "f16")]
    #[test]
    fn test_half_element() {
        assert_eq!(half::f16::one().to_f64(), 1.0);
        assert!((half::bf16::from_f64(2.0).to_f64() - 2.0).abs() < 1e-3);
        // 70000 overflows f16, 2049 rounds to 2048
        assert!(half::f16::from_f64(70_000.0).to_f64().is_infinite());
        assert_eq!(half::f16::from_f64(2049.0).to_f64(), 2048.0);
    }
}
