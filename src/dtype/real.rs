//! Floating-point capability required by the norm reductions

use super::Element;
use num_traits::Float;

/// Real floating-point element
///
/// Norm reductions need `sqrt`, `abs` and `hypot` (from [`Float`]) plus the
/// exponent range of the format, which Blue's scaled norm uses to pick its
/// scaling constants.
///
/// `Element` and `Float` both provide `zero()`/`one()`; generic code over
/// `RealElement` spells them `<T as Element>::zero()`.
pub trait RealElement: Element + Float {
    /// Base of the exponent
    const RADIX: u32 = 2;

    /// Number of significant digits in base `RADIX`
    const MANTISSA_DIGITS: u32;

    /// One greater than the smallest normal power of `RADIX`
    const MIN_EXP: i32;

    /// One greater than the largest finite power of `RADIX`
    const MAX_EXP: i32;
}

impl RealElement for f64 {
    const MANTISSA_DIGITS: u32 = f64::MANTISSA_DIGITS;
    const MIN_EXP: i32 = f64::MIN_EXP;
    const MAX_EXP: i32 = f64::MAX_EXP;
}

impl RealElement for f32 {
    const MANTISSA_DIGITS: u32 = f32::MANTISSA_DIGITS;
    const MIN_EXP: i32 = f32::MIN_EXP;
    const MAX_EXP: i32 = f32::MAX_EXP;
}
