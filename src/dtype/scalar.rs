//! Scalar trait: anything a matrix expression can yield per coefficient

use std::fmt;

/// A coefficient value produced by a matrix expression
///
/// Arithmetic element types implement this through [`Element`](super::Element),
/// and `bool`/`usize` implement it so that `all`, `any` and `count`
/// reductions are expressions too.
pub trait Scalar: Copy + Clone + Send + Sync + fmt::Debug + PartialEq + 'static {
    /// Cost of reading one stored coefficient of this type
    const READ_COST: usize = 1;
}

macro_rules! impl_scalar {
    ($($t:ty),* $(,)?) => {
        $(impl Scalar for $t {})*
    };
}

impl_scalar!(f64, f32, i64, i32, i16, i8, u64, u32, u16, u8, usize, bool);

#[cfg(feature = "f16")]
impl_scalar!(half::f16, half::bf16);
