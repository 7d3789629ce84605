//! Data type system for vecwise matrices
//!
//! [`Scalar`] covers anything an expression yields per coefficient,
//! [`Element`] the arithmetic types the numeric reductions work on, and
//! [`RealElement`] the floating-point types the norm reductions need.

mod element;
mod real;
mod scalar;

pub use element::Element;
pub use real::RealElement;
pub use scalar::Scalar;
