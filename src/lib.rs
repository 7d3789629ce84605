//! # vecwise
//!
//! **Direction-generic partial reductions and broadcast arithmetic over dense
//! matrices.**
//!
//! vecwise lets you treat a matrix as a collection of columns or rows and
//! reduce each of them to one value, or combine each of them with a vector,
//! without writing the loop twice and without evaluating anything until a
//! coefficient is actually read.
//!
//! ## Features
//!
//! - **Partial reductions**: sum, mean, min/max, count, all/any, product,
//!   squared norm, and four Euclidean norms (plain, rescaled, Blue's, hypot)
//!   per column or per row, plus a caller-supplied fold
//! - **Lazy views**: reductions and broadcasts are expressions with a
//!   declared per-coefficient cost; nothing is cached
//! - **Broadcast arithmetic**: `A + v` / `A - v` with `v` replicated along
//!   the axis, and in-place `assign`, `add_assign`, `sub_assign`
//! - **Multiple dtypes**: f64, f32, integers, and f16/bf16 behind a feature
//!
//! ## Quick Start
//!
//! ```rust
//! use vecwise::prelude::*;
//!
//! let mut a = Matrix::from_slice(&[1.0f64, 2.0, 3.0, 4.0], 2, 2);
//!
//! assert_eq!(a.colwise().sum().to_vec(), vec![4.0, 6.0]);
//! assert_eq!(a.rowwise().sum().to_vec(), vec![3.0, 7.0]);
//! assert_eq!(a.colwise().max_coeff()?.to_vec(), vec![3.0, 4.0]);
//!
//! let v = Matrix::row_vector(&[10.0, 20.0]);
//! a.colwise_mut().add_assign(&v)?;
//! assert_eq!(a.to_vec(), vec![11.0, 22.0, 13.0, 24.0]);
//! # Ok::<(), vecwise::error::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `f16`: Half-precision floats (F16, BF16) via the `half` crate

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod dtype;
pub mod error;
pub mod expr;
pub mod matrix;
pub mod ops;
pub mod vectorwise;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::dtype::{Element, RealElement, Scalar};
    pub use crate::error::{Error, Result};
    pub use crate::expr::MatrixExpr;
    pub use crate::matrix::{Layout, Matrix};
    pub use crate::ops::{BinaryOp, ReduceOp, Reducer};
    pub use crate::vectorwise::{Direction, PartialRedux, VectorwiseOp, VectorwiseOpMut};
}
