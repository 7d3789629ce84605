//! Direction-generic partial reductions and broadcasts
//!
//! `colwise()` and `rowwise()` on any [`MatrixExpr`](crate::expr::MatrixExpr)
//! return a [`VectorwiseOp`]. Its reductions produce a lazy [`PartialRedux`]
//! (`1 x N` colwise, `M x 1` rowwise) and its `add`/`sub` produce a lazy
//! element-wise expression against a [`Broadcast`] of a vector operand.
//! [`VectorwiseOpMut`], from `colwise_mut()`/`rowwise_mut()` on a
//! [`Matrix`](crate::matrix::Matrix), applies broadcasts in place.

mod broadcast;
mod direction;
mod facade;
mod partial_redux;

pub use broadcast::Broadcast;
pub use direction::Direction;
pub use facade::{VectorwiseOp, VectorwiseOpMut};
pub use partial_redux::PartialRedux;
