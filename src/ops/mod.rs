//! Matrix operations
//!
//! This module holds the scalar-level building blocks that the lazy
//! expressions and the vectorwise facades are made of:
//!
//! ```text
//! ops
//!   ├── BinaryOp            (coefficient-wise add, sub, mul, div, max, min)
//!   ├── ReduceOp + OpCosts  (reduction catalog and its declared cost formulas)
//!   ├── Reducer             (functor trait: Sum, Mean, MinCoeff, ..., Redux<F>)
//!   └── kernels             (in-order folds, stable/Blue/hypot norms)
//! ```

pub mod arithmetic;
pub mod kernels;
pub mod reduce;

pub use arithmetic::BinaryOp;
pub use reduce::{
    All, Any, BlueNorm, Count, HypotNorm, MaxCoeff, Mean, MinCoeff, Norm, OpCosts, Prod,
    ReduceOp, Reducer, Redux, SquaredNorm, StableNorm, Sum,
};
