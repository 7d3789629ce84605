//! Reduction functors
//!
//! Every reduction collapses an ordered sequence of scalars (one column or
//! one row of a matrix) into a single value. [`ReduceOp`] names the catalog
//! and owns the declared cost formulas; each catalog entry has a functor type
//! implementing [`Reducer`], which is what [`PartialRedux`] stores.
//!
//! Functors are pure. A lazy view may call them any number of times, once
//! per coefficient read.
//!
//! [`PartialRedux`]: crate::vectorwise::PartialRedux

use super::kernels;
use crate::dtype::{Element, RealElement, Scalar};
use std::fmt;

/// Reduction operation kind
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ReduceOp {
    /// Sum of elements
    Sum,
    /// Mean of elements
    Mean,
    /// Minimum element
    Min,
    /// Maximum element
    Max,
    /// Number of truthy elements
    Count,
    /// Logical AND of truth values
    All,
    /// Logical OR of truth values
    Any,
    /// Product of elements
    Prod,
    /// Sum of squared magnitudes
    SquaredNorm,
    /// Euclidean norm, `sqrt(squared_norm)`
    Norm,
    /// Euclidean norm with running rescaling against overflow/underflow
    StableNorm,
    /// Euclidean norm using Blue's three-accumulator algorithm
    BlueNorm,
    /// Euclidean norm folded pairwise with `hypot`
    HypotNorm,
    /// Left fold with a caller-supplied associative operator
    Redux,
}

impl ReduceOp {
    /// Every catalog entry, in declaration order
    pub const ALL: [ReduceOp; 14] = [
        Self::Sum,
        Self::Mean,
        Self::Min,
        Self::Max,
        Self::Count,
        Self::All,
        Self::Any,
        Self::Prod,
        Self::SquaredNorm,
        Self::Norm,
        Self::StableNorm,
        Self::BlueNorm,
        Self::HypotNorm,
        Self::Redux,
    ];

    /// Name of the facade method producing this reduction
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sum => "sum",
            Self::Mean => "mean",
            Self::Min => "min_coeff",
            Self::Max => "max_coeff",
            Self::Count => "count",
            Self::All => "all",
            Self::Any => "any",
            Self::Prod => "prod",
            Self::SquaredNorm => "squared_norm",
            Self::Norm => "norm",
            Self::StableNorm => "stable_norm",
            Self::BlueNorm => "blue_norm",
            Self::HypotNorm => "hypot_norm",
            Self::Redux => "redux",
        }
    }

    /// Whether the reduction is undefined on an empty subvector
    ///
    /// Min, Max and Redux have no seed element and Mean divides by the
    /// length. Everything else has an identity (`0`, `1`, `true`, `false`,
    /// or a zero norm).
    pub const fn requires_nonempty(self) -> bool {
        matches!(self, Self::Min | Self::Max | Self::Mean | Self::Redux)
    }

    /// Declared cost of reducing `len` elements
    ///
    /// `Count`, `All` and `Any` reuse the `(len - 1)` additions formula of
    /// `Sum`; the fold may short-circuit at runtime but the estimate does not.
    /// `Redux` assumes one addition per fold step; use
    /// [`Redux::with_cost`] to declare something else.
    pub fn cost(self, len: usize, costs: &OpCosts) -> usize {
        let steps = len.saturating_sub(1);
        match self {
            Self::Sum | Self::Min | Self::Max | Self::Count | Self::All | Self::Any => {
                steps * costs.add
            }
            Self::Mean => steps * costs.add + costs.mul,
            Self::Prod => steps * costs.mul,
            Self::SquaredNorm => len * costs.mul + steps * costs.add,
            Self::Norm | Self::StableNorm | Self::BlueNorm => {
                (len + 5) * costs.mul + steps * costs.add
            }
            Self::HypotNorm => steps * costs.hypot,
            Self::Redux => steps * costs.add,
        }
    }
}

impl fmt::Display for ReduceOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-scalar operation costs feeding [`ReduceOp::cost`]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct OpCosts {
    /// One addition or comparison
    pub add: usize,
    /// One multiplication
    pub mul: usize,
    /// One overflow-safe `hypot(a, b)`
    pub hypot: usize,
}

impl OpCosts {
    /// One unit per operation, used for `bool` masks
    pub const UNIT: Self = Self {
        add: 1,
        mul: 1,
        hypot: 5,
    };

    /// Costs of element type `T`
    pub fn of<T: Element>() -> Self {
        Self {
            add: T::ADD_COST,
            mul: T::MUL_COST,
            hypot: 5 * T::MUL_COST,
        }
    }
}

/// A reduction functor: one scalar out of an ordered sequence of `T`
///
/// `reduce` must be referentially transparent. When `op().requires_nonempty()`
/// the caller guarantees a non-empty sequence; [`PartialRedux::new`] checks
/// this before any coefficient is read.
///
/// [`PartialRedux::new`]: crate::vectorwise::PartialRedux::new
pub trait Reducer<T: Scalar> {
    /// Value produced per subvector
    type Output: Scalar;

    /// Catalog entry this functor implements
    fn op(&self) -> ReduceOp;

    /// Reduce the values in index order
    ///
    /// # Panics
    ///
    /// Seeded reductions (`requires_nonempty`) panic on an empty sequence.
    fn reduce<I>(&self, values: I) -> Self::Output
    where
        I: ExactSizeIterator<Item = T>;

    /// Declared cost of reducing `len` elements
    fn cost(&self, len: usize) -> usize;
}

/// Sum of the subvector; `0` when empty
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Sum;

/// Arithmetic mean of the subvector
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Mean;

/// Smallest coefficient of the subvector
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MinCoeff;

/// Largest coefficient of the subvector
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MaxCoeff;

/// Number of truthy coefficients; `0` when empty
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Count;

/// Whether every coefficient is truthy; `true` when empty
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct All;

/// Whether any coefficient is truthy; `false` when empty
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Any;

/// Product of the subvector; `1` when empty
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Prod;

/// Sum of squares
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SquaredNorm;

/// Euclidean norm computed as `sqrt(sum of squares)`
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Norm;

/// Euclidean norm with running rescaling
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StableNorm;

/// Euclidean norm by Blue's algorithm
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BlueNorm;

/// Euclidean norm folded with `hypot`
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct HypotNorm;

impl<T: Element> Reducer<T> for Sum {
    type Output = T;

    fn op(&self) -> ReduceOp {
        ReduceOp::Sum
    }

    fn reduce<I: ExactSizeIterator<Item = T>>(&self, values: I) -> T {
        kernels::sum(values)
    }

    fn cost(&self, len: usize) -> usize {
        ReduceOp::Sum.cost(len, &OpCosts::of::<T>())
    }
}

impl<T: Element> Reducer<T> for Mean {
    type Output = T;

    fn op(&self) -> ReduceOp {
        ReduceOp::Mean
    }

    fn reduce<I: ExactSizeIterator<Item = T>>(&self, values: I) -> T {
        kernels::mean(values)
    }

    fn cost(&self, len: usize) -> usize {
        ReduceOp::Mean.cost(len, &OpCosts::of::<T>())
    }
}

impl<T: Element> Reducer<T> for MinCoeff {
    type Output = T;

    fn op(&self) -> ReduceOp {
        ReduceOp::Min
    }

    fn reduce<I: ExactSizeIterator<Item = T>>(&self, values: I) -> T {
        kernels::fold_seeded(values, |acc, v| if v < acc { v } else { acc })
            .unwrap_or_else(|| panic!("min_coeff of an empty subvector"))
    }

    fn cost(&self, len: usize) -> usize {
        ReduceOp::Min.cost(len, &OpCosts::of::<T>())
    }
}

impl<T: Element> Reducer<T> for MaxCoeff {
    type Output = T;

    fn op(&self) -> ReduceOp {
        ReduceOp::Max
    }

    fn reduce<I: ExactSizeIterator<Item = T>>(&self, values: I) -> T {
        kernels::fold_seeded(values, |acc, v| if v > acc { v } else { acc })
            .unwrap_or_else(|| panic!("max_coeff of an empty subvector"))
    }

    fn cost(&self, len: usize) -> usize {
        ReduceOp::Max.cost(len, &OpCosts::of::<T>())
    }
}

impl<T: Element> Reducer<T> for Count {
    type Output = usize;

    fn op(&self) -> ReduceOp {
        ReduceOp::Count
    }

    fn reduce<I: ExactSizeIterator<Item = T>>(&self, values: I) -> usize {
        values.filter(|v| v.is_truthy()).count()
    }

    fn cost(&self, len: usize) -> usize {
        ReduceOp::Count.cost(len, &OpCosts::of::<T>())
    }
}

impl<T: Element> Reducer<T> for All {
    type Output = bool;

    fn op(&self) -> ReduceOp {
        ReduceOp::All
    }

    fn reduce<I: ExactSizeIterator<Item = T>>(&self, mut values: I) -> bool {
        values.all(|v| v.is_truthy())
    }

    fn cost(&self, len: usize) -> usize {
        ReduceOp::All.cost(len, &OpCosts::of::<T>())
    }
}

impl<T: Element> Reducer<T> for Any {
    type Output = bool;

    fn op(&self) -> ReduceOp {
        ReduceOp::Any
    }

    fn reduce<I: ExactSizeIterator<Item = T>>(&self, mut values: I) -> bool {
        values.any(|v| v.is_truthy())
    }

    fn cost(&self, len: usize) -> usize {
        ReduceOp::Any.cost(len, &OpCosts::of::<T>())
    }
}

// Boolean masks reduce with the logical functors directly

impl Reducer<bool> for Count {
    type Output = usize;

    fn op(&self) -> ReduceOp {
        ReduceOp::Count
    }

    fn reduce<I: ExactSizeIterator<Item = bool>>(&self, values: I) -> usize {
        values.filter(|&v| v).count()
    }

    fn cost(&self, len: usize) -> usize {
        ReduceOp::Count.cost(len, &OpCosts::UNIT)
    }
}

impl Reducer<bool> for All {
    type Output = bool;

    fn op(&self) -> ReduceOp {
        ReduceOp::All
    }

    fn reduce<I: ExactSizeIterator<Item = bool>>(&self, mut values: I) -> bool {
        values.all(|v| v)
    }

    fn cost(&self, len: usize) -> usize {
        ReduceOp::All.cost(len, &OpCosts::UNIT)
    }
}

impl Reducer<bool> for Any {
    type Output = bool;

    fn op(&self) -> ReduceOp {
        ReduceOp::Any
    }

    fn reduce<I: ExactSizeIterator<Item = bool>>(&self, mut values: I) -> bool {
        values.any(|v| v)
    }

    fn cost(&self, len: usize) -> usize {
        ReduceOp::Any.cost(len, &OpCosts::UNIT)
    }
}

impl<T: Element> Reducer<T> for Prod {
    type Output = T;

    fn op(&self) -> ReduceOp {
        ReduceOp::Prod
    }

    fn reduce<I: ExactSizeIterator<Item = T>>(&self, values: I) -> T {
        kernels::prod(values)
    }

    fn cost(&self, len: usize) -> usize {
        ReduceOp::Prod.cost(len, &OpCosts::of::<T>())
    }
}

impl<T: Element> Reducer<T> for SquaredNorm {
    type Output = T;

    fn op(&self) -> ReduceOp {
        ReduceOp::SquaredNorm
    }

    fn reduce<I: ExactSizeIterator<Item = T>>(&self, values: I) -> T {
        kernels::squared_norm(values)
    }

    fn cost(&self, len: usize) -> usize {
        ReduceOp::SquaredNorm.cost(len, &OpCosts::of::<T>())
    }
}

impl<T: RealElement> Reducer<T> for Norm {
    type Output = T;

    fn op(&self) -> ReduceOp {
        ReduceOp::Norm
    }

    fn reduce<I: ExactSizeIterator<Item = T>>(&self, values: I) -> T {
        kernels::squared_norm(values).sqrt()
    }

    fn cost(&self, len: usize) -> usize {
        ReduceOp::Norm.cost(len, &OpCosts::of::<T>())
    }
}

impl<T: RealElement> Reducer<T> for StableNorm {
    type Output = T;

    fn op(&self) -> ReduceOp {
        ReduceOp::StableNorm
    }

    fn reduce<I: ExactSizeIterator<Item = T>>(&self, values: I) -> T {
        kernels::stable_norm(values)
    }

    fn cost(&self, len: usize) -> usize {
        ReduceOp::StableNorm.cost(len, &OpCosts::of::<T>())
    }
}

impl<T: RealElement> Reducer<T> for BlueNorm {
    type Output = T;

    fn op(&self) -> ReduceOp {
        ReduceOp::BlueNorm
    }

    fn reduce<I: ExactSizeIterator<Item = T>>(&self, values: I) -> T {
        kernels::blue_norm(values)
    }

    fn cost(&self, len: usize) -> usize {
        ReduceOp::BlueNorm.cost(len, &OpCosts::of::<T>())
    }
}

impl<T: RealElement> Reducer<T> for HypotNorm {
    type Output = T;

    fn op(&self) -> ReduceOp {
        ReduceOp::HypotNorm
    }

    fn reduce<I: ExactSizeIterator<Item = T>>(&self, values: I) -> T {
        kernels::hypot_norm(values)
    }

    fn cost(&self, len: usize) -> usize {
        ReduceOp::HypotNorm.cost(len, &OpCosts::of::<T>())
    }
}

/// Left fold with a caller-supplied binary operator, seeded by the first
/// element
///
/// The operator is assumed associative but is always applied strictly left
/// to right, so floating-point results are deterministic.
#[derive(Copy, Clone)]
pub struct Redux<F> {
    func: F,
    op_cost: Option<usize>,
}

impl<F> Redux<F> {
    /// Wrap `func`, declaring one addition per fold step
    pub fn new(func: F) -> Self {
        Self {
            func,
            op_cost: None,
        }
    }

    /// Wrap `func`, declaring `op_cost` per fold step
    pub fn with_cost(func: F, op_cost: usize) -> Self {
        Self {
            func,
            op_cost: Some(op_cost),
        }
    }
}

impl<F> fmt::Debug for Redux<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Redux")
            .field("op_cost", &self.op_cost)
            .finish_non_exhaustive()
    }
}

impl<T, F> Reducer<T> for Redux<F>
where
    T: Element,
    F: Fn(T, T) -> T,
{
    type Output = T;

    fn op(&self) -> ReduceOp {
        ReduceOp::Redux
    }

    fn reduce<I: ExactSizeIterator<Item = T>>(&self, values: I) -> T {
        kernels::fold_seeded(values, &self.func)
            .unwrap_or_else(|| panic!("redux of an empty subvector"))
    }

    fn cost(&self, len: usize) -> usize {
        match self.op_cost {
            Some(op_cost) => len.saturating_sub(1) * op_cost,
            None => ReduceOp::Redux.cost(len, &OpCosts::of::<T>()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce<T: Scalar, R: Reducer<T>>(r: R, values: &[T]) -> R::Output {
        r.reduce(values.iter().copied())
    }

    #[test]
    fn test_basic_reductions() {
        let v = [1.0f64, 4.0, 2.0, 3.0];
        assert_eq!(reduce(Sum, &v), 10.0);
        assert_eq!(reduce(Mean, &v), 2.5);
        assert_eq!(reduce(MinCoeff, &v), 1.0);
        assert_eq!(reduce(MaxCoeff, &v), 4.0);
        assert_eq!(reduce(Prod, &v), 24.0);
        assert_eq!(reduce(SquaredNorm, &v), 30.0);
        assert!((reduce(Norm, &v) - 30.0f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_logical_reductions() {
        let v = [0.0f32, 2.0, 0.0, -1.0];
        assert_eq!(reduce(Count, &v), 2);
        assert!(!reduce(All, &v));
        assert!(reduce(Any, &v));
        assert!(reduce(All, &[f32::NAN, 1.0]));
        assert!(!reduce(Any, &[0i32, 0]));

        let mask = [true, false, true];
        assert_eq!(reduce(Count, &mask), 2);
        assert!(!reduce(All, &mask));
        assert!(reduce(Any, &mask));
        assert_eq!(Reducer::<bool>::cost(&Count, 3), 2);
    }

    #[test]
    fn test_empty_identities() {
        let empty: [f64; 0] = [];
        assert_eq!(reduce(Sum, &empty), 0.0);
        assert_eq!(reduce(Prod, &empty), 1.0);
        assert_eq!(reduce(Count, &empty), 0);
        assert!(reduce(All, &empty));
        assert!(!reduce(Any, &empty));
        assert_eq!(reduce(SquaredNorm, &empty), 0.0);
        assert_eq!(reduce(Norm, &empty), 0.0);
        assert_eq!(reduce(StableNorm, &empty), 0.0);
        assert_eq!(reduce(BlueNorm, &empty), 0.0);
        assert_eq!(reduce(HypotNorm, &empty), 0.0);
    }

    #[test]
    fn test_integer_mean_truncates() {
        assert_eq!(reduce(Mean, &[1i32, 2, 4]), 2);
    }

    #[test]
    fn test_redux_is_left_fold() {
        // (((1 - 2) - 3) - 4) = -8; a right fold would give -2
        let sub = Redux::new(|a: i64, b: i64| a - b);
        assert_eq!(reduce(sub, &[1, 2, 3, 4]), -8);

        let max = Redux::new(|a: f64, b: f64| a.max(b));
        assert_eq!(reduce(max, &[3.0, 9.0, 1.0]), 9.0);
    }

    #[test]
    fn test_requires_nonempty() {
        let seeded: Vec<ReduceOp> = ReduceOp::ALL
            .iter()
            .copied()
            .filter(|op| op.requires_nonempty())
            .collect();
        assert_eq!(
            seeded,
            vec![ReduceOp::Mean, ReduceOp::Min, ReduceOp::Max, ReduceOp::Redux]
        );
    }

    #[test]
    fn test_cost_formulas() {
        let c = OpCosts::of::<f64>();
        assert_eq!(ReduceOp::Sum.cost(4, &c), 3);
        assert_eq!(ReduceOp::Mean.cost(4, &c), 4);
        assert_eq!(ReduceOp::Min.cost(4, &c), 3);
        assert_eq!(ReduceOp::Count.cost(4, &c), 3);
        assert_eq!(ReduceOp::Prod.cost(4, &c), 3);
        assert_eq!(ReduceOp::SquaredNorm.cost(4, &c), 4 + 3);
        assert_eq!(ReduceOp::Norm.cost(4, &c), 9 + 3);
        assert_eq!(ReduceOp::StableNorm.cost(4, &c), ReduceOp::Norm.cost(4, &c));
        assert_eq!(ReduceOp::BlueNorm.cost(4, &c), ReduceOp::Norm.cost(4, &c));
        assert_eq!(ReduceOp::HypotNorm.cost(4, &c), 3 * 5);
        // Empty subvectors have no fold steps
        assert_eq!(ReduceOp::Sum.cost(0, &c), 0);
        assert_eq!(ReduceOp::SquaredNorm.cost(0, &c), 0);
    }

    #[test]
    fn test_redux_declared_cost() {
        let r = Redux::with_cost(|a: f64, b: f64| a.hypot(b), 7);
        assert_eq!(Reducer::<f64>::cost(&r, 5), 28);
        let r = Redux::new(|a: f64, b: f64| a + b);
        assert_eq!(Reducer::<f64>::cost(&r, 5), 4);
    }

    #[test]
    fn test_functor_costs_match_catalog() {
        let c = OpCosts::of::<f32>();
        assert_eq!(Reducer::<f32>::cost(&Sum, 10), ReduceOp::Sum.cost(10, &c));
        assert_eq!(
            Reducer::<f32>::cost(&HypotNorm, 10),
            ReduceOp::HypotNorm.cost(10, &c)
        );
        assert_eq!(Reducer::<f32>::op(&BlueNorm), ReduceOp::BlueNorm);
    }

    #[test]
    fn test_display() {
        assert_eq!(ReduceOp::Min.to_string(), "min_coeff");
        assert_eq!(ReduceOp::StableNorm.to_string(), "stable_norm");
    }
}
