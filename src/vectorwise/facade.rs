//! Directional facades returned by `colwise()` / `rowwise()`

use super::broadcast::check_operand;
use super::{Broadcast, Direction, PartialRedux};
use crate::dtype::{Element, RealElement, Scalar};
use crate::error::Result;
use crate::expr::{CwiseBinary, MatrixExpr, Replicate, Reverse};
use crate::matrix::{Lane, Matrix};
use crate::ops::{
    All, Any, BinaryOp, BlueNorm, Count, HypotNorm, MaxCoeff, Mean, MinCoeff, Norm, Prod,
    Reducer, Redux, SquaredNorm, StableNorm, Sum,
};
use std::fmt;
use tracing::trace;

/// Read-only vectorwise view of an expression
///
/// Holds the expression (a reference for `colwise()`/`rowwise()`, an owned
/// temporary for `into_colwise()`/`into_rowwise()`) and the direction. Every
/// operation consumes the facade and returns a lazy expression; the facade
/// itself is cheap to rebuild.
///
/// # Example
///
/// ```
/// use vecwise::prelude::*;
///
/// let a = Matrix::from_slice(&[1.0f64, 2.0, 3.0, 4.0], 2, 2);
/// assert_eq!(a.colwise().sum().to_vec(), vec![4.0, 6.0]);
/// assert_eq!(a.rowwise().sum().to_vec(), vec![3.0, 7.0]);
/// assert_eq!(a.colwise().max_coeff()?.to_vec(), vec![3.0, 4.0]);
/// # Ok::<(), vecwise::error::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct VectorwiseOp<E> {
    expr: E,
    direction: Direction,
}

impl<E: MatrixExpr> VectorwiseOp<E> {
    /// Wrap `expr` for operations along `direction`
    pub fn new(expr: E, direction: Direction) -> Self {
        Self { expr, direction }
    }

    /// Axis the facade works along
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The wrapped expression
    pub fn expression(&self) -> &E {
        &self.expr
    }

    /// Number of subvectors (columns for colwise, rows for rowwise)
    pub fn subvector_count(&self) -> usize {
        self.direction
            .subvector_count(self.expr.rows(), self.expr.cols())
    }

    /// Length of each subvector
    pub fn subvector_len(&self) -> usize {
        self.direction
            .subvector_len(self.expr.rows(), self.expr.cols())
    }

    /// Subvector `index` as a lane
    pub fn subvector(&self, index: usize) -> Lane<'_, E> {
        Lane::new(&self.expr, self.direction, index)
    }

    /// Reduce every subvector with an arbitrary functor
    pub fn reduce<F: Reducer<E::Elem>>(self, functor: F) -> Result<PartialRedux<E, F>> {
        PartialRedux::new(self.expr, functor, self.direction)
    }

    /// Repeat the expression `factor` times along the facade's axis
    ///
    /// Colwise stacks copies vertically, rowwise side by side.
    pub fn replicate(self, factor: usize) -> Result<Replicate<E>> {
        match self.direction {
            Direction::Vertical => Replicate::new(self.expr, factor, 1),
            Direction::Horizontal => Replicate::new(self.expr, 1, factor),
        }
    }

    /// Reverse each column (colwise) or each row (rowwise)
    pub fn reverse(self) -> Reverse<E> {
        Reverse::new(self.expr, self.direction)
    }

    // ===== Logical reductions (numeric elements or bool masks) =====

    /// Number of truthy coefficients per subvector
    pub fn count(self) -> PartialRedux<E, Count>
    where
        Count: Reducer<E::Elem>,
    {
        PartialRedux::with_identity(self.expr, Count, self.direction)
    }

    /// Whether every coefficient of each subvector is truthy
    pub fn all(self) -> PartialRedux<E, All>
    where
        All: Reducer<E::Elem>,
    {
        PartialRedux::with_identity(self.expr, All, self.direction)
    }

    /// Whether any coefficient of each subvector is truthy
    pub fn any(self) -> PartialRedux<E, Any>
    where
        Any: Reducer<E::Elem>,
    {
        PartialRedux::with_identity(self.expr, Any, self.direction)
    }
}

impl<E> VectorwiseOp<E>
where
    E: MatrixExpr,
    E::Elem: Element,
{
    /// Sum of each subvector; `0` for empty subvectors
    pub fn sum(self) -> PartialRedux<E, Sum> {
        PartialRedux::with_identity(self.expr, Sum, self.direction)
    }

    /// Mean of each subvector
    ///
    /// Fails with `DegenerateInput` when the subvectors are empty.
    pub fn mean(self) -> Result<PartialRedux<E, Mean>> {
        self.reduce(Mean)
    }

    /// Smallest coefficient of each subvector
    ///
    /// Fails with `DegenerateInput` when the subvectors are empty.
    pub fn min_coeff(self) -> Result<PartialRedux<E, MinCoeff>> {
        self.reduce(MinCoeff)
    }

    /// Largest coefficient of each subvector
    ///
    /// Fails with `DegenerateInput` when the subvectors are empty.
    pub fn max_coeff(self) -> Result<PartialRedux<E, MaxCoeff>> {
        self.reduce(MaxCoeff)
    }

    /// Product of each subvector; `1` for empty subvectors
    pub fn prod(self) -> PartialRedux<E, Prod> {
        PartialRedux::with_identity(self.expr, Prod, self.direction)
    }

    /// Sum of squares of each subvector
    pub fn squared_norm(self) -> PartialRedux<E, SquaredNorm> {
        PartialRedux::with_identity(self.expr, SquaredNorm, self.direction)
    }

    /// Left fold of each subvector with `func`, seeded by its first element
    ///
    /// `func` is assumed associative and declared to cost one addition.
    /// Fails with `DegenerateInput` when the subvectors are empty.
    ///
    /// ```
    /// use vecwise::prelude::*;
    /// let a = Matrix::from_slice(&[1, 5, 7, 2], 2, 2);
    /// let r = a.colwise().redux(|x: i32, y: i32| x.max(y))?;
    /// assert_eq!(r.to_vec(), vec![7, 5]);
    /// # Ok::<(), vecwise::error::Error>(())
    /// ```
    pub fn redux<F>(self, func: F) -> Result<PartialRedux<E, Redux<F>>>
    where
        F: Fn(E::Elem, E::Elem) -> E::Elem,
    {
        self.reduce(Redux::new(func))
    }

    /// [`redux`](Self::redux) with an explicit per-step cost of `func`
    pub fn redux_with_cost<F>(self, func: F, op_cost: usize) -> Result<PartialRedux<E, Redux<F>>>
    where
        F: Fn(E::Elem, E::Elem) -> E::Elem,
    {
        self.reduce(Redux::with_cost(func, op_cost))
    }

    /// `expr + operand` with the vector operand broadcast along the axis
    ///
    /// Nothing is evaluated and the source is not mutated. Fails with a
    /// shape error unless the operand has one entry per subvector.
    pub fn add<V>(self, operand: V) -> Result<CwiseBinary<E, Broadcast<V>>>
    where
        V: MatrixExpr<Elem = E::Elem>,
    {
        self.broadcast_binary(operand, BinaryOp::Add)
    }

    /// `expr - operand` with the vector operand broadcast along the axis
    pub fn sub<V>(self, operand: V) -> Result<CwiseBinary<E, Broadcast<V>>>
    where
        V: MatrixExpr<Elem = E::Elem>,
    {
        self.broadcast_binary(operand, BinaryOp::Sub)
    }

    /// Any coefficient-wise operator against a broadcast vector
    pub fn broadcast_binary<V>(
        self,
        operand: V,
        op: BinaryOp,
    ) -> Result<CwiseBinary<E, Broadcast<V>>>
    where
        V: MatrixExpr<Elem = E::Elem>,
    {
        let extended = Broadcast::new(operand, self.direction, self.expr.rows(), self.expr.cols())?;
        CwiseBinary::new(self.expr, extended, op)
    }
}

impl<E> VectorwiseOp<E>
where
    E: MatrixExpr,
    E::Elem: RealElement,
{
    /// Euclidean norm of each subvector, `sqrt(squared_norm)`
    ///
    /// Overflows or underflows like the squared norm does.
    pub fn norm(self) -> PartialRedux<E, Norm> {
        PartialRedux::with_identity(self.expr, Norm, self.direction)
    }

    /// Euclidean norm with running rescaling
    pub fn stable_norm(self) -> PartialRedux<E, StableNorm> {
        PartialRedux::with_identity(self.expr, StableNorm, self.direction)
    }

    /// Euclidean norm by Blue's algorithm
    pub fn blue_norm(self) -> PartialRedux<E, BlueNorm> {
        PartialRedux::with_identity(self.expr, BlueNorm, self.direction)
    }

    /// Euclidean norm folded with `hypot`
    pub fn hypot_norm(self) -> PartialRedux<E, HypotNorm> {
        PartialRedux::with_identity(self.expr, HypotNorm, self.direction)
    }
}

/// Mutable vectorwise view of a [`Matrix`]
///
/// Obtained from [`Matrix::colwise_mut`] / [`Matrix::rowwise_mut`]. The
/// broadcast updates validate the operand and copy it before the first
/// write, so a failed call leaves the matrix untouched.
///
/// The operand is shaped like the result of a reduction in the same
/// direction: one entry per column for colwise (a `1 x cols` vector, so
/// `A[i][j] += v[j]`), one entry per row for rowwise (a `rows x 1` vector,
/// so `A[i][j] += v[i]`). A vector of the right length in the other
/// orientation is accepted too. This is why
/// `a.colwise_mut().sub_assign(&a.colwise().mean()?.eval())` centers every
/// column.
pub struct VectorwiseOpMut<'a, T> {
    matrix: &'a mut Matrix<T>,
    direction: Direction,
}

impl<T: Scalar> fmt::Debug for VectorwiseOpMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VectorwiseOpMut")
            .field("shape", &self.matrix.shape())
            .field("direction", &self.direction)
            .finish()
    }
}

impl<'a, T: Scalar> VectorwiseOpMut<'a, T> {
    /// Wrap `matrix` for updates along `direction`
    pub fn new(matrix: &'a mut Matrix<T>, direction: Direction) -> Self {
        Self { matrix, direction }
    }

    /// Axis the facade works along
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Read-only facade over the same matrix
    pub fn view(&self) -> VectorwiseOp<&Matrix<T>> {
        VectorwiseOp::new(&*self.matrix, self.direction)
    }

    /// Give up mutable access and keep a read-only facade
    pub fn into_view(self) -> VectorwiseOp<&'a Matrix<T>> {
        VectorwiseOp::new(self.matrix, self.direction)
    }

    /// Overwrite the matrix with the broadcast operand
    ///
    /// For colwise, `A[i][j] = v[j]`; for rowwise, `A[i][j] = v[i]`. Returns
    /// the matrix for chaining.
    pub fn assign<V>(self, operand: V) -> Result<&'a mut Matrix<T>>
    where
        V: MatrixExpr<Elem = T>,
    {
        self.update(operand, "assign", |_, v| v)
    }
}

impl<'a, T: Element> VectorwiseOpMut<'a, T> {
    /// In-place `A += broadcast(operand)`
    pub fn add_assign<V>(self, operand: V) -> Result<&'a mut Matrix<T>>
    where
        V: MatrixExpr<Elem = T>,
    {
        self.update(operand, "add_assign", |a, v| a + v)
    }

    /// In-place `A -= broadcast(operand)`
    pub fn sub_assign<V>(self, operand: V) -> Result<&'a mut Matrix<T>>
    where
        V: MatrixExpr<Elem = T>,
    {
        self.update(operand, "sub_assign", |a, v| a - v)
    }
}

impl<'a, T: Scalar> VectorwiseOpMut<'a, T> {
    fn update<V, F>(self, operand: V, what: &'static str, f: F) -> Result<&'a mut Matrix<T>>
    where
        V: MatrixExpr<Elem = T>,
        F: Fn(T, T) -> T,
    {
        let Self { matrix, direction } = self;
        let (rows, cols) = (matrix.rows(), matrix.cols());
        let count = check_operand(&operand, direction, rows, cols)?;
        let values: Vec<T> = (0..count).map(|j| operand.coeff_linear(j)).collect();

        trace!(
            op = what,
            %direction,
            subvectors = count,
            len = direction.subvector_len(rows, cols),
            "broadcast update"
        );

        for r in 0..rows {
            for c in 0..cols {
                let v = values[direction.lane_index(r, c)];
                let a = &mut matrix[(r, c)];
                *a = f(*a, v);
            }
        }
        Ok(matrix)
    }
}
