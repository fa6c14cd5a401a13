use crate::Scalar;

/// A square system of nonlinear equations `f_i(x_0, ..., x_{n-1}) = 0`.
///
/// This is the capability the solver consumes: it evaluates one equation
/// or one row of the Jacobian at a point, and reports how many equations
/// the system has. Implementations must be synchronous and free of
/// observable side effects; the solver calls `eval` and
/// `eval_derivatives` once per equation per Newton iteration.
///
/// Both methods require `i < self.len()` and `x.len() == self.len()`.
pub trait EquationSystem<T: Scalar> {
    /// The number of equations (and unknowns) in the system.
    fn len(&self) -> usize;

    /// A human-readable name for the system.
    fn name(&self) -> &str;

    /// Evaluates equation `i` at the point `x`.
    fn eval(&self, i: usize, x: &[T]) -> T;

    /// Fills `dfdx[j]` with the partial derivative of equation `i` with
    /// respect to unknown `j`, evaluated at `x`.
    fn eval_derivatives(&self, i: usize, x: &[T], dfdx: &mut [T]);

    /// Returns true if the system has no equations.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
