//! Shared fixtures for the cross-crate solver tests.

use newt_core::{EquationSystem, Scalar};

/// A system whose Jacobian rows are proportional everywhere, so the
/// first elimination step has no admissible pivot.
pub struct ProportionalRows;

impl EquationSystem<f64> for ProportionalRows {
    fn len(&self) -> usize {
        2
    }

    fn name(&self) -> &str {
        "proportional rows"
    }

    fn eval(&self, i: usize, x: &[f64]) -> f64 {
        let s = x[0] + x[1];
        if i == 0 { s } else { 2.0 * s - 1.0 }
    }

    fn eval_derivatives(&self, i: usize, _x: &[f64], dfdx: &mut [f64]) {
        let scale = if i == 0 { 1.0 } else { 2.0 };
        dfdx[0] = scale;
        dfdx[1] = scale;
    }
}

/// The largest residual magnitude of `system` at `x`.
///
/// This is the acceptance oracle for a reported root: whatever pivot
/// order the elimination chose internally, re-substituting the solution
/// into the original equations must give values near zero.
pub fn max_residual<T, S>(system: &S, x: &[T]) -> f64
where
    T: Scalar,
    S: EquationSystem<T>,
{
    (0..system.len())
        .map(|i| system.eval(i, x).magnitude().convergence_scale())
        .fold(0.0, f64::max)
}
