mod config;
mod elimination;
mod error;
mod solution;

pub use config::Config;
pub use error::Error;
pub use solution::{Solution, Status};

use elimination::Elimination;
use newt_core::{EquationSystem, Scalar};

/// Finds a root of `system` by Newton's method.
///
/// Each iteration linearizes the system at the current iterate and
/// solves the correction step with an incremental pivoting elimination
/// that folds equation rows in one at a time instead of factoring a full
/// Jacobian matrix. Instantiated over `f64` this is an ordinary Newton
/// solver; over [`Interval`](newt_core::Interval) it propagates
/// enclosures, and a singular report means the pivot could genuinely be
/// zero given the input uncertainty.
///
/// `x` holds the initial guess on entry and the final iterate on exit.
/// It is updated after every iteration, so on `Status::MaxIters` it
/// holds the best-effort (non-converged) iterate.
///
/// # Errors
///
/// Returns an error if the system is empty, `x` has the wrong length,
/// the config is invalid, or a pivot is singular. Validation failures
/// are detected before any equation is evaluated.
pub fn solve<T, S>(system: &S, x: &mut [T], config: &Config<T>) -> Result<Solution, Error>
where
    T: Scalar,
    S: EquationSystem<T> + ?Sized,
{
    let n = system.len();
    if n < 1 {
        return Err(Error::EmptySystem);
    }
    if x.len() != n {
        return Err(Error::DimensionMismatch {
            expected: n,
            found: x.len(),
        });
    }
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    let mut dfdx = vec![T::ZERO; n];
    let mut row = vec![T::ZERO; n + 1];

    let mut iter = 0;
    loop {
        iter += 1;
        if iter > config.max_iters {
            return Ok(Solution {
                status: Status::MaxIters,
                iters: config.max_iters,
            });
        }

        // The tableau lives for exactly one iteration.
        let mut elim = Elimination::new(n);
        for k in 0..n {
            system.eval_derivatives(k, x, &mut dfdx);
            row[..n].copy_from_slice(&dfdx);

            // Express the linearization f_k(x) + J_k (x_new - x) = 0 as a
            // linear equation in x_new: J_k . x_new = J_k . x - f_k(x).
            let mut rhs = -system.eval(k, x);
            for j in 0..n {
                rhs = rhs + dfdx[j] * x[j];
            }
            row[n] = rhs;

            elim.fold(&mut row)
                .map_err(|_| Error::Singular { iteration: iter })?;
        }
        let next = elim.into_solution();

        // The verdict is computed over the old and new iterates first;
        // the overwrite that follows is unconditional.
        let converged = x
            .iter()
            .zip(&next)
            .all(|(old, new)| old.step_converged(*new, config.eps));
        x.copy_from_slice(&next);

        if converged {
            return Ok(Solution {
                status: Status::Converged,
                iters: iter,
            });
        }
    }
}
