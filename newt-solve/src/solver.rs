use newt_core::{EquationSystem, Scalar};

use crate::newton::{self, Config, Error, Status};

/// Flat status vocabulary reported to presentation layers.
///
/// Front ends and bindings switch on this instead of pattern-matching
/// the engine's error type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverStatus {
    /// The run converged to the requested tolerance.
    Success,
    /// The equation count, guess length, iteration cap, or tolerance was
    /// out of range; nothing was computed.
    InvalidInput,
    /// Elimination found no admissible pivot.
    SingularMatrix,
    /// The iteration cap was reached without convergence.
    MaxIterationsExceeded,
    /// An engine outcome this facade does not recognize.
    LibraryError,
    /// No equation system is attached.
    FunctionNotLoaded,
}

/// The result of one facade-level solve.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<T> {
    pub status: SolverStatus,
    /// Newton iterations performed.
    pub iterations: usize,
    /// The final iterate. Meaningful on `Success` and
    /// `MaxIterationsExceeded`; empty when no system was attached.
    pub solution: Vec<T>,
    /// Human-readable detail on failure paths, empty on success.
    pub message: String,
}

/// Orchestrates Newton runs over an attached equation system.
///
/// The solver borrows the system for its own lifetime and keeps no other
/// state between `solve` calls, so concurrent runs just need separate
/// `Solver` values. An unattached solver refuses to compute anything.
pub struct Solver<'a, T: Scalar> {
    system: Option<&'a dyn EquationSystem<T>>,
}

impl<T: Scalar> Default for Solver<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: Scalar> Solver<'a, T> {
    /// Creates a solver with no system attached.
    #[must_use]
    pub fn new() -> Self {
        Self { system: None }
    }

    /// Attaches the equation system used by subsequent `solve` calls.
    pub fn attach(&mut self, system: &'a dyn EquationSystem<T>) {
        self.system = Some(system);
    }

    /// Returns true if a system is attached.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.system.is_some()
    }

    /// The attached system's display name.
    #[must_use]
    pub fn system_name(&self) -> &str {
        self.system.map_or("no system", |s| s.name())
    }

    /// The attached system's equation count, or zero when unattached.
    #[must_use]
    pub fn equation_count(&self) -> usize {
        self.system.map_or(0, |s| s.len())
    }

    /// Runs Newton's method from the initial guess in `x`.
    ///
    /// The equation count comes from the attached system, never from the
    /// caller. `x` is updated in place; the returned outcome also carries
    /// a copy of the final iterate.
    pub fn solve(&self, x: &mut [T], max_iters: usize, eps: T) -> Outcome<T> {
        let Some(system) = self.system else {
            return Outcome {
                status: SolverStatus::FunctionNotLoaded,
                iterations: 0,
                solution: Vec::new(),
                message: "no equation system attached".into(),
            };
        };

        let config = Config { max_iters, eps };
        match newton::solve(system, x, &config) {
            Ok(solution) => Outcome {
                status: match solution.status {
                    Status::Converged => SolverStatus::Success,
                    Status::MaxIters => SolverStatus::MaxIterationsExceeded,
                },
                iterations: solution.iters,
                solution: x.to_vec(),
                message: String::new(),
            },
            Err(err) => {
                let (status, iterations) = match err {
                    Error::EmptySystem
                    | Error::DimensionMismatch { .. }
                    | Error::InvalidConfig { .. } => (SolverStatus::InvalidInput, 0),
                    Error::Singular { iteration } => (SolverStatus::SingularMatrix, iteration),
                    // `Error` is non-exhaustive; variants the engine grows
                    // later surface as a generic library error.
                    #[allow(unreachable_patterns)]
                    _ => (SolverStatus::LibraryError, 0),
                };
                Outcome {
                    status,
                    iterations,
                    solution: x.to_vec(),
                    message: err.to_string(),
                }
            }
        }
    }
}
