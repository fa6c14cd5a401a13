/// Indicates whether the solver converged or hit the iteration limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Every component passed the relative/absolute step test.
    Converged,
    /// Reached the iteration limit without converging. The caller's
    /// buffer holds the last iterate as a best effort, not a root.
    MaxIters,
}

/// The result of a Newton solve.
///
/// The iterate itself lives in the buffer passed to
/// [`solve`](crate::newton::solve), which is updated in place on every
/// iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,
    /// Iteration count when the solver finished.
    pub iters: usize,
}
