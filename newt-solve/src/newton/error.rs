use thiserror::Error;

/// Errors that can occur during a Newton solve.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The system reports zero equations.
    #[error("system has no equations")]
    EmptySystem,

    /// The initial guess has the wrong number of entries.
    #[error("system has {expected} equations but the initial guess has {found} entries")]
    DimensionMismatch { expected: usize, found: usize },

    /// A config parameter is out of range.
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },

    /// No admissible pivot was found while reducing a row: the Jacobian
    /// is rank deficient, or (for intervals) every candidate's enclosure
    /// straddles zero.
    #[error("singular Jacobian at iteration {iteration}")]
    Singular { iteration: usize },
}
