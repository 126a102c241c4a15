//! Errors raised by the strict solver configuration.
//!
//! The default [`solve`](crate::solve) path never produces these.

use thiserror::Error;

/// Matrix construction failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// An operation references a bit outside the pattern.
    #[error("operation {operation} toggles bit {index}, pattern has only {pattern_length} bits")]
    IndexOutOfRange {
        /// Column of the offending operation.
        operation: usize,
        /// The out-of-range bit index.
        index: usize,
        /// Pattern length `n`.
        pattern_length: usize,
    },
}

/// Failure of [`Solver::solve`](crate::Solver::solve).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The system could not be built.
    #[error(transparent)]
    Build(#[from] BuildError),

    /// Enumeration would exceed the caller's free-variable bound.
    #[error("{free} free variables exceed the limit of {limit}")]
    TooManyFreeVariables {
        /// Free variables after elimination.
        free: usize,
        /// Configured maximum.
        limit: usize,
    },
}
