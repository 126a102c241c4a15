//! Solver facade: build, eliminate, enumerate.
//!
//! [`solve`] is the infallible default. [`Solver`] adds the strict index
//! policy and a free-variable bound for callers that must cap the
//! exponential search before it starts.
//!
//! # Example
//!
//! ```
//! use togglesolve::{solve, BitVector, Outcome, ToggleOperation};
//!
//! let target = BitVector::from_pattern("##").unwrap();
//! let ops = [ToggleOperation::new([0])];
//! assert_eq!(solve(2, &target, &ops), Outcome::NoSolution);
//! ```

use crate::bits::BitVector;
use crate::echelon::{eliminate, Elimination};
use crate::enumerate::{minimum_weight, Solution};
use crate::error::SolveError;
use crate::system::{IndexPolicy, System, ToggleOperation};

/// Result of solving one instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// No combination of operations reproduces the target.
    NoSolution,
    /// The least number of operations, with one combination achieving it.
    Solved(Solution),
}

impl Outcome {
    /// Minimum operation count, if solvable.
    pub fn weight(&self) -> Option<usize> {
        match self {
            Outcome::NoSolution => None,
            Outcome::Solved(s) => Some(s.weight),
        }
    }

    /// A minimizing assignment, if solvable.
    pub fn witness(&self) -> Option<&BitVector> {
        match self {
            Outcome::NoSolution => None,
            Outcome::Solved(s) => Some(&s.witness),
        }
    }

    /// True unless [`Outcome::NoSolution`].
    pub fn is_solved(&self) -> bool {
        matches!(self, Outcome::Solved(_))
    }
}

/// Knobs for [`Solver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SolveOptions {
    /// Treatment of operation indices outside the pattern.
    pub index_policy: IndexPolicy,
    /// Refuse to enumerate more than this many free variables.
    pub max_free_variables: Option<usize>,
}

/// Stateless solver configured by [`SolveOptions`].
///
/// `Copy` and `Sync`: one value can be shared across any number of threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Solver {
    options: SolveOptions,
}

impl Solver {
    /// Solver with the given options.
    pub fn new(options: SolveOptions) -> Self {
        Self { options }
    }

    /// Options in effect.
    pub fn options(&self) -> &SolveOptions {
        &self.options
    }

    /// Solve one instance.
    ///
    /// # Errors
    ///
    /// - [`SolveError::Build`] if an index is out of range under
    ///   [`IndexPolicy::Reject`].
    /// - [`SolveError::TooManyFreeVariables`] if elimination leaves more free
    ///   variables than `max_free_variables`. Checked before enumeration.
    pub fn solve(
        &self,
        pattern_length: usize,
        target: &BitVector,
        operations: &[ToggleOperation],
    ) -> Result<Outcome, SolveError> {
        let system = System::build(pattern_length, target, operations, self.options.index_policy)?;

        let echelon = match eliminate(system) {
            Elimination::Inconsistent { .. } => return Ok(Outcome::NoSolution),
            Elimination::Consistent(e) => e,
        };

        let free = echelon.free_variables().len();
        if let Some(limit) = self.options.max_free_variables {
            if free > limit {
                return Err(SolveError::TooManyFreeVariables { free, limit });
            }
        }

        let best = minimum_weight(&echelon);
        tracing::debug!(weight = best.weight, free, "solved");
        Ok(Outcome::Solved(best))
    }
}

/// Solve one instance with the default policy.
///
/// Out-of-range indices are ignored and the search is unbounded, so this
/// always returns an outcome.
pub fn solve(pattern_length: usize, target: &BitVector, operations: &[ToggleOperation]) -> Outcome {
    let system = match System::build(pattern_length, target, operations, IndexPolicy::Ignore) {
        Ok(s) => s,
        // Ignore never rejects an index.
        Err(_) => return Outcome::NoSolution,
    };
    match eliminate(system) {
        Elimination::Inconsistent { .. } => Outcome::NoSolution,
        Elimination::Consistent(e) => Outcome::Solved(minimum_weight(&e)),
    }
}
