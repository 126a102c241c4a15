//! togglesolve — minimum-weight solutions of toggle systems over GF(2).
//!
//! A pattern of `n` bits starts all off. Each of `m` toggle operations flips
//! a fixed set of bits. Given a target pattern, find the fewest operations
//! whose combined effect produces it, or report that none does.
//!
//! Pressing an operation twice cancels out, so a combination is a vector
//! `x ∈ GF(2)^m` and the question is the least-weight solution of `Bx = t`.
//!
//! # Pipeline
//!
//! ```text
//! operations ──► System (B, t) ──► eliminate ──► Echelon ──► minimum_weight ──► Outcome
//!                   build            RREF        free vars     2^k search
//! ```
//!
//! | Stage | Module | Cost |
//! |-------|--------|------|
//! | Build | [`System::build`] | `O(n·m)` |
//! | Eliminate | [`eliminate`] | `O(min(n,m)·n·m)` |
//! | Enumerate | [`minimum_weight`] | `O(2^k·(n+m))` |
//!
//! `k` is the number of free variables. The search is exhaustive by
//! contract; cap `k` with [`SolveOptions::max_free_variables`].
//!
//! # Example
//!
//! ```
//! use togglesolve::{solve, BitVector, Outcome, ToggleOperation};
//!
//! let target = BitVector::from_pattern("#.#").unwrap();
//! let ops = [
//!     ToggleOperation::new([0]),
//!     ToggleOperation::new([1]),
//!     ToggleOperation::new([2]),
//!     ToggleOperation::new([0, 1]),
//! ];
//!
//! let outcome = solve(3, &target, &ops);
//! assert_eq!(outcome.weight(), Some(2));
//! ```
//!
//! # Concurrency
//!
//! Every function here is pure and every type is `Send + Sync`. Independent
//! instances can be solved on as many threads as the caller likes.

mod bits;
pub use bits::BitVector;

mod system;
pub use system::{IndexPolicy, System, ToggleOperation};

mod echelon;
pub use echelon::{eliminate, Echelon, Elimination};

mod enumerate;
pub use enumerate::{minimum_weight, Solution};

mod solver;
pub use solver::{solve, Outcome, SolveOptions, Solver};

mod error;
pub use error::{BuildError, SolveError};
