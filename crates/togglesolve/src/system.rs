//! Matrix builder: toggle operations as a linear system over GF(2).
//!
//! Row `i` of the matrix is bit `i` of the pattern; column `j` is operation
//! `j`. `B[i][j] = 1` iff operation `j` toggles bit `i`, so pressing the
//! operations selected by `x` turns an all-zero pattern into `B·x`.
//!
//! # Example
//!
//! ```
//! use togglesolve::{BitVector, IndexPolicy, System, ToggleOperation};
//!
//! let ops = [ToggleOperation::new([0, 1]), ToggleOperation::new([1, 2])];
//! let target = BitVector::from_pattern("#.#").unwrap();
//! let system = System::build(3, &target, &ops, IndexPolicy::Ignore).unwrap();
//!
//! let both = BitVector::from_pattern("##").unwrap();
//! assert_eq!(system.apply(&both), target);
//! ```

use crate::bits::BitVector;
use crate::error::BuildError;

/// One toggle operation: the bit indices it flips.
///
/// Indices accumulate by XOR, so listing an index twice cancels it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ToggleOperation {
    indices: Vec<usize>,
}

impl ToggleOperation {
    /// Operation flipping each listed index.
    pub fn new(indices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            indices: indices.into_iter().collect(),
        }
    }

    /// Indices as listed.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// True if the operation lists no index.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

impl FromIterator<usize> for ToggleOperation {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// How the builder treats an operation index outside `[0, n)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndexPolicy {
    /// The index is a no-op for that operation.
    #[default]
    Ignore,
    /// The index is a build error.
    Reject,
}

/// An `n × m` matrix over GF(2) paired with a target of length `n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct System {
    rows: Vec<BitVector>,
    target: BitVector,
    columns: usize,
}

impl System {
    /// Build the system for a pattern of `pattern_length` bits.
    ///
    /// Target bits beyond `pattern_length` are not read; missing ones are 0.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::IndexOutOfRange`] for the first offending index
    /// when `policy` is [`IndexPolicy::Reject`]. Never fails under
    /// [`IndexPolicy::Ignore`].
    pub fn build(
        pattern_length: usize,
        target: &BitVector,
        operations: &[ToggleOperation],
        policy: IndexPolicy,
    ) -> Result<Self, BuildError> {
        let columns = operations.len();
        let mut rows = vec![BitVector::zeros(columns); pattern_length];

        for (j, op) in operations.iter().enumerate() {
            for &bit in op.indices() {
                match rows.get_mut(bit) {
                    Some(row) => row.toggle(j),
                    None if policy == IndexPolicy::Reject => {
                        return Err(BuildError::IndexOutOfRange {
                            operation: j,
                            index: bit,
                            pattern_length,
                        });
                    }
                    None => {}
                }
            }
        }

        let mut t = BitVector::zeros(pattern_length);
        for i in target.ones().take_while(|&i| i < pattern_length) {
            t.set(i, true);
        }

        Ok(Self {
            rows,
            target: t,
            columns,
        })
    }

    /// Number of pattern bits (`n`).
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of operations (`m`).
    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Coefficient `B[row][column]`.
    #[inline]
    pub fn coefficient(&self, row: usize, column: usize) -> bool {
        self.rows.get(row).is_some_and(|r| r.get(column))
    }

    /// The target pattern `t`.
    pub fn target(&self) -> &BitVector {
        &self.target
    }

    /// `B·x`: the pattern produced by pressing the operations selected by
    /// `assignment`, starting from all bits off.
    pub fn apply(&self, assignment: &BitVector) -> BitVector {
        let mut out = BitVector::zeros(self.rows());
        for (i, row) in self.rows.iter().enumerate() {
            if row.dot(assignment) {
                out.set(i, true);
            }
        }
        out
    }

    /// True if `assignment` reproduces the target.
    pub fn is_solution(&self, assignment: &BitVector) -> bool {
        self.apply(assignment) == self.target
    }

    pub(crate) fn into_parts(self) -> (Vec<BitVector>, BitVector, usize) {
        (self.rows, self.target, self.columns)
    }
}
