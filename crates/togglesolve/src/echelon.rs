//! Gauss-Jordan elimination over GF(2).
//!
//! Columns are processed left to right with a pivot-row cursor. For each
//! column the lowest row at or below the cursor holding a 1 becomes the
//! pivot; it is swapped to the cursor and XORed into every other row that
//! has a 1 in that column, above and below. Every row operation is mirrored
//! on the target, so the solution set of `Bx = t` is unchanged.
//!
//! The result is reduced row echelon form: each pivot column is zero
//! outside its pivot row, and the only non-pivot columns a pivot row can
//! reference are free.
//!
//! # Example
//!
//! ```
//! use togglesolve::{eliminate, BitVector, Elimination, IndexPolicy, System, ToggleOperation};
//!
//! let ops: Vec<ToggleOperation> = vec![
//!     ToggleOperation::new([0]),
//!     ToggleOperation::new([1]),
//!     ToggleOperation::new([2]),
//!     ToggleOperation::new([0, 1]),
//! ];
//! let target = BitVector::from_pattern("#.#").unwrap();
//! let system = System::build(3, &target, &ops, IndexPolicy::Ignore).unwrap();
//!
//! match eliminate(system) {
//!     Elimination::Consistent(e) => {
//!         assert_eq!(e.rank(), 3);
//!         assert_eq!(e.free_variables(), &[3]);
//!     }
//!     Elimination::Inconsistent { .. } => unreachable!(),
//! }
//! ```

use crate::bits::BitVector;
use crate::system::System;

/// Outcome of elimination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Elimination {
    /// The system has at least one solution.
    Consistent(Echelon),
    /// Some reduced row reads `0 = 1`.
    Inconsistent {
        /// Every row at or beyond the last pivot whose target bit is set.
        conflicting_rows: Vec<usize>,
    },
}

/// A consistent system in reduced row echelon form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Echelon {
    rows: Vec<BitVector>,
    target: BitVector,
    columns: usize,
    pivot_column_of_row: Vec<Option<usize>>,
    free: Vec<usize>,
}

/// Row-reduce `system`, consuming it.
pub fn eliminate(system: System) -> Elimination {
    let (mut rows, mut target, columns) = system.into_parts();
    let n = rows.len();
    let mut pivot_column_of_row = vec![None; n];
    let mut free = Vec::new();
    let mut cursor = 0;

    for c in 0..columns {
        let Some(sel) = (cursor..n).find(|&r| rows[r].get(c)) else {
            free.push(c);
            continue;
        };

        rows.swap(cursor, sel);
        let (a, b) = (target.get(cursor), target.get(sel));
        target.set(cursor, b);
        target.set(sel, a);
        pivot_column_of_row[cursor] = Some(c);

        // Columns left of `c` are already zero in the pivot row.
        let pivot = rows[cursor].clone();
        let pivot_bit = target.get(cursor);
        for r in 0..n {
            if r != cursor && rows[r].get(c) {
                rows[r].xor_assign(&pivot);
                if pivot_bit {
                    target.toggle(r);
                }
            }
        }

        cursor += 1;
    }

    let conflicting_rows: Vec<usize> = (cursor..n).filter(|&r| target.get(r)).collect();
    if !conflicting_rows.is_empty() {
        tracing::debug!(
            rank = cursor,
            conflicts = conflicting_rows.len(),
            "inconsistent system"
        );
        return Elimination::Inconsistent { conflicting_rows };
    }

    tracing::debug!(rank = cursor, free = free.len(), "eliminated");
    Elimination::Consistent(Echelon {
        rows,
        target,
        columns,
        pivot_column_of_row,
        free,
    })
}

impl Echelon {
    /// Number of pivots.
    pub fn rank(&self) -> usize {
        self.pivot_column_of_row.iter().flatten().count()
    }

    /// Number of variables (operations).
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Columns without a pivot row, ascending.
    pub fn free_variables(&self) -> &[usize] {
        &self.free
    }

    /// Pivot column of each row (`None` past the rank).
    pub fn pivot_columns(&self) -> &[Option<usize>] {
        &self.pivot_column_of_row
    }

    /// The reduced target.
    pub fn target(&self) -> &BitVector {
        &self.target
    }

    /// Full assignment for the given free-variable values.
    ///
    /// Bit `i` of `free_values` is the value of the `i`-th free variable;
    /// missing bits read as 0. Pivot variables are derived from their rows
    /// in reverse elimination order.
    pub fn evaluate(&self, free_values: &BitVector) -> BitVector {
        let mut x = BitVector::zeros(self.columns);
        for (i, &col) in self.free.iter().enumerate() {
            x.set(col, free_values.get(i));
        }

        for (r, pivot) in self.pivot_column_of_row.iter().enumerate().rev() {
            let Some(p) = *pivot else { continue };
            let row = &self.rows[r];
            let mut value = self.target.get(r);
            for c in row.ones().filter(|&c| c > p) {
                value ^= x.get(c);
            }
            x.set(p, value);
        }
        x
    }

    /// The solution with every free variable at zero.
    pub fn particular(&self) -> BitVector {
        self.evaluate(&BitVector::zeros(self.free.len()))
    }
}
