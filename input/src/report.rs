//! Batch report types: per-instance results and the summed total.

use serde::Serialize;
use togglesolve::{Outcome, SolveError};

/// Result class of one instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// A minimum was found.
    Solved,
    /// No combination reaches the target.
    NoSolution,
    /// The solver refused the instance (strict index check or free-variable cap).
    Rejected,
}

/// Result of one instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstanceReport {
    /// One-based input line.
    pub line: usize,
    /// Pattern length `n`.
    pub bits: usize,
    /// Number of operations `m`.
    pub operations: usize,
    /// Result class.
    pub status: Status,
    /// Minimum operation count when solved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presses: Option<usize>,
    /// Columns of a minimizing combination when solved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub witness: Option<Vec<usize>>,
    /// Reason when rejected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl InstanceReport {
    /// Report for a solver result.
    pub fn new(
        line: usize,
        bits: usize,
        operations: usize,
        result: Result<Outcome, SolveError>,
    ) -> Self {
        let (status, presses, witness, reason) = match result {
            Ok(Outcome::Solved(s)) => (
                Status::Solved,
                Some(s.weight),
                Some(s.witness.ones().collect()),
                None,
            ),
            Ok(Outcome::NoSolution) => (Status::NoSolution, None, None, None),
            Err(e) => (Status::Rejected, None, None, Some(e.to_string())),
        };
        Self {
            line,
            bits,
            operations,
            status,
            presses,
            witness,
            reason,
        }
    }
}

/// A line skipped because it did not parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MalformedLine {
    /// One-based input line.
    pub line: usize,
    /// Parser message.
    pub message: String,
}

/// Aggregated results of a batch, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    /// One entry per parsed instance.
    pub instances: Vec<InstanceReport>,
    /// Lines that were skipped.
    pub malformed: Vec<MalformedLine>,
    /// Sum of `presses` over solved instances.
    pub total: usize,
}

impl Report {
    /// Build a report and compute its total.
    pub fn new(instances: Vec<InstanceReport>, malformed: Vec<MalformedLine>) -> Self {
        let total = instances.iter().filter_map(|i| i.presses).sum();
        Self {
            instances,
            malformed,
            total,
        }
    }

    /// Number of instances with the given status.
    pub fn count(&self, status: Status) -> usize {
        self.instances.iter().filter(|i| i.status == status).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use togglesolve::{BitVector, Solution};

    #[test]
    fn total_skips_unsolved() {
        let solved = Outcome::Solved(Solution {
            weight: 3,
            witness: BitVector::from_indices(4, [0, 2, 3]),
        });
        let report = Report::new(
            vec![
                InstanceReport::new(1, 4, 4, Ok(solved)),
                InstanceReport::new(2, 2, 1, Ok(Outcome::NoSolution)),
                InstanceReport::new(
                    3,
                    2,
                    3,
                    Err(SolveError::TooManyFreeVariables { free: 2, limit: 1 }),
                ),
            ],
            Vec::new(),
        );
        assert_eq!(report.total, 3);
        assert_eq!(report.count(Status::Solved), 1);
        assert_eq!(report.count(Status::NoSolution), 1);
        assert_eq!(report.count(Status::Rejected), 1);
        assert_eq!(report.instances[0].witness, Some(vec![0, 2, 3]));
        assert_eq!(
            report.instances[2].reason.as_deref(),
            Some("2 free variables exceed the limit of 1")
        );
    }
}
