//! Minimum-weight search over the affine solution space.
//!
//! With `k` free variables the solutions of `Bx = t` are exactly the
//! `2^k` evaluations of the reduced system. All of them are visited in
//! counting order: the counter runs `0..2^k` and its bit `i` is the value of
//! the `i`-th free variable (ascending column). The first assignment of
//! least Hamming weight wins ties.
//!
//! The search is exhaustive and exponential in `k`; bounding `k` is the
//! caller's job (see [`SolveOptions`](crate::SolveOptions)).

use crate::bits::BitVector;
use crate::echelon::Echelon;

/// A least-weight assignment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Solution {
    /// Number of operations used.
    pub weight: usize,
    /// Which operations are used (bit `j` = operation `j`).
    pub witness: BitVector,
}

/// Visit every assignment of the reduced system and keep the lightest.
pub fn minimum_weight(echelon: &Echelon) -> Solution {
    let k = echelon.free_variables().len();
    let mut counter = BitVector::zeros(k);

    let witness = echelon.evaluate(&counter);
    let mut best = Solution {
        weight: witness.weight(),
        witness,
    };

    while counter.increment() {
        let x = echelon.evaluate(&counter);
        let weight = x.weight();
        if weight < best.weight {
            tracing::trace!(weight, free = %counter, "improved");
            best = Solution { weight, witness: x };
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::echelon::{eliminate, Elimination};
    use crate::system::{IndexPolicy, System, ToggleOperation};

    fn reduce(pattern: &str, list: &[&[usize]]) -> (System, Echelon) {
        let target = BitVector::from_pattern(pattern).unwrap();
        let ops: Vec<_> = list
            .iter()
            .map(|l| ToggleOperation::new(l.iter().copied()))
            .collect();
        let s = System::build(target.len(), &target, &ops, IndexPolicy::Ignore).unwrap();
        match eliminate(s.clone()) {
            Elimination::Consistent(e) => (s, e),
            other => panic!("expected consistent system, got {other:?}"),
        }
    }

    #[test]
    fn picks_lighter_free_assignment() {
        let (s, e) = reduce("#.#", &[&[0], &[1], &[2], &[0, 1]]);
        let best = minimum_weight(&e);
        assert_eq!(best.weight, 2);
        assert_eq!(best.witness.to_string(), "#.#.");
        assert!(s.is_solution(&best.witness));
    }

    #[test]
    fn free_assignment_can_beat_particular() {
        // Particular solution uses ops 0 and 1; op 2 alone does the job.
        let (s, e) = reduce("##", &[&[0], &[1], &[0, 1]]);
        assert_eq!(e.particular().weight(), 2);
        let best = minimum_weight(&e);
        assert_eq!(best.weight, 1);
        assert_eq!(best.witness.to_string(), "..#");
        assert!(s.is_solution(&best.witness));
    }

    #[test]
    fn tie_keeps_first_enumerated() {
        // Ops 0 and 1 are identical; counter 0 selects op 0.
        let (_, e) = reduce("#", &[&[0], &[0]]);
        let best = minimum_weight(&e);
        assert_eq!(best.weight, 1);
        assert_eq!(best.witness.to_string(), "#.");
    }

    #[test]
    fn unique_solution_without_free_variables() {
        let (_, e) = reduce("##.", &[&[0], &[0, 1], &[2]]);
        assert!(e.free_variables().is_empty());
        let best = minimum_weight(&e);
        assert_eq!(best.weight, e.particular().weight());
        assert_eq!(best.witness.to_string(), ".#.");
    }

    #[test]
    fn zero_target_needs_nothing() {
        let (_, e) = reduce("...", &[&[0, 1], &[1, 2], &[0, 2]]);
        assert_eq!(minimum_weight(&e).weight, 0);
    }
}
