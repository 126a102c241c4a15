//! Property-based tests for the toggle solver.
//!
//! Small random instances are checked against an exhaustive search over all
//! `2^m` operation subsets, which serves as the reference implementation.

use proptest::prelude::*;
use togglesolve::{
    eliminate, solve, BitVector, Elimination, IndexPolicy, Outcome, System, ToggleOperation,
};

/// Pattern after pressing the operations selected by `mask`.
fn press(n: usize, ops: &[Vec<usize>], mask: u32) -> Vec<bool> {
    let mut bits = vec![false; n];
    for (j, op) in ops.iter().enumerate() {
        if mask >> j & 1 == 1 {
            for &i in op.iter().filter(|&&i| i < n) {
                bits[i] = !bits[i];
            }
        }
    }
    bits
}

fn brute_force(target: &[bool], ops: &[Vec<usize>]) -> Option<u32> {
    (0u32..1 << ops.len())
        .filter(|&mask| press(target.len(), ops, mask) == target)
        .map(u32::count_ones)
        .min()
}

fn operations(ops: &[Vec<usize>]) -> Vec<ToggleOperation> {
    ops.iter().map(|o| ToggleOperation::new(o.iter().copied())).collect()
}

/// Random instance: target bits and operations whose indices may overshoot
/// the pattern by one or two.
fn instance() -> impl Strategy<Value = (Vec<bool>, Vec<Vec<usize>>)> {
    (0usize..=6, 0usize..=9).prop_flat_map(|(n, m)| {
        (
            prop::collection::vec(any::<bool>(), n),
            prop::collection::vec(prop::collection::vec(0..n + 2, 0..=4), m),
        )
    })
}

// =============================================================================
// Reference Agreement
// =============================================================================

proptest! {
    /// The minimum weight equals the exhaustive minimum over all subsets.
    #[test]
    fn prop_matches_brute_force((target, ops) in instance()) {
        let t = BitVector::from_bools(&target);
        let outcome = solve(target.len(), &t, &operations(&ops));
        let expected = brute_force(&target, &ops).map(|w| w as usize);
        prop_assert_eq!(outcome.weight(), expected);
    }

    /// Pressing the witness reproduces the target.
    #[test]
    fn prop_witness_round_trip((target, ops) in instance()) {
        let t = BitVector::from_bools(&target);
        let list = operations(&ops);
        if let Outcome::Solved(s) = solve(target.len(), &t, &list) {
            let system = System::build(target.len(), &t, &list, IndexPolicy::Ignore).unwrap();
            prop_assert_eq!(system.apply(&s.witness), t);
            prop_assert_eq!(s.witness.len(), list.len());
            prop_assert_eq!(s.witness.weight(), s.weight);
        }
    }

    /// Identical inputs give identical outcomes, witness included.
    #[test]
    fn prop_deterministic((target, ops) in instance()) {
        let t = BitVector::from_bools(&target);
        let list = operations(&ops);
        prop_assert_eq!(solve(target.len(), &t, &list), solve(target.len(), &t, &list));
    }
}

// =============================================================================
// Structural Properties
// =============================================================================

proptest! {
    /// Removing an operation never lowers the minimum weight.
    #[test]
    fn prop_removal_is_monotone((target, ops) in instance(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!ops.is_empty());
        let t = BitVector::from_bools(&target);
        let full = solve(target.len(), &t, &operations(&ops));

        let mut fewer = ops.clone();
        fewer.remove(pick.index(ops.len()));
        let reduced = solve(target.len(), &t, &operations(&fewer));

        if let (Some(a), Some(b)) = (full.weight(), reduced.weight()) {
            prop_assert!(b >= a, "removal lowered weight {} -> {}", a, b);
        }
        if full == Outcome::NoSolution {
            prop_assert_eq!(reduced, Outcome::NoSolution);
        }
    }

    /// With no free variables the answer is the unique solution.
    #[test]
    fn prop_zero_free_variables_unique((target, ops) in instance()) {
        let t = BitVector::from_bools(&target);
        let list = operations(&ops);
        let system = System::build(target.len(), &t, &list, IndexPolicy::Ignore).unwrap();
        if let Elimination::Consistent(e) = eliminate(system) {
            if e.free_variables().is_empty() {
                let unique = e.particular();
                prop_assert_eq!(solve(target.len(), &t, &list).weight(), Some(unique.weight()));
            }
        }
    }

    /// Rank plus free variables accounts for every column.
    #[test]
    fn prop_rank_nullity((target, ops) in instance()) {
        let t = BitVector::from_bools(&target);
        let system = System::build(target.len(), &t, &operations(&ops), IndexPolicy::Ignore).unwrap();
        if let Elimination::Consistent(e) = eliminate(system) {
            prop_assert_eq!(e.rank() + e.free_variables().len(), ops.len());
            let free = e.free_variables();
            prop_assert!(free.windows(2).all(|w| w[0] < w[1]));
        }
    }

    /// A pattern bit no operation touches makes a set target bit unsolvable.
    #[test]
    fn prop_untouched_bit_is_inconsistent((target, ops) in instance()) {
        let n = target.len() + 1;
        let mut bits = target.clone();
        bits.push(true);
        let t = BitVector::from_bools(&bits);
        // Indices < n - 1 only, so bit n - 1 is never toggled.
        let restricted: Vec<Vec<usize>> = ops
            .iter()
            .map(|o| o.iter().copied().filter(|&i| i < n - 1).collect())
            .collect();
        prop_assert_eq!(solve(n, &t, &operations(&restricted)), Outcome::NoSolution);
    }
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn three_bits_four_operations() {
    let target = BitVector::from_bools(&[true, false, true]);
    let ops = operations(&[vec![0], vec![1], vec![2], vec![0, 1]]);
    let outcome = solve(3, &target, &ops);
    assert_eq!(outcome.weight(), Some(2));

    let witness = outcome.witness().unwrap();
    let system = System::build(3, &target, &ops, IndexPolicy::Ignore).unwrap();
    assert_eq!(system.apply(witness), target);
}

#[test]
fn single_operation_cannot_reach_second_bit() {
    let target = BitVector::from_bools(&[true, true]);
    let ops = operations(&[vec![0]]);
    assert_eq!(solve(2, &target, &ops), Outcome::NoSolution);
}

#[test]
fn inconsistent_row_reported() {
    let target = BitVector::from_bools(&[false, true, true]);
    let ops = operations(&[vec![0], vec![0]]);
    let system = System::build(3, &target, &ops, IndexPolicy::Ignore).unwrap();
    match eliminate(system) {
        Elimination::Inconsistent { conflicting_rows } => assert_eq!(conflicting_rows, vec![1, 2]),
        other => panic!("expected inconsistency, got {other:?}"),
    }
}

#[test]
fn solves_concurrently() {
    let target = BitVector::from_pattern(".###.#").unwrap();
    let ops = operations(&[
        vec![0, 1, 2, 3, 4],
        vec![0, 3, 4],
        vec![0, 1, 2, 4, 5],
        vec![1, 2],
    ]);
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let (t, o) = (target.clone(), ops.clone());
            std::thread::spawn(move || solve(6, &t, &o).weight())
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), Some(2));
    }
}
