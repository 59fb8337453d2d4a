//! Exhaustive enumeration of every subset.
//!
//! Walks subset indices `0..2^n` in order; bit `j` of the index includes
//! item `j`. The first subset reaching the best feasible value wins, so
//! ties go to the lowest index.

use knapbench_core::{Capacity, Item, Selection, Solution};
use tracing::{debug, warn};

use crate::solver::KnapsackSolver;

/// Largest item count a 64-bit subset index can enumerate.
///
/// Inputs beyond this are truncated; the harness caps far lower.
pub const MAX_ENUMERABLE_ITEMS: usize = 63;

/// Brute-force solver: O(2^n * n) time, O(n) extra space.
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForceSolver;

impl BruteForceSolver {
    pub fn new() -> Self {
        Self
    }
}

impl KnapsackSolver for BruteForceSolver {
    fn solve(&self, items: &[Item], capacity: Capacity) -> Solution {
        let considered = if items.len() > MAX_ENUMERABLE_ITEMS {
            warn!(
                event = "enumeration_truncated",
                solver = self.solver_name(),
                items = items.len() as u64,
                considered = MAX_ENUMERABLE_ITEMS as u64,
            );
            &items[..MAX_ENUMERABLE_ITEMS]
        } else {
            items
        };

        let weights: Vec<u64> = considered.iter().map(Item::weight_units).collect();
        let values: Vec<u64> = considered.iter().map(Item::value_units).collect();
        let budget = capacity.units();
        let subsets = 1u64 << considered.len();

        let mut best_mask = 0u64;
        let mut best_value = 0u64;

        for mask in 0..subsets {
            let mut weight = 0u64;
            let mut value = 0u64;
            for (j, (&w, &v)) in weights.iter().zip(&values).enumerate() {
                if mask & (1 << j) != 0 {
                    weight += w;
                    value += v;
                }
            }
            if weight <= budget && value > best_value {
                best_value = value;
                best_mask = mask;
            }
        }

        let selection = Selection::from_mask(items.len(), best_mask);
        let solution = Solution::from_selection(items, selection, subsets);

        debug!(
            event = "solve_end",
            solver = self.solver_name(),
            items = items.len() as u64,
            steps = solution.steps,
            value = solution.value_units,
        );
        solution
    }

    fn solver_name(&self) -> &'static str {
        "BruteForce"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use knapbench_core::ItemSet;
    use knapbench_test::{
        optimum_units, reference_capacity, reference_items, seeded_items, REFERENCE_OPTIMUM_UNITS,
    };

    #[test]
    fn test_reference_scenario() {
        let items = reference_items();
        let solution = BruteForceSolver::new().solve(&items, reference_capacity());

        assert_eq!(solution.value_units, REFERENCE_OPTIMUM_UNITS);
        assert_eq!(solution.selection.indices().collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(solution.weight_units, 500);
        assert_eq!(solution.steps, 8);
    }

    #[test]
    fn test_empty_items() {
        let solution = BruteForceSolver::new().solve(&[], Capacity::new(10.0).unwrap());
        assert!(solution.selection.is_empty());
        assert_eq!(solution.value_units, 0);
        assert_eq!(solution.steps, 1);
    }

    #[test]
    fn test_zero_capacity() {
        let items = reference_items();
        let solution = BruteForceSolver::new().solve(&items, Capacity::ZERO);
        assert_eq!(solution.selection.count(), 0);
        assert_eq!(solution.value_units, 0);
        assert_eq!(solution.selection.len(), 3);
    }

    #[test]
    fn test_tie_keeps_lowest_subset_index() {
        // {item 1} and {item 2} both reach 10.00; mask 0b01 comes first.
        let items = ItemSet::from_pairs(&[(4.0, 10.0), (4.0, 10.0)]).unwrap();
        let solution = BruteForceSolver::new().solve(&items, Capacity::new(5.0).unwrap());
        assert_eq!(solution.selection.indices().collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn test_matches_oracle_on_random_sets() {
        for seed in 0..10 {
            let items = seeded_items(12, seed);
            let capacity = Capacity::new(150.0).unwrap();
            let solution = BruteForceSolver::new().solve(&items, capacity);
            assert_eq!(solution.value_units, optimum_units(&items, capacity));
            assert!(solution.is_feasible(capacity));
        }
    }
}
