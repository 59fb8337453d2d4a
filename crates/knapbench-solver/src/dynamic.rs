//! Dynamic programming over quantized weights.
//!
//! Weights are quantized to integer hundredths and the capacity is rounded
//! down to whole hundredths. The logical table has `n + 1` rows and `W + 1`
//! columns, where `entry[i][w]` is the best value using the first `i` items
//! within budget `w`:
//!
//! ```text
//! entry[i][w] = entry[i-1][w]                                   if weight_i > w
//!             = max(entry[i-1][w], entry[i-1][w - weight_i] + value_i)   otherwise
//! ```
//!
//! Only the previous value row is needed to fill the next one, so values
//! live in a single row updated from high budgets to low. The per-cell
//! "item taken" flags are kept for every row in a packed [`KeepTable`] and
//! walked backwards from `[n][W]` to rebuild the selection.
//!
//! Time and memory are O(n * W); large capacities are a known limit.

use knapbench_core::{Capacity, Item, Selection, Solution};
use tracing::debug;

use crate::solver::KnapsackSolver;

/// Packed bit table recording whether item `i` was taken at budget `w`.
///
/// # Example
///
/// ```
/// use knapbench_solver::KeepTable;
///
/// let mut keep = KeepTable::new(2, 100);
/// keep.set(1, 70);
/// assert!(keep.get(1, 70));
/// assert!(!keep.get(0, 70));
/// ```
#[derive(Debug, Clone)]
pub struct KeepTable {
    width: usize,
    words: Vec<u64>,
}

impl KeepTable {
    /// Creates an all-false table of `rows` items by `width` budgets.
    pub fn new(rows: usize, width: usize) -> Self {
        let bits = rows.saturating_mul(width);
        Self {
            width,
            words: vec![0; bits.div_ceil(64)],
        }
    }

    #[inline]
    pub fn set(&mut self, row: usize, budget: usize) {
        let bit = row * self.width + budget;
        self.words[bit / 64] |= 1 << (bit % 64);
    }

    #[inline]
    pub fn get(&self, row: usize, budget: usize) -> bool {
        let bit = row * self.width + budget;
        self.words
            .get(bit / 64)
            .is_some_and(|&word| (word >> (bit % 64)) & 1 == 1)
    }
}

/// Weight-quantized dynamic programming solver.
#[derive(Debug, Clone, Copy, Default)]
pub struct DynamicProgrammingSolver;

impl DynamicProgrammingSolver {
    pub fn new() -> Self {
        Self
    }
}

impl KnapsackSolver for DynamicProgrammingSolver {
    fn solve(&self, items: &[Item], capacity: Capacity) -> Solution {
        let n = items.len();
        let budget = capacity.units() as usize;
        let width = budget + 1;

        let weights: Vec<usize> = items.iter().map(|i| i.weight_units() as usize).collect();
        let mut row = vec![0u64; width];
        let mut keep = KeepTable::new(n, width);

        for (i, item) in items.iter().enumerate() {
            let weight = weights[i];
            if weight > budget {
                continue;
            }
            let value = item.value_units();
            // high to low so row[w - weight] still holds the previous row
            for w in (weight..=budget).rev() {
                let with = row[w - weight] + value;
                if with > row[w] {
                    row[w] = with;
                    keep.set(i, w);
                }
            }
        }

        let mut selection = Selection::empty(n);
        let mut w = budget;
        for i in (0..n).rev() {
            if keep.get(i, w) {
                selection.set(i, true);
                w -= weights[i];
            }
        }

        let steps = (n as u64).saturating_mul(width as u64);
        let solution = Solution::from_selection(items, selection, steps);
        debug_assert_eq!(solution.value_units, row[budget]);

        debug!(
            event = "solve_end",
            solver = self.solver_name(),
            items = n as u64,
            steps = solution.steps,
            value = solution.value_units,
        );
        solution
    }

    fn solver_name(&self) -> &'static str {
        "DynamicProgramming"
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
        let solution = DynamicProgrammingSolver::new().solve(&reference_items(), reference_capacity());
        assert_eq!(solution.value_units, REFERENCE_OPTIMUM_UNITS);
        assert_eq!(solution.selection.indices().collect::<Vec<_>>(), vec![0, 1]);
        // 3 items x 501 budgets
        assert_eq!(solution.steps, 1503);
    }

    #[test]
    fn test_empty_items() {
        let solution = DynamicProgrammingSolver::new().solve(&[], Capacity::new(5.0).unwrap());
        assert!(solution.selection.is_empty());
        assert_eq!(solution.value_units, 0);
    }

    #[test]
    fn test_zero_capacity() {
        let solution = DynamicProgrammingSolver::new().solve(&reference_items(), Capacity::ZERO);
        assert_eq!(solution.selection.count(), 0);
        assert_eq!(solution.value_units, 0);
        assert_eq!(solution.selection.len(), 3);
    }

    #[test]
    fn test_item_heavier_than_capacity_is_skipped() {
        let items = ItemSet::from_pairs(&[(50.0, 900.0), (1.0, 100.0)]).unwrap();
        let solution = DynamicProgrammingSolver::new().solve(&items, Capacity::new(10.0).unwrap());
        assert_eq!(solution.selection.indices().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_half_hundredth_weights_round_up() {
        // 2.375 quantizes to 238 units, so two of them need 4.76.
        let items = ItemSet::from_pairs(&[(2.375, 10.0), (2.375, 10.0)]).unwrap();
        let tight = DynamicProgrammingSolver::new().solve(&items, Capacity::new(4.75).unwrap());
        assert_eq!(tight.selection.count(), 1);

        let roomy = DynamicProgrammingSolver::new().solve(&items, Capacity::new(4.76).unwrap());
        assert_eq!(roomy.selection.count(), 2);
    }

    #[test]
    fn test_matches_oracle_on_random_sets() {
        for seed in 0..10 {
            let items = seeded_items(14, seed);
            let capacity = Capacity::new(200.0).unwrap();
            let solution = DynamicProgrammingSolver::new().solve(&items, capacity);
            assert_eq!(solution.value_units, optimum_units(&items, capacity));
            assert!(solution.is_feasible(capacity));
        }
    }

    #[test]
    fn test_keep_table_bounds() {
        let mut keep = KeepTable::new(3, 65);
        keep.set(2, 64);
        assert!(keep.get(2, 64));
        assert!(!keep.get(2, 63));
        assert!(!keep.get(0, 0));
    }
}
