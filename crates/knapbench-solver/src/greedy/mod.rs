//! Ratio greedy approximation.
//!
//! Orders items by value/weight ratio, highest first, then packs each item
//! that still fits in the remaining capacity. The result is always
//! feasible but not always optimal.
//!
//! The sort works on a private index permutation; the caller's item slice
//! is never reordered, so the same items can be handed to other solvers.

mod sort;

use knapbench_core::{Capacity, Item, Selection, Solution};
use tracing::debug;

use crate::solver::KnapsackSolver;

/// Sorting algorithm used to order items by ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortStrategy {
    /// O(n log n) comparison sort.
    #[default]
    Comparison,
    /// O(n^2) selection sort.
    Selection,
}

impl std::fmt::Display for SortStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortStrategy::Comparison => write!(f, "Comparison"),
            SortStrategy::Selection => write!(f, "Selection"),
        }
    }
}

/// Greedy solver ordering items by value/weight ratio.
///
/// # Example
///
/// ```
/// use knapbench_core::{Capacity, ItemSet};
/// use knapbench_solver::{GreedySolver, KnapsackSolver, SortStrategy};
///
/// let items = ItemSet::from_pairs(&[(6.0, 30.0), (5.0, 24.0), (5.0, 24.0)]).unwrap();
/// let capacity = Capacity::new(10.0).unwrap();
///
/// let fast = GreedySolver::new(SortStrategy::Comparison).solve(&items, capacity);
/// let slow = GreedySolver::new(SortStrategy::Selection).solve(&items, capacity);
///
/// // The best ratio blocks the optimum of 48.00.
/// assert_eq!(fast.total_value(), 30.0);
/// assert_eq!(fast.selection, slow.selection);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedySolver {
    strategy: SortStrategy,
}

impl GreedySolver {
    pub fn new(strategy: SortStrategy) -> Self {
        Self { strategy }
    }

    fn sort(&self, items: &[Item]) -> (Vec<usize>, u64) {
        match self.strategy {
            SortStrategy::Comparison => sort::comparison_sort(items),
            SortStrategy::Selection => sort::selection_sort(items),
        }
    }
}

impl KnapsackSolver for GreedySolver {
    fn solve(&self, items: &[Item], capacity: Capacity) -> Solution {
        let (order, comparisons) = self.sort(items);

        let mut remaining = capacity.units();
        let mut selection = Selection::empty(items.len());
        for &index in &order {
            let weight = items[index].weight_units();
            if weight <= remaining {
                selection.set(index, true);
                remaining -= weight;
            }
        }

        let steps = comparisons + items.len() as u64;
        let solution = Solution::from_selection(items, selection, steps);

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
        match self.strategy {
            SortStrategy::Comparison => "Greedy",
            SortStrategy::Selection => "GreedySelectionSort",
        }
    }

    fn is_exact(&self) -> bool {
        false
    }
}
