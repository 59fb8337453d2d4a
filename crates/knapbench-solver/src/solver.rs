//! The solver trait.

use std::fmt::Debug;

use knapbench_core::{Capacity, Item, Solution};

/// A 0/1 knapsack algorithm.
///
/// Implementations must return a feasible solution whose selection has one
/// flag per input item. Exact solvers also guarantee the optimal value.
///
/// # Example
///
/// ```
/// use knapbench_core::{Capacity, ItemSet};
/// use knapbench_solver::{DynamicProgrammingSolver, KnapsackSolver};
///
/// let items = ItemSet::from_pairs(&[(2.0, 10.0), (3.0, 12.0), (5.0, 20.0)]).unwrap();
/// let solution = DynamicProgrammingSolver::new().solve(&items, Capacity::new(5.0).unwrap());
///
/// assert_eq!(solution.total_value(), 22.0);
/// assert_eq!(solution.selection.indices().collect::<Vec<_>>(), vec![0, 1]);
/// ```
pub trait KnapsackSolver: Send + Sync + Debug {
    /// Packs `items` into a knapsack of the given capacity.
    fn solve(&self, items: &[Item], capacity: Capacity) -> Solution;

    /// Returns the solver name used in logs and reports.
    fn solver_name(&self) -> &'static str;

    /// Returns true if the solver always finds the optimum.
    fn is_exact(&self) -> bool {
        true
    }
}
