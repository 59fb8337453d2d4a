//! Named solver variants used by the comparison driver.

use std::fmt;

use knapbench_core::{Capacity, Item, Solution};

use crate::backtrack::BacktrackingSolver;
use crate::dynamic::DynamicProgrammingSolver;
use crate::exhaustive::BruteForceSolver;
use crate::greedy::{GreedySolver, SortStrategy};
use crate::solver::KnapsackSolver;

/// One of the solver variants the harness can time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    BruteForce,
    Backtracking,
    PrunedBacktracking,
    DynamicProgramming,
    Greedy,
    GreedySelectionSort,
}

impl Algorithm {
    /// Every variant, in report order.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::BruteForce,
        Algorithm::Backtracking,
        Algorithm::PrunedBacktracking,
        Algorithm::DynamicProgramming,
        Algorithm::Greedy,
        Algorithm::GreedySelectionSort,
    ];

    /// Builds the solver for this variant.
    pub fn solver(self) -> Box<dyn KnapsackSolver> {
        match self {
            Algorithm::BruteForce => Box::new(BruteForceSolver::new()),
            Algorithm::Backtracking => Box::new(BacktrackingSolver::plain()),
            Algorithm::PrunedBacktracking => Box::new(BacktrackingSolver::pruned()),
            Algorithm::DynamicProgramming => Box::new(DynamicProgrammingSolver::new()),
            Algorithm::Greedy => Box::new(GreedySolver::new(SortStrategy::Comparison)),
            Algorithm::GreedySelectionSort => Box::new(GreedySolver::new(SortStrategy::Selection)),
        }
    }

    /// Runs this variant on `items`.
    pub fn solve(self, items: &[Item], capacity: Capacity) -> Solution {
        self.solver().solve(items, capacity)
    }

    /// Human-readable name for console reports.
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::BruteForce => "Brute force",
            Algorithm::Backtracking => "Backtracking",
            Algorithm::PrunedBacktracking => "Backtracking (pruned)",
            Algorithm::DynamicProgramming => "Dynamic programming",
            Algorithm::Greedy => "Greedy (quicksort)",
            Algorithm::GreedySelectionSort => "Greedy (selection sort)",
        }
    }

    /// Whether running time grows exponentially with the item count.
    pub fn is_exponential(self) -> bool {
        matches!(
            self,
            Algorithm::BruteForce | Algorithm::Backtracking | Algorithm::PrunedBacktracking
        )
    }

    /// Whether the variant always finds the optimum.
    pub fn is_exact(self) -> bool {
        !matches!(self, Algorithm::Greedy | Algorithm::GreedySelectionSort)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
