//! Backtracking search over include/exclude decisions.
//!
//! Depth-first over items in input order: the exclude branch is explored
//! before the include branch, and include is only tried when the item
//! still fits. The first strictly better complete assignment is kept.
//!
//! With [`BounderType::RemainingValue`] a node is skipped when its
//! optimistic bound is not greater than the best value found so far.
//! Pruning never removes a strictly improving leaf, so both variants
//! return the same selection; only the node count differs.

mod bounder;

use knapbench_core::{Capacity, Item, Selection, Solution};
use tracing::debug;

use crate::solver::KnapsackSolver;

pub use bounder::{Bounder, BounderType, NoBounder, RemainingValueBounder};

/// Exact backtracking solver, optionally pruned.
///
/// # Example
///
/// ```
/// use knapbench_core::{Capacity, ItemSet};
/// use knapbench_solver::{BacktrackingSolver, KnapsackSolver};
///
/// let items = ItemSet::from_pairs(&[(2.0, 10.0), (3.0, 12.0), (5.0, 20.0)]).unwrap();
/// let capacity = Capacity::new(5.0).unwrap();
///
/// let plain = BacktrackingSolver::plain().solve(&items, capacity);
/// let pruned = BacktrackingSolver::pruned().solve(&items, capacity);
///
/// assert_eq!(plain.selection, pruned.selection);
/// assert!(pruned.steps <= plain.steps);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BacktrackingSolver {
    bounder_type: BounderType,
}

impl BacktrackingSolver {
    /// Creates a backtracking solver with the given bounding.
    pub fn new(bounder_type: BounderType) -> Self {
        Self { bounder_type }
    }

    /// Creates plain (unbounded) backtracking.
    pub fn plain() -> Self {
        Self::new(BounderType::None)
    }

    /// Creates backtracking with remaining-value pruning.
    pub fn pruned() -> Self {
        Self::new(BounderType::RemainingValue)
    }
}

impl KnapsackSolver for BacktrackingSolver {
    fn solve(&self, items: &[Item], capacity: Capacity) -> Solution {
        let (selection, nodes) = match self.bounder_type {
            BounderType::None => Search::new(items, capacity, NoBounder).run(),
            BounderType::RemainingValue => {
                Search::new(items, capacity, RemainingValueBounder::new(items)).run()
            }
        };
        let solution = Solution::from_selection(items, selection, nodes);

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
        match self.bounder_type {
            BounderType::None => "Backtracking",
            BounderType::RemainingValue => "PrunedBacktracking",
        }
    }
}

/// Best complete assignment found so far.
struct Incumbent {
    value: u64,
    picks: Vec<bool>,
}

/// Recursive search state owned by one solve call.
struct Search<B> {
    weights: Vec<u64>,
    values: Vec<u64>,
    budget: u64,
    bounder: B,
    current: Vec<bool>,
    best: Incumbent,
    nodes: u64,
}

impl<B: Bounder> Search<B> {
    fn new(items: &[Item], capacity: Capacity, bounder: B) -> Self {
        let n = items.len();
        Self {
            weights: items.iter().map(Item::weight_units).collect(),
            values: items.iter().map(Item::value_units).collect(),
            budget: capacity.units(),
            bounder,
            current: vec![false; n],
            best: Incumbent {
                value: 0,
                picks: vec![false; n],
            },
            nodes: 0,
        }
    }

    fn run(mut self) -> (Selection, u64) {
        self.visit(0, 0, 0);
        (Selection::from(self.best.picks), self.nodes)
    }

    fn visit(&mut self, depth: usize, weight: u64, value: u64) {
        self.nodes += 1;

        if depth == self.current.len() {
            if value > self.best.value {
                self.best.value = value;
                self.best.picks.copy_from_slice(&self.current);
            }
            return;
        }

        if let Some(bound) = self.bounder.optimistic_bound(depth, value) {
            if bound <= self.best.value {
                return;
            }
        }

        self.current[depth] = false;
        self.visit(depth + 1, weight, value);

        let item_weight = self.weights[depth];
        if weight + item_weight <= self.budget {
            self.current[depth] = true;
            self.visit(depth + 1, weight + item_weight, value + self.values[depth]);
            self.current[depth] = false;
        }
    }
}
