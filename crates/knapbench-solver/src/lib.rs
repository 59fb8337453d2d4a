//! knapbench Solver set
//!
//! This crate provides the knapsack algorithms compared by the harness:
//! - Exhaustive enumeration of every subset
//! - Backtracking, plain and with a remaining-value bound
//! - Dynamic programming over quantized weights
//! - Ratio greedy with a comparison sort or a selection sort
//!
//! Every solver reads a borrowed item slice and returns an owned
//! [`Solution`](knapbench_core::Solution); none of them mutates its input.

pub mod algorithm;
pub mod backtrack;
pub mod dynamic;
pub mod exhaustive;
pub mod greedy;
pub mod solver;


pub use algorithm::Algorithm;
pub use backtrack::{BacktrackingSolver, Bounder, BounderType, NoBounder, RemainingValueBounder};
pub use dynamic::{DynamicProgrammingSolver, KeepTable};
pub use exhaustive::{BruteForceSolver, MAX_ENUMERABLE_ITEMS};
pub use greedy::{GreedySolver, SortStrategy};
pub use solver::KnapsackSolver;
