//! Measured run and sweep results.

use std::fmt;
use std::time::Duration;

use knapbench_core::{Capacity, ItemSet, Solution};
use knapbench_solver::Algorithm;

fn as_millis_f64(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

/// One timed solver invocation.
#[derive(Debug, Clone)]
pub struct RunRecord {
    /// Algorithm that produced the solution.
    pub algorithm: Algorithm,
    /// Number of leading items the algorithm was given.
    pub item_count: usize,
    /// Selection and totals.
    pub solution: Solution,
    /// Wall-clock time of the solve call.
    pub elapsed: Duration,
}

impl RunRecord {
    /// Returns elapsed time in milliseconds.
    ///
    /// # Example
    ///
    /// ```
    /// use knapbench_benchmark::RunRecord;
    /// use knapbench_core::Solution;
    /// use knapbench_solver::Algorithm;
    /// use std::time::Duration;
    ///
    /// let record = RunRecord {
    ///     algorithm: Algorithm::Greedy,
    ///     item_count: 0,
    ///     solution: Solution::empty(0),
    ///     elapsed: Duration::from_micros(1500),
    /// };
    /// assert!((record.elapsed_ms() - 1.5).abs() < 1e-9);
    /// ```
    pub fn elapsed_ms(&self) -> f64 {
        as_millis_f64(self.elapsed)
    }
}

/// One or more algorithms run on the same generated items.
#[derive(Debug, Clone)]
pub struct ComparisonRun {
    /// Every generated item; exponential runs may cover only a prefix.
    pub items: ItemSet,
    pub capacity: Capacity,
    pub records: Vec<RunRecord>,
}

impl ComparisonRun {
    /// Returns the record for `algorithm`, if it was run.
    pub fn record(&self, algorithm: Algorithm) -> Option<&RunRecord> {
        self.records.iter().find(|r| r.algorithm == algorithm)
    }
}

/// Which sweep a result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepKind {
    /// Small sizes; every algorithm including the exponential ones.
    Small,
    /// Large sizes; dynamic programming and both greedy sorts.
    Large,
}

impl SweepKind {
    /// Algorithms timed per row, in column order.
    pub fn algorithms(self) -> &'static [Algorithm] {
        match self {
            SweepKind::Small => &[
                Algorithm::BruteForce,
                Algorithm::Backtracking,
                Algorithm::PrunedBacktracking,
                Algorithm::DynamicProgramming,
                Algorithm::Greedy,
            ],
            SweepKind::Large => &[
                Algorithm::DynamicProgramming,
                Algorithm::Greedy,
                Algorithm::GreedySelectionSort,
            ],
        }
    }

    /// Whether every size is a prefix of one item set generated up front.
    pub fn shares_items(self) -> bool {
        matches!(self, SweepKind::Large)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SweepKind::Small => "small",
            SweepKind::Large => "large",
        }
    }
}

impl fmt::Display for SweepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Time and value of one algorithm within a sweep row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepCell {
    pub algorithm: Algorithm,
    pub elapsed: Duration,
    pub value_units: u64,
}

impl SweepCell {
    pub fn elapsed_ms(&self) -> f64 {
        as_millis_f64(self.elapsed)
    }
}

/// All timings for one item count.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepRow {
    pub item_count: usize,
    pub cells: Vec<SweepCell>,
}

impl SweepRow {
    pub fn cell(&self, algorithm: Algorithm) -> Option<&SweepCell> {
        self.cells.iter().find(|c| c.algorithm == algorithm)
    }

    /// Sum of all cell times.
    pub fn total_elapsed(&self) -> Duration {
        self.cells.iter().map(|c| c.elapsed).sum()
    }

    /// Exact cells whose value differs from the first exact cell.
    ///
    /// Returns `(algorithm, expected, actual)` per disagreeing cell. Empty
    /// when the row has fewer than two exact algorithms.
    pub fn optimum_mismatches(&self) -> Vec<(Algorithm, u64, u64)> {
        let mut exact = self.cells.iter().filter(|c| c.algorithm.is_exact());
        let Some(reference) = exact.next() else {
            return Vec::new();
        };
        exact
            .filter(|c| c.value_units != reference.value_units)
            .map(|c| (c.algorithm, reference.value_units, c.value_units))
            .collect()
    }
}

/// Rows of one completed sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepResult {
    pub kind: SweepKind,
    pub capacity: Capacity,
    pub rows: Vec<SweepRow>,
}

impl SweepResult {
    pub fn new(kind: SweepKind, capacity: Capacity) -> Self {
        Self {
            kind,
            capacity,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: SweepRow) {
        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Sum of every cell time across rows.
    pub fn total_elapsed(&self) -> Duration {
        self.rows.iter().map(SweepRow::total_elapsed).sum()
    }
}
