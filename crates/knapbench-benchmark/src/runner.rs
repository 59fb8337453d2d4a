//! Comparison runner.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use knapbench_config::{HarnessConfig, SweepConfig};
use knapbench_core::{create_rng, generate_items, Capacity, Item, ItemRng, ItemSet};
use knapbench_solver::Algorithm;
use rand::Rng;
use tracing::{info, warn};

use crate::error::HarnessError;
use crate::report::{ItemsCsv, SweepCsv};
use crate::result::{ComparisonRun, RunRecord, SweepCell, SweepKind, SweepResult, SweepRow};

/// Algorithms run side by side by [`Harness::run_all`].
const COMPARE_ALL: [Algorithm; 4] = [
    Algorithm::BruteForce,
    Algorithm::Backtracking,
    Algorithm::DynamicProgramming,
    Algorithm::Greedy,
];

/// Times one solve call of `algorithm` on `items`.
///
/// # Example
///
/// ```
/// use knapbench_benchmark::time_run;
/// use knapbench_core::{Capacity, ItemSet};
/// use knapbench_solver::Algorithm;
///
/// let items = ItemSet::from_pairs(&[(2.0, 10.0), (3.0, 12.0), (5.0, 20.0)]).unwrap();
/// let record = time_run(Algorithm::DynamicProgramming, &items, Capacity::new(5.0).unwrap());
///
/// assert_eq!(record.item_count, 3);
/// assert_eq!(record.solution.total_value(), 22.0);
/// ```
pub fn time_run(algorithm: Algorithm, items: &[Item], capacity: Capacity) -> RunRecord {
    let solver = algorithm.solver();
    let start = Instant::now();
    let solution = solver.solve(items, capacity);
    let elapsed = start.elapsed();

    RunRecord {
        algorithm,
        item_count: items.len(),
        solution,
        elapsed,
    }
}

/// Drives solver runs from a [`HarnessConfig`] and a random source.
///
/// Each run generates its items from the owned random source, so two
/// harnesses built from the same seed produce identical item sets.
pub struct Harness<R: Rng = ItemRng> {
    config: HarnessConfig,
    rng: R,
}

impl Harness<ItemRng> {
    /// Creates a harness seeded from `config.random_seed`, or from entropy
    /// when no seed is configured.
    pub fn from_config(config: HarnessConfig) -> Self {
        let seed = config.random_seed.unwrap_or_else(rand::random);
        info!(event = "harness_ready", seed);
        Self::with_rng(config, create_rng(seed))
    }
}

impl<R: Rng> Harness<R> {
    /// Creates a harness around an existing random source.
    pub fn with_rng(config: HarnessConfig, rng: R) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Generates `count` fresh items.
    pub fn generate(&mut self, count: usize) -> ItemSet {
        generate_items(count, &mut self.rng)
    }

    /// Clamps an item count to the exhaustive cap.
    pub fn exhaustive_count(&self, count: usize) -> usize {
        count.min(self.config.exhaustive_item_cap)
    }

    /// Runs one algorithm on `count` fresh items.
    ///
    /// Exponential algorithms are clamped to the exhaustive cap; the
    /// generated set is clamped with them.
    pub fn run_single(&mut self, algorithm: Algorithm, count: usize, capacity: Capacity) -> ComparisonRun {
        let count = if algorithm.is_exponential() {
            self.exhaustive_count(count)
        } else {
            count
        };
        let items = self.generate(count);
        let record = time_run(algorithm, &items, capacity);

        ComparisonRun {
            items,
            capacity,
            records: vec![record],
        }
    }

    /// Runs brute force, backtracking, dynamic programming and greedy on
    /// one shared item set.
    ///
    /// The exponential algorithms see only the first
    /// [`exhaustive_count`](Self::exhaustive_count) items.
    pub fn run_all(&mut self, count: usize, capacity: Capacity) -> ComparisonRun {
        let items = self.generate(count);
        let capped = self.exhaustive_count(count);

        let records = COMPARE_ALL
            .into_iter()
            .map(|algorithm| {
                let slice = if algorithm.is_exponential() {
                    items.prefix(capped)
                } else {
                    items.as_slice()
                };
                time_run(algorithm, slice, capacity)
            })
            .collect();

        ComparisonRun {
            items,
            capacity,
            records,
        }
    }

    /// Times every algorithm on each configured small size.
    ///
    /// Each size gets freshly generated items.
    pub fn small_sweep(&mut self) -> Result<SweepResult, HarnessError> {
        let sweep = self.config.small_sweep.clone();
        self.sweep(SweepKind::Small, &sweep)
    }

    /// Times dynamic programming and both greedy sorts on each configured
    /// large size.
    ///
    /// Items are generated once at the largest size; each size uses the
    /// leading prefix.
    pub fn large_sweep(&mut self) -> Result<SweepResult, HarnessError> {
        let sweep = self.config.large_sweep.clone();
        self.sweep(SweepKind::Large, &sweep)
    }

    fn sweep(&mut self, kind: SweepKind, sweep: &SweepConfig) -> Result<SweepResult, HarnessError> {
        let capacity = sweep.capacity()?;
        let shared = kind.shares_items().then(|| self.generate(sweep.max_size()));

        info!(
            event = "sweep_start",
            sweep = kind.as_str(),
            sizes = sweep.sizes.len() as u64,
            capacity = capacity.amount(),
        );

        let mut result = SweepResult::new(kind, capacity);
        for &size in &sweep.sizes {
            let row = match &shared {
                Some(items) => sweep_row(kind, items.prefix(size), capacity),
                None => {
                    let items = self.generate(size);
                    sweep_row(kind, &items, capacity)
                }
            };

            for (algorithm, expected, actual) in row.optimum_mismatches() {
                warn!(
                    event = "optimum_mismatch",
                    sweep = kind.as_str(),
                    solver = algorithm.label(),
                    items = size as u64,
                    expected,
                    actual,
                );
            }
            info!(
                event = "sweep_row",
                sweep = kind.as_str(),
                items = size as u64,
                elapsed_ms = row.total_elapsed().as_secs_f64() * 1000.0,
            );
            result.add_row(row);
        }

        info!(
            event = "sweep_end",
            sweep = kind.as_str(),
            rows = result.row_count() as u64,
            elapsed_ms = result.total_elapsed().as_secs_f64() * 1000.0,
        );
        Ok(result)
    }

    /// Writes the leading items to the configured item listing.
    ///
    /// Returns the written path.
    pub fn write_items_csv(&self, items: &[Item]) -> Result<PathBuf, HarnessError> {
        let path = self.config.output_path(&self.config.items_file);
        let rows = items.len().min(self.config.item_csv_limit);
        let contents = ItemsCsv::to_string(items, self.config.item_csv_limit);
        self.write_output(path, &contents, rows)
    }

    /// Writes a sweep table to the file configured for its kind.
    pub fn write_sweep_csv(&self, result: &SweepResult) -> Result<PathBuf, HarnessError> {
        let file_name = match result.kind {
            SweepKind::Small => &self.config.small_sweep_file,
            SweepKind::Large => &self.config.large_sweep_file,
        };
        let path = self.config.output_path(file_name);
        self.write_output(path, &SweepCsv::to_string(result), result.row_count())
    }

    fn write_output(&self, path: PathBuf, contents: &str, rows: usize) -> Result<PathBuf, HarnessError> {
        let written = fs::create_dir_all(&self.config.output_dir)
            .map_err(|e| HarnessError::io(&self.config.output_dir, e))
            .and_then(|()| fs::write(&path, contents).map_err(|e| HarnessError::io(&path, e)));

        match written {
            Ok(()) => {
                info!(event = "csv_written", path = %path.display(), rows = rows as u64);
                Ok(path)
            }
            Err(e) => {
                warn!(event = "csv_failed", path = %path.display(), error = %e);
                Err(e)
            }
        }
    }
}

fn sweep_row(kind: SweepKind, items: &[Item], capacity: Capacity) -> SweepRow {
    let cells = kind
        .algorithms()
        .iter()
        .map(|&algorithm| {
            let record = time_run(algorithm, items, capacity);
            SweepCell {
                algorithm,
                elapsed: record.elapsed,
                value_units: record.solution.value_units,
            }
        })
        .collect();

    SweepRow {
        item_count: items.len(),
        cells,
    }
}
