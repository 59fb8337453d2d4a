//! Comparison driver for knapbench.
//!
//! This crate runs the solver set against generated item sets, times each
//! run, and turns the results into console reports and CSV tables.
//!
//! # Overview
//!
//! - [`Harness`] owns the configuration and the random source. It runs one
//!   algorithm, all four side by side, or a whole sweep of item counts.
//! - [`RunRecord`], [`ComparisonRun`] and [`SweepResult`] hold what was
//!   measured.
//! - [`ConsoleReport`], [`ItemsCsv`] and [`SweepCsv`] render results.
//!
//! # Example
//!
//! ```
//! use knapbench_benchmark::{ConsoleReport, Harness};
//! use knapbench_config::HarnessConfig;
//! use knapbench_core::Capacity;
//!
//! let config = HarnessConfig::new().with_random_seed(7);
//! let mut harness = Harness::from_config(config);
//!
//! let run = harness.run_all(30, Capacity::new(250.0).unwrap());
//! assert_eq!(run.records.len(), 4);
//!
//! let text = ConsoleReport::comparison(&run, 20);
//! assert!(text.contains("[Dynamic programming]"));
//! ```

mod error;
mod mode;
mod report;
mod result;
mod runner;

pub use error::HarnessError;
pub use mode::Mode;
pub use report::{ConsoleReport, ItemsCsv, SweepCsv};
pub use result::{ComparisonRun, RunRecord, SweepCell, SweepKind, SweepResult, SweepRow};
pub use runner::{time_run, Harness};
