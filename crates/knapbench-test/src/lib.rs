//! Shared test fixtures for knapbench crates.
//!
//! This crate provides item sets and pure reference functions for testing.
//! It depends only on `knapbench-core`, so every other crate can use it as a
//! dev-dependency without cycles.
//!
//! - [`scenarios`] - Hand-built item sets with known optima
//! - [`oracle`] - Independent optimum computation for small inputs
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! knapbench-test = { workspace = true }
//! ```
//!
//! ```ignore
//! use knapbench_test::scenarios::{reference_items, REFERENCE_CAPACITY};
//! use knapbench_test::oracle::optimum_units;
//! ```

pub mod oracle;
pub mod scenarios;

pub use oracle::optimum_units;
pub use scenarios::{
    greedy_trap_items, reference_capacity, reference_items, seeded_items, GREEDY_TRAP_CAPACITY,
    REFERENCE_CAPACITY, REFERENCE_OPTIMUM_UNITS,
};
