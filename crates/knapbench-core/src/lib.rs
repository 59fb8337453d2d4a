//! knapbench Core - item model for the 0/1 knapsack benchmark
//!
//! This crate provides the fundamental types shared by every solver:
//! - Items, item collections and knapsack capacity
//! - Selections and solutions produced by a solver run
//! - Fixed-point quantization at two decimal places
//! - Seedable synthetic item generation

pub mod error;
pub mod generator;
pub mod item;
pub mod quantize;
pub mod solution;


pub use error::{KnapbenchError, Result};
pub use generator::{create_rng, generate_items, ItemRng};
pub use item::{Capacity, Item, ItemSet};
pub use quantize::{dequantize, quantize, quantize_down, SCALE};
pub use solution::{Selection, Solution};
