//! Configuration system for knapbench.
//!
//! Load harness defaults from TOML or YAML files: seed, output location,
//! CSV file names, preview bounds and the two sweep definitions. The
//! interactive prompts still ask for item counts and capacities; this file
//! only supplies what the prompts do not.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use knapbench_config::HarnessConfig;
//!
//! let config = HarnessConfig::from_toml_str(r#"
//!     random_seed = 7
//!     output_dir = "out"
//!
//!     [large_sweep]
//!     sizes = [100, 1000, 10000]
//!     capacity = 500.0
//! "#).unwrap();
//!
//! assert_eq!(config.random_seed, Some(7));
//! assert_eq!(config.large_sweep.sizes, vec![100, 1000, 10000]);
//! // Untouched tables keep their defaults.
//! assert_eq!(config.small_sweep.sizes.len(), 20);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use knapbench_config::HarnessConfig;
//!
//! let config = HarnessConfig::load("knapbench.toml").unwrap_or_default();
//! assert_eq!(config.exhaustive_item_cap, 20);
//! ```

use std::path::{Path, PathBuf};

use knapbench_core::Capacity;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Sizes of the small sweep: every count from 5 to 24 items.
pub const DEFAULT_SMALL_SIZES: std::ops::RangeInclusive<usize> = 5..=24;

/// Sizes of the large sweep.
pub const DEFAULT_LARGE_SIZES: [usize; 18] = [
    50, 100, 200, 500, 1000, 2000, 3000, 4000, 5000, 6000, 8000, 10000, 12000, 16000, 20000,
    24000, 28000, 32000,
];

/// Capacity shared by both default sweeps.
pub const DEFAULT_SWEEP_CAPACITY: f64 = 1000.0;

/// Main harness configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct HarnessConfig {
    /// Random seed for reproducible item sets. `None` seeds from entropy.
    pub random_seed: Option<u64>,

    /// Directory receiving the CSV files.
    pub output_dir: PathBuf,

    /// File name of the item listing.
    pub items_file: String,

    /// File name of the small sweep table.
    pub small_sweep_file: String,

    /// File name of the large sweep table.
    pub large_sweep_file: String,

    /// Maximum rows written to the item listing.
    pub item_csv_limit: usize,

    /// Maximum selected items printed in a console report.
    pub preview_limit: usize,

    /// Largest item count handed to the exponential solvers.
    pub exhaustive_item_cap: usize,

    /// Exhaustive-capable sweep over small sizes.
    pub small_sweep: SweepConfig,

    /// Polynomial-only sweep over large sizes.
    pub large_sweep: SweepConfig,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            random_seed: None,
            output_dir: PathBuf::from("."),
            items_file: "items.csv".to_string(),
            small_sweep_file: "result_compare.csv".to_string(),
            large_sweep_file: "result_compare2.csv".to_string(),
            item_csv_limit: 1000,
            preview_limit: 20,
            exhaustive_item_cap: 20,
            small_sweep: SweepConfig::small(),
            large_sweep: SweepConfig::large(),
        }
    }
}

impl HarnessConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads and validates configuration from a file.
    ///
    /// Files ending in `.yaml` or `.yml` are parsed as YAML, anything else
    /// as TOML.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist, fails to parse, or fails
    /// [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

        let config = if is_yaml {
            Self::from_yaml_file(path)?
        } else {
            Self::from_toml_file(path)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Checks values that parse but cannot drive a run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.exhaustive_item_cap == 0 {
            return Err(ConfigError::Invalid(
                "exhaustive_item_cap must be at least 1".to_string(),
            ));
        }
        for file in [&self.items_file, &self.small_sweep_file, &self.large_sweep_file] {
            if file.trim().is_empty() {
                return Err(ConfigError::Invalid("output file names must not be empty".to_string()));
            }
        }
        self.small_sweep.validate("small_sweep")?;
        self.large_sweep.validate("large_sweep")
    }

    /// Returns the full path of a file inside the output directory.
    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Sets the output directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Sets the exponential-solver item cap.
    pub fn with_exhaustive_item_cap(mut self, cap: usize) -> Self {
        self.exhaustive_item_cap = cap;
        self
    }

    /// Sets the console preview bound.
    pub fn with_preview_limit(mut self, limit: usize) -> Self {
        self.preview_limit = limit;
        self
    }

    /// Replaces the small sweep.
    pub fn with_small_sweep(mut self, sweep: SweepConfig) -> Self {
        self.small_sweep = sweep;
        self
    }

    /// Replaces the large sweep.
    pub fn with_large_sweep(mut self, sweep: SweepConfig) -> Self {
        self.large_sweep = sweep;
        self
    }
}

/// One sweep: the item counts to run and the shared capacity.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SweepConfig {
    /// Item counts, run in the listed order.
    pub sizes: Vec<usize>,

    /// Knapsack capacity for every size.
    #[serde(default = "default_sweep_capacity")]
    pub capacity: f64,
}

fn default_sweep_capacity() -> f64 {
    DEFAULT_SWEEP_CAPACITY
}

impl SweepConfig {
    pub fn new(sizes: Vec<usize>, capacity: f64) -> Self {
        Self { sizes, capacity }
    }

    /// Sizes 5 through 24 at capacity 1000.
    pub fn small() -> Self {
        Self::new(DEFAULT_SMALL_SIZES.collect(), DEFAULT_SWEEP_CAPACITY)
    }

    /// Sizes 50 through 32000 at capacity 1000.
    pub fn large() -> Self {
        Self::new(DEFAULT_LARGE_SIZES.to_vec(), DEFAULT_SWEEP_CAPACITY)
    }

    /// Largest listed size, or 0 for an empty sweep.
    pub fn max_size(&self) -> usize {
        self.sizes.iter().copied().max().unwrap_or(0)
    }

    /// Returns the capacity as a validated [`Capacity`].
    pub fn capacity(&self) -> Result<Capacity, ConfigError> {
        Capacity::new(self.capacity).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    fn validate(&self, name: &str) -> Result<(), ConfigError> {
        if self.sizes.is_empty() {
            return Err(ConfigError::Invalid(format!("{name}.sizes must not be empty")));
        }
        self.capacity()
            .map(|_| ())
            .map_err(|e| ConfigError::Invalid(format!("{name}: {e}")))
    }
}

#[cfg(test)]
mod tests;
