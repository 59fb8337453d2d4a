//! Error types for knapbench

use thiserror::Error;

/// Main error type for knapbench model construction
#[derive(Debug, Error, PartialEq)]
pub enum KnapbenchError {
    /// An item weight was zero, negative or not a finite number
    #[error("Invalid weight for item {id}: {weight}")]
    InvalidWeight { id: usize, weight: f64 },

    /// An item value was negative or not a finite number
    #[error("Invalid value for item {id}: {value}")]
    InvalidValue { id: usize, value: f64 },

    /// Capacity was negative or not a finite number
    #[error("Invalid capacity: {0}")]
    InvalidCapacity(f64),
}

/// Result type alias for knapbench operations
pub type Result<T> = std::result::Result<T, KnapbenchError>;
