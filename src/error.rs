//! Errors raised by the sampling entrypoints.

use thiserror::Error;

/// Errors for weighted, distinct and proportional sampling.
///
/// All variants are raised synchronously by the call that detects them.
/// Nothing is retried internally: the same input would fail the same way.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SamplingError {
    /// The frequency table has no positive mass to draw from.
    #[error("total weight must be > 0 (got {total})")]
    InvalidWeight {
        /// Last cumulative weight of the table.
        total: f64,
    },

    /// More distinct items were requested than the population holds.
    #[error("cannot draw {requested} distinct items from a population of {available}")]
    InsufficientPopulation {
        /// Number of items asked for.
        requested: usize,
        /// Population size.
        available: usize,
    },

    /// A weight is below zero.
    #[error("weight at index {index} must be >= 0 (got {weight})")]
    NegativeWeight { index: usize, weight: f64 },

    /// A weight is NaN or infinite.
    #[error("weight at index {index} must be finite (got {weight})")]
    NonFiniteWeight { index: usize, weight: f64 },
}

/// A type alias for `Result<T, SamplingError>`.
pub type Result<T> = std::result::Result<T, SamplingError>;
