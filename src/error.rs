//! Error types.

use thiserror::Error;

/// A rejected [`OptimizerConfig`](crate::fleet::OptimizerConfig) value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be a finite, non-negative number (got {value})")]
    NegativeOrNonFinite { field: &'static str, value: f64 },
    #[error("{field} must be greater than zero (got {value})")]
    NotPositive { field: &'static str, value: f64 },
    #[error("two_opt_max_passes must be at least 1")]
    ZeroPassCap,
}
