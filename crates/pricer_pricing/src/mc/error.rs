//! Error types for the Monte Carlo engine.
//!
//! This module defines structured error types for configuration validation
//! and runtime failures of the sequential and parallel reductions.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Monte Carlo engine error.
///
/// # Examples
///
/// ```
/// use pricer_pricing::mc::EngineError;
///
/// let err = EngineError::InvalidSampleCount(0);
/// assert!(err.to_string().contains("Invalid sample count 0"));
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    /// Sample count must be at least 1.
    #[error("Invalid sample count {0}: must be at least 1")]
    InvalidSampleCount(u64),

    /// Explicit worker count must be at least 1.
    #[error("Invalid worker count {0}: must be at least 1")]
    InvalidWorkerCount(usize),

    /// The dedicated rayon pool could not be built.
    #[error("Thread pool error: {0}")]
    ThreadPool(String),

    /// A worker panicked while holding the shared totals.
    #[error("Shared totals lock poisoned during merge")]
    MergePoisoned,
}

impl From<EngineError> for PricingError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::InvalidSampleCount(_) | EngineError::InvalidWorkerCount(_) => {
                PricingError::InvalidInput(err.to_string())
            }
            EngineError::ThreadPool(_) | EngineError::MergePoisoned => {
                PricingError::ExecutionFailure(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_error_display() {
        let err = EngineError::InvalidSampleCount(0);
        assert!(err.to_string().contains("Invalid sample count 0"));

        let err = EngineError::InvalidWorkerCount(0);
        assert!(err.to_string().contains("Invalid worker count 0"));

        let err = EngineError::ThreadPool("out of threads".to_string());
        assert!(err.to_string().contains("out of threads"));
    }

    #[test]
    fn test_engine_error_into_pricing_error() {
        let input: PricingError = EngineError::InvalidSampleCount(0).into();
        assert!(matches!(input, PricingError::InvalidInput(_)));

        let exec: PricingError = EngineError::MergePoisoned.into();
        assert!(matches!(exec, PricingError::ExecutionFailure(_)));
    }
}
