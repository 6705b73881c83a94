//! CLI error types

use pricer_models::pde::FdError;
use pricer_pricing::mc::EngineError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by `europt` commands
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Monte Carlo engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("Finite-difference error: {0}")]
    FiniteDifference(#[from] FdError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
