//! Core parameter, result and error types.
//!
//! This module provides:
//! - `params`: `OptionMarketParameters` and `SimulationResult`
//! - `error`: Structured error types for pricing and parameter validation
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`OptionMarketParameters`], [`SimulationResult`] from `params`
//! - [`PricingError`], [`ParameterError`] from `error`

pub mod error;
pub mod params;

// Re-export commonly used types at module level
pub use error::{ParameterError, PricingError};
pub use params::{OptionMarketParameters, SimulationResult};
