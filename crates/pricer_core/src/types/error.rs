//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors from pricing operations
//! - `ParameterError`: Errors from market parameter validation

use thiserror::Error;

/// Categorised pricing errors.
///
/// Provides structured error handling for pricing operations with
/// descriptive context for each failure mode.
///
/// # Variants
/// - `InvalidInput`: Invalid market data, parameters or engine settings
/// - `NumericalInstability`: Computation cannot produce a meaningful value
/// - `ExecutionFailure`: Engine infrastructure (thread pool, locks) failed
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("Negative spot price".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: Negative spot price");
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PricingError {
    /// Invalid input data or parameters
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Numerical instability during computation
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),

    /// Engine infrastructure failure
    #[error("Execution failure: {0}")]
    ExecutionFailure(String),
}

/// Market parameter validation errors.
///
/// Pricing engines never raise these themselves: invalid parameters propagate
/// as `NaN`/`Inf`. Callers that want strict checking run
/// [`OptionMarketParameters::validate`](super::OptionMarketParameters::validate)
/// before pricing.
///
/// # Examples
/// ```
/// use pricer_core::types::ParameterError;
///
/// let err = ParameterError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ParameterError {
    /// Spot price is not strictly positive.
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot value
        spot: f64,
    },

    /// Strike price is not strictly positive.
    #[error("Invalid strike price: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Volatility is not strictly positive.
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Maturity is not strictly positive.
    #[error("Invalid maturity: T = {maturity}")]
    InvalidMaturity {
        /// The invalid maturity value
        maturity: f64,
    },

    /// Rate is NaN or infinite.
    #[error("Non-finite rate: r = {rate}")]
    NonFiniteRate {
        /// The invalid rate value
        rate: f64,
    },
}

impl From<ParameterError> for PricingError {
    fn from(err: ParameterError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pricing_error_display() {
        let err = PricingError::InvalidInput("Negative spot price".to_string());
        assert_eq!(err.to_string(), "Invalid input: Negative spot price");

        let err = PricingError::NumericalInstability("grid unstable".to_string());
        assert_eq!(err.to_string(), "Numerical instability: grid unstable");

        let err = PricingError::ExecutionFailure("pool".to_string());
        assert_eq!(err.to_string(), "Execution failure: pool");
    }

    #[test]
    fn test_parameter_error_display() {
        assert_eq!(
            ParameterError::InvalidSpot { spot: -1.0 }.to_string(),
            "Invalid spot price: S = -1"
        );
        assert_eq!(
            ParameterError::InvalidStrike { strike: 0.0 }.to_string(),
            "Invalid strike price: K = 0"
        );
        assert!(ParameterError::InvalidMaturity { maturity: 0.0 }
            .to_string()
            .contains("maturity"));
        assert!(ParameterError::NonFiniteRate { rate: f64::NAN }
            .to_string()
            .contains("rate"));
    }

    #[test]
    fn test_parameter_error_into_pricing_error() {
        let err: PricingError = ParameterError::InvalidVolatility { volatility: 0.0 }.into();
        assert!(matches!(err, PricingError::InvalidInput(msg) if msg.contains("volatility")));
    }
}
