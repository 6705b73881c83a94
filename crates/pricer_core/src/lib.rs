//! # pricer_core: Foundation Types for European Option Pricing
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Market parameters: `OptionMarketParameters` (`types::params`)
//! - Result type: `SimulationResult` (`types::params`)
//! - Error types: `PricingError`, `ParameterError` (`types::error`)
//! - Standard normal CDF, PDF and quantile (`math::distributions`)
//! - The `EuropeanPricer` trait implemented by every pricing engine (`traits`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - statrs: High-precision `erfc` and `erfc_inv`
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::distributions::{norm_cdf, norm_inv};
//! use pricer_core::types::OptionMarketParameters;
//!
//! let params = OptionMarketParameters::new(90.0, 95.0, 0.05, 0.2, 1.0);
//! assert!(params.validate().is_ok());
//!
//! // Quantile and CDF are inverse to each other
//! let z = norm_inv(0.975);
//! assert!((norm_cdf(z) - 0.975).abs() < 1e-12);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for parameters and results

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod traits;
pub mod types;
