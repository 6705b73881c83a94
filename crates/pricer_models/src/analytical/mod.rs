//! Analytical pricing formulas for European options.
//!
//! This module provides the closed-form Black-Scholes solution used to
//! cross-check Monte Carlo estimates.
//!
//! ## Design Principles
//!
//! - **Numerical Stability**: Uses the erfc-based CDF from
//!   [`pricer_core::math::distributions`]
//! - **No validation**: callers check parameters upstream if they need to

pub mod black_scholes;

// Re-export main types at module level
pub use black_scholes::{price_analytic, AnalyticPricer, BlackScholes};
