//! # Pricer Pricing (Layer 3: Monte Carlo Engine)
//!
//! ## Layer 3 Role
//!
//! pricer_pricing estimates European call and put prices by Monte Carlo
//! simulation of the terminal asset price under the Black-Scholes
//! risk-neutral measure:
//! - Seeded random number generation with independent per-worker streams
//! - Sequential and rayon-parallel reductions with one merge per worker
//! - Standard errors and confidence half-widths alongside the prices
//!
//! The closed-form oracle lives in `pricer_models::analytical`; this crate
//! depends only on `pricer_core`.
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_core::types::OptionMarketParameters;
//! use pricer_pricing::mc::price_monte_carlo;
//!
//! let params = OptionMarketParameters::default();
//! let result = price_monte_carlo(params, 100_000, true).unwrap();
//!
//! // Put-call parity holds up to sampling noise
//! let forward = params.parity_forward();
//! assert!((result.call - result.put - forward).abs() < 0.5);
//! ```
//!
//! ## Logging
//!
//! Runs emit `tracing` events (`debug` per run, `trace` per worker merge).
//! No subscriber is installed here.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
// Allow unknown lints for clippy compatibility across versions
#![allow(unknown_lints)]

// Random number generation infrastructure
pub mod rng;

// Monte Carlo engine
pub mod mc;
