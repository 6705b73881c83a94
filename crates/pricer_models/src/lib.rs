//! # Pricer Models (L2: Reference Pricers)
//!
//! Deterministic pricers used as correctness oracles for the Monte Carlo
//! engine in `pricer_pricing`.
//!
//! This crate provides:
//! - Closed-form Black-Scholes prices for European calls and puts (`analytical`)
//! - An explicit finite-difference solver for the Black-Scholes PDE (`pde`)
//!
//! ## Design Principles
//!
//! - **Pure functions**: no validation, no side effects; degenerate inputs
//!   propagate as `NaN`/`Inf`
//! - **Shared trait**: both pricers implement
//!   [`EuropeanPricer`](pricer_core::traits::EuropeanPricer)

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod pde;
