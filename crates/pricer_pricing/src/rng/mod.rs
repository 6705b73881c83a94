//! # Random Number Generation Infrastructure
//!
//! This module provides random number generation facilities for Monte Carlo
//! simulations in the pricing engine.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: All generators are built from an explicit 64-bit
//!   seed; entropy seeding draws that seed from the OS and records it
//! - **Independent streams**: Parallel workers derive disjoint streams from
//!   one base seed via [`PricerRng::for_stream`]; no generator is ever shared
//! - **Static dispatch**: No `Box<dyn Trait>` in hot paths
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::rng::PricerRng;
//!
//! // Create a seeded RNG for reproducible simulations
//! let mut rng = PricerRng::from_seed(12345);
//!
//! // Uniform on the open interval (0, 1), safe for quantile transforms
//! let u = rng.gen_open_uniform();
//! assert!(u > 0.0 && u < 1.0);
//!
//! // Standard normal via inverse-CDF transform
//! let z = rng.gen_normal_inverse_cdf();
//!
//! // Worker streams derived from one base seed
//! let mut worker_3 = PricerRng::for_stream(12345, 3);
//! ```

mod prng;

// Public re-exports
pub use prng::{derive_stream_seed, PricerRng};
