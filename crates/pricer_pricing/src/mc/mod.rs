//! Monte Carlo pricing of European calls and puts.
//!
//! Per draw: `u ~ U(0, 1)` on the open interval, `Z = Φ⁻¹(u)`,
//! `ST = S·exp((r − σ²/2)T + σ√T·Z)`, then call and put payoffs. The sums
//! are discounted once by `e^(−rT)` after all draws are in.
//!
//! # Architecture
//!
//! ```text
//! MonteCarloPricer
//! ├── MonteCarloConfig   (sample count, execution mode, seed, sampler)
//! ├── TerminalSampler    (per-run drift / diffusion constants)
//! └── Reduction
//!     ├── Sequential: one WorkerAccumulator on stream 0
//!     └── Parallel:   split_range → one WorkerAccumulator per range
//!                     → one mutex-guarded merge per worker
//! ```
//!
//! # Examples
//!
//! ```rust
//! use pricer_core::types::OptionMarketParameters;
//! use pricer_pricing::mc::{ExecutionMode, MonteCarloConfig, MonteCarloPricer, SeedPolicy};
//!
//! let config = MonteCarloConfig::builder()
//!     .sample_count(200_000)
//!     .execution(ExecutionMode::Parallel)
//!     .seed(SeedPolicy::Fixed(42))
//!     .build()
//!     .unwrap();
//!
//! let estimate = MonteCarloPricer::new(config)
//!     .unwrap()
//!     .price(&OptionMarketParameters::default())
//!     .unwrap();
//!
//! println!(
//!     "call {:.4} ± {:.4}, put {:.4} ± {:.4}",
//!     estimate.call,
//!     estimate.confidence_95().0,
//!     estimate.put,
//!     estimate.confidence_95().1,
//! );
//! ```

pub mod accumulator;
pub mod config;
pub mod error;
pub mod parallel;
pub mod pricer;
pub mod sampler;

// Re-exports for convenient access
pub use accumulator::{PartialSums, WorkerAccumulator};
pub use config::{
    ExecutionMode, MonteCarloConfig, MonteCarloConfigBuilder, NormalSampler, SeedPolicy,
};
pub use error::EngineError;
pub use parallel::split_range;
pub use pricer::{price_monte_carlo, MonteCarloEstimate, MonteCarloPricer};
pub use sampler::TerminalSampler;
