//! Monte Carlo pricer orchestration.
//!
//! Resolves the seed, dispatches to the sequential or parallel reduction,
//! discounts the merged sums once and reports the standard errors.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use pricer_core::traits::EuropeanPricer;
use pricer_core::types::{OptionMarketParameters, PricingError, SimulationResult};
use tracing::debug;

use super::accumulator::{PartialSums, WorkerAccumulator};
use super::config::{ExecutionMode, MonteCarloConfig, SeedPolicy};
use super::error::EngineError;
use super::parallel::reduce_parallel;
use super::sampler::TerminalSampler;
use crate::rng::PricerRng;

/// Result of one Monte Carlo run.
///
/// Prices are discounted means; standard errors are discounted too, so
/// `call ± confidence_95().0` is a 95% interval on the call price.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::MonteCarloEstimate;
///
/// let estimate = MonteCarloEstimate {
///     call: 7.0,
///     put: 7.4,
///     call_std_error: 0.01,
///     put_std_error: 0.008,
///     sample_count: 1_000_000,
///     workers: 8,
///     seed: 42,
/// };
///
/// let (call_hw, _) = estimate.confidence_95();
/// assert!((call_hw - 0.0196).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MonteCarloEstimate {
    /// Discounted mean call payoff.
    pub call: f64,
    /// Discounted mean put payoff.
    pub put: f64,
    /// Standard error of `call`; NaN for a single draw.
    pub call_std_error: f64,
    /// Standard error of `put`; NaN for a single draw.
    pub put_std_error: f64,
    /// Number of draws.
    pub sample_count: u64,
    /// Number of accumulators merged (1 for sequential runs).
    pub workers: usize,
    /// Base seed of the run; replays it under `SeedPolicy::Fixed`.
    pub seed: u64,
}

impl MonteCarloEstimate {
    /// `(call, put)` view of the estimate.
    #[inline]
    pub fn result(&self) -> SimulationResult {
        SimulationResult::new(self.call, self.put)
    }

    /// 95% confidence half-widths `(call, put)`.
    #[inline]
    pub fn confidence_95(&self) -> (f64, f64) {
        (1.96 * self.call_std_error, 1.96 * self.put_std_error)
    }

    /// 99% confidence half-widths `(call, put)`.
    #[inline]
    pub fn confidence_99(&self) -> (f64, f64) {
        (2.576 * self.call_std_error, 2.576 * self.put_std_error)
    }

    fn from_sums(sums: &PartialSums, discount: f64, workers: usize, seed: u64) -> Self {
        let n = sums.draws as f64;
        let call = sums.call / n;
        let put = sums.put / n;

        Self {
            call: discount * call,
            put: discount * put,
            call_std_error: discount * std_error(call, sums.call_sq / n, sums.draws),
            put_std_error: discount * std_error(put, sums.put_sq / n, sums.draws),
            sample_count: sums.draws,
            workers,
            seed,
        }
    }
}

/// Standard error of a sample mean from its first two raw moments.
fn std_error(mean: f64, mean_sq: f64, draws: u64) -> f64 {
    if draws < 2 {
        return f64::NAN;
    }
    let n = draws as f64;
    // Unbiased variance; clamp cancellation noise.
    let variance = ((mean_sq - mean * mean) * n / (n - 1.0)).max(0.0);
    (variance / n).sqrt()
}

/// Monte Carlo pricing engine for European calls and puts.
///
/// Each [`price`](Self::price) call is independent: the seed policy is
/// resolved to a base seed once per run, all randomness derives from it.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::OptionMarketParameters;
/// use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer, SeedPolicy};
///
/// let config = MonteCarloConfig::builder()
///     .sample_count(100_000)
///     .seed(SeedPolicy::Fixed(42))
///     .build()
///     .unwrap();
///
/// let pricer = MonteCarloPricer::new(config).unwrap();
/// let estimate = pricer.price(&OptionMarketParameters::default()).unwrap();
///
/// assert!(estimate.call > 0.0 && estimate.put > 0.0);
/// println!("call = {:.4} ± {:.4}", estimate.call, estimate.confidence_95().0);
/// ```
#[derive(Clone, Debug)]
pub struct MonteCarloPricer {
    config: MonteCarloConfig,
}

impl MonteCarloPricer {
    /// Creates a pricer from a configuration.
    ///
    /// # Errors
    ///
    /// Re-validates `config` and returns its `EngineError` if invalid.
    pub fn new(config: MonteCarloConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    /// Runs the simulation for `params`.
    ///
    /// Market parameters are not validated; NaN or infinite inputs propagate
    /// into the estimate.
    ///
    /// # Errors
    ///
    /// `EngineError::ThreadPool` if a dedicated pool cannot be built and
    /// `EngineError::MergePoisoned` if a worker panicked during its merge.
    pub fn price(&self, params: &OptionMarketParameters) -> Result<MonteCarloEstimate, EngineError> {
        let sample_count = self.config.sample_count();
        let base_seed = match self.config.seed() {
            SeedPolicy::Fixed(seed) => seed,
            SeedPolicy::Entropy => PricerRng::entropy_seed(),
        };
        let sampler = TerminalSampler::new(params);
        let normal = self.config.sampler();

        debug!(
            sample_count,
            execution = ?self.config.execution(),
            sampler = ?normal,
            seed = base_seed,
            workers = ?self.config.workers(),
            "starting Monte Carlo run"
        );

        let (sums, workers) = match self.config.execution() {
            ExecutionMode::Sequential => {
                // Stream 0: a one-worker parallel run reproduces this exactly.
                let mut acc = WorkerAccumulator::new(PricerRng::for_stream(base_seed, 0));
                acc.run(sample_count, &sampler, normal);
                (acc.finish(), 1)
            }
            ExecutionMode::Parallel => reduce_parallel(
                base_seed,
                sample_count,
                self.config.workers(),
                &sampler,
                normal,
            )?,
        };

        let estimate =
            MonteCarloEstimate::from_sums(&sums, params.discount_factor(), workers, base_seed);
        debug!(
            call = estimate.call,
            put = estimate.put,
            call_std_error = estimate.call_std_error,
            put_std_error = estimate.put_std_error,
            workers,
            "finished Monte Carlo run"
        );
        Ok(estimate)
    }
}

impl EuropeanPricer for MonteCarloPricer {
    fn price(&self, params: &OptionMarketParameters) -> Result<SimulationResult, PricingError> {
        Ok(MonteCarloPricer::price(self, params)?.result())
    }
}

/// Prices a European call and put by Monte Carlo with entropy seeding.
///
/// Convenience entry point over [`MonteCarloPricer`] using the inverse-CDF
/// sampler and, when `parallel` is set, the global rayon pool.
///
/// # Errors
///
/// `EngineError::InvalidSampleCount` for `sample_count == 0`, otherwise the
/// errors of [`MonteCarloPricer::price`].
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::OptionMarketParameters;
/// use pricer_pricing::mc::{price_monte_carlo, EngineError};
///
/// let params = OptionMarketParameters::default();
/// let result = price_monte_carlo(params, 50_000, true).unwrap();
/// assert!(result.call >= 0.0 && result.put >= 0.0);
///
/// assert_eq!(
///     price_monte_carlo(params, 0, false),
///     Err(EngineError::InvalidSampleCount(0))
/// );
/// ```
pub fn price_monte_carlo(
    params: OptionMarketParameters,
    sample_count: u64,
    parallel: bool,
) -> Result<SimulationResult, EngineError> {
    let config = MonteCarloConfig::builder()
        .sample_count(sample_count)
        .parallel(parallel)
        .seed(SeedPolicy::Entropy)
        .build()?;
    let estimate = MonteCarloPricer::new(config)?.price(&params)?;
    Ok(estimate.result())
}
