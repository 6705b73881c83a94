//! Monte Carlo simulation configuration.
//!
//! This module provides configuration types and builders for the European
//! option Monte Carlo engine.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::EngineError;

/// How draws are scheduled across threads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ExecutionMode {
    /// Single thread, one random stream, every draw visited in order.
    #[default]
    Sequential,

    /// Disjoint contiguous index ranges on a rayon pool, one stream per
    /// worker, one merge per worker.
    Parallel,
}

/// Source of the base seed for a pricing run.
///
/// With [`SeedPolicy::Fixed`] two runs with the same configuration and the
/// same parameters produce bit-identical sequential estimates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SeedPolicy {
    /// Draw a fresh base seed from OS entropy once per run.
    #[default]
    Entropy,

    /// Use the given base seed.
    Fixed(u64),
}

/// Transform from random bits to standard normal variates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NormalSampler {
    /// `Z = Φ⁻¹(u)` for `u` uniform on the open interval (0, 1).
    #[default]
    InverseCdf,

    /// Ziggurat rejection sampler from `rand_distr`.
    Ziggurat,
}

/// Monte Carlo simulation configuration.
///
/// Immutable configuration specifying simulation parameters.
/// Use [`MonteCarloConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::{ExecutionMode, MonteCarloConfig, SeedPolicy};
///
/// let config = MonteCarloConfig::builder()
///     .sample_count(100_000)
///     .execution(ExecutionMode::Parallel)
///     .seed(SeedPolicy::Fixed(42))
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.sample_count(), 100_000);
/// assert_eq!(config.execution(), ExecutionMode::Parallel);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MonteCarloConfig {
    /// Number of terminal-price draws.
    sample_count: u64,
    /// Sequential or parallel accumulation.
    execution: ExecutionMode,
    /// Base seed source.
    seed: SeedPolicy,
    /// Normal variate transform.
    sampler: NormalSampler,
    /// Explicit worker count for parallel runs; `None` uses the rayon pool size.
    workers: Option<usize>,
}

impl MonteCarloConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> MonteCarloConfigBuilder {
        MonteCarloConfigBuilder::default()
    }

    /// Returns the number of draws.
    #[inline]
    pub fn sample_count(&self) -> u64 {
        self.sample_count
    }

    /// Returns the execution mode.
    #[inline]
    pub fn execution(&self) -> ExecutionMode {
        self.execution
    }

    /// Returns the seed policy.
    #[inline]
    pub fn seed(&self) -> SeedPolicy {
        self.seed
    }

    /// Returns the normal sampler.
    #[inline]
    pub fn sampler(&self) -> NormalSampler {
        self.sampler
    }

    /// Returns the explicit worker count, if any.
    #[inline]
    pub fn workers(&self) -> Option<usize> {
        self.workers
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `EngineError` if:
    /// - `sample_count` is 0
    /// - `workers` is `Some(0)`
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.sample_count == 0 {
            return Err(EngineError::InvalidSampleCount(self.sample_count));
        }
        if self.workers == Some(0) {
            return Err(EngineError::InvalidWorkerCount(0));
        }
        Ok(())
    }
}

/// Builder for [`MonteCarloConfig`].
///
/// Provides a fluent API for constructing Monte Carlo configurations
/// with validation at build time.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::{MonteCarloConfig, NormalSampler};
///
/// let config = MonteCarloConfig::builder()
///     .sample_count(50_000)
///     .sampler(NormalSampler::Ziggurat)
///     .workers(4)
///     .build()
///     .expect("valid config");
///
/// assert_eq!(config.workers(), Some(4));
/// ```
#[derive(Clone, Debug, Default)]
pub struct MonteCarloConfigBuilder {
    sample_count: Option<u64>,
    execution: ExecutionMode,
    seed: SeedPolicy,
    sampler: NormalSampler,
    workers: Option<usize>,
}

impl MonteCarloConfigBuilder {
    /// Sets the number of draws (must be at least 1).
    #[inline]
    pub fn sample_count(mut self, sample_count: u64) -> Self {
        self.sample_count = Some(sample_count);
        self
    }

    /// Sets the execution mode.
    #[inline]
    pub fn execution(mut self, execution: ExecutionMode) -> Self {
        self.execution = execution;
        self
    }

    /// Shorthand for `execution(Parallel)` / `execution(Sequential)`.
    #[inline]
    pub fn parallel(self, parallel: bool) -> Self {
        self.execution(if parallel {
            ExecutionMode::Parallel
        } else {
            ExecutionMode::Sequential
        })
    }

    /// Sets the seed policy.
    #[inline]
    pub fn seed(mut self, seed: SeedPolicy) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the normal sampler.
    #[inline]
    pub fn sampler(mut self, sampler: NormalSampler) -> Self {
        self.sampler = sampler;
        self
    }

    /// Sets an explicit worker count for parallel runs.
    ///
    /// A dedicated rayon pool of this size is built per run.
    #[inline]
    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidSampleCount` if `sample_count` was not
    /// set or is 0, and `EngineError::InvalidWorkerCount` for zero workers.
    pub fn build(self) -> Result<MonteCarloConfig, EngineError> {
        let config = MonteCarloConfig {
            sample_count: self.sample_count.unwrap_or(0),
            execution: self.execution,
            seed: self.seed,
            sampler: self.sampler,
            workers: self.workers,
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder_valid() {
        let config = MonteCarloConfig::builder()
            .sample_count(10_000)
            .build()
            .unwrap();

        assert_eq!(config.sample_count(), 10_000);
        assert_eq!(config.execution(), ExecutionMode::Sequential);
        assert_eq!(config.seed(), SeedPolicy::Entropy);
        assert_eq!(config.sampler(), NormalSampler::InverseCdf);
        assert_eq!(config.workers(), None);
    }

    #[test]
    fn test_config_builder_with_seed() {
        let config = MonteCarloConfig::builder()
            .sample_count(1000)
            .seed(SeedPolicy::Fixed(42))
            .build()
            .unwrap();

        assert_eq!(config.seed(), SeedPolicy::Fixed(42));
    }

    #[test]
    fn test_config_parallel_shorthand() {
        let parallel = MonteCarloConfig::builder()
            .sample_count(10)
            .parallel(true)
            .build()
            .unwrap();
        let sequential = MonteCarloConfig::builder()
            .sample_count(10)
            .parallel(false)
            .build()
            .unwrap();

        assert_eq!(parallel.execution(), ExecutionMode::Parallel);
        assert_eq!(sequential.execution(), ExecutionMode::Sequential);
    }

    #[test]
    fn test_config_invalid_zero_samples() {
        let result = MonteCarloConfig::builder().sample_count(0).build();

        assert!(matches!(result, Err(EngineError::InvalidSampleCount(0))));
    }

    #[test]
    fn test_config_missing_samples() {
        let result = MonteCarloConfig::builder().build();

        assert!(matches!(result, Err(EngineError::InvalidSampleCount(0))));
    }

    #[test]
    fn test_config_invalid_zero_workers() {
        let result = MonteCarloConfig::builder()
            .sample_count(100)
            .workers(0)
            .build();

        assert!(matches!(result, Err(EngineError::InvalidWorkerCount(0))));
    }

    #[test]
    fn test_config_accepts_billion_samples() {
        let config = MonteCarloConfig::builder()
            .sample_count(1_000_000_000)
            .build()
            .unwrap();

        assert_eq!(config.sample_count(), 1_000_000_000);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(ExecutionMode::default(), ExecutionMode::Sequential);
        assert_eq!(SeedPolicy::default(), SeedPolicy::Entropy);
        assert_eq!(NormalSampler::default(), NormalSampler::InverseCdf);
    }
}
