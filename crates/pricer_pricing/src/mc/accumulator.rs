//! Per-worker accumulation state.
//!
//! A [`WorkerAccumulator`] is created for one contiguous block of draws,
//! mutated only by the thread that owns it, and consumed into
//! [`PartialSums`] that are merged exactly once into the run totals.

use super::config::NormalSampler;
use super::sampler::TerminalSampler;
use crate::rng::PricerRng;

/// Undiscounted payoff sums over a block of draws.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PartialSums {
    /// Σ call payoff.
    pub call: f64,
    /// Σ put payoff.
    pub put: f64,
    /// Σ call payoff².
    pub call_sq: f64,
    /// Σ put payoff².
    pub put_sq: f64,
    /// Number of draws summed.
    pub draws: u64,
}

impl PartialSums {
    /// Adds one draw's payoffs.
    #[inline]
    pub fn push(&mut self, call: f64, put: f64) {
        self.call += call;
        self.put += put;
        self.call_sq += call * call;
        self.put_sq += put * put;
        self.draws += 1;
    }

    /// Folds another block into this one.
    #[inline]
    pub fn merge(&mut self, other: &PartialSums) {
        self.call += other.call;
        self.put += other.put;
        self.call_sq += other.call_sq;
        self.put_sq += other.put_sq;
        self.draws += other.draws;
    }
}

/// Local state of one worker: its own random stream and its own sums.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::OptionMarketParameters;
/// use pricer_pricing::mc::{NormalSampler, TerminalSampler, WorkerAccumulator};
/// use pricer_pricing::rng::PricerRng;
///
/// let sampler = TerminalSampler::new(&OptionMarketParameters::default());
/// let mut acc = WorkerAccumulator::new(PricerRng::from_seed(1));
/// acc.run(1_000, &sampler, NormalSampler::InverseCdf);
///
/// let sums = acc.finish();
/// assert_eq!(sums.draws, 1_000);
/// ```
#[derive(Debug)]
pub struct WorkerAccumulator {
    rng: PricerRng,
    sums: PartialSums,
}

impl WorkerAccumulator {
    /// Creates an empty accumulator owning `rng`.
    #[inline]
    pub fn new(rng: PricerRng) -> Self {
        Self {
            rng,
            sums: PartialSums::default(),
        }
    }

    /// Seed of the owned stream.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Draws `draws` terminal prices and adds their payoffs.
    pub fn run(&mut self, draws: u64, sampler: &TerminalSampler, normal: NormalSampler) {
        // Dispatch once, not per draw.
        match normal {
            NormalSampler::InverseCdf => {
                self.accumulate(draws, sampler, PricerRng::gen_normal_inverse_cdf)
            }
            NormalSampler::Ziggurat => self.accumulate(draws, sampler, PricerRng::gen_normal),
        }
    }

    #[inline]
    fn accumulate<F>(&mut self, draws: u64, sampler: &TerminalSampler, mut next_normal: F)
    where
        F: FnMut(&mut PricerRng) -> f64,
    {
        for _ in 0..draws {
            let z = next_normal(&mut self.rng);
            let (call, put) = sampler.payoffs(z);
            self.sums.push(call, put);
        }
    }

    /// Consumes the accumulator, yielding its sums for the single merge.
    #[inline]
    pub fn finish(self) -> PartialSums {
        self.sums
    }
}
