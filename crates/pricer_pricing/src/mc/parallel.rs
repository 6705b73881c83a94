//! Parallel reduction over disjoint draw ranges.
//!
//! `[0, N)` is cut into contiguous ranges, one per worker. Worker `k` owns
//! stream `k` of the run's base seed and merges its sums into the shared
//! totals exactly once, under a single mutex.

use std::ops::Range;
use std::sync::Mutex;

use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use tracing::trace;

use super::accumulator::{PartialSums, WorkerAccumulator};
use super::config::NormalSampler;
use super::error::EngineError;
use super::sampler::TerminalSampler;
use crate::rng::PricerRng;

/// Splits `[0, total)` into at most `workers` contiguous, disjoint ranges.
///
/// The first `total % workers` ranges get one extra index. The worker count
/// is clamped to `[1, total]` so no range is empty (unless `total == 0`).
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::split_range;
///
/// let ranges = split_range(10, 3);
/// assert_eq!(ranges, vec![0..4, 4..7, 7..10]);
/// ```
pub fn split_range(total: u64, workers: usize) -> Vec<Range<u64>> {
    if total == 0 {
        return Vec::new();
    }
    let workers = (workers.max(1) as u64).min(total);
    let base = total / workers;
    let rem = total % workers;

    let mut ranges = Vec::with_capacity(workers as usize);
    let mut start = 0_u64;
    for k in 0..workers {
        let len = base + u64::from(k < rem);
        ranges.push(start..start + len);
        start += len;
    }
    ranges
}

/// Runs the parallel reduction and returns the merged, undiscounted sums.
///
/// With `workers = None` the ranges are spread over the current rayon pool;
/// otherwise a dedicated pool of that size is built for this run.
pub(crate) fn reduce_parallel(
    base_seed: u64,
    total: u64,
    workers: Option<usize>,
    sampler: &TerminalSampler,
    normal: NormalSampler,
) -> Result<(PartialSums, usize), EngineError> {
    match workers {
        None => {
            let ranges = split_range(total, rayon::current_num_threads());
            let count = ranges.len();
            Ok((reduce_ranges(base_seed, ranges, sampler, normal)?, count))
        }
        Some(n) => {
            let pool = ThreadPoolBuilder::new()
                .num_threads(n)
                .build()
                .map_err(|e| EngineError::ThreadPool(e.to_string()))?;
            let ranges = split_range(total, n);
            let count = ranges.len();
            let sums = pool.install(|| reduce_ranges(base_seed, ranges, sampler, normal))?;
            Ok((sums, count))
        }
    }
}

fn reduce_ranges(
    base_seed: u64,
    ranges: Vec<Range<u64>>,
    sampler: &TerminalSampler,
    normal: NormalSampler,
) -> Result<PartialSums, EngineError> {
    let totals = Mutex::new(PartialSums::default());

    ranges
        .into_par_iter()
        .enumerate()
        .try_for_each(|(worker, range)| {
            let mut acc = WorkerAccumulator::new(PricerRng::for_stream(base_seed, worker as u64));
            acc.run(range.end - range.start, sampler, normal);
            let partial = acc.finish();

            let mut shared = totals.lock().map_err(|_| EngineError::MergePoisoned)?;
            shared.merge(&partial);
            trace!(
                worker,
                start = range.start,
                end = range.end,
                draws = partial.draws,
                "merged worker totals"
            );
            Ok(())
        })?;

    totals.into_inner().map_err(|_| EngineError::MergePoisoned)
}
