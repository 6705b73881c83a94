//! Analytical comparison tests for Monte Carlo pricing.
//!
//! These tests verify that Monte Carlo prices converge to the closed-form
//! Black-Scholes values.
//!
//! # Test Categories
//!
//! 1. **Accuracy**: sequential and parallel estimates vs Black-Scholes
//! 2. **Equivalence**: sequential vs parallel on the same parameters
//! 3. **Put-call parity**: in expectation, within sampling error
//! 4. **Convergence**: error decreases with sample count

use pricer_core::types::OptionMarketParameters;
use pricer_models::analytical::price_analytic;
use pricer_pricing::mc::{
    ExecutionMode, MonteCarloConfig, MonteCarloEstimate, MonteCarloPricer, NormalSampler,
    SeedPolicy,
};

/// Tolerance in standard errors; fixed seeds make these deterministic.
const Z: f64 = 5.0;

fn run(
    params: &OptionMarketParameters,
    sample_count: u64,
    execution: ExecutionMode,
    seed: u64,
) -> MonteCarloEstimate {
    let config = MonteCarloConfig::builder()
        .sample_count(sample_count)
        .execution(execution)
        .seed(SeedPolicy::Fixed(seed))
        .build()
        .unwrap();
    MonteCarloPricer::new(config).unwrap().price(params).unwrap()
}

fn assert_within_se(estimate: &MonteCarloEstimate, params: &OptionMarketParameters, label: &str) {
    let reference = price_analytic(*params);
    let call_err = (estimate.call - reference.call).abs();
    let put_err = (estimate.put - reference.put).abs();

    assert!(
        call_err < Z * estimate.call_std_error,
        "{label} call: MC={:.4}, Analytical={:.4}, Error={:.4}, SE={:.4}",
        estimate.call,
        reference.call,
        call_err,
        estimate.call_std_error
    );
    assert!(
        put_err < Z * estimate.put_std_error,
        "{label} put: MC={:.4}, Analytical={:.4}, Error={:.4}, SE={:.4}",
        estimate.put,
        reference.put,
        put_err,
        estimate.put_std_error
    );
}

// ============================================================================
// Accuracy
// ============================================================================

#[test]
fn test_sequential_vs_analytical_default_params() {
    let params = OptionMarketParameters::default();
    let estimate = run(&params, 200_000, ExecutionMode::Sequential, 42);
    assert_within_se(&estimate, &params, "sequential");
}

#[test]
fn test_parallel_vs_analytical_default_params() {
    let params = OptionMarketParameters::default();
    let estimate = run(&params, 200_000, ExecutionMode::Parallel, 42);
    assert_eq!(estimate.sample_count, 200_000);
    assert_within_se(&estimate, &params, "parallel");
}

#[test]
fn test_parallel_vs_analytical_atm() {
    let params = OptionMarketParameters::new(100.0, 100.0, 0.05, 0.2, 1.0);
    let estimate = run(&params, 200_000, ExecutionMode::Parallel, 7);
    assert_within_se(&estimate, &params, "atm");
}

#[test]
fn test_ziggurat_vs_analytical() {
    let params = OptionMarketParameters::new(42.0, 40.0, 0.1, 0.2, 0.5);
    let config = MonteCarloConfig::builder()
        .sample_count(200_000)
        .sampler(NormalSampler::Ziggurat)
        .seed(SeedPolicy::Fixed(2024))
        .build()
        .unwrap();
    let estimate = MonteCarloPricer::new(config).unwrap().price(&params).unwrap();
    assert_within_se(&estimate, &params, "ziggurat");
}

#[test]
fn test_explicit_worker_count_vs_analytical() {
    let params = OptionMarketParameters::new(1150.0, 1072.0, 0.05, 0.2, 5.0);
    let config = MonteCarloConfig::builder()
        .sample_count(100_003)
        .execution(ExecutionMode::Parallel)
        .workers(3)
        .seed(SeedPolicy::Fixed(5))
        .build()
        .unwrap();
    let estimate = MonteCarloPricer::new(config).unwrap().price(&params).unwrap();
    assert_eq!(estimate.workers, 3);
    assert_eq!(estimate.sample_count, 100_003);
    assert_within_se(&estimate, &params, "three workers");
}

// ============================================================================
// Equivalence and parity
// ============================================================================

#[test]
fn test_sequential_parallel_equivalence() {
    let params = OptionMarketParameters::default();
    let sequential = run(&params, 200_000, ExecutionMode::Sequential, 11);
    let parallel = run(&params, 200_000, ExecutionMode::Parallel, 12);

    let call_se = sequential.call_std_error.hypot(parallel.call_std_error);
    let put_se = sequential.put_std_error.hypot(parallel.put_std_error);
    assert!((sequential.call - parallel.call).abs() < Z * call_se);
    assert!((sequential.put - parallel.put).abs() < Z * put_se);
}

#[test]
fn test_put_call_parity_in_expectation() {
    for (params, seed) in [
        (OptionMarketParameters::default(), 1),
        (OptionMarketParameters::new(100.0, 80.0, 0.03, 0.35, 2.0), 2),
        (OptionMarketParameters::new(100.0, 120.0, -0.01, 0.25, 0.5), 3),
    ] {
        let estimate = run(&params, 100_000, ExecutionMode::Parallel, seed);
        let parity_error = estimate.result().parity_error(&params).abs();
        let tolerance = Z * (estimate.call_std_error + estimate.put_std_error);
        assert!(
            parity_error < tolerance,
            "parity error {parity_error:.5} exceeds {tolerance:.5} for {params:?}"
        );
    }
}

// ============================================================================
// Convergence
// ============================================================================

fn mean_abs_call_error(sample_count: u64, trials: u64, execution: ExecutionMode) -> f64 {
    let params = OptionMarketParameters::default();
    let reference = price_analytic(params).call;
    (0..trials)
        .map(|seed| (run(&params, sample_count, execution, 1_000 + seed).call - reference).abs())
        .sum::<f64>()
        / trials as f64
}

#[test]
fn test_convergence_with_sample_count() {
    let coarse = mean_abs_call_error(10_000, 8, ExecutionMode::Sequential);
    let fine = mean_abs_call_error(1_000_000, 8, ExecutionMode::Parallel);

    assert!(
        fine < coarse,
        "Error should decrease: 1e4 → {coarse:.5}, 1e6 → {fine:.5}"
    );
}

#[test]
fn test_std_error_scales_as_inverse_sqrt() {
    let params = OptionMarketParameters::default();
    let small = run(&params, 10_000, ExecutionMode::Sequential, 3);
    let large = run(&params, 1_000_000, ExecutionMode::Parallel, 3);

    // 100× the draws: SE shrinks about 10×.
    let ratio = small.call_std_error / large.call_std_error;
    assert!(ratio > 8.0 && ratio < 12.5, "SE ratio {ratio:.3}");
}
