//! Price command implementation
//!
//! Runs the Monte Carlo engine, times it, and compares against the
//! closed-form Black-Scholes prices.

use std::time::Instant;

use pricer_core::types::SimulationResult;
use pricer_models::analytical::price_analytic;
use pricer_pricing::mc::{ExecutionMode, MonteCarloEstimate, MonteCarloPricer};
use serde::Serialize;
use tracing::info;

use crate::config::{MarketSection, OutputFormat, PricingRunConfig};
use crate::Result;

/// Monte Carlo run compared against the analytic oracle
#[derive(Debug, Clone, Serialize)]
pub struct PriceReport {
    pub market: MarketSection,
    pub execution: ExecutionMode,
    pub monte_carlo: MonteCarloEstimate,
    pub analytic: SimulationResult,
    pub call_error: f64,
    pub put_error: f64,
    pub elapsed_secs: f64,
}

/// Price with the configured engine
pub fn price(config: &PricingRunConfig) -> Result<PriceReport> {
    let params = config.market.params();
    let pricer = MonteCarloPricer::new(config.monte_carlo_config()?)?;

    info!(
        sample_count = config.monte_carlo.sample_count,
        parallel = config.monte_carlo.parallel,
        "Starting Monte Carlo pricing"
    );

    let start = Instant::now();
    let estimate = pricer.price(&params)?;
    let elapsed_secs = start.elapsed().as_secs_f64();

    let analytic = price_analytic(params);
    info!(elapsed_secs, "Pricing complete");

    Ok(PriceReport {
        market: config.market,
        execution: pricer.config().execution(),
        call_error: estimate.call - analytic.call,
        put_error: estimate.put - analytic.put,
        monte_carlo: estimate,
        analytic,
        elapsed_secs,
    })
}

/// Render a report in the requested format
pub fn render(report: &PriceReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Table => Ok(render_table(report)),
    }
}

fn render_table(report: &PriceReport) -> String {
    let mc = &report.monte_carlo;
    let (call_hw, put_hw) = mc.confidence_95();
    let mode = match report.execution {
        ExecutionMode::Sequential => "sequential",
        ExecutionMode::Parallel => "parallel",
    };

    let mut out = String::new();
    out.push_str(&format!(
        "\nMonte Carlo method ({}) using {} simulations, {} worker(s), seed {}\n",
        mode, mc.sample_count, mc.workers, mc.seed
    ));
    out.push_str("┌────────┬──────────────┬──────────────┬──────────────┬──────────────┐\n");
    out.push_str("│ Option │ Monte Carlo  │ ± 95% CI     │ Black-Scholes│ Error        │\n");
    out.push_str("├────────┼──────────────┼──────────────┼──────────────┼──────────────┤\n");
    out.push_str(&format!(
        "│ Call   │ {:>12.6} │ {:>12.6} │ {:>12.6} │ {:>12.6} │\n",
        mc.call, call_hw, report.analytic.call, report.call_error
    ));
    out.push_str(&format!(
        "│ Put    │ {:>12.6} │ {:>12.6} │ {:>12.6} │ {:>12.6} │\n",
        mc.put, put_hw, report.analytic.put, report.put_error
    ));
    out.push_str("└────────┴──────────────┴──────────────┴──────────────┴──────────────┘\n");
    out.push_str(&format!("Time elapsed: {:.3} s\n", report.elapsed_secs));
    out
}

/// Run the price command
pub fn run(config: &PricingRunConfig) -> Result<()> {
    let report = price(config)?;
    println!("{}", render(&report, config.output)?);
    Ok(())
}
