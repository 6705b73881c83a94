//! PDE command implementation
//!
//! Solves the Black-Scholes PDE with the explicit finite-difference scheme
//! and optionally writes the full price surface to disk.

use std::path::Path;
use std::time::Instant;

use pricer_core::types::SimulationResult;
use pricer_models::analytical::price_analytic;
use pricer_models::pde::{max_stable_space_steps, ExplicitFdSolver, FdGrid};
use serde::Serialize;
use tracing::info;

use crate::config::{MarketSection, OutputFormat, PricingRunConfig};
use crate::Result;

/// Finite-difference prices compared against the analytic oracle
#[derive(Debug, Clone, Serialize)]
pub struct PdeReport {
    pub market: MarketSection,
    pub time_steps: usize,
    pub space_steps: usize,
    pub max_stable_space_steps: usize,
    pub call: f64,
    pub put: f64,
    pub analytic: SimulationResult,
    pub call_error: f64,
    pub elapsed_secs: f64,
}

/// Solve on the configured grid
pub fn solve(config: &PricingRunConfig) -> Result<(PdeReport, FdGrid)> {
    let params = config.market.params();
    let time_steps = config.pde.time_steps;
    let solver = match config.pde.space_steps {
        Some(space_steps) => ExplicitFdSolver::new(time_steps, space_steps),
        None => ExplicitFdSolver::stable_for(&params, time_steps),
    };

    info!(
        time_steps = solver.time_steps,
        space_steps = solver.space_steps,
        s_max = 2.0 * params.spot,
        "Solving Black-Scholes PDE"
    );

    let start = Instant::now();
    let grid = solver.solve(&params)?;
    let elapsed_secs = start.elapsed().as_secs_f64();

    let call = grid.call_at(params.spot);
    let put = call - params.parity_forward();
    let analytic = price_analytic(params);

    let report = PdeReport {
        market: config.market,
        time_steps: solver.time_steps,
        space_steps: solver.space_steps,
        max_stable_space_steps: max_stable_space_steps(
            time_steps,
            params.maturity,
            params.rate,
            params.volatility,
        ),
        call,
        put,
        call_error: call - analytic.call,
        analytic,
        elapsed_secs,
    };
    Ok((report, grid))
}

/// Write the price surface as CSV
///
/// One row per spatial node: the spot level, then the call price at each
/// time-to-maturity level.
pub fn write_grid(grid: &FdGrid, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    let header = std::iter::once("S".to_string())
        .chain(grid.temporal_grid().iter().map(|tau| tau.to_string()));
    writer.write_record(header)?;

    for (i, spot) in grid.spatial_grid().iter().enumerate() {
        let row = std::iter::once(spot.to_string())
            .chain((0..grid.temporal_grid().len()).map(|j| grid.value(i, j).to_string()));
        writer.write_record(row)?;
    }

    writer.flush()?;
    Ok(())
}

/// Render a report in the requested format
pub fn render(report: &PdeReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Table => {
            let m = &report.market;
            Ok(format!(
                "\nCall option pricing using the Black-Scholes PDE (explicit finite difference)\n\
                 Grid: [0, {}] x [0, {}] (stable up to {} spatial intervals)\n\
                 Spatial range: [0, {}], temporal range: [0, {}]\n\
                 Call price: {:.6} (Black-Scholes {:.6}, error {:.2e})\n\
                 Put price:  {:.6} (Black-Scholes {:.6})\n\
                 Time elapsed: {:.3} s\n",
                report.space_steps,
                report.time_steps,
                report.max_stable_space_steps,
                2.0 * m.spot,
                m.maturity,
                report.call,
                report.analytic.call,
                report.call_error,
                report.put,
                report.analytic.put,
                report.elapsed_secs
            ))
        }
    }
}

/// Run the pde command
pub fn run(config: &PricingRunConfig, grid_output: Option<&Path>) -> Result<()> {
    let (report, grid) = solve(config)?;
    if let Some(path) = grid_output {
        write_grid(&grid, path)?;
        info!(path = %path.display(), "Price grid written");
    }
    println!("{}", render(&report, config.output)?);
    Ok(())
}
