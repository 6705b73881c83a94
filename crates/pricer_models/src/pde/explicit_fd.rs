//! Forward-Euler finite-difference solver for European calls.
//!
//! Uniform grid `S_i = i·dS` on `[0, 2·S₀]` with `N` intervals, and
//! `τ_j = j·dt` on `[0, T]` with `M` steps.
//!
//! - Initial condition: `V(S, 0) = max(S − K, 0)`
//! - Lower boundary: `V(0, τ) = 0`
//! - Upper boundary: `V(S_max, τ) = S_max − K·e^(−rτ)`
//!
//! With `α = σ²dt` and `β = r·dt` each interior node is updated as
//!
//! ```text
//! V[i][j+1] = (1 − β − i²α)·V[i][j]
//!           + ½(i²α + iβ)·V[i+1][j]
//!           + ½(i²α − iβ)·V[i−1][j]
//! ```
//!
//! Puts are recovered through put-call parity.

use pricer_core::traits::EuropeanPricer;
use pricer_core::types::{OptionMarketParameters, PricingError, SimulationResult};
use tracing::debug;

use super::error::FdError;

/// Upper edge of the spatial grid as a multiple of spot.
const SPOT_RANGE_MULTIPLIER: f64 = 2.0;

/// Safety margin applied to the stability bound.
const STABILITY_MARGIN: f64 = 0.99;

/// Largest surface [`ExplicitFdSolver::solve`] will allocate, in nodes.
///
/// `(N + 1)·(M + 1)` values of 8 bytes each; the cap is 400 MB.
pub const MAX_GRID_NODES: usize = 50_000_000;

/// Largest spatial resolution keeping the explicit scheme stable.
///
/// Solves `N²σ²dt + r·dt ≤ 1` for `N` with `dt = T / M` and applies a 1%
/// margin: `N = ⌊0.99·√(M/T − r) / σ⌋`, floored at 1 and capped at
/// [`MAX_GRID_NODES`]. A vanishing σ sends the bound to infinity, which
/// clamps to the cap.
///
/// # Examples
/// ```
/// use pricer_models::pde::max_stable_space_steps;
///
/// assert_eq!(max_stable_space_steps(10_000, 5.0, 0.05, 0.2), 221);
/// ```
pub fn max_stable_space_steps(time_steps: usize, maturity: f64, rate: f64, volatility: f64) -> usize {
    let bound = STABILITY_MARGIN * (time_steps as f64 / maturity - rate).sqrt() / volatility;
    if bound.is_nan() {
        return 1;
    }
    bound.floor().clamp(1.0, MAX_GRID_NODES as f64) as usize
}

/// Explicit finite-difference engine for the Black-Scholes PDE.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionMarketParameters;
/// use pricer_models::pde::ExplicitFdSolver;
///
/// let params = OptionMarketParameters::new(100.0, 100.0, 0.05, 0.2, 1.0);
/// let solver = ExplicitFdSolver::stable_for(&params, 2_000);
/// let grid = solver.solve(&params).unwrap();
///
/// assert!((grid.call_at(100.0) - 10.4506).abs() < 0.01);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExplicitFdSolver {
    /// Number of time steps (M).
    pub time_steps: usize,
    /// Number of spatial intervals (N); the grid has `N + 1` nodes.
    pub space_steps: usize,
}

impl ExplicitFdSolver {
    /// Creates a solver with explicit time and space resolution.
    #[inline]
    pub fn new(time_steps: usize, space_steps: usize) -> Self {
        Self {
            time_steps,
            space_steps,
        }
    }

    /// Creates a solver using the finest stable spatial grid for `time_steps`.
    pub fn stable_for(params: &OptionMarketParameters, time_steps: usize) -> Self {
        let space_steps =
            max_stable_space_steps(time_steps, params.maturity, params.rate, params.volatility);
        Self::new(time_steps, space_steps)
    }

    /// Marches the PDE from expiry to today and returns the full surface.
    ///
    /// # Errors
    ///
    /// - [`FdError::InvalidGrid`] if `time_steps == 0` or `space_steps < 2`
    /// - [`FdError::GridTooLarge`] if the surface would exceed
    ///   [`MAX_GRID_NODES`] nodes
    /// - [`FdError::UnstableTimeStep`] if the diagonal coefficient at the
    ///   last interior node is negative
    pub fn solve(&self, params: &OptionMarketParameters) -> Result<FdGrid, FdError> {
        let m = self.time_steps;
        let n = self.space_steps;
        if m == 0 || n < 2 {
            return Err(FdError::InvalidGrid {
                time_steps: m,
                space_steps: n,
            });
        }

        let nodes = n
            .checked_add(1)
            .zip(m.checked_add(1))
            .and_then(|(width, levels)| width.checked_mul(levels));
        if nodes.map_or(true, |nodes| nodes > MAX_GRID_NODES) {
            return Err(FdError::GridTooLarge {
                time_steps: m,
                space_steps: n,
                max_nodes: MAX_GRID_NODES,
            });
        }

        let s_max = SPOT_RANGE_MULTIPLIER * params.spot;
        let ds = s_max / n as f64;
        let dt = params.maturity / m as f64;
        let alpha = dt * params.volatility * params.volatility;
        let beta = dt * params.rate;

        let last = (n - 1) as f64;
        let coefficient = 1.0 - beta - last * last * alpha;
        if coefficient < 0.0 {
            return Err(FdError::UnstableTimeStep {
                coefficient,
                node: n - 1,
                max_space_steps: max_stable_space_steps(
                    m,
                    params.maturity,
                    params.rate,
                    params.volatility,
                ),
            });
        }

        debug!(
            time_steps = m,
            space_steps = n,
            s_max,
            dt,
            "explicit FD grid initialised"
        );

        let spatial: Vec<f64> = (0..=n).map(|i| i as f64 * ds).collect();
        let temporal: Vec<f64> = (0..=m).map(|j| j as f64 * dt).collect();

        let width = n + 1;
        let mut values = vec![0.0; width * (m + 1)];

        for (v, &s) in values[..width].iter_mut().zip(&spatial) {
            *v = (s - params.strike).max(0.0);
        }
        values[0] = 0.0;
        values[n] = s_max - params.strike;

        for j in 0..m {
            let (done, rest) = values.split_at_mut((j + 1) * width);
            let prev = &done[j * width..];
            let next = &mut rest[..width];

            for i in 1..n {
                let fi = i as f64;
                let diffusion = fi * fi * alpha;
                let convection = fi * beta;
                next[i] = (1.0 - beta - diffusion) * prev[i]
                    + 0.5 * (diffusion + convection) * prev[i + 1]
                    + 0.5 * (diffusion - convection) * prev[i - 1];
            }
            next[0] = 0.0;
            next[n] = s_max - params.strike * (-params.rate * temporal[j + 1]).exp();
        }

        Ok(FdGrid {
            spatial,
            temporal,
            values,
        })
    }
}

impl EuropeanPricer for ExplicitFdSolver {
    fn price(&self, params: &OptionMarketParameters) -> Result<SimulationResult, PricingError> {
        let call = self.solve(params)?.call_at(params.spot);
        Ok(SimulationResult::new(call, call - params.parity_forward()))
    }
}

/// Call price surface produced by [`ExplicitFdSolver::solve`].
///
/// Values are stored time level by time level; level `j` holds the call
/// price across the spatial grid at time-to-maturity `τ_j`.
#[derive(Debug, Clone)]
pub struct FdGrid {
    spatial: Vec<f64>,
    temporal: Vec<f64>,
    values: Vec<f64>,
}

impl FdGrid {
    /// Spot nodes `S_i = i·dS`, `i = 0..=N`.
    #[inline]
    pub fn spatial_grid(&self) -> &[f64] {
        &self.spatial
    }

    /// Time-to-maturity nodes `τ_j = j·dt`, `j = 0..=M`.
    #[inline]
    pub fn temporal_grid(&self) -> &[f64] {
        &self.temporal
    }

    /// Call prices across the spatial grid at time level `j`.
    ///
    /// # Panics
    ///
    /// Panics if `j` exceeds the number of time steps.
    #[inline]
    pub fn time_slice(&self, j: usize) -> &[f64] {
        let width = self.spatial.len();
        &self.values[j * width..(j + 1) * width]
    }

    /// Call price at spatial node `i`, time level `j`.
    #[inline]
    pub fn value(&self, i: usize, j: usize) -> f64 {
        self.time_slice(j)[i]
    }

    /// Call prices today (τ = T) across the spatial grid.
    #[inline]
    pub fn present_values(&self) -> &[f64] {
        self.time_slice(self.temporal.len() - 1)
    }

    /// Today's call price at `spot`, linearly interpolated between nodes.
    ///
    /// Spots outside the grid are clamped to its edges.
    pub fn call_at(&self, spot: f64) -> f64 {
        let prices = self.present_values();
        let n = self.spatial.len() - 1;
        let ds = self.spatial[1] - self.spatial[0];

        let x = (spot / ds).clamp(0.0, n as f64);
        let i = (x.floor() as usize).min(n - 1);
        let w = x - i as f64;
        prices[i] * (1.0 - w) + prices[i + 1] * w
    }
}
