//! Terminal-price sampling under the risk-neutral lognormal diffusion.

use pricer_core::types::OptionMarketParameters;

/// Precomputed per-run constants for mapping a normal draw to payoffs.
///
/// `ST = S·exp((r − σ²/2)·T + σ·√T·Z)`. Drift and diffusion are derived once
/// per run and never stored on the market parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TerminalSampler {
    spot: f64,
    strike: f64,
    log_drift: f64,
    diffusion: f64,
}

impl TerminalSampler {
    /// Builds the sampler for `params`.
    #[inline]
    pub fn new(params: &OptionMarketParameters) -> Self {
        Self {
            spot: params.spot,
            strike: params.strike,
            log_drift: params.log_drift(),
            diffusion: params.diffusion(),
        }
    }

    /// Terminal asset price for the standard normal draw `z`.
    #[inline]
    pub fn terminal_price(&self, z: f64) -> f64 {
        self.spot * (self.log_drift + self.diffusion * z).exp()
    }

    /// Undiscounted `(call, put)` payoffs for the standard normal draw `z`.
    #[inline]
    pub fn payoffs(&self, z: f64) -> (f64, f64) {
        let st = self.terminal_price(z);
        ((st - self.strike).max(0.0), (self.strike - st).max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_draw_is_drifted_spot() {
        let params = OptionMarketParameters::new(100.0, 100.0, 0.05, 0.2, 1.0);
        let sampler = TerminalSampler::new(&params);
        assert_relative_eq!(
            sampler.terminal_price(0.0),
            100.0 * (0.05_f64 - 0.02).exp(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_payoffs_are_exclusive() {
        let params = OptionMarketParameters::default();
        let sampler = TerminalSampler::new(&params);
        for z in [-3.0, -1.0, 0.0, 0.5, 2.0] {
            let (call, put) = sampler.payoffs(z);
            assert!(call >= 0.0 && put >= 0.0);
            assert!(call == 0.0 || put == 0.0);
            // call − put = ST − K pathwise
            assert_relative_eq!(
                call - put,
                sampler.terminal_price(z) - params.strike,
                epsilon = 1e-12
            );
        }
    }
}
