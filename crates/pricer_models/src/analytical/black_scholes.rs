//! Black-Scholes pricing model for European options.
//!
//! This module provides the closed-form Black-Scholes prices for European
//! call and put options. It is the correctness oracle for the Monte Carlo
//! engine.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! ## Degenerate Inputs
//!
//! Nothing is validated or clamped. Zero volatility or zero maturity divide
//! by zero in d₁ and the prices come out as `NaN`/`Inf` instead of an error.

use pricer_core::math::distributions::norm_cdf;
use pricer_core::traits::EuropeanPricer;
use pricer_core::types::{OptionMarketParameters, PricingError, SimulationResult};

/// Black-Scholes evaluator bound to one parameter set.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionMarketParameters;
/// use pricer_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(OptionMarketParameters::new(100.0, 100.0, 0.05, 0.2, 1.0));
/// let call_price = bs.price_call();
/// let put_price = bs.price_put();
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call_price - put_price - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BlackScholes {
    params: OptionMarketParameters,
}

impl BlackScholes {
    /// Creates a new evaluator. No validation is performed.
    #[inline]
    pub fn new(params: OptionMarketParameters) -> Self {
        Self { params }
    }

    /// Returns the bound parameters.
    #[inline]
    pub fn params(&self) -> &OptionMarketParameters {
        &self.params
    }

    /// Computes the d1 term of the Black-Scholes formula.
    ///
    /// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
    #[inline]
    pub fn d1(&self) -> f64 {
        let p = &self.params;
        let log_moneyness = (p.spot / p.strike).ln();
        let drift = (p.rate + 0.5 * p.volatility * p.volatility) * p.maturity;
        (log_moneyness + drift) / p.diffusion()
    }

    /// Computes the d2 term of the Black-Scholes formula.
    ///
    /// d₂ = d₁ - σ√T
    #[inline]
    pub fn d2(&self) -> f64 {
        self.d1() - self.params.diffusion()
    }

    /// Computes European call option price.
    ///
    /// C = S·N(d₁) - K·e^(-rT)·N(d₂)
    #[inline]
    pub fn price_call(&self) -> f64 {
        let p = &self.params;
        p.spot * norm_cdf(self.d1()) - p.strike * p.discount_factor() * norm_cdf(self.d2())
    }

    /// Computes European put option price.
    ///
    /// P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
    #[inline]
    pub fn price_put(&self) -> f64 {
        let p = &self.params;
        p.strike * p.discount_factor() * norm_cdf(-self.d2()) - p.spot * norm_cdf(-self.d1())
    }

    /// Computes both prices, sharing d₁, d₂ and the discount factor.
    pub fn price(&self) -> SimulationResult {
        let p = &self.params;
        let d1 = self.d1();
        let d2 = d1 - p.diffusion();
        let discounted_strike = p.strike * p.discount_factor();

        SimulationResult {
            call: p.spot * norm_cdf(d1) - discounted_strike * norm_cdf(d2),
            put: discounted_strike * norm_cdf(-d2) - p.spot * norm_cdf(-d1),
        }
    }
}

/// Closed-form Black-Scholes call and put prices.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionMarketParameters;
/// use pricer_models::analytical::price_analytic;
///
/// let result = price_analytic(OptionMarketParameters::new(42.0, 40.0, 0.1, 0.2, 0.5));
/// assert!((result.call - 4.7594).abs() < 1e-4);
/// assert!((result.put - 0.8086).abs() < 1e-4);
/// ```
#[inline]
pub fn price_analytic(params: OptionMarketParameters) -> SimulationResult {
    BlackScholes::new(params).price()
}

/// Stateless [`EuropeanPricer`] over the closed-form formula.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticPricer;

impl EuropeanPricer for AnalyticPricer {
    #[inline]
    fn price(&self, params: &OptionMarketParameters) -> Result<SimulationResult, PricingError> {
        Ok(price_analytic(*params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn params(spot: f64, strike: f64, rate: f64, vol: f64, maturity: f64) -> OptionMarketParameters {
        OptionMarketParameters::new(spot, strike, rate, vol, maturity)
    }

    #[test]
    fn test_reference_contract() {
        // S=90, K=95, r=5%, σ=20%, T=1
        let result = price_analytic(OptionMarketParameters::default());
        assert_abs_diff_eq!(result.call, 7.001_702_131_168_187, epsilon = 1e-9);
        assert_abs_diff_eq!(result.put, 7.368_497_458_736_016, epsilon = 1e-9);
    }

    #[test]
    fn test_textbook_values() {
        // Hull, Options Futures and Other Derivatives, Example 15.6
        let result = price_analytic(params(42.0, 40.0, 0.1, 0.2, 0.5));
        assert_abs_diff_eq!(result.call, 4.759_422_392_871_535, epsilon = 1e-9);
        assert_abs_diff_eq!(result.put, 0.808_599_372_900_096, epsilon = 1e-9);

        let atm = price_analytic(params(100.0, 100.0, 0.05, 0.2, 1.0));
        assert_abs_diff_eq!(atm.call, 10.450_583_572_185_565, epsilon = 1e-9);
        assert_abs_diff_eq!(atm.put, 5.573_526_022_256_971, epsilon = 1e-9);
    }

    #[test]
    fn test_long_dated_contract() {
        let result = price_analytic(params(1150.0, 1072.0, 0.05, 0.2, 5.0));
        assert_abs_diff_eq!(result.call, 375.189_679_271_219_6, epsilon = 1e-8);
        assert_abs_diff_eq!(result.put, 60.064_118_723_765_77, epsilon = 1e-8);
    }

    #[test]
    fn test_zero_rate_atm_call_equals_put() {
        let result = price_analytic(params(100.0, 100.0, 0.0, 0.2, 1.0));
        assert_abs_diff_eq!(result.call, result.put, epsilon = 1e-12);
        assert_abs_diff_eq!(result.call, 7.965_567_455_405_804, epsilon = 1e-9);
    }

    #[test]
    fn test_negative_rate() {
        let result = price_analytic(params(100.0, 100.0, -0.01, 0.3, 2.0));
        assert_abs_diff_eq!(result.call, 15.977_786_748_230_6, epsilon = 1e-9);
        assert_abs_diff_eq!(result.put, 17.997_920_750_906_175, epsilon = 1e-9);
    }

    #[test]
    fn test_price_matches_individual_legs() {
        let bs = BlackScholes::new(params(95.0, 100.0, 0.03, 0.25, 0.75));
        let both = bs.price();
        assert_abs_diff_eq!(both.call, bs.price_call(), epsilon = 1e-14);
        assert_abs_diff_eq!(both.put, bs.price_put(), epsilon = 1e-14);
    }

    #[test]
    fn test_d1_d2_relationship() {
        let p = params(100.0, 105.0, 0.05, 0.2, 2.0);
        let bs = BlackScholes::new(p);
        assert_abs_diff_eq!(bs.d1() - bs.d2(), 0.2 * 2.0_f64.sqrt(), epsilon = 1e-15);
    }

    #[test]
    fn test_degenerate_inputs_propagate() {
        // ATM with r = 0 and σ = 0 makes d1 = 0/0
        let zero_vol = price_analytic(params(100.0, 100.0, 0.0, 0.0, 1.0));
        assert!(zero_vol.call.is_nan());
        assert!(zero_vol.put.is_nan());

        let zero_maturity = price_analytic(params(100.0, 100.0, 0.05, 0.2, 0.0));
        assert!(zero_maturity.call.is_nan());
        assert!(zero_maturity.put.is_nan());
    }

    #[test]
    fn test_monotone_in_spot() {
        let base = params(100.0, 100.0, 0.05, 0.2, 1.0);
        let mut previous = price_analytic(base.with_spot(50.0));
        for i in 51..=150 {
            let current = price_analytic(base.with_spot(i as f64));
            assert!(current.call > previous.call, "call not increasing at S = {}", i);
            assert!(current.put < previous.put, "put not decreasing at S = {}", i);
            previous = current;
        }
    }

    #[test]
    fn test_analytic_pricer_trait() {
        let p = OptionMarketParameters::default();
        let via_trait = AnalyticPricer.price(&p).unwrap();
        assert_eq!(via_trait, price_analytic(p));
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn market() -> impl Strategy<Value = OptionMarketParameters> {
            (
                50.0_f64..150.0,
                0.8_f64..1.25,
                -0.02_f64..0.1,
                0.15_f64..0.6,
                0.5_f64..3.0,
            )
                .prop_map(|(strike, moneyness, rate, vol, maturity)| {
                    OptionMarketParameters::new(strike * moneyness, strike, rate, vol, maturity)
                })
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(500))]

            #[test]
            fn test_put_call_parity(p in market()) {
                let result = price_analytic(p);
                prop_assert!(result.parity_error(&p).abs() < 1e-9,
                    "parity error {} for {:?}", result.parity_error(&p), p);
            }

            #[test]
            fn test_prices_are_non_negative_and_bounded(p in market()) {
                let result = price_analytic(p);
                prop_assert!(result.call >= 0.0 && result.call <= p.spot);
                prop_assert!(result.put >= 0.0 && result.put <= p.strike * p.discount_factor());
            }

            #[test]
            fn test_spot_monotonicity(p in market(), bump in 0.001_f64..0.1) {
                let base = price_analytic(p);
                let up = price_analytic(p.with_spot(p.spot * (1.0 + bump)));
                prop_assert!(up.call > base.call);
                prop_assert!(up.put < base.put);
            }
        }
    }
}
