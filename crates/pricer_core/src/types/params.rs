//! Market parameters and pricing results for European options.
//!
//! [`OptionMarketParameters`] is the single immutable input shared by every
//! pricing engine. Derived quantities (`d1`, `d2`, drift, diffusion) are
//! computed per call by the engines and never stored here.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::ParameterError;

/// Black-Scholes market parameters for a European option.
///
/// The struct is `Copy`: each pricing call receives its own copy of the five
/// scalars, so engines never share or mutate it.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionMarketParameters;
///
/// let params = OptionMarketParameters::new(100.0, 110.0, 0.05, 0.2, 1.0);
/// assert_eq!(params.strike, 110.0);
/// assert!((params.discount_factor() - (-0.05_f64).exp()).abs() < 1e-15);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OptionMarketParameters {
    /// Spot price of the underlying (S), must be positive.
    pub spot: f64,
    /// Strike price (K), must be positive.
    pub strike: f64,
    /// Continuously compounded risk-free rate (r).
    pub rate: f64,
    /// Annualised volatility (σ), must be positive.
    pub volatility: f64,
    /// Time to expiry in years (T), must be positive.
    pub maturity: f64,
}

impl Default for OptionMarketParameters {
    /// Reference contract: S=90, K=95, r=5%, σ=20%, T=1y.
    fn default() -> Self {
        Self {
            spot: 90.0,
            strike: 95.0,
            rate: 0.05,
            volatility: 0.2,
            maturity: 1.0,
        }
    }
}

impl OptionMarketParameters {
    /// Creates a new parameter set.
    ///
    /// No validation is performed; see [`validate`](Self::validate).
    #[inline]
    pub fn new(spot: f64, strike: f64, rate: f64, volatility: f64, maturity: f64) -> Self {
        Self {
            spot,
            strike,
            rate,
            volatility,
            maturity,
        }
    }

    /// Returns a copy with a different spot price.
    #[inline]
    pub fn with_spot(self, spot: f64) -> Self {
        Self { spot, ..self }
    }

    /// Returns a copy with a different strike price.
    #[inline]
    pub fn with_strike(self, strike: f64) -> Self {
        Self { strike, ..self }
    }

    /// Discount factor e^(−rT).
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.maturity).exp()
    }

    /// Risk-neutral log drift over the horizon: (r − σ²/2)·T.
    #[inline]
    pub fn log_drift(&self) -> f64 {
        (self.rate - 0.5 * self.volatility * self.volatility) * self.maturity
    }

    /// Diffusion scale over the horizon: σ·√T.
    #[inline]
    pub fn diffusion(&self) -> f64 {
        self.volatility * self.maturity.sqrt()
    }

    /// Right-hand side of put-call parity: S − K·e^(−rT).
    #[inline]
    pub fn parity_forward(&self) -> f64 {
        self.spot - self.strike * self.discount_factor()
    }

    /// Checks the domain constraints S, K, σ, T > 0 and r finite.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint in field order.
    pub fn validate(&self) -> Result<(), ParameterError> {
        // `!(x > 0.0)` also rejects NaN
        if !(self.spot > 0.0) || !self.spot.is_finite() {
            return Err(ParameterError::InvalidSpot { spot: self.spot });
        }
        if !(self.strike > 0.0) || !self.strike.is_finite() {
            return Err(ParameterError::InvalidStrike {
                strike: self.strike,
            });
        }
        if !self.rate.is_finite() {
            return Err(ParameterError::NonFiniteRate { rate: self.rate });
        }
        if !(self.volatility > 0.0) || !self.volatility.is_finite() {
            return Err(ParameterError::InvalidVolatility {
                volatility: self.volatility,
            });
        }
        if !(self.maturity > 0.0) || !self.maturity.is_finite() {
            return Err(ParameterError::InvalidMaturity {
                maturity: self.maturity,
            });
        }
        Ok(())
    }
}

/// Call and put prices produced by one pricing invocation.
///
/// # Examples
/// ```
/// use pricer_core::types::SimulationResult;
///
/// let result = SimulationResult::new(6.62, 6.90);
/// let (call, put) = result.into();
/// assert_eq!(call, 6.62);
/// assert_eq!(put, 6.90);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SimulationResult {
    /// European call price.
    pub call: f64,
    /// European put price.
    pub put: f64,
}

impl SimulationResult {
    /// Creates a result from call and put prices.
    #[inline]
    pub fn new(call: f64, put: f64) -> Self {
        Self { call, put }
    }

    /// Deviation from put-call parity: (C − P) − (S − K·e^(−rT)).
    #[inline]
    pub fn parity_error(&self, params: &OptionMarketParameters) -> f64 {
        (self.call - self.put) - params.parity_forward()
    }
}

impl From<SimulationResult> for (f64, f64) {
    #[inline]
    fn from(result: SimulationResult) -> Self {
        (result.call, result.put)
    }
}

impl From<(f64, f64)> for SimulationResult {
    #[inline]
    fn from((call, put): (f64, f64)) -> Self {
        Self { call, put }
    }
}
