//! Trait for engines that price a European call/put pair.

use crate::types::{OptionMarketParameters, PricingError, SimulationResult};

/// An engine producing European call and put prices for a parameter set.
///
/// # Contract
///
/// - Parameters are taken by reference and never mutated.
/// - Engines do not validate market parameters: degenerate inputs propagate
///   as `NaN`/`Inf` in the result. Errors are reserved for engine settings
///   (sample counts, grids, thread pools).
///
/// # Examples
///
/// ```
/// use pricer_core::traits::EuropeanPricer;
/// use pricer_core::types::{OptionMarketParameters, PricingError, SimulationResult};
///
/// struct Intrinsic;
///
/// impl EuropeanPricer for Intrinsic {
///     fn price(&self, p: &OptionMarketParameters) -> Result<SimulationResult, PricingError> {
///         Ok(SimulationResult::new(
///             (p.spot - p.strike).max(0.0),
///             (p.strike - p.spot).max(0.0),
///         ))
///     }
/// }
///
/// let result = Intrinsic.price(&OptionMarketParameters::default()).unwrap();
/// assert_eq!(result.put, 5.0);
/// ```
pub trait EuropeanPricer {
    /// Prices the call and put for `params`.
    fn price(&self, params: &OptionMarketParameters) -> Result<SimulationResult, PricingError>;
}
