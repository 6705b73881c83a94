//! Error types for finite-difference pricing.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Finite-difference solver errors.
///
/// # Examples
/// ```
/// use pricer_models::pde::FdError;
///
/// let err = FdError::InvalidGrid { time_steps: 0, space_steps: 10 };
/// assert!(err.to_string().contains("time_steps = 0"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FdError {
    /// Grid needs at least one time step and two spatial intervals.
    #[error("Invalid grid: time_steps = {time_steps}, space_steps = {space_steps}")]
    InvalidGrid {
        /// Requested number of time steps
        time_steps: usize,
        /// Requested number of spatial intervals
        space_steps: usize,
    },

    /// The price surface would exceed the solver's node cap.
    #[error(
        "Grid too large: ({space_steps} + 1) x ({time_steps} + 1) nodes exceeds {max_nodes}"
    )]
    GridTooLarge {
        /// Requested number of time steps
        time_steps: usize,
        /// Requested number of spatial intervals
        space_steps: usize,
        /// Node cap the request was checked against
        max_nodes: usize,
    },

    /// The explicit scheme's diagonal coefficient went negative.
    #[error(
        "Unstable time step: diagonal coefficient {coefficient} < 0 at node {node}; \
         use at most {max_space_steps} spatial intervals"
    )]
    UnstableTimeStep {
        /// Offending diagonal coefficient 1 − r·dt − i²σ²dt
        coefficient: f64,
        /// Spatial node index where it was evaluated
        node: usize,
        /// Largest stable spatial resolution for this time grid
        max_space_steps: usize,
    },
}

impl From<FdError> for PricingError {
    fn from(err: FdError) -> Self {
        match err {
            FdError::InvalidGrid { .. } | FdError::GridTooLarge { .. } => {
                PricingError::InvalidInput(err.to_string())
            }
            FdError::UnstableTimeStep { .. } => PricingError::NumericalInstability(err.to_string()),
        }
    }
}
