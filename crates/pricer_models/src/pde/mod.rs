//! Finite-difference solvers for the Black-Scholes PDE.
//!
//! ```text
//! ∂V/∂τ = ½σ²S² ∂²V/∂S² + rS ∂V/∂S − rV,   τ = time to maturity
//! ```
//!
//! The explicit scheme marches forward in τ from the payoff at expiry. It is
//! conditionally stable; [`max_stable_space_steps`] picks the finest spatial
//! grid the time step allows.

pub mod error;
pub mod explicit_fd;

pub use error::FdError;
pub use explicit_fd::{max_stable_space_steps, ExplicitFdSolver, FdGrid, MAX_GRID_NODES};
