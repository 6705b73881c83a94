//! Core traits shared by the pricing engines.
//!
//! All engines are used through static dispatch; the trait only fixes the
//! shape of the call so that analytic, PDE and Monte Carlo prices can be
//! compared side by side.

pub mod priceable;

pub use priceable::EuropeanPricer;
