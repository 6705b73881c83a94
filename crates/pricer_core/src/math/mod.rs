//! Numerical building blocks shared by the pricing engines.
//!
//! - [`distributions`]: standard normal CDF, PDF and quantile

pub mod distributions;
