//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands build a
//! serialisable report, then render it as a table or JSON.

pub mod analytic;
pub mod check;
pub mod pde;
pub mod price;
