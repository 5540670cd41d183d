//! mv-sizing: deluge (medium velocity water spray) sizing for conveyor installations.
//!
//! A single stateless pass turns belt geometry, nozzle layout and working
//! pressure into flow, nozzle count, LHS cable length, nozzle K-factor and
//! deluge valve size. See [`compute`].

pub mod calculator;
pub mod catalog;
pub mod constants;
pub mod inputs;
pub mod results;

pub use calculator::{NormalizedInputs, compute, compute_with_defaults, normalize};
pub use catalog::{DelugeValve, K_FACTORS, K_FACTOR_OVERFLOW, k_bucket, select_deluge_valve};
pub use inputs::{InputField, SizingInputs};
pub use results::SizingResults;
