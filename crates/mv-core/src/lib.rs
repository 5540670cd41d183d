//! mv-core: shared foundation for the MVWS conveyor sizing tools.
//!
//! Contains:
//! - units (uom SI types + constructors)
//! - numeric (Real + tolerances + rounding and parsing helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{MvError, MvResult};
pub use numeric::*;
pub use units::*;
