//! Shared application service layer for the MVWS conveyor sizing tools.
//!
//! Frontends (the CLI today) go through this crate to resolve inputs from
//! their sources, drive the calculate-and-render pipeline, and export results.

pub mod error;
pub mod export_service;
pub mod input_service;
pub mod session;

// Re-export key types for convenience
pub use error::{AppError, AppResult};
pub use export_service::{TOOL_VERSION, export_calculation};
pub use input_service::{
    apply_overrides, parse_override, parse_overrides, reset_inputs, resolve_inputs,
};
pub use session::{SizingSession, Snapshot};
