//! mv-results: export documents and result presentation.

pub mod export;
pub mod hash;
pub mod report;
pub mod types;

pub use export::{build_export, build_export_at, read_export, to_json, write_export};
pub use hash::compute_calc_id;
pub use report::{Badge, BadgeStatus, ReportRow, render_rows, render_text, valve_badge};
pub use types::*;

pub type ResultsResult<T> = Result<T, ResultsError>;

#[derive(thiserror::Error, Debug)]
pub enum ResultsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Export not found: {path}")]
    ExportNotFound { path: String },
}
