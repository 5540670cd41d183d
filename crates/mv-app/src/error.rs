//! Error types for the mv-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates
/// and gives every frontend one error interface.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Saved inputs error: {0}")]
    Project(String),

    #[error("Failed to write export file: {path}")]
    ExportWrite { path: PathBuf, message: String },

    #[error("Results error: {0}")]
    Results(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for mv-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<mv_project::ProjectError> for AppError {
    fn from(err: mv_project::ProjectError) -> Self {
        AppError::Project(err.to_string())
    }
}

impl From<mv_results::ResultsError> for AppError {
    fn from(err: mv_results::ResultsError) -> Self {
        AppError::Results(err.to_string())
    }
}

impl From<mv_core::MvError> for AppError {
    fn from(err: mv_core::MvError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}
