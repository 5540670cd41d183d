//! Writing a calculation out as a JSON document.

use std::path::Path;

use mv_results::{ExportDocument, build_export, write_export};
use mv_sizing::SizingInputs;
use tracing::info;

use crate::error::{AppError, AppResult};

/// Version stamped into exports and mixed into their calculation id.
pub const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Compute `inputs` and write the export document to `path`.
pub fn export_calculation(path: &Path, inputs: &SizingInputs) -> AppResult<ExportDocument> {
    let doc = build_export(inputs, TOOL_VERSION);
    write_export(path, &doc).map_err(|e| AppError::ExportWrite {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    info!(path = %path.display(), calc_id = %doc.calc_id, "exported calculation");
    Ok(doc)
}
