//! Export data types.

use mv_sizing::{SizingInputs, SizingResults};
use serde::{Deserialize, Serialize};

/// File name offered for a downloaded calculation.
pub const EXPORT_FILE_NAME: &str = "mvws-conveyor-calc.json";

/// A calculation written out for sharing or archiving.
///
/// Results keep full precision; display rounding never reaches this document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub calc_id: String,
    pub generated_at: String,
    pub tool_version: String,
    pub inputs: SizingInputs,
    pub results: SizingResults,
}
