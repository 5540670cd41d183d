//! Export API.

use std::fs;
use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use mv_sizing::{SizingInputs, compute};

use crate::hash::compute_calc_id;
use crate::types::ExportDocument;
use crate::{ResultsError, ResultsResult};

/// Compute `inputs` and wrap them in an export stamped with the current time.
pub fn build_export(inputs: &SizingInputs, tool_version: &str) -> ExportDocument {
    build_export_at(inputs, tool_version, Utc::now())
}

pub fn build_export_at(
    inputs: &SizingInputs,
    tool_version: &str,
    generated_at: DateTime<Utc>,
) -> ExportDocument {
    ExportDocument {
        calc_id: compute_calc_id(inputs, tool_version),
        generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        tool_version: tool_version.to_string(),
        inputs: *inputs,
        results: compute(inputs),
    }
}

pub fn to_json(doc: &ExportDocument) -> ResultsResult<String> {
    Ok(serde_json::to_string_pretty(doc)?)
}

pub fn write_export(path: &Path, doc: &ExportDocument) -> ResultsResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, to_json(doc)?)?;
    Ok(())
}

pub fn read_export(path: &Path) -> ResultsResult<ExportDocument> {
    if !path.exists() {
        return Err(ResultsError::ExportNotFound {
            path: path.display().to_string(),
        });
    }

    let content = fs::read_to_string(path)?;
    let doc = serde_json::from_str(&content)?;
    Ok(doc)
}
