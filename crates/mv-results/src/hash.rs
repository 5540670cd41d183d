//! Content-based hashing for calculation IDs.

use mv_sizing::SizingInputs;
use sha2::{Digest, Sha256};

pub fn compute_calc_id(inputs: &SizingInputs, tool_version: &str) -> String {
    let mut hasher = Sha256::new();

    let inputs_json = serde_json::to_string(inputs).unwrap_or_default();
    hasher.update(inputs_json.as_bytes());

    hasher.update(tool_version.as_bytes());

    let result = hasher.finalize();
    format!("{:x}", result)
}
