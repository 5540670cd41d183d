//! Saved inputs document.

use mv_sizing::SizingInputs;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InputsFile {
    pub version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub inputs: SizingInputs,
}

impl InputsFile {
    pub fn new(inputs: SizingInputs) -> Self {
        Self {
            version: crate::migrate::LATEST_VERSION,
            name: None,
            inputs,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}
