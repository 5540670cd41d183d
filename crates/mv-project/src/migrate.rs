//! Schema migration framework.
//!
//! Version 1 is the snapshot the browser calculator kept in local storage: a
//! flat object keyed by worksheet cell (`B3_length_m`, ...) with no `version`
//! field. Version 2 nests canonical field names under `inputs`.

use mv_core::number_or;
use mv_sizing::{InputField, SizingInputs};
use serde_json::{Map, Value};

use crate::ProjectError;
use crate::schema::InputsFile;

pub const LATEST_VERSION: u32 = 2;

pub fn migrate_to_latest(mut doc: Value) -> Result<InputsFile, ProjectError> {
    if !doc.is_object() {
        return Err(ProjectError::Migration {
            what: "Inputs document must be an object".to_string(),
        });
    }

    let mut version = document_version(&doc)?;
    while version < LATEST_VERSION {
        doc = migrate_one_version(version, doc)?;
        version = document_version(&doc)?;
    }

    Ok(serde_json::from_value(doc)?)
}

fn document_version(doc: &Value) -> Result<u32, ProjectError> {
    match doc.get("version") {
        None => Ok(1),
        Some(v) => v
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .ok_or_else(|| ProjectError::Migration {
                what: format!("Invalid version field: {}", v),
            }),
    }
}

fn migrate_one_version(version: u32, doc: Value) -> Result<Value, ProjectError> {
    match version {
        1 => migrate_v1_to_v2(doc),
        v => Err(ProjectError::Migration {
            what: format!("No migration path from version {}", v),
        }),
    }
}

fn migrate_v1_to_v2(doc: Value) -> Result<Value, ProjectError> {
    let legacy = match doc {
        Value::Object(map) => map,
        _ => Map::new(),
    };

    let inputs = inputs_from_legacy(&legacy, &SizingInputs::default());

    Ok(serde_json::to_value(InputsFile {
        version: 2,
        name: None,
        inputs,
    })?)
}

/// Read a snapshot value the way the browser form did: numbers as-is,
/// numeric strings parsed, anything else replaced by `fallback`.
fn legacy_number(value: Option<&Value>, fallback: f64) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(fallback),
        Some(Value::String(s)) => number_or(Some(s.as_str()), fallback),
        _ => fallback,
    }
}

/// Field-by-field view of a legacy snapshot, for callers that already hold one.
pub fn inputs_from_legacy(map: &Map<String, Value>, base: &SizingInputs) -> SizingInputs {
    SizingInputs::from_fields(|field: InputField| {
        legacy_number(map.get(field.legacy_key()), field.get(base))
    })
}
