//! Inputs file validation logic.

use mv_sizing::InputField;

use crate::schema::InputsFile;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

/// Check a document before it is trusted or written.
///
/// Out-of-range numbers are left alone (the calculator clamps them); only
/// values that cannot round-trip through JSON are rejected.
pub fn validate_inputs_file(file: &InputsFile) -> Result<(), ValidationError> {
    if file.version > crate::migrate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: file.version,
        });
    }

    for field in InputField::ALL {
        let value = field.get(&file.inputs);
        if !value.is_finite() {
            return Err(ValidationError::InvalidValue {
                field: field.key().to_string(),
                value: value.to_string(),
                reason: "must be a finite number".to_string(),
            });
        }
    }

    Ok(())
}
