//! mv-project: saved calculator inputs, legacy snapshot migration and share links.

pub mod migrate;
pub mod schema;
pub mod share;
pub mod store;
pub mod validate;

pub use migrate::{LATEST_VERSION, migrate_to_latest};
pub use schema::*;
pub use share::{apply_query, encode_query, parse_query, share_url};
pub use store::{DEFAULT_STATE_FILE, FileInputStore, InputStore, MemoryInputStore};
pub use validate::{ValidationError, validate_inputs_file};

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Migration error: {what}")]
    Migration { what: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Parse an inputs document, accepting current files and legacy snapshots.
pub fn parse_json(content: &str) -> ProjectResult<InputsFile> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    let file = migrate_to_latest(value)?;
    validate_inputs_file(&file)?;
    Ok(file)
}

pub fn load_json(path: &std::path::Path) -> ProjectResult<InputsFile> {
    let content = std::fs::read_to_string(path)?;
    parse_json(&content)
}

pub fn save_json(path: &std::path::Path, file: &InputsFile) -> ProjectResult<()> {
    validate_inputs_file(file)?;
    let content = serde_json::to_string_pretty(file)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_yaml(path: &std::path::Path) -> ProjectResult<InputsFile> {
    let content = std::fs::read_to_string(path)?;
    let value: serde_yaml::Value = serde_yaml::from_str(&content)?;
    let file = migrate_to_latest(serde_json::to_value(value)?)?;
    validate_inputs_file(&file)?;
    Ok(file)
}

pub fn save_yaml(path: &std::path::Path, file: &InputsFile) -> ProjectResult<()> {
    validate_inputs_file(file)?;
    let content = serde_yaml::to_string(file)?;
    std::fs::write(path, content)?;
    Ok(())
}
