//! Resolving calculator inputs from their sources.
//!
//! Precedence, lowest first: defaults, saved inputs, share-link query,
//! explicit overrides.

use mv_core::parse_number;
use mv_project::{InputStore, apply_query};
use mv_sizing::{InputField, SizingInputs};
use tracing::{debug, warn};

use crate::error::{AppError, AppResult};

/// Build the inputs a session starts from.
///
/// Saved inputs that cannot be read are reported and skipped; the
/// calculation always gets a usable set of inputs.
pub fn resolve_inputs(
    store: &dyn InputStore,
    query: Option<&str>,
    overrides: &[(InputField, f64)],
) -> SizingInputs {
    let mut inputs = match store.load() {
        Ok(Some(saved)) => {
            debug!("using saved inputs");
            saved
        }
        Ok(None) => {
            debug!("no saved inputs, using defaults");
            SizingInputs::default()
        }
        Err(err) => {
            warn!(error = %err, "saved inputs unreadable, using defaults");
            SizingInputs::default()
        }
    };

    if let Some(query) = query {
        inputs = apply_query(&inputs, query);
        debug!(query, "applied share link parameters");
    }

    apply_overrides(&inputs, overrides)
}

/// Apply explicit field values; non-finite values are skipped.
pub fn apply_overrides(base: &SizingInputs, overrides: &[(InputField, f64)]) -> SizingInputs {
    let mut inputs = *base;
    for &(field, value) in overrides {
        if value.is_finite() {
            field.set(&mut inputs, value);
        } else {
            warn!(field = field.key(), value, "ignoring non-finite override");
        }
    }
    inputs
}

/// Parse `key=value`, where key is a field key or legacy key.
pub fn parse_override(spec: &str) -> AppResult<(InputField, f64)> {
    let (key, value) = spec
        .split_once('=')
        .ok_or_else(|| AppError::InvalidInput(format!("expected KEY=VALUE, got '{}'", spec)))?;
    let field = InputField::from_key(key.trim())
        .ok_or_else(|| AppError::InvalidInput(format!("unknown input '{}'", key.trim())))?;
    Ok((field, parse_number(value)?))
}

/// Parse `KEY=VALUE` entries; malformed ones are reported and skipped.
pub fn parse_overrides<T: AsRef<str>>(specs: &[T]) -> Vec<(InputField, f64)> {
    specs
        .iter()
        .filter_map(|spec| match parse_override(spec.as_ref()) {
            Ok(pair) => Some(pair),
            Err(err) => {
                warn!(error = %err, "ignoring input override");
                None
            }
        })
        .collect()
}

/// Forget the saved inputs and return the defaults.
pub fn reset_inputs(store: &mut dyn InputStore) -> AppResult<SizingInputs> {
    store.clear()?;
    debug!("saved inputs cleared");
    Ok(SizingInputs::default())
}
