//! Preset validation helpers.
//!
//! A preset is a saved configuration of effect-unit parameters for the
//! looper. Parameters travel as a JSON object; we validate shape and
//! limits here so handlers and repositories can trust the value.

use crate::error::CoreError;

/* --------------------------------------------------------------------------
   Validation limits
   -------------------------------------------------------------------------- */

/// Maximum length for a preset title.
pub const MAX_TITLE_LEN: usize = 200;

/// Maximum length for a preset description.
pub const MAX_DESCRIPTION_LEN: usize = 5000;

/// Maximum number of effect parameters in one preset.
pub const MAX_PARAMETERS: usize = 128;

/// Maximum length for a comment body.
pub const MAX_COMMENT_LEN: usize = 2000;

/* --------------------------------------------------------------------------
   Validation functions
   -------------------------------------------------------------------------- */

/// Validate a preset title: non-empty and within length limit.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation(
            "Preset title must not be empty".to_string(),
        ));
    }
    if title.len() > MAX_TITLE_LEN {
        return Err(CoreError::Validation(format!(
            "Preset title too long: {} chars (max {MAX_TITLE_LEN})",
            title.len()
        )));
    }
    Ok(())
}

/// Validate an optional description length.
pub fn validate_description(description: Option<&str>) -> Result<(), CoreError> {
    if let Some(desc) = description {
        if desc.len() > MAX_DESCRIPTION_LEN {
            return Err(CoreError::Validation(format!(
                "Description too long: {} chars (max {MAX_DESCRIPTION_LEN})",
                desc.len()
            )));
        }
    }
    Ok(())
}

/// Validate the effect parameter map.
///
/// Must be a JSON object whose values are scalars (numbers, strings,
/// booleans) -- nested structures are not meaningful to the device.
pub fn validate_parameters(parameters: &serde_json::Value) -> Result<(), CoreError> {
    let map = parameters.as_object().ok_or_else(|| {
        CoreError::Validation("Preset parameters must be a JSON object".to_string())
    })?;
    if map.len() > MAX_PARAMETERS {
        return Err(CoreError::Validation(format!(
            "Too many parameters: {} (max {MAX_PARAMETERS})",
            map.len()
        )));
    }
    for (key, value) in map {
        if value.is_object() || value.is_array() {
            return Err(CoreError::Validation(format!(
                "Parameter '{key}' must be a scalar value"
            )));
        }
    }
    Ok(())
}

/// Validate a comment body: non-empty and within length limit.
pub fn validate_comment_body(body: &str) -> Result<(), CoreError> {
    if body.trim().is_empty() {
        return Err(CoreError::Validation(
            "Comment body must not be empty".to_string(),
        ));
    }
    if body.len() > MAX_COMMENT_LEN {
        return Err(CoreError::Validation(format!(
            "Comment too long: {} chars (max {MAX_COMMENT_LEN})",
            body.len()
        )));
    }
    Ok(())
}
