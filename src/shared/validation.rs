// src/shared/validation.rs
use crate::shared::{ContentError, PatchField};

/// Trims a required text field, rejecting it when nothing is left.
pub fn require_text(field: &str, value: String) -> Result<String, ContentError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ContentError::Invalid(format!("{} cannot be empty", field)));
    }
    Ok(trimmed.to_string())
}

/// Optional text: blank collapses to `None`.
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// A required field may be replaced but never cleared.
pub fn require_patch<T>(field: &str, patch: PatchField<T>) -> Result<PatchField<T>, ContentError> {
    match patch {
        PatchField::Null => Err(ContentError::Invalid(format!("{} cannot be null", field))),
        other => Ok(other),
    }
}

pub fn require_patch_text(
    field: &str,
    patch: PatchField<String>,
) -> Result<PatchField<String>, ContentError> {
    require_patch(field, patch)?.try_map(|v| require_text(field, v))
}

/// Nullable text: a blank value clears the column.
pub fn optional_patch_text(patch: PatchField<String>) -> PatchField<String> {
    match patch {
        PatchField::Value(v) if v.trim().is_empty() => PatchField::Null,
        other => other.map(|v| v.trim().to_string()),
    }
}
