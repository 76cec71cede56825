// src/shared/patch_field.rs
use serde::{Deserialize, Serialize};

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit PATCH semantics)
// ──────────────────────────────────────────────────────────
// - Unset: field not provided => keep stored value
// - Null: explicitly null => clear the column (nullable fields only)
// - Value(v): replace with v
//
// Request DTOs put #[serde(default)] on every PatchField so an omitted
// field deserializes as Unset.
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

/// `None` clears, `Some` replaces.
impl<T> From<Option<T>> for PatchField<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => PatchField::Value(v),
            None => PatchField::Null,
        }
    }
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }

    pub fn as_value(&self) -> Option<&T> {
        if let PatchField::Value(v) = self {
            Some(v)
        } else {
            None
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> PatchField<U> {
        match self {
            PatchField::Unset => PatchField::Unset,
            PatchField::Null => PatchField::Null,
            PatchField::Value(v) => PatchField::Value(f(v)),
        }
    }

    /// Fallible `map`, for normalizing or validating the carried value.
    pub fn try_map<U, E>(self, f: impl FnOnce(T) -> Result<U, E>) -> Result<PatchField<U>, E> {
        Ok(match self {
            PatchField::Unset => PatchField::Unset,
            PatchField::Null => PatchField::Null,
            PatchField::Value(v) => PatchField::Value(f(v)?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Payload {
        #[serde(default)]
        location: PatchField<String>,
    }

    #[test]
    fn test_omitted_field_is_unset() {
        let payload: Payload = serde_json::from_str("{}").unwrap();
        assert!(payload.location.is_unset());
    }

    #[test]
    fn test_null_and_value() {
        let payload: Payload = serde_json::from_str(r#"{"location":null}"#).unwrap();
        assert_eq!(payload.location, PatchField::Null);

        let payload: Payload = serde_json::from_str(r#"{"location":"Remote"}"#).unwrap();
        assert_eq!(payload.location.as_value().map(String::as_str), Some("Remote"));
    }

    #[test]
    fn test_map_keeps_variant() {
        assert_eq!(PatchField::<i32>::Unset.map(|v| v + 1), PatchField::Unset);
        assert_eq!(PatchField::<i32>::Null.map(|v| v + 1), PatchField::Null);
        assert_eq!(PatchField::Value(1).map(|v| v + 1), PatchField::Value(2));
    }

    #[test]
    fn test_from_option() {
        assert_eq!(PatchField::from(Some(3)), PatchField::Value(3));
        assert_eq!(PatchField::<i32>::from(None), PatchField::Null);
    }

    #[test]
    fn test_try_map_propagates_error() {
        let result: Result<PatchField<i32>, String> =
            PatchField::Value(-1).try_map(|v| if v < 0 { Err("negative".to_string()) } else { Ok(v) });
        assert_eq!(result.unwrap_err(), "negative");
    }
}
