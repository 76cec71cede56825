// src/shared/list_field.rs
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::PatchField;

/// Delimiter for achievements and tech lists.
pub const COMMA: char = ',';

/// Delimiter for profile role titles.
pub const SLASH: char = '/';

/// A multi-valued field as it arrives at a boundary: either an already split
/// list or the delimited display string typed into a form.
///
/// Serde picks the variant from the JSON shape, so both `["Go", "SQL"]` and
/// `"Go, SQL"` are accepted by request DTOs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum ListInput {
    List(Vec<String>),
    Delimited(String),
}

impl ListInput {
    pub fn into_list(self, delimiter: char) -> Vec<String> {
        normalize_list(self, delimiter)
    }
}

impl Default for ListInput {
    fn default() -> Self {
        ListInput::List(Vec::new())
    }
}

impl From<Vec<String>> for ListInput {
    fn from(values: Vec<String>) -> Self {
        ListInput::List(values)
    }
}

impl From<&str> for ListInput {
    fn from(value: &str) -> Self {
        ListInput::Delimited(value.to_string())
    }
}

impl From<String> for ListInput {
    fn from(value: String) -> Self {
        ListInput::Delimited(value)
    }
}

/// Normalizes a multi-valued field to the list that gets persisted.
///
/// - `List` passes through untouched.
/// - `Delimited` is split on `delimiter`, every piece trimmed, empty pieces
///   dropped, order kept.
pub fn normalize_list(input: ListInput, delimiter: char) -> Vec<String> {
    match input {
        ListInput::List(values) => values,
        ListInput::Delimited(raw) => raw
            .split(delimiter)
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .map(str::to_string)
            .collect(),
    }
}

/// Normalizes a list field of a PATCH body. An explicit null empties the list.
pub fn normalize_patch(patch: PatchField<ListInput>, delimiter: char) -> PatchField<Vec<String>> {
    match patch {
        PatchField::Unset => PatchField::Unset,
        PatchField::Null => PatchField::Value(Vec::new()),
        PatchField::Value(input) => PatchField::Value(normalize_list(input, delimiter)),
    }
}

/// Renders a stored list back into its form display string.
pub fn join_list(values: &[String], delimiter: char) -> String {
    let separator = match delimiter {
        SLASH => " / ".to_string(),
        other => format!("{} ", other),
    };
    values.join(&separator)
}
