pub mod api;
pub mod content_error;
pub mod list_field;
pub mod patch_field;
pub mod validation;

pub use content_error::ContentError;
pub use list_field::{join_list, normalize_list, normalize_patch, ListInput, COMMA, SLASH};
pub use patch_field::PatchField;
