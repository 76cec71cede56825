mod add_education;
mod delete_education;
mod list_education;
mod update_education;

pub use add_education::*;
pub use delete_education::*;
pub use list_education::*;
pub use update_education::*;
