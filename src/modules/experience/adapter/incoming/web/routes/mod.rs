mod add_experience;
mod delete_experience;
mod list_experiences;
mod update_experience;

pub use add_experience::*;
pub use delete_experience::*;
pub use list_experiences::*;
pub use update_experience::*;
