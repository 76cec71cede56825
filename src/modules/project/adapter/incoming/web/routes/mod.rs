mod add_project;
mod delete_project;
mod list_projects;
mod update_project;

pub use add_project::*;
pub use delete_project::*;
pub use list_projects::*;
pub use update_project::*;
