mod add_skill;
mod delete_skill;
mod list_skills;
mod update_skill;

pub use add_skill::*;
pub use delete_skill::*;
pub use list_skills::*;
pub use update_skill::*;
