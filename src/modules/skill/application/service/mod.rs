mod add_skill_service;
mod delete_skill_service;
mod list_skills_service;
mod update_skill_service;

pub use add_skill_service::AddSkillService;
pub use delete_skill_service::DeleteSkillService;
pub use list_skills_service::ListSkillsService;
pub use update_skill_service::UpdateSkillService;

use crate::shared::ContentError;
use crate::skill::domain::entities::{MAX_SKILL_LEVEL, MIN_SKILL_LEVEL};

fn validate_level(level: i32) -> Result<i32, ContentError> {
    if !(MIN_SKILL_LEVEL..=MAX_SKILL_LEVEL).contains(&level) {
        return Err(ContentError::Invalid(format!(
            "level must be between {} and {}",
            MIN_SKILL_LEVEL, MAX_SKILL_LEVEL
        )));
    }
    Ok(level)
}

#[cfg(test)]
pub(crate) mod test_fixtures {
    use chrono::Utc;
    use uuid::Uuid;

    use crate::auth::domain::entities::UserId;
    use crate::skill::domain::{Skill, SkillCategory};

    pub fn sample_skill(owner: Uuid, name: &str, level: i32) -> Skill {
        let now = Utc::now();
        Skill {
            id: Uuid::new_v4(),
            user_id: UserId::from(owner),
            name: name.to_string(),
            level,
            category: SkillCategory::Language,
            created_at: now,
            updated_at: now,
        }
    }
}
