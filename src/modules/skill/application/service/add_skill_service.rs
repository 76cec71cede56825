use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use super::validate_level;
use crate::auth::application::ports::incoming::SessionProvider;
use crate::shared::validation::require_text;
use crate::shared::ContentError;
use crate::skill::application::ports::incoming::{AddSkillUseCase, NewSkill};
use crate::skill::application::ports::outgoing::{CreateSkillData, SkillRepository};
use crate::skill::domain::Skill;

pub struct AddSkillService<R>
where
    R: SkillRepository,
{
    repository: R,
    sessions: Arc<dyn SessionProvider>,
}

impl<R> AddSkillService<R>
where
    R: SkillRepository,
{
    pub fn new(repository: R, sessions: Arc<dyn SessionProvider>) -> Self {
        Self {
            repository,
            sessions,
        }
    }
}

#[async_trait]
impl<R> AddSkillUseCase for AddSkillService<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn execute(&self, input: NewSkill) -> Result<Skill, ContentError> {
        let session = self.sessions.current_session().await?;

        let data = CreateSkillData {
            owner: session.user.id,
            name: require_text("name", input.name)?,
            level: validate_level(input.level)?,
            category: input.category,
        };

        let skill = self.repository.create(data).await?;
        info!(skill_id = %skill.id, category = %skill.category, "Skill added");

        Ok(skill)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skill::application::ports::outgoing::skill_repository::MockSkillRepository;
    use crate::skill::application::service::test_fixtures::sample_skill;
    use crate::skill::domain::SkillCategory;
    use crate::tests::support::stubs::StubSessionProvider;
    use uuid::Uuid;

    fn rust_skill(level: i32) -> NewSkill {
        NewSkill {
            name: " Rust ".to_string(),
            level,
            category: SkillCategory::Language,
        }
    }

    #[tokio::test]
    async fn test_add_trims_name_and_keeps_category() {
        let owner = Uuid::new_v4();
        let mut repository = MockSkillRepository::new();
        repository
            .expect_create()
            .withf(move |data| {
                data.owner.value() == owner
                    && data.name == "Rust"
                    && data.level == 90
                    && data.category == SkillCategory::Language
            })
            .times(1)
            .returning(move |_| Ok(sample_skill(owner, "Rust", 90)));

        let service =
            AddSkillService::new(repository, Arc::new(StubSessionProvider::signed_in(owner)));

        assert_eq!(service.execute(rust_skill(90)).await.unwrap().level, 90);
    }

    #[tokio::test]
    async fn test_level_out_of_range_is_rejected() {
        let mut repository = MockSkillRepository::new();
        repository.expect_create().times(0);

        let service = AddSkillService::new(
            repository,
            Arc::new(StubSessionProvider::signed_in(Uuid::new_v4())),
        );

        let result = service.execute(rust_skill(150)).await;

        assert!(matches!(result, Err(ContentError::Invalid(_))));
    }

    #[tokio::test]
    async fn test_add_without_session_never_reaches_backend() {
        let mut repository = MockSkillRepository::new();
        repository.expect_create().times(0);

        let service =
            AddSkillService::new(repository, Arc::new(StubSessionProvider::signed_out()));

        assert!(service
            .execute(rust_skill(50))
            .await
            .unwrap_err()
            .is_unauthenticated());
    }
}
