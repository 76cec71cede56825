use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use super::validate_level;
use crate::auth::application::ports::incoming::SessionProvider;
use crate::shared::validation::{require_patch, require_patch_text};
use crate::shared::ContentError;
use crate::skill::application::ports::incoming::{SkillChanges, UpdateSkillUseCase};
use crate::skill::application::ports::outgoing::{PatchSkillData, SkillRepository};
use crate::skill::domain::Skill;

pub struct UpdateSkillService<R>
where
    R: SkillRepository,
{
    repository: R,
    sessions: Arc<dyn SessionProvider>,
}

impl<R> UpdateSkillService<R>
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
impl<R> UpdateSkillUseCase for UpdateSkillService<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid, changes: SkillChanges) -> Result<Skill, ContentError> {
        let session = self.sessions.current_session().await?;

        let patch = PatchSkillData {
            name: require_patch_text("name", changes.name)?,
            level: require_patch("level", changes.level)?.try_map(validate_level)?,
            category: require_patch("category", changes.category)?,
        };

        let skill = self.repository.patch(session.user.id, id, patch).await?;
        info!(skill_id = %skill.id, "Skill updated");

        Ok(skill)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skill::application::ports::outgoing::skill_repository::{
        MockSkillRepository, SkillRepositoryError,
    };
    use crate::skill::application::service::test_fixtures::sample_skill;
    use crate::skill::domain::SkillCategory;
    use crate::shared::PatchField;
    use crate::tests::support::stubs::StubSessionProvider;

    #[tokio::test]
    async fn test_update_level_only() {
        let owner = Uuid::new_v4();
        let id = Uuid::new_v4();
        let mut repository = MockSkillRepository::new();
        repository
            .expect_patch()
            .withf(move |o, i, patch| {
                o.value() == owner
                    && *i == id
                    && patch.level == PatchField::Value(95)
                    && patch.name.is_unset()
                    && patch.category.is_unset()
            })
            .times(1)
            .returning(move |_, _, _| Ok(sample_skill(owner, "Rust", 95)));

        let service =
            UpdateSkillService::new(repository, Arc::new(StubSessionProvider::signed_in(owner)));
        let changes = SkillChanges {
            level: PatchField::Value(95),
            ..Default::default()
        };

        assert_eq!(service.execute(id, changes).await.unwrap().level, 95);
    }

    #[tokio::test]
    async fn test_update_rejects_invalid_level_and_null_category() {
        let mut repository = MockSkillRepository::new();
        repository.expect_patch().times(0);

        let service = UpdateSkillService::new(
            repository,
            Arc::new(StubSessionProvider::signed_in(Uuid::new_v4())),
        );

        let too_high = SkillChanges {
            level: PatchField::Value(101),
            ..Default::default()
        };
        assert!(matches!(
            service.execute(Uuid::new_v4(), too_high).await,
            Err(ContentError::Invalid(_))
        ));

        let cleared = SkillChanges {
            category: PatchField::Null,
            ..Default::default()
        };
        assert_eq!(
            service.execute(Uuid::new_v4(), cleared).await.unwrap_err(),
            ContentError::Invalid("category cannot be null".to_string())
        );
    }

    #[tokio::test]
    async fn test_update_of_unowned_row_is_not_found() {
        let mut repository = MockSkillRepository::new();
        repository
            .expect_patch()
            .returning(|_, _, _| Err(SkillRepositoryError::NotFound));

        let service = UpdateSkillService::new(
            repository,
            Arc::new(StubSessionProvider::signed_in(Uuid::new_v4())),
        );
        let changes = SkillChanges {
            category: PatchField::Value(SkillCategory::Framework),
            ..Default::default()
        };

        assert_eq!(
            service.execute(Uuid::new_v4(), changes).await.unwrap_err(),
            ContentError::NotFound
        );
    }
}
