use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::auth::application::ports::incoming::SessionProvider;
use crate::experience::application::ports::incoming::{AddExperienceUseCase, NewExperience};
use crate::experience::application::ports::outgoing::{
    CreateExperienceData, ExperienceRepository,
};
use crate::experience::domain::Experience;
use crate::shared::validation::{optional_text, require_text};
use crate::shared::{ContentError, COMMA};

pub struct AddExperienceService<R>
where
    R: ExperienceRepository,
{
    repository: R,
    sessions: Arc<dyn SessionProvider>,
}

impl<R> AddExperienceService<R>
where
    R: ExperienceRepository,
{
    pub fn new(repository: R, sessions: Arc<dyn SessionProvider>) -> Self {
        Self {
            repository,
            sessions,
        }
    }
}

#[async_trait]
impl<R> AddExperienceUseCase for AddExperienceService<R>
where
    R: ExperienceRepository + Send + Sync,
{
    async fn execute(&self, input: NewExperience) -> Result<Experience, ContentError> {
        let session = self.sessions.current_session().await?;

        let data = CreateExperienceData {
            owner: session.user.id,
            title: require_text("title", input.title)?,
            company: require_text("company", input.company)?,
            duration: require_text("duration", input.duration)?,
            description: optional_text(input.description),
            location: optional_text(input.location),
            achievements: input.achievements.into_list(COMMA),
            tech: input.tech.into_list(COMMA),
        };

        let experience = self.repository.create(data).await?;
        info!(experience_id = %experience.id, "Experience added");

        Ok(experience)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::ports::incoming::SessionError;
    use crate::experience::application::ports::outgoing::experience_repository::{
        ExperienceRepositoryError, MockExperienceRepository,
    };
    use crate::experience::application::service::test_fixtures::sample_experience;
    use crate::shared::ListInput;
    use crate::tests::support::stubs::StubSessionProvider;
    use uuid::Uuid;

    fn acme_input(tech: &str) -> NewExperience {
        NewExperience {
            title: "Engineer".to_string(),
            company: "Acme".to_string(),
            duration: "2022-2023".to_string(),
            tech: ListInput::from(tech),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_add_normalizes_tech_and_scopes_to_session_user() {
        let owner = Uuid::new_v4();
        let mut repository = MockExperienceRepository::new();
        repository
            .expect_create()
            .withf(move |data| {
                data.owner.value() == owner
                    && data.tech == vec!["Go".to_string(), "SQL".to_string()]
                    && data.achievements.is_empty()
                    && data.description.is_none()
            })
            .times(1)
            .returning(move |_| Ok(sample_experience(owner, &["Go", "SQL"])));

        let service =
            AddExperienceService::new(repository, Arc::new(StubSessionProvider::signed_in(owner)));
        let result = service.execute(acme_input("Go, SQL")).await.unwrap();

        assert_eq!(result.tech, vec!["Go", "SQL"]);
    }

    #[tokio::test]
    async fn test_add_without_session_never_reaches_backend() {
        let mut repository = MockExperienceRepository::new();
        repository.expect_create().times(0);

        let service =
            AddExperienceService::new(repository, Arc::new(StubSessionProvider::signed_out()));
        let result = service.execute(acme_input("Go")).await;

        assert_eq!(
            result.unwrap_err(),
            ContentError::Unauthenticated(SessionError::NotAuthenticated)
        );
    }

    #[tokio::test]
    async fn test_add_with_expired_session_fails_unauthenticated() {
        let mut repository = MockExperienceRepository::new();
        repository.expect_create().times(0);

        let service =
            AddExperienceService::new(repository, Arc::new(StubSessionProvider::expired()));
        let result = service.execute(acme_input("Go")).await;

        assert!(result.unwrap_err().is_unauthenticated());
    }

    #[tokio::test]
    async fn test_add_rejects_blank_company() {
        let mut repository = MockExperienceRepository::new();
        repository.expect_create().times(0);

        let service = AddExperienceService::new(
            repository,
            Arc::new(StubSessionProvider::signed_in(Uuid::new_v4())),
        );
        let mut input = acme_input("Go");
        input.company = "  ".to_string();

        let result = service.execute(input).await;

        assert_eq!(
            result.unwrap_err(),
            ContentError::Invalid("company cannot be empty".to_string())
        );
    }

    #[tokio::test]
    async fn test_add_surfaces_backend_error() {
        let mut repository = MockExperienceRepository::new();
        repository.expect_create().returning(|_| {
            Err(ExperienceRepositoryError::DatabaseError(
                "permission denied for table experiences".to_string(),
            ))
        });

        let service = AddExperienceService::new(
            repository,
            Arc::new(StubSessionProvider::signed_in(Uuid::new_v4())),
        );
        let result = service.execute(acme_input("Go")).await;

        assert!(matches!(result, Err(ContentError::Backend(msg)) if msg.contains("permission denied")));
    }
}
