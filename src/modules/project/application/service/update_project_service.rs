use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::auth::application::ports::incoming::SessionProvider;
use crate::project::application::ports::incoming::{ProjectChanges, UpdateProjectUseCase};
use crate::project::application::ports::outgoing::{PatchProjectData, ProjectRepository};
use crate::project::domain::Project;
use crate::shared::validation::{optional_patch_text, require_patch_text};
use crate::shared::{normalize_patch, ContentError, COMMA};

pub struct UpdateProjectService<R>
where
    R: ProjectRepository,
{
    repository: R,
    sessions: Arc<dyn SessionProvider>,
}

impl<R> UpdateProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(repository: R, sessions: Arc<dyn SessionProvider>) -> Self {
        Self {
            repository,
            sessions,
        }
    }
}

#[async_trait]
impl<R> UpdateProjectUseCase for UpdateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid, changes: ProjectChanges) -> Result<Project, ContentError> {
        let session = self.sessions.current_session().await?;

        let patch = PatchProjectData {
            title: require_patch_text("title", changes.title)?,
            description: require_patch_text("description", changes.description)?,
            tech: normalize_patch(changes.tech, COMMA),
            github: optional_patch_text(changes.github),
            demo: optional_patch_text(changes.demo),
        };

        let project = self.repository.patch(session.user.id, id, patch).await?;
        info!(project_id = %project.id, "Project updated");

        Ok(project)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::application::ports::outgoing::project_repository::{
        MockProjectRepository, ProjectRepositoryError,
    };
    use crate::project::application::service::test_fixtures::sample_project;
    use crate::shared::{ListInput, PatchField};
    use crate::tests::support::stubs::StubSessionProvider;

    #[tokio::test]
    async fn test_update_clears_demo_and_replaces_tech() {
        let owner = Uuid::new_v4();
        let mut repository = MockProjectRepository::new();
        repository
            .expect_patch()
            .withf(|_, _, patch| {
                patch.demo == PatchField::Null
                    && patch.tech == PatchField::Value(vec!["Rust".to_string()])
                    && patch.title.is_unset()
            })
            .times(1)
            .returning(move |_, _, _| Ok(sample_project(owner, &["Rust"])));

        let service = UpdateProjectService::new(
            repository,
            Arc::new(StubSessionProvider::signed_in(owner)),
        );
        let changes = ProjectChanges {
            demo: PatchField::Value("".to_string()),
            tech: PatchField::Value(ListInput::from("Rust")),
            ..Default::default()
        };

        assert!(service.execute(Uuid::new_v4(), changes).await.is_ok());
    }

    #[tokio::test]
    async fn test_update_of_unowned_row_is_not_found() {
        let mut repository = MockProjectRepository::new();
        repository
            .expect_patch()
            .returning(|_, _, _| Err(ProjectRepositoryError::NotFound));

        let service = UpdateProjectService::new(
            repository,
            Arc::new(StubSessionProvider::signed_in(Uuid::new_v4())),
        );
        let changes = ProjectChanges {
            title: PatchField::Value("Renamed".to_string()),
            ..Default::default()
        };

        assert_eq!(
            service.execute(Uuid::new_v4(), changes).await.unwrap_err(),
            ContentError::NotFound
        );
    }

    #[tokio::test]
    async fn test_update_cannot_null_description() {
        let mut repository = MockProjectRepository::new();
        repository.expect_patch().times(0);

        let service = UpdateProjectService::new(
            repository,
            Arc::new(StubSessionProvider::signed_in(Uuid::new_v4())),
        );
        let changes = ProjectChanges {
            description: PatchField::Null,
            ..Default::default()
        };

        assert!(matches!(
            service.execute(Uuid::new_v4(), changes).await,
            Err(ContentError::Invalid(_))
        ));
    }
}
