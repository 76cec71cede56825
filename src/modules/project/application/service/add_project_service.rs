use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::auth::application::ports::incoming::SessionProvider;
use crate::project::application::ports::incoming::{AddProjectUseCase, NewProject};
use crate::project::application::ports::outgoing::{CreateProjectData, ProjectRepository};
use crate::project::domain::Project;
use crate::shared::validation::{optional_text, require_text};
use crate::shared::{ContentError, COMMA};

pub struct AddProjectService<R>
where
    R: ProjectRepository,
{
    repository: R,
    sessions: Arc<dyn SessionProvider>,
}

impl<R> AddProjectService<R>
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
impl<R> AddProjectUseCase for AddProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, input: NewProject) -> Result<Project, ContentError> {
        let session = self.sessions.current_session().await?;

        let data = CreateProjectData {
            owner: session.user.id,
            title: require_text("title", input.title)?,
            description: require_text("description", input.description)?,
            tech: input.tech.into_list(COMMA),
            github: optional_text(input.github),
            demo: optional_text(input.demo),
        };

        let project = self.repository.create(data).await?;
        info!(project_id = %project.id, "Project added");

        Ok(project)
    }
}
