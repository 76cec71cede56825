use async_trait::async_trait;

use crate::project::application::ports::incoming::ListProjectsUseCase;
use crate::project::application::ports::outgoing::ProjectRepository;
use crate::project::domain::Project;
use crate::shared::ContentError;

pub struct ListProjectsService<R>
where
    R: ProjectRepository,
{
    repository: R,
}

impl<R> ListProjectsService<R>
where
    R: ProjectRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ListProjectsUseCase for ListProjectsService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Project>, ContentError> {
        Ok(self.repository.list().await?)
    }
}
