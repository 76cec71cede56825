use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::auth::application::ports::incoming::SessionProvider;
use crate::project::application::ports::incoming::DeleteProjectUseCase;
use crate::project::application::ports::outgoing::ProjectRepository;
use crate::shared::ContentError;

pub struct DeleteProjectService<R>
where
    R: ProjectRepository,
{
    repository: R,
    sessions: Arc<dyn SessionProvider>,
}

impl<R> DeleteProjectService<R>
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
impl<R> DeleteProjectUseCase for DeleteProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), ContentError> {
        let session = self.sessions.current_session().await?;

        self.repository.delete(session.user.id, id).await?;
        info!(project_id = %id, "Project deleted");

        Ok(())
    }
}
