use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::auth::application::ports::incoming::SessionProvider;
use crate::experience::application::ports::incoming::DeleteExperienceUseCase;
use crate::experience::application::ports::outgoing::ExperienceRepository;
use crate::shared::ContentError;

pub struct DeleteExperienceService<R>
where
    R: ExperienceRepository,
{
    repository: R,
    sessions: Arc<dyn SessionProvider>,
}

impl<R> DeleteExperienceService<R>
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
impl<R> DeleteExperienceUseCase for DeleteExperienceService<R>
where
    R: ExperienceRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), ContentError> {
        let session = self.sessions.current_session().await?;

        self.repository.delete(session.user.id, id).await?;
        info!(experience_id = %id, "Experience deleted");

        Ok(())
    }
}
