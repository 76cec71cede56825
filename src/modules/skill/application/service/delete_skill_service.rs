use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::auth::application::ports::incoming::SessionProvider;
use crate::shared::ContentError;
use crate::skill::application::ports::incoming::DeleteSkillUseCase;
use crate::skill::application::ports::outgoing::SkillRepository;

pub struct DeleteSkillService<R>
where
    R: SkillRepository,
{
    repository: R,
    sessions: Arc<dyn SessionProvider>,
}

impl<R> DeleteSkillService<R>
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
impl<R> DeleteSkillUseCase for DeleteSkillService<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), ContentError> {
        let session = self.sessions.current_session().await?;

        self.repository.delete(session.user.id, id).await?;
        info!(skill_id = %id, "Skill deleted");

        Ok(())
    }
}
