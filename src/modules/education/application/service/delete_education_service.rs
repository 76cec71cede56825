use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::auth::application::ports::incoming::SessionProvider;
use crate::education::application::ports::incoming::DeleteEducationUseCase;
use crate::education::application::ports::outgoing::EducationRepository;
use crate::shared::ContentError;

pub struct DeleteEducationService<R>
where
    R: EducationRepository,
{
    repository: R,
    sessions: Arc<dyn SessionProvider>,
}

impl<R> DeleteEducationService<R>
where
    R: EducationRepository,
{
    pub fn new(repository: R, sessions: Arc<dyn SessionProvider>) -> Self {
        Self {
            repository,
            sessions,
        }
    }
}

#[async_trait]
impl<R> DeleteEducationUseCase for DeleteEducationService<R>
where
    R: EducationRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), ContentError> {
        let session = self.sessions.current_session().await?;

        self.repository.delete(session.user.id, id).await?;
        info!(education_id = %id, "Education deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::education::application::ports::outgoing::education_repository::MockEducationRepository;
    use crate::tests::support::stubs::StubSessionProvider;

    #[tokio::test]
    async fn test_delete_scopes_to_session_user() {
        let owner = Uuid::new_v4();
        let id = Uuid::new_v4();
        let mut repository = MockEducationRepository::new();
        repository
            .expect_delete()
            .withf(move |o, i| o.value() == owner && *i == id)
            .times(1)
            .returning(|_, _| Ok(()));

        let service =
            DeleteEducationService::new(repository, Arc::new(StubSessionProvider::signed_in(owner)));

        assert!(service.execute(id).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_without_session_never_reaches_backend() {
        let mut repository = MockEducationRepository::new();
        repository.expect_delete().times(0);

        let service =
            DeleteEducationService::new(repository, Arc::new(StubSessionProvider::signed_out()));

        assert!(service
            .execute(Uuid::new_v4())
            .await
            .unwrap_err()
            .is_unauthenticated());
    }
}
