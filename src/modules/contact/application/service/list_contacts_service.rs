use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::application::ports::incoming::SessionProvider;
use crate::contact::application::ports::incoming::ListContactsUseCase;
use crate::contact::application::ports::outgoing::ContactRepository;
use crate::contact::domain::Contact;
use crate::shared::ContentError;

/// The inbox is private: reading it needs a session.
pub struct ListContactsService<R>
where
    R: ContactRepository,
{
    repository: R,
    sessions: Arc<dyn SessionProvider>,
}

impl<R> ListContactsService<R>
where
    R: ContactRepository,
{
    pub fn new(repository: R, sessions: Arc<dyn SessionProvider>) -> Self {
        Self {
            repository,
            sessions,
        }
    }
}

#[async_trait]
impl<R> ListContactsUseCase for ListContactsService<R>
where
    R: ContactRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Contact>, ContentError> {
        self.sessions.current_session().await?;

        Ok(self.repository.list().await?)
    }
}
