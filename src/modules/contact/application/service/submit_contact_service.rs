use async_trait::async_trait;
use tracing::{info, warn};

use crate::contact::application::ports::incoming::{ContactForm, SubmitContactUseCase};
use crate::contact::application::ports::outgoing::ContactRepository;
use crate::contact::domain::{Contact, ContactSubmission};
use crate::shared::ContentError;

/// Anonymous write. Validation runs before the repository is touched.
pub struct SubmitContactService<R>
where
    R: ContactRepository,
{
    repository: R,
}

impl<R> SubmitContactService<R>
where
    R: ContactRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> SubmitContactUseCase for SubmitContactService<R>
where
    R: ContactRepository + Send + Sync,
{
    async fn execute(&self, form: ContactForm) -> Result<Contact, ContentError> {
        let submission = ContactSubmission::new(&form.name, &form.email, &form.message)
            .map_err(|e| {
                warn!(reason = %e, "Contact submission rejected");
                ContentError::Invalid(e.to_string())
            })?;

        let contact = self.repository.create(submission).await?;
        info!(contact_id = %contact.id, "Contact message stored");

        Ok(contact)
    }
}
