use async_trait::async_trait;

use crate::contact::domain::{Contact, ContactSubmission};
use crate::shared::ContentError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<ContactRepositoryError> for ContentError {
    fn from(err: ContactRepositoryError) -> Self {
        ContentError::Backend(err.to_string())
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Newest first.
    async fn list(&self) -> Result<Vec<Contact>, ContactRepositoryError>;

    async fn create(&self, submission: ContactSubmission)
        -> Result<Contact, ContactRepositoryError>;
}
