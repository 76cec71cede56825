use async_trait::async_trait;

use crate::shared::ContentError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("Storage rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Storage request failed: {0}")]
    Transport(String),
}

impl From<StorageError> for ContentError {
    fn from(err: StorageError) -> Self {
        ContentError::Backend(err.to_string())
    }
}

/// Bucket-scoped object store. Writes run as the signed-in user.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Fails if an object already exists at `path`.
    async fn upload(
        &self,
        access_token: &str,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError>;

    async fn remove(&self, access_token: &str, paths: Vec<String>) -> Result<(), StorageError>;
}
