use async_trait::async_trait;
use uuid::Uuid;

use crate::logo::domain::Logo;
use crate::shared::ContentError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLogoRecord {
    pub file_name: String,
    pub storage_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LogoRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<LogoRepositoryError> for ContentError {
    fn from(err: LogoRepositoryError) -> Self {
        ContentError::Backend(err.to_string())
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LogoRepository: Send + Sync {
    /// Most recent logo row, if any.
    async fn current(&self) -> Result<Option<Logo>, LogoRepositoryError>;

    /// Every logo row, newest first.
    async fn all(&self) -> Result<Vec<Logo>, LogoRepositoryError>;

    async fn create(&self, record: NewLogoRecord) -> Result<Logo, LogoRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), LogoRepositoryError>;
}
