use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::domain::entities::UserId;
use crate::education::domain::Education;
use crate::shared::{ContentError, PatchField};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateEducationData {
    pub owner: UserId,
    pub degree: String,
    pub university: String,
    pub duration: String,
    pub cgpa: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatchEducationData {
    pub degree: PatchField<String>,
    pub university: PatchField<String>,
    pub duration: PatchField<String>,
    pub cgpa: PatchField<String>,
    pub achievements: PatchField<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EducationRepositoryError {
    /// Row doesn't exist OR doesn't belong to owner.
    #[error("Education entry not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<EducationRepositoryError> for ContentError {
    fn from(err: EducationRepositoryError) -> Self {
        match err {
            EducationRepositoryError::NotFound => ContentError::NotFound,
            other => ContentError::Backend(other.to_string()),
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EducationRepository: Send + Sync {
    /// Newest first.
    async fn list(&self) -> Result<Vec<Education>, EducationRepositoryError>;

    async fn create(&self, data: CreateEducationData)
        -> Result<Education, EducationRepositoryError>;

    async fn patch(
        &self,
        owner: UserId,
        id: Uuid,
        data: PatchEducationData,
    ) -> Result<Education, EducationRepositoryError>;

    async fn delete(&self, owner: UserId, id: Uuid) -> Result<(), EducationRepositoryError>;
}
