use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::domain::entities::UserId;
use crate::experience::domain::Experience;
use crate::shared::{ContentError, PatchField};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateExperienceData {
    pub owner: UserId,
    pub title: String,
    pub company: String,
    pub duration: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub achievements: Vec<String>,
    pub tech: Vec<String>,
}

/// Lists replace the stored array whole; `Null` only applies to
/// description and location.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatchExperienceData {
    pub title: PatchField<String>,
    pub company: PatchField<String>,
    pub duration: PatchField<String>,
    pub description: PatchField<String>,
    pub location: PatchField<String>,
    pub achievements: PatchField<Vec<String>>,
    pub tech: PatchField<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExperienceRepositoryError {
    /// Row doesn't exist OR doesn't belong to owner.
    #[error("Experience not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<ExperienceRepositoryError> for ContentError {
    fn from(err: ExperienceRepositoryError) -> Self {
        match err {
            ExperienceRepositoryError::NotFound => ContentError::NotFound,
            other => ContentError::Backend(other.to_string()),
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExperienceRepository: Send + Sync {
    /// Newest first.
    async fn list(&self) -> Result<Vec<Experience>, ExperienceRepositoryError>;

    async fn create(
        &self,
        data: CreateExperienceData,
    ) -> Result<Experience, ExperienceRepositoryError>;

    async fn patch(
        &self,
        owner: UserId,
        id: Uuid,
        data: PatchExperienceData,
    ) -> Result<Experience, ExperienceRepositoryError>;

    async fn delete(&self, owner: UserId, id: Uuid) -> Result<(), ExperienceRepositoryError>;
}
