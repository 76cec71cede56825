use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::domain::entities::UserId;
use crate::shared::{ContentError, PatchField};
use crate::skill::domain::{Skill, SkillCategory};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateSkillData {
    pub owner: UserId,
    pub name: String,
    pub level: i32,
    pub category: SkillCategory,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatchSkillData {
    pub name: PatchField<String>,
    pub level: PatchField<i32>,
    pub category: PatchField<SkillCategory>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SkillRepositoryError {
    /// Row doesn't exist OR doesn't belong to owner.
    #[error("Skill not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<SkillRepositoryError> for ContentError {
    fn from(err: SkillRepositoryError) -> Self {
        match err {
            SkillRepositoryError::NotFound => ContentError::NotFound,
            other => ContentError::Backend(other.to_string()),
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SkillRepository: Send + Sync {
    /// Newest first.
    async fn list(&self) -> Result<Vec<Skill>, SkillRepositoryError>;

    async fn create(&self, data: CreateSkillData) -> Result<Skill, SkillRepositoryError>;

    async fn patch(
        &self,
        owner: UserId,
        id: Uuid,
        data: PatchSkillData,
    ) -> Result<Skill, SkillRepositoryError>;

    async fn delete(&self, owner: UserId, id: Uuid) -> Result<(), SkillRepositoryError>;
}
