use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::domain::entities::UserId;
use crate::project::domain::Project;
use crate::shared::{ContentError, PatchField};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProjectData {
    pub owner: UserId,
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub github: Option<String>,
    pub demo: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatchProjectData {
    pub title: PatchField<String>,
    pub description: PatchField<String>,
    pub tech: PatchField<Vec<String>>,
    pub github: PatchField<String>,
    pub demo: PatchField<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProjectRepositoryError {
    /// Row doesn't exist OR doesn't belong to owner.
    #[error("Project not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<ProjectRepositoryError> for ContentError {
    fn from(err: ProjectRepositoryError) -> Self {
        match err {
            ProjectRepositoryError::NotFound => ContentError::NotFound,
            other => ContentError::Backend(other.to_string()),
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Newest first.
    async fn list(&self) -> Result<Vec<Project>, ProjectRepositoryError>;

    async fn create(&self, data: CreateProjectData) -> Result<Project, ProjectRepositoryError>;

    async fn patch(
        &self,
        owner: UserId,
        id: Uuid,
        data: PatchProjectData,
    ) -> Result<Project, ProjectRepositoryError>;

    async fn delete(&self, owner: UserId, id: Uuid) -> Result<(), ProjectRepositoryError>;
}
