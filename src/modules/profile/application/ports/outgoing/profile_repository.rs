use async_trait::async_trait;

use crate::auth::domain::entities::UserId;
use crate::profile::domain::Profile;
use crate::shared::ContentError;

/// Full profile document; every column is overwritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileData {
    pub full_name: String,
    pub title: Vec<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileRepositoryError {
    /// No profile row keyed by the owner.
    #[error("Profile not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<ProfileRepositoryError> for ContentError {
    fn from(err: ProfileRepositoryError) -> Self {
        match err {
            ProfileRepositoryError::NotFound => ContentError::NotFound,
            other => ContentError::Backend(other.to_string()),
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn find(&self) -> Result<Option<Profile>, ProfileRepositoryError>;

    async fn update(
        &self,
        owner: UserId,
        data: ProfileData,
    ) -> Result<Profile, ProfileRepositoryError>;
}
