use async_trait::async_trait;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::profile::domain::Profile;
use crate::shared::{ContentError, ListInput};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
pub struct ProfileUpdate {
    pub full_name: String,
    /// List or `/` separated string.
    #[serde(default)]
    pub title: ListInput,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub email: Option<String>,
}

#[async_trait]
pub trait GetProfileUseCase: Send + Sync {
    /// `None` when no profile has been written yet.
    async fn execute(&self) -> Result<Option<Profile>, ContentError>;
}

#[async_trait]
pub trait UpdateProfileUseCase: Send + Sync {
    async fn execute(&self, update: ProfileUpdate) -> Result<Profile, ContentError>;
}
