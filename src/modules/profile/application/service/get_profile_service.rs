use async_trait::async_trait;

use crate::profile::application::ports::incoming::GetProfileUseCase;
use crate::profile::application::ports::outgoing::ProfileRepository;
use crate::profile::domain::Profile;
use crate::shared::ContentError;

pub struct GetProfileService<R>
where
    R: ProfileRepository,
{
    repository: R,
}

impl<R> GetProfileService<R>
where
    R: ProfileRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetProfileUseCase for GetProfileService<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Option<Profile>, ContentError> {
        Ok(self.repository.find().await?)
    }
}
