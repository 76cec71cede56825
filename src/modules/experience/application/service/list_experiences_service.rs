use async_trait::async_trait;

use crate::experience::application::ports::incoming::ListExperiencesUseCase;
use crate::experience::application::ports::outgoing::ExperienceRepository;
use crate::experience::domain::Experience;
use crate::shared::ContentError;

/// Public read, no session involved.
pub struct ListExperiencesService<R>
where
    R: ExperienceRepository,
{
    repository: R,
}

impl<R> ListExperiencesService<R>
where
    R: ExperienceRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ListExperiencesUseCase for ListExperiencesService<R>
where
    R: ExperienceRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Experience>, ContentError> {
        Ok(self.repository.list().await?)
    }
}
