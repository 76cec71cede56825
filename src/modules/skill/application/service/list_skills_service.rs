use async_trait::async_trait;

use crate::shared::ContentError;
use crate::skill::application::ports::incoming::ListSkillsUseCase;
use crate::skill::application::ports::outgoing::SkillRepository;
use crate::skill::domain::Skill;

pub struct ListSkillsService<R>
where
    R: SkillRepository,
{
    repository: R,
}

impl<R> ListSkillsService<R>
where
    R: SkillRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ListSkillsUseCase for ListSkillsService<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Skill>, ContentError> {
        Ok(self.repository.list().await?)
    }
}
