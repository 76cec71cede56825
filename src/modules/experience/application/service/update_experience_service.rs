use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::auth::application::ports::incoming::SessionProvider;
use crate::experience::application::ports::incoming::{
    ExperienceChanges, UpdateExperienceUseCase,
};
use crate::experience::application::ports::outgoing::{
    ExperienceRepository, PatchExperienceData,
};
use crate::experience::domain::Experience;
use crate::shared::validation::{optional_patch_text, require_patch_text};
use crate::shared::{normalize_patch, ContentError, COMMA};

pub struct UpdateExperienceService<R>
where
    R: ExperienceRepository,
{
    repository: R,
    sessions: Arc<dyn SessionProvider>,
}

impl<R> UpdateExperienceService<R>
where
    R: ExperienceRepository,
{
    pub fn new(repository: R, sessions: Arc<dyn SessionProvider>) -> Self {
        Self {
            repository,
            sessions,
        }
    }
}

#[async_trait]
impl<R> UpdateExperienceUseCase for UpdateExperienceService<R>
where
    R: ExperienceRepository + Send + Sync,
{
    async fn execute(
        &self,
        id: Uuid,
        changes: ExperienceChanges,
    ) -> Result<Experience, ContentError> {
        let session = self.sessions.current_session().await?;

        let patch = PatchExperienceData {
            title: require_patch_text("title", changes.title)?,
            company: require_patch_text("company", changes.company)?,
            duration: require_patch_text("duration", changes.duration)?,
            description: optional_patch_text(changes.description),
            location: optional_patch_text(changes.location),
            achievements: normalize_patch(changes.achievements, COMMA),
            tech: normalize_patch(changes.tech, COMMA),
        };

        let experience = self.repository.patch(session.user.id, id, patch).await?;
        info!(experience_id = %experience.id, "Experience updated");

        Ok(experience)
    }
}
