use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::auth::application::ports::incoming::SessionProvider;
use crate::education::application::ports::incoming::{EducationChanges, UpdateEducationUseCase};
use crate::education::application::ports::outgoing::{EducationRepository, PatchEducationData};
use crate::education::domain::Education;
use crate::shared::validation::require_patch_text;
use crate::shared::{normalize_patch, ContentError, PatchField, COMMA};

pub struct UpdateEducationService<R>
where
    R: EducationRepository,
{
    repository: R,
    sessions: Arc<dyn SessionProvider>,
}

impl<R> UpdateEducationService<R>
where
    R: EducationRepository,
{
    pub fn new(repository: R, sessions: Arc<dyn SessionProvider>) -> Self {
        Self {
            repository,
            sessions,
        }
    }
}

#[async_trait]
impl<R> UpdateEducationUseCase for UpdateEducationService<R>
where
    R: EducationRepository + Send + Sync,
{
    async fn execute(
        &self,
        id: Uuid,
        changes: EducationChanges,
    ) -> Result<Education, ContentError> {
        let session = self.sessions.current_session().await?;

        // cgpa may be blank but the column is not nullable
        let cgpa = match changes.cgpa {
            PatchField::Null => PatchField::Value(String::new()),
            other => other.map(|v| v.trim().to_string()),
        };

        let patch = PatchEducationData {
            degree: require_patch_text("degree", changes.degree)?,
            university: require_patch_text("university", changes.university)?,
            duration: require_patch_text("duration", changes.duration)?,
            cgpa,
            achievements: normalize_patch(changes.achievements, COMMA),
        };

        let education = self.repository.patch(session.user.id, id, patch).await?;
        info!(education_id = %education.id, "Education updated");

        Ok(education)
    }
}
