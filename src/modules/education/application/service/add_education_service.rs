use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::auth::application::ports::incoming::SessionProvider;
use crate::education::application::ports::incoming::{AddEducationUseCase, NewEducation};
use crate::education::application::ports::outgoing::{CreateEducationData, EducationRepository};
use crate::education::domain::Education;
use crate::shared::validation::require_text;
use crate::shared::{ContentError, COMMA};

pub struct AddEducationService<R>
where
    R: EducationRepository,
{
    repository: R,
    sessions: Arc<dyn SessionProvider>,
}

impl<R> AddEducationService<R>
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
impl<R> AddEducationUseCase for AddEducationService<R>
where
    R: EducationRepository + Send + Sync,
{
    async fn execute(&self, input: NewEducation) -> Result<Education, ContentError> {
        let session = self.sessions.current_session().await?;

        let data = CreateEducationData {
            owner: session.user.id,
            degree: require_text("degree", input.degree)?,
            university: require_text("university", input.university)?,
            duration: require_text("duration", input.duration)?,
            cgpa: input.cgpa.trim().to_string(),
            achievements: input.achievements.into_list(COMMA),
        };

        let education = self.repository.create(data).await?;
        info!(education_id = %education.id, "Education added");

        Ok(education)
    }
}
