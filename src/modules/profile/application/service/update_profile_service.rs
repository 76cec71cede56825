use std::sync::Arc;

use async_trait::async_trait;
use email_address::EmailAddress;
use tracing::info;

use crate::auth::application::ports::incoming::SessionProvider;
use crate::profile::application::ports::incoming::{ProfileUpdate, UpdateProfileUseCase};
use crate::profile::application::ports::outgoing::{ProfileData, ProfileRepository};
use crate::profile::domain::Profile;
use crate::shared::validation::{optional_text, require_text};
use crate::shared::{ContentError, SLASH};

pub struct UpdateProfileService<R>
where
    R: ProfileRepository,
{
    repository: R,
    sessions: Arc<dyn SessionProvider>,
}

impl<R> UpdateProfileService<R>
where
    R: ProfileRepository,
{
    pub fn new(repository: R, sessions: Arc<dyn SessionProvider>) -> Self {
        Self {
            repository,
            sessions,
        }
    }
}

fn contact_email(value: Option<String>) -> Result<Option<String>, ContentError> {
    match optional_text(value) {
        Some(email) if !EmailAddress::is_valid(&email) => Err(ContentError::Invalid(
            "email must be a valid address".to_string(),
        )),
        other => Ok(other),
    }
}

#[async_trait]
impl<R> UpdateProfileUseCase for UpdateProfileService<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(&self, update: ProfileUpdate) -> Result<Profile, ContentError> {
        let session = self.sessions.current_session().await?;

        let data = ProfileData {
            full_name: require_text("full_name", update.full_name)?,
            title: update.title.into_list(SLASH),
            github: optional_text(update.github),
            linkedin: optional_text(update.linkedin),
            email: contact_email(update.email)?,
        };

        let profile = self.repository.update(session.user.id, data).await?;
        info!(profile_id = %profile.id, "Profile updated");

        Ok(profile)
    }
}
