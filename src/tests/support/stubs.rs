use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::auth::application::ports::incoming::{SessionError, SessionProvider};
use crate::auth::application::use_cases::{
    ISignInUseCase, ISignOutUseCase, SignInError, SignInRequest, SignInResponse, SignOutError,
};
use crate::auth::domain::entities::{Session, SessionUser, UserId};
use crate::contact::application::ports::incoming::{
    ContactForm, ListContactsUseCase, SubmitContactUseCase,
};
use crate::contact::domain::Contact;
use crate::education::application::ports::incoming::{
    AddEducationUseCase, DeleteEducationUseCase, EducationChanges, ListEducationUseCase,
    NewEducation, UpdateEducationUseCase,
};
use crate::education::domain::Education;
use crate::experience::application::ports::incoming::{
    AddExperienceUseCase, DeleteExperienceUseCase, ExperienceChanges, ListExperiencesUseCase,
    NewExperience, UpdateExperienceUseCase,
};
use crate::experience::domain::Experience;
use crate::logo::application::ports::incoming::{GetLogoUseCase, UploadLogoUseCase};
use crate::logo::domain::LogoAsset;
use crate::profile::application::ports::incoming::{
    GetProfileUseCase, ProfileUpdate, UpdateProfileUseCase,
};
use crate::profile::domain::Profile;
use crate::project::application::ports::incoming::{
    AddProjectUseCase, DeleteProjectUseCase, ListProjectsUseCase, NewProject, ProjectChanges,
    UpdateProjectUseCase,
};
use crate::project::domain::Project;
use crate::shared::ContentError;
use crate::skill::application::ports::incoming::{
    AddSkillUseCase, DeleteSkillUseCase, ListSkillsUseCase, NewSkill, SkillChanges,
    UpdateSkillUseCase,
};
use crate::skill::domain::Skill;

// ========================================================================
// Session
// ========================================================================

pub const TEST_ACCESS_TOKEN: &str = "backend-access-token";

pub fn test_session(user_id: Uuid) -> Session {
    Session {
        access_token: TEST_ACCESS_TOKEN.to_string(),
        refresh_token: "backend-refresh-token".to_string(),
        expires_at: Utc::now() + Duration::hours(1),
        user: SessionUser {
            id: UserId::from(user_id),
            email: "admin@example.com".to_string(),
        },
    }
}

/// Fixed answer session provider that counts lookups.
pub struct StubSessionProvider {
    result: Result<Session, SessionError>,
    calls: AtomicUsize,
}

impl StubSessionProvider {
    pub fn signed_in(user_id: Uuid) -> Self {
        Self {
            result: Ok(test_session(user_id)),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn signed_out() -> Self {
        Self {
            result: Err(SessionError::NotAuthenticated),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn expired() -> Self {
        Self {
            result: Err(SessionError::SessionExpired),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SessionProvider for StubSessionProvider {
    async fn current_session(&self) -> Result<Session, SessionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

// ========================================================================
// Auth
// ========================================================================

#[derive(Default)]
pub struct StubSignOut {
    fail: bool,
}

impl StubSignOut {
    pub fn failing() -> Self {
        Self { fail: true }
    }
}

#[async_trait]
impl ISignOutUseCase for StubSignOut {
    async fn execute(&self) -> Result<(), SignOutError> {
        if self.fail {
            return Err(SignOutError::Remote("connection reset".to_string()));
        }
        Ok(())
    }
}

// ========================================================================
// Unconfigured use cases
// ========================================================================

const NOT_CONFIGURED: &str = "not configured in this test";

fn not_configured<T>() -> Result<T, ContentError> {
    Err(ContentError::Backend(NOT_CONFIGURED.to_string()))
}

/// Default for every slot a test does not override. Any call fails.
pub struct Unconfigured;

#[async_trait]
impl ISignInUseCase for Unconfigured {
    async fn execute(&self, _request: SignInRequest) -> Result<SignInResponse, SignInError> {
        Err(SignInError::Gateway(NOT_CONFIGURED.to_string()))
    }
}

#[async_trait]
impl GetProfileUseCase for Unconfigured {
    async fn execute(&self) -> Result<Option<Profile>, ContentError> {
        not_configured()
    }
}

#[async_trait]
impl UpdateProfileUseCase for Unconfigured {
    async fn execute(&self, _update: ProfileUpdate) -> Result<Profile, ContentError> {
        not_configured()
    }
}

#[async_trait]
impl ListExperiencesUseCase for Unconfigured {
    async fn execute(&self) -> Result<Vec<Experience>, ContentError> {
        not_configured()
    }
}

#[async_trait]
impl AddExperienceUseCase for Unconfigured {
    async fn execute(&self, _input: NewExperience) -> Result<Experience, ContentError> {
        not_configured()
    }
}

#[async_trait]
impl UpdateExperienceUseCase for Unconfigured {
    async fn execute(
        &self,
        _id: Uuid,
        _changes: ExperienceChanges,
    ) -> Result<Experience, ContentError> {
        not_configured()
    }
}

#[async_trait]
impl DeleteExperienceUseCase for Unconfigured {
    async fn execute(&self, _id: Uuid) -> Result<(), ContentError> {
        not_configured()
    }
}

#[async_trait]
impl ListEducationUseCase for Unconfigured {
    async fn execute(&self) -> Result<Vec<Education>, ContentError> {
        not_configured()
    }
}

#[async_trait]
impl AddEducationUseCase for Unconfigured {
    async fn execute(&self, _input: NewEducation) -> Result<Education, ContentError> {
        not_configured()
    }
}

#[async_trait]
impl UpdateEducationUseCase for Unconfigured {
    async fn execute(
        &self,
        _id: Uuid,
        _changes: EducationChanges,
    ) -> Result<Education, ContentError> {
        not_configured()
    }
}

#[async_trait]
impl DeleteEducationUseCase for Unconfigured {
    async fn execute(&self, _id: Uuid) -> Result<(), ContentError> {
        not_configured()
    }
}

#[async_trait]
impl ListSkillsUseCase for Unconfigured {
    async fn execute(&self) -> Result<Vec<Skill>, ContentError> {
        not_configured()
    }
}

#[async_trait]
impl AddSkillUseCase for Unconfigured {
    async fn execute(&self, _input: NewSkill) -> Result<Skill, ContentError> {
        not_configured()
    }
}

#[async_trait]
impl UpdateSkillUseCase for Unconfigured {
    async fn execute(&self, _id: Uuid, _changes: SkillChanges) -> Result<Skill, ContentError> {
        not_configured()
    }
}

#[async_trait]
impl DeleteSkillUseCase for Unconfigured {
    async fn execute(&self, _id: Uuid) -> Result<(), ContentError> {
        not_configured()
    }
}

#[async_trait]
impl ListProjectsUseCase for Unconfigured {
    async fn execute(&self) -> Result<Vec<Project>, ContentError> {
        not_configured()
    }
}

#[async_trait]
impl AddProjectUseCase for Unconfigured {
    async fn execute(&self, _input: NewProject) -> Result<Project, ContentError> {
        not_configured()
    }
}

#[async_trait]
impl UpdateProjectUseCase for Unconfigured {
    async fn execute(&self, _id: Uuid, _changes: ProjectChanges) -> Result<Project, ContentError> {
        not_configured()
    }
}

#[async_trait]
impl DeleteProjectUseCase for Unconfigured {
    async fn execute(&self, _id: Uuid) -> Result<(), ContentError> {
        not_configured()
    }
}

#[async_trait]
impl SubmitContactUseCase for Unconfigured {
    async fn execute(&self, _form: ContactForm) -> Result<Contact, ContentError> {
        not_configured()
    }
}

#[async_trait]
impl ListContactsUseCase for Unconfigured {
    async fn execute(&self) -> Result<Vec<Contact>, ContentError> {
        not_configured()
    }
}

#[async_trait]
impl GetLogoUseCase for Unconfigured {
    async fn execute(&self) -> Result<Option<LogoAsset>, ContentError> {
        not_configured()
    }
}

#[async_trait]
impl UploadLogoUseCase for Unconfigured {
    async fn execute(&self, _png: Vec<u8>) -> Result<LogoAsset, ContentError> {
        not_configured()
    }
}
