use std::sync::Arc;

use chrono::Duration;
use uuid::Uuid;

use crate::auth::application::session_manager::tests::StubGateway;
use crate::auth::application::{AuthUseCases, SessionManager};
use crate::contact::application::ContactUseCases;
use crate::content_store::ContentStore;
use crate::education::application::EducationUseCases;
use crate::experience::application::ExperienceUseCases;
use crate::logo::application::LogoUseCases;
use crate::logo::domain::PublicUrlBase;
use crate::profile::application::ProfileUseCases;
use crate::project::application::ProjectUseCases;
use crate::skill::application::SkillUseCases;
use crate::tests::support::stubs::{StubSignOut, Unconfigured};
use crate::AppState;

pub const TEST_BACKEND_URL: &str = "https://backend.test";
pub const TEST_LOGO_BUCKET: &str = "logos";

/// Builds an `AppState` where every use case fails until a test swaps in
/// its own.
///
/// The session manager talks to a stub gateway that accepts
/// `correct-password`.
pub struct TestAppStateBuilder {
    auth: AuthUseCases,
    sessions: Arc<SessionManager>,
    content: ContentStore,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        let unconfigured = Arc::new(Unconfigured);
        let sessions = Arc::new(SessionManager::new(
            Arc::new(StubGateway::new(Uuid::new_v4())),
            Duration::seconds(30),
        ));

        Self {
            auth: AuthUseCases {
                sign_in: unconfigured.clone(),
                sign_out: Arc::new(StubSignOut::default()),
            },
            sessions,
            content: ContentStore {
                profile: ProfileUseCases {
                    get: unconfigured.clone(),
                    update: unconfigured.clone(),
                },
                experience: ExperienceUseCases {
                    list: unconfigured.clone(),
                    add: unconfigured.clone(),
                    update: unconfigured.clone(),
                    delete: unconfigured.clone(),
                },
                education: EducationUseCases {
                    list: unconfigured.clone(),
                    add: unconfigured.clone(),
                    update: unconfigured.clone(),
                    delete: unconfigured.clone(),
                },
                skill: SkillUseCases {
                    list: unconfigured.clone(),
                    add: unconfigured.clone(),
                    update: unconfigured.clone(),
                    delete: unconfigured.clone(),
                },
                project: ProjectUseCases {
                    list: unconfigured.clone(),
                    add: unconfigured.clone(),
                    update: unconfigured.clone(),
                    delete: unconfigured.clone(),
                },
                contact: ContactUseCases {
                    submit: unconfigured.clone(),
                    list: unconfigured.clone(),
                },
                logo: LogoUseCases {
                    get: unconfigured.clone(),
                    upload: unconfigured,
                    urls: PublicUrlBase::new(TEST_BACKEND_URL, TEST_LOGO_BUCKET),
                },
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn auth(mut self, configure: impl FnOnce(&mut AuthUseCases)) -> Self {
        configure(&mut self.auth);
        self
    }

    pub fn sessions(mut self, sessions: Arc<SessionManager>) -> Self {
        self.sessions = sessions;
        self
    }

    pub fn profile(mut self, configure: impl FnOnce(&mut ProfileUseCases)) -> Self {
        configure(&mut self.content.profile);
        self
    }

    pub fn experience(mut self, configure: impl FnOnce(&mut ExperienceUseCases)) -> Self {
        configure(&mut self.content.experience);
        self
    }

    pub fn education(mut self, configure: impl FnOnce(&mut EducationUseCases)) -> Self {
        configure(&mut self.content.education);
        self
    }

    pub fn skill(mut self, configure: impl FnOnce(&mut SkillUseCases)) -> Self {
        configure(&mut self.content.skill);
        self
    }

    pub fn project(mut self, configure: impl FnOnce(&mut ProjectUseCases)) -> Self {
        configure(&mut self.content.project);
        self
    }

    pub fn contact(mut self, configure: impl FnOnce(&mut ContactUseCases)) -> Self {
        configure(&mut self.content.contact);
        self
    }

    pub fn logo(mut self, configure: impl FnOnce(&mut LogoUseCases)) -> Self {
        configure(&mut self.content.logo);
        self
    }

    pub fn build(self) -> AppState {
        AppState {
            auth: self.auth,
            sessions: self.sessions,
            content: self.content,
        }
    }
}
