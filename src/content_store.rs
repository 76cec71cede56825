use std::sync::Arc;

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::auth::application::ports::incoming::SessionProvider;
use crate::contact::adapter::outgoing::ContactRepositoryPostgres;
use crate::contact::application::ports::incoming::ContactForm;
use crate::contact::application::service::{ListContactsService, SubmitContactService};
use crate::contact::application::ContactUseCases;
use crate::contact::domain::Contact;
use crate::education::adapter::outgoing::EducationRepositoryPostgres;
use crate::education::application::ports::incoming::{EducationChanges, NewEducation};
use crate::education::application::service::{
    AddEducationService, DeleteEducationService, ListEducationService, UpdateEducationService,
};
use crate::education::application::EducationUseCases;
use crate::education::domain::Education;
use crate::experience::adapter::outgoing::ExperienceRepositoryPostgres;
use crate::experience::application::ports::incoming::{ExperienceChanges, NewExperience};
use crate::experience::application::service::{
    AddExperienceService, DeleteExperienceService, ListExperiencesService,
    UpdateExperienceService,
};
use crate::experience::application::ExperienceUseCases;
use crate::experience::domain::Experience;
use crate::logo::adapter::outgoing::{LogoRepositoryPostgres, ObjectStorageHttp};
use crate::logo::application::service::{GetLogoService, UploadLogoService};
use crate::logo::application::LogoUseCases;
use crate::logo::domain::{LogoAsset, LogoUploadPolicy, PublicUrlBase};
use crate::profile::adapter::outgoing::ProfileRepositoryPostgres;
use crate::profile::application::ports::incoming::ProfileUpdate;
use crate::profile::application::service::{GetProfileService, UpdateProfileService};
use crate::profile::application::ProfileUseCases;
use crate::profile::domain::Profile;
use crate::project::adapter::outgoing::ProjectRepositoryPostgres;
use crate::project::application::ports::incoming::{NewProject, ProjectChanges};
use crate::project::application::service::{
    AddProjectService, DeleteProjectService, ListProjectsService, UpdateProjectService,
};
use crate::project::application::ProjectUseCases;
use crate::project::domain::Project;
use crate::shared::ContentError;
use crate::skill::adapter::outgoing::SkillRepositoryPostgres;
use crate::skill::application::ports::incoming::{NewSkill, SkillChanges};
use crate::skill::application::service::{
    AddSkillService, DeleteSkillService, ListSkillsService, UpdateSkillService,
};
use crate::skill::application::SkillUseCases;
use crate::skill::domain::Skill;

/// Typed access to every content collection, one use case per operation.
///
/// The HTTP handlers reach into the bundles directly; the dashboard goes
/// through the named methods.
#[derive(Clone)]
pub struct ContentStore {
    pub profile: ProfileUseCases,
    pub experience: ExperienceUseCases,
    pub education: EducationUseCases,
    pub skill: SkillUseCases,
    pub project: ProjectUseCases,
    pub contact: ContactUseCases,
    pub logo: LogoUseCases,
}

impl ContentStore {
    /// Wires every collection to its Postgres repository. Writes resolve the
    /// session through `sessions`.
    pub fn postgres(
        db: Arc<DatabaseConnection>,
        sessions: Arc<dyn SessionProvider>,
        storage: ObjectStorageHttp,
        urls: PublicUrlBase,
    ) -> Self {
        let profile_repo = ProfileRepositoryPostgres::new(Arc::clone(&db));
        let experience_repo = ExperienceRepositoryPostgres::new(Arc::clone(&db));
        let education_repo = EducationRepositoryPostgres::new(Arc::clone(&db));
        let skill_repo = SkillRepositoryPostgres::new(Arc::clone(&db));
        let project_repo = ProjectRepositoryPostgres::new(Arc::clone(&db));
        let contact_repo = ContactRepositoryPostgres::new(Arc::clone(&db));
        let logo_repo = LogoRepositoryPostgres::new(Arc::clone(&db));

        Self {
            profile: ProfileUseCases {
                get: Arc::new(GetProfileService::new(profile_repo.clone())),
                update: Arc::new(UpdateProfileService::new(profile_repo, sessions.clone())),
            },
            experience: ExperienceUseCases {
                list: Arc::new(ListExperiencesService::new(experience_repo.clone())),
                add: Arc::new(AddExperienceService::new(
                    experience_repo.clone(),
                    sessions.clone(),
                )),
                update: Arc::new(UpdateExperienceService::new(
                    experience_repo.clone(),
                    sessions.clone(),
                )),
                delete: Arc::new(DeleteExperienceService::new(experience_repo, sessions.clone())),
            },
            education: EducationUseCases {
                list: Arc::new(ListEducationService::new(education_repo.clone())),
                add: Arc::new(AddEducationService::new(
                    education_repo.clone(),
                    sessions.clone(),
                )),
                update: Arc::new(UpdateEducationService::new(
                    education_repo.clone(),
                    sessions.clone(),
                )),
                delete: Arc::new(DeleteEducationService::new(education_repo, sessions.clone())),
            },
            skill: SkillUseCases {
                list: Arc::new(ListSkillsService::new(skill_repo.clone())),
                add: Arc::new(AddSkillService::new(skill_repo.clone(), sessions.clone())),
                update: Arc::new(UpdateSkillService::new(skill_repo.clone(), sessions.clone())),
                delete: Arc::new(DeleteSkillService::new(skill_repo, sessions.clone())),
            },
            project: ProjectUseCases {
                list: Arc::new(ListProjectsService::new(project_repo.clone())),
                add: Arc::new(AddProjectService::new(project_repo.clone(), sessions.clone())),
                update: Arc::new(UpdateProjectService::new(
                    project_repo.clone(),
                    sessions.clone(),
                )),
                delete: Arc::new(DeleteProjectService::new(project_repo, sessions.clone())),
            },
            contact: ContactUseCases {
                submit: Arc::new(SubmitContactService::new(contact_repo.clone())),
                list: Arc::new(ListContactsService::new(contact_repo, sessions.clone())),
            },
            logo: LogoUseCases {
                get: Arc::new(GetLogoService::new(logo_repo.clone(), urls.clone())),
                upload: Arc::new(UploadLogoService::new(
                    logo_repo,
                    storage,
                    sessions,
                    urls.clone(),
                    LogoUploadPolicy::default(),
                )),
                urls,
            },
        }
    }

    // profile

    pub async fn get_profile(&self) -> Result<Option<Profile>, ContentError> {
        self.profile.get.execute().await
    }

    pub async fn update_profile(&self, update: ProfileUpdate) -> Result<Profile, ContentError> {
        self.profile.update.execute(update).await
    }

    // experiences

    pub async fn list_experiences(&self) -> Result<Vec<Experience>, ContentError> {
        self.experience.list.execute().await
    }

    pub async fn add_experience(&self, input: NewExperience) -> Result<Experience, ContentError> {
        self.experience.add.execute(input).await
    }

    pub async fn update_experience(
        &self,
        id: Uuid,
        changes: ExperienceChanges,
    ) -> Result<Experience, ContentError> {
        self.experience.update.execute(id, changes).await
    }

    pub async fn delete_experience(&self, id: Uuid) -> Result<(), ContentError> {
        self.experience.delete.execute(id).await
    }

    // education

    pub async fn list_education(&self) -> Result<Vec<Education>, ContentError> {
        self.education.list.execute().await
    }

    pub async fn add_education(&self, input: NewEducation) -> Result<Education, ContentError> {
        self.education.add.execute(input).await
    }

    pub async fn update_education(
        &self,
        id: Uuid,
        changes: EducationChanges,
    ) -> Result<Education, ContentError> {
        self.education.update.execute(id, changes).await
    }

    pub async fn delete_education(&self, id: Uuid) -> Result<(), ContentError> {
        self.education.delete.execute(id).await
    }

    // skills

    pub async fn list_skills(&self) -> Result<Vec<Skill>, ContentError> {
        self.skill.list.execute().await
    }

    pub async fn add_skill(&self, input: NewSkill) -> Result<Skill, ContentError> {
        self.skill.add.execute(input).await
    }

    pub async fn update_skill(&self, id: Uuid, changes: SkillChanges) -> Result<Skill, ContentError> {
        self.skill.update.execute(id, changes).await
    }

    pub async fn delete_skill(&self, id: Uuid) -> Result<(), ContentError> {
        self.skill.delete.execute(id).await
    }

    // projects

    pub async fn list_projects(&self) -> Result<Vec<Project>, ContentError> {
        self.project.list.execute().await
    }

    pub async fn add_project(&self, input: NewProject) -> Result<Project, ContentError> {
        self.project.add.execute(input).await
    }

    pub async fn update_project(
        &self,
        id: Uuid,
        changes: ProjectChanges,
    ) -> Result<Project, ContentError> {
        self.project.update.execute(id, changes).await
    }

    pub async fn delete_project(&self, id: Uuid) -> Result<(), ContentError> {
        self.project.delete.execute(id).await
    }

    // contacts

    pub async fn list_contacts(&self) -> Result<Vec<Contact>, ContentError> {
        self.contact.list.execute().await
    }

    pub async fn submit_contact(&self, form: ContactForm) -> Result<Contact, ContentError> {
        self.contact.submit.execute(form).await
    }

    // logo

    pub async fn get_logo(&self) -> Result<Option<LogoAsset>, ContentError> {
        self.logo.get.execute().await
    }

    pub async fn upload_logo(&self, png: Vec<u8>) -> Result<LogoAsset, ContentError> {
        self.logo.upload.execute(png).await
    }

    pub fn logo_public_url(&self, path: &str) -> Option<String> {
        self.logo.urls.url_for(path)
    }
}
