use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::auth::adapter::incoming::web::routes::{LogoutResponseBody, SessionStatus};
use crate::auth::application::use_cases::{SignInRequest, SignInResponse};
use crate::auth::domain::entities::SessionUser;
use crate::contact::application::ports::incoming::ContactForm;
use crate::contact::domain::Contact;
use crate::education::application::ports::incoming::{EducationChanges, NewEducation};
use crate::education::domain::Education;
use crate::experience::application::ports::incoming::{ExperienceChanges, NewExperience};
use crate::experience::domain::Experience;
use crate::logo::domain::LogoAsset;
use crate::profile::application::ports::incoming::ProfileUpdate;
use crate::profile::domain::Profile;
use crate::project::application::ports::incoming::{NewProject, ProjectChanges};
use crate::project::domain::Project;
use crate::shared::ListInput;
use crate::skill::application::ports::incoming::{NewSkill, SkillChanges};
use crate::skill::domain::{Skill, SkillCategory};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio CMS API",
        version = "1.0.0",
        description = "Public portfolio content and the admin endpoints that edit it",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Admin session
        crate::auth::adapter::incoming::web::routes::login_handler,
        crate::auth::adapter::incoming::web::routes::logout_handler,
        crate::auth::adapter::incoming::web::routes::session_handler,

        // Profile
        crate::profile::adapter::incoming::web::routes::get_profile_handler,
        crate::profile::adapter::incoming::web::routes::update_profile_handler,

        // Experience
        crate::experience::adapter::incoming::web::routes::list_experiences_handler,
        crate::experience::adapter::incoming::web::routes::add_experience_handler,
        crate::experience::adapter::incoming::web::routes::update_experience_handler,
        crate::experience::adapter::incoming::web::routes::delete_experience_handler,

        // Education
        crate::education::adapter::incoming::web::routes::list_education_handler,
        crate::education::adapter::incoming::web::routes::add_education_handler,
        crate::education::adapter::incoming::web::routes::update_education_handler,
        crate::education::adapter::incoming::web::routes::delete_education_handler,

        // Skills
        crate::skill::adapter::incoming::web::routes::list_skills_handler,
        crate::skill::adapter::incoming::web::routes::add_skill_handler,
        crate::skill::adapter::incoming::web::routes::update_skill_handler,
        crate::skill::adapter::incoming::web::routes::delete_skill_handler,

        // Projects
        crate::project::adapter::incoming::web::routes::list_projects_handler,
        crate::project::adapter::incoming::web::routes::add_project_handler,
        crate::project::adapter::incoming::web::routes::update_project_handler,
        crate::project::adapter::incoming::web::routes::delete_project_handler,

        // Contacts
        crate::contact::adapter::incoming::web::routes::submit_contact_handler,
        crate::contact::adapter::incoming::web::routes::list_contacts_handler,

        // Logo
        crate::logo::adapter::incoming::web::routes::get_logo_handler,
        crate::logo::adapter::incoming::web::routes::upload_logo_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<Profile>,
            ErrorResponse,
            ErrorDetail,

            // Admin session
            SignInRequest,
            SignInResponse,
            SessionUser,
            SessionStatus,
            LogoutResponseBody,

            // Content
            ListInput,
            Profile,
            ProfileUpdate,
            Experience,
            NewExperience,
            ExperienceChanges,
            Education,
            NewEducation,
            EducationChanges,
            Skill,
            SkillCategory,
            NewSkill,
            SkillChanges,
            Project,
            NewProject,
            ProjectChanges,
            Contact,
            ContactForm,
            LogoAsset
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Admin session endpoints"),
        (name = "profile", description = "Portfolio owner profile"),
        (name = "experiences", description = "Work experience entries"),
        (name = "education", description = "Education entries"),
        (name = "skills", description = "Skill entries"),
        (name = "projects", description = "Project entries"),
        (name = "contacts", description = "Visitor contact submissions"),
        (name = "logo", description = "Site logo"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Admin token returned by /api/admin/login"))
                        .build(),
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_admin_and_public_paths() {
        let doc = ApiDoc::openapi();

        for path in [
            "/api/admin/login",
            "/api/admin/session",
            "/api/profile",
            "/api/admin/experiences/{id}",
            "/api/contacts",
            "/api/admin/logo",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }

    #[test]
    fn test_document_declares_bearer_scheme() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");

        assert!(components.security_schemes.contains_key("BearerAuth"));
    }
}
