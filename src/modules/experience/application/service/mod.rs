mod add_experience_service;
mod delete_experience_service;
mod list_experiences_service;
mod update_experience_service;

pub use add_experience_service::AddExperienceService;
pub use delete_experience_service::DeleteExperienceService;
pub use list_experiences_service::ListExperiencesService;
pub use update_experience_service::UpdateExperienceService;
