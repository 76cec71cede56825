mod add_education_service;
mod delete_education_service;
mod list_education_service;
mod update_education_service;

pub use add_education_service::AddEducationService;
pub use delete_education_service::DeleteEducationService;
pub use list_education_service::ListEducationService;
pub use update_education_service::UpdateEducationService;
