mod add_project_service;
mod delete_project_service;
mod list_projects_service;
mod update_project_service;

pub use add_project_service::AddProjectService;
pub use delete_project_service::DeleteProjectService;
pub use list_projects_service::ListProjectsService;
pub use update_project_service::UpdateProjectService;
