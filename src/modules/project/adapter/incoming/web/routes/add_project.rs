use actix_web::{post, web, Responder};
use tracing::info;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::project::application::ports::incoming::NewProject;
use crate::project::domain::Project;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Add a project
///
/// `tech` accepts a JSON array or a comma separated string.
#[utoipa::path(
    post,
    path = "/api/admin/projects",
    tag = "projects",
    request_body = NewProject,
    security(("BearerAuth" = [])),
    responses(
        (status = 201, description = "Project created", body = inline(SuccessResponse<Project>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/admin/projects")]
pub async fn add_project_handler(
    admin: AdminUser,
    req: web::Json<NewProject>,
    data: web::Data<AppState>,
) -> impl Responder {
    info!(user_id = %admin.user_id, "Add project");

    match data.content.project.add.execute(req.into_inner()).await {
        Ok(created) => ApiResponse::created(created),
        Err(e) => ApiResponse::from_content_error(&e, "add project"),
    }
}
