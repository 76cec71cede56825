use actix_web::{patch, web, Responder};
use tracing::info;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::education::application::ports::incoming::EducationChanges;
use crate::education::domain::Education;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Update an education entry
#[utoipa::path(
    patch,
    path = "/api/admin/education/{id}",
    tag = "education",
    params(("id" = Uuid, Path, description = "Education entry id")),
    request_body = EducationChanges,
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Education entry updated", body = inline(SuccessResponse<Education>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "No owned entry with this id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[patch("/api/admin/education/{id}")]
pub async fn update_education_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<EducationChanges>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    info!(user_id = %admin.user_id, education_id = %id, "Update education");

    match data
        .content
        .education
        .update
        .execute(id, req.into_inner())
        .await
    {
        Ok(updated) => ApiResponse::success(updated),
        Err(e) => ApiResponse::from_content_error(&e, "update education"),
    }
}
