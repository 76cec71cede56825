use actix_web::{patch, web, Responder};
use tracing::info;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::experience::application::ports::incoming::ExperienceChanges;
use crate::experience::domain::Experience;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Update an experience
///
/// Omitted fields are kept; list fields replace the stored list whole.
#[utoipa::path(
    patch,
    path = "/api/admin/experiences/{id}",
    tag = "experiences",
    params(("id" = Uuid, Path, description = "Experience id")),
    request_body = ExperienceChanges,
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Experience updated", body = inline(SuccessResponse<Experience>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "No owned experience with this id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[patch("/api/admin/experiences/{id}")]
pub async fn update_experience_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<ExperienceChanges>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    info!(user_id = %admin.user_id, experience_id = %id, "Update experience");

    match data
        .content
        .experience
        .update
        .execute(id, req.into_inner())
        .await
    {
        Ok(updated) => ApiResponse::success(updated),
        Err(e) => ApiResponse::from_content_error(&e, "update experience"),
    }
}
