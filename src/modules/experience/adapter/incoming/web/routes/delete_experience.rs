use actix_web::{delete, web, Responder};
use tracing::info;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete an experience
#[utoipa::path(
    delete,
    path = "/api/admin/experiences/{id}",
    tag = "experiences",
    params(("id" = Uuid, Path, description = "Experience id")),
    security(("BearerAuth" = [])),
    responses(
        (status = 204, description = "Experience deleted"),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "No owned experience with this id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/admin/experiences/{id}")]
pub async fn delete_experience_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    info!(user_id = %admin.user_id, experience_id = %id, "Delete experience");

    match data.content.experience.delete.execute(id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => ApiResponse::from_content_error(&e, "delete experience"),
    }
}
