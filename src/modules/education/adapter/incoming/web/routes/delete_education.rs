use actix_web::{delete, web, Responder};
use tracing::info;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete an education entry
#[utoipa::path(
    delete,
    path = "/api/admin/education/{id}",
    tag = "education",
    params(("id" = Uuid, Path, description = "Education entry id")),
    security(("BearerAuth" = [])),
    responses(
        (status = 204, description = "Education entry deleted"),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "No owned entry with this id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/admin/education/{id}")]
pub async fn delete_education_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    info!(user_id = %admin.user_id, education_id = %id, "Delete education");

    match data.content.education.delete.execute(id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => ApiResponse::from_content_error(&e, "delete education"),
    }
}
