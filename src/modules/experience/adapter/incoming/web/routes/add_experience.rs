use actix_web::{post, web, Responder};
use tracing::info;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::experience::application::ports::incoming::NewExperience;
use crate::experience::domain::Experience;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Add an experience
///
/// `achievements` and `tech` accept a JSON array or a comma separated string.
#[utoipa::path(
    post,
    path = "/api/admin/experiences",
    tag = "experiences",
    request_body = NewExperience,
    security(("BearerAuth" = [])),
    responses(
        (status = 201, description = "Experience created", body = inline(SuccessResponse<Experience>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/admin/experiences")]
pub async fn add_experience_handler(
    admin: AdminUser,
    req: web::Json<NewExperience>,
    data: web::Data<AppState>,
) -> impl Responder {
    info!(user_id = %admin.user_id, "Add experience");

    match data.content.experience.add.execute(req.into_inner()).await {
        Ok(created) => ApiResponse::created(created),
        Err(e) => ApiResponse::from_content_error(&e, "add experience"),
    }
}
