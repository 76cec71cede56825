use actix_web::{post, web, Responder};
use tracing::info;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::education::application::ports::incoming::NewEducation;
use crate::education::domain::Education;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Add an education entry
#[utoipa::path(
    post,
    path = "/api/admin/education",
    tag = "education",
    request_body = NewEducation,
    security(("BearerAuth" = [])),
    responses(
        (status = 201, description = "Education entry created", body = inline(SuccessResponse<Education>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/admin/education")]
pub async fn add_education_handler(
    admin: AdminUser,
    req: web::Json<NewEducation>,
    data: web::Data<AppState>,
) -> impl Responder {
    info!(user_id = %admin.user_id, "Add education");

    match data.content.education.add.execute(req.into_inner()).await {
        Ok(created) => ApiResponse::created(created),
        Err(e) => ApiResponse::from_content_error(&e, "add education"),
    }
}
