use actix_web::{post, web, Responder};
use tracing::info;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::skill::application::ports::incoming::NewSkill;
use crate::skill::domain::Skill;
use crate::AppState;

/// Add a skill
#[utoipa::path(
    post,
    path = "/api/admin/skills",
    tag = "skills",
    request_body = NewSkill,
    security(("BearerAuth" = [])),
    responses(
        (status = 201, description = "Skill created", body = inline(SuccessResponse<Skill>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/admin/skills")]
pub async fn add_skill_handler(
    admin: AdminUser,
    req: web::Json<NewSkill>,
    data: web::Data<AppState>,
) -> impl Responder {
    info!(user_id = %admin.user_id, "Add skill");

    match data.content.skill.add.execute(req.into_inner()).await {
        Ok(created) => ApiResponse::created(created),
        Err(e) => ApiResponse::from_content_error(&e, "add skill"),
    }
}
