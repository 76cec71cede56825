use actix_web::{patch, web, Responder};
use tracing::info;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::skill::application::ports::incoming::SkillChanges;
use crate::skill::domain::Skill;
use crate::AppState;

/// Update a skill
#[utoipa::path(
    patch,
    path = "/api/admin/skills/{id}",
    tag = "skills",
    params(("id" = Uuid, Path, description = "Skill id")),
    request_body = SkillChanges,
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Skill updated", body = inline(SuccessResponse<Skill>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "No owned skill with this id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[patch("/api/admin/skills/{id}")]
pub async fn update_skill_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<SkillChanges>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    info!(user_id = %admin.user_id, skill_id = %id, "Update skill");

    match data.content.skill.update.execute(id, req.into_inner()).await {
        Ok(updated) => ApiResponse::success(updated),
        Err(e) => ApiResponse::from_content_error(&e, "update skill"),
    }
}
