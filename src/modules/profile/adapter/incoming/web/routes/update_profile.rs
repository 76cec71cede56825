use actix_web::{put, web, Responder};
use tracing::info;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::profile::application::ports::incoming::ProfileUpdate;
use crate::profile::domain::Profile;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Replace the site profile
///
/// `title` accepts a JSON array or a `/` separated string.
#[utoipa::path(
    put,
    path = "/api/admin/profile",
    tag = "profile",
    request_body = ProfileUpdate,
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Profile updated", body = inline(SuccessResponse<Profile>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "No profile row for this user", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/admin/profile")]
pub async fn update_profile_handler(
    admin: AdminUser,
    req: web::Json<ProfileUpdate>,
    data: web::Data<AppState>,
) -> impl Responder {
    info!(user_id = %admin.user_id, "Update profile");

    match data.content.profile.update.execute(req.into_inner()).await {
        Ok(profile) => ApiResponse::success(profile),
        Err(e) => ApiResponse::from_content_error(&e, "update profile"),
    }
}
