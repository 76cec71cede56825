use actix_web::{get, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::profile::domain::Profile;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get the site profile
///
/// `data` is `null` until a profile has been written.
#[utoipa::path(
    get,
    path = "/api/profile",
    tag = "profile",
    responses(
        (status = 200, description = "Profile or null", body = inline(SuccessResponse<Option<Profile>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/profile")]
pub async fn get_profile_handler(data: web::Data<AppState>) -> impl Responder {
    match data.content.profile.get.execute().await {
        Ok(profile) => ApiResponse::success(profile),
        Err(e) => ApiResponse::from_content_error(&e, "get profile"),
    }
}
