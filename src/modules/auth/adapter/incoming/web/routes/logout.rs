use actix_web::{post, web, Responder};
use serde::Serialize;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::auth::application::use_cases::SignOutError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct LogoutResponseBody {
    #[schema(example = "Logged out successfully")]
    message: String,
}

/// Admin sign-out
///
/// The local session is always cleared; a failed remote sign-out is only
/// logged.
#[utoipa::path(
    post,
    path = "/api/admin/logout",
    tag = "auth",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Signed out", body = inline(SuccessResponse<LogoutResponseBody>)),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
    )
)]
#[post("/api/admin/logout")]
pub async fn logout_handler(admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    info!(user_id = %admin.user_id, "Admin logout");

    match data.auth.sign_out.execute().await {
        Ok(()) => info!("Admin logged out"),
        Err(SignOutError::Remote(ref e)) => {
            error!(error = %e, "Remote sign-out failed");
        }
    }

    ApiResponse::success(LogoutResponseBody {
        message: "Logged out successfully".to_string(),
    })
}
