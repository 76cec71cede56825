use actix_web::{put, web, Responder};
use tracing::info;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::logo::domain::LogoAsset;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Replace the site logo
///
/// The request body is the raw PNG file.
#[utoipa::path(
    put,
    path = "/api/admin/logo",
    tag = "logo",
    security(("BearerAuth" = [])),
    request_body(content = Vec<u8>, content_type = "image/png"),
    responses(
        (status = 200, description = "Logo replaced", body = inline(SuccessResponse<LogoAsset>)),
        (status = 400, description = "Not a PNG or too large", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/admin/logo")]
pub async fn upload_logo_handler(
    admin: AdminUser,
    data: web::Data<AppState>,
    body: web::Bytes,
) -> impl Responder {
    info!(user_id = %admin.user_id, size = body.len(), "Upload logo");

    match data.content.logo.upload.execute(body.to_vec()).await {
        Ok(asset) => ApiResponse::success(asset),
        Err(e) => ApiResponse::from_content_error(&e, "upload logo"),
    }
}
