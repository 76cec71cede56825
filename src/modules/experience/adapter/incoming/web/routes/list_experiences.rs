use actix_web::{get, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::experience::domain::Experience;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List experiences, newest first
#[utoipa::path(
    get,
    path = "/api/experiences",
    tag = "experiences",
    responses(
        (status = 200, description = "All experiences", body = inline(SuccessResponse<Vec<Experience>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/experiences")]
pub async fn list_experiences_handler(data: web::Data<AppState>) -> impl Responder {
    match data.content.experience.list.execute().await {
        Ok(experiences) => ApiResponse::success(experiences),
        Err(e) => ApiResponse::from_content_error(&e, "list experiences"),
    }
}
