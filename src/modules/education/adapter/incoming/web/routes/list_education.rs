use actix_web::{get, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::education::domain::Education;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List education entries, newest first
#[utoipa::path(
    get,
    path = "/api/education",
    tag = "education",
    responses(
        (status = 200, description = "All education entries", body = inline(SuccessResponse<Vec<Education>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/education")]
pub async fn list_education_handler(data: web::Data<AppState>) -> impl Responder {
    match data.content.education.list.execute().await {
        Ok(entries) => ApiResponse::success(entries),
        Err(e) => ApiResponse::from_content_error(&e, "list education"),
    }
}
