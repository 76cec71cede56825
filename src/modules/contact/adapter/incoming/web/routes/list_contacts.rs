use actix_web::{get, web, Responder};
use tracing::info;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::contact::domain::Contact;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List contact messages, newest first
#[utoipa::path(
    get,
    path = "/api/admin/contacts",
    tag = "contacts",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Inbox", body = inline(SuccessResponse<Vec<Contact>>)),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/admin/contacts")]
pub async fn list_contacts_handler(
    admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    info!(user_id = %admin.user_id, "List contacts");

    match data.content.contact.list.execute().await {
        Ok(contacts) => ApiResponse::success(contacts),
        Err(e) => ApiResponse::from_content_error(&e, "list contacts"),
    }
}
