use actix_web::{get, web, Responder};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::auth::domain::entities::SessionUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct SessionStatus {
    /// Whether a backend session is held.
    pub authenticated: bool,
    pub user: Option<SessionUser>,
    pub expires_at: Option<DateTime<Utc>>,
}

/// Backend session status
///
/// Reports the stored session without refreshing it.
#[utoipa::path(
    get,
    path = "/api/admin/session",
    tag = "auth",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Session status", body = inline(SuccessResponse<SessionStatus>)),
        (status = 401, description = "Missing or invalid admin token", body = ErrorResponse),
    )
)]
#[get("/api/admin/session")]
pub async fn session_handler(_admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    let status = match data.sessions.snapshot().await {
        Some(session) => SessionStatus {
            authenticated: data.sessions.is_authenticated(),
            user: Some(session.user),
            expires_at: Some(session.expires_at),
        },
        None => SessionStatus {
            authenticated: false,
            user: None,
            expires_at: None,
        },
    };

    ApiResponse::success(status)
}
