use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{future::Future, pin::Pin, sync::Arc};

use crate::auth::application::ports::incoming::SessionError;
use crate::auth::application::ports::outgoing::token_provider::{TokenError, TokenProvider};
use crate::auth::domain::entities::{SessionId, UserId};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Caller holding a valid admin bearer token issued for the session the
/// backend holds right now.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub user_id: UserId,
    pub session_id: SessionId,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

type AdminFuture = Pin<Box<dyn Future<Output = Result<AdminUser, ActixError>>>>;

fn reject(response: HttpResponse) -> AdminFuture {
    Box::pin(std::future::ready(Err(create_api_error(response))))
}

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = AdminFuture;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let tokens = match req.app_data::<web::Data<Arc<dyn TokenProvider>>>() {
            Some(service) => service,
            None => {
                tracing::error!("Token provider missing from app data");
                return reject(ApiResponse::internal_error());
            }
        };
        let sessions = match req.app_data::<web::Data<AppState>>() {
            Some(state) => state.sessions.clone(),
            None => {
                tracing::error!("App state missing from app data");
                return reject(ApiResponse::internal_error());
            }
        };

        let token = match extract_token_from_header(req) {
            Some(t) => t,
            None => {
                return reject(ApiResponse::unauthorized(
                    "MISSING_AUTH_HEADER",
                    "Missing or invalid authorization header",
                ));
            }
        };

        let claims = match tokens.verify_token(&token) {
            Ok(claims) => claims,
            Err(TokenError::InvalidTokenType(_)) => {
                return reject(ApiResponse::unauthorized(
                    "INVALID_TOKEN_TYPE",
                    "Invalid token type",
                ));
            }
            Err(_) => {
                return reject(ApiResponse::unauthorized(
                    "INVALID_TOKEN",
                    "Invalid or expired token",
                ));
            }
        };

        let admin = AdminUser {
            user_id: UserId::from(claims.sub),
            session_id: SessionId::from(claims.sid),
        };

        Box::pin(async move {
            match sessions.authorize(admin.user_id, admin.session_id).await {
                Ok(()) => Ok(admin),
                Err(SessionError::TokenMismatch) => Err(create_api_error(
                    ApiResponse::unauthorized(
                        "SESSION_MISMATCH",
                        "Token was not issued for the active session",
                    ),
                )),
                Err(_) => Err(create_api_error(ApiResponse::unauthorized(
                    "NOT_AUTHENTICATED",
                    "No active admin session",
                ))),
            }
        })
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}
