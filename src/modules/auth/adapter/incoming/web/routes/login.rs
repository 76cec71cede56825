use actix_web::{post, web, Responder};
use tracing::{error, info, warn};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::{SignInError, SignInRequest, SignInResponse};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Admin sign-in
///
/// Signs in against the hosted auth service and returns a bearer token for
/// the admin endpoints.
#[utoipa::path(
    post,
    path = "/api/admin/login",
    tag = "auth",
    request_body = SignInRequest,
    responses(
        (
            status = 200,
            description = "Signed in",
            body = inline(SuccessResponse<SignInResponse>),
            example = json!({
                "success": true,
                "data": {
                    "admin_token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
                    "expires_in": 3600,
                    "user": {
                        "id": "123e4567-e89b-12d3-a456-426614174000",
                        "email": "admin@example.com"
                    }
                }
            })
        ),
        (status = 400, description = "Malformed request", body = ErrorResponse),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_CREDENTIALS",
                    "message": "Invalid email or password"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/admin/login")]
pub async fn login_handler(
    req: web::Json<SignInRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let request = req.into_inner();
    info!(email = %request.email(), "Admin login attempt");

    match data.auth.sign_in.execute(request).await {
        Ok(response) => {
            info!(user_id = %response.user.id, "Admin logged in");
            ApiResponse::success(response)
        }
        Err(SignInError::InvalidCredentials) => {
            warn!("Admin login failed: invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }
        Err(SignInError::Gateway(ref e)) => {
            error!(error = %e, "Auth service failed during login");
            ApiResponse::internal_error()
        }
        Err(SignInError::TokenGenerationFailed(ref e)) => {
            error!(error = %e, "Admin token generation failed");
            ApiResponse::internal_error()
        }
    }
}
