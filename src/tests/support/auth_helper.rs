use std::sync::Arc;

use uuid::Uuid;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::TokenProvider;
use crate::AppState;

pub fn test_jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        secret_key: std::env::var("TEST_ADMIN_JWT_SECRET")
            .unwrap_or_else(|_| "test_secret_key_for_testing_purposes_only".to_string()),
        issuer: "portfolio-cms-test".to_string(),
        admin_token_expiry: 3600,
    })
}

pub fn test_token_provider() -> Arc<dyn TokenProvider> {
    Arc::new(test_jwt_service())
}

/// `Authorization` header value carrying a fresh admin token.
pub fn admin_bearer(user_id: Uuid, session_id: Uuid) -> String {
    let token = test_jwt_service()
        .generate_admin_token(user_id, session_id)
        .expect("admin token should be generated");
    format!("Bearer {}", token)
}

/// Signs the state's session manager in and returns a bearer bound to that
/// sign-in.
pub async fn signed_in_bearer(state: &AppState) -> String {
    let (session_id, session) = state
        .sessions
        .sign_in("admin@example.com", "correct-password")
        .await
        .expect("stub gateway should accept the test password");
    admin_bearer(session.user.id.value(), session_id.value())
}
