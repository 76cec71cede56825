use std::sync::Arc;

use async_trait::async_trait;
use email_address::EmailAddress;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::auth::application::ports::outgoing::{AuthGatewayError, TokenProvider};
use crate::auth::application::SessionManager;
use crate::auth::domain::entities::SessionUser;

// ========================= Sign-in Request =========================
/// Validated sign-in request, deserialized straight from JSON.
#[derive(Debug, Clone, ToSchema)]
pub struct SignInRequest {
    #[schema(example = "admin@example.com")]
    email: String,
    #[schema(example = "secret")]
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignInRequestError {
    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Invalid email format")]
    InvalidEmailFormat,

    #[error("Password cannot be empty")]
    EmptyPassword,
}

impl SignInRequest {
    pub fn new(email: String, password: String) -> Result<Self, SignInRequestError> {
        let email = Self::validate_email(email)?;
        if password.trim().is_empty() {
            return Err(SignInRequestError::EmptyPassword);
        }

        Ok(Self { email, password })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    fn validate_email(email: String) -> Result<String, SignInRequestError> {
        let email = email.trim();

        if email.is_empty() {
            return Err(SignInRequestError::EmptyEmail);
        }

        if !EmailAddress::is_valid(email) {
            return Err(SignInRequestError::InvalidEmailFormat);
        }

        Ok(email.to_lowercase())
    }
}

impl<'de> Deserialize<'de> for SignInRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct SignInRequestHelper {
            email: String,
            password: String,
        }

        let helper = SignInRequestHelper::deserialize(deserializer)?;
        SignInRequest::new(helper.email, helper.password).map_err(serde::de::Error::custom)
    }
}

// ====================== Sign-in Error =============================
#[derive(Debug, Clone, Error)]
pub enum SignInError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Auth service error: {0}")]
    Gateway(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),
}

// ============================ Sign-in Response =================================
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SignInResponse {
    /// Bearer token for the admin endpoints.
    pub admin_token: String,
    pub expires_in: i64,
    pub user: SessionUser,
}

#[async_trait]
pub trait ISignInUseCase: Send + Sync {
    async fn execute(&self, request: SignInRequest) -> Result<SignInResponse, SignInError>;
}

#[derive(Clone)]
pub struct SignInUseCase {
    sessions: Arc<SessionManager>,
    tokens: Arc<dyn TokenProvider>,
}

impl SignInUseCase {
    pub fn new(sessions: Arc<SessionManager>, tokens: Arc<dyn TokenProvider>) -> Self {
        Self { sessions, tokens }
    }
}

#[async_trait]
impl ISignInUseCase for SignInUseCase {
    async fn execute(&self, request: SignInRequest) -> Result<SignInResponse, SignInError> {
        let (session_id, session) = self
            .sessions
            .sign_in(request.email(), request.password())
            .await
            .map_err(|e| match e {
                AuthGatewayError::InvalidCredentials => SignInError::InvalidCredentials,
                other => SignInError::Gateway(other.to_string()),
            })?;

        let admin_token = self
            .tokens
            .generate_admin_token(session.user.id.value(), session_id.value())
            .map_err(|e| SignInError::TokenGenerationFailed(e.to_string()))?;

        Ok(SignInResponse {
            admin_token,
            expires_in: self.tokens.token_ttl_seconds(),
            user: session.user,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
    use crate::auth::application::session_manager::tests::StubGateway;
    use chrono::Duration;
    use uuid::Uuid;

    fn tokens() -> Arc<dyn TokenProvider> {
        Arc::new(JwtTokenService::new(JwtConfig {
            secret_key: "test_secret_key_for_testing_purposes_only".to_string(),
            issuer: "portfolio-cms-test".to_string(),
            admin_token_expiry: 3600,
        }))
    }

    fn use_case(gateway: Arc<StubGateway>) -> (SignInUseCase, Arc<SessionManager>) {
        let sessions = Arc::new(SessionManager::new(gateway, Duration::seconds(30)));
        (SignInUseCase::new(sessions.clone(), tokens()), sessions)
    }

    #[test]
    fn test_request_rejects_bad_email() {
        let err = SignInRequest::new("not-an-email".to_string(), "pw".to_string()).unwrap_err();
        assert_eq!(err, SignInRequestError::InvalidEmailFormat);

        let err = SignInRequest::new("  ".to_string(), "pw".to_string()).unwrap_err();
        assert_eq!(err, SignInRequestError::EmptyEmail);
    }

    #[test]
    fn test_request_rejects_blank_password() {
        let err = SignInRequest::new("admin@example.com".to_string(), "   ".to_string())
            .unwrap_err();
        assert_eq!(err, SignInRequestError::EmptyPassword);
    }

    #[test]
    fn test_request_normalizes_email() {
        let request: SignInRequest =
            serde_json::from_str(r#"{"email":" Admin@Example.com ","password":"pw"}"#).unwrap();
        assert_eq!(request.email(), "admin@example.com");
    }

    #[tokio::test]
    async fn test_sign_in_issues_admin_token_for_subject() {
        let user_id = Uuid::new_v4();
        let (use_case, sessions) = use_case(Arc::new(StubGateway::new(user_id)));
        let request =
            SignInRequest::new("admin@example.com".to_string(), "correct-password".to_string())
                .unwrap();

        let response = use_case.execute(request).await.unwrap();

        assert_eq!(response.user.id.value(), user_id);
        assert_eq!(response.expires_in, 3600);
        let claims = tokens().verify_token(&response.admin_token).unwrap();
        assert_eq!(claims.sub, user_id);
        assert_eq!(Some(claims.sid), sessions.session_id().await.map(|id| id.value()));
        assert!(sessions.is_authenticated());
    }

    #[tokio::test]
    async fn test_sign_in_with_wrong_password() {
        let (use_case, sessions) = use_case(Arc::new(StubGateway::new(Uuid::new_v4())));
        let request =
            SignInRequest::new("admin@example.com".to_string(), "wrong".to_string()).unwrap();

        let result = use_case.execute(request).await;

        assert!(matches!(result, Err(SignInError::InvalidCredentials)));
        assert!(!sessions.is_authenticated());
    }
}
