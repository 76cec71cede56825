use async_trait::async_trait;
use thiserror::Error;

use crate::auth::domain::entities::Session;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthGatewayError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Refresh token rejected")]
    InvalidRefreshToken,

    #[error("Auth service rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Auth service unreachable: {0}")]
    Transport(String),

    #[error("Unexpected auth service response: {0}")]
    MalformedResponse(String),
}

impl AuthGatewayError {
    /// True when the service answered and said no, as opposed to a network or
    /// decoding failure.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            AuthGatewayError::InvalidCredentials
                | AuthGatewayError::InvalidRefreshToken
                | AuthGatewayError::Rejected { .. }
        )
    }
}

/// The hosted password / refresh-token auth service.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, AuthGatewayError>;

    async fn refresh_session(&self, refresh_token: &str) -> Result<Session, AuthGatewayError>;

    async fn sign_out(&self, access_token: &str) -> Result<(), AuthGatewayError>;
}
