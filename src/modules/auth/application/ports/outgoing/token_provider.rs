use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

pub const ADMIN_TOKEN_TYPE: &str = "admin";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TokenClaims {
    pub sub: Uuid,          // Session subject (user id)
    pub sid: Uuid,          // Local session the token was issued for
    pub exp: i64,           // Expiration time
    pub iat: i64,           // Issued at
    pub nbf: i64,           // Not valid before
    pub iss: String,        // Issuer
    pub token_type: String, // Always "admin"
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Token has expired")]
    Expired,

    #[error("Token is not yet valid")]
    NotYetValid,

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Token is malformed")]
    Malformed,

    #[error("Expected a {0} token")]
    InvalidTokenType(String),

    #[error("Token encoding failed: {0}")]
    EncodingFailed(String),
}

/// Issues and verifies the bearer token guarding the admin endpoints.
pub trait TokenProvider: Send + Sync {
    fn generate_admin_token(&self, user_id: Uuid, session_id: Uuid)
        -> Result<String, TokenError>;

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError>;

    fn token_ttl_seconds(&self) -> i64;
}
