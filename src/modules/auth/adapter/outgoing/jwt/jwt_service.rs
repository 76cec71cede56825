use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use std::fmt;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider, ADMIN_TOKEN_TYPE,
};

use super::jwt_config::JwtConfig;

#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("issuer", &self.config.issuer)
            .finish()
    }
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    fn generate_token(
        &self,
        user_id: Uuid,
        session_id: Uuid,
        token_type: &str,
        expiry_seconds: i64,
    ) -> Result<String, TokenError> {
        let now = Utc::now();
        let expiration = now + Duration::seconds(expiry_seconds);

        let claims = TokenClaims {
            sub: user_id,
            sid: session_id,
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            iss: self.config.issuer.clone(),
            token_type: token_type.to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }
}

impl TokenProvider for JwtTokenService {
    fn generate_admin_token(&self, user_id: Uuid, session_id: Uuid) -> Result<String, TokenError> {
        self.generate_token(
            user_id,
            session_id,
            ADMIN_TOKEN_TYPE,
            self.config.admin_token_expiry,
        )
    }

    /// Verify signature, issuer and time claims, then decode
    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;
        validation.validate_nbf = true;
        validation.set_issuer(&[self.config.issuer.as_str()]);

        let decoded =
            decode::<TokenClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;

                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Token verification failed: Token expired");
                        TokenError::Expired
                    }
                    ErrorKind::ImmatureSignature => {
                        tracing::warn!("Token verification failed: Token not yet valid");
                        TokenError::NotYetValid
                    }
                    ErrorKind::InvalidSignature => {
                        tracing::error!("Security alert: Invalid token signature detected");
                        TokenError::InvalidSignature
                    }
                    ErrorKind::InvalidIssuer => {
                        tracing::warn!("Token verification failed: Foreign issuer");
                        TokenError::InvalidSignature
                    }
                    _ => {
                        tracing::warn!("Token verification failed: Malformed token");
                        TokenError::Malformed
                    }
                }
            })?;

        if decoded.claims.token_type != ADMIN_TOKEN_TYPE {
            tracing::warn!(
                "Token type mismatch: expected '{}', got '{}'",
                ADMIN_TOKEN_TYPE,
                decoded.claims.token_type
            );
            return Err(TokenError::InvalidTokenType(ADMIN_TOKEN_TYPE.to_string()));
        }

        Ok(decoded.claims)
    }

    fn token_ttl_seconds(&self) -> i64 {
        self.config.admin_token_expiry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(secret: &str, issuer: &str, expiry: i64) -> JwtConfig {
        JwtConfig {
            secret_key: secret.to_string(),
            issuer: issuer.to_string(),
            admin_token_expiry: expiry,
        }
    }

    fn service() -> JwtTokenService {
        JwtTokenService::new(config(
            "test_secret_key_for_testing_purposes_only",
            "portfolio-cms-test",
            3600,
        ))
    }

    #[test]
    fn test_generate_and_verify_admin_token() {
        let service = service();
        let user_id = Uuid::new_v4();
        let session_id = Uuid::new_v4();

        let token = service.generate_admin_token(user_id, session_id).unwrap();
        let claims = service.verify_token(&token).unwrap();

        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.sid, session_id);
        assert_eq!(claims.token_type, "admin");
        assert_eq!(claims.iss, "portfolio-cms-test");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_invalid_token_is_malformed() {
        let result = service().verify_token("invalid.jwt.token");
        assert!(matches!(result, Err(TokenError::Malformed)));
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let other = JwtTokenService::new(config(
            "another_secret_key_that_is_long_enough",
            "portfolio-cms-test",
            3600,
        ));
        let token = other.generate_admin_token(Uuid::new_v4(), Uuid::new_v4()).unwrap();

        let result = service().verify_token(&token);
        assert!(matches!(result, Err(TokenError::InvalidSignature)));
    }

    #[test]
    fn test_token_from_other_issuer_is_rejected() {
        let other = JwtTokenService::new(config(
            "test_secret_key_for_testing_purposes_only",
            "someone-else",
            3600,
        ));
        let token = other.generate_admin_token(Uuid::new_v4(), Uuid::new_v4()).unwrap();

        assert!(service().verify_token(&token).is_err());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        // Past the 30s validation leeway.
        let expired = JwtTokenService::new(config(
            "test_secret_key_for_testing_purposes_only",
            "portfolio-cms-test",
            -120,
        ));
        let token = expired.generate_admin_token(Uuid::new_v4(), Uuid::new_v4()).unwrap();

        assert!(matches!(service().verify_token(&token), Err(TokenError::Expired)));
    }

    #[test]
    fn test_wrong_token_type_is_rejected() {
        let service = service();
        let token = service
            .generate_token(Uuid::new_v4(), Uuid::new_v4(), "refresh", 3600)
            .unwrap();

        let result = service.verify_token(&token);
        assert!(matches!(result, Err(TokenError::InvalidTokenType(_))));
    }
}
