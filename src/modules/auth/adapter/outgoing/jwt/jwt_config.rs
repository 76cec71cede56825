use std::env;

use anyhow::{bail, Context};

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub admin_token_expiry: i64, // Expiration in seconds
}

impl JwtConfig {
    /// Load admin token configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        let secret_key =
            env::var("ADMIN_JWT_SECRET").context("ADMIN_JWT_SECRET must be set")?;

        // HS256 wants at least 32 bytes of key
        if secret_key.len() < 32 {
            bail!("ADMIN_JWT_SECRET must be at least 32 characters long for HS256 algorithm");
        }

        let admin_token_expiry = env::var("ADMIN_JWT_EXPIRY")
            .unwrap_or_else(|_| "3600".to_string())
            .parse::<i64>()
            .context("Invalid ADMIN_JWT_EXPIRY value")?;

        if admin_token_expiry <= 0 || admin_token_expiry > 86400 {
            bail!("ADMIN_JWT_EXPIRY must be between 1 and 86400 seconds (24 hours)");
        }

        let issuer = env::var("ADMIN_JWT_ISSUER").unwrap_or_else(|_| "portfolio-cms".to_string());

        Ok(Self {
            secret_key,
            issuer,
            admin_token_expiry,
        })
    }
}
