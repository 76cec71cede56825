use std::env;

use anyhow::{bail, Context};
use chrono::Duration;

use crate::auth::adapter::outgoing::jwt::JwtConfig;

/// Hosted backend the auth and storage services live on.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Project URL without trailing slash.
    pub base_url: String,
    /// Public `apikey` sent on every request.
    pub anon_key: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub backend: BackendConfig,
    pub logo_bucket: String,
    pub jwt: JwtConfig,
    pub session_expiry_leeway: Duration,
    pub refresh_token: Option<String>,
}

impl AppConfig {
    /// Loads `.env.{RUST_ENV}` (falling back to `.env`) and reads the process
    /// environment.
    pub fn load() -> anyhow::Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        if dotenvy::from_filename(format!(".env.{}", env_name)).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_env()
    }

    pub fn from_env() -> anyhow::Result<Self> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .context("Invalid PORT value")?;
        let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

        let base_url = env::var("BACKEND_URL").context("BACKEND_URL must be set")?;
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            bail!("BACKEND_URL cannot be empty");
        }
        let anon_key = env::var("BACKEND_ANON_KEY").context("BACKEND_ANON_KEY must be set")?;

        let logo_bucket = env::var("LOGO_BUCKET").unwrap_or_else(|_| "logos".to_string());

        let leeway_secs = env::var("SESSION_EXPIRY_LEEWAY")
            .unwrap_or_else(|_| "30".to_string())
            .parse::<i64>()
            .context("Invalid SESSION_EXPIRY_LEEWAY value")?;
        if leeway_secs < 0 {
            bail!("SESSION_EXPIRY_LEEWAY cannot be negative");
        }

        let refresh_token = env::var("BACKEND_REFRESH_TOKEN")
            .ok()
            .filter(|token| !token.trim().is_empty());

        Ok(Self {
            host,
            port,
            database_url,
            backend: BackendConfig { base_url, anon_key },
            logo_bucket,
            jwt: JwtConfig::from_env()?,
            session_expiry_leeway: Duration::seconds(leeway_secs),
            refresh_token,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
