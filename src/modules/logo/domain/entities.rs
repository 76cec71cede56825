use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Logo {
    pub id: Uuid,
    #[schema(example = "logo-1717171717171.png")]
    pub file_name: String,
    /// Object path inside the logo bucket.
    pub storage_path: String,
    pub created_at: DateTime<Utc>,
}

/// Logo record plus its resolved public URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct LogoAsset {
    #[serde(flatten)]
    pub logo: Logo,
    pub public_url: Option<String>,
}

/// Public object URL: `{base}/storage/v1/object/public/{bucket}/{path}`.
///
/// An empty path has no URL.
pub fn logo_public_url(base_url: &str, bucket: &str, path: &str) -> Option<String> {
    let path = path.trim().trim_start_matches('/');
    if path.is_empty() {
        return None;
    }

    Some(format!(
        "{}/storage/v1/object/public/{}/{}",
        base_url.trim_end_matches('/'),
        bucket,
        path
    ))
}

/// Storage location public logo URLs are resolved against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicUrlBase {
    pub base_url: String,
    pub bucket: String,
}

impl PublicUrlBase {
    pub fn new(base_url: impl Into<String>, bucket: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            bucket: bucket.into(),
        }
    }

    pub fn url_for(&self, path: &str) -> Option<String> {
        logo_public_url(&self.base_url, &self.bucket, path)
    }

    pub fn asset(&self, logo: Logo) -> LogoAsset {
        let public_url = self.url_for(&logo.storage_path);
        LogoAsset { logo, public_url }
    }
}
