use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, error};

use crate::config::BackendConfig;
use crate::logo::application::ports::outgoing::{ObjectStorage, StorageError};

/// Storage REST client bound to a single bucket.
#[derive(Clone)]
pub struct ObjectStorageHttp {
    client: Client,
    backend: BackendConfig,
    bucket: String,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

impl ObjectStorageHttp {
    pub fn new(client: Client, backend: BackendConfig, bucket: impl Into<String>) -> Self {
        Self {
            client,
            backend,
            bucket: bucket.into(),
        }
    }

    fn bucket_endpoint(&self) -> String {
        format!("{}/storage/v1/object/{}", self.backend.base_url, self.bucket)
    }

    async fn check(response: Response) -> Result<(), StorageError> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&text)
            .ok()
            .and_then(|body| body.message.or(body.error))
            .unwrap_or(text);

        Err(StorageError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl ObjectStorage for ObjectStorageHttp {
    async fn upload(
        &self,
        access_token: &str,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError> {
        debug!(bucket = %self.bucket, path = %path, size = bytes.len(), "Uploading object");

        let response = self
            .client
            .post(format!("{}/{}", self.bucket_endpoint(), path))
            .header("apikey", &self.backend.anon_key)
            .bearer_auth(access_token)
            .header("content-type", content_type)
            .header("x-upsert", "false")
            .body(bytes)
            .send()
            .await
            .map_err(|e| {
                error!("Storage upload failed: {}", e);
                StorageError::Transport(e.to_string())
            })?;

        Self::check(response).await
    }

    async fn remove(&self, access_token: &str, paths: Vec<String>) -> Result<(), StorageError> {
        if paths.is_empty() {
            return Ok(());
        }

        let response = self
            .client
            .delete(self.bucket_endpoint())
            .header("apikey", &self.backend.anon_key)
            .bearer_auth(access_token)
            .json(&json!({ "prefixes": paths }))
            .send()
            .await
            .map_err(|e| {
                error!("Storage remove failed: {}", e);
                StorageError::Transport(e.to_string())
            })?;

        Self::check(response).await
    }
}
