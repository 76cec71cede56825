use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

use crate::auth::application::ports::incoming::SessionProvider;
use crate::logo::application::ports::incoming::UploadLogoUseCase;
use crate::logo::application::ports::outgoing::{LogoRepository, NewLogoRecord, ObjectStorage};
use crate::logo::domain::{LogoAsset, LogoUploadPolicy, PublicUrlBase};
use crate::shared::ContentError;

pub struct UploadLogoService<R, S>
where
    R: LogoRepository,
    S: ObjectStorage,
{
    repository: R,
    storage: S,
    sessions: Arc<dyn SessionProvider>,
    urls: PublicUrlBase,
    policy: LogoUploadPolicy,
    // Uploads run one at a time so replace never races another replace.
    upload_gate: Mutex<()>,
}

impl<R, S> UploadLogoService<R, S>
where
    R: LogoRepository,
    S: ObjectStorage,
{
    pub fn new(
        repository: R,
        storage: S,
        sessions: Arc<dyn SessionProvider>,
        urls: PublicUrlBase,
        policy: LogoUploadPolicy,
    ) -> Self {
        Self {
            repository,
            storage,
            sessions,
            urls,
            policy,
            upload_gate: Mutex::new(()),
        }
    }
}

#[async_trait]
impl<R, S> UploadLogoUseCase for UploadLogoService<R, S>
where
    R: LogoRepository + Send + Sync,
    S: ObjectStorage + Send + Sync,
{
    async fn execute(&self, png: Vec<u8>) -> Result<LogoAsset, ContentError> {
        let session = self.sessions.current_session().await?;
        let token = session.access_token.as_str();

        self.policy
            .check(&png)
            .map_err(|e| ContentError::Invalid(e.to_string()))?;

        let _gate = self.upload_gate.lock().await;

        // Old files first, then their rows. Clears strays left by earlier races too.
        let previous = self.repository.all().await?;
        if !previous.is_empty() {
            let paths = previous.iter().map(|logo| logo.storage_path.clone()).collect();
            self.storage.remove(token, paths).await?;
            for logo in &previous {
                self.repository.delete(logo.id).await?;
                info!(logo_id = %logo.id, "Previous logo removed");
            }
        }

        let file_name = LogoUploadPolicy::file_name(Utc::now().timestamp_millis());
        let storage_path = file_name.clone();

        self.storage
            .upload(token, &storage_path, png, LogoUploadPolicy::CONTENT_TYPE)
            .await?;

        let record = NewLogoRecord {
            file_name,
            storage_path: storage_path.clone(),
        };

        match self.repository.create(record).await {
            Ok(logo) => {
                info!(logo_id = %logo.id, path = %logo.storage_path, "Logo uploaded");
                Ok(self.urls.asset(logo))
            }
            Err(e) => {
                warn!(path = %storage_path, "Logo row insert failed, removing uploaded file");
                if let Err(cleanup) = self.storage.remove(token, vec![storage_path]).await {
                    error!("Failed to remove orphaned logo file: {}", cleanup);
                }
                Err(e.into())
            }
        }
    }
}
