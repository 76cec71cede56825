use async_trait::async_trait;
use uuid::Uuid;

use crate::dashboard::domain::{CacheKey, CollectionData, FormPayload, Tab};
use crate::shared::ContentError;

/// What the dashboard needs from the content store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DashboardBackend: Send + Sync {
    async fn fetch(&self, key: CacheKey) -> Result<CollectionData, ContentError>;

    /// Creates when `target` is `None`, updates the row otherwise. A profile
    /// payload is always an update.
    async fn save(&self, payload: FormPayload, target: Option<Uuid>) -> Result<(), ContentError>;

    async fn delete(&self, tab: Tab, id: Uuid) -> Result<(), ContentError>;

    async fn sign_out(&self) -> Result<(), ContentError>;
}
