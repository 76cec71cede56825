use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::use_cases::ISignOutUseCase;
use crate::content_store::ContentStore;
use crate::dashboard::application::ports::outgoing::DashboardBackend;
use crate::dashboard::domain::{CacheKey, CollectionData, FormPayload, Tab};
use crate::shared::ContentError;

/// Drives the dashboard against the content store and the admin session.
#[derive(Clone)]
pub struct ContentStoreBackend {
    store: ContentStore,
    sign_out: Arc<dyn ISignOutUseCase>,
}

impl ContentStoreBackend {
    pub fn new(store: ContentStore, sign_out: Arc<dyn ISignOutUseCase>) -> Self {
        Self { store, sign_out }
    }
}

#[async_trait]
impl DashboardBackend for ContentStoreBackend {
    async fn fetch(&self, key: CacheKey) -> Result<CollectionData, ContentError> {
        let store = &self.store;
        Ok(match key {
            CacheKey::Profile => CollectionData::Profile(store.get_profile().await?),
            CacheKey::Experiences => CollectionData::Experiences(store.list_experiences().await?),
            CacheKey::Education => CollectionData::Education(store.list_education().await?),
            CacheKey::Skills => CollectionData::Skills(store.list_skills().await?),
            CacheKey::Projects => CollectionData::Projects(store.list_projects().await?),
            CacheKey::Contacts => CollectionData::Contacts(store.list_contacts().await?),
            CacheKey::Logo => CollectionData::Logo(store.get_logo().await?),
        })
    }

    async fn save(&self, payload: FormPayload, target: Option<Uuid>) -> Result<(), ContentError> {
        let store = &self.store;
        match (payload, target) {
            (FormPayload::Profile(update), _) => store.update_profile(update).await.map(drop),
            (FormPayload::Experience(input), None) => store.add_experience(input).await.map(drop),
            (FormPayload::Experience(input), Some(id)) => {
                store.update_experience(id, input.into()).await.map(drop)
            }
            (FormPayload::Education(input), None) => store.add_education(input).await.map(drop),
            (FormPayload::Education(input), Some(id)) => {
                store.update_education(id, input.into()).await.map(drop)
            }
            (FormPayload::Skill(input), None) => store.add_skill(input).await.map(drop),
            (FormPayload::Skill(input), Some(id)) => {
                store.update_skill(id, input.into()).await.map(drop)
            }
            (FormPayload::Project(input), None) => store.add_project(input).await.map(drop),
            (FormPayload::Project(input), Some(id)) => {
                store.update_project(id, input.into()).await.map(drop)
            }
        }
    }

    async fn delete(&self, tab: Tab, id: Uuid) -> Result<(), ContentError> {
        let store = &self.store;
        match tab {
            Tab::Experience => store.delete_experience(id).await,
            Tab::Education => store.delete_education(id).await,
            Tab::Skills => store.delete_skill(id).await,
            Tab::Projects => store.delete_project(id).await,
            Tab::Dashboard | Tab::Profile | Tab::Contacts => Err(ContentError::Invalid(format!(
                "records in the {} tab cannot be deleted",
                tab
            ))),
        }
    }

    async fn sign_out(&self) -> Result<(), ContentError> {
        self.sign_out
            .execute()
            .await
            .map_err(|e| ContentError::Backend(e.to_string()))
    }
}
