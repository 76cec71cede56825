//! Library entry point for an admin UI client. Not mounted on the HTTP server.

use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::dashboard::application::ports::outgoing::DashboardBackend;
use crate::dashboard::application::query_cache::QueryCache;
use crate::dashboard::domain::{
    CollectionData, FormError, FormFields, FormPayload, FormType, Item, Notice, Tab,
};
use crate::shared::ContentError;

/// In-flight mutation, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Deleting,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    #[error("No form is open")]
    FormClosed,

    #[error(transparent)]
    Form(#[from] FormError),

    #[error("A {item} record does not belong to the {active} tab")]
    WrongTab { item: Tab, active: Tab },

    #[error("The record being edited has no identifier")]
    MissingIdentifier,

    #[error("Records in the {0} tab cannot be deleted")]
    NotDeletable(Tab),

    #[error(transparent)]
    Content(#[from] ContentError),
}

/// Tabbed admin state over the content store.
///
/// Reads go through the query cache and are only issued for the active tab.
/// A successful mutation invalidates the tab's cache key; a failed one
/// leaves form and cache as they were.
pub struct DashboardController<B>
where
    B: DashboardBackend,
{
    backend: B,
    cache: QueryCache,
    active_tab: Tab,
    is_form_open: bool,
    form_type: FormType,
    current_item: Option<Item>,
    phase: Phase,
    notices: Vec<Notice>,
}

impl<B> DashboardController<B>
where
    B: DashboardBackend,
{
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            cache: QueryCache::new(),
            active_tab: Tab::default(),
            is_form_open: false,
            form_type: FormType::default(),
            current_item: None,
            phase: Phase::default(),
            notices: Vec::new(),
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn is_form_open(&self) -> bool {
        self.is_form_open
    }

    pub fn form_type(&self) -> FormType {
        self.form_type
    }

    pub fn current_item(&self) -> Option<&Item> {
        self.current_item.as_ref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    /// Drains pending notices, oldest first.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Switching tabs closes an open form.
    pub fn select_tab(&mut self, tab: Tab) {
        if tab != self.active_tab {
            self.close_form();
            self.active_tab = tab;
        }
    }

    /// Data for the active tab, fetched only when the cache slot is missing
    /// or stale. The overview tab loads nothing.
    pub async fn load_active(&mut self) -> Result<Option<CollectionData>, DashboardError> {
        let Some(key) = self.active_tab.cache_key() else {
            return Ok(None);
        };

        if let Some(data) = self.cache.fresh(key) {
            return Ok(Some(data.clone()));
        }

        let data = self.backend.fetch(key).await.map_err(|e| {
            warn!(key = %key, "Failed to load collection: {}", e);
            e
        })?;
        self.cache.put(data.clone());

        Ok(Some(data))
    }

    pub fn open_add(&mut self) -> Result<(), DashboardError> {
        if !self.active_tab.is_editable() {
            return Err(FormError::NoForm(self.active_tab).into());
        }

        self.current_item = None;
        self.form_type = FormType::Add;
        self.is_form_open = true;
        Ok(())
    }

    pub fn open_edit(&mut self, item: Item) -> Result<(), DashboardError> {
        if item.tab() != self.active_tab {
            return Err(DashboardError::WrongTab {
                item: item.tab(),
                active: self.active_tab,
            });
        }

        self.current_item = Some(item);
        self.form_type = FormType::Edit;
        self.is_form_open = true;
        Ok(())
    }

    pub fn close_form(&mut self) {
        self.is_form_open = false;
        self.form_type = FormType::Add;
        self.current_item = None;
    }

    /// Form fields for the open form: prefilled from `current_item` in edit
    /// mode, empty otherwise.
    pub fn form_fields(&self) -> FormFields {
        match (&self.form_type, &self.current_item) {
            (FormType::Edit, Some(item)) => FormFields::from_item(item),
            _ => FormFields::new(),
        }
    }

    /// Builds the payload for the active tab from raw fields, then submits.
    pub async fn submit_fields(&mut self, fields: &FormFields) -> Result<(), DashboardError> {
        if !self.is_form_open {
            return Err(DashboardError::FormClosed);
        }
        let payload = fields.build(self.active_tab)?;
        self.submit(payload).await
    }

    pub async fn submit(&mut self, payload: FormPayload) -> Result<(), DashboardError> {
        if !self.is_form_open {
            return Err(DashboardError::FormClosed);
        }
        if payload.tab() != self.active_tab {
            return Err(DashboardError::WrongTab {
                item: payload.tab(),
                active: self.active_tab,
            });
        }

        let target = match (&payload, self.form_type) {
            (FormPayload::Profile(_), _) | (_, FormType::Add) => None,
            (_, FormType::Edit) => Some(
                self.current_item
                    .as_ref()
                    .and_then(Item::id)
                    .ok_or(DashboardError::MissingIdentifier)?,
            ),
        };

        self.phase = Phase::Submitting;
        let result = self.backend.save(payload, target).await;
        self.phase = Phase::Idle;

        match result {
            Ok(()) => {
                self.invalidate_active();
                self.close_form();
                info!(tab = %self.active_tab, "Changes saved");
                self.notices.push(Notice::success("Changes saved"));
                Ok(())
            }
            Err(e) => {
                warn!(tab = %self.active_tab, "Save failed: {}", e);
                self.notices.push(Notice::error(Notice::SAVE_FAILED));
                Err(e.into())
            }
        }
    }

    /// Deletes a record of the active tab. Form state is left alone.
    pub async fn delete(&mut self, id: Uuid) -> Result<(), DashboardError> {
        let tab = self.active_tab;
        if !tab.supports_delete() {
            return Err(DashboardError::NotDeletable(tab));
        }

        self.phase = Phase::Deleting;
        let result = self.backend.delete(tab, id).await;
        self.phase = Phase::Idle;

        match result {
            Ok(()) => {
                self.invalidate_active();
                info!(tab = %tab, id = %id, "Item deleted");
                self.notices.push(Notice::success("Item deleted"));
                Ok(())
            }
            Err(e) => {
                warn!(tab = %tab, id = %id, "Delete failed: {}", e);
                self.notices.push(Notice::error(Notice::DELETE_FAILED));
                Err(e.into())
            }
        }
    }

    /// Local state is reset even when the remote sign-out fails.
    pub async fn sign_out(&mut self) -> Result<(), DashboardError> {
        let result = self.backend.sign_out().await;

        self.cache.clear();
        self.close_form();
        self.active_tab = Tab::Dashboard;
        self.notices.push(Notice::success("Signed out"));

        if let Err(e) = &result {
            warn!("Remote sign-out failed: {}", e);
        }
        result.map_err(DashboardError::from)
    }

    fn invalidate_active(&mut self) {
        if let Some(key) = self.active_tab.cache_key() {
            self.cache.invalidate(key);
        }
    }
}
