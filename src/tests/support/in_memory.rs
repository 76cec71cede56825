use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::auth::domain::entities::UserId;
use crate::experience::application::ports::outgoing::{
    CreateExperienceData, ExperienceRepository, ExperienceRepositoryError, PatchExperienceData,
};
use crate::experience::domain::Experience;
use crate::shared::PatchField;

fn apply<T>(target: &mut T, patch: PatchField<T>) {
    if let PatchField::Value(v) = patch {
        *target = v;
    }
}

fn apply_optional<T>(target: &mut Option<T>, patch: PatchField<T>) {
    match patch {
        PatchField::Unset => {}
        PatchField::Null => *target = None,
        PatchField::Value(v) => *target = Some(v),
    }
}

/// Experience table kept in memory, owner scoping included.
#[derive(Clone, Default)]
pub struct InMemoryExperienceRepository {
    rows: Arc<Mutex<Vec<Experience>>>,
    list_calls: Arc<AtomicUsize>,
}

impl InMemoryExperienceRepository {
    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn get(&self, id: Uuid) -> Option<Experience> {
        self.rows.lock().unwrap().iter().find(|e| e.id == id).cloned()
    }

    /// Inserts a row owned by somebody else.
    pub fn insert_foreign(&self, tech: &[&str]) -> Experience {
        let now = Utc::now();
        let row = Experience {
            id: Uuid::new_v4(),
            user_id: UserId::from(Uuid::new_v4()),
            title: "Consultant".to_string(),
            company: "Elsewhere".to_string(),
            duration: "2019-2020".to_string(),
            description: None,
            location: None,
            achievements: vec![],
            tech: tech.iter().map(|t| t.to_string()).collect(),
            created_at: now,
            updated_at: now,
        };
        self.rows.lock().unwrap().push(row.clone());
        row
    }
}

#[async_trait]
impl ExperienceRepository for InMemoryExperienceRepository {
    async fn list(&self) -> Result<Vec<Experience>, ExperienceRepositoryError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn create(
        &self,
        data: CreateExperienceData,
    ) -> Result<Experience, ExperienceRepositoryError> {
        let now = Utc::now();
        let row = Experience {
            id: Uuid::new_v4(),
            user_id: data.owner,
            title: data.title,
            company: data.company,
            duration: data.duration,
            description: data.description,
            location: data.location,
            achievements: data.achievements,
            tech: data.tech,
            created_at: now,
            updated_at: now,
        };
        self.rows.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn patch(
        &self,
        owner: UserId,
        id: Uuid,
        data: PatchExperienceData,
    ) -> Result<Experience, ExperienceRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|e| e.id == id && e.user_id == owner)
            .ok_or(ExperienceRepositoryError::NotFound)?;

        apply(&mut row.title, data.title);
        apply(&mut row.company, data.company);
        apply(&mut row.duration, data.duration);
        apply_optional(&mut row.description, data.description);
        apply_optional(&mut row.location, data.location);
        apply(&mut row.achievements, data.achievements);
        apply(&mut row.tech, data.tech);
        row.updated_at = Utc::now();

        Ok(row.clone())
    }

    async fn delete(&self, owner: UserId, id: Uuid) -> Result<(), ExperienceRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|e| !(e.id == id && e.user_id == owner));
        if rows.len() == before {
            return Err(ExperienceRepositoryError::NotFound);
        }
        Ok(())
    }
}
