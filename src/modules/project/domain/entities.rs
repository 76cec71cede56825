use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::domain::entities::UserId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Project {
    pub id: Uuid,
    #[schema(value_type = String)]
    pub user_id: UserId,
    #[schema(example = "Portfolio CMS")]
    pub title: String,
    pub description: String,
    #[schema(example = json!(["Rust", "Postgres"]))]
    pub tech: Vec<String>,
    /// Repository link.
    pub github: Option<String>,
    /// Live demo link.
    pub demo: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
