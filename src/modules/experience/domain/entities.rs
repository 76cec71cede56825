use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::domain::entities::UserId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Experience {
    pub id: Uuid,
    #[schema(value_type = String)]
    pub user_id: UserId,
    #[schema(example = "Engineer")]
    pub title: String,
    #[schema(example = "Acme")]
    pub company: String,
    #[schema(example = "2022-2023")]
    pub duration: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub achievements: Vec<String>,
    #[schema(example = json!(["Go", "SQL"]))]
    pub tech: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
