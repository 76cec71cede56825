use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::domain::entities::UserId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Education {
    pub id: Uuid,
    #[schema(value_type = String)]
    pub user_id: UserId,
    #[schema(example = "BSc Computer Science")]
    pub degree: String,
    pub university: String,
    #[schema(example = "2016-2020")]
    pub duration: String,
    /// Kept as text, grading scales differ.
    #[schema(example = "3.8/4.0")]
    pub cgpa: String,
    pub achievements: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
