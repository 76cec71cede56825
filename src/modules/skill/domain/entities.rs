use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::domain::entities::UserId;

pub const MIN_SKILL_LEVEL: i32 = 0;
pub const MAX_SKILL_LEVEL: i32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Language,
    Framework,
}

impl SkillCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Language => "language",
            SkillCategory::Framework => "framework",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown skill category: {0}")]
pub struct UnknownSkillCategory(pub String);

impl FromStr for SkillCategory {
    type Err = UnknownSkillCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "language" => Ok(SkillCategory::Language),
            "framework" => Ok(SkillCategory::Framework),
            other => Err(UnknownSkillCategory(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Skill {
    pub id: Uuid,
    #[schema(value_type = String)]
    pub user_id: UserId,
    #[schema(example = "Rust")]
    pub name: String,
    /// 0 to 100.
    #[schema(example = 85, minimum = 0, maximum = 100)]
    pub level: i32,
    pub category: SkillCategory,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
