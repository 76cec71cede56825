use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::{join_list, SLASH};

/// Site owner profile. One row, keyed by the owner's user id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Profile {
    pub id: Uuid,
    #[schema(example = "Jane Doe")]
    pub full_name: String,
    /// Role titles in display order.
    #[schema(example = json!(["Backend Engineer", "Rustacean"]))]
    pub title: Vec<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub email: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// `"Backend Engineer / Rustacean"`
    pub fn title_line(&self) -> String {
        join_list(&self.title, SLASH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_line_joins_with_slash() {
        let profile = Profile {
            id: Uuid::new_v4(),
            full_name: "Jane Doe".to_string(),
            title: vec!["Backend Engineer".to_string(), "Rustacean".to_string()],
            github: None,
            linkedin: None,
            email: None,
            updated_at: Utc::now(),
        };

        assert_eq!(profile.title_line(), "Backend Engineer / Rustacean");
    }
}
