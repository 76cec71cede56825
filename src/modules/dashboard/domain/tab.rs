use std::fmt;

/// Dashboard sections. Each content tab reads one collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Dashboard,
    Profile,
    Experience,
    Education,
    Skills,
    Projects,
    Contacts,
}

impl Tab {
    pub const ALL: [Tab; 7] = [
        Tab::Dashboard,
        Tab::Profile,
        Tab::Experience,
        Tab::Education,
        Tab::Skills,
        Tab::Projects,
        Tab::Contacts,
    ];

    /// The collection this tab displays. The overview tab has none.
    pub fn cache_key(self) -> Option<CacheKey> {
        match self {
            Tab::Dashboard => None,
            Tab::Profile => Some(CacheKey::Profile),
            Tab::Experience => Some(CacheKey::Experiences),
            Tab::Education => Some(CacheKey::Education),
            Tab::Skills => Some(CacheKey::Skills),
            Tab::Projects => Some(CacheKey::Projects),
            Tab::Contacts => Some(CacheKey::Contacts),
        }
    }

    /// Whether the tab has an add/edit form.
    pub fn is_editable(self) -> bool {
        !matches!(self, Tab::Dashboard | Tab::Contacts)
    }

    /// Whether records in this tab can be deleted one by one.
    pub fn supports_delete(self) -> bool {
        matches!(
            self,
            Tab::Experience | Tab::Education | Tab::Skills | Tab::Projects
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tab::Dashboard => "dashboard",
            Tab::Profile => "profile",
            Tab::Experience => "experience",
            Tab::Education => "education",
            Tab::Skills => "skills",
            Tab::Projects => "projects",
            Tab::Contacts => "contacts",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Query cache keys, one per backend collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheKey {
    Profile,
    Experiences,
    Education,
    Skills,
    Projects,
    Contacts,
    Logo,
}

impl CacheKey {
    pub fn as_str(self) -> &'static str {
        match self {
            CacheKey::Profile => "profile",
            CacheKey::Experiences => "experiences",
            CacheKey::Education => "education",
            CacheKey::Skills => "skills",
            CacheKey::Projects => "projects",
            CacheKey::Contacts => "contacts",
            CacheKey::Logo => "logo",
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_overview_has_no_collection() {
        let without: Vec<Tab> = Tab::ALL
            .into_iter()
            .filter(|tab| tab.cache_key().is_none())
            .collect();
        assert_eq!(without, vec![Tab::Dashboard]);
    }

    #[test]
    fn test_contacts_are_read_only() {
        assert!(!Tab::Contacts.is_editable());
        assert!(!Tab::Contacts.supports_delete());
        assert!(Tab::Profile.is_editable());
        assert!(!Tab::Profile.supports_delete());
        assert!(Tab::Skills.supports_delete());
    }
}
