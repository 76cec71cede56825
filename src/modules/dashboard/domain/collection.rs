use uuid::Uuid;

use crate::contact::domain::Contact;
use crate::dashboard::domain::tab::{CacheKey, Tab};
use crate::education::domain::Education;
use crate::experience::domain::Experience;
use crate::logo::domain::LogoAsset;
use crate::profile::domain::Profile;
use crate::project::domain::Project;
use crate::skill::domain::Skill;

/// What a cache slot holds: the last fetched contents of one collection.
#[derive(Debug, Clone, PartialEq)]
pub enum CollectionData {
    Profile(Option<Profile>),
    Experiences(Vec<Experience>),
    Education(Vec<Education>),
    Skills(Vec<Skill>),
    Projects(Vec<Project>),
    Contacts(Vec<Contact>),
    Logo(Option<LogoAsset>),
}

impl CollectionData {
    pub fn key(&self) -> CacheKey {
        match self {
            CollectionData::Profile(_) => CacheKey::Profile,
            CollectionData::Experiences(_) => CacheKey::Experiences,
            CollectionData::Education(_) => CacheKey::Education,
            CollectionData::Skills(_) => CacheKey::Skills,
            CollectionData::Projects(_) => CacheKey::Projects,
            CollectionData::Contacts(_) => CacheKey::Contacts,
            CollectionData::Logo(_) => CacheKey::Logo,
        }
    }

    /// Record count; singletons count as 0 or 1.
    pub fn len(&self) -> usize {
        match self {
            CollectionData::Profile(p) => usize::from(p.is_some()),
            CollectionData::Experiences(v) => v.len(),
            CollectionData::Education(v) => v.len(),
            CollectionData::Skills(v) => v.len(),
            CollectionData::Projects(v) => v.len(),
            CollectionData::Contacts(v) => v.len(),
            CollectionData::Logo(l) => usize::from(l.is_some()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The record an edit form was opened on.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Profile(Profile),
    Experience(Experience),
    Education(Education),
    Skill(Skill),
    Project(Project),
}

impl Item {
    /// Row identifier used for updates. The profile is keyed by the session
    /// subject instead.
    pub fn id(&self) -> Option<Uuid> {
        match self {
            Item::Profile(_) => None,
            Item::Experience(e) => Some(e.id),
            Item::Education(e) => Some(e.id),
            Item::Skill(s) => Some(s.id),
            Item::Project(p) => Some(p.id),
        }
    }

    pub fn tab(&self) -> Tab {
        match self {
            Item::Profile(_) => Tab::Profile,
            Item::Experience(_) => Tab::Experience,
            Item::Education(_) => Tab::Education,
            Item::Skill(_) => Tab::Skills,
            Item::Project(_) => Tab::Projects,
        }
    }
}
