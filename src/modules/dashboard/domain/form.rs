use std::collections::BTreeMap;

use thiserror::Error;

use crate::dashboard::domain::collection::Item;
use crate::dashboard::domain::tab::Tab;
use crate::education::application::ports::incoming::NewEducation;
use crate::experience::application::ports::incoming::NewExperience;
use crate::profile::application::ports::incoming::ProfileUpdate;
use crate::project::application::ports::incoming::NewProject;
use crate::shared::{join_list, ListInput, COMMA, SLASH};
use crate::skill::application::ports::incoming::NewSkill;
use crate::skill::domain::SkillCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormType {
    #[default]
    Add,
    Edit,
}

/// A submitted form, one variant per editable collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPayload {
    Profile(ProfileUpdate),
    Experience(NewExperience),
    Education(NewEducation),
    Skill(NewSkill),
    Project(NewProject),
}

impl FormPayload {
    pub fn tab(&self) -> Tab {
        match self {
            FormPayload::Profile(_) => Tab::Profile,
            FormPayload::Experience(_) => Tab::Experience,
            FormPayload::Education(_) => Tab::Education,
            FormPayload::Skill(_) => Tab::Skills,
            FormPayload::Project(_) => Tab::Projects,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("The {0} tab has no form")]
    NoForm(Tab),

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{field} must be a whole number")]
    NotANumber { field: &'static str },

    #[error("Unknown skill category: {0}")]
    UnknownCategory(String),
}

/// Raw text inputs of the add/edit form, keyed by field name.
///
/// List fields hold the delimited display string (`"Go, SQL"`, or
/// `"Engineer / Writer"` for profile titles).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    values: BTreeMap<String, String>,
}

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.values.insert(name.to_string(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Prefills the form from the record being edited.
    pub fn from_item(item: &Item) -> Self {
        let mut fields = Self::new();
        match item {
            Item::Profile(p) => {
                fields.set("full_name", p.full_name.clone());
                fields.set("title", join_list(&p.title, SLASH));
                fields.set_optional("github", p.github.as_deref());
                fields.set_optional("linkedin", p.linkedin.as_deref());
                fields.set_optional("email", p.email.as_deref());
            }
            Item::Experience(e) => {
                fields.set("title", e.title.clone());
                fields.set("company", e.company.clone());
                fields.set("duration", e.duration.clone());
                fields.set_optional("description", e.description.as_deref());
                fields.set_optional("location", e.location.as_deref());
                fields.set("achievements", join_list(&e.achievements, COMMA));
                fields.set("tech", join_list(&e.tech, COMMA));
            }
            Item::Education(e) => {
                fields.set("degree", e.degree.clone());
                fields.set("university", e.university.clone());
                fields.set("duration", e.duration.clone());
                fields.set("cgpa", e.cgpa.clone());
                fields.set("achievements", join_list(&e.achievements, COMMA));
            }
            Item::Skill(s) => {
                fields.set("name", s.name.clone());
                fields.set("level", s.level.to_string());
                fields.set("category", s.category.as_str());
            }
            Item::Project(p) => {
                fields.set("title", p.title.clone());
                fields.set("description", p.description.clone());
                fields.set("tech", join_list(&p.tech, COMMA));
                fields.set_optional("github", p.github.as_deref());
                fields.set_optional("demo", p.demo.as_deref());
            }
        }
        fields
    }

    /// Builds the typed payload for `tab`.
    ///
    /// Only presence and parsing are checked here; content rules stay with
    /// the store.
    pub fn build(&self, tab: Tab) -> Result<FormPayload, FormError> {
        let payload = match tab {
            Tab::Profile => FormPayload::Profile(ProfileUpdate {
                full_name: self.required("full_name")?,
                title: self.list("title"),
                github: self.optional("github"),
                linkedin: self.optional("linkedin"),
                email: self.optional("email"),
            }),
            Tab::Experience => FormPayload::Experience(NewExperience {
                title: self.required("title")?,
                company: self.required("company")?,
                duration: self.required("duration")?,
                description: self.optional("description"),
                location: self.optional("location"),
                achievements: self.list("achievements"),
                tech: self.list("tech"),
            }),
            Tab::Education => FormPayload::Education(NewEducation {
                degree: self.required("degree")?,
                university: self.required("university")?,
                duration: self.required("duration")?,
                cgpa: self.required("cgpa")?,
                achievements: self.list("achievements"),
            }),
            Tab::Skills => {
                let level = self.required("level")?;
                let category = self.required("category")?;
                FormPayload::Skill(NewSkill {
                    name: self.required("name")?,
                    level: level
                        .trim()
                        .parse()
                        .map_err(|_| FormError::NotANumber { field: "level" })?,
                    category: category
                        .parse::<SkillCategory>()
                        .map_err(|e| FormError::UnknownCategory(e.0))?,
                })
            }
            Tab::Projects => FormPayload::Project(NewProject {
                title: self.required("title")?,
                description: self.required("description")?,
                tech: self.list("tech"),
                github: self.optional("github"),
                demo: self.optional("demo"),
            }),
            Tab::Dashboard | Tab::Contacts => return Err(FormError::NoForm(tab)),
        };

        Ok(payload)
    }

    fn set_optional(&mut self, name: &str, value: Option<&str>) {
        if let Some(value) = value {
            self.set(name, value);
        }
    }

    fn required(&self, name: &'static str) -> Result<String, FormError> {
        match self.get(name).map(str::trim) {
            Some(value) if !value.is_empty() => Ok(value.to_string()),
            _ => Err(FormError::MissingField(name)),
        }
    }

    fn optional(&self, name: &str) -> Option<String> {
        self.get(name)
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    }

    fn list(&self, name: &str) -> ListInput {
        ListInput::from(self.get(name).unwrap_or_default())
    }
}
