pub mod entities;

pub use entities::{Skill, SkillCategory};
