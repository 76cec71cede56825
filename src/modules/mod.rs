pub mod auth;
pub mod contact;
pub mod dashboard;
pub mod education;
pub mod experience;
pub mod logo;
pub mod profile;
pub mod project;
pub mod skill;
