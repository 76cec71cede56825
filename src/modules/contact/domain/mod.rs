pub mod entities;
pub mod submission;

pub use entities::Contact;
pub use submission::{ContactSubmission, ContactValidationError};
