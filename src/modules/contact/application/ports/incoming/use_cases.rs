use async_trait::async_trait;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::contact::domain::Contact;
use crate::shared::ContentError;

/// Raw contact form fields as posted by a visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
pub struct ContactForm {
    #[schema(example = "Bo")]
    pub name: String,
    #[schema(example = "bo@example.com")]
    pub email: String,
    #[schema(example = "Loved the project write-ups!")]
    pub message: String,
}

#[async_trait]
pub trait SubmitContactUseCase: Send + Sync {
    async fn execute(&self, form: ContactForm) -> Result<Contact, ContentError>;
}

#[async_trait]
pub trait ListContactsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Contact>, ContentError>;
}
