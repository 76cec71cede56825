use std::sync::Arc;

use crate::contact::application::ports::incoming::{ListContactsUseCase, SubmitContactUseCase};

#[derive(Clone)]
pub struct ContactUseCases {
    pub submit: Arc<dyn SubmitContactUseCase + Send + Sync>,
    pub list: Arc<dyn ListContactsUseCase + Send + Sync>,
}
