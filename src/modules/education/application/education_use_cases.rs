use std::sync::Arc;

use crate::education::application::ports::incoming::{
    AddEducationUseCase, DeleteEducationUseCase, ListEducationUseCase, UpdateEducationUseCase,
};

#[derive(Clone)]
pub struct EducationUseCases {
    pub list: Arc<dyn ListEducationUseCase + Send + Sync>,
    pub add: Arc<dyn AddEducationUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateEducationUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteEducationUseCase + Send + Sync>,
}
