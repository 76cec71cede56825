use std::sync::Arc;

use crate::profile::application::ports::incoming::{GetProfileUseCase, UpdateProfileUseCase};

#[derive(Clone)]
pub struct ProfileUseCases {
    pub get: Arc<dyn GetProfileUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateProfileUseCase + Send + Sync>,
}
