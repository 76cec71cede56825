use std::sync::Arc;

use crate::logo::application::ports::incoming::{GetLogoUseCase, UploadLogoUseCase};
use crate::logo::domain::PublicUrlBase;

#[derive(Clone)]
pub struct LogoUseCases {
    pub get: Arc<dyn GetLogoUseCase + Send + Sync>,
    pub upload: Arc<dyn UploadLogoUseCase + Send + Sync>,
    pub urls: PublicUrlBase,
}
