use async_trait::async_trait;

use crate::logo::domain::LogoAsset;
use crate::shared::ContentError;

#[async_trait]
pub trait GetLogoUseCase: Send + Sync {
    async fn execute(&self) -> Result<Option<LogoAsset>, ContentError>;
}

#[async_trait]
pub trait UploadLogoUseCase: Send + Sync {
    /// Replaces the current logo, if any.
    async fn execute(&self, png: Vec<u8>) -> Result<LogoAsset, ContentError>;
}
