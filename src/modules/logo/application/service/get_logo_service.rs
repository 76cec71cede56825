use async_trait::async_trait;

use crate::logo::application::ports::incoming::GetLogoUseCase;
use crate::logo::application::ports::outgoing::LogoRepository;
use crate::logo::domain::{LogoAsset, PublicUrlBase};
use crate::shared::ContentError;

pub struct GetLogoService<R>
where
    R: LogoRepository,
{
    repository: R,
    urls: PublicUrlBase,
}

impl<R> GetLogoService<R>
where
    R: LogoRepository,
{
    pub fn new(repository: R, urls: PublicUrlBase) -> Self {
        Self { repository, urls }
    }
}

#[async_trait]
impl<R> GetLogoUseCase for GetLogoService<R>
where
    R: LogoRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Option<LogoAsset>, ContentError> {
        let current = self.repository.current().await?;

        Ok(current.map(|logo| self.urls.asset(logo)))
    }
}
