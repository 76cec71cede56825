pub mod entities;
pub mod upload_policy;

pub use entities::{logo_public_url, Logo, LogoAsset, PublicUrlBase};
pub use upload_policy::{LogoUploadError, LogoUploadPolicy};
