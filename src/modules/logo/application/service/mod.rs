mod get_logo_service;
mod upload_logo_service;

pub use get_logo_service::GetLogoService;
pub use upload_logo_service::UploadLogoService;
