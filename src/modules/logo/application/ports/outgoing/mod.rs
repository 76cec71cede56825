pub mod logo_repository;
pub mod object_storage;

pub use logo_repository::{LogoRepository, LogoRepositoryError, NewLogoRecord};
pub use object_storage::{ObjectStorage, StorageError};
