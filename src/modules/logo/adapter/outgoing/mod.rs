pub mod logo_repository_postgres;
pub mod object_storage_http;
pub mod sea_orm_entity;

pub use logo_repository_postgres::LogoRepositoryPostgres;
pub use object_storage_http::ObjectStorageHttp;
