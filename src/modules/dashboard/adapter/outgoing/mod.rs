pub mod content_store_backend;

pub use content_store_backend::ContentStoreBackend;
