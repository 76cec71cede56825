pub mod logo_use_cases;
pub mod ports;
pub mod service;

pub use logo_use_cases::LogoUseCases;
