pub mod ports;
pub mod profile_use_cases;
pub mod service;

pub use profile_use_cases::ProfileUseCases;
