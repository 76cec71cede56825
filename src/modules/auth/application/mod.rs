pub mod auth_use_cases;
pub mod ports;
pub mod session_manager;
pub mod use_cases;

pub use auth_use_cases::AuthUseCases;
pub use session_manager::SessionManager;
