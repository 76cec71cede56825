pub mod dashboard_backend;

pub use dashboard_backend::DashboardBackend;
