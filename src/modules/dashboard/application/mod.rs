pub mod controller;
pub mod ports;
pub mod query_cache;

pub use controller::{DashboardController, DashboardError, Phase};
pub use query_cache::QueryCache;
