pub mod entities;

pub use entities::Education;
