mod get_logo;
mod upload_logo;

pub use get_logo::*;
pub use upload_logo::*;
