mod login;
mod logout;
mod session;

pub use login::*;
pub use logout::*;
pub use session::*;
