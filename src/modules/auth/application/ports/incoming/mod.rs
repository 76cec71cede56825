pub mod session_provider;

pub use session_provider::{SessionError, SessionProvider};
